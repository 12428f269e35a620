pub use sea_orm_migration::prelude::*;

mod m001_validation_reports;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m001_validation_reports::Migration)]
    }
}
