use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m001_validation_reports"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(UP_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DOWN_SQL)
            .await?;
        Ok(())
    }
}

// 报告一经写入不再更新，因此没有 updated_at 列
const UP_SQL: &str = "
CREATE TABLE IF NOT EXISTS validation_reports (
    id TEXT PRIMARY KEY NOT NULL,
    idea TEXT NOT NULL,
    model_name TEXT NOT NULL,
    max_token INTEGER NOT NULL,
    overall_report TEXT NOT NULL,
    tester_name TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_validation_reports_created_at ON validation_reports(created_at);
";

const DOWN_SQL: &str = "
DROP INDEX IF EXISTS idx_validation_reports_created_at;
DROP TABLE IF EXISTS validation_reports;
";
