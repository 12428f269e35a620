use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, PaginatorTrait};
use traction_common::types::{NewValidationReport, ValidationReportRow};

use crate::entities::validation_report::{self, Entity as ReportEntity};
use crate::error::Result;
use crate::store::ReportStore;

fn model_to_row(m: validation_report::Model) -> ValidationReportRow {
    ValidationReportRow {
        id: m.id,
        idea: m.idea,
        model_name: m.model_name,
        max_token: m.max_token,
        overall_report: m.overall_report,
        tester_name: m.tester_name,
        created_at: m.created_at.with_timezone(&Utc),
    }
}

impl ReportStore {
    /// 写入一条验证报告，id 与 created_at 由存储层分配。
    pub async fn insert_report(&self, new: &NewValidationReport) -> Result<ValidationReportRow> {
        let now = Utc::now().fixed_offset();
        let am = validation_report::ActiveModel {
            id: Set(traction_common::id::next_id()),
            idea: Set(new.idea.clone()),
            model_name: Set(new.model_name.clone()),
            max_token: Set(new.max_token),
            overall_report: Set(new.overall_report.clone()),
            tester_name: Set(new.tester_name.clone()),
            created_at: Set(now),
        };
        let m = am.insert(self.db()).await?;
        Ok(model_to_row(m))
    }

    /// 返回全部报告。不指定排序，顺序即底层扫描顺序。
    pub async fn list_reports(&self) -> Result<Vec<ValidationReportRow>> {
        let rows = ReportEntity::find().all(self.db()).await?;
        Ok(rows.into_iter().map(model_to_row).collect())
    }

    /// 报告总数。
    pub async fn count_reports(&self) -> Result<u64> {
        Ok(ReportEntity::find().count(self.db()).await?)
    }
}
