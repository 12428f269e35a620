use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 已持久化的验证报告记录。
///
/// 对外 JSON 使用 camelCase 字段名，与前端既有约定保持一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReportRow {
    /// 存储层分配的 Snowflake ID
    pub id: String,
    /// 提交给模型的完整创业想法文本
    pub idea: String,
    /// 调用的远端模型名称
    pub model_name: String,
    /// 生成长度上限（正整数）
    pub max_token: i32,
    /// 模型生成的报告全文
    pub overall_report: String,
    /// 提交人姓名
    pub tester_name: String,
    /// 入库时间
    pub created_at: DateTime<Utc>,
}

/// 新建验证报告的输入（id 与 created_at 由存储层分配）。
#[derive(Debug, Clone)]
pub struct NewValidationReport {
    pub idea: String,
    pub model_name: String,
    pub max_token: i32,
    pub overall_report: String,
    pub tester_name: String,
}
