use crate::api::validation::OverallReportResponse;
use crate::api::{require_text, AppError};
use crate::logging::TraceId;
use crate::state::AppState;
use axum::extract::{Extension, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use traction_ai::prompt;
use traction_common::types::{NewValidationReport, ValidationReportRow};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

// ===== 数据结构 =====

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReportRequest {
    /// 提交给模型的完整想法文本（不经模板加工）
    #[serde(default)]
    pub idea: Option<String>,
    /// 调用方指定的模型名称
    #[serde(default)]
    pub model_name: Option<String>,
    /// 生成长度上限。前端历史原因可能传字符串，也接受数字
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub max_token: Option<Value>,
    /// 提交人姓名
    #[serde(default)]
    pub tester_name: Option<String>,
}

/// `maxToken` 宽松解析：接受 JSON 数字或数字字符串，必须为正且不超过 i32。
/// 解析失败返回 None，由调用方转成 400。
fn parse_max_token(value: &Value) -> Option<i32> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    if parsed >= 1 && parsed <= i64::from(i32::MAX) {
        Some(parsed as i32)
    } else {
        None
    }
}

// ===== API 处理函数 =====

/// 生成分析报告并持久化。
///
/// 与模板类接口不同：模型与 token 上限由调用方指定，想法文本直接作为
/// user 消息发送。补全成功后才写库；补全失败不产生任何记录。
#[utoipa::path(
    post,
    path = "/api/analysis-validation-report",
    tag = "Reports",
    request_body = AnalysisReportRequest,
    responses(
        (status = 200, description = "分析报告（已持久化）", body = OverallReportResponse),
        (status = 400, description = "必填字段缺失或 maxToken 非法"),
        (status = 500, description = "补全或存储失败")
    )
)]
async fn analysis_validation_report(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
    Json(req): Json<AnalysisReportRequest>,
) -> Result<Json<OverallReportResponse>, AppError> {
    const MISSING: &str = "All inputs (idea, modelName, maxToken, testerName) are required.";
    let idea = require_text(req.idea, MISSING)?;
    let model_name = require_text(req.model_name, MISSING)?;
    let tester_name = require_text(req.tester_name, MISSING)?;
    let max_token = req
        .max_token
        .as_ref()
        .ok_or_else(|| AppError::BadRequest(MISSING.to_string()))
        .and_then(|v| {
            parse_max_token(v).ok_or_else(|| {
                AppError::BadRequest("maxToken must be a positive integer.".to_string())
            })
        })?;

    let messages = prompt::analysis_messages(&idea);
    let overall_report = state
        .completion
        .complete(&messages, &model_name, max_token as u32)
        .await
        .map_err(|e| {
            tracing::error!(
                trace_id = %trace_id.0,
                model = %model_name,
                error = %e,
                "Analysis report completion failed"
            );
            AppError::Operation("Failed to generate overall validation report.".to_string())
        })?;

    let new_report = NewValidationReport {
        idea,
        model_name,
        max_token,
        overall_report: overall_report.clone(),
        tester_name,
    };
    let stored = state
        .report_store
        .insert_report(&new_report)
        .await
        .map_err(|e| {
            tracing::error!(trace_id = %trace_id.0, error = %e, "Failed to persist validation report");
            AppError::Operation("Failed to generate overall validation report.".to_string())
        })?;

    tracing::info!(
        trace_id = %trace_id.0,
        report_id = %stored.id,
        model = %stored.model_name,
        "Validation report stored"
    );

    Ok(Json(OverallReportResponse { overall_report }))
}

/// 列出全部验证报告。
///
/// 零条记录按约定返回 404 而非空数组。
#[utoipa::path(
    get,
    path = "/api/validation-reports",
    tag = "Reports",
    responses(
        (status = 200, description = "报告列表", body = Vec<ValidationReportRow>),
        (status = 404, description = "暂无报告"),
        (status = 500, description = "存储查询失败")
    )
)]
async fn list_validation_reports(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ValidationReportRow>>, AppError> {
    let reports = state.report_store.list_reports().await.map_err(|e| {
        tracing::error!(trace_id = %trace_id.0, error = %e, "Failed to fetch validation reports");
        AppError::Operation("Failed to fetch validation reports.".to_string())
    })?;

    if reports.is_empty() {
        return Err(AppError::NotFound("No validation reports found.".to_string()));
    }

    Ok(Json(reports))
}

pub fn report_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(analysis_validation_report))
        .routes(routes!(list_validation_reports))
}

#[cfg(test)]
mod tests {
    use super::parse_max_token;
    use serde_json::json;

    #[test]
    fn parse_max_token_accepts_numeric_strings() {
        assert_eq!(parse_max_token(&json!("100")), Some(100));
        assert_eq!(parse_max_token(&json!(" 250 ")), Some(250));
    }

    #[test]
    fn parse_max_token_accepts_json_numbers() {
        assert_eq!(parse_max_token(&json!(1000)), Some(1000));
    }

    #[test]
    fn parse_max_token_rejects_garbage() {
        assert_eq!(parse_max_token(&json!("lots")), None);
        assert_eq!(parse_max_token(&json!("12.5")), None);
        assert_eq!(parse_max_token(&json!(0)), None);
        assert_eq!(parse_max_token(&json!(-5)), None);
        assert_eq!(parse_max_token(&json!(null)), None);
        assert_eq!(parse_max_token(&json!(["100"])), None);
    }
}
