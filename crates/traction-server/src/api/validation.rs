use crate::api::{require_text, AppError};
use crate::logging::TraceId;
use crate::state::AppState;
use axum::extract::{Extension, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use traction_ai::prompt;
use traction_ai::{ChatMessage, ValidationCategory};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

// ===== 数据结构 =====

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateIdeaRequest {
    /// 创业想法描述
    #[serde(default)]
    pub idea_input: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateMarketSizeRequest {
    /// 目标市场描述
    #[serde(default)]
    pub market_size_input: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateProblemSolutionRequest {
    /// 问题与解决方案描述
    #[serde(default)]
    pub problem_solution_input: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateBusinessModelRequest {
    /// 商业模式描述
    #[serde(default)]
    pub business_model_input: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallReportRequest {
    #[serde(default)]
    pub idea_input: Option<String>,
    #[serde(default)]
    pub market_size_input: Option<String>,
    #[serde(default)]
    pub problem_solution_input: Option<String>,
    #[serde(default)]
    pub business_model_input: Option<String>,
}

/// 单类别验证结果
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationResponse {
    pub validation: String,
}

/// 综合验证报告
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallReportResponse {
    pub overall_report: String,
}

// ===== API 处理函数 =====

/// 按类别调用补全服务；失败时写日志并换成面向调用方的通用提示。
async fn run_validation(
    state: &AppState,
    trace_id: &TraceId,
    category: ValidationCategory,
    messages: Vec<ChatMessage>,
    failure_message: &str,
) -> Result<String, AppError> {
    state
        .completion
        .complete(
            &messages,
            &state.config.openai.model,
            category.default_max_tokens(),
        )
        .await
        .map_err(|e| {
            tracing::error!(
                trace_id = %trace_id.0,
                category = category.as_str(),
                error = %e,
                "Completion call failed"
            );
            AppError::Operation(failure_message.to_string())
        })
}

/// 验证创业想法本身（产品市场契合度、可扩展性、独特性）。
#[utoipa::path(
    post,
    path = "/api/validate-idea",
    tag = "Validation",
    request_body = ValidateIdeaRequest,
    responses(
        (status = 200, description = "验证结果", body = ValidationResponse),
        (status = 400, description = "缺少必填字段"),
        (status = 500, description = "补全服务调用失败")
    )
)]
async fn validate_idea(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
    Json(req): Json<ValidateIdeaRequest>,
) -> Result<Json<ValidationResponse>, AppError> {
    let input = require_text(req.idea_input, "Idea input is required.")?;
    let messages = prompt::validation_messages(ValidationCategory::Idea, &input);
    let validation = run_validation(
        &state,
        &trace_id,
        ValidationCategory::Idea,
        messages,
        "Failed to validate idea.",
    )
    .await?;
    Ok(Json(ValidationResponse { validation }))
}

/// 验证目标市场（市场细节、规模、受众、趋势）。
#[utoipa::path(
    post,
    path = "/api/validate-market-size",
    tag = "Validation",
    request_body = ValidateMarketSizeRequest,
    responses(
        (status = 200, description = "验证结果", body = ValidationResponse),
        (status = 400, description = "缺少必填字段"),
        (status = 500, description = "补全服务调用失败")
    )
)]
async fn validate_market_size(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
    Json(req): Json<ValidateMarketSizeRequest>,
) -> Result<Json<ValidationResponse>, AppError> {
    let input = require_text(req.market_size_input, "Market size input is required.")?;
    let messages = prompt::validation_messages(ValidationCategory::MarketSize, &input);
    let validation = run_validation(
        &state,
        &trace_id,
        ValidationCategory::MarketSize,
        messages,
        "Failed to validate market size.",
    )
    .await?;
    Ok(Json(ValidationResponse { validation }))
}

/// 验证问题陈述与解决方案。
#[utoipa::path(
    post,
    path = "/api/validate-problem-solution",
    tag = "Validation",
    request_body = ValidateProblemSolutionRequest,
    responses(
        (status = 200, description = "验证结果", body = ValidationResponse),
        (status = 400, description = "缺少必填字段"),
        (status = 500, description = "补全服务调用失败")
    )
)]
async fn validate_problem_solution(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
    Json(req): Json<ValidateProblemSolutionRequest>,
) -> Result<Json<ValidationResponse>, AppError> {
    let input = require_text(
        req.problem_solution_input,
        "Problem & solution input is required.",
    )?;
    let messages = prompt::validation_messages(ValidationCategory::ProblemSolution, &input);
    let validation = run_validation(
        &state,
        &trace_id,
        ValidationCategory::ProblemSolution,
        messages,
        "Failed to validate problem & solution.",
    )
    .await?;
    Ok(Json(ValidationResponse { validation }))
}

/// 验证商业模式（收入来源、可扩展性、竞争格局、差异化）。
#[utoipa::path(
    post,
    path = "/api/validate-business-model",
    tag = "Validation",
    request_body = ValidateBusinessModelRequest,
    responses(
        (status = 200, description = "验证结果", body = ValidationResponse),
        (status = 400, description = "缺少必填字段"),
        (status = 500, description = "补全服务调用失败")
    )
)]
async fn validate_business_model(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
    Json(req): Json<ValidateBusinessModelRequest>,
) -> Result<Json<ValidationResponse>, AppError> {
    let input = require_text(
        req.business_model_input,
        "Business model input is required.",
    )?;
    let messages = prompt::validation_messages(ValidationCategory::BusinessModel, &input);
    let validation = run_validation(
        &state,
        &trace_id,
        ValidationCategory::BusinessModel,
        messages,
        "Failed to validate business model.",
    )
    .await?;
    Ok(Json(ValidationResponse { validation }))
}

/// 基于四项输入生成综合验证报告（不落库）。
#[utoipa::path(
    post,
    path = "/api/overall-validation-report",
    tag = "Validation",
    request_body = OverallReportRequest,
    responses(
        (status = 200, description = "综合验证报告", body = OverallReportResponse),
        (status = 400, description = "四项输入有缺失"),
        (status = 500, description = "补全服务调用失败")
    )
)]
async fn overall_validation_report(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
    Json(req): Json<OverallReportRequest>,
) -> Result<Json<OverallReportResponse>, AppError> {
    const MISSING: &str =
        "All inputs (idea, market size, problem & solution, business model) are required.";
    let idea = require_text(req.idea_input, MISSING)?;
    let market_size = require_text(req.market_size_input, MISSING)?;
    let problem_solution = require_text(req.problem_solution_input, MISSING)?;
    let business_model = require_text(req.business_model_input, MISSING)?;

    let messages = prompt::overall_messages(&idea, &market_size, &problem_solution, &business_model);
    let overall_report = state
        .completion
        .complete(&messages, &state.config.openai.model, 500)
        .await
        .map_err(|e| {
            tracing::error!(
                trace_id = %trace_id.0,
                error = %e,
                "Overall report completion failed"
            );
            AppError::Operation("Failed to generate overall validation report.".to_string())
        })?;

    Ok(Json(OverallReportResponse { overall_report }))
}

pub fn validation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(validate_idea))
        .routes(routes!(validate_market_size))
        .routes(routes!(validate_problem_solution))
        .routes(routes!(validate_business_model))
        .routes(routes!(overall_validation_report))
}
