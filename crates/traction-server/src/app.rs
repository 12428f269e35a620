use crate::api;
use crate::logging;
use crate::state::AppState;
use axum::middleware;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Traction Validation API",
        description = "创业想法验证服务：按类别验证输入、生成综合报告并持久化分析结果",
    ),
    tags(
        (name = "Health", description = "服务健康状态"),
        (name = "Validation", description = "单类别验证与综合报告"),
        (name = "Reports", description = "分析报告生成与查询")
    )
)]
struct ApiDoc;

/// 组装 HTTP 应用：API 路由 + OpenAPI 文档 + CORS + 请求日志。
pub fn build_http_app(state: AppState) -> Router {
    let (api_router, route_spec) = api::api_routes().split_for_parts();
    let mut api_spec = ApiDoc::openapi();
    api_spec.merge(route_spec);

    // 前端与后端分开部署，浏览器直连
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_router
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api/openapi.json", api_spec))
        .layer(cors)
        .layer(middleware::from_fn(logging::request_logging))
}
