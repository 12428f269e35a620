use crate::config::ServerConfig;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use traction_ai::CompletionClient;
use traction_storage::ReportStore;

/// 全部依赖在启动时显式构造并注入；测试中以 mock 客户端替换补全服务。
#[derive(Clone)]
pub struct AppState {
    pub report_store: Arc<ReportStore>,
    pub completion: Arc<dyn CompletionClient>,
    pub start_time: DateTime<Utc>,
    pub config: Arc<ServerConfig>,
}
