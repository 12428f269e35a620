use crate::models::ChatMessage;
use anyhow::Result;
use async_trait::async_trait;

/// 文本补全客户端 trait。
///
/// 服务端以 `Arc<dyn CompletionClient>` 注入路由状态，
/// 测试中用 mock 实现替换真实远端调用。
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 远端服务名称（日志用）
    fn provider(&self) -> &str;

    /// 发起一次补全调用，返回第一个候选的文本内容。
    ///
    /// 失败原因（网络错误、模型名无效、配额超限、响应格式异常）不作区分，
    /// 调用方只需要知道"失败了"。超过 `max_tokens` 时输出被截断而非重试。
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        max_tokens: u32,
    ) -> Result<String>;
}
