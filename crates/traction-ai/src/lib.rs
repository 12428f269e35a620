pub mod client;
pub mod models;
pub mod prompt;
pub mod providers;

pub use client::CompletionClient;
pub use models::ChatMessage;
pub use prompt::ValidationCategory;
pub use providers::openai::OpenAiClient;
