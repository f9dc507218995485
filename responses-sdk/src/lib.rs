mod client;
mod config;
mod dispatch;
mod errors;
mod schema;
mod tool;

pub mod api;
pub mod files;

pub use client::{ResponsesApi, ResponsesClient, ResponsesClientOptions};
pub use config::Config;
pub use dispatch::ToolDispatcher;
pub use errors::{ResponsesError, ResponsesResult};
pub use schema::json_schema_for;
pub use tool::{BoxedError, ResponseTool};
