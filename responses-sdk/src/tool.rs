use crate::api::{FunctionTool, Tool};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// A local capability the model may request by name. Any type that
/// implements `ResponseTool` can be declared on a request and dispatched by
/// [`crate::ToolDispatcher`].
#[async_trait]
pub trait ResponseTool: Send + Sync {
    /// Name of the tool.
    fn name(&self) -> String;

    /// A description of the tool to instruct the model how and when to use
    /// it.
    fn description(&self) -> String;

    /// The JSON schema of the parameters that the tool accepts. The type
    /// must be "object".
    fn parameters(&self) -> Value;

    /// Execute the tool with the serialized arguments from a function call.
    ///
    /// A returned error does not abort the conversation: the dispatch loop
    /// feeds the error text back to the model as the tool's output.
    async fn execute(&self, arguments: &str) -> Result<String, BoxedError>;
}

impl Debug for dyn ResponseTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseTool")
            .field("name", &self.name())
            .field("description", &self.description())
            .field("parameters", &self.parameters())
            .finish()
    }
}

impl From<&dyn ResponseTool> for Tool {
    fn from(tool: &dyn ResponseTool) -> Self {
        Self::Function(FunctionTool {
            name: tool.name(),
            description: Some(tool.description()),
            parameters: Some(tool.parameters()),
            strict: Some(true),
        })
    }
}
