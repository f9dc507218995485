use crate::{
    api::{
        Response, ResponseCreateParams, ResponseFunctionCall, ResponseInputItem,
        ResponseOutputItem, ResponsesInput, Tool,
    },
    client::ResponsesApi,
    errors::ResponsesResult,
    tool::{BoxedError, ResponseTool},
};
use std::sync::Arc;
use tracing::debug;

/// Runs one round of tool execution against a response.
///
/// If the response requested no function calls, its text output is final and
/// no further request is made. Otherwise every function call is executed
/// locally and the results are submitted on exactly one follow-up request
/// that chains the conversation and declares no tools, forcing a terminal
/// answer. Chained multi-round tool calls are out of scope.
pub struct ToolDispatcher {
    api: Arc<dyn ResponsesApi>,
    tools: Vec<Box<dyn ResponseTool>>,
}

impl ToolDispatcher {
    #[must_use]
    pub fn new(api: Arc<dyn ResponsesApi>, tools: Vec<Box<dyn ResponseTool>>) -> Self {
        Self { api, tools }
    }

    /// The function declarations for every registered tool, for inclusion in
    /// a request's tool list.
    #[must_use]
    pub fn declarations(&self) -> Vec<Tool> {
        self.tools.iter().map(|tool| Tool::from(&**tool)).collect()
    }

    /// Resolve a response to its final text, executing requested tool calls
    /// and submitting their results if there are any.
    ///
    /// `params` must be the request that produced `response`; the follow-up
    /// request reuses its model and sampling parameters.
    pub async fn resolve(
        &self,
        params: &ResponseCreateParams,
        response: Response,
    ) -> ResponsesResult<String> {
        let mut outputs: Vec<ResponseInputItem> = vec![];

        for item in &response.output {
            if let ResponseOutputItem::FunctionCall(call) = item {
                let output = match self.execute(call).await {
                    Ok(result) => result,
                    // Tool failures, including unknown tool names, are
                    // surfaced to the model as that call's output.
                    Err(error) => error.to_string(),
                };
                outputs.push(ResponseInputItem::function_call_output(
                    &call.call_id,
                    output,
                ));
            }
        }

        // No tool calls made, we already have our final response
        if outputs.is_empty() {
            return Ok(response.output_text());
        }

        let mut follow_up = params.clone();
        follow_up.previous_response_id = Some(response.id);
        follow_up.input = Some(ResponsesInput::Items(outputs));
        follow_up.tools = None;

        let final_response = self.api.create_response(follow_up).await?;
        Ok(final_response.output_text())
    }

    async fn execute(&self, call: &ResponseFunctionCall) -> Result<String, BoxedError> {
        debug!(
            name = call.name.as_str(),
            call_id = call.call_id.as_str(),
            "executing tool call"
        );

        let tool = self
            .tools
            .iter()
            .find(|tool| tool.name() == call.name)
            .ok_or_else(|| format!("unknown tool: {}", call.name))?;

        tool.execute(&call.arguments).await
    }
}
