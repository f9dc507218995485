//! Wire types for the Responses API.
//!
//! The service's tagged unions are modeled as explicit Rust enums so a
//! request or response can only hold shapes the endpoint actually accepts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// https://platform.openai.com/docs/api-reference/responses/create

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResponseCreateParams {
    /// Text, or a structured list of input items, used to generate a
    /// response.
    ///
    /// Learn more:
    ///
    /// - [Text inputs and outputs](https://platform.openai.com/docs/guides/text)
    /// - [File inputs](https://platform.openai.com/docs/guides/pdf-files)
    /// - [Conversation state](https://platform.openai.com/docs/guides/conversation-state)
    /// - [Function calling](https://platform.openai.com/docs/guides/function-calling)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ResponsesInput>,

    /// A system (or developer) message inserted into the model's context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    /// An upper bound for the number of tokens that can be generated for a
    /// response, including visible output tokens and reasoning tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Model ID used to generate the response, like `gpt-4o`.
    pub model: String,

    /// The unique ID of the previous response to the model. Use this to
    /// create multi-turn conversations without resending the transcript.
    /// Learn more about
    /// [conversation state](https://platform.openai.com/docs/guides/conversation-state).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_response_id: Option<String>,

    /// Whether to store the generated model response for later retrieval via
    /// API. Defaults to `true` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,

    /// What sampling temperature to use, between 0 and 2. Higher values like
    /// 0.8 will make the output more random, while lower values like 0.2
    /// will make it more focused and deterministic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Configuration options for a text response from the model. Can be plain
    /// text or structured JSON data. Learn more about
    /// [Structured Outputs](https://platform.openai.com/docs/guides/structured-outputs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ResponseTextConfig>,

    /// An array of tools the model may call while generating a response.
    /// Leaving this unset on a follow-up request forces a terminal answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,

    /// An alternative to sampling with temperature, called nucleus sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

/// The `input` union of a create-response request: either a plain prompt
/// string or an ordered list of input items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsesInput {
    Text(String),
    Items(Vec<ResponseInputItem>),
}

impl From<&str> for ResponsesInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ResponsesInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A single entry in an item-list input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseInputItem {
    Message(ResponseInputItemMessage),
    FunctionCallOutput(ResponseFunctionCallOutput),
}

impl ResponseInputItem {
    /// An input message with the `user` role.
    #[must_use]
    pub fn user_message(content: Vec<ResponseInputContent>) -> Self {
        Self::Message(ResponseInputItemMessage {
            content,
            role: "user".to_string(),
        })
    }

    /// The result of a function tool call, keyed by the call identifier the
    /// model generated for it.
    #[must_use]
    pub fn function_call_output(call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self::FunctionCallOutput(ResponseFunctionCallOutput {
            call_id: call_id.into(),
            output: output.into(),
            id: None,
            status: None,
        })
    }
}

/// A message input to the model with a role indicating instruction following
/// hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseInputItemMessage {
    /// A list of one or many input items to the model, containing different
    /// content types.
    pub content: Vec<ResponseInputContent>,

    /// The role of the message input. One of `user`, `system`, or
    /// `developer`.
    pub role: String,
}

/// A content part of an input message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseInputContent {
    InputText(ResponseInputText),
    InputFile(ResponseInputFile),
}

impl ResponseInputContent {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::InputText(ResponseInputText { text: text.into() })
    }

    /// Reference a previously uploaded file by its storage identifier.
    #[must_use]
    pub fn file_id(file_id: impl Into<String>) -> Self {
        Self::InputFile(ResponseInputFile {
            file_id: Some(file_id.into()),
        })
    }
}

/// A text input to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseInputText {
    pub text: String,
}

/// A file input to the model, referenced by storage identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseInputFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

/// The output of a function tool call, fed back to the model on a follow-up
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFunctionCallOutput {
    /// The unique ID of the function tool call generated by the model. Must
    /// be echoed back unchanged from the originating call.
    pub call_id: String,

    /// A string result (or error description) of the function tool call.
    pub output: String,

    /// Populated when this item is returned via API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The status of the item. One of `in_progress`, `completed`, or
    /// `incomplete`. Populated when items are returned via API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A tool the model may call while generating a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    Function(FunctionTool),
    FileSearch(FileSearchTool),
    WebSearchPreview,
}

/// Defines a function in your own code the model can choose to call. Learn
/// more about
/// [function calling](https://platform.openai.com/docs/guides/function-calling).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionTool {
    /// The name of the function to call.
    pub name: String,

    /// A description of the function. Used by the model to determine whether
    /// or not to call the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A JSON schema object describing the parameters of the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    /// Whether to enforce strict parameter validation. Default `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Search the contents of previously uploaded files. Learn more about the
/// [file search tool](https://platform.openai.com/docs/guides/tools-file-search).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSearchTool {
    /// The IDs of the vector stores to search.
    pub vector_store_ids: Vec<String>,

    /// The maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_results: Option<u32>,

    /// A filter over the typed attributes registered with each file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<ComparisonFilter>,
}

/// A single comparison filter, e.g. `file_type eq application/pdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonFilter {
    /// The attribute key to compare against.
    pub key: String,

    /// The comparison operator: one of `eq`, `ne`, `gt`, `gte`, `lt`, `lte`.
    #[serde(rename = "type")]
    pub op: String,

    /// The value to compare the attribute against.
    pub value: AttributeValue,
}

/// A scalar attribute value: string, number, or boolean.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Configuration options for a text response from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTextConfig {
    /// An object specifying the format that the model must output.
    ///
    /// Configuring `{ "type": "json_schema" }` enables Structured Outputs,
    /// which ensures the model will match your supplied JSON schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ResponseFormatTextConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormatTextConfig {
    Text,
    JsonSchema(ResponseFormatJsonSchema),
}

/// JSON Schema response format. Used to generate structured JSON responses.
/// Learn more about
/// [Structured Outputs](https://platform.openai.com/docs/guides/structured-outputs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormatJsonSchema {
    /// The name of the response format. Must be a-z, A-Z, 0-9, or contain
    /// underscores and dashes, with a maximum length of 64.
    pub name: String,

    /// The schema for the response format, described as a JSON Schema object.
    pub schema: Value,

    /// A description of what the response format is for, used by the model to
    /// determine how to respond in the format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether to enable strict schema adherence when generating the output.
    /// Only a subset of JSON Schema is supported when `strict` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Unique identifier for this Response. Usable as the
    /// `previous_response_id` of the next request in the same conversation.
    pub id: String,

    /// Unix timestamp (in seconds) of when this Response was created.
    pub created_at: i64,

    /// Model ID used to generate the response.
    pub model: String,

    /// The object type of this resource - always set to `response`.
    pub object: String,

    /// An array of content items generated by the model. The length and
    /// order of items is dependent on the model's response; prefer
    /// [`Response::output_text`] over indexing into this array directly.
    pub output: Vec<ResponseOutputItem>,

    /// The unique ID of the previous response in the conversation, when the
    /// request chained one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_response_id: Option<String>,

    /// The status of the response generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,

    /// Token usage details for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ResponseUsage>,
}

impl Response {
    /// The concatenated text of every output message, ignoring tool calls
    /// and other item kinds.
    #[must_use]
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for item in &self.output {
            if let ResponseOutputItem::Message(message) = item {
                for content in &message.content {
                    if let ResponseOutputContent::OutputText(part) = content {
                        text.push_str(&part.text);
                    }
                }
            }
        }
        text
    }

    /// Every function tool call the model requested, in output order.
    #[must_use]
    pub fn function_calls(&self) -> Vec<&ResponseFunctionCall> {
        self.output
            .iter()
            .filter_map(|item| {
                if let ResponseOutputItem::FunctionCall(call) = item {
                    Some(call)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// An output item generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseOutputItem {
    Message(ResponseOutputMessage),
    FunctionCall(ResponseFunctionCall),
    FileSearchCall(ResponseFileSearchCall),
    WebSearchCall(ResponseWebSearchCall),
    Reasoning(ResponseReasoningItem),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseOutputMessage {
    /// The unique ID of the output message.
    pub id: String,

    /// The content of the output message.
    pub content: Vec<ResponseOutputContent>,

    /// The role of the output message. Always `assistant`.
    pub role: String,

    /// One of `in_progress`, `completed`, or `incomplete`.
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseOutputContent {
    OutputText(ResponseOutputText),
    Refusal(ResponseOutputRefusal),
}

/// A text output from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseOutputText {
    /// The text output from the model.
    pub text: String,

    /// File and URL citations attached to the text, if any.
    #[serde(default)]
    pub annotations: Vec<Value>,
}

/// A refusal from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseOutputRefusal {
    /// The refusal explanation from the model.
    pub refusal: String,
}

/// A tool call to run a function. See the
/// [function calling guide](https://platform.openai.com/docs/guides/function-calling)
/// for more information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFunctionCall {
    /// A JSON string of the arguments to pass to the function.
    pub arguments: String,

    /// The unique ID of the function tool call generated by the model.
    pub call_id: String,

    /// The name of the function to run.
    pub name: String,

    /// The unique ID of the output item itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// One of `in_progress`, `completed`, or `incomplete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The results of a file search tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFileSearchCall {
    /// The unique ID of the file search tool call.
    pub id: String,

    /// The status of the file search tool call.
    pub status: String,

    /// The queries the model used to search the vector store.
    #[serde(default)]
    pub queries: Vec<String>,
}

/// The results of a web search tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseWebSearchCall {
    /// The unique ID of the web search tool call.
    pub id: String,

    /// The status of the web search tool call.
    pub status: String,
}

/// A description of the chain of thought used by a reasoning model while
/// generating a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseReasoningItem {
    /// The unique identifier of the reasoning content.
    pub id: String,

    /// Reasoning summary content.
    #[serde(default)]
    pub summary: Vec<Value>,

    /// One of `in_progress`, `completed`, or `incomplete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Completed,
    Failed,
    InProgress,
    Cancelled,
    Queued,
    Incomplete,
}

/// Represents token usage details including input tokens, output tokens, and
/// the total tokens used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseUsage {
    /// The number of input tokens.
    pub input_tokens: u32,

    /// The number of output tokens.
    pub output_tokens: u32,

    /// The total number of tokens used.
    pub total_tokens: u32,
}

/// The error body returned by the service on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,

    #[serde(rename = "type")]
    pub error_type: Option<String>,

    pub param: Option<String>,

    pub code: Option<String>,
}
