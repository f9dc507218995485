use async_trait::async_trait;
use responses_sdk::{
    api::{
        Response, ResponseCreateParams, ResponseFunctionCall, ResponseInputItem,
        ResponseOutputContent, ResponseOutputItem, ResponseOutputMessage, ResponseOutputText,
        ResponseStatus, ResponsesInput, Tool,
    },
    responses_sdk_test::MockResponsesApi,
    BoxedError, ResponseTool, ToolDispatcher,
};
use serde_json::json;
use std::sync::Arc;

/// A tool whose execution yields a fixed result or a fixed error.
struct StaticTool {
    name: &'static str,
    result: Result<&'static str, &'static str>,
}

#[async_trait]
impl ResponseTool for StaticTool {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn description(&self) -> String {
        format!("static test tool {}", self.name)
    }

    fn parameters(&self) -> serde_json::Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    async fn execute(&self, _arguments: &str) -> Result<String, BoxedError> {
        match self.result {
            Ok(output) => Ok(output.to_string()),
            Err(message) => Err(message.into()),
        }
    }
}

fn text_response(id: &str, text: &str) -> Response {
    Response {
        id: id.to_string(),
        created_at: 1_726_000_000,
        model: "gpt-4o".to_string(),
        object: "response".to_string(),
        output: vec![ResponseOutputItem::Message(ResponseOutputMessage {
            id: format!("msg_{id}"),
            content: vec![ResponseOutputContent::OutputText(ResponseOutputText {
                text: text.to_string(),
                annotations: vec![],
            })],
            role: "assistant".to_string(),
            status: "completed".to_string(),
        })],
        previous_response_id: None,
        status: Some(ResponseStatus::Completed),
        usage: None,
    }
}

fn function_call_response(id: &str, calls: &[(&str, &str, &str)]) -> Response {
    Response {
        output: calls
            .iter()
            .map(|(name, call_id, arguments)| {
                ResponseOutputItem::FunctionCall(ResponseFunctionCall {
                    arguments: (*arguments).to_string(),
                    call_id: (*call_id).to_string(),
                    name: (*name).to_string(),
                    id: None,
                    status: Some("completed".to_string()),
                })
            })
            .collect(),
        ..text_response(id, "")
    }
}

fn base_params(tools: Vec<Tool>) -> ResponseCreateParams {
    ResponseCreateParams {
        model: "gpt-4o".to_string(),
        temperature: Some(0.7),
        max_output_tokens: Some(512),
        input: Some("What's the current stock price for Apple?".into()),
        tools: Some(tools),
        ..Default::default()
    }
}

fn stock_price_tool() -> Box<dyn ResponseTool> {
    Box::new(StaticTool {
        name: "get_stock_price",
        result: Ok("$198.53 USD"),
    })
}

fn function_call_outputs(params: &ResponseCreateParams) -> Vec<(String, String)> {
    let Some(ResponsesInput::Items(items)) = &params.input else {
        panic!("expected an item-list input, got {:?}", params.input);
    };
    items
        .iter()
        .map(|item| {
            let ResponseInputItem::FunctionCallOutput(output) = item else {
                panic!("expected a function_call_output item, got {item:?}");
            };
            (output.call_id.clone(), output.output.clone())
        })
        .collect()
}

#[tokio::test]
async fn returns_text_unchanged_when_no_function_calls() {
    let api = Arc::new(MockResponsesApi::new());
    let dispatcher = ToolDispatcher::new(api.clone(), vec![stock_price_tool()]);

    let params = base_params(dispatcher.declarations());
    let response = text_response("resp_1", "Apple trades under AAPL.");

    let text = dispatcher.resolve(&params, response).await.unwrap();

    assert_eq!(text, "Apple trades under AAPL.");
    // No follow-up request was issued.
    assert!(api.tracked_create_params().is_empty());
}

#[tokio::test]
async fn submits_one_result_item_per_function_call() {
    let api = Arc::new(MockResponsesApi::new());
    api.enqueue_create(text_response("resp_2", "done"));

    let dispatcher = ToolDispatcher::new(
        api.clone(),
        vec![
            stock_price_tool(),
            Box::new(StaticTool {
                name: "get_volume",
                result: Ok("12M shares"),
            }),
        ],
    );

    let params = base_params(dispatcher.declarations());
    let response = function_call_response(
        "resp_1",
        &[
            ("get_stock_price", "c1", r#"{"symbol":"AAPL"}"#),
            ("get_volume", "c2", r#"{"symbol":"AAPL"}"#),
        ],
    );

    let text = dispatcher.resolve(&params, response).await.unwrap();
    assert_eq!(text, "done");

    let tracked = api.tracked_create_params();
    assert_eq!(tracked.len(), 1);

    let outputs = function_call_outputs(&tracked[0]);
    assert_eq!(
        outputs,
        vec![
            ("c1".to_string(), "$198.53 USD".to_string()),
            ("c2".to_string(), "12M shares".to_string()),
        ]
    );
}

#[tokio::test]
async fn tool_error_becomes_the_result_output() {
    let api = Arc::new(MockResponsesApi::new());
    api.enqueue_create(text_response("resp_2", "sorry, the lookup failed"));

    let dispatcher = ToolDispatcher::new(
        api.clone(),
        vec![Box::new(StaticTool {
            name: "get_stock_price",
            result: Err("stock symbol is required"),
        })],
    );

    let params = base_params(dispatcher.declarations());
    let response = function_call_response("resp_1", &[("get_stock_price", "c1", "{}")]);

    let text = dispatcher.resolve(&params, response).await.unwrap();
    assert_eq!(text, "sorry, the lookup failed");

    let outputs = function_call_outputs(&api.tracked_create_params()[0]);
    assert_eq!(
        outputs,
        vec![("c1".to_string(), "stock symbol is required".to_string())]
    );
}

#[tokio::test]
async fn unknown_tool_name_reports_an_error_result() {
    let api = Arc::new(MockResponsesApi::new());
    api.enqueue_create(text_response("resp_2", "no such capability"));

    let dispatcher = ToolDispatcher::new(api.clone(), vec![stock_price_tool()]);

    let params = base_params(dispatcher.declarations());
    let response = function_call_response("resp_1", &[("get_weather", "c9", "{}")]);

    let text = dispatcher.resolve(&params, response).await.unwrap();
    assert_eq!(text, "no such capability");

    let outputs = function_call_outputs(&api.tracked_create_params()[0]);
    assert_eq!(
        outputs,
        vec![("c9".to_string(), "unknown tool: get_weather".to_string())]
    );
}

#[tokio::test]
async fn follow_up_chains_the_response_and_declares_no_tools() {
    let api = Arc::new(MockResponsesApi::new());
    api.enqueue_create(text_response("resp_2", "done"));

    let dispatcher = ToolDispatcher::new(api.clone(), vec![stock_price_tool()]);

    let params = base_params(dispatcher.declarations());
    let response =
        function_call_response("resp_1", &[("get_stock_price", "c1", r#"{"symbol":"AAPL"}"#)]);

    dispatcher.resolve(&params, response).await.unwrap();

    let tracked = api.tracked_create_params();
    let follow_up = &tracked[0];
    assert_eq!(follow_up.previous_response_id.as_deref(), Some("resp_1"));
    assert!(follow_up.tools.is_none());
    assert_eq!(follow_up.model, "gpt-4o");
    assert_eq!(follow_up.temperature, Some(0.7));
}

#[tokio::test]
async fn stock_price_scenario_round_trips_call_id_and_output() {
    let api = Arc::new(MockResponsesApi::new());
    api.enqueue_create(text_response(
        "resp_2",
        "Apple is currently trading at $198.53 USD.",
    ));

    let dispatcher = ToolDispatcher::new(api.clone(), vec![stock_price_tool()]);

    let params = base_params(dispatcher.declarations());
    let response =
        function_call_response("resp_1", &[("get_stock_price", "c1", r#"{"symbol":"AAPL"}"#)]);

    let text = dispatcher.resolve(&params, response).await.unwrap();
    assert_eq!(text, "Apple is currently trading at $198.53 USD.");

    let outputs = function_call_outputs(&api.tracked_create_params()[0]);
    assert_eq!(outputs, vec![("c1".to_string(), "$198.53 USD".to_string())]);
}
