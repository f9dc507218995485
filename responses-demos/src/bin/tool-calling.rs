//! Declare a local function tool, let the model request it, execute the
//! call, and resubmit the result for a final answer.

use async_trait::async_trait;
use dotenvy::dotenv;
use responses_sdk::{
    api::{ResponseCreateParams, Tool},
    BoxedError, Config, ResponseTool, ResponsesApi, ResponsesClient, ToolDispatcher,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// A mockup implementation of a stock quote lookup.
struct GetStockPriceTool;

#[derive(Debug, Deserialize)]
struct GetStockPriceArgs {
    symbol: String,
}

#[async_trait]
impl ResponseTool for GetStockPriceTool {
    fn name(&self) -> String {
        "get_stock_price".to_string()
    }

    fn description(&self) -> String {
        "The get_stock_price tool retrieves the current price of a single stock by its ticker symbol".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "The ticker symbol of the stock to retrieve",
                },
            },
            "required": ["symbol"],
            "additionalProperties": false,
        })
    }

    async fn execute(&self, arguments: &str) -> Result<String, BoxedError> {
        let args: GetStockPriceArgs = serde_json::from_str(arguments)
            .map_err(|error| format!("failed to parse get_stock_price arguments: {error}"))?;

        if args.symbol.trim().is_empty() {
            return Err("stock symbol is required".into());
        }

        // Return a static placeholder
        Ok("$198.53 USD".to_string())
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BoxedError> {
    let config = Config::from_env()?;
    let api: Arc<dyn ResponsesApi> = Arc::new(ResponsesClient::from_config(&config));

    let dispatcher = ToolDispatcher::new(api.clone(), vec![Box::new(GetStockPriceTool)]);

    let mut tools = vec![Tool::WebSearchPreview];
    tools.extend(dispatcher.declarations());

    let params = ResponseCreateParams {
        model: "gpt-4o".to_string(),
        temperature: Some(0.7),
        max_output_tokens: Some(512),
        tools: Some(tools),
        input: Some("What's the current stock price for Apple?".into()),
        ..Default::default()
    };

    let response = api.create_response(params.clone()).await?;
    let text = dispatcher.resolve(&params, response).await?;

    println!("{text}");
    Ok(())
}
