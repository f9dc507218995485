//! Constrain the model's answer to a JSON schema generated from a Rust
//! type, letting it research the data with the web search tool first.

use dotenvy::dotenv;
use responses_sdk::{
    api::{
        ResponseCreateParams, ResponseFormatJsonSchema, ResponseFormatTextConfig,
        ResponseTextConfig, Tool,
    },
    json_schema_for, BoxedError, Config, ResponsesClient,
};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct RankingReport {
    /// The index version the results are from in MMMM yyyy format
    index_version: String,
    /// The ordered ranking results
    rankings: Vec<LanguageRanking>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct LanguageRanking {
    /// Programming language name
    name: String,
    /// Where the language ranks in the current index
    current_ranking: u32,
    /// Where the language ranked in the index 12 months prior
    prior_year_ranking: u32,
    /// The popularity share for the programming language
    rating: f64,
    /// The year over year ratings change
    rating_change: f64,
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
    let client = ResponsesClient::from_config(&config);

    let params = ResponseCreateParams {
        model: "gpt-4o".to_string(),
        temperature: Some(0.7),
        max_output_tokens: Some(2048),
        text: Some(ResponseTextConfig {
            format: Some(ResponseFormatTextConfig::JsonSchema(
                ResponseFormatJsonSchema {
                    name: "language-rankings".to_string(),
                    schema: json_schema_for::<RankingReport>(),
                    description: Some(
                        "JSON Schema for programming language popularity ranking results"
                            .to_string(),
                    ),
                    strict: Some(true),
                },
            )),
        }),
        tools: Some(vec![Tool::WebSearchPreview]),
        input: Some("Please provide me with the top ten results from the latest TIOBE index".into()),
        ..Default::default()
    };

    let response = client.create_response(&params).await?;

    // The raw JSON text; the service guarantees it conforms to the schema.
    println!("{}", response.output_text());
    Ok(())
}
