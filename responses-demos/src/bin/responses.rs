//! Send a single prompt and print the text output.

use dotenvy::dotenv;
use responses_sdk::{
    api::ResponseCreateParams, BoxedError, Config, ResponsesClient,
};

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
        max_output_tokens: Some(512),
        input: Some("What were the original design goals for the Rust programming language?".into()),
        ..Default::default()
    };

    let response = client.create_response(&params).await?;

    println!("{}", response.output_text());
    Ok(())
}
