//! Multi-turn conversation without resending the transcript: the second
//! request chains onto the first via its response identifier.

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

    let mut params = ResponseCreateParams {
        model: "gpt-4o".to_string(),
        temperature: Some(0.7),
        max_output_tokens: Some(10240),
        input: Some("What were the original design goals for the Rust programming language?".into()),
        // Already true by default on the service side; spelled out because
        // continuation depends on it.
        store: Some(true),
        ..Default::default()
    };

    let response = client.create_response(&params).await?;
    println!("{}", response.output_text());

    params.previous_response_id = Some(response.id);
    params.input = Some("Who created it?".into());

    let response = client.create_response(&params).await?;
    println!("{}", response.output_text());

    Ok(())
}
