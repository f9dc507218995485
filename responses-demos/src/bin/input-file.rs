//! Upload a PDF and ask for a summary, referencing the stored file by its
//! identifier in an item-list input.

use dotenvy::dotenv;
use responses_sdk::{
    api::{ResponseCreateParams, ResponseInputContent, ResponseInputItem, ResponsesInput},
    files::FilePurpose,
    BoxedError, Config, ResponsesClient,
};
use std::{env, path::Path, process};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let Some(file_path) = env::args().nth(1) else {
        eprintln!("Usage: input-file <file.pdf>");
        process::exit(2);
    };

    if let Err(error) = run(&file_path).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(file_path: &str) -> Result<(), BoxedError> {
    let path = Path::new(file_path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("invalid file path: {file_path}"))?;

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err("input file must be .pdf".into());
    }

    let config = Config::from_env()?;
    let client = ResponsesClient::from_config(&config);

    let bytes = std::fs::read(path)?;
    let stored_file = client
        .upload_file(file_name, bytes, "application/pdf", FilePurpose::UserData)
        .await?;

    let params = ResponseCreateParams {
        model: "gpt-4o".to_string(),
        temperature: Some(0.7),
        max_output_tokens: Some(512),
        input: Some(ResponsesInput::Items(vec![
            ResponseInputItem::user_message(vec![
                ResponseInputContent::file_id(stored_file.id),
                ResponseInputContent::text(
                    "Provide a one paragraph summary of the provided document.",
                ),
            ]),
        ])),
        ..Default::default()
    };

    let response = client.create_response(&params).await?;

    println!("{}", response.output_text());
    Ok(())
}
