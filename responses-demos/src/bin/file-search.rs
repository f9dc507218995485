//! Upload a PDF, register it with a vector store, and answer a prompt with
//! the file_search tool restricted to PDF attachments.

use dotenvy::dotenv;
use responses_sdk::{
    api::{ComparisonFilter, FileSearchTool, ResponseCreateParams, Tool},
    files::{FilePurpose, VectorStoreFileCreateParams},
    BoxedError, Config, ResponsesClient,
};
use std::{collections::HashMap, env, path::Path, process};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let (Some(file_path), Some(user_prompt)) = (args.next(), args.next()) else {
        eprintln!("Usage: file-search <file.pdf> <user prompt>");
        process::exit(2);
    };

    if let Err(error) = run(&file_path, &user_prompt).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(file_path: &str, user_prompt: &str) -> Result<(), BoxedError> {
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
    let vector_store_id = config.vector_store_id()?.to_string();
    let client = ResponsesClient::from_config(&config);

    let bytes = std::fs::read(path)?;
    let stored_file = client
        .upload_file(file_name, bytes, "application/pdf", FilePurpose::UserData)
        .await?;

    client
        .create_vector_store_file(
            &vector_store_id,
            &VectorStoreFileCreateParams {
                file_id: stored_file.id,
                attributes: Some(HashMap::from([(
                    "file_type".to_string(),
                    "application/pdf".into(),
                )])),
            },
        )
        .await?;

    let params = ResponseCreateParams {
        model: "gpt-4o".to_string(),
        temperature: Some(0.7),
        max_output_tokens: Some(512),
        tools: Some(vec![Tool::FileSearch(FileSearchTool {
            vector_store_ids: vec![vector_store_id],
            max_num_results: Some(10),
            filters: Some(ComparisonFilter {
                key: "file_type".to_string(),
                op: "eq".to_string(),
                value: "application/pdf".into(),
            }),
        })]),
        input: Some(user_prompt.into()),
        ..Default::default()
    };

    let response = client.create_response(&params).await?;

    println!("{}", response.output_text());
    Ok(())
}
