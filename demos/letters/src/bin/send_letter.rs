use pingen_client::prelude::*;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let path = env::args()
        .nth(1)
        .ok_or("usage: send_letter <file.pdf>")?;
    let content = std::fs::read(&path)?;
    let file_name = std::path::Path::new(&path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("letter.pdf")
        .to_string();

    // Reads PINGEN_* from the environment or .env
    let client = Client::from_env()?;
    let cancel = CancellationToken::new();

    info!("Requesting upload slot");
    let upload = client
        .files()
        .get_upload_path(&cancel)
        .await?
        .into_data()?
        .ok_or("upload slot response carried no data")?
        .data
        .attributes;
    client.files().upload_file(&upload, content, &cancel).await?;
    info!("✓ Uploaded {}", file_name);

    let letter = LetterCreate {
        file_original_name: file_name,
        file_url: upload.url.clone(),
        file_url_signature: upload.url_signature.clone(),
        address_position: AddressPosition::Left,
        auto_send: false,
        ..Default::default()
    };
    let created = client
        .letters()
        .create(letter, Some(new_idempotency_key()), &cancel)
        .await?;
    info!(
        "✓ Letter created with status {} (request {})",
        created.status, created.request_id
    );

    if let Some(letter) = created.data {
        info!("Letter id: {}", letter.data.id);
    }

    Ok(())
}
