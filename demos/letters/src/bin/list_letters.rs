use futures::TryStreamExt;
use pingen_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env()?;
    let cancel = CancellationToken::new();
    let paging = PagingRequest::new()
        .sort_by("createdAt", SortDirection::Desc)
        .with_page_limit(20);

    let mut pages = client.letters().get_page_results(Some(paging), &cancel);
    let mut total = 0;
    while let Some(page) = pages.try_next().await? {
        for letter in &page {
            info!(
                "{} {} {}",
                letter.id,
                letter.attributes.status.as_deref().unwrap_or("-"),
                letter.attributes.file_original_name.as_deref().unwrap_or("-")
            );
        }
        total += page.len();
    }
    info!("✓ {} letters listed", total);

    Ok(())
}
