use voat_client::application::interfaces::legacy::LegacyService;
use voat_client::application::legacy::LegacyClient;
use voat_client::config::Config;
use voat_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting legacy API example");
    let client = LegacyClient::new(&Config::new())?;

    let frontpage = client.get_frontpage().await?;
    let count = frontpage.as_array().map(Vec::len).unwrap_or_default();
    info!("Frontpage has {} submissions", count);

    let subverses = client.get_default_subverses().await?;
    info!("Default subverses: {}", serde_json::to_string_pretty(&subverses)?);

    Ok(())
}
