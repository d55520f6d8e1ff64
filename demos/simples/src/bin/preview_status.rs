use voat_client::constants::PREVIEW_DOMAIN;
use voat_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Same API, served by the preview environment
    let mut config = Config::new();
    config.rest_api = RestApiConfig::new(PREVIEW_DOMAIN);
    info!("Using {}", config.rest_api.origin());

    let client = VoatClient::anonymous(config)?;
    let status = client.get_system_status().await?;
    info!("System status: {}", status.data);

    let time = client.get_system_time().await?;
    info!("Server time: {}", time.data);

    Ok(())
}
