use chrono::{Duration, Utc};
use voat_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Logs in when VOAT_SECRET, VOAT_USERNAME and VOAT_PASSWORD are set
    info!("Creating client...");
    let client = VoatClient::new(Config::new()).await?;
    info!("✓ Client created, authenticated: {}", client.is_authenticated().await);

    let options = SearchOptions::new()
        .with_sort(SearchSort::Top)
        .with_span(SearchSpan::Week)
        .with_date(Utc::now() - Duration::days(7))
        .with_count(10);
    let submissions = client.get_submissions("_front", Some(&options)).await?;
    info!("Top submissions: {}", serde_json::to_string_pretty(&submissions.data)?);

    if client.is_authenticated().await {
        let inbox = client
            .get_messages(MessageType::Inbox, MessageState::Unread)
            .await?;
        info!("Unread messages: {}", inbox.data);

        if let Some(data) = client.auth_data().await {
            // can be handed back to VoatClient::with_auth_data to skip the login
            info!("Token expires at {}", data.expires_at());
        }
    }

    Ok(())
}
