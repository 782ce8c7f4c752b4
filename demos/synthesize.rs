//! Authenticate, list voices, and synthesize one line of speech.
//!
//! Credentials come from the environment:
//!
//! ```bash
//! REPLICA_CLIENT_ID=... REPLICA_CLIENT_SECRET=... cargo run --example synthesize
//! ```

use replica_api::{AudioExtension, Client, SpeechRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut client = Client::builder().build()?;

    client.authenticate().await?;
    println!("Access token: {}", client.access_token());

    let voices = client.list_voices().await?;
    for (uuid, name) in &voices {
        println!("{uuid}  {name}");
    }

    let speaker_id = voices
        .keys()
        .next()
        .ok_or("no voices available for this account")?;

    let request = SpeechRequest::new("This is just a test.", speaker_id, AudioExtension::Mp3)
        .bit_rate(128)
        .sample_rate(44_100);

    let urls = client.synthesize(&request).await?;
    for (label, url) in &urls {
        println!("{label}: {url}");
    }

    Ok(())
}
