//! Print the account behind `CAMPOSCLOUD_API_TOKEN` and its applications.
//!
//! ```sh
//! CAMPOSCLOUD_API_TOKEN=... RUST_LOG=camposcloud_client=debug cargo run --example whoami
//! ```

use camposcloud_client::{Client, ClientConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = Client::from_config(ClientConfig::from_env()?)?;

    let me = client.get_me().await?;
    println!("Hello {}", me.name);

    let list = client.list_applications().await?;
    println!("{} applications, {} RAM in use", list.pagination.total_items, list.total_used_ram);
    for app in &list.applications {
        println!("  {} ({}) - {:?}", app.name, app.id, app.status);
    }

    Ok(())
}
