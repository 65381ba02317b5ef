//! Keep-alive Ping
//!
//! Some hosting platforms idle a service that receives no traffic. When a
//! keep-alive URL is configured, a background task requests it on a fixed
//! interval. Failures are logged and the loop continues.

use tokio::task::JoinHandle;

use crate::backend::server::config::KeepAlive;

/// Spawn the ping loop
pub fn spawn_keep_alive(settings: KeepAlive) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut interval = tokio::time::interval(settings.interval);
        // first tick fires immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            match client.get(&settings.url).send().await {
                Ok(response) => {
                    tracing::info!("[KeepAlive] Pinged {}: {}", settings.url, response.status())
                }
                Err(e) => tracing::warn!("[KeepAlive] Ping to {} failed: {}", settings.url, e),
            }
        }
    })
}
