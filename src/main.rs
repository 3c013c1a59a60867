//! JanSetu Identity Service Entry Point
//!
//! This is the main entry point for the JanSetu identity service.
//! It initializes configuration, storage, services, and starts the HTTP
//! server.

use jansetu_identity::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    run().await
}
