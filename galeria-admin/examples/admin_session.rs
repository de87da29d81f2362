//! Minimal admin session walkthrough
//!
//! Wires configuration from the environment (or a `.env` file) into the two
//! collaborator clients and prints the current catalog.
//!
//! ```bash
//! CATALOG_API_URL=http://localhost:3009/artworks \
//!     cargo run -p galeria-admin --example admin_session
//! ```

use galeria_admin::{AdminSession, init_logger};
use galeria_client::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = Config::from_env();
    if config.catalog_api_url.is_none() {
        tracing::warn!("CATALOG_API_URL is unset; the listing fetch is disabled");
    }

    // One storage handle, constructed once, injected into the session
    let storage = config.build_object_store();
    let catalog = config.build_catalog_client();

    let mut session = AdminSession::new(storage, catalog);
    session.refresh().await?;

    for artwork in session.listing().artworks() {
        println!(
            "{}  {:40}  {}",
            artwork.id,
            artwork.title,
            if artwork.available { "disponible" } else { "vendida" }
        );
    }

    Ok(())
}
