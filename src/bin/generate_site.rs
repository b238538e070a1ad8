//! Generate the WolfStack landing page
//!
//! Renders the page and writes it to OUTPUT_DIR.
//! Run with: cargo run --features site --bin generate_site

use std::rc::Rc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wolfstack_site::config::SiteConfig;
use wolfstack_site::page::{ContentPage, MemoryViewport};
use wolfstack_site::site;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wolfstack_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  OUTPUT_DIR: {}", config.output_dir.display());
    tracing::info!("  ASSET_BASE: {}", config.asset_base);
    if let Some(path) = &config.content_file {
        tracing::info!("  CONTENT_FILE: {}", path.display());
    }
    tracing::info!("  FORMATS: {:?}", config.formats);

    // Dry-run the mount lifecycle against an in-process viewport.
    let content = site::load_content(&config)?;
    let viewport = MemoryViewport::shared();
    let mut page = ContentPage::new(content);
    page.mount(Rc::clone(&viewport));
    page.unmount();
    anyhow::ensure!(
        viewport.borrow().active_subscriptions() == 0,
        "scroll subscription leaked after unmount"
    );

    let written = site::build_site(&config)?;
    tracing::info!("Done! Wrote {} files.", written.len());
    Ok(())
}
