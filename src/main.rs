use smarttax_core::features::admins::{AdminHierarchyService, AdminLevel};
use smarttax_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let service = AdminHierarchyService::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize admin hierarchy: {}", e))?;

    let catalog = service.catalog();
    tracing::info!(
        "Geography catalog loaded: {} provinces, {} districts, {} sectors",
        catalog.province_count(),
        catalog.district_count(),
        catalog.sector_count()
    );

    let stats = service.stats();
    for level in AdminLevel::ALL {
        let count = stats.level(level);
        tracing::info!(
            "{} administrators: {} ({} suspended)",
            level,
            count.total,
            count.suspended
        );
    }

    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
