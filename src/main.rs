use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use windsock::{DashboardConfig, WindDashboard, default_catalog, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "windsock=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::default();
    config.validate()?;
    tracing::info!(
        latitude = config.latitude,
        longitude = config.longitude,
        horizon_days = config.horizon_days,
        "starting windsock dashboard backend"
    );

    let dashboard = Arc::new(WindDashboard::new(config, default_catalog()));
    web::run(dashboard, 8080).await
}
