mod modules;

use anyhow::Context;
use livraria_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load livraria settings")?;

    livraria_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        port = settings.server.port,
        "livraria bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    // Serves until the shutdown signal arrives; a failed bind aborts startup.
    livraria_http::start_server(&registry, &settings).await?;

    registry.stop_all().await?;

    tracing::info!("livraria shutdown complete");
    Ok(())
}
