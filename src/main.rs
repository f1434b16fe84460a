use souschef::config::AppConfig;
use souschef::server::build_router;
use souschef::util::{init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // The completion credential is mandatory; refuse to start without it.
    let config = AppConfig::from_env()?;

    if config.image_api_key.is_none() {
        tracing::warn!(
            "OPENAI_API_KEY not set; /generate-image will report a missing credential until it is configured"
        );
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let app = build_router(AppState::new(config));

    tracing::info!("Souschef listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
