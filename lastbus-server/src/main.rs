use std::error::Error;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lastbus_server::catalog::{LanguagePacks, StandDirectory};
use lastbus_server::config::ServerConfig;
use lastbus_server::schedules::{
    DatasetSource, FileScheduleSource, HttpScheduleSource, ScheduleLoader,
};
use lastbus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lastbus_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let stands = StandDirectory::load(config.stands_path())?;
    let languages = LanguagePacks::load(config.languages_path())?;
    tracing::info!(
        stands = stands.len(),
        languages = languages.packs().len(),
        "loaded catalog"
    );

    let source = match config.http_source_config() {
        Some(http) => {
            tracing::info!(base_url = %http.base_url, "fetching schedules over HTTP");
            DatasetSource::Http(HttpScheduleSource::new(http)?)
        }
        None => {
            tracing::info!(dir = %config.datasets_dir().display(), "reading schedules from disk");
            DatasetSource::Files(FileScheduleSource::new(config.datasets_dir()))
        }
    };
    let schedules = ScheduleLoader::new(source, &config.loader_config());

    let report = schedules.warm(&stands.codes()).await;
    for stand in &report.missing {
        tracing::warn!(%stand, "no schedule dataset for stand");
    }

    let state = AppState::new(stands, languages, schedules);
    let app = create_router(state, &config.static_dir).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "LastBus listening on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
