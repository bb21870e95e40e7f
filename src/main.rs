use std::sync::Arc;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use request_ranker::adapters::http::{ranking_routes, RankingHandlers};
use request_ranker::adapters::observability::telemetry;
use request_ranker::adapters::{
    InMemoryHistoryRepository, InMemoryRequestReader, PostgresHistoryRepository,
    PostgresRequestReader, TracingRankingObserver,
};
use request_ranker::config::AppConfig;
use request_ranker::ports::{HistoryRepository, RequestReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init(&config.server.log_level, config.server.json_logs)?;

    let (history, requests): (Arc<dyn HistoryRepository>, Arc<dyn RequestReader>) =
        match &config.database {
            Some(database) => {
                let pool = database.connect().await?;
                if database.run_migrations {
                    sqlx::migrate!("./migrations").run(&pool).await?;
                    info!("Database migrations applied");
                }
                (
                    Arc::new(PostgresHistoryRepository::new(pool.clone())),
                    Arc::new(PostgresRequestReader::new(pool)),
                )
            }
            None => {
                warn!("No database configured; using in-memory stores");
                (
                    Arc::new(InMemoryHistoryRepository::new()),
                    Arc::new(InMemoryRequestReader::default()),
                )
            }
        };

    let handlers = RankingHandlers::from_ports(
        history,
        requests,
        Arc::new(config.ranking.to_policy()),
        Arc::new(TracingRankingObserver),
    );

    let app = ranking_routes(handlers)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(environment = ?config.server.environment, %addr, "Request ranker listening");

    axum::serve(listener, app).await?;
    Ok(())
}
