use barefoot_nomad::logging::{init_tracing, shutdown_tracer};
use barefoot_nomad::metrics::{init_metrics, metrics_app};
use barefoot_nomad::router::init_router;
use barefoot_nomad::state::init_app_state;
use dotenvy::dotenv;
use nomad_config::ServerConfig;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        error!(error = ?e, "Server exited with an error");
        shutdown_tracer().await;
        std::process::exit(1);
    }

    shutdown_tracer().await;
}

async fn run() -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env();

    let state = init_app_state().await?;
    sqlx::migrate!("./migrations").run(&state.db).await?;
    info!("Database migrations applied");

    if let Some(handle) = init_metrics() {
        let metrics_address = server_config.metrics_address();
        match TcpListener::bind(&metrics_address).await {
            Ok(listener) => {
                info!("Metrics available at http://{}/metrics", metrics_address);
                tokio::spawn(async move {
                    if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                        error!(error = %e, "Metrics server stopped");
                    }
                });
            }
            Err(e) => warn!(error = %e, address = %metrics_address, "Metrics server disabled"),
        }
    }

    let app = init_router(state);
    let address = server_config.bind_address();
    let listener = TcpListener::bind(&address).await?;

    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
