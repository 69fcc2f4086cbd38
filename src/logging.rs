//! Request logging and tracing setup.
//!
//! Console output is compact and filtered by `RUST_LOG`. Errors and structured
//! JSON logs roll daily under `LOG_DIR` (default `storage/logs`). Spans are
//! exported over OTLP when observability is enabled and the exporter can be
//! built; otherwise tracing continues locally.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::metrics::is_observability_enabled;

const LOG_FILE_PREFIX: &str = "barefoot-nomad";

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Request completed"
        ),
    }

    response
}

fn init_tracer() -> Result<Tracer, TraceError> {
    let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());

    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new(
            "environment",
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        ),
    ]);

    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

pub fn init_tracing() {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string());
    let file_logging = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to create log directory {}: {}", log_dir, e);
            false
        }
    };

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,hyper=info,tonic=info",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let file_layer = file_logging.then(|| {
        let appender =
            RollingFileAppender::new(Rotation::DAILY, &log_dir, format!("{}.log", LOG_FILE_PREFIX));
        fmt::layer()
            .with_writer(appender)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(EnvFilter::new("error"))
    });

    let json_layer = file_logging.then(|| {
        let appender = RollingFileAppender::new(
            Rotation::DAILY,
            &log_dir,
            format!("{}.json", LOG_FILE_PREFIX),
        );
        fmt::layer()
            .json()
            .with_writer(appender)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"))
    });

    let tracer = if is_observability_enabled() {
        init_tracer()
            .inspect_err(|e| {
                eprintln!("Failed to initialize OpenTelemetry: {}. Continuing without it.", e)
            })
            .ok()
    } else {
        None
    };
    let otel_enabled = tracer.is_some();
    let otel_layer = tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .with(otel_layer)
        .init();

    info!(otel_enabled, file_logging, "Tracing initialized");
}

pub async fn shutdown_tracer() {
    info!("Shutting down OpenTelemetry tracer...");
    global::shutdown_tracer_provider();
}
