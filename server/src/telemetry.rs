//! Logging and tracing setup.
//!
//! Console logging is always on. If `OTEL_EXPORTER_OTLP_ENDPOINT` is set and
//! reachable, traces and logs are also exported to that collector.

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use opentelemetry::trace::TracerProvider;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::env;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const SERVICE_NAME: &str = "larder-server";

/// Keeps the OpenTelemetry providers alive; call [`TelemetryGuard::shutdown`]
/// before exit to flush pending batches.
#[derive(Default)]
pub struct TelemetryGuard {
    providers: Option<(SdkTracerProvider, SdkLoggerProvider)>,
}

impl TelemetryGuard {
    pub fn shutdown(self) {
        if let Some((traces, logs)) = self.providers {
            if let Err(e) = traces.shutdown() {
                eprintln!("failed to flush traces: {e}");
            }
            if let Err(e) = logs.shutdown() {
                eprintln!("failed to flush logs: {e}");
            }
        }
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn collector_reachable(endpoint: &str) -> bool {
    let host_port = endpoint
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .trim_end_matches('/');

    host_port
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_ok())
        .unwrap_or(false)
}

fn build_providers(
    endpoint: &str,
    service_name: &str,
) -> Result<(SdkTracerProvider, SdkLoggerProvider), BoxError> {
    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name.to_string())
        .build();

    let trace_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let trace_provider = SdkTracerProvider::builder()
        .with_batch_exporter(trace_exporter)
        .with_resource(resource.clone())
        .build();

    let log_exporter = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let log_provider = SdkLoggerProvider::builder()
        .with_batch_exporter(log_exporter)
        .with_resource(resource)
        .build();

    Ok((trace_provider, log_provider))
}

/// Install the global subscriber. Must be called once, inside the tokio runtime.
pub fn init_telemetry() -> TelemetryGuard {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let Some(endpoint) = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok() else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
        tracing::debug!("OTEL_EXPORTER_OTLP_ENDPOINT not set, using console logging only");
        return TelemetryGuard::default();
    };

    if !collector_reachable(&endpoint) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
        tracing::info!(
            "OpenTelemetry endpoint {} not reachable, using console logging only",
            endpoint
        );
        return TelemetryGuard::default();
    }

    let service_name = env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.to_string());

    match build_providers(&endpoint, &service_name) {
        Ok((trace_provider, log_provider)) => {
            let tracer = trace_provider.tracer(SERVICE_NAME);
            opentelemetry::global::set_tracer_provider(trace_provider.clone());

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .with(tracing_opentelemetry::layer().with_tracer(tracer))
                .with(OpenTelemetryTracingBridge::new(&log_provider))
                .init();

            tracing::info!(
                "OpenTelemetry enabled, exporting traces and logs to {} as {}",
                endpoint,
                service_name
            );
            TelemetryGuard {
                providers: Some((trace_provider, log_provider)),
            }
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .init();
            tracing::warn!(error = %e, "failed to build OTLP exporters, using console logging only");
            TelemetryGuard::default()
        }
    }
}

/// Wrap the router in per-request spans named after the matched route.
/// Requests that match no route (static files) get trace-level spans and no
/// completion log.
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                match request.extensions().get::<MatchedPath>() {
                    Some(matched_path) => tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path.as_str(),
                    ),
                    None => tracing::trace_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    ),
                }
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                    let status = response.status().as_u16();
                    if status >= 500 {
                        tracing::error!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request failed with server error"
                        );
                        return;
                    }
                    if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
                        return;
                    }
                    tracing::info!(
                        status = %status,
                        latency_ms = %latency.as_millis(),
                        "request completed"
                    );
                },
            )
            .on_failure(
                |error: tower_http::classify::ServerErrorsFailureClass,
                 latency: Duration,
                 _span: &Span| {
                    tracing::error!(
                        error = %error,
                        latency_ms = %latency.as_millis(),
                        "request failed"
                    );
                },
            ),
    )
}
