use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub is_dev: bool,
    pub enable_file: bool,
}

/// Console output is always on. The rolling JSON file and the OTLP bridge are
/// added only when asked for.
pub fn init_logger(
    sdk_logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    options: LogOptions,
) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(options.is_dev)
        .with_filter(console_filter);

    let file_layer = options.enable_file.then(|| {
        let log_dir = if options.is_dev { "./logs" } else { "/var/log/app" };
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, log_dir, format!("rust_app_{component}.log"));
        let (file_writer, guard) = non_blocking(file_appender);

        // the writer thread has to outlive main
        std::mem::forget(guard);

        fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"))
    });

    let otel_layer = sdk_logger_provider.map(|provider| {
        let otel_filter = EnvFilter::new("info")
            .add_directive("hyper=off".parse().expect("static directive"))
            .add_directive("opentelemetry=off".parse().expect("static directive"))
            .add_directive("tonic=off".parse().expect("static directive"))
            .add_directive("h2=off".parse().expect("static directive"))
            .add_directive("sqlx=off".parse().expect("static directive"));

        OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter)
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(otel_layer)
        .init();
}
