mod logs;
mod metrics;
mod otel;
mod shutdown;

pub use self::logs::{LogOptions, init_logger};
pub use self::metrics::{Labels, Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::otel::{OperationTracer, Telemetry, TracingContext};
pub use self::shutdown::shutdown_signal;
