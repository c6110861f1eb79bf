//! API middleware components

pub mod logging;
pub mod metrics;
pub mod session;

pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use session::RequireSession;
