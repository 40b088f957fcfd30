//! Health check endpoint for container orchestration.
//!
//! Returns 200 OK whenever the process can answer HTTP. Used by load balancers
//! and orchestrators as a liveness probe.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
