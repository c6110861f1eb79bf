//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod orion;
pub mod router;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

pub use middleware::RequireSession;
pub use router::create_router_with_state;
pub use state::AppState;
