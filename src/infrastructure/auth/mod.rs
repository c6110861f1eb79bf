//! Authentication infrastructure module
//!
//! Session tokens issued to the dashboard are checked against a verifier.

mod session;

pub use session::{Session, SessionVerifier, StaticSessionVerifier};
