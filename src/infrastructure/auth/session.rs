//! Dashboard session verification

use std::collections::HashSet;
use std::fmt::{self, Debug};

/// An authenticated dashboard session
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Short, log-safe prefix of the session token
    pub token_hint: String,
    token: String,
}

impl Session {
    fn from_token(token: &str) -> Self {
        Self {
            token_hint: token.chars().take(6).collect(),
            token: token.to_string(),
        }
    }

    /// The verified token, for forwarding to services behind the same session
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token_hint", &self.token_hint)
            .finish_non_exhaustive()
    }
}

/// Decides whether a presented session token is valid
pub trait SessionVerifier: Send + Sync + Debug {
    fn verify(&self, token: &str) -> Option<Session>;
}

/// Verifier accepting a fixed set of tokens from configuration.
///
/// An empty set rejects every token.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionVerifier {
    tokens: HashSet<String>,
}

impl StaticSessionVerifier {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(Into::into)
                .map(|t: String| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl SessionVerifier for StaticSessionVerifier {
    fn verify(&self, token: &str) -> Option<Session> {
        let token = token.trim();
        if token.is_empty() || !self.tokens.contains(token) {
            return None;
        }
        Some(Session::from_token(token))
    }
}
