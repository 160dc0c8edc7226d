//! Fixed-width token windows used as context-model keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::normalize::tokenize;

/// An immutable, ordered window of normalized tokens.
///
/// Contexts compare and hash by content. A model stores windows of one fixed
/// width; [`Context::advance`] preserves that width by dropping the oldest token
/// as it appends the newest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context {
    tokens: Vec<String>,
}

impl Context {
    /// Create a context from already-normalized tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Context { tokens }
    }

    /// Build a context by tokenizing raw text.
    pub fn parse(text: &str) -> Self {
        Context {
            tokens: tokenize(text).collect(),
        }
    }

    /// Produce the successor window: drop the oldest token, append `token`.
    pub fn advance(&self, token: &str) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len());
        tokens.extend(self.tokens.iter().skip(1).cloned());
        tokens.push(token.to_string());
        Context { tokens }
    }

    /// The tokens of this window, oldest first.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Window width.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the window holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
