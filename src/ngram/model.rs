//! Context-to-continuation frequency model over token streams.

use std::io::BufRead;

use ahash::AHashMap;
use rand::Rng;

use crate::analysis::normalize::{normalize, read_tokens};
use crate::error::{OrthosError, Result};
use crate::ngram::context::Context;
use crate::sort::top_k::{PqElement, top_k_sort};

/// Frequency counts of observed continuations, keyed by N-token context window.
///
/// The model is built in a single ingestion pass and then used read-only. Every
/// stored context has width exactly N, and every stored count is at least 1.
#[derive(Debug, Clone)]
pub struct ContextModel {
    n: usize,
    map: AHashMap<Context, AHashMap<String, u64>>,
}

impl ContextModel {
    /// Create an empty model with window width `n`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(OrthosError::invalid_argument(
                "context window width must be at least 1",
            ));
        }

        Ok(ContextModel {
            n,
            map: AHashMap::new(),
        })
    }

    /// Build a model from a stream of raw tokens.
    ///
    /// Tokens are normalized and empties dropped. The first `n` surviving tokens
    /// fill the initial window; each later token is recorded as a continuation of
    /// the current window, which then advances past it. A stream that never fills
    /// a window yields an empty model with no diagnostic.
    pub fn from_tokens<I, S>(n: usize, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut model = ContextModel::new(n)?;
        model.ingest(tokens);
        Ok(model)
    }

    /// Build a model from a corpus of whitespace-delimited text.
    pub fn from_corpus(n: usize, text: &str) -> Result<Self> {
        Self::from_tokens(n, text.split_whitespace())
    }

    /// Build a model from a buffered text source.
    pub fn from_reader<R: BufRead>(n: usize, reader: R) -> Result<Self> {
        let tokens = read_tokens(reader)?;
        Self::from_tokens(n, tokens)
    }

    fn ingest<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = tokens
            .into_iter()
            .map(|token| normalize(token.as_ref()))
            .filter(|token| !token.is_empty());

        let mut window = Vec::with_capacity(self.n);
        for token in tokens.by_ref() {
            window.push(token);
            if window.len() == self.n {
                break;
            }
        }
        if window.len() < self.n {
            return;
        }

        let mut context = Context::new(window);
        for token in tokens {
            self.record_occurrence(&context, &token);
            context = context.advance(&token);
        }
    }

    /// Record one observation of `token` immediately following `context`.
    pub fn record_occurrence(&mut self, context: &Context, token: &str) {
        let followers = self.map.entry(context.clone()).or_default();
        *followers.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Sample a continuation of `context` using the supplied generator.
    ///
    /// The draw is uniform among *distinct* continuations, not weighted by count
    /// (an intentional asymmetry with [`ContextModel::ranked_continuations`],
    /// preserved as such). Returns `None` for an unseen context.
    pub fn sample_next_with<R: Rng + ?Sized>(
        &self,
        context: &Context,
        rng: &mut R,
    ) -> Option<&str> {
        let followers = self.map.get(context)?;
        let choice = rng.random_range(0..followers.len());
        followers.keys().nth(choice).map(|token| token.as_str())
    }

    /// [`ContextModel::sample_next_with`] over the thread-local generator.
    pub fn sample_next(&self, context: &Context) -> Option<&str> {
        self.sample_next_with(context, &mut rand::rng())
    }

    /// Up to `k` continuations of `context`, most frequent first.
    ///
    /// An unseen context yields an empty result; `k` beyond the number of
    /// distinct continuations returns all of them. Ties among equal counts may
    /// resolve in any order.
    pub fn ranked_continuations(&self, context: &Context, k: usize) -> Result<Vec<String>> {
        let Some(followers) = self.map.get(context) else {
            return Ok(Vec::new());
        };

        let mut elements: Vec<Option<PqElement<String>>> = followers
            .iter()
            .map(|(token, &count)| Some(PqElement::new(token.clone(), count)))
            .collect();

        let k = k.min(elements.len());
        top_k_sort(&mut elements, k)?;

        Ok(elements
            .into_iter()
            .take(k)
            .flatten()
            .map(|element| element.data)
            .collect())
    }

    /// Raw per-continuation counts for `context`, `None` when unseen.
    pub fn continuation_counts(&self, context: &Context) -> Option<&AHashMap<String, u64>> {
        self.map.get(context)
    }

    /// Window width of this model.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of distinct contexts observed.
    pub fn context_count(&self) -> usize {
        self.map.len()
    }

    /// Check whether nothing was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
