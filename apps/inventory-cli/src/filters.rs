//! Filter form state and debounced commits
//!
//! Mirrors the search-and-filter flow of the web client: criteria are held
//! as text while the user edits, encoded into a URL query string on commit,
//! and commits are debounced so a burst of edits produces a single fetch.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Filter criteria as edited by the user, every field kept as text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub search: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub sort_by: String,
    pub sort_order: String,
}

impl FilterForm {
    /// Initialize the form from an existing URL query string
    ///
    /// Unknown parameters are ignored; a leading `?` is tolerated.
    pub fn from_query_string(query: &str) -> Self {
        let mut form = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_default();
            form.set(key, &value);
        }

        form
    }

    /// Set a field by its query-parameter name
    ///
    /// Returns false for unknown names so callers can report them.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "search" => &mut self.search,
            "category" => &mut self.category,
            "minPrice" => &mut self.min_price,
            "maxPrice" => &mut self.max_price,
            "sortBy" => &mut self.sort_by,
            "sortOrder" => &mut self.sort_order,
            _ => return false,
        };
        *slot = value.to_string();

        true
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Encode the current criteria as a URL query string, omitting
    /// everything empty
    ///
    /// Search text is trimmed, price bounds are included only when they
    /// parse as a number above zero, and sort is emitted only when both
    /// the field and the direction are chosen.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();

        let search = self.search.trim();
        if !search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if !self.category.is_empty() {
            params.push(format!("category={}", urlencoding::encode(&self.category)));
        }
        if let Some(min_price) = positive_price(&self.min_price) {
            params.push(format!("minPrice={}", min_price));
        }
        if let Some(max_price) = positive_price(&self.max_price) {
            params.push(format!("maxPrice={}", max_price));
        }
        if !self.sort_by.is_empty() && !self.sort_order.is_empty() {
            params.push(format!("sortBy={}", urlencoding::encode(&self.sort_by)));
            params.push(format!("sortOrder={}", urlencoding::encode(&self.sort_order)));
        }

        params.join("&")
    }
}

/// Price bounds are forwarded only when they parse as a number above zero
fn positive_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|price| *price > 0.0)
}

/// Debounced commit scheduler
///
/// Holds at most one pending commit. Scheduling a new one aborts the
/// previous pending task, so rapid changes collapse into a single commit
/// carrying the final state.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Quiet period matching the web client's search box
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `commit` to run after the quiet period, superseding any
    /// previously scheduled commit that has not fired yet
    pub fn schedule<F>(&mut self, commit: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commit.await;
        }));
    }

    /// Discard the pending commit, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Wait until the pending commit has fired
    pub async fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.await;
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
