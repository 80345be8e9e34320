//! Loading state for the resort list.
//!
//! `ResortQuery` is the screen-facing view of a fetch: the last good data,
//! the last error, and whether a fetch is in flight. A failed fetch clears
//! the data; there is no partial-data fallback.

use log::{info, warn};
use ssr_resort::Resort;
use std::future::Future;

/// Message shown when the resort list cannot be loaded.
pub const LOAD_ERROR: &str = "Error loading resorts";

#[derive(Debug, Default)]
pub struct ResortQuery {
    data: Option<Vec<Resort>>,
    error: Option<String>,
    is_loading: bool,
}

impl ResortQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&[Resort]> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Mark a fetch as started.
    pub fn begin(&mut self) {
        self.is_loading = true;
    }

    /// Record the outcome of a fetch.
    pub fn settle(&mut self, result: anyhow::Result<Vec<Resort>>) {
        self.is_loading = false;
        match result {
            Ok(resorts) => {
                info!("Loaded {} resorts", resorts.len());
                self.data = Some(resorts);
                self.error = None;
            }
            Err(e) => {
                warn!("{}: {:#}", LOAD_ERROR, e);
                self.data = None;
                self.error = Some(format!("{:#}", e));
            }
        }
    }

    /// Run `fetch` and record its outcome.
    ///
    /// Returns the fresh data, or an error carrying [`LOAD_ERROR`] and the cause.
    pub async fn refetch<F, Fut>(&mut self, fetch: F) -> anyhow::Result<&[Resort]>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Vec<Resort>>>,
    {
        self.begin();
        let result = fetch().await;
        self.settle(result);
        match (&self.data, &self.error) {
            (Some(data), _) => Ok(data.as_slice()),
            (None, Some(error)) => Err(anyhow::anyhow!("{}: {}", LOAD_ERROR, error)),
            (None, None) => Err(anyhow::anyhow!(LOAD_ERROR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let query = ResortQuery::new();
        assert!(!query.is_loading());
        assert!(query.data().is_none());
        assert!(query.error().is_none());
    }

    #[test]
    fn begin_marks_loading() {
        let mut query = ResortQuery::new();
        query.begin();
        assert!(query.is_loading());
        query.settle(Ok(vec![Resort::new(1, "Alta")]));
        assert!(!query.is_loading());
        assert_eq!(query.data().map(|d| d.len()), Some(1));
    }

    #[test]
    fn failure_clears_previous_data() {
        let mut query = ResortQuery::new();
        query.settle(Ok(vec![Resort::new(1, "Alta")]));
        query.settle(Err(anyhow::anyhow!("connection refused")));
        assert!(query.data().is_none());
        assert_eq!(query.error(), Some("connection refused"));
    }

    #[tokio::test]
    async fn refetch_recovers_after_error() {
        let mut query = ResortQuery::new();
        let err = query
            .refetch(|| async { Err::<Vec<Resort>, _>(anyhow::anyhow!("timeout")) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error loading resorts: timeout");

        let data = query
            .refetch(|| async { Ok::<_, anyhow::Error>(vec![Resort::new(2, "Snowbird")]) })
            .await
            .unwrap();
        assert_eq!(data[0].name, "Snowbird");
        assert!(query.error().is_none());
    }
}
