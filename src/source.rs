use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::{HoshiError, Result};
use crate::types::StarRecord;

/// Something that can hand out a user's stars one page at a time.
#[async_trait]
pub trait StarSource: Send + Sync {
    /// Fetch `page` (1-based) of `user`'s stars. An empty vector means there
    /// are no more pages.
    async fn starred_page(&self, user: &str, page: u32) -> Result<Vec<StarRecord>>;
}

/// Walk pages 1, 2, ... until the first empty page and return every star in
/// fetch order.
///
/// Pages are requested strictly one after another: only an empty page tells
/// us we're done. Any failure aborts the whole walk, as does `cancel`.
pub async fn fetch_all_stars(
    source: &dyn StarSource,
    user: &str,
    cancel: &CancellationToken,
) -> Result<Vec<StarRecord>> {
    let mut stars = Vec::new();
    let mut page = 1;

    loop {
        let batch = tokio::select! {
            _ = cancel.cancelled() => return Err(HoshiError::Interrupted),
            batch = source.starred_page(user, page) => batch?,
        };

        if batch.is_empty() {
            break;
        }

        tracing::debug!(page, count = batch.len(), "fetched stars page");
        stars.extend(batch);
        page += 1;
    }

    tracing::info!(user, total = stars.len(), pages = page - 1, "fetched stars");
    Ok(stars)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::types::fixtures::star;

    /// Serves canned pages and records every page number requested.
    struct FakeSource {
        pages: Vec<Vec<StarRecord>>,
        fail_on: Option<u32>,
        calls: Mutex<Vec<u32>>,
    }

    impl FakeSource {
        fn new(pages: Vec<Vec<StarRecord>>) -> Self {
            Self {
                pages,
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<u32> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StarSource for FakeSource {
        async fn starred_page(&self, _user: &str, page: u32) -> Result<Vec<StarRecord>> {
            self.calls.lock().unwrap().push(page);
            if self.fail_on == Some(page) {
                return Err(HoshiError::Retrieval("boom".into()));
            }
            Ok(self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default())
        }
    }

    /// Never resolves; used to check cancellation.
    struct HangingSource;

    #[async_trait]
    impl StarSource for HangingSource {
        async fn starred_page(&self, _user: &str, _page: u32) -> Result<Vec<StarRecord>> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn concatenates_pages_until_empty() {
        let source = FakeSource::new(vec![
            vec![star(1, "a/one"), star(2, "a/two")],
            vec![star(3, "b/three")],
            vec![],
            vec![star(99, "never/reached")],
        ]);

        let stars = fetch_all_stars(&source, "octocat", &CancellationToken::new())
            .await
            .unwrap();

        let ids: Vec<u64> = stars.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(source.calls(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_first_page_means_no_stars() {
        let source = FakeSource::new(vec![]);
        let stars = fetch_all_stars(&source, "octocat", &CancellationToken::new())
            .await
            .unwrap();
        assert!(stars.is_empty());
        assert_eq!(source.calls(), vec![1]);
    }

    #[tokio::test]
    async fn failure_discards_partial_results() {
        let mut source = FakeSource::new(vec![vec![star(1, "a/one")], vec![star(2, "a/two")]]);
        source.fail_on = Some(2);

        let result = fetch_all_stars(&source, "octocat", &CancellationToken::new()).await;

        assert!(matches!(result, Err(HoshiError::Retrieval(_))));
        assert_eq!(source.calls(), vec![1, 2]);
    }

    #[tokio::test]
    async fn cancellation_interrupts_a_pending_fetch() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = fetch_all_stars(&HangingSource, "octocat", &cancel).await;

        assert!(matches!(result, Err(HoshiError::Interrupted)));
    }

    #[tokio::test]
    async fn fetch_count_is_pages_plus_one() {
        for n in 0..5usize {
            let pages: Vec<Vec<StarRecord>> = (0..n)
                .map(|p| vec![star(p as u64, &format!("o/r{}", p))])
                .collect();
            let source = FakeSource::new(pages);

            let stars = fetch_all_stars(&source, "u", &CancellationToken::new())
                .await
                .unwrap();

            assert_eq!(stars.len(), n);
            assert_eq!(source.calls().len(), n + 1);
        }
    }
}
