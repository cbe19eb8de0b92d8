//! Load-more expansion loop for the paginated episode archive.

use std::time::Duration;

use crate::config::ScrapeConfig;
use crate::page::PageDriver;

/// Expands the archive by clicking the load-more control until it either
/// disappears or stops producing new items.
///
/// The loop is bounded by stagnation detection: once the item count fails
/// to grow for more than `load_more_max_attempts` consecutive iterations
/// the loop terminates, whatever the visibility of the control says. A
/// control that never appears means zero iterations.
///
/// Click failures are logged and skipped for that iteration; the page may
/// still be appending content.
///
/// Returns the number of item elements present once expansion has stopped.
///
/// # Errors
///
/// Returns an error only if the page itself can no longer be queried.
pub async fn expand_page(page: &dyn PageDriver, config: &ScrapeConfig) -> crate::Result<usize> {
    let mut visible = page.is_visible(&config.load_more_selector).await?;
    let mut previous_count = 0usize;
    let mut stalled_attempts = 0u32;

    while visible {
        if let Err(e) = page.scroll_and_click(&config.load_more_selector).await {
            log::warn!("error clicking load-more control: {e}");
        }
        tokio::time::sleep(Duration::from_millis(config.load_more_delay_ms)).await;

        let current_count = page.count(&config.item_selector).await?;
        log::info!("found {current_count} download links so far");

        visible = page.is_visible(&config.load_more_selector).await?;

        if current_count == previous_count {
            stalled_attempts += 1;
        } else {
            stalled_attempts = 0;
        }

        if stalled_attempts > config.load_more_max_attempts {
            log::info!("no new items after {stalled_attempts} attempts, stopping expansion");
            break;
        }

        previous_count = current_count;
    }

    page.count(&config.item_selector).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::RawItem;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted page: a sequence of (visible, item_count) observations.
    ///
    /// Each expansion iteration consumes one step; once the script runs out
    /// the last step repeats forever, which models a page that has settled.
    struct ScriptedPage {
        steps: Vec<(bool, usize)>,
        cursor: Mutex<usize>,
        clicks: Mutex<usize>,
        fail_clicks: bool,
    }

    impl ScriptedPage {
        fn new(steps: Vec<(bool, usize)>) -> Self {
            Self {
                steps,
                cursor: Mutex::new(0),
                clicks: Mutex::new(0),
                fail_clicks: false,
            }
        }

        fn current(&self) -> (bool, usize) {
            let cursor = *self.cursor.lock().unwrap();
            self.steps[cursor.min(self.steps.len() - 1)]
        }

        fn clicks(&self) -> usize {
            *self.clicks.lock().unwrap()
        }
    }

    #[async_trait]
    impl PageDriver for ScriptedPage {
        async fn is_visible(&self, _selector: &str) -> crate::Result<bool> {
            Ok(self.current().0)
        }

        async fn scroll_and_click(&self, _selector: &str) -> crate::Result<()> {
            *self.clicks.lock().unwrap() += 1;
            // Advance the script on each click so the post-click count query
            // sees the next observation.
            let mut cursor = self.cursor.lock().unwrap();
            *cursor = (*cursor + 1).min(self.steps.len() - 1);
            if self.fail_clicks {
                return Err(crate::Error::Download("click intercepted".to_string()));
            }
            Ok(())
        }

        async fn count(&self, _selector: &str) -> crate::Result<usize> {
            Ok(self.current().1)
        }

        async fn collect_items(
            &self,
            _selector: &str,
            _link_attribute: &str,
            _metadata_attribute: &str,
        ) -> crate::Result<Vec<RawItem>> {
            Ok(Vec::new())
        }
    }

    fn fast_config() -> ScrapeConfig {
        ScrapeConfig {
            load_more_delay_ms: 0,
            load_more_max_attempts: 2,
            ..ScrapeConfig::default()
        }
    }

    #[tokio::test]
    async fn control_never_appears_means_zero_iterations() {
        let page = ScriptedPage::new(vec![(false, 7)]);
        let count = expand_page(&page, &fast_config()).await.unwrap();
        assert_eq!(count, 7);
        assert_eq!(page.clicks(), 0);
    }

    #[tokio::test]
    async fn loop_stops_when_control_hides() {
        let page = ScriptedPage::new(vec![(true, 0), (true, 10), (true, 20), (false, 30)]);
        let count = expand_page(&page, &fast_config()).await.unwrap();
        assert_eq!(count, 30);
        assert_eq!(page.clicks(), 3);
    }

    #[tokio::test]
    async fn stagnation_bounds_a_control_that_never_hides() {
        // Count grows once, then freezes while the control stays visible.
        let page = ScriptedPage::new(vec![(true, 0), (true, 10), (true, 10)]);
        let count = expand_page(&page, &fast_config()).await.unwrap();
        assert_eq!(count, 10);
        // One productive click plus (max_attempts + 1) stalled iterations.
        assert_eq!(page.clicks(), 4);
    }

    #[tokio::test]
    async fn progress_resets_the_stagnation_counter() {
        let page = ScriptedPage::new(vec![
            (true, 0),
            (true, 10),
            (true, 10), // stall 1
            (true, 10), // stall 2
            (true, 20), // progress again
            (false, 20),
        ]);
        let count = expand_page(&page, &fast_config()).await.unwrap();
        assert_eq!(count, 20);
        assert_eq!(page.clicks(), 5);
    }

    #[tokio::test]
    async fn click_failures_do_not_abort_expansion() {
        let mut page = ScriptedPage::new(vec![(true, 0), (true, 5), (false, 5)]);
        page.fail_clicks = true;
        let count = expand_page(&page, &fast_config()).await.unwrap();
        assert_eq!(count, 5);
        assert!(page.clicks() >= 1);
    }
}
