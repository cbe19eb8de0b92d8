//! Page automation abstraction and its WebDriver-backed implementation.

use async_trait::async_trait;
use thirtyfour::ChromiumLikeCapabilities;
use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::{By, DesiredCapabilities, WebDriver};

use crate::config::ScrapeConfig;
use crate::extract::RawItem;

/// Abstraction over the page-automation capability.
///
/// The expansion loop and orchestrator only talk to the page through this
/// trait, which keeps both testable without a live browser.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Returns whether an element matching `selector` exists and is displayed.
    ///
    /// An absent element is reported as not visible, not as an error.
    async fn is_visible(&self, selector: &str) -> crate::Result<bool>;

    /// Scrolls the first element matching `selector` into view and clicks it.
    ///
    /// A vanished element is treated as a no-op.
    async fn scroll_and_click(&self, selector: &str) -> crate::Result<()>;

    /// Counts the elements currently matching `selector`.
    async fn count(&self, selector: &str) -> crate::Result<usize>;

    /// Reads the link and metadata attributes off every element matching
    /// `selector`, in DOM order.
    async fn collect_items(
        &self,
        selector: &str,
        link_attribute: &str,
        metadata_attribute: &str,
    ) -> crate::Result<Vec<RawItem>>;
}

/// Launches a browser session and navigates it to the configured page.
///
/// The session runs headless unless `show_browser` is set.
///
/// # Errors
///
/// Returns an error if the WebDriver server is unreachable, the session
/// cannot be created, or navigation fails.
pub async fn launch(config: &ScrapeConfig, show_browser: bool) -> crate::Result<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();
    if !show_browser {
        caps.set_headless()?;
    }

    let driver = WebDriver::new(&config.webdriver_url, caps).await?;
    log::info!("navigating to {}", config.page_url);
    driver.goto(&config.page_url).await?;
    Ok(driver)
}

/// Default [`PageDriver`] implementation over a live WebDriver session.
#[derive(Clone)]
pub struct WebDriverPage {
    driver: WebDriver,
}

impl WebDriverPage {
    /// Wraps an existing WebDriver session.
    #[must_use]
    pub const fn new(driver: WebDriver) -> Self {
        Self { driver }
    }
}

#[async_trait]
impl PageDriver for WebDriverPage {
    async fn is_visible(&self, selector: &str) -> crate::Result<bool> {
        match self.driver.find(By::Css(selector)).await {
            Ok(element) => Ok(element.is_displayed().await?),
            Err(WebDriverError::NoSuchElement(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn scroll_and_click(&self, selector: &str) -> crate::Result<()> {
        let element = match self.driver.find(By::Css(selector)).await {
            Ok(element) => element,
            Err(WebDriverError::NoSuchElement(_)) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        element.scroll_into_view().await?;
        element.click().await?;
        Ok(())
    }

    async fn count(&self, selector: &str) -> crate::Result<usize> {
        Ok(self.driver.find_all(By::Css(selector)).await?.len())
    }

    async fn collect_items(
        &self,
        selector: &str,
        link_attribute: &str,
        metadata_attribute: &str,
    ) -> crate::Result<Vec<RawItem>> {
        let elements = self.driver.find_all(By::Css(selector)).await?;
        let mut items = Vec::with_capacity(elements.len());
        for element in elements {
            items.push(RawItem {
                link: element.attr(link_attribute).await?,
                metadata: element.attr(metadata_attribute).await?,
            });
        }
        Ok(items)
    }
}
