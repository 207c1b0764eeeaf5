// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{EngineError, JobPageFetcher, RawJobPage};
use crate::utils::retry_policy::RetryPolicy;
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

// Global browser instance to avoid re-launching Chrome on every request.
// This significantly improves performance for browser-based scraping.
static BROWSER_INSTANCE: OnceCell<Browser> = OnceCell::const_new();

// LinkedIn watches for pointerless sessions. Hover the share button and
// click somewhere in the body before reading anything off the page.
const HUMANIZE_SCRIPT: &str = r#"
    (() => {
        const share = document.querySelector('button[aria-label="Share"]');
        if (share) {
            share.dispatchEvent(new MouseEvent('mouseover', { bubbles: true }));
        }
        const target = document.elementFromPoint(100, 200);
        if (target) {
            target.click();
        }
    })()
"#;

// Asynchronously gets or initializes the shared browser instance.
// This function ensures that the browser is launched only once.
pub async fn get_browser() -> Result<&'static Browser, EngineError> {
    BROWSER_INSTANCE
        .get_or_try_init(|| async {
            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(30)); // Default timeout

            // Production environment setup
            builder = builder.arg("--disable-gpu").arg("--disable-dev-shm-usage");

            let (browser, mut handler) =
                Browser::launch(builder.build().map_err(EngineError::Browser)?)
                    .await
                    .map_err(|e| EngineError::Browser(e.to_string()))?;

            // Spawn a handler to process browser events
            tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(browser)
        })
        .await
}

/// 判断页面标题是否表明站点要求登录
///
/// 空标题或包含"sign up"（不区分大小写）的标题视为登录墙
pub fn is_sign_in_wall(title: &str) -> bool {
    title.is_empty() || title.to_lowercase().contains("sign up")
}

async fn close_page(page: Page) {
    if let Err(e) = page.close().await {
        debug!("Failed to close page: {}", e);
    }
}

/// 浏览器引擎
///
/// 基于chromiumoxide实现的职位页面抓取引擎，负责带重试的页面
/// 导航、反检测延迟和页面内容读取
pub struct BrowserEngine {
    settings: ScraperSettings,
}

impl BrowserEngine {
    pub fn new(settings: ScraperSettings) -> Self {
        Self { settings }
    }

    /// 带退避重试地打开职位页面
    ///
    /// 导航失败按指数退避重试，重试耗尽后返回导航失败错误，
    /// 绝不无限循环
    async fn open_page(&self, browser: &Browser, url: &str) -> Result<Page, EngineError> {
        let policy = RetryPolicy::navigation(self.settings.max_retries);
        let timeout_duration = Duration::from_secs(self.settings.navigation_timeout);
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            match self.try_navigate(browser, url, timeout_duration).await {
                Ok(page) => {
                    info!("Successfully opened url: {}", url);
                    return Ok(page);
                }
                Err(e) => {
                    warn!(
                        "Error occurred while opening {} (attempt {}): {}. Retrying...",
                        url, attempt, e
                    );
                    if !policy.should_retry(attempt) {
                        return Err(EngineError::NavigationFailed {
                            url: url.to_string(),
                            attempts: attempt,
                            message: e.to_string(),
                        });
                    }
                    tokio::time::sleep(policy.calculate_backoff(attempt)).await;
                }
            }
        }
    }

    /// 单次导航尝试，整体包裹在超时内
    async fn try_navigate(
        &self,
        browser: &Browser,
        url: &str,
        timeout_duration: Duration,
    ) -> Result<Page, EngineError> {
        tokio::time::timeout(timeout_duration, async {
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))?;

            // goto waits for the load event; wait_for_navigation lets the
            // remaining network traffic settle before we touch the page
            let navigation = async {
                page.goto(url).await?;
                page.wait_for_navigation().await?;
                Ok::<(), chromiumoxide::error::CdpError>(())
            }
            .await;

            if let Err(e) = navigation {
                close_page(page).await;
                return Err(EngineError::Browser(e.to_string()));
            }

            Ok(page)
        })
        .await
        .map_err(|_| EngineError::Timeout)?
    }

    /// 读取页面标题和内容
    ///
    /// 先执行反检测动作并等待其完成，再读取标题。登录墙直接
    /// 返回错误，不做字段提取，也不在引擎内部重试。
    async fn acquire_content(&self, page: &Page) -> Result<RawJobPage, EngineError> {
        self.simulate_human_behavior(page).await;

        let title = page
            .get_title()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?
            .unwrap_or_default();
        debug!("Page title: {}", title);

        if is_sign_in_wall(&title) {
            error!("LinkedIn is asking for sign in. Click on `Submit` again.");
            return Err(EngineError::SignInRequired);
        }

        let content = page
            .content()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        Ok(RawJobPage { title, content })
    }

    /// LinkedIn can detect a bot and asks you to sign in. To overcome that,
    /// simulate human behavior with a random delay and a pointer gesture.
    /// The gesture is awaited before any content is read; its own failures
    /// are logged and ignored.
    async fn simulate_human_behavior(&self, page: &Page) {
        let min = self.settings.humanize_min_secs;
        let max = self.settings.humanize_max_secs;
        let delay = if max > min {
            rand::random_range(min..max)
        } else {
            min
        };

        debug!("Delaying for {:.2} seconds.", delay);
        tokio::time::sleep(Duration::from_secs_f64(delay)).await;

        if let Err(e) = page.evaluate(HUMANIZE_SCRIPT).await {
            warn!("Pointer gesture failed: {}", e);
        }
    }
}

#[async_trait]
impl JobPageFetcher for BrowserEngine {
    /// 执行职位页面抓取
    ///
    /// # 参数
    ///
    /// * `url` - 已通过校验的职位URL
    ///
    /// # 返回值
    ///
    /// * `Ok(RawJobPage)` - 页面标题和HTML内容
    /// * `Err(EngineError)` - 导航失败、登录墙或浏览器错误
    async fn fetch(&self, url: &str) -> Result<RawJobPage, EngineError> {
        let browser = get_browser().await?;
        let page = self.open_page(browser, url).await?;

        let result = self.acquire_content(&page).await;

        // The page is released on every exit path; the shared browser stays up
        close_page(page).await;

        result
    }
}
