//! Lazy page content resolution
//!
//! Pages resolve their content on first navigation. Resolution runs on a
//! spawned task bounded by a timeout and reports back over a channel, so a
//! slow or failing load never blocks the event loop and always ends in an
//! explicit result.

use crate::error::LoadError;
use crate::state::Page;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Static text a page renders around its own widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub help: Vec<String>,
}

/// Resolves the content of a page
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageLoader: Send + Sync {
    async fn load(&self, page: Page) -> Result<PageContent, LoadError>;
}

/// Reads `<dir>/<slug>.json` when a directory is configured, else built-in content
#[derive(Debug, Clone, Default)]
pub struct AssetPageLoader {
    dir: Option<PathBuf>,
}

impl AssetPageLoader {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl PageLoader for AssetPageLoader {
    async fn load(&self, page: Page) -> Result<PageContent, LoadError> {
        let Some(dir) = &self.dir else {
            return Ok(builtin_content(page));
        };

        let path = dir.join(format!("{}.json", page.slug()));
        if !tokio::fs::try_exists(&path).await? {
            tracing::debug!(path = %path.display(), "no page asset, using built-in content");
            return Ok(builtin_content(page));
        }

        let raw = tokio::fs::read_to_string(&path).await?;
        let content: PageContent = serde_json::from_str(&raw)?;
        Ok(content)
    }
}

/// Content shipped with the binary
pub fn builtin_content(page: Page) -> PageContent {
    match page {
        Page::Register => PageContent {
            title: "Register".to_string(),
            subtitle: Some("List your property in three short steps".to_string()),
            help: vec![],
        },
        Page::Login => PageContent {
            title: "Sign In".to_string(),
            subtitle: Some("Sign in to manage your listings".to_string()),
            help: vec![
                "Signing in is not available in this build.".to_string(),
                "Don't have an account yet? Register to get started.".to_string(),
            ],
        },
        Page::CreateProperty => PageContent {
            title: "List a Property".to_string(),
            subtitle: Some("Describe the property you want to list".to_string()),
            help: vec!["Listing creation opens once your account is verified.".to_string()],
        },
    }
}

/// Run a load, failing with [`LoadError::Timeout`] if it exceeds `timeout`
pub async fn load_with_timeout(
    loader: &dyn PageLoader,
    page: Page,
    timeout: Duration,
) -> Result<PageContent, LoadError> {
    match tokio::time::timeout(timeout, loader.load(page)).await {
        Ok(result) => result,
        Err(_) => Err(LoadError::Timeout(timeout.as_millis() as u64)),
    }
}

/// Completion of one load attempt
#[derive(Debug)]
pub struct PageLoaded {
    pub page: Page,
    pub attempt: u32,
    pub result: Result<PageContent, LoadError>,
}

/// Start a load on a background task; the result is sent to `tx`
pub fn spawn_load(
    loader: Arc<dyn PageLoader>,
    page: Page,
    attempt: u32,
    timeout: Duration,
    tx: UnboundedSender<PageLoaded>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // a panicking loader still has to leave the Loading state
        let task = tokio::spawn(async move {
            load_with_timeout(loader.as_ref(), page, timeout).await
        });
        let result = match task.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(?page, attempt, "page loader task failed: {err}");
                Err(LoadError::Aborted)
            }
        };
        if let Err(err) = &result {
            tracing::warn!(?page, attempt, "page load failed: {err}");
        }
        if tx
            .send(PageLoaded {
                page,
                attempt,
                result,
            })
            .is_err()
        {
            tracing::debug!(?page, "page load finished after receiver closed");
        }
    })
}
