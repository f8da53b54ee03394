use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::capabilities::Notifier;
use crate::client::{BookmarkApi, HttpBookmarkApi};
use crate::config::{StaticConfig, get_config};
use crate::controller::BookmarkListController;

pub struct StartupContext {
    pub config: Arc<StaticConfig>,
    pub api: Arc<dyn BookmarkApi>,
}

impl StartupContext {
    /// Controller wired to this context's API and the given notifier
    pub fn controller(&self, notifier: Arc<dyn Notifier>) -> BookmarkListController {
        BookmarkListController::new(self.api.clone(), notifier)
    }
}

/// CLI / TUI 启动前准备：读取配置并创建 API 客户端
pub fn prepare_startup() -> Result<StartupContext> {
    let config = get_config();
    debug!("Starting pre-startup processing...");

    let api = HttpBookmarkApi::from_config(&config.api)
        .context("Failed to create bookmark API client")?;
    info!(
        "Using bookmark API at {} (timeout {}s)",
        api.base_url(),
        config.api.timeout_secs
    );

    Ok(StartupContext {
        config,
        api: Arc::new(api),
    })
}
