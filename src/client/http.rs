//! HTTP 实现
//!
//! 使用 ureq 的同步 Agent，在 spawn_blocking 中执行请求

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;
use ureq::http::Response;
use url::Url;

use super::{BookmarkApi, ClientError};
use crate::config::{ApiConfig, normalize_base_url};
use crate::errors::BookmarkerError;
use crate::structs::{Bookmark, NewBookmark};

const LIST_PATH: &str = "get-bookmarks/";
const CREATE_PATH: &str = "add-bookmarks/";

/// 错误响应体在错误信息中保留的最大长度
const ERROR_BODY_MAX_CHARS: usize = 200;

/// HTTP bookmark store client
///
/// `Agent` is `Send + Sync` and shares its connection pool across clones.
#[derive(Clone)]
pub struct HttpBookmarkApi {
    agent: Agent,
    base: Url,
}

impl HttpBookmarkApi {
    /// Create a client for `base_url`
    ///
    /// The base is normalised to end with `/` so endpoints keep any path
    /// prefix (e.g. `http://host/api` → `http://host/api/get-bookmarks/`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BookmarkerError> {
        let base = Url::parse(&normalize_base_url(base_url)).map_err(|e| {
            BookmarkerError::config(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(BookmarkerError::config(format!(
                "Invalid API base URL '{}': only http:// and https:// are supported",
                base_url
            )));
        }

        // 非 2xx 状态码由我们自己分类，不作为 ureq 错误
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { agent, base })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, BookmarkerError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|e| ClientError::Validation(format!("Invalid endpoint '{}': {}", path, e)))
    }

    fn delete_path(id: i64) -> String {
        format!("delete-bookmark/{}/", id)
    }

    // ---- blocking request bodies (run inside spawn_blocking) ----

    fn list_sync(agent: &Agent, url: &Url) -> Result<Vec<Bookmark>, ClientError> {
        debug!("GET {}", url);
        let resp = agent
            .get(url.as_str())
            .header("Accept", "application/json")
            .header("User-Agent", user_agent())
            .call()
            .map_err(transport_error)?;
        let resp = check_status(resp)?;
        resp.into_body()
            .read_json::<Vec<Bookmark>>()
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn create_sync(agent: &Agent, url: &Url, request: &NewBookmark) -> Result<(), ClientError> {
        debug!("POST {} url={}", url, request.url);
        let resp = agent
            .post(url.as_str())
            .header("Accept", "application/json")
            .header("User-Agent", user_agent())
            .send_json(request)
            .map_err(transport_error)?;
        check_status(resp).map(|_| ())
    }

    fn delete_sync(agent: &Agent, url: &Url) -> Result<(), ClientError> {
        debug!("DELETE {}", url);
        let resp = agent
            .delete(url.as_str())
            .header("Accept", "application/json")
            .header("User-Agent", user_agent())
            .call()
            .map_err(transport_error)?;
        check_status(resp).map(|_| ())
    }
}

/// 在线程池中执行同步 HTTP 请求
async fn run_blocking<T, F>(f: F) -> Result<T, ClientError>
where
    F: FnOnce() -> Result<T, ClientError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ClientError::TaskJoin(e.to_string()))?
}

fn user_agent() -> String {
    format!("bookmarker/{}", env!("CARGO_PKG_VERSION"))
}

fn transport_error(err: ureq::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

/// 2xx 原样返回，其他状态码读取响应体后转为错误
fn check_status(resp: Response<ureq::Body>) -> Result<Response<ureq::Body>, ClientError> {
    let status = resp.status().as_u16();
    if (200..300).contains(&status) {
        trace!("HTTP {}", status);
        return Ok(resp);
    }

    let body = resp
        .into_body()
        .read_to_string()
        .unwrap_or_default()
        .chars()
        .take(ERROR_BODY_MAX_CHARS)
        .collect::<String>();

    if status == 401 {
        // Logout hook point; no session handling is configured
        warn!("Remote API rejected the request as unauthorized");
    } else {
        warn!("Remote API returned HTTP {}", status);
    }

    Err(ClientError::from_status(status, body.trim().to_string()))
}

#[async_trait]
impl BookmarkApi for HttpBookmarkApi {
    async fn list(&self) -> Result<Vec<Bookmark>, ClientError> {
        let agent = self.agent.clone();
        let url = self.endpoint(LIST_PATH)?;
        run_blocking(move || Self::list_sync(&agent, &url)).await
    }

    async fn create(&self, request: NewBookmark) -> Result<(), ClientError> {
        let agent = self.agent.clone();
        let url = self.endpoint(CREATE_PATH)?;
        run_blocking(move || Self::create_sync(&agent, &url, &request)).await
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let agent = self.agent.clone();
        let url = self.endpoint(&Self::delete_path(id))?;
        run_blocking(move || Self::delete_sync(&agent, &url)).await
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}
