//! BookmarkListController integration tests
//!
//! Runs the controller against an in-memory `BookmarkApi`. Individual calls
//! can be held open with oneshot channels to exercise overlapping requests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use bookmarker::capabilities::{ClipboardSink, LinkOpener, Notification, NotificationLevel, Notifier};
use bookmarker::client::{BookmarkApi, ClientError};
use bookmarker::controller::{BookmarkListController, messages};
use bookmarker::structs::{Bookmark, NewBookmark};

// =============================================================================
// Test doubles
// =============================================================================

type Reply<T> = oneshot::Receiver<Result<T, ClientError>>;

#[derive(Default)]
struct FakeApi {
    /// Server-side collection
    server: Mutex<Vec<Bookmark>>,
    next_id: AtomicI64,

    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,

    fail_list: AtomicBool,
    fail_create: AtomicBool,

    created_urls: Mutex<Vec<String>>,

    /// Held-open replies, consumed in call order
    list_replies: Mutex<VecDeque<Reply<Vec<Bookmark>>>>,
    create_replies: Mutex<VecDeque<Reply<()>>>,
    delete_replies: Mutex<HashMap<i64, Reply<()>>>,
}

impl FakeApi {
    fn with(bookmarks: Vec<Bookmark>) -> Arc<Self> {
        let next = bookmarks.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let api = FakeApi::default();
        *api.server.lock() = bookmarks;
        api.next_id.store(next, Ordering::SeqCst);
        Arc::new(api)
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn hold_list(&self) -> oneshot::Sender<Result<Vec<Bookmark>, ClientError>> {
        let (tx, rx) = oneshot::channel();
        self.list_replies.lock().push_back(rx);
        tx
    }

    fn hold_create(&self) -> oneshot::Sender<Result<(), ClientError>> {
        let (tx, rx) = oneshot::channel();
        self.create_replies.lock().push_back(rx);
        tx
    }

    fn hold_delete(&self, id: i64) -> oneshot::Sender<Result<(), ClientError>> {
        let (tx, rx) = oneshot::channel();
        self.delete_replies.lock().insert(id, rx);
        tx
    }
}

async fn wait_reply<T>(reply: Reply<T>) -> Result<T, ClientError> {
    reply
        .await
        .unwrap_or_else(|_| Err(ClientError::Transport("reply dropped".into())))
}

#[async_trait]
impl BookmarkApi for FakeApi {
    async fn list(&self) -> Result<Vec<Bookmark>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let held = self.list_replies.lock().pop_front();
        if let Some(reply) = held {
            return wait_reply(reply).await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ClientError::Transport("connection refused".into()));
        }
        Ok(self.server.lock().clone())
    }

    async fn create(&self, request: NewBookmark) -> Result<(), ClientError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created_urls.lock().push(request.url.clone());
        let held = self.create_replies.lock().pop_front();
        if let Some(reply) = held {
            reply_or_apply(wait_reply(reply).await, || self.insert(&request.url))
        } else if self.fail_create.load(Ordering::SeqCst) {
            Err(ClientError::from_status(500, "boom".into()))
        } else {
            self.insert(&request.url);
            Ok(())
        }
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let held = self.delete_replies.lock().remove(&id);
        if let Some(reply) = held {
            return reply_or_apply(wait_reply(reply).await, || self.drop_id(id));
        }
        let mut server = self.server.lock();
        match server.iter().position(|b| b.id == id) {
            Some(index) => {
                server.remove(index);
                Ok(())
            }
            None => Err(ClientError::from_status(404, String::new())),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

impl FakeApi {
    fn insert(&self, url: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.server.lock().push(bookmark(id, url, "", ""));
    }

    fn drop_id(&self, id: i64) {
        self.server.lock().retain(|b| b.id != id);
    }
}

fn reply_or_apply(
    reply: Result<(), ClientError>,
    apply: impl FnOnce(),
) -> Result<(), ClientError> {
    if reply.is_ok() {
        apply();
    }
    reply
}

#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.seen.lock().iter().map(|n| n.message.clone()).collect()
    }

    fn last(&self) -> Option<Notification> {
        self.seen.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

#[derive(Default)]
struct RecordingClipboard {
    text: Mutex<Option<String>>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<(), String> {
        *self.text.lock() = Some(text.to_string());
        Ok(())
    }
}

struct BrokenOpener;

impl LinkOpener for BrokenOpener {
    fn open(&self, _url: &str) -> Result<(), String> {
        Err("no browser".into())
    }
}

fn bookmark(id: i64, url: &str, title: &str, description: &str) -> Bookmark {
    Bookmark {
        id,
        url: url.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: None,
    }
}

fn site_a() -> Bookmark {
    bookmark(1, "http://a.com", "A Site", "desc")
}

fn setup(bookmarks: Vec<Bookmark>) -> (BookmarkListController, Arc<FakeApi>, Arc<RecordingNotifier>) {
    let api = FakeApi::with(bookmarks);
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = BookmarkListController::new(api.clone(), notifier.clone());
    (controller, api, notifier)
}

async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}

fn ids(bookmarks: &[Bookmark]) -> Vec<i64> {
    bookmarks.iter().map(|b| b.id).collect()
}

// =============================================================================
// refresh
// =============================================================================

#[tokio::test]
async fn test_refresh_replaces_collection() {
    let (controller, api, notifier) = setup(vec![site_a()]);
    assert!(controller.view().loading);

    controller.refresh().await.unwrap();

    assert_eq!(controller.bookmarks(), vec![site_a()]);
    assert_eq!(api.list_calls(), 1);
    assert!(!controller.view().loading);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_refresh_failure_keeps_collection_and_records_error() {
    let (controller, api, notifier) = setup(vec![site_a()]);
    controller.refresh().await.unwrap();

    api.fail_list.store(true, Ordering::SeqCst);
    let result = controller.refresh().await;

    assert!(matches!(result, Err(ClientError::Transport(_))));
    assert_eq!(controller.bookmarks(), vec![site_a()]);
    assert_eq!(controller.last_error().as_deref(), Some(messages::FETCH_FAILED));
    let last = notifier.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Error);
    assert_eq!(last.message, messages::FETCH_FAILED);
}

#[tokio::test]
async fn test_overlapping_refreshes_last_completion_wins() {
    let (controller, api, _notifier) = setup(Vec::new());
    let first = api.hold_list();
    let second = api.hold_list();

    let c1 = controller.clone();
    let h1 = tokio::spawn(async move { c1.refresh().await });
    wait_until(|| api.list_calls() == 1).await;
    let c2 = controller.clone();
    let h2 = tokio::spawn(async move { c2.refresh().await });
    wait_until(|| api.list_calls() == 2).await;

    // 后发起的先完成
    second.send(Ok(vec![bookmark(2, "http://b.com", "B", "")])).unwrap();
    h2.await.unwrap().unwrap();
    assert_eq!(ids(&controller.bookmarks()), vec![2]);

    first.send(Ok(vec![site_a()])).unwrap();
    h1.await.unwrap().unwrap();
    assert_eq!(ids(&controller.bookmarks()), vec![1]);
}

#[tokio::test]
async fn test_late_refresh_after_close_is_dropped() {
    let (controller, api, notifier) = setup(Vec::new());
    let reply = api.hold_list();

    let c = controller.clone();
    let handle = tokio::spawn(async move { c.refresh().await });
    wait_until(|| api.list_calls() == 1).await;

    controller.close();
    reply.send(Ok(vec![site_a()])).unwrap();
    let _ = handle.await.unwrap();

    assert!(controller.bookmarks().is_empty());
    assert!(controller.is_closed());
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_late_refresh_failure_after_close_is_silent() {
    let (controller, api, notifier) = setup(Vec::new());
    let reply = api.hold_list();

    let c = controller.clone();
    let handle = tokio::spawn(async move { c.refresh().await });
    wait_until(|| api.list_calls() == 1).await;

    controller.close();
    reply
        .send(Err(ClientError::Transport("timeout".into())))
        .unwrap();
    assert!(handle.await.unwrap().is_err());

    assert!(controller.last_error().is_none());
    assert!(notifier.messages().is_empty());
}

// =============================================================================
// create
// =============================================================================

#[tokio::test]
async fn test_create_empty_url_is_local_validation_error() {
    let (controller, api, notifier) = setup(Vec::new());

    for input in ["", "   "] {
        let result = controller.create(input).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    assert_eq!(api.create_calls(), 0);
    assert_eq!(api.list_calls(), 0);
    assert_eq!(controller.last_error().as_deref(), Some(messages::INVALID_URL));
    assert_eq!(notifier.last().unwrap().message, messages::INVALID_URL);
    assert!(!controller.is_saving());
}

#[tokio::test]
async fn test_create_success_refreshes_once_and_clears_input() {
    let (controller, api, notifier) = setup(vec![site_a()]);
    controller.refresh().await.unwrap();
    controller.set_url_input("http://new.com");

    controller.submit().await.unwrap();

    assert_eq!(api.create_calls(), 1);
    assert_eq!(api.list_calls(), 2);
    assert_eq!(*api.created_urls.lock(), vec!["http://new.com".to_string()]);
    assert_eq!(ids(&controller.view().bookmarks), vec![1, 2]);
    assert_eq!(controller.url_input(), "");
    assert!(!controller.is_saving());
    assert_eq!(notifier.messages(), vec![messages::SAVED.to_string()]);
}

#[tokio::test]
async fn test_create_trims_url() {
    let (controller, api, _notifier) = setup(Vec::new());
    controller.create("  http://padded.com \n").await.unwrap();
    assert_eq!(*api.created_urls.lock(), vec!["http://padded.com".to_string()]);
}

#[tokio::test]
async fn test_create_failure_keeps_collection_and_input() {
    let (controller, api, notifier) = setup(vec![site_a()]);
    controller.refresh().await.unwrap();
    let before = controller.bookmarks();
    controller.set_url_input("http://bad.com");
    api.fail_create.store(true, Ordering::SeqCst);

    let result = controller.submit().await;

    assert!(matches!(result, Err(ClientError::Status { status: 500, .. })));
    assert_eq!(controller.bookmarks(), before);
    assert_eq!(api.list_calls(), 1);
    assert_eq!(controller.url_input(), "http://bad.com");
    assert_eq!(controller.last_error().as_deref(), Some(messages::SAVE_FAILED));
    assert_eq!(notifier.last().unwrap().message, messages::SAVE_FAILED);
    assert!(!controller.is_saving());
}

#[tokio::test]
async fn test_create_clears_previous_error() {
    let (controller, _api, _notifier) = setup(Vec::new());
    let _ = controller.create("").await;
    assert!(controller.last_error().is_some());

    controller.create("http://ok.com").await.unwrap();
    assert!(controller.last_error().is_none());
}

#[tokio::test]
async fn test_saving_flag_while_create_in_flight() {
    let (controller, api, _notifier) = setup(Vec::new());
    let reply = api.hold_create();

    let c = controller.clone();
    let handle = tokio::spawn(async move { c.create("http://slow.com").await });
    wait_until(|| api.create_calls() == 1).await;
    assert!(controller.is_saving());
    assert!(controller.view().saving);

    reply.send(Ok(())).unwrap();
    handle.await.unwrap().unwrap();
    assert!(!controller.is_saving());
    assert_eq!(controller.bookmarks().len(), 1);
}

#[tokio::test]
async fn test_late_create_after_close_is_silent() {
    let (controller, api, notifier) = setup(Vec::new());
    let reply = api.hold_create();

    let c = controller.clone();
    let handle = tokio::spawn(async move { c.create("http://late.com").await });
    wait_until(|| api.create_calls() == 1).await;

    controller.close();
    reply.send(Ok(())).unwrap();
    handle.await.unwrap().unwrap();

    // 关闭后既不通知也不刷新
    assert!(notifier.messages().is_empty());
    assert_eq!(api.list_calls(), 0);
    assert!(controller.bookmarks().is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_each_refresh() {
    let (controller, api, _notifier) = setup(Vec::new());
    let first = api.hold_create();
    let second = api.hold_create();

    let c = controller.clone();
    let a = tokio::spawn(async move { c.create("http://one.com").await });
    let c = controller.clone();
    let b = tokio::spawn(async move { c.create("http://two.com").await });
    wait_until(|| api.create_calls() == 2).await;
    assert!(controller.is_saving());

    // 后发出的请求先完成
    second.send(Ok(())).unwrap();
    wait_until(|| api.list_calls() == 1).await;
    assert!(controller.is_saving());

    first.send(Ok(())).unwrap();
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    assert_eq!(api.create_calls(), 2);
    assert_eq!(api.list_calls(), 2);
    assert!(!controller.is_saving());
    assert_eq!(controller.bookmarks().len(), 2);
}

#[tokio::test]
async fn test_create_keeps_input_typed_meanwhile() {
    let (controller, api, _notifier) = setup(Vec::new());
    let reply = api.hold_create();
    controller.set_url_input("http://first.com");

    let c = controller.clone();
    let handle = tokio::spawn(async move { c.submit().await });
    wait_until(|| api.create_calls() == 1).await;
    controller.set_url_input("http://second.com");

    reply.send(Ok(())).unwrap();
    handle.await.unwrap().unwrap();
    assert_eq!(controller.url_input(), "http://second.com");
}

#[tokio::test]
async fn test_create_from_caller_leaves_input_alone() {
    let (controller, _api, _notifier) = setup(Vec::new());
    controller.set_url_input("http://draft.com");
    controller.create("http://other.com").await.unwrap();
    assert_eq!(controller.url_input(), "http://draft.com");
}

#[tokio::test]
async fn test_start_submit_refuses_while_saving() {
    let (controller, api, _notifier) = setup(Vec::new());
    let reply = api.hold_create();
    controller.set_url_input("http://once.com");

    let task = controller.start_submit().expect("submit should start");
    // saving 在请求发出之前就已计入
    assert!(controller.is_saving());
    assert!(controller.start_submit().is_none());

    let handle = tokio::spawn(task);
    wait_until(|| api.create_calls() == 1).await;
    reply.send(Ok(())).unwrap();
    handle.await.unwrap().unwrap();

    assert_eq!(api.create_calls(), 1);
    assert_eq!(*api.created_urls.lock(), vec!["http://once.com".to_string()]);
    assert_eq!(controller.url_input(), "");
    assert!(!controller.is_saving());
}

#[tokio::test]
async fn test_start_submit_with_empty_input() {
    let (controller, api, _notifier) = setup(Vec::new());
    controller.set_url_input("   ");
    assert!(controller.start_submit().is_none());
    assert_eq!(api.create_calls(), 0);
    assert!(!controller.is_saving());
    assert_eq!(controller.last_error().as_deref(), Some(messages::INVALID_URL));
}

// =============================================================================
// remove
// =============================================================================

#[tokio::test]
async fn test_remove_success_resyncs() {
    let (controller, api, notifier) = setup(vec![site_a(), bookmark(2, "http://b.com", "B", "")]);
    controller.refresh().await.unwrap();

    controller.remove(1).await.unwrap();

    assert_eq!(api.delete_calls(), 1);
    assert_eq!(api.list_calls(), 2);
    assert_eq!(ids(&controller.bookmarks()), vec![2]);
    assert!(!controller.is_deleting(1));
    assert_eq!(notifier.messages(), vec![messages::DELETED.to_string()]);
}

#[tokio::test]
async fn test_remove_unknown_id_still_calls_server() {
    let (controller, api, notifier) = setup(vec![site_a()]);
    controller.refresh().await.unwrap();
    let before = controller.bookmarks();

    let result = controller.remove(99).await;

    assert!(matches!(result, Err(ClientError::Status { status: 404, .. })));
    assert_eq!(api.delete_calls(), 1);
    assert_eq!(controller.bookmarks(), before);
    assert_eq!(controller.last_error().as_deref(), Some(messages::DELETE_FAILED));
    assert_eq!(notifier.last().unwrap().message, messages::DELETE_FAILED);
    assert!(!controller.is_deleting(99));
}

#[tokio::test]
async fn test_concurrent_deletes_are_tracked_separately() {
    let (controller, api, _notifier) = setup(vec![site_a(), bookmark(2, "http://b.com", "B", "")]);
    controller.refresh().await.unwrap();
    let reply_one = api.hold_delete(1);
    let reply_two = api.hold_delete(2);

    let c1 = controller.clone();
    let h1 = tokio::spawn(async move { c1.remove(1).await });
    let c2 = controller.clone();
    let h2 = tokio::spawn(async move { c2.remove(2).await });
    wait_until(|| api.delete_calls() == 2).await;

    assert!(controller.is_deleting(1));
    assert!(controller.is_deleting(2));
    assert_eq!(controller.view().deleting.len(), 2);

    reply_one.send(Ok(())).unwrap();
    h1.await.unwrap().unwrap();
    assert!(!controller.is_deleting(1));
    assert!(controller.is_deleting(2));

    reply_two
        .send(Err(ClientError::Transport("reset".into())))
        .unwrap();
    assert!(h2.await.unwrap().is_err());
    assert!(controller.view().deleting.is_empty());
    // 删除 2 失败，集合保持上次刷新的结果
    assert_eq!(ids(&controller.bookmarks()), vec![2]);
}

// =============================================================================
// search
// =============================================================================

#[tokio::test]
async fn test_search_scenario() {
    let (controller, _api, _notifier) = setup(vec![site_a()]);
    controller.refresh().await.unwrap();

    controller.set_search("site");
    assert_eq!(controller.filtered(), vec![site_a()]);

    controller.set_search("xyz");
    assert!(controller.filtered().is_empty());
    assert!(controller.view().is_filtered());

    controller.set_search("");
    assert_eq!(controller.filtered(), controller.bookmarks());
}

#[tokio::test]
async fn test_filtered_view_follows_refresh() {
    let (controller, api, _notifier) = setup(vec![site_a()]);
    controller.set_search("rust");
    controller.refresh().await.unwrap();
    assert!(controller.filtered().is_empty());

    api.server
        .lock()
        .push(bookmark(2, "http://r.com", "", "The Rust book"));
    controller.refresh().await.unwrap();
    assert_eq!(ids(&controller.filtered()), vec![2]);
}

// =============================================================================
// copy / open
// =============================================================================

#[tokio::test]
async fn test_copy_link_sets_clipboard_and_notifies() {
    let (controller, _api, notifier) = setup(Vec::new());
    let clipboard = Arc::new(RecordingClipboard::default());
    let controller = controller.with_clipboard(clipboard.clone());

    controller.copy_link("http://a.com").unwrap();

    assert_eq!(clipboard.text.lock().as_deref(), Some("http://a.com"));
    assert_eq!(notifier.last().unwrap().message, messages::COPIED);
}

#[tokio::test]
async fn test_copy_link_failure_does_not_touch_state() {
    let (controller, _api, notifier) = setup(Vec::new());

    assert!(controller.copy_link("http://a.com").is_err());
    assert_eq!(notifier.last().unwrap().message, messages::COPY_FAILED);
    assert!(controller.last_error().is_none());
}

#[tokio::test]
async fn test_open_link_failure_notifies() {
    let (controller, _api, notifier) = setup(Vec::new());
    let controller = controller.with_opener(Arc::new(BrokenOpener));

    assert!(controller.open_link("http://a.com").is_err());
    assert_eq!(notifier.last().unwrap().message, messages::OPEN_FAILED);
}
