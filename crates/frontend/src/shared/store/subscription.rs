//! Подписки на коллекции: опрос backend с доставкой снимка при изменении

use contracts::shared::store::{Collection, StoreError};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use serde_json::Value;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::api::{DocumentStore, HttpDocumentStore};

/// Интервал опроса, мс
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// Handle of a running subscription; dropping it stops delivery.
#[derive(Debug)]
pub struct Subscription {
    cancelled: Arc<AtomicBool>,
}

impl Subscription {
    /// Handle plus the poll state of the loop it controls.
    fn new() -> (Self, PollState) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let state = PollState::new(cancelled.clone());
        (Self { cancelled }, state)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Что сделать с результатом очередного опроса
#[derive(Debug, Clone, PartialEq)]
enum PollAction {
    Deliver,
    Report(StoreError),
    Skip,
    Stop,
}

/// Delivery rules of one polling loop: the first snapshot and every later
/// one whose payload differs are delivered, a repeated identical error is
/// reported once, and nothing passes once the handle is cancelled.
#[derive(Debug)]
struct PollState {
    cancelled: Arc<AtomicBool>,
    last_payload: Option<String>,
    last_error: Option<StoreError>,
}

impl PollState {
    fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self {
            cancelled,
            last_payload: None,
            last_error: None,
        }
    }

    fn is_active(&self) -> bool {
        !self.cancelled.load(Ordering::Relaxed)
    }

    /// `result` carries the serialized snapshot on success.
    fn on_result(&mut self, result: Result<String, StoreError>) -> PollAction {
        if !self.is_active() {
            return PollAction::Stop;
        }
        match result {
            Ok(payload) => {
                self.last_error = None;
                if self.last_payload.as_deref() == Some(payload.as_str()) {
                    PollAction::Skip
                } else {
                    self.last_payload = Some(payload);
                    PollAction::Deliver
                }
            }
            Err(e) if self.last_error.as_ref() == Some(&e) => PollAction::Skip,
            Err(e) => {
                self.last_error = Some(e.clone());
                PollAction::Report(e)
            }
        }
    }
}

fn spawn_poll<T, Fut, Fetch, Deliver, OnError>(
    fetch: Fetch,
    deliver: Deliver,
    on_error: OnError,
) -> Subscription
where
    T: serde::Serialize + 'static,
    Fut: Future<Output = Result<T, StoreError>> + 'static,
    Fetch: Fn() -> Fut + 'static,
    Deliver: Fn(T) + 'static,
    OnError: Fn(StoreError) + 'static,
{
    let (subscription, mut state) = Subscription::new();

    spawn_local(async move {
        while state.is_active() {
            let (snapshot, result) = match fetch().await {
                Ok(snapshot) => {
                    let payload = serde_json::to_string(&snapshot).unwrap_or_default();
                    (Some(snapshot), Ok(payload))
                }
                Err(e) => (None, Err(e)),
            };
            match state.on_result(result) {
                PollAction::Deliver => {
                    if let Some(snapshot) = snapshot {
                        deliver(snapshot);
                    }
                }
                PollAction::Report(e) => on_error(e),
                PollAction::Skip => {}
                PollAction::Stop => break,
            }
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });

    subscription
}

/// Subscribe to a whole collection.
pub fn subscribe<F, E>(store: HttpDocumentStore, collection: Collection, on_snapshot: F, on_error: E) -> Subscription
where
    F: Fn(Vec<Value>) + 'static,
    E: Fn(StoreError) + 'static,
{
    spawn_poll(
        move || {
            let store = store.clone();
            async move { store.get_collection_once(collection).await }
        },
        on_snapshot,
        on_error,
    )
}

/// Subscribe to one document; `None` is delivered while it does not exist.
pub fn subscribe_one<F, E>(
    store: HttpDocumentStore,
    collection: Collection,
    id: &str,
    on_snapshot: F,
    on_error: E,
) -> Subscription
where
    F: Fn(Option<Value>) + 'static,
    E: Fn(StoreError) + 'static,
{
    let id = id.to_string();
    spawn_poll(
        move || {
            let store = store.clone();
            let id = id.clone();
            async move { store.get_once(collection, &id).await }
        },
        on_snapshot,
        on_error,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivers_first_snapshot_then_only_changes() {
        let (_subscription, mut state) = Subscription::new();
        assert_eq!(state.on_result(Ok("[]".into())), PollAction::Deliver);
        assert_eq!(state.on_result(Ok("[]".into())), PollAction::Skip);
        assert_eq!(state.on_result(Ok(r#"[{"id":"p1"}]"#.into())), PollAction::Deliver);
        assert_eq!(state.on_result(Ok(r#"[{"id":"p1"}]"#.into())), PollAction::Skip);
        // пустая коллекция после непустой тоже изменение
        assert_eq!(state.on_result(Ok("[]".into())), PollAction::Deliver);
    }

    #[test]
    fn test_repeated_error_reported_once() {
        let (_subscription, mut state) = Subscription::new();
        let denied = StoreError::PermissionDenied;
        assert_eq!(state.on_result(Err(denied.clone())), PollAction::Report(denied.clone()));
        assert_eq!(state.on_result(Err(denied.clone())), PollAction::Skip);

        let server = StoreError::Server(500);
        assert_eq!(state.on_result(Err(server.clone())), PollAction::Report(server));

        // успешный опрос сбрасывает ошибку
        assert_eq!(state.on_result(Ok("[]".into())), PollAction::Deliver);
        assert_eq!(state.on_result(Err(denied.clone())), PollAction::Report(denied));
    }

    #[test]
    fn test_error_does_not_reset_last_snapshot() {
        let (_subscription, mut state) = Subscription::new();
        assert_eq!(state.on_result(Ok("[1]".into())), PollAction::Deliver);
        assert!(matches!(state.on_result(Err(StoreError::Server(503))), PollAction::Report(_)));
        assert_eq!(state.on_result(Ok("[1]".into())), PollAction::Skip);
    }

    #[test]
    fn test_nothing_passes_after_cancel() {
        let (subscription, mut state) = Subscription::new();
        assert!(state.is_active());
        subscription.cancel();
        assert!(subscription.is_cancelled());
        assert!(!state.is_active());
        assert_eq!(state.on_result(Ok("[]".into())), PollAction::Stop);
        assert_eq!(state.on_result(Err(StoreError::PermissionDenied)), PollAction::Stop);
    }

    #[test]
    fn test_drop_cancels() {
        let (subscription, mut state) = Subscription::new();
        let flag = subscription.cancelled.clone();
        drop(subscription);
        assert!(flag.load(Ordering::Relaxed));
        assert!(!state.is_active());
        assert_eq!(state.on_result(Ok("[]".into())), PollAction::Stop);
    }
}
