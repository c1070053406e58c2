//! Processing indicator + toast notifications around mutations.
//!
//! A mutation shows a blocking "processing" overlay, awaits the call, then
//! replaces the overlay with a success or error toast. [`ProcessingGuard`]
//! dismisses the overlay before any terminal toast and on drop, so an early
//! return can never leave it on screen.

use contracts::shared::api::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

const TOAST_TTL_MS: u32 = 4000;
const ERROR_TOAST_TTL_MS: u32 = 7000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Where feedback goes. Implemented by the app-wide [`Notifications`].
pub trait FeedbackSink {
    fn show_processing(&self, label: &str);
    fn dismiss_processing(&self);
    fn notify(&self, kind: ToastKind, message: String);
}

/// Owns the processing overlay for the duration of one mutation.
pub struct ProcessingGuard<S: FeedbackSink> {
    sink: S,
    active: bool,
}

impl<S: FeedbackSink> ProcessingGuard<S> {
    pub fn begin(sink: S, label: &str) -> Self {
        sink.show_processing(label);
        Self { sink, active: true }
    }

    fn dismiss(&mut self) {
        if self.active {
            self.active = false;
            self.sink.dismiss_processing();
        }
    }

    pub fn succeed(mut self, message: impl Into<String>) {
        self.dismiss();
        self.sink.notify(ToastKind::Success, message.into());
    }

    pub fn fail(mut self, error: &ApiError) {
        self.dismiss();
        self.sink.notify(ToastKind::Error, error.user_message());
    }
}

impl<S: FeedbackSink> Drop for ProcessingGuard<S> {
    fn drop(&mut self) {
        self.dismiss();
    }
}

/// Runs `call` with the three-phase feedback sequence.
pub async fn run_mutation<S, T, F>(
    sink: S,
    label: &str,
    success_message: &str,
    call: F,
) -> Result<T, ApiError>
where
    S: FeedbackSink,
    F: Future<Output = Result<T, ApiError>>,
{
    run_mutation_with(sink, label, |_| success_message.to_string(), call).await
}

/// Like [`run_mutation`], with the success text built from the result.
pub async fn run_mutation_with<S, T, F, M>(
    sink: S,
    label: &str,
    success_message: M,
    call: F,
) -> Result<T, ApiError>
where
    S: FeedbackSink,
    F: Future<Output = Result<T, ApiError>>,
    M: FnOnce(&T) -> String,
{
    let guard = ProcessingGuard::begin(sink, label);
    match call.await {
        Ok(value) => {
            guard.succeed(success_message(&value));
            Ok(value)
        }
        Err(e) => {
            log::warn!("{} failed: {}", label, e);
            guard.fail(&e);
            Err(e)
        }
    }
}

/// Rejects a mutation before it reaches the network; no overlay is shown.
pub fn reject_invalid<S: FeedbackSink>(sink: &S, message: impl Into<String>) {
    sink.notify(ToastKind::Warning, message.into());
}

// ============================================================================
// Reactive notifications
// ============================================================================

#[derive(Clone, Copy)]
pub struct Notifications {
    pub toasts: RwSignal<Vec<Toast>>,
    pub processing: RwSignal<Option<String>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            processing: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackSink for Notifications {
    fn show_processing(&self, label: &str) {
        self.processing.set(Some(label.to_string()));
    }

    fn dismiss_processing(&self) {
        self.processing.try_set(None);
    }

    fn notify(&self, kind: ToastKind, message: String) {
        let Some(id) = self.next_id.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        self.toasts.try_update(|list| list.push(Toast { id, kind, message }));

        let ttl = if kind == ToastKind::Error {
            ERROR_TOAST_TTL_MS
        } else {
            TOAST_TTL_MS
        };
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            toasts.try_update(|list| list.retain(|t| t.id != id));
        });
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Processing(String),
        Dismissed,
        Toast(ToastKind, String),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }
    }

    impl FeedbackSink for Recorder {
        fn show_processing(&self, label: &str) {
            self.0.borrow_mut().push(Event::Processing(label.to_string()));
        }
        fn dismiss_processing(&self) {
            self.0.borrow_mut().push(Event::Dismissed);
        }
        fn notify(&self, kind: ToastKind, message: String) {
            self.0.borrow_mut().push(Event::Toast(kind, message));
        }
    }

    #[test]
    fn test_success_dismisses_before_toast() {
        let rec = Recorder::default();
        ProcessingGuard::begin(rec.clone(), "Menyimpan...").succeed("Barang tersimpan");
        assert_eq!(
            rec.events(),
            vec![
                Event::Processing("Menyimpan...".into()),
                Event::Dismissed,
                Event::Toast(ToastKind::Success, "Barang tersimpan".into()),
            ]
        );
    }

    #[test]
    fn test_failure_uses_server_message() {
        let rec = Recorder::default();
        let err = ApiError::from_status(409, r#"{"message":"Kode barang sudah ada"}"#);
        ProcessingGuard::begin(rec.clone(), "Menyimpan...").fail(&err);
        assert_eq!(
            rec.events()[1..],
            [
                Event::Dismissed,
                Event::Toast(ToastKind::Error, "Kode barang sudah ada".into()),
            ]
        );
    }

    #[test]
    fn test_drop_without_outcome_still_dismisses() {
        let rec = Recorder::default();
        {
            let _guard = ProcessingGuard::begin(rec.clone(), "Menghapus...");
        }
        assert_eq!(
            rec.events(),
            vec![Event::Processing("Menghapus...".into()), Event::Dismissed]
        );
    }

    #[test]
    fn test_validation_rejection_never_shows_overlay() {
        let rec = Recorder::default();
        reject_invalid(&rec, "Kode barang wajib diisi");
        assert_eq!(
            rec.events(),
            vec![Event::Toast(ToastKind::Warning, "Kode barang wajib diisi".into())]
        );
    }
}
