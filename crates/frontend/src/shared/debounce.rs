//! Cancellation-aware debounce.
//!
//! Every call to [`DebounceState::schedule`] supersedes the previous one; a
//! timer that expires only delivers its value if nothing newer was scheduled
//! and the debouncer was not cancelled in the meantime.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Token handed to a pending timer.
pub type Ticket = u64;

#[derive(Debug, Clone)]
pub struct DebounceState<T> {
    generation: Ticket,
    pending: Option<T>,
}

impl<T> Default for DebounceState<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> DebounceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending value; the returned ticket identifies this call.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Called when the timer for `ticket` expires.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending value; timers already running become no-ops.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Reactive debouncer bound to the current component.
///
/// The pending value lives in a `StoredValue` owned by the component, so a
/// timer that fires after unmount finds the value disposed and does nothing.
pub struct Debouncer<T: Send + Sync + 'static> {
    state: StoredValue<DebounceState<T>>,
    delay_ms: u32,
    on_fire: Callback<T>,
}

impl<T: Send + Sync + 'static> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Debouncer<T> {}

impl<T: Send + Sync + 'static> Debouncer<T> {
    pub fn new(delay_ms: u32, on_fire: Callback<T>) -> Self {
        let state = StoredValue::new(DebounceState::new());
        on_cleanup(move || {
            state.try_update_value(|s| s.cancel());
        });
        Self {
            state,
            delay_ms,
            on_fire,
        }
    }

    pub fn call(&self, value: T) {
        let Some(ticket) = self.state.try_update_value(|s| s.schedule(value)) else {
            return;
        };
        let state = self.state;
        let on_fire = self.on_fire;
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(Some(value)) = state.try_update_value(|s| s.fire(ticket)) {
                on_fire.run(value);
            }
        });
    }

    /// Delivers `value` right away and discards whatever was pending.
    pub fn flush_now(&self, value: T) {
        if self.state.try_update_value(|s| s.cancel()).is_some() {
            self.on_fire.run(value);
        }
    }

    pub fn cancel(&self) {
        self.state.try_update_value(|s| s.cancel());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_emits_once_with_last_value() {
        let mut state = DebounceState::new();
        let tickets: Vec<Ticket> = ["k", "ke", "ker", "kert", "kerta", "kertas"]
            .iter()
            .map(|v| state.schedule(v.to_string()))
            .collect();

        let emitted: Vec<String> = tickets.iter().filter_map(|t| state.fire(*t)).collect();
        assert_eq!(emitted, vec!["kertas".to_string()]);
        assert!(!state.is_pending());
    }

    #[test]
    fn test_fire_is_single_shot() {
        let mut state = DebounceState::new();
        let t = state.schedule(1);
        assert_eq!(state.fire(t), Some(1));
        assert_eq!(state.fire(t), None);
    }

    #[test]
    fn test_cancel_suppresses_pending_timer() {
        let mut state = DebounceState::new();
        let t = state.schedule("pulpen");
        state.cancel();
        assert_eq!(state.fire(t), None);
    }

    #[test]
    fn test_separate_windows_emit_separately() {
        let mut state = DebounceState::new();
        let first = state.schedule("map");
        assert_eq!(state.fire(first), Some("map"));
        let second = state.schedule("map plastik");
        assert_eq!(state.fire(second), Some("map plastik"));
    }
}
