//! Mount/effect/unmount lifecycle of the legacy fallback page.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::fallback::navigator::Navigator;
use crate::observability::metrics;

const MOUNTED: u8 = 0;
const REDIRECTING: u8 = 1;
const UNMOUNTED: u8 = 2;

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackState {
    Mounted,
    Redirecting,
    Unmounted,
}

impl FallbackState {
    fn from_raw(raw: u8) -> Self {
        match raw {
            MOUNTED => Self::Mounted,
            REDIRECTING => Self::Redirecting,
            _ => Self::Unmounted,
        }
    }
}

/// What the fallback shows while navigation is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackView {
    pub label: &'static str,
}

impl FallbackView {
    pub const LOADING: Self = Self {
        label: "Redirecting…",
    };
}

struct Shared {
    destination: String,
    navigator: Arc<dyn Navigator>,
    state: AtomicU8,
    triggered: AtomicBool,
}

impl Shared {
    /// Run the navigation effect. Returns true if it navigated.
    fn fire(&self) -> bool {
        if self.state.load(Ordering::SeqCst) == UNMOUNTED {
            tracing::debug!(destination = %self.destination, "Fallback unmounted before effect ran");
            return false;
        }
        if self.triggered.swap(true, Ordering::SeqCst) {
            return false;
        }
        if self
            .state
            .compare_exchange(MOUNTED, REDIRECTING, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        tracing::debug!(destination = %self.destination, "Fallback replacing location");
        metrics::record_fallback_navigation();
        self.navigator.replace(&self.destination);
        true
    }
}

/// A mounted legacy fallback page.
///
/// Mounting schedules one effect task on the Tokio runtime; dropping or
/// unmounting the value before that task runs cancels the navigation.
pub struct LegacyFallback {
    shared: Arc<Shared>,
    effect: Option<JoinHandle<bool>>,
}

impl LegacyFallback {
    /// Mount the page and schedule its navigation effect.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(destination: impl Into<String>, navigator: Arc<dyn Navigator>) -> Self {
        let shared = Arc::new(Shared {
            destination: destination.into(),
            navigator,
            state: AtomicU8::new(MOUNTED),
            triggered: AtomicBool::new(false),
        });

        let task_shared = shared.clone();
        let effect = tokio::spawn(async move {
            // Effects run after the first paint
            tokio::task::yield_now().await;
            task_shared.fire()
        });

        Self {
            shared,
            effect: Some(effect),
        }
    }

    /// Render the page. Always the loading indicator; never navigates.
    pub fn render(&self) -> FallbackView {
        FallbackView::LOADING
    }

    pub fn state(&self) -> FallbackState {
        FallbackState::from_raw(self.shared.state.load(Ordering::SeqCst))
    }

    pub fn destination(&self) -> &str {
        &self.shared.destination
    }

    /// Wait for the scheduled effect to finish.
    ///
    /// Returns true if this mount navigated. Later calls return false.
    pub async fn settled(&mut self) -> bool {
        match self.effect.take() {
            Some(handle) => match handle.await {
                Ok(navigated) => navigated,
                Err(e) => {
                    tracing::warn!(error = %e, "Fallback effect task failed");
                    false
                }
            },
            None => false,
        }
    }

    /// Unmount the page. A pending effect becomes a no-op.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for LegacyFallback {
    fn drop(&mut self) {
        self.shared.state.store(UNMOUNTED, Ordering::SeqCst);
    }
}
