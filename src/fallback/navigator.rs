//! Navigation targets for the fallback effect.

use std::sync::Mutex;

/// Something that can replace the current location.
///
/// `replace` must not add a history entry for the deprecated path.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
}

/// Records every replace call.
///
/// The page handler uses it to learn where the rendered document should
/// send the browser.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All targets passed to `replace`, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// The most recent target, if navigation was requested.
    pub fn target(&self) -> Option<String> {
        self.calls().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_string());
        }
    }
}
