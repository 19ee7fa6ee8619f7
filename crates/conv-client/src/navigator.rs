use std::sync::atomic::{AtomicUsize, Ordering};

/// Moves the user to the login view after the session ended
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Counts redirects instead of performing them
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}
