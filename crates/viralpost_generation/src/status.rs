//! Status callback plumbing.

use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::warn;
use viralpost_core::GenerationStatus;

/// Receives progress updates during a generation.
///
/// Called synchronously from the generating task, so it should return quickly.
/// The callback may borrow from its caller for `'a`.
pub type StatusCallback<'a> = dyn Fn(GenerationStatus) + Send + Sync + 'a;

/// Report `status` to `callback`, if any.
///
/// A panicking callback is logged and otherwise ignored.
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
/// use viralpost_core::GenerationStatus;
/// use viralpost_generation::{StatusCallback, notify};
///
/// let seen = Mutex::new(Vec::new());
/// let callback = |status: GenerationStatus| seen.lock().unwrap().push(status);
///
/// notify(Some(&callback as &StatusCallback<'_>), GenerationStatus::ComposingText);
/// notify(None, GenerationStatus::DrawingImage);
///
/// assert_eq!(*seen.lock().unwrap(), vec![GenerationStatus::ComposingText]);
/// ```
pub fn notify(callback: Option<&StatusCallback<'_>>, status: GenerationStatus) {
    let Some(callback) = callback else {
        return;
    };
    if catch_unwind(AssertUnwindSafe(|| callback(status))).is_err() {
        warn!(status = ?status, "Status callback panicked; continuing");
    }
}
