//! Action trait

use std::fmt::Debug;

/// Something that can be dispatched to the store
///
/// Actions are cloned for logging and sent across tasks, hence the bounds.
pub trait Action: Clone + Debug + Send + 'static {
    /// Variant name, used in logs
    fn name(&self) -> &'static str;

    /// One-line description for logs. Defaults to the variant name so that
    /// payload-heavy actions stay readable.
    fn summary(&self) -> String {
        self.name().to_string()
    }
}
