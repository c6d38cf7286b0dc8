//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// An intent to change state, dispatched to the store.
///
/// Actions cross task boundaries (async results are sent back over a
/// channel), hence the `Send + 'static` bound.
pub trait Action: Clone + Debug + Send + 'static {
    /// Name used for logging.
    fn name(&self) -> &'static str;
}
