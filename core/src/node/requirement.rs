use alloc::sync::Arc;
use core::fmt;

/// Visibility predicate over a context value.
///
/// Cheap to clone: clones share the same closure. A node without a
/// requirement is always visible.
pub struct Requirement<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Requirement<C> {
    /// Wrap a predicate.
    pub fn new(predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against `context`.
    pub fn test(&self, context: &C) -> bool {
        (self.predicate)(context)
    }

    /// Whether two requirements share the same closure.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl<C> Clone for Requirement<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Requirement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Requirement(..)")
    }
}
