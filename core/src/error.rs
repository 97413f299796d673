//! Errors raised while building, mapping or editing command trees.
//!
//! Only strategy defects are errors. A node pruned by its requirement or a
//! name that was not present during removal are reported as `None`/`false`.

use crate::String;
use crate::node::NodeKind;
use crate::{Domain, ToString};

/// Error type for all fallible tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A node kind has no case in the operation that was asked to handle it.
    ///
    /// Raised by a [`Mapper`](crate::Mapper) that meets an opaque node, by
    /// aliasing a root or opaque node, and by adding a root as a child.
    /// Aborts the whole operation.
    #[error("unsupported node kind `{kind}` for node `{name}`")]
    UnsupportedNodeKind { name: String, kind: String },
}

impl Error {
    pub(crate) fn unsupported<D: Domain>(name: &str, kind: &NodeKind<D>) -> Self {
        Error::UnsupportedNodeKind {
            name: name.to_string(),
            kind: kind.declared().to_string(),
        }
    }
}
