//! Block identities.

use core::fmt;

/// Identity of a shader block within one effect file.
///
/// Assigned by the parser, unique per file. The scope analyzer keys its
/// per-block annotations by this id instead of mutating the tree, so the
/// AST stays immutable across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u32);

impl BlockId {
    /// Create a block id from its index in the file.
    pub fn new(index: u32) -> Self {
        BlockId(index)
    }

    /// Get the underlying index.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block{}", self.0)
    }
}
