//! Reference rewriting over an exported project tree.
//!
//! Walks every file under the exported root depth first, dispatches on
//! file extension, and substitutes every reference occurrence whose old
//! identifier appears in a remap table. Occurrences with unknown
//! identifiers are left byte for byte unchanged, which also makes a
//! second run over already-rewritten files a no-op.

pub mod error;
pub mod rewriter;

pub use error::RewriteError;
pub use rewriter::{patch_instance_text, patch_material_text, rewrite_tree};
