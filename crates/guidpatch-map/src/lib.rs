//! Exported-tree location and remap-table construction.
//!
//! [`locate`] validates the conventional folders of an exported project
//! tree; [`build_tables`] correlates the exported files with the host
//! catalog and records every old→new identifier mapping the rewriter
//! needs. Every per-asset fault skips that one asset; no fault aborts a
//! pass.

pub mod builder;
pub mod error;
pub mod layout;

pub use builder::build_tables;
pub use error::LayoutError;
pub use layout::locate;
