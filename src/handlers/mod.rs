//! Entry store operations
//!
//! Each operation is a separate `impl EntryStore` block in its own file.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod reorder;
pub mod toggle;
pub mod transfer;
