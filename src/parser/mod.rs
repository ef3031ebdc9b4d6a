//! Parser module: one submodule per document region.
//!
//! Each parser works on a slice of lines and never fails: anything it
//! cannot recognise is left out. Only the filename decoder and the divider
//! count can reject a document.

pub mod cover;
pub mod divider;
pub mod filename;
pub mod header;
pub mod toc;
