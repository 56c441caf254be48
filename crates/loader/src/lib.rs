//! # Finpanel Loader
//!
//! The file boundary of the workspace: reads the structured statement book produced by the
//! upstream statement loader, and writes the computed index document for downstream
//! consumers. Both documents are JSON objects keyed by company code.
//!
//! Nothing here computes indicators; see the `indices` crate.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::LoaderError;
pub use reader::{StatementBook, read_statement_book, select_company};
pub use writer::{IndexDocument, read_index_document, write_index_document};
