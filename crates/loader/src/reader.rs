use crate::error::LoaderError;
use indexmap::IndexMap;
use statements::CompanyStatements;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Every company in a statement document, keyed by company code, in document order.
pub type StatementBook = IndexMap<String, CompanyStatements>;

/// Reads a statement book from a JSON file.
///
/// Individual cells are lenient (see `statements::cell`), so only a structurally malformed
/// document fails here. A company whose info carries no code inherits its map key.
pub fn read_statement_book(path: &Path) -> Result<StatementBook, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut book: StatementBook =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoaderError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    for (code, statements) in book.iter_mut() {
        if statements.company.code.is_none() {
            statements.company.code = Some(code.clone());
        }
        if statements.years.is_empty() {
            tracing::warn!(code = %code, "Company has no statement years.");
        }
    }

    tracing::info!(
        path = %path.display(),
        companies = book.len(),
        years = book.values().map(|c| c.years.len()).sum::<usize>(),
        "Loaded statement book."
    );
    Ok(book)
}

/// Narrows a book down to a single company.
pub fn select_company(mut book: StatementBook, code: &str) -> Result<StatementBook, LoaderError> {
    let statements = book
        .shift_remove(code)
        .ok_or_else(|| LoaderError::CompanyNotFound(code.to_string()))?;
    Ok(IndexMap::from([(code.to_string(), statements)]))
}
