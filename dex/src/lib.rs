//! Creature catalog and name resolution for pokeduel.
//!
//! This crate owns the read-only side of the system: the immutable table of
//! creature records, the CSV source it is usually loaded from, and the
//! typo-tolerant resolver that turns user input into a canonical name.
//!
//! ```text
//! pokemon.csv ──> CsvCatalog ──> Catalog ──> resolve() ──> canonical name
//!                                   │
//!                                   └──> page() (listing)
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! use pokeduel_dex::CsvCatalog;
//!
//! let catalog = CsvCatalog::from_path("pokemon.csv")?;
//! let record = catalog.resolve("Bulbasur")?;
//! assert_eq!(record.name, "Bulbasaur");
//! ```

use thiserror::Error;

pub mod catalog;
pub mod csv_source;
pub mod record;
pub mod resolve;

pub use catalog::{Catalog, Page};
pub use csv_source::CsvCatalog;
pub use record::CreatureRecord;
pub use resolve::{resolve, EXACT_TOLERANCE, SUGGESTION_TOLERANCE};

/// Name resolution failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{kind} '{input}' not found or too many spelling mistakes")]
    NotFound { kind: &'static str, input: String },

    #[error("'{input}' has more than one spelling mistake. Did you mean: {}?", .suggestions.join(", "))]
    AmbiguousName {
        input: String,
        suggestions: Vec<String>,
    },
}

impl ResolveError {
    /// The raw input that failed to resolve
    pub fn input(&self) -> &str {
        match self {
            Self::NotFound { input, .. } | Self::AmbiguousName { input, .. } => input,
        }
    }
}

/// Catalog construction and loading failures
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Duplicate creature name: {0}")]
    DuplicateName(String),

    #[error("Catalog contains no creatures")]
    Empty,
}
