//! Catalog loading from the CSV dataset
//!
//! Expected layout (header row required, column order free):
//!
//! ```text
//! name,type1,type2,attack,against_fire,against_water,...,pokedex_number,generation,is_legendary
//! Bulbasaur,grass,poison,49,2,0.5,...,1,1,0
//! ```
//!
//! `name` and `type1` are required. Every `against_<type>` column becomes a
//! resistance entry. Cells that fail to parse are dropped rather than failing
//! the load, so the damage model falls back to its defaults for them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::record::CreatureRecord;
use crate::CatalogError;

const RESISTANCE_PREFIX: &str = "against_";

/// Column positions resolved from the header row
struct Columns {
    name: usize,
    type1: usize,
    type2: Option<usize>,
    attack: Option<usize>,
    pokedex_number: Option<usize>,
    generation: Option<usize>,
    is_legendary: Option<usize>,
    /// (lowercase type name, column)
    resistances: Vec<(String, usize)>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CatalogError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        let resistances = headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| {
                let h = h.trim().to_lowercase();
                h.strip_prefix(RESISTANCE_PREFIX)
                    .filter(|t| !t.is_empty())
                    .map(|t| (t.to_string(), i))
            })
            .collect();

        Ok(Self {
            name: find("name").ok_or(CatalogError::MissingColumn("name"))?,
            type1: find("type1").ok_or(CatalogError::MissingColumn("type1"))?,
            type2: find("type2"),
            attack: find("attack"),
            pokedex_number: find("pokedex_number"),
            generation: find("generation"),
            is_legendary: find("is_legendary"),
            resistances,
        })
    }
}

/// Loads a [`Catalog`] from CSV
pub struct CsvCatalog;

impl CsvCatalog {
    /// Load from a file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), creatures = catalog.len(), "Loaded creature catalog");
        Ok(catalog)
    }

    /// Load from any reader producing CSV text
    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = Columns::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if let Some(record) = parse_row(&row, &columns) {
                records.push(record);
            }
        }

        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        Catalog::new(records)
    }
}

fn parse_row(row: &csv::StringRecord, columns: &Columns) -> Option<CreatureRecord> {
    let name = cell(row, Some(columns.name))?;
    let type1 = cell(row, Some(columns.type1)).unwrap_or_default();

    let mut record = CreatureRecord::new(name, type1);
    record.secondary_type = cell(row, columns.type2).map(str::to_lowercase);
    record.attack = number(row, columns.attack, name, "attack");
    record.pokedex_number = cell(row, columns.pokedex_number).and_then(|v| v.parse().ok());
    record.generation = cell(row, columns.generation).and_then(|v| v.parse().ok());
    record.is_legendary = matches!(cell(row, columns.is_legendary), Some("1" | "true" | "True"));

    for (attacking_type, column) in &columns.resistances {
        if let Some(multiplier) = number(row, Some(*column), name, attacking_type) {
            record.resistances.insert(attacking_type.clone(), multiplier);
        }
    }

    Some(record)
}

/// Non-empty cell contents
fn cell(row: &csv::StringRecord, column: Option<usize>) -> Option<&str> {
    row.get(column?).filter(|v| !v.is_empty())
}

/// Finite numeric cell; anything else is logged and treated as absent
fn number(row: &csv::StringRecord, column: Option<usize>, name: &str, field: &str) -> Option<f64> {
    let raw = cell(row, column)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(creature = name, field, value = raw, "Ignoring non-numeric field");
            None
        }
    }
}
