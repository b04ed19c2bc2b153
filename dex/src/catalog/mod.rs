//! Immutable creature catalog


use std::collections::HashMap;

use serde::Serialize;

use crate::record::CreatureRecord;
use crate::resolve::resolve;
use crate::{CatalogError, ResolveError};

/// Largest page the listing will return
pub const MAX_PAGE_SIZE: usize = 100;

/// Load-once table of creature records
///
/// Keeps records in load order (the order the resolver scans them in) and an
/// index from lowercase name to position. Nothing mutates a catalog after
/// [`Catalog::new`], so it can be shared behind an `Arc` with no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CreatureRecord>,
    names_lower: Vec<String>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting names that collide case-insensitively
    pub fn new(records: Vec<CreatureRecord>) -> Result<Self, CatalogError> {
        let mut names_lower = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let key = record.key();
            if index.insert(key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateName(record.name.clone()));
            }
            names_lower.push(key);
        }

        Ok(Self {
            records,
            names_lower,
            index,
        })
    }

    /// Exact, case-insensitive lookup
    pub fn lookup(&self, name: &str) -> Option<&CreatureRecord> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| &self.records[position])
    }

    /// All names, lowercase, in load order
    pub fn all_names_lower(&self) -> &[String] {
        &self.names_lower
    }

    /// Resolve possibly misspelled input to a record
    pub fn resolve(&self, raw_input: &str) -> Result<&CreatureRecord, ResolveError> {
        let canonical = resolve(raw_input, &self.names_lower)?;
        self.lookup(&canonical).ok_or_else(|| ResolveError::NotFound {
            kind: "creature",
            input: raw_input.to_string(),
        })
    }

    /// Records in load order
    pub fn iter(&self) -> impl Iterator<Item = &CreatureRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One page of records in load order
    ///
    /// `page` is 1-based; page 0 is treated as page 1. `per_page` is clamped to
    /// `1..=MAX_PAGE_SIZE`. Pages past the end are empty.
    pub fn page(&self, page: usize, per_page: usize) -> Page<&CreatureRecord> {
        let page = page.max(1);
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let items = self
            .records
            .iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        Page {
            page,
            per_page,
            total: self.records.len(),
            items,
        }
    }
}

/// A slice of the catalog for listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` items
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Convert the items, keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
