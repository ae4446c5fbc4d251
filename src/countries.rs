//! Country name/code lookup table.
//!
//! Built once at startup from the embedded ISO 3166 list and handed to the
//! dashboard and the CLI. Nothing here talks to the network.

use serde::Serialize;

use crate::app_data::{self, EmbeddedCountry};

/// A selectable country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2 code, upper case
    pub code: String,
}

impl Country {
    /// Label shown in the country picker, e.g. "India (IN)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Ordered country lookup table
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    countries: Vec<Country>,
}

impl CountryTable {
    /// Build a table from raw entries, normalizing codes and dropping blanks
    pub fn from_entries(entries: &[EmbeddedCountry]) -> Self {
        let countries = entries
            .iter()
            .filter(|e| !e.name.trim().is_empty() && !e.code.trim().is_empty())
            .map(|e| Country {
                name: e.name.trim().to_string(),
                code: e.code.trim().to_uppercase(),
            })
            .collect();

        Self { countries }
    }

    /// Table backed by the embedded ISO 3166 list
    pub fn embedded() -> Self {
        let table = Self::from_entries(app_data::embedded_countries());
        tracing::debug!("Loaded {} countries", table.len());
        table
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Find a country by code (case-insensitive)
    pub fn by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Countries whose name or code contains `needle` (case-insensitive).
    /// An empty needle matches everything.
    pub fn filter<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Country> + use<'a> {
        let needle = needle.trim().to_lowercase();
        self.countries.iter().filter(move |c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.code.to_lowercase().contains(&needle)
        })
    }
}
