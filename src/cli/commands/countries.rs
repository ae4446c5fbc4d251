//! Country table listing

use anyhow::Result;

use crate::cli::output::{print_formatted, OutputFormat};
use crate::countries::{Country, CountryTable};

pub fn run(filter: Option<&str>, format: OutputFormat) -> Result<()> {
    let table = CountryTable::embedded();
    let matches: Vec<&Country> = table.filter(filter.unwrap_or_default()).collect();

    print_formatted(&matches, format, |countries| {
        if countries.is_empty() {
            return "No matching countries.".to_string();
        }
        countries
            .iter()
            .map(|c| format!("{}  {}", c.code, c.name))
            .collect::<Vec<_>>()
            .join("\n")
    });

    Ok(())
}
