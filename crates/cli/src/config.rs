// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading of rate tables and command scripts.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use travel_portal::Command;
use travel_portal_domain::{AllowanceCategory, DomainError, RateTable};

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file was not valid JSON of the expected shape.
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        source: serde_json::Error,
    },

    /// The rate table was parsed but is not usable.
    #[error("Invalid rate table: {0}")]
    Rates(#[from] DomainError),
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a rate table from a JSON object of category label to daily rate.
///
/// Every category must be present. Rates may be JSON numbers or strings.
pub fn parse_rates(json: &str) -> Result<RateTable, ConfigError> {
    let raw: HashMap<String, Decimal> =
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "rate table",
            source,
        })?;

    let mut rates: HashMap<AllowanceCategory, Decimal> = HashMap::with_capacity(raw.len());
    for (label, rate) in raw {
        rates.insert(label.parse::<AllowanceCategory>()?, rate);
    }

    Ok(RateTable::new(&rates)?)
}

/// Parses a command script from a JSON array of commands.
pub fn parse_script(json: &str) -> Result<Vec<Command>, ConfigError> {
    serde_json::from_str(json).map_err(|source| ConfigError::Parse {
        what: "command script",
        source,
    })
}

/// Loads the rate table, falling back to the standard table when no path is given.
pub fn load_rates(path: Option<&Path>) -> Result<RateTable, ConfigError> {
    path.map_or_else(|| Ok(RateTable::standard()), |path| parse_rates(&read(path)?))
}

/// Loads a command script from a file.
pub fn load_script(path: &Path) -> Result<Vec<Command>, ConfigError> {
    parse_script(&read(path)?)
}
