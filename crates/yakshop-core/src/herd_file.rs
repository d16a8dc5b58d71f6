//! Herd snapshot loading.
//!
//! The herd file is a YAML document with a single `herd` list:
//!
//! ```yaml
//! herd:
//!   - name: Betty-1
//!     age: 4
//!     sex: f
//! ```
//!
//! Records missing a field, or carrying an unusable age, are skipped with a
//! warning rather than failing the whole load.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_yml::Value;
use tracing::{info, warn};
use yakshop_herd::{Herd, HerdError};
use yakshop_types::{Sex, Yak};

/// Errors that can occur when loading a herd file.
#[derive(Debug, thiserror::Error)]
pub enum HerdFileError {
    /// Failed to read the herd file from disk.
    #[error("failed to read herd file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The document is not valid YAML or lacks the `herd` list.
    #[error("failed to parse herd YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The records parsed but do not form a valid herd (duplicate names).
    #[error("invalid herd: {source}")]
    Herd {
        /// The underlying herd error.
        #[from]
        source: HerdError,
    },
}

impl From<serde_yml::Error> for HerdFileError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

#[derive(Debug, Deserialize)]
struct HerdDocument {
    #[serde(default)]
    herd: Vec<RawYak>,
}

/// One record as written, before validation.
#[derive(Debug, Deserialize)]
struct RawYak {
    name: Option<Value>,
    age: Option<Value>,
    sex: Option<Value>,
}

impl RawYak {
    fn into_yak(self) -> Result<Yak, String> {
        let name = self
            .name
            .as_ref()
            .and_then(scalar_text)
            .ok_or_else(|| String::from("missing name"))?;
        let age = self
            .age
            .as_ref()
            .and_then(scalar_text)
            .ok_or_else(|| String::from("missing age"))?;
        let age = Decimal::from_str(age.trim())
            .map_err(|e| format!("age {age:?} is not a number: {e}"))?;
        if age < Decimal::ZERO {
            return Err(format!("negative age {age}"));
        }
        let sex = self
            .sex
            .as_ref()
            .and_then(scalar_text)
            .ok_or_else(|| String::from("missing sex"))?;
        Ok(Yak::new(name, age, Sex::from_code(&sex)))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a herd from YAML text.
///
/// # Errors
///
/// Returns [`HerdFileError::Yaml`] for malformed YAML, or
/// [`HerdFileError::Herd`] if two kept records share a name.
pub fn parse_herd(yaml: &str) -> Result<Herd, HerdFileError> {
    let document: HerdDocument = serde_yml::from_str(yaml)?;

    let mut yaks = Vec::with_capacity(document.herd.len());
    for (index, raw) in document.herd.into_iter().enumerate() {
        match raw.into_yak() {
            Ok(yak) => yaks.push(yak),
            Err(reason) => warn!(index, %reason, "skipping herd record"),
        }
    }

    Ok(Herd::new(yaks)?)
}

/// Load a herd from a YAML file.
///
/// # Errors
///
/// Returns [`HerdFileError::Io`] if the file cannot be read, otherwise as
/// [`parse_herd`].
pub fn load_herd(path: &Path) -> Result<Herd, HerdFileError> {
    let contents = std::fs::read_to_string(path)?;
    let herd = parse_herd(&contents)?;
    info!(path = %path.display(), yaks = herd.len(), "herd loaded");
    Ok(herd)
}
