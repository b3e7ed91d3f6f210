use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Baseline;
use crate::foundation::error::{LifeGridError, LifeGridResult};
use crate::layout::planner::LayoutTable;

/// Presentation settings shared by every grid a [`crate::LifeGrid`] assembles.
///
/// Every field has a default, so `{}` is a valid document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeGridConfig {
    /// Layout band per granularity.
    #[serde(default)]
    pub layout: LayoutTable,
    /// Colors of cells no activity paints.
    #[serde(default)]
    pub baseline: Baseline,
}

impl LifeGridConfig {
    /// Parse and validate a config from a JSON reader.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: Read>(r: R) -> LifeGridResult<Self> {
        let cfg: Self = read_json(r, "config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LifeGridResult<Self> {
        Self::from_reader(open_json(path.as_ref(), "config")?)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> LifeGridResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Check the layout bands.
    pub fn validate(&self) -> LifeGridResult<()> {
        self.layout.validate()
    }
}

pub(crate) fn read_json<T: DeserializeOwned, R: Read>(r: R, what: &str) -> LifeGridResult<T> {
    serde_json::from_reader(r).map_err(|e| LifeGridError::serde(format!("parse {what} JSON: {e}")))
}

pub(crate) fn open_json(path: &Path, what: &str) -> LifeGridResult<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open {what} JSON '{}'", path.display()))?;
    Ok(BufReader::new(f))
}

#[cfg(test)]
#[path = "../../tests/unit/config/document.rs"]
mod tests;
