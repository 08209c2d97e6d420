// =============================================================================
// Configuration loaded from TOML, every field defaulted
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bench::DEFAULT_RUNS;
use crate::error::{AnalyzerError, Result};
use crate::topk::DEFAULT_TOP_K;

/// Column positions in the trending-videos CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvLayout {
    pub title_column: usize,
    pub tags_column: usize,
    pub views_column: usize,
    pub likes_column: usize,
    /// Rows with fewer fields are skipped.
    pub min_fields: usize,
    pub tag_delimiter: char,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            title_column: 2,
            tags_column: 6,
            views_column: 7,
            likes_column: 8,
            min_fields: 16,
            tag_delimiter: '|',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: PathBuf,
    pub top_k: usize,
    pub benchmark_runs: usize,
    /// Below this many records a "dataset too small" warning is shown.
    pub min_expected_records: usize,
    pub layout: CsvLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            top_k: DEFAULT_TOP_K,
            benchmark_runs: DEFAULT_RUNS,
            min_expected_records: 100_000,
            layout: CsvLayout::default(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AnalyzerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(AnalyzerError::InvalidConfig("top_k must be at least 1".into()));
        }
        if self.benchmark_runs == 0 {
            return Err(AnalyzerError::InvalidConfig(
                "benchmark_runs must be at least 1".into(),
            ));
        }

        let layout = &self.layout;
        let columns = [
            ("title_column", layout.title_column),
            ("tags_column", layout.tags_column),
            ("views_column", layout.views_column),
            ("likes_column", layout.likes_column),
        ];
        for (name, column) in columns {
            if column >= layout.min_fields {
                return Err(AnalyzerError::InvalidConfig(format!(
                    "layout.{name} = {column} does not fit in min_fields = {}",
                    layout.min_fields
                )));
            }
        }
        Ok(())
    }
}
