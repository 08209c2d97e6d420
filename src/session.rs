//! The interactive session: loaded records plus the current tag selection.

use crate::aggregate::{tag_averages, TagAverage};
use crate::bench::{run_benchmark, BenchmarkReport, Stopwatch};
use crate::error::{AnalyzerError, Result};
use crate::record::RecordStore;
use crate::selection::SelectedTagSet;
use crate::topk::{top_k_by_ratio, RankedVideo};

#[derive(Debug, Default)]
pub struct Session {
    store: RecordStore,
    selection: Option<SelectedTagSet>,
}

impl Session {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            selection: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> Option<&SelectedTagSet> {
        self.selection.as_ref()
    }

    /// Replace the selection with the tags parsed from `input`.
    /// Input with no tags clears it. Returns the number of tags now selected.
    pub fn select_tags(&mut self, input: &str) -> usize {
        self.selection = SelectedTagSet::parse(input);
        self.selection.as_ref().map_or(0, SelectedTagSet::len)
    }

    fn require_selection(&self) -> Result<&SelectedTagSet> {
        self.selection.as_ref().ok_or(AnalyzerError::EmptySelection)
    }

    pub fn top_k(&self, k: usize) -> Result<Vec<RankedVideo>> {
        let selection = self.require_selection()?;
        Ok(top_k_by_ratio(&self.store, selection, k))
    }

    pub fn tag_averages(&self) -> Result<Vec<TagAverage>> {
        let selection = self.require_selection()?;
        Ok(tag_averages(&self.store, selection))
    }

    pub fn benchmark<S: Stopwatch + ?Sized>(
        &self,
        top_k: usize,
        runs: usize,
        stopwatch: &mut S,
    ) -> Result<BenchmarkReport> {
        let selection = self.require_selection()?;
        Ok(run_benchmark(&self.store, selection, top_k, runs, stopwatch))
    }
}
