//! Hash-table strategy: mean like/view ratio per selected tag.

use std::collections::HashMap;

use crate::record::RecordStore;
use crate::selection::{tag_matches, SelectedTagSet};

/// Mean ratio over the matches of one selected tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagStats {
    pub mean: f64,
    pub count: usize,
}

/// Result for one selected tag. `stats` is `None` when nothing matched.
#[derive(Debug, Clone, PartialEq)]
pub struct TagAverage {
    pub tag: String,
    pub stats: Option<TagStats>,
}

/// Group ratios by selected tag and average them
/// Role: One entry per selected tag, in selection order
///
/// Like the heap strategy, a record contributes once per matching raw tag.
pub fn tag_averages(store: &RecordStore, selection: &SelectedTagSet) -> Vec<TagAverage> {
    let mut ratios_by_tag: HashMap<&str, Vec<f64>> = HashMap::with_capacity(selection.len());

    for record in store {
        for tag in record.tags() {
            for selected in selection.iter() {
                if tag_matches(tag, selected) {
                    ratios_by_tag
                        .entry(selected.as_str())
                        .or_default()
                        .push(record.ratio());
                }
            }
        }
    }

    selection
        .iter()
        .map(|selected| {
            let stats = ratios_by_tag
                .get(selected.as_str())
                .filter(|ratios| !ratios.is_empty())
                .map(|ratios| TagStats {
                    mean: ratios.iter().sum::<f64>() / ratios.len() as f64,
                    count: ratios.len(),
                });
            TagAverage {
                tag: selected.clone(),
                stats,
            }
        })
        .collect()
}
