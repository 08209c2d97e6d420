//! Heap strategy: top-k videos by like/view ratio.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::record::RecordStore;
use crate::selection::{tag_matches, SelectedTagSet};

pub const DEFAULT_TOP_K: usize = 10;

/// One ranked result, rank starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVideo {
    pub rank: usize,
    pub title: String,
    pub ratio: f64,
}

#[derive(Debug)]
struct RatioEntry<'a> {
    ratio: f64,
    title: &'a str,
}

impl Ord for RatioEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ratio
            .total_cmp(&other.ratio)
            .then_with(|| self.title.cmp(other.title))
    }
}

impl PartialOrd for RatioEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RatioEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RatioEntry<'_> {}

/// Select the `k` highest-ratio videos among those with a matching tag
/// Role: Push every (record tag, selected tag) match into a max-heap, pop k
///
/// A record is pushed once per matching pair, so a video with two tags that
/// both contain a selected tag can occupy two ranks.
pub fn top_k_by_ratio(store: &RecordStore, selection: &SelectedTagSet, k: usize) -> Vec<RankedVideo> {
    let mut heap = BinaryHeap::new();

    for record in store {
        for tag in record.tags() {
            for selected in selection.iter() {
                if tag_matches(tag, selected) {
                    heap.push(RatioEntry {
                        ratio: record.ratio(),
                        title: record.title(),
                    });
                }
            }
        }
    }

    let mut ranked = Vec::with_capacity(k.min(heap.len()));
    while ranked.len() < k {
        let Some(entry) = heap.pop() else {
            break;
        };
        ranked.push(RankedVideo {
            rank: ranked.len() + 1,
            title: entry.title.to_owned(),
            ratio: entry.ratio,
        });
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::VideoRecord;

    fn video(title: &str, tags: &[&str], views: f64, likes: f64) -> VideoRecord {
        VideoRecord::new(title, tags.iter().map(|t| t.to_string()).collect(), views, likes)
    }

    fn select(tags: &[&str]) -> SelectedTagSet {
        SelectedTagSet::from_tags(tags.iter().copied()).unwrap()
    }

    #[test]
    fn test_orders_by_descending_ratio() {
        let store = RecordStore::new(vec![
            video("low", &["music"], 100.0, 10.0),
            video("high", &["music"], 100.0, 90.0),
            video("mid", &["music"], 100.0, 50.0),
        ]);

        let ranked = top_k_by_ratio(&store, &select(&["music"]), DEFAULT_TOP_K);
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_truncates_to_k() {
        let store: RecordStore = (0..25)
            .map(|i| video(&format!("v{i}"), &["gaming"], 100.0, i as f64))
            .collect();

        let ranked = top_k_by_ratio(&store, &select(&["gaming"]), DEFAULT_TOP_K);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].title, "v24");
        assert_eq!(ranked[9].title, "v15");
    }

    #[test]
    fn test_skips_non_matching_records() {
        let store = RecordStore::new(vec![
            video("a", &["news"], 10.0, 5.0),
            video("b", &["music"], 10.0, 1.0),
        ]);

        let ranked = top_k_by_ratio(&store, &select(&["music"]), DEFAULT_TOP_K);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "b");
    }

    #[test]
    fn test_no_match_is_empty() {
        let store = RecordStore::new(vec![video("a", &["news"], 10.0, 5.0)]);
        assert!(top_k_by_ratio(&store, &select(&["cooking"]), DEFAULT_TOP_K).is_empty());
    }

    #[test]
    fn test_record_counted_once_per_matching_tag() {
        let store = RecordStore::new(vec![video("clip", &["music", "musicvideo"], 10.0, 2.0)]);

        let ranked = top_k_by_ratio(&store, &select(&["music"]), DEFAULT_TOP_K);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.title == "clip"));
    }

    #[test]
    fn test_zero_views_record_still_ranked() {
        let store = RecordStore::new(vec![video("fresh", &["music"], 0.0, 0.0)]);

        let ranked = top_k_by_ratio(&store, &select(&["music"]), DEFAULT_TOP_K);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].ratio, 0.0);
    }

    #[test]
    fn test_k_zero_returns_nothing() {
        let store = RecordStore::new(vec![video("a", &["music"], 1.0, 1.0)]);
        assert!(top_k_by_ratio(&store, &select(&["music"]), 0).is_empty());
    }
}
