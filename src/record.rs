// =============================================================================
// Video records and the read-only record store
// =============================================================================

/// One video row with its derived like/view ratio.
///
/// Fields are private so the ratio can never drift from views and likes.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    title: String,
    tags: Vec<String>,
    views: f64,
    likes: f64,
    ratio: f64,
}

impl VideoRecord {
    /// Build a record and derive its ratio
    /// Role: Guard against zero views so the ratio is always finite
    pub fn new(title: impl Into<String>, tags: Vec<String>, views: f64, likes: f64) -> Self {
        let ratio = if views > 0.0 {
            let ratio = likes / views;
            if ratio.is_finite() {
                ratio
            } else {
                0.0
            }
        } else {
            0.0
        };

        Self {
            title: title.into(),
            tags,
            views,
            likes,
            ratio,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn views(&self) -> f64 {
        self.views
    }

    pub fn likes(&self) -> f64 {
        self.likes
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

/// All loaded records, in load order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<VideoRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VideoRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[VideoRecord] {
        &self.records
    }
}

impl FromIterator<VideoRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = VideoRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a VideoRecord;
    type IntoIter = std::slice::Iter<'a, VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_likes_over_views() {
        let record = VideoRecord::new("a", vec!["music".into()], 200.0, 50.0);
        assert_eq!(record.ratio(), 0.25);
    }

    #[test]
    fn test_zero_views_gives_zero_ratio() {
        let record = VideoRecord::new("a", vec![], 0.0, 10.0);
        assert_eq!(record.ratio(), 0.0);
        assert!(record.ratio().is_finite());
    }

    #[test]
    fn test_overflowing_ratio_is_clamped_to_zero() {
        let record = VideoRecord::new("a", vec![], f64::MIN_POSITIVE / 4.0, f64::MAX);
        assert!(record.ratio().is_finite());
    }

    #[test]
    fn test_store_preserves_order() {
        let store: RecordStore = ["x", "y", "z"]
            .into_iter()
            .map(|title| VideoRecord::new(title, vec![], 1.0, 1.0))
            .collect();

        assert_eq!(store.len(), 3);
        let titles: Vec<_> = store.iter().map(VideoRecord::title).collect();
        assert_eq!(titles, vec!["x", "y", "z"]);
    }
}
