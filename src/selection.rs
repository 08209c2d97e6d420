// =============================================================================
// Selected tags and the substring match rule
// =============================================================================

/// A record tag matches a selected tag when the selected tag is a
/// substring of it. Case-sensitive.
pub fn tag_matches(record_tag: &str, selected: &str) -> bool {
    record_tag.contains(selected)
}

/// User-chosen tag substrings, in the order they were typed.
///
/// Never empty: parsing input with no tokens yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTagSet {
    tags: Vec<String>,
}

impl SelectedTagSet {
    /// Parse comma-separated input
    /// Role: Keep tokens as typed, drop empty ones
    pub fn parse(input: &str) -> Option<Self> {
        let line = input.trim_end_matches(['\r', '\n']);
        Self::from_tags(line.split(',').map(str::to_owned))
    }

    pub fn from_tags<I, S>(tags: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags
            .into_iter()
            .map(Into::into)
            .filter(|tag| !tag.is_empty())
            .collect();

        if tags.is_empty() {
            None
        } else {
            Some(Self { tags })
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }
}
