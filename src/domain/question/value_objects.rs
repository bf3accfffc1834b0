/// Reference from a question to a category, as stored on the question row
///
/// # Invariants
/// - Never carries surrounding whitespace once constructed
///
/// Older rows were written both as `"1"` and `" 1"`, so reads that filter by
/// category must match both [`CategoryKey::stored_forms`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Normalizes a raw category reference for writing
    pub fn normalize(raw: &str) -> Self {
        CategoryKey(raw.trim().to_string())
    }

    /// The two representations a category id may have in stored rows
    ///
    /// # Example
    /// ```
    /// use trivia_api::domain::question::CategoryKey;
    ///
    /// assert_eq!(CategoryKey::stored_forms(2), ["2".to_string(), " 2".to_string()]);
    /// ```
    pub fn stored_forms(id: i32) -> [String; 2] {
        [id.to_string(), format!(" {}", id)]
    }

    /// Whether a stored category value refers to the given category id
    pub fn matches_stored(stored: &str, id: i32) -> bool {
        Self::stored_forms(id).iter().any(|form| form == stored)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Case-insensitive literal substring filter over question text
///
/// An empty term matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for an absent or empty term
    pub fn new(term: Option<&str>) -> Option<Self> {
        match term {
            Some(t) if !t.is_empty() => Some(SearchTerm(t.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `ILIKE` pattern with the term's own wildcards escaped
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// In-process equivalent of the `ILIKE` pattern
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}
