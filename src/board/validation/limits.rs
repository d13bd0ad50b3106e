//! Field bounds applied by the task validator.

/// Bounds for task payload validation.
///
/// Lengths are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use kanban_board::board::validation::ValidationLimits;
///
/// let limits = ValidationLimits::default();
/// assert_eq!(limits.max_title_length, 255);
/// assert_eq!(limits.max_import_batch, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum title length.
    pub max_title_length: usize,
    /// Maximum description length.
    pub max_description_length: usize,
    /// Maximum number of tags.
    pub max_tags: usize,
    /// Maximum length of a single tag.
    pub max_tag_length: usize,
    /// Maximum number of links.
    pub max_links: usize,
    /// Maximum link URL length.
    pub max_link_url_length: usize,
    /// Maximum link title length.
    pub max_link_title_length: usize,
    /// Maximum number of tasks accepted by one import.
    pub max_import_batch: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_title_length: 255,
            max_description_length: 10_000,
            max_tags: 20,
            max_tag_length: 50,
            max_links: 50,
            max_link_url_length: 2000,
            max_link_title_length: 200,
            max_import_batch: 1000,
        }
    }
}
