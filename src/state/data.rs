/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the database layer and the UI layer.

/// One recorded rating from the history database
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRecord {
    /// Unique database ID
    pub id: i64,
    /// The local path that was rated
    pub path: String,
    /// Verdict label: "safe", "suspicious" or "error"
    pub verdict: String,
    /// Error detail when the verdict is "error" (None otherwise)
    pub detail: Option<String>,
    /// Unix timestamp of when the rating was applied
    pub rated_at: i64,
}
