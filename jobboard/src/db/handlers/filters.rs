//! Case-insensitive "contains" predicates for job listings.
//!
//! Optional title and location filters are trimmed and wrapped in `%...%`, then matched with
//! `ILIKE` so case folding happens in Postgres for both sides. A value that is absent, empty or
//! whitespace-only contributes no predicate. User input is bound as a parameter but `%` and `_`
//! are not escaped, so they keep their LIKE wildcard meaning.

use sqlx::{Postgres, QueryBuilder};

/// Optional title/location filters shared by every job-shaped listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearch {
    pub title: Option<String>,
    pub location: Option<String>,
}

impl JobSearch {
    pub fn new(title: Option<String>, location: Option<String>) -> Self {
        Self { title, location }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Append `AND <alias>.title ILIKE ...` and the location equivalent for every filter
    /// that is set. `alias` is the table alias of the jobs table in the surrounding query.
    pub fn push_predicates(&self, query: &mut QueryBuilder<'_, Postgres>, alias: &str) {
        push_contains(query, &format!("{alias}.title"), self.title.as_deref());
        push_contains(query, &format!("{alias}.location"), self.location.as_deref());
    }
}

/// ILIKE pattern for a "contains" match, or `None` when the filter should be skipped.
pub fn contains_pattern(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    Some(format!("%{value}%"))
}

/// Push ` AND column ILIKE $n` for a non-empty value.
pub fn push_contains(query: &mut QueryBuilder<'_, Postgres>, column: &str, value: Option<&str>) {
    if let Some(pattern) = contains_pattern(value) {
        tracing::trace!(column, pattern = %pattern, "adding contains predicate");
        query.push(format!(" AND {column} ILIKE "));
        query.push_bind(pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new("SELECT * FROM jobs j WHERE 1=1")
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern(Some("Dev")), Some("%Dev%".to_string()));
        assert_eq!(contains_pattern(Some("  Remote ")), Some("%Remote%".to_string()));
        assert_eq!(contains_pattern(Some("İstanbul")), Some("%İstanbul%".to_string()));
        assert_eq!(contains_pattern(Some("")), None);
        assert_eq!(contains_pattern(Some("   \t")), None);
        assert_eq!(contains_pattern(None), None);
    }

    #[test]
    fn test_wildcards_are_not_escaped() {
        assert_eq!(contains_pattern(Some("100%")), Some("%100%%".to_string()));
        assert_eq!(contains_pattern(Some("a_b")), Some("%a_b%".to_string()));
    }

    #[test]
    fn test_no_filters_leave_query_untouched() {
        let mut query = base();
        JobSearch::default().push_predicates(&mut query, "j");
        assert_eq!(query.sql(), "SELECT * FROM jobs j WHERE 1=1");

        let mut query = base();
        JobSearch::new(Some(" ".to_string()), Some(String::new())).push_predicates(&mut query, "j");
        assert_eq!(query.sql(), "SELECT * FROM jobs j WHERE 1=1");
    }

    #[test]
    fn test_title_only() {
        let mut query = base();
        JobSearch::default().with_title("Engineer").push_predicates(&mut query, "j");
        assert_eq!(query.sql(), "SELECT * FROM jobs j WHERE 1=1 AND j.title ILIKE $1");
    }

    #[test]
    fn test_both_filters_are_anded() {
        let mut query = base();
        JobSearch::default()
            .with_title("Dev")
            .with_location("NYC")
            .push_predicates(&mut query, "j");
        assert_eq!(
            query.sql(),
            "SELECT * FROM jobs j WHERE 1=1 AND j.title ILIKE $1 AND j.location ILIKE $2"
        );
    }
}
