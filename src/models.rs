//! Data models for blog import and the article store.
//!
//! This module defines the core data structures used throughout the importer:
//! - [`CandidateCard`]: One raw listing card as extracted from a blog page
//! - [`ArticleRow`]: A persisted article as written to / read from the store
//! - [`SortField`] / [`SortDirection`]: The normalized sort inputs accepted
//!   by the store's read interface
//!
//! Candidate cards are ephemeral: they live only for the page they were
//! extracted from and are consumed immediately by the crawl filter. Article
//! rows accumulate for the whole run and are persisted in one bulk replace.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One article card from a blog listing page, before filtering.
///
/// All fields carry the raw extracted values; validation (non-empty title,
/// parseable date, allowed category) is deferred to the crawl filter.
#[derive(Debug, Clone)]
pub struct CandidateCard {
    /// The card anchor's link target, possibly relative, empty if absent.
    pub href: String,
    /// Trimmed title text, empty if the title sub-element is missing.
    pub title: String,
    /// Trimmed date text in whatever format the site renders, empty if missing.
    pub date_text: String,
    /// Normalized category labels (lowercased, whitespace-collapsed, trimmed),
    /// in document order, duplicates preserved.
    pub categories: Vec<String>,
}

/// A persisted article as stored in the `articles` table.
///
/// `created_at` and `updated_at` are the same for every row of a given run:
/// a single timestamp captured once when the run starts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleRow {
    /// The article URL, unique within one import run.
    pub url: String,
    /// The article title, never empty for an accepted row.
    pub title: String,
    /// Publication date, date only, never earlier than the run's cutoff.
    pub published_at: NaiveDate,
    /// Run start timestamp.
    pub created_at: DateTime<Utc>,
    /// Run start timestamp, equal to `created_at` on import.
    pub updated_at: DateTime<Utc>,
}

/// Column the store's read interface can order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    PublishedAt,
}

impl SortField {
    /// Normalize an arbitrary caller-supplied sort key to a safe column.
    ///
    /// Only `published_at` is recognized; everything else falls back to
    /// `title`, mirroring the upstream service's sanitization rule.
    pub fn normalize(input: &str) -> Self {
        if input == "published_at" {
            SortField::PublishedAt
        } else {
            SortField::Title
        }
    }

    /// Column name for use in ORDER BY. Values are fixed identifiers, never
    /// caller input.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::PublishedAt => "published_at",
        }
    }
}

/// Direction the store's read interface can order in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Normalize an arbitrary caller-supplied direction; anything other than
    /// `desc` sorts ascending.
    pub fn normalize(input: &str) -> Self {
        if input == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_card_creation() {
        let card = CandidateCard {
            href: "/blog/some-article".to_string(),
            title: "Some Article".to_string(),
            date_text: "April 24, 2025".to_string(),
            categories: vec!["logistics industry".to_string()],
        };
        assert_eq!(card.href, "/blog/some-article");
        assert_eq!(card.categories.len(), 1);
    }

    #[test]
    fn test_article_row_serialization() {
        let row = ArticleRow {
            url: "/blog/some-article".to_string(),
            title: "Some Article".to_string(),
            published_at: NaiveDate::from_ymd_opt(2025, 4, 24).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("2025-04-24"));
        assert!(json.contains("Some Article"));
    }

    #[test]
    fn test_sort_field_normalize_known_values() {
        assert_eq!(SortField::normalize("published_at"), SortField::PublishedAt);
        assert_eq!(SortField::normalize("title"), SortField::Title);
    }

    #[test]
    fn test_sort_field_normalize_falls_back_to_title() {
        assert_eq!(SortField::normalize("created_at"), SortField::Title);
        assert_eq!(SortField::normalize(""), SortField::Title);
        assert_eq!(
            SortField::normalize("published_at; DROP TABLE articles"),
            SortField::Title
        );
    }

    #[test]
    fn test_sort_direction_normalize() {
        assert_eq!(SortDirection::normalize("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::normalize("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::normalize("DESC"), SortDirection::Asc);
        assert_eq!(SortDirection::normalize("sideways"), SortDirection::Asc);
    }

    #[test]
    fn test_sql_fragments_are_fixed_identifiers() {
        assert_eq!(SortField::Title.as_sql(), "title");
        assert_eq!(SortField::PublishedAt.as_sql(), "published_at");
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }
}
