//! Keep/reject rules turning candidate cards into persistable rows.
//!
//! The rules run in a fixed order and short-circuit on the first rejection:
//!
//! 1. Empty href
//! 2. Href already seen this run
//! 3. (mark href seen)
//! 4. No category on the allow-list
//! 5. Empty title or empty date text
//! 6. Unparseable date text
//! 7. Published before the cutoff
//!
//! Seen-marking happens before category/title/date validation: a card that
//! fails a later check stays excluded under that URL for the rest of the run,
//! even if the same URL reappears on a later page with different content.
//! De-duplication is by URL identity, not by acceptance outcome.

use crate::models::{ArticleRow, CandidateCard};
use chrono::{DateTime, Months, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::trace;

/// Category labels that qualify an article for import. Matched by exact
/// equality against normalized card categories.
pub const ALLOWED_CATEGORIES: &[&str] = &["logistics industry"];

/// How far back the import window reaches, in calendar months.
const CUTOFF_MONTHS: u32 = 4;

/// Date formats the source blog has been observed to render.
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y", // April 24, 2025
    "%b %d, %Y", // Apr 24, 2025
    "%d %B %Y",  // 24 April 2025
    "%d %b %Y",  // 24 Apr 2025
    "%Y-%m-%d",  // 2025-04-24
    "%d.%m.%Y",  // 24.04.2025
];

/// Compute the run's cutoff date: `now` minus [`CUTOFF_MONTHS`] calendar
/// months without day overflow, truncated to a date.
///
/// An article published exactly on the cutoff date is still imported.
pub fn run_cutoff(now: DateTime<Utc>) -> NaiveDate {
    let today = now.date_naive();
    today
        .checked_sub_months(Months::new(CUTOFF_MONTHS))
        .unwrap_or(today)
}

/// Parse a card's date text into a calendar date, trying each known format.
pub fn parse_card_date(date_text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_text, fmt).ok())
}

/// Apply the keep/reject rules to one candidate card.
///
/// Mutates `seen`: any non-empty href not yet in the set is marked seen,
/// whether or not the card is ultimately accepted.
///
/// # Returns
///
/// The persistable row for an accepted card, `None` for a rejected one.
pub fn filter_card(
    card: CandidateCard,
    seen: &mut HashSet<String>,
    cutoff: NaiveDate,
    run_ts: DateTime<Utc>,
) -> Option<ArticleRow> {
    if card.href.is_empty() {
        return None;
    }
    if seen.contains(&card.href) {
        trace!(href = %card.href, "Duplicate href; skipping");
        return None;
    }
    seen.insert(card.href.clone());

    let allowed = card
        .categories
        .iter()
        .any(|c| ALLOWED_CATEGORIES.contains(&c.as_str()));
    if !allowed {
        trace!(href = %card.href, "No allow-listed category; skipping");
        return None;
    }

    if card.title.is_empty() || card.date_text.is_empty() {
        return None;
    }

    let published = match parse_card_date(&card.date_text) {
        Some(d) => d,
        None => {
            trace!(href = %card.href, date_text = %card.date_text, "Unparseable date; skipping");
            return None;
        }
    };

    if published < cutoff {
        trace!(href = %card.href, %published, %cutoff, "Older than cutoff; skipping");
        return None;
    }

    Some(ArticleRow {
        url: card.href,
        title: card.title,
        published_at: published,
        created_at: run_ts,
        updated_at: run_ts,
    })
}
