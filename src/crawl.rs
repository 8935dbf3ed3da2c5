//! Pagination driver: walks the blog listing page by page.
//!
//! The crawl is strictly sequential. Each page is fetched, extracted, and
//! filtered to completion before the next page is requested; the source site
//! never sees more than one in-flight request from a run.
//!
//! Termination: the crawl stops when a page yields zero card anchors, or when
//! a fetch fails (an unavailable page is treated the same as an empty one
//! rather than aborting the run), or when the optional page cap is reached.

use crate::extract::extract_cards;
use crate::fetch::PageFetcher;
use crate::filter::filter_card;
use crate::models::ArticleRow;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Build the listing URL for one page. Page 1 is the bare listing path;
/// later pages carry a page query parameter.
fn listing_url(base_url: &str, page: u32) -> String {
    if page > 1 {
        format!("{}/blog?page={}", base_url, page)
    } else {
        format!("{}/blog", base_url)
    }
}

/// Crawl the listing from page 1 until it runs out of cards.
///
/// Accepted rows accumulate in encounter order; the seen-set spans the whole
/// run, so a URL that appears on more than one page is imported only once,
/// from its first encounter.
///
/// # Arguments
///
/// * `fetcher` - Page source (the real HTTP fetcher, or a fake in tests)
/// * `base_url` - Site root, without the `/blog` path
/// * `cutoff` - Earliest publication date (inclusive) to import
/// * `run_ts` - Timestamp stamped on every row of this run
/// * `max_pages` - Optional safety cap on pages fetched; `None` preserves the
///   unbounded behavior of relying on the site's end-of-listing signal
pub async fn crawl<F: PageFetcher + ?Sized>(
    fetcher: &F,
    base_url: &str,
    cutoff: NaiveDate,
    run_ts: DateTime<Utc>,
    max_pages: Option<u32>,
) -> Vec<ArticleRow> {
    let mut rows: Vec<ArticleRow> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut page: u32 = 1;

    loop {
        if let Some(cap) = max_pages {
            if page > cap {
                warn!(cap, "Page cap reached; stopping crawl early");
                break;
            }
        }

        let url = listing_url(base_url, page);
        debug!(%url, page, "Fetching listing page");

        let Some(html) = fetcher.fetch(&url).await else {
            // An unavailable page ends pagination the same way an empty one does.
            info!(page, "Listing page unavailable; stopping crawl");
            break;
        };

        let (cards, has_cards) = extract_cards(&html);
        let card_count = cards.len();

        let mut kept = 0usize;
        for card in cards {
            if let Some(row) = filter_card(card, &mut seen, cutoff, run_ts) {
                rows.push(row);
                kept += 1;
            }
        }
        debug!(page, cards = card_count, kept, "Processed listing page");

        if !has_cards {
            info!(page, "No cards on page; end of listing");
            break;
        }
        page += 1;
    }

    info!(pages = page, rows = rows.len(), "Crawl finished");
    rows
}
