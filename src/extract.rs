//! Card extraction from blog listing HTML.
//!
//! A listing page carries zero or more article cards, each an anchor element
//! with the `articles-row` marker class. Within a card:
//!
//! - `.articles-ttl` holds the title
//! - `.articles-date` holds the human-readable publication date
//! - `.articles-categories__item` holds one category label each
//!
//! Extraction is schema-tolerant: a card missing any sub-element still yields
//! a [`CandidateCard`] with empty fields, and the crawl filter decides its
//! fate. The `has_cards` flag reports whether any card anchor exists at all,
//! which is the pagination driver's only end-of-listing signal.

use crate::models::CandidateCard;
use crate::utils::normalize_category;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

static CARD_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a.articles-row").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".articles-ttl").unwrap());
static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".articles-date").unwrap());
static CATEGORY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".articles-categories__item").unwrap());

/// Extract every article card from one listing page.
///
/// # Returns
///
/// The candidate cards in document order, and `has_cards`, true iff at least
/// one card anchor exists in the document regardless of card contents.
pub fn extract_cards(html: &str) -> (Vec<CandidateCard>, bool) {
    let document = Html::parse_document(html);

    let mut cards = Vec::new();
    for element in document.select(&CARD_SELECTOR) {
        cards.push(extract_card(element));
    }

    let has_cards = !cards.is_empty();
    debug!(count = cards.len(), has_cards, "Extracted article cards");
    (cards, has_cards)
}

/// Pull the structured fields out of one card anchor.
fn extract_card(card: ElementRef<'_>) -> CandidateCard {
    let href = card.value().attr("href").unwrap_or("").to_string();
    let title = first_text(card, &TITLE_SELECTOR);
    let date_text = first_text(card, &DATE_SELECTOR);

    let categories = card
        .select(&CATEGORY_SELECTOR)
        .map(|n| normalize_category(&element_text(n)))
        .collect();

    CandidateCard {
        href,
        title,
        date_text,
        categories,
    }
}

/// Trimmed text of the first sub-element matching `selector`, or empty.
fn first_text(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector)
        .next()
        .map(|n| element_text(n).trim().to_string())
        .unwrap_or_default()
}

/// Concatenated text content of an element and its descendants.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}
