use chrono::{DateTime, Datelike};

use crate::core::models::NewsItem;

/// Weekday names indexed by weekday number, Monday first.
const KOREAN_WEEKDAYS: [&str; 7] = [
    "월요일",
    "화요일",
    "수요일",
    "목요일",
    "금요일",
    "토요일",
    "일요일",
];

/// The fixed markup set the API embeds around matched terms. Allow-listed
/// substring replacement only; `&amp;` goes last so an already-escaped entity
/// is never unescaped twice.
const MARKUP_REPLACEMENTS: [(&str, &str); 7] = [
    ("<b>", ""),
    ("</b>", ""),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
];

/// One article reduced to display-ready strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNewsItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub published: String,
}

impl DisplayNewsItem {
    pub fn from_item(item: &NewsItem) -> Self {
        Self {
            title: strip_emphasis_markup(&item.title),
            description: strip_emphasis_markup(&item.description),
            link: item.link.clone(),
            published: format_publication_date(&item.pub_date),
        }
    }
}

pub fn strip_emphasis_markup(raw: &str) -> String {
    MARKUP_REPLACEMENTS
        .iter()
        .fold(raw.to_string(), |text, (needle, replacement)| {
            text.replace(needle, replacement)
        })
}

/// RFC 2822 timestamp to `YYYY-MM-DD HH:MM <weekday>` in the timestamp's own
/// offset. An unparsable value degrades to the raw string, never an error.
pub fn format_publication_date(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw) {
        Ok(parsed) => {
            let weekday = KOREAN_WEEKDAYS[parsed.weekday().num_days_from_monday() as usize];
            format!("{} {}", parsed.format("%Y-%m-%d %H:%M"), weekday)
        }
        Err(_) => {
            log::debug!("[PRESENTER] Unparsable pubDate, displaying verbatim: {}", raw);
            raw.to_string()
        }
    }
}

/// Splits items into the two display columns: 1-based odd positions go left,
/// even positions go right. API ordering is preserved within each column.
pub fn assign_columns(items: &[NewsItem]) -> (Vec<DisplayNewsItem>, Vec<DisplayNewsItem>) {
    let mut left_column = Vec::with_capacity(items.len().div_ceil(2));
    let mut right_column = Vec::with_capacity(items.len() / 2);

    for (index, item) in items.iter().enumerate() {
        let display_item = DisplayNewsItem::from_item(item);
        if index % 2 == 0 {
            left_column.push(display_item);
        } else {
            right_column.push(display_item);
        }
    }

    (left_column, right_column)
}
