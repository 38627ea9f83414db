//! Tokenized substring filter.
//!
//! # Responsibility
//! - Normalize a raw query into lowercase, punctuation-free tokens.
//! - Keep records matching every token in at least one searchable field.
//!
//! # Invariants
//! - A blank query returns the input collection unchanged.
//! - Surviving records keep their input order.
//! - Date fields match on their `en-US` long and short renderings only.

use crate::calendar::grid::month_name;
use crate::calendar::math::parse_date;
use crate::model::employee::{Employee, EmployeeField};
use chrono::{Datelike, NaiveDate};

const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Normalized search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Parses raw search box text.
    pub fn parse(text: &str) -> Self {
        let cleaned = text
            .to_lowercase()
            .replace(STRIPPED_PUNCTUATION, "");
        let tokens = cleaned
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether `employee` matches every token.
    pub fn matches(&self, employee: &Employee) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let haystack = SearchableEmployee::new(employee);
        self.tokens.iter().all(|token| haystack.contains(token))
    }
}

/// Filters `records` by the raw query `text`.
pub fn search(records: &[Employee], text: &str) -> Vec<Employee> {
    search_with(records, &SearchQuery::parse(text))
}

/// Filters `records` with an already parsed query.
pub fn search_with(records: &[Employee], query: &SearchQuery) -> Vec<Employee> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|employee| query.matches(employee))
        .cloned()
        .collect()
}

/// Lowercased renderings of every searchable field of one record.
struct SearchableEmployee {
    texts: Vec<String>,
}

impl SearchableEmployee {
    fn new(employee: &Employee) -> Self {
        let mut texts = Vec::with_capacity(EmployeeField::ALL.len() + 2);
        for field in EmployeeField::ALL {
            let value = employee.value(field);
            if field.is_date() {
                if let Some(date) = parse_date(value) {
                    texts.push(long_date(date).to_lowercase());
                    texts.push(short_date(date));
                }
            } else {
                texts.push(value.to_lowercase());
            }
        }
        Self { texts }
    }

    fn contains(&self, token: &str) -> bool {
        self.texts.iter().any(|text| text.contains(token))
    }
}

/// `January 5, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_name(date.month()).unwrap_or_default(),
        date.day(),
        date.year()
    )
}

/// `1/5/2024`.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::{long_date, short_date, SearchQuery};
    use chrono::NaiveDate;

    #[test]
    fn parse_strips_punctuation_and_lowercases() {
        let query = SearchQuery::parse("  O'Neil, J.-P.   (Sales)  ");
        assert_eq!(query.tokens(), ["o'neil", "jp", "sales"]);
    }

    #[test]
    fn blank_and_punctuation_only_queries_have_no_tokens() {
        assert!(SearchQuery::parse("").is_empty());
        assert!(SearchQuery::parse("   ").is_empty());
        assert!(SearchQuery::parse(" -- ... ").is_empty());
    }

    #[test]
    fn date_renderings_follow_en_us() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(long_date(date), "January 5, 2024");
        assert_eq!(short_date(date), "1/5/2024");
    }
}
