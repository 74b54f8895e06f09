//! Normalized search request.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::config::SearchConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Lenient parse: `"desc"` (any case) is descending, everything else ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Filter value a searchable repository understands.
///
/// A blank filter is dropped while building `SearchParams`, so the pipeline
/// skips filtering entirely.
pub trait SearchFilter: Clone + core::fmt::Debug + Send + Sync + 'static {
    fn is_blank(&self) -> bool {
        false
    }
}

impl SearchFilter for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Raw, caller-supplied request values before normalization.
#[derive(Debug, Clone)]
pub struct SearchProps<F> {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<F>,
}

impl<F> Default for SearchProps<F> {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

/// Search request with every field coerced into range.
///
/// - `page` >= 1 (anything else becomes 1)
/// - `per_page` in `1..=max_per_page` (non-positive becomes the default,
///   oversized is clamped)
/// - `sort` is `None` for missing or empty names
/// - `filter` is `None` for missing or blank values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSearchParams<F>", bound(deserialize = "F: SearchFilter + Deserialize<'de>"))]
pub struct SearchParams<F: SearchFilter = String> {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: SortDirection,
    filter: Option<F>,
}

impl<F: SearchFilter> SearchParams<F> {
    pub fn new(props: SearchProps<F>) -> Self {
        Self::with_config(props, &SearchConfig::default())
    }

    pub fn with_config(props: SearchProps<F>, config: &SearchConfig) -> Self {
        Self {
            page: normalize_page(props.page),
            per_page: normalize_per_page(props.per_page, config),
            sort: props.sort.filter(|s| !s.is_empty()),
            sort_dir: props
                .sort_dir
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
            filter: props.filter.filter(|f| !f.is_blank()),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }
}

impl<F: SearchFilter> Default for SearchParams<F> {
    fn default() -> Self {
        Self::new(SearchProps::default())
    }
}

fn normalize_page(page: Option<i64>) -> u64 {
    match page {
        Some(p) if p >= 1 => p as u64,
        _ => 1,
    }
}

fn normalize_per_page(per_page: Option<i64>, config: &SearchConfig) -> u64 {
    match per_page {
        Some(p) if p >= 1 => (p as u64).min(config.max_per_page),
        _ => config.default_per_page,
    }
}

/// Wire shape of a search request: `page`/`per_page` may arrive as numbers or
/// numeric strings; anything unusable falls back to the defaults.
#[derive(Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de>"))]
struct RawSearchParams<F> {
    #[serde(default)]
    page: Option<JsonValue>,
    #[serde(default)]
    per_page: Option<JsonValue>,
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    sort_dir: Option<String>,
    #[serde(default)]
    filter: Option<F>,
}

impl<F: SearchFilter> From<RawSearchParams<F>> for SearchParams<F> {
    fn from(raw: RawSearchParams<F>) -> Self {
        Self::new(SearchProps {
            page: raw.page.as_ref().and_then(integer_value),
            per_page: raw.per_page.as_ref().and_then(integer_value),
            sort: raw.sort,
            sort_dir: raw.sort_dir,
            filter: raw.filter,
        })
    }
}

/// Whole numbers, as JSON numbers or numeric strings (`2`, `2.0`, `"2"`).
/// Fractions, booleans and the rest are rejected.
fn integer_value(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        JsonValue::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

fn whole(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}
