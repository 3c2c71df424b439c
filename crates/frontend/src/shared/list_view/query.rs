//! ListQuery and its query-string codec.
//!
//! Both directions are pure and total: any string parses (bad fields fall
//! back to defaults) and any query encodes.

use crate::config::config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_SIZE: &str = "size";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SORT_DIR: &str = "sortDir";

/// Highest page index accepted from the address bar or the pager
pub const MAX_PAGE: usize = u32::MAX as usize;

/// Keys owned by paging/sorting; never usable as filter names
pub const RESERVED_PARAMS: [&str; 4] = [PARAM_PAGE, PARAM_SIZE, PARAM_SORT_BY, PARAM_SORT_DIR];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_PARAMS.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// One of the offered page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSize(usize);

impl PageSize {
    pub const OPTIONS: [usize; 4] = [5, 10, 20, 50];
    pub const DEFAULT: PageSize = PageSize(10);

    pub fn new(size: usize) -> Option<Self> {
        Self::OPTIONS.contains(&size).then_some(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-entity fallbacks for fields missing from the address bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDefaults {
    pub sort_field: String,
    pub page_size: PageSize,
}

impl ListDefaults {
    pub fn new(sort_field: impl Into<String>, page_size: PageSize) -> Self {
        Self {
            sort_field: sort_field.into(),
            page_size,
        }
    }

    /// Defaults with the configured page size
    pub fn sorted_by(sort_field: impl Into<String>) -> Self {
        let page_size = PageSize::new(config().list.default_page_size).unwrap_or_default();
        Self::new(sort_field, page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    /// 0-based
    pub page: usize,
    pub page_size: PageSize,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(defaults: &ListDefaults) -> Self {
        Self {
            page: 0,
            page_size: defaults.page_size,
            sort_field: defaults.sort_field.clone(),
            sort_direction: SortDirection::Asc,
            filters: BTreeMap::new(),
        }
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

#[derive(Serialize)]
struct EncodedHead<'a> {
    page: usize,
    size: usize,
    #[serde(rename = "sortBy")]
    sort_by: &'a str,
    #[serde(rename = "sortDir")]
    sort_dir: SortDirection,
}

/// Split a query string into key/value pairs.
///
/// Each pair is decoded on its own so one malformed pair cannot discard the
/// rest.
fn decode_pairs(search: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for pair in search.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        match serde_qs::from_str::<BTreeMap<String, String>>(pair) {
            Ok(decoded) => params.extend(decoded),
            Err(e) => log::debug!("ignoring query pair {:?}: {}", pair, e),
        }
    }
    params
}

/// Parse the address-bar query string (with or without leading `?`)
pub fn parse_query(search: &str, defaults: &ListDefaults) -> ListQuery {
    let mut query = ListQuery::new(defaults);

    for (key, value) in decode_pairs(search) {
        match key.as_str() {
            PARAM_PAGE => {
                if let Ok(page) = value.trim().parse::<u64>() {
                    query.page = usize::try_from(page).unwrap_or(MAX_PAGE).min(MAX_PAGE);
                }
            }
            PARAM_SIZE => {
                if let Some(size) = value.trim().parse::<usize>().ok().and_then(PageSize::new) {
                    query.page_size = size;
                }
            }
            PARAM_SORT_BY => {
                if !value.trim().is_empty() {
                    query.sort_field = value;
                }
            }
            PARAM_SORT_DIR => {
                if let Some(direction) = SortDirection::parse(&value) {
                    query.sort_direction = direction;
                }
            }
            _ => {
                if !key.is_empty() && !value.trim().is_empty() {
                    query.filters.insert(key, value);
                }
            }
        }
    }

    query
}

/// Encode a query without the leading `?`; absent filters are omitted
pub fn encode_query(query: &ListQuery) -> String {
    let head = EncodedHead {
        page: query.page,
        size: query.page_size.get(),
        sort_by: &query.sort_field,
        sort_dir: query.sort_direction,
    };
    let mut encoded = serde_qs::to_string(&head).unwrap_or_default();

    if query.has_filters() {
        let filters = serde_qs::to_string(&query.filters).unwrap_or_default();
        if !filters.is_empty() {
            encoded.push('&');
            encoded.push_str(&filters);
        }
    }

    encoded
}
