//! Filter → paginate projection shared by every list screen.
//!
//! A [`ViewModel`] holds the search text, selector values, date range,
//! page index, and page size for one table. It does not own the records;
//! callers pass the raw slice each time. Any change to a filter input puts
//! the view back on page 0.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A discrete selector column of an entity (category, status, ...).
pub trait Facet: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Query parameter name used for this selector.
    fn param(self) -> &'static str;
}

/// Entities that can be listed in a filtered table.
pub trait Filterable {
    type Facet: Facet;

    /// Fields matched by the free-text search.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    fn facet_value(&self, facet: Self::Facet) -> String;

    /// Date used by the date-range filter, if the entity has one.
    fn filter_date(&self) -> Option<jiff::civil::Date> {
        None
    }
}

/// Rows per page. `All` shows the whole filtered list on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    Rows(usize),
    All,
}

impl PageSize {
    pub const OPTIONS: [usize; 3] = [5, 10, 25];

    /// Concrete rows per page for a filtered list of `total` items.
    pub fn rows_for(self, total: usize) -> usize {
        match self {
            PageSize::Rows(n) => n,
            PageSize::All => total,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(10)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported page size '{0}' (expected 5, 10, 25, or all)")]
pub struct PageSizeError(pub String);

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        match s.parse::<usize>() {
            Ok(n) if Self::OPTIONS.contains(&n) => Ok(PageSize::Rows(n)),
            _ => Err(PageSizeError(s.to_string())),
        }
    }
}

/// Inclusive date bounds. Records without a date never match a bounded range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<jiff::civil::Date>,
    pub to: Option<jiff::civil::Date>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: Option<jiff::civil::Date>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// One rendered page of a filtered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Size of the filtered list, across all pages.
    pub total: usize,
    pub page_count: usize,
}

impl<T: Clone> Page<&T> {
    pub fn cloned(self) -> Page<T> {
        Page {
            items: self.items.into_iter().cloned().collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            page_count: self.page_count,
        }
    }
}

pub struct ViewModel<T: Filterable> {
    search: String,
    selectors: BTreeMap<T::Facet, String>,
    date_range: DateRange,
    page: usize,
    page_size: PageSize,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Filterable> Default for ViewModel<T> {
    fn default() -> Self {
        Self {
            search: String::new(),
            selectors: BTreeMap::new(),
            date_range: DateRange::default(),
            page: 0,
            page_size: PageSize::default(),
            _entity: PhantomData,
        }
    }
}

impl<T: Filterable> fmt::Debug for ViewModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModel")
            .field("search", &self.search)
            .field("selectors", &self.selectors)
            .field("date_range", &self.date_range)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl<T: Filterable> ViewModel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selector(&self, facet: T::Facet) -> Option<&str> {
        self.selectors.get(&facet).map(String::as_str)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    /// Set a selector. Blank or "all" clears it.
    pub fn set_selector(&mut self, facet: T::Facet, value: impl Into<String>) {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            self.selectors.remove(&facet);
        } else {
            self.selectors.insert(facet, value.to_string());
        }
        self.page = 0;
    }

    pub fn clear_selector(&mut self, facet: T::Facet) {
        self.selectors.remove(&facet);
        self.page = 0;
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    /// Move to a page. Not a filter input, so nothing else is reset.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn matches(&self, item: &T) -> bool {
        self.matches_search(item)
            && self
                .selectors
                .iter()
                .all(|(facet, want)| item.facet_value(*facet).trim().eq_ignore_ascii_case(want))
            && self.date_range.contains(item.filter_date())
    }

    fn matches_search(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// The filtered records, in their original order.
    pub fn filter<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// The current page of the filtered records.
    pub fn current_page<'a>(&self, items: &'a [T]) -> Page<&'a T> {
        let filtered = self.filter(items);
        let total = filtered.len();
        let rows = self.page_size.rows_for(total);

        let page_count = if rows == 0 { 0 } else { total.div_ceil(rows) };
        let start = self.page.saturating_mul(rows).min(total);
        let end = start.saturating_add(rows).min(total);

        Page {
            items: filtered[start..end].to_vec(),
            page: self.page,
            page_size: rows,
            total,
            page_count,
        }
    }
}
