//! Page requests and the response metadata derived from them.

use crate::domain::criteria::MenuSortField;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: MenuSortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: MenuSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: MenuSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Zero-based page descriptor with an ordered list of sort keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: Vec<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    /// Builds a page request, clamping `size` into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: usize, size: usize) -> Self {
        let size = if size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            size.min(MAX_PAGE_SIZE)
        };
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

/// Number of pages needed to show `total` items, `size` per page.
pub fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 { 0 } else { total.div_ceil(size) }
}

/// Builds an RFC 5988 `Link` header value for navigating a paged listing.
///
/// `path` is the request path and `query` the raw query string; any existing
/// `page` and `size` parameters are replaced.
pub fn link_header(path: &str, query: &str, page: &PageRequest, total: usize) -> String {
    let retained: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            key != "page" && key != "size"
        })
        .collect();

    let uri = |number: usize| {
        let mut params: Vec<String> = retained.iter().map(|pair| pair.to_string()).collect();
        params.push(format!("page={number}&size={}", page.size));
        format!("<{path}?{}>", params.join("&"))
    };

    let pages = total_pages(total, page.size);
    let mut links = Vec::new();
    if let Some(next) = page.page.checked_add(1).filter(|next| *next < pages) {
        links.push(format!("{}; rel=\"next\"", uri(next)));
    }
    if page.page > 0 {
        links.push(format!("{}; rel=\"prev\"", uri(page.page - 1)));
    }
    let last = pages.saturating_sub(1);
    links.push(format!("{}; rel=\"last\"", uri(last)));
    links.push(format!("{}; rel=\"first\"", uri(0)));

    links.join(",")
}
