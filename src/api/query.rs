//! Pagination query parameters.

use url::Url;
use url::form_urlencoded;

/// A pagination query parameter understood by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageParam {
    Page,
    PerPage,
    Offset,
}

impl PageParam {
    /// Returns the query-string key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::PerPage => "per_page",
            Self::Offset => "offset",
        }
    }
}

/// Pagination parameters passed through to the server as a query string.
///
/// Parameters are encoded in the order they were first set. Setting a
/// parameter again replaces its value in place.
///
/// # Example
///
/// ```
/// use hostedhooks::api::Pagination;
///
/// let pagination = Pagination::new().page(2).per_page(10);
/// assert_eq!(pagination.to_query_string(), "?page=2&per_page=10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    params: Vec<(PageParam, u32)>,
}

impl Pagination {
    /// Creates an empty set of parameters.
    ///
    /// An empty `Pagination` still produces a bare `?` when attached to a
    /// request; pass `None` instead to send no query string.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.set(PageParam::Page, page)
    }

    #[must_use]
    pub fn per_page(self, per_page: u32) -> Self {
        self.set(PageParam::PerPage, per_page)
    }

    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.set(PageParam::Offset, offset)
    }

    /// Sets `param` to `value`.
    #[must_use]
    pub fn set(mut self, param: PageParam, value: u32) -> Self {
        if let Some(slot) = self.params.iter_mut().find(|(p, _)| *p == param) {
            slot.1 = value;
        } else {
            self.params.push((param, value));
        }
        self
    }

    /// Returns the value of `param`, if set.
    #[must_use]
    pub fn get(&self, param: PageParam) -> Option<u32> {
        self.params
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, value)| *value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over parameters in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (PageParam, u32)> + '_ {
        self.params.iter().copied()
    }

    /// Encodes the parameters without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (param, value) in &self.params {
            serializer.append_pair(param.as_str(), &value.to_string());
        }
        serializer.finish()
    }

    /// Encodes the parameters as a query suffix, including the `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!("?{}", self.encode())
    }
}

/// Attaches `pagination` to `url`.
///
/// `None` leaves the URL without a query; an empty `Pagination` yields a
/// bare trailing `?`.
pub fn apply(url: &mut Url, pagination: Option<&Pagination>) {
    if let Some(pagination) = pagination {
        url.set_query(Some(&pagination.encode()));
    }
}
