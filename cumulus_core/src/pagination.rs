use core::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction for paginated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageDirection::Ascending => f.write_str("asc"),
            PageDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Standard pagination request parameters.
///
/// `Display` renders the canonical query fragment,
/// `direction=<asc|desc>&page=<n>&per_page=<n>`, which callers splice
/// into a path with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub direction: PageDirection,
    /// Page number, starting at 1.
    pub page: u32,
    /// Items per page; must be positive.
    pub per_page: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            direction: PageDirection::Descending,
            page: 1,
            per_page: 20,
        }
    }
}

impl PageParams {
    pub fn new(direction: PageDirection, page: u32, per_page: u32) -> Self {
        Self {
            direction,
            page,
            per_page,
        }
    }
}

impl fmt::Display for PageParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "direction={}&page={}&per_page={}",
            self.direction, self.page, self.per_page
        )
    }
}
