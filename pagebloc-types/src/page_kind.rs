//! The closed set of pages every shop owns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a shop page.
///
/// A shop has exactly one page per kind, provisioned together as a unit
/// when the shop is created. The set is closed; new page categories are a
/// product decision, not runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Catalog,
    Product,
    Contact,
}

impl PageKind {
    /// All page kinds, in the order pages are provisioned.
    pub const ALL: [PageKind; 4] = [
        PageKind::Home,
        PageKind::Catalog,
        PageKind::Product,
        PageKind::Contact,
    ];

    /// The stable string form used in storage keys and URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Catalog => "catalog",
            PageKind::Product => "product",
            PageKind::Contact => "contact",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(PageKind::Home),
            "catalog" => Ok(PageKind::Catalog),
            "product" => Ok(PageKind::Product),
            "contact" => Ok(PageKind::Contact),
            other => Err(crate::Error::UnknownPageKind(other.to_string())),
        }
    }
}
