//! Screen identifiers and search facets.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Each provides `as_str()` for its wire/fragment form and a `Display` impl
//! that writes the same string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// One of the application's top-level views.
///
/// The set is closed. `Results` and `Detail` form the library pair:
///
/// ```text
/// home ─search─▶ results ─select─▶ detail
///                   ▲                 │
///                   └──────back───────┘
/// ```
///
/// Leaving the pair for any other screen discards the saved search context.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Home,
    About,
    Admissions,
    Academics,
    Facilities,
    News,
    Contact,
    Signup,
    Results,
    Detail,
}

impl Screen {
    /// Every screen, in navigation-bar order.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::About,
        Self::Admissions,
        Self::Academics,
        Self::Facilities,
        Self::News,
        Self::Contact,
        Self::Signup,
        Self::Results,
        Self::Detail,
    ];

    /// The screen any unrecognized fragment resolves to.
    pub const DEFAULT: Self = Self::Home;

    /// URL fragment for this screen, without the leading `#`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Admissions => "admissions",
            Self::Academics => "academics",
            Self::Facilities => "facilities",
            Self::News => "news",
            Self::Contact => "contact",
            Self::Signup => "signup",
            Self::Results => "results",
            Self::Detail => "detail",
        }
    }

    /// Human-readable title for navigation bars and window titles.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Library",
            Self::About => "About Us",
            Self::Admissions => "Admissions",
            Self::Academics => "Academics",
            Self::Facilities => "Facilities",
            Self::News => "News & Events",
            Self::Contact => "Contact Us",
            Self::Signup => "Sign Up",
            Self::Results => "Search Results",
            Self::Detail => "Item Detail",
        }
    }

    /// Whether this screen belongs to the results/detail pair.
    #[must_use]
    pub const fn is_library_pair(self) -> bool {
        matches!(self, Self::Results | Self::Detail)
    }

    /// Strictly parse a fragment.
    ///
    /// Accepts an optional leading `#`, surrounding whitespace and any ASCII
    /// case. Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn parse_fragment(fragment: &str) -> Option<Self> {
        let trimmed = fragment.trim();
        let bare = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str().eq_ignore_ascii_case(bare))
    }

    /// Map an arbitrary string to a member of the closed set.
    ///
    /// Never fails: anything unrecognized (including the empty string)
    /// resolves to [`Screen::DEFAULT`].
    #[must_use]
    pub fn resolve(fragment: &str) -> Self {
        Self::parse_fragment(fragment).unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_fragment(s).ok_or_else(|| CoreError::UnknownScreen(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CatalogScope
// ---------------------------------------------------------------------------

/// Which catalog a search targets.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CatalogScope {
    #[default]
    LibraryCatalog,
    Ebooks,
    Journals,
}

impl CatalogScope {
    pub const ALL: [Self; 3] = [Self::LibraryCatalog, Self::Ebooks, Self::Journals];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LibraryCatalog => "library_catalog",
            Self::Ebooks => "ebooks",
            Self::Journals => "journals",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LibraryCatalog => "Library Catalog",
            Self::Ebooks => "eBooks",
            Self::Journals => "Journals & Periodicals",
        }
    }
}

impl fmt::Display for CatalogScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownScope {
                kind: "catalog",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// LibraryScope
// ---------------------------------------------------------------------------

/// Which school library a search is restricted to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LibraryScope {
    #[default]
    All,
    HighSchool,
    Elementary,
    Preschool,
}

impl LibraryScope {
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::HighSchool,
        Self::Elementary,
        Self::Preschool,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::HighSchool => "high_school",
            Self::Elementary => "elementary",
            Self::Preschool => "preschool",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Libraries",
            Self::HighSchool => "High School Library",
            Self::Elementary => "Elementary Library",
            Self::Preschool => "Preschool Library",
        }
    }

    /// The branch reported as holding an item found under this scope.
    ///
    /// `All` has no single branch; holdings default to the high school.
    #[must_use]
    pub const fn holding_branch(self) -> &'static str {
        match self {
            Self::All | Self::HighSchool => Self::HighSchool.label(),
            Self::Elementary => Self::Elementary.label(),
            Self::Preschool => Self::Preschool.label(),
        }
    }
}

impl fmt::Display for LibraryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LibraryScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownScope {
                kind: "library",
                value: s.to_string(),
            })
    }
}
