//! Ordering descriptor for a single field.
//!
//! A [`SortField`] names a (possibly nested) field path and how values found
//! there are ordered: direction, case handling for strings and where nulls
//! go. Descriptors are plain values; every modifier returns a new one.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::options::TextOptions;
use crate::text;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn is_ascending(self) -> bool {
        self == Direction::Asc
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// How string values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaseHandling {
    #[default]
    Insensitive,
    Sensitive,
}

impl CaseHandling {
    pub fn is_ignore_case(self) -> bool {
        self == CaseHandling::Insensitive
    }
}

/// Where null values sort relative to present ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NullHandling {
    NullsFirst,
    #[default]
    NullsLast,
}

impl NullHandling {
    pub fn is_nulls_first(self) -> bool {
        self == NullHandling::NullsFirst
    }
}

/// One ordering key: field path, direction, case handling and null placement.
///
/// Equality and hashing are structural over all four attributes. A blank
/// path is stored as "no path", meaning the compared objects are ordered by
/// their own natural value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "SortFieldDocument"))]
pub struct SortField {
    #[cfg_attr(feature = "serde", serde(rename = "field"))]
    path: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    ascending: bool,
    #[cfg_attr(feature = "serde", serde(rename = "ignoreCase"))]
    case_insensitive: bool,
    #[cfg_attr(feature = "serde", serde(rename = "nullIsFirst"))]
    nulls_first: bool,
}

impl SortField {
    /// Full constructor. Prefer [`SortField::by`] plus the modifiers.
    pub fn new(
        path: Option<&str>,
        direction: Direction,
        case_handling: CaseHandling,
        null_handling: NullHandling,
    ) -> Self {
        SortField {
            path: normalize_path(path),
            ascending: direction.is_ascending(),
            case_insensitive: case_handling.is_ignore_case(),
            nulls_first: null_handling.is_nulls_first(),
        }
    }

    /// Ascending, case-insensitive, nulls-last ordering of `path`.
    pub fn by(path: impl AsRef<str>) -> Self {
        Self::new(
            Some(path.as_ref()),
            Direction::default(),
            CaseHandling::default(),
            NullHandling::default(),
        )
    }

    /// Ordering of the compared objects themselves.
    pub fn natural() -> Self {
        Self::new(
            None,
            Direction::default(),
            CaseHandling::default(),
            NullHandling::default(),
        )
    }

    pub fn ascending(self) -> Self {
        self.with_direction(Direction::Asc)
    }

    pub fn descending(self) -> Self {
        self.with_direction(Direction::Desc)
    }

    pub fn case_insensitive(self) -> Self {
        self.with_case_handling(CaseHandling::Insensitive)
    }

    pub fn case_sensitive(self) -> Self {
        self.with_case_handling(CaseHandling::Sensitive)
    }

    pub fn nulls_first(self) -> Self {
        self.with_null_handling(NullHandling::NullsFirst)
    }

    pub fn nulls_last(self) -> Self {
        self.with_null_handling(NullHandling::NullsLast)
    }

    /// Same field with `direction` replaced.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.ascending = direction.is_ascending();
        self
    }

    /// Same field with `case_handling` replaced.
    pub fn with_case_handling(mut self, case_handling: CaseHandling) -> Self {
        self.case_insensitive = case_handling.is_ignore_case();
        self
    }

    /// Same field with `null_handling` replaced.
    pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.nulls_first = null_handling.is_nulls_first();
        self
    }

    /// Dotted field path, `None` for natural ordering.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_nulls_first(&self) -> bool {
        self.nulls_first
    }

    pub fn direction(&self) -> Direction {
        if self.ascending {
            Direction::Asc
        } else {
            Direction::Desc
        }
    }

    pub fn case_handling(&self) -> CaseHandling {
        if self.case_insensitive {
            CaseHandling::Insensitive
        } else {
            CaseHandling::Sensitive
        }
    }

    pub fn null_handling(&self) -> NullHandling {
        if self.nulls_first {
            NullHandling::NullsFirst
        } else {
            NullHandling::NullsLast
        }
    }

    /// Sort order text of this field, e.g. `person.lastName,asc,true,false`.
    pub fn to_text(&self, options: &TextOptions) -> String {
        text::serialize_field(self, options)
    }

    /// Parses a single sort order text. Never fails, see [`text::parse_field`].
    pub fn parse(source: &str, options: &TextOptions) -> Self {
        text::parse_field(source, options)
    }
}

impl Default for SortField {
    fn default() -> Self {
        SortField::natural()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(TextOptions::defaults()))
    }
}

impl FromStr for SortField {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortField::parse(s, TextOptions::defaults()))
    }
}

fn normalize_path(path: Option<&str>) -> Option<String> {
    path.map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
}

/// Document shape accepted when deserializing; missing flags take defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SortFieldDocument {
    #[serde(default)]
    field: Option<String>,
    #[serde(default = "default_true")]
    asc: bool,
    #[serde(default = "default_true", rename = "ignoreCase")]
    ignore_case: bool,
    #[serde(default, rename = "nullIsFirst")]
    null_is_first: bool,
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "serde")]
impl From<SortFieldDocument> for SortField {
    fn from(doc: SortFieldDocument) -> Self {
        SortField {
            path: normalize_path(doc.field.as_deref()),
            ascending: doc.asc,
            case_insensitive: doc.ignore_case,
            nulls_first: doc.null_is_first,
        }
    }
}
