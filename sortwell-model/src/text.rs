//! Sort order text codec.
//!
//! The syntax of one sort order is
//!
//! ```text
//! fieldNameOrPath,asc,ignoreCase,nullIsFirst
//! ```
//!
//! and several sort orders are joined with `;`:
//!
//! ```text
//! room.number,asc,true,false;person.lastName,desc,false,false
//! ```
//!
//! Separators and tokens come from [`TextOptions`]. Trailing arguments may be
//! omitted (`person.lastName` is the same as `person.lastName,asc,true,false`)
//! and an empty path (`,desc`) orders the compared objects themselves.
//!
//! Parsing is lenient and total: unknown tokens fall back to the defaults and
//! no input is rejected.

use tracing::trace;

use crate::field::SortField;
use crate::options::TextOptions;
use crate::orders::SortOrders;

/// Parses a list of sort orders.
///
/// Empty or blank entries (as produced by repeated, leading or trailing entry
/// separators) are skipped.
pub fn parse(text: &str, options: &TextOptions) -> SortOrders {
    text.split(options.entry_separator())
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| parse_field(entry, options))
        .collect()
}

/// Parses several sort order texts, e.g. repeated request parameters, into
/// one list. Entries keep the order in which the texts are given.
pub fn parse_all<I, S>(texts: I, options: &TextOptions) -> SortOrders
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .flat_map(|text| parse(text.as_ref(), options))
        .collect()
}

/// Parses one sort order.
///
/// The fragment is split into at most four positional slots: path,
/// direction, case handling and null handling. The last slot keeps the
/// remainder of the fragment, so surplus separators never shift earlier
/// slots.
pub fn parse_field(fragment: &str, options: &TextOptions) -> SortField {
    let mut slots = fragment.splitn(4, options.field_separator()).map(str::trim);

    let path = slots.next().filter(|p| !p.is_empty());
    let ascending = slots.next().is_none_or(|t| options.is_ascending(t));
    let case_insensitive =
        slots.next().is_none_or(|t| options.is_case_insensitive(t));
    let nulls_first = slots.next().is_some_and(|t| options.is_nulls_first(t));

    let mut field = match path {
        Some(path) => SortField::by(path),
        None => SortField::natural(),
    };
    if !ascending {
        field = field.descending();
    }
    if !case_insensitive {
        field = field.case_sensitive();
    }
    if nulls_first {
        field = field.nulls_first();
    }

    trace!(fragment, ?field, "parsed sort order");
    field
}

/// Writes a list of sort orders. Every entry carries all four arguments.
pub fn serialize<'a, I>(fields: I, options: &TextOptions) -> String
where
    I: IntoIterator<Item = &'a SortField>,
{
    fields
        .into_iter()
        .map(|field| serialize_field(field, options))
        .collect::<Vec<_>>()
        .join(options.entry_separator())
}

/// Writes one sort order with canonical tokens and no omitted arguments.
pub fn serialize_field(field: &SortField, options: &TextOptions) -> String {
    let separator = options.field_separator();
    [
        field.path().unwrap_or(""),
        options.direction_token(field.is_ascending()),
        options.case_token(field.is_case_insensitive()),
        options.nulls_token(field.is_nulls_first()),
    ]
    .join(separator)
}
