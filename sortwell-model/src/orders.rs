use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::field::SortField;
use crate::options::TextOptions;
use crate::text;

/// Ordered list of sort orders. Index 0 is the primary key; later entries
/// only break ties of all earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortOrders {
    #[cfg_attr(feature = "serde", serde(rename = "sortOrders", default))]
    fields: Vec<SortField>,
}

impl SortOrders {
    pub fn new(fields: Vec<SortField>) -> Self {
        SortOrders { fields }
    }

    pub fn by<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = SortField>,
    {
        fields.into_iter().collect()
    }

    pub fn as_slice(&self) -> &[SortField] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `true` when at least one sort order is present.
    pub fn is_sorted(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_unsorted(&self) -> bool {
        self.is_empty()
    }

    /// Primary sort order.
    pub fn first(&self) -> Option<&SortField> {
        self.fields.first()
    }

    /// Last tie breaker.
    pub fn last(&self) -> Option<&SortField> {
        self.fields.last()
    }

    pub fn get(&self, index: usize) -> Option<&SortField> {
        self.fields.get(index)
    }

    pub fn into_vec(self) -> Vec<SortField> {
        self.fields
    }

    pub fn to_text(&self, options: &TextOptions) -> String {
        text::serialize(&self.fields, options)
    }

    pub fn parse(source: &str, options: &TextOptions) -> Self {
        text::parse(source, options)
    }
}

impl fmt::Display for SortOrders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(TextOptions::defaults()))
    }
}

impl FromStr for SortOrders {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortOrders::parse(s, TextOptions::defaults()))
    }
}

impl From<Vec<SortField>> for SortOrders {
    fn from(fields: Vec<SortField>) -> Self {
        SortOrders::new(fields)
    }
}

impl From<SortField> for SortOrders {
    fn from(field: SortField) -> Self {
        SortOrders::new(vec![field])
    }
}

impl FromIterator<SortField> for SortOrders {
    fn from_iter<I: IntoIterator<Item = SortField>>(iter: I) -> Self {
        SortOrders::new(iter.into_iter().collect())
    }
}

impl IntoIterator for SortOrders {
    type Item = SortField;
    type IntoIter = std::vec::IntoIter<SortField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortOrders {
    type Item = &'a SortField;
    type IntoIter = std::slice::Iter<'a, SortField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl AsRef<[SortField]> for SortOrders {
    fn as_ref(&self) -> &[SortField] {
        &self.fields
    }
}
