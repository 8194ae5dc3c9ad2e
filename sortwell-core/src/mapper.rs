//! Conversion between sort fields and a paging layer's order type.
//!
//! Paging and query layers usually carry their own order descriptor with a
//! property name, a direction and a null handling hint that may be left to
//! the backend. [`ExternalOrder`] is that neutral shape; [`SortMapper`]
//! converts in both directions and applies request defaults.

use sortwell_model::{CaseHandling, Direction, NullHandling, SortField, SortOrders};
use tracing::debug;

/// Null placement as understood by a paging layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalNullHandling {
    NullsFirst,
    NullsLast,
    /// Left to the storage backend.
    Native,
}

/// Order descriptor of a paging layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalOrder {
    pub property: String,
    pub direction: Direction,
    pub null_handling: ExternalNullHandling,
    pub ignore_case: bool,
}

impl ExternalOrder {
    /// Ascending, case-sensitive order with native null handling.
    pub fn by(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
            null_handling: ExternalNullHandling::Native,
            ignore_case: false,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }
}

/// Attribute overrides for [`SortMapper::apply_defaults`]. `None` keeps the
/// current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderDefaults {
    pub ascending: Option<bool>,
    pub case_insensitive: Option<bool>,
    pub nulls_first: Option<bool>,
}

impl OrderDefaults {
    pub fn is_empty(&self) -> bool {
        self.ascending.is_none() && self.case_insensitive.is_none() && self.nulls_first.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortMapper {
    null_handling_supported: bool,
    native_nulls_first: bool,
}

impl Default for SortMapper {
    fn default() -> Self {
        Self {
            null_handling_supported: true,
            native_nulls_first: false,
        }
    }
}

impl SortMapper {
    /// `null_handling_supported = false` maps every null placement to
    /// [`ExternalNullHandling::Native`]. `native_nulls_first` decides what
    /// `Native` means when mapping back.
    pub fn new(null_handling_supported: bool, native_nulls_first: bool) -> Self {
        Self {
            null_handling_supported,
            native_nulls_first,
        }
    }

    pub fn is_null_handling_supported(&self) -> bool {
        self.null_handling_supported
    }

    pub fn is_native_nulls_first(&self) -> bool {
        self.native_nulls_first
    }

    /// `None` for natural ordering, which a paging layer cannot express.
    pub fn to_external_order(&self, field: &SortField) -> Option<ExternalOrder> {
        let property = field.path()?;
        Some(ExternalOrder {
            property: property.to_owned(),
            direction: field.direction(),
            null_handling: self.external_null_handling(field.is_nulls_first()),
            ignore_case: field.is_case_insensitive(),
        })
    }

    pub fn to_external_orders<'a, I>(&self, fields: I) -> Vec<ExternalOrder>
    where
        I: IntoIterator<Item = &'a SortField>,
    {
        fields
            .into_iter()
            .filter_map(|field| self.to_external_order(field))
            .collect()
    }

    pub fn from_external_order(&self, order: &ExternalOrder) -> SortField {
        let nulls_first = match order.null_handling {
            ExternalNullHandling::NullsFirst => true,
            ExternalNullHandling::NullsLast => false,
            ExternalNullHandling::Native => self.native_nulls_first,
        };

        SortField::new(
            Some(order.property.as_str()),
            order.direction,
            case_handling(order.ignore_case),
            null_handling(nulls_first),
        )
    }

    pub fn from_external_orders<'a, I>(&self, orders: I) -> SortOrders
    where
        I: IntoIterator<Item = &'a ExternalOrder>,
    {
        orders
            .into_iter()
            .map(|order| self.from_external_order(order))
            .collect()
    }

    /// Override attributes of the fields whose path is in `targets`, or of
    /// every field when `targets` is empty. Natural orderings are only
    /// touched when `targets` is empty.
    pub fn apply_defaults(
        &self,
        orders: &SortOrders,
        defaults: OrderDefaults,
        targets: &[&str],
    ) -> SortOrders {
        if defaults.is_empty() {
            return orders.clone();
        }

        debug!(?defaults, ?targets, "applying sort order defaults");
        orders
            .iter()
            .map(|field| {
                if !is_targeted(field.path(), targets) {
                    return field.clone();
                }

                let mut field = field.clone();
                if let Some(ascending) = defaults.ascending {
                    field = field.with_direction(direction(ascending));
                }
                if let Some(case_insensitive) = defaults.case_insensitive {
                    field = field.with_case_handling(case_handling(case_insensitive));
                }
                if let Some(nulls_first) = defaults.nulls_first {
                    field = field.with_null_handling(null_handling(nulls_first));
                }
                field
            })
            .collect()
    }

    /// [`apply_defaults`](Self::apply_defaults) over paging layer orders.
    /// A null placement override becomes `Native` when null handling is not
    /// supported.
    pub fn apply_external_defaults(
        &self,
        orders: &[ExternalOrder],
        defaults: OrderDefaults,
        targets: &[&str],
    ) -> Vec<ExternalOrder> {
        if defaults.is_empty() {
            return orders.to_vec();
        }

        debug!(?defaults, ?targets, "applying external order defaults");
        orders
            .iter()
            .map(|order| {
                if !is_targeted(Some(order.property.as_str()), targets) {
                    return order.clone();
                }

                let mut order = order.clone();
                if let Some(ascending) = defaults.ascending {
                    order.direction = direction(ascending);
                }
                if let Some(case_insensitive) = defaults.case_insensitive {
                    order.ignore_case = case_insensitive;
                }
                if let Some(nulls_first) = defaults.nulls_first {
                    order.null_handling = self.external_null_handling(nulls_first);
                }
                order
            })
            .collect()
    }

    fn external_null_handling(&self, nulls_first: bool) -> ExternalNullHandling {
        match (self.null_handling_supported, nulls_first) {
            (false, _) => ExternalNullHandling::Native,
            (true, true) => ExternalNullHandling::NullsFirst,
            (true, false) => ExternalNullHandling::NullsLast,
        }
    }
}

fn is_targeted(path: Option<&str>, targets: &[&str]) -> bool {
    targets.is_empty() || path.is_some_and(|path| targets.iter().any(|t| t.trim() == path))
}

fn direction(ascending: bool) -> Direction {
    if ascending {
        Direction::Asc
    } else {
        Direction::Desc
    }
}

fn case_handling(case_insensitive: bool) -> CaseHandling {
    if case_insensitive {
        CaseHandling::Insensitive
    } else {
        CaseHandling::Sensitive
    }
}

fn null_handling(nulls_first: bool) -> NullHandling {
    if nulls_first {
        NullHandling::NullsFirst
    } else {
        NullHandling::NullsLast
    }
}
