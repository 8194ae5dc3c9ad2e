//! Tests for comparator chains

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    use sortwell_contracts::{Inspect, Value};
    use sortwell_model::{CaseHandling, Direction, NullHandling, SortField, SortOrders, TextOptions};

    use crate::error::{ComparatorError, ConfigError, ExtractError};
    use crate::extract::ValueExtractor;
    use crate::sorting::{BoxedComparator, Comparator, ComparatorChainBuilder};

    fn guest(last: &str, first: &str, room: u32) -> Value {
        Value::record([
            ("lastName", Value::from(last)),
            ("firstName", Value::from(first)),
            ("room", Value::from(room)),
        ])
    }

    fn names(items: &[Value]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item.attribute("firstName") {
                Some(Value::Text(name)) => name,
                other => format!("{other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_empty_chain_is_equal() {
        let chain = ComparatorChainBuilder::<Value>::new().build();
        assert!(chain.is_empty());
        assert_eq!(
            chain.compare(&guest("a", "a", 1), &guest("b", "b", 2)).unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn test_first_non_equal_wins() {
        let chain = ComparatorChainBuilder::<Value>::new()
            .add_field(SortField::by("lastName"))
            .add_field(SortField::by("room").descending())
            .build();

        let a = guest("Smith", "Ann", 1);
        let b = guest("smith", "Bea", 2);
        let c = guest("Jones", "Cid", 9);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.compare(&a, &b).unwrap(), Ordering::Greater);
        assert_eq!(chain.compare(&c, &a).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_later_comparators_not_consulted_after_decision() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let chain = ComparatorChainBuilder::<Value>::new()
            .add_field(SortField::by("lastName"))
            .add(move |_: &Value, _: &Value| {
                counter.fetch_add(1, AtomicOrdering::SeqCst);
                Ordering::Equal
            })
            .build();

        chain
            .compare(&guest("a", "x", 1), &guest("b", "x", 1))
            .unwrap();
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);

        chain
            .compare(&guest("a", "x", 1), &guest("A", "x", 1))
            .unwrap();
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn test_errors_short_circuit() {
        let chain = ComparatorChainBuilder::<Value>::new()
            .add_field(SortField::by("missing"))
            .add(|_: &Value, _: &Value| Ordering::Less)
            .build();

        let err = chain
            .compare(&guest("a", "a", 1), &guest("b", "b", 2))
            .unwrap_err();
        assert!(matches!(
            err,
            ComparatorError::Extract(ExtractError::MissingField { .. })
        ));
    }

    #[test]
    fn test_lenient_builder_extractor() {
        let chain = ComparatorChainBuilder::<Value>::new()
            .with_extractor(ValueExtractor::lenient())
            .add_field(SortField::by("missing"))
            .add_field(SortField::by("room"))
            .build();

        let sorted = chain
            .sorted(vec![guest("a", "b", 2), guest("a", "a", 1)])
            .unwrap();
        assert_eq!(names(&sorted), ["a", "b"]);
    }

    #[test]
    fn test_sort_reports_first_error() {
        let chain = ComparatorChainBuilder::<Value>::new()
            .add_field(SortField::by("room"))
            .build();

        let mut items = vec![
            guest("a", "a", 1),
            Value::record([("room", Value::from("ten"))]),
        ];
        let err = chain.sort(&mut items).unwrap_err();
        assert!(matches!(err, ComparatorError::Compare(_)));
    }

    #[test]
    fn test_sort_is_stable() {
        let chain = ComparatorChainBuilder::<Value>::new()
            .add_field(SortField::by("lastName"))
            .build();

        let sorted = chain
            .sorted(vec![
                guest("b", "1", 0),
                guest("a", "2", 0),
                guest("B", "3", 0),
                guest("A", "4", 0),
            ])
            .unwrap();
        assert_eq!(names(&sorted), ["2", "4", "1", "3"]);
    }

    #[test]
    fn test_add_order_tuple_form() {
        let chain = ComparatorChainBuilder::<Value>::new()
            .add_order(
                "firstName",
                Direction::Desc,
                CaseHandling::Sensitive,
                NullHandling::NullsLast,
            )
            .build();

        let sorted = chain
            .sorted(vec![guest("x", "b", 0), guest("x", "B", 0), guest("x", "a", 0)])
            .unwrap();
        assert_eq!(names(&sorted), ["b", "a", "B"]);
    }

    #[test]
    fn test_add_all_with_factory() {
        // "fullName" is not a real member; the factory synthesises it.
        let orders = SortOrders::by([SortField::by("fullName"), SortField::by("room")]);

        let chain = ComparatorChainBuilder::<Value>::new()
            .add_all_with(&orders, |field| -> Option<BoxedComparator<Value>> {
                (field.path() == Some("fullName")).then(|| {
                    Box::new(|a: &Value, b: &Value| {
                        let full = |v: &Value| {
                            format!(
                                "{} {}",
                                v.attribute("firstName").and_then(|n| n.as_str().map(str::to_owned)).unwrap_or_default(),
                                v.attribute("lastName").and_then(|n| n.as_str().map(str::to_owned)).unwrap_or_default()
                            )
                        };
                        full(a).cmp(&full(b))
                    }) as BoxedComparator<Value>
                })
            })
            .build();

        let sorted = chain
            .sorted(vec![
                guest("Zed", "Amy", 2),
                guest("Abe", "Bo", 1),
                guest("Zed", "Amy", 1),
            ])
            .unwrap();

        assert_eq!(chain.len(), 2);
        let rooms: Vec<_> = sorted.iter().map(|g| g.attribute("room")).collect();
        assert_eq!(
            rooms,
            [Some(Value::UInt(1)), Some(Value::UInt(2)), Some(Value::UInt(1))]
        );
        assert_eq!(names(&sorted), ["Amy", "Amy", "Bo"]);
    }

    #[test]
    fn test_add_delegating_requires_inner() {
        let err = ComparatorChainBuilder::<Value>::new()
            .add_delegating(SortField::by("room"), None)
            .unwrap_err();
        assert!(matches!(
            err,
            ComparatorError::Config(ConfigError::MissingComparator { .. })
        ));

        let by_parity = |a: &Value, b: &Value| {
            let parity = |v: &Value| matches!(v, Value::UInt(n) if n % 2 == 0);
            parity(a).cmp(&parity(b))
        };
        let chain = ComparatorChainBuilder::<Value>::new()
            .add_delegating(SortField::by("room"), Some(Arc::new(by_parity)))
            .unwrap()
            .add_field(SortField::by("room"))
            .build();

        let sorted = chain
            .sorted(vec![guest("", "a", 2), guest("", "b", 3), guest("", "c", 1)])
            .unwrap();
        assert_eq!(names(&sorted), ["c", "b", "a"]);
    }

    #[test]
    fn test_add_text_with_custom_options() {
        let options = TextOptions::builder()
            .entry_separator("|")
            .field_separator(":")
            .build()
            .unwrap();

        let chain = ComparatorChainBuilder::<Value>::new()
            .add_text("lastName:desc|firstName", &options)
            .build();

        let sorted = chain
            .sorted(vec![guest("a", "y", 0), guest("b", "z", 0), guest("a", "x", 0)])
            .unwrap();
        assert_eq!(names(&sorted), ["z", "x", "y"]);
    }

    #[test]
    fn test_chain_debug_shows_count() {
        let builder = ComparatorChainBuilder::<Value>::new().add_field(SortField::natural());
        assert!(format!("{builder:?}").contains("comparator_count: 1"));
        assert!(format!("{:?}", builder.build()).contains("comparator_count: 1"));
    }
}
