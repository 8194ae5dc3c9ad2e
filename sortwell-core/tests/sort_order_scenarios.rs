use std::cmp::Ordering;

use sortwell_core::prelude::*;
use sortwell_core::{ComparatorError, ExtractError, natural_cmp};

#[derive(Debug, Clone)]
struct Address {
    city: Option<String>,
}

#[derive(Debug, Clone)]
struct Person {
    name: String,
    age: u32,
    address: Option<Address>,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
            address: None,
        }
    }

    fn living_in(mut self, city: Option<&str>) -> Self {
        self.address = Some(Address {
            city: city.map(str::to_string),
        });
        self
    }
}

impl Inspect for Address {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "city" => Some(self.city.clone().into()),
            _ => None,
        }
    }
}

impl Inspect for Person {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "age" => Some(self.age.into()),
            "address" => Some(
                self.address
                    .clone()
                    .map_or(Value::Null, Value::object),
            ),
            _ => None,
        }
    }
}

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn parses_two_field_sort_order_text() {
    let orders = parse(
        "name,asc,true,false;age,desc,false,false",
        TextOptions::defaults(),
    );

    assert_eq!(
        orders.as_slice(),
        [
            SortField::by("name"),
            SortField::by("age").descending().case_sensitive(),
        ]
    );
    assert!(orders.get(0).is_some_and(|f| f.is_case_insensitive() && !f.is_nulls_first()));
}

#[test]
fn round_trips_fully_specified_fields() {
    let fields = SortOrders::by([
        SortField::by("room.number"),
        SortField::by("person.lastName").descending().case_sensitive(),
        SortField::by("person.firstName").nulls_first(),
        SortField::natural().descending().case_sensitive().nulls_first(),
    ]);

    let defaults = TextOptions::defaults();
    assert_eq!(parse(&serialize(&fields, defaults), defaults), fields);

    let custom = TextOptions::builder()
        .entry_separator("|")
        .field_separator(":")
        .asc_tokens(["up"])
        .desc_tokens(["down"])
        .build()
        .unwrap();
    let text = serialize(&fields, &custom);
    assert!(text.starts_with("room.number:up:"), "{text}");
    assert_eq!(parse(&text, &custom), fields);
}

#[test]
fn case_insensitive_tie_falls_through_to_age_desc() {
    let bob = Person::new("Bob", 30);
    let younger_bob = Person::new("bob", 20);

    let chain = ComparatorChainBuilder::<Person>::new()
        .add_field(SortField::by("name"))
        .add_field(SortField::by("age").descending())
        .build();

    assert_eq!(chain.compare(&bob, &younger_bob).unwrap(), Ordering::Less);
    assert_eq!(chain.compare(&younger_bob, &bob).unwrap(), Ordering::Greater);
}

#[test]
fn tie_break_follows_field_order() {
    let a = FieldComparator::new(SortField::by("name"));
    let b = FieldComparator::new(SortField::by("age").descending());
    let chain = ComparatorChainBuilder::<Person>::new()
        .add(a.clone())
        .add(b.clone())
        .build();

    let people = [
        Person::new("Ann", 1),
        Person::new("ann", 2),
        Person::new("Cid", 1),
        Person::new("bea", 7),
    ];

    for x in &people {
        for y in &people {
            let first = a.compare(x, y).unwrap();
            let expected = if first != Ordering::Equal {
                first
            } else {
                b.compare(x, y).unwrap()
            };
            assert_eq!(chain.compare(x, y).unwrap(), expected, "{x:?} vs {y:?}");
        }
    }
}

#[test]
fn null_placement_ignores_direction() {
    let with_city = Person::new("a", 1).living_in(Some("Oslo"));
    let without_city = Person::new("b", 1).living_in(None);

    for field in [
        SortField::by("address.city"),
        SortField::by("address.city").descending(),
    ] {
        let last = FieldComparator::new(field.clone().nulls_last());
        let first = FieldComparator::new(field.nulls_first());

        assert_eq!(last.compare(&without_city, &with_city).unwrap(), Ordering::Greater);
        assert_eq!(first.compare(&without_city, &with_city).unwrap(), Ordering::Less);
        assert_eq!(first.compare(&without_city, &without_city).unwrap(), Ordering::Equal);
    }
}

#[test]
fn case_folding_matches_ordinal_when_sensitive() {
    let upper = Value::record([("code", "AB")]);
    let lower = Value::record([("code", "ab")]);

    let folded = FieldComparator::new(SortField::by("code"));
    assert_eq!(folded.compare(&upper, &lower).unwrap(), Ordering::Equal);

    let sensitive = FieldComparator::new(SortField::by("code").case_sensitive());
    assert_eq!(
        sensitive.compare(&upper, &lower).unwrap(),
        "AB".cmp("ab")
    );
}

#[test]
fn null_intermediate_value_resolves_to_null() {
    let homeless = Person::new("x", 1);

    for extractor in [ValueExtractor::strict(), ValueExtractor::lenient()] {
        assert_eq!(
            extractor.resolve(&homeless, Some("address.city")).unwrap(),
            Value::Null
        );
    }

    let err = ValueExtractor::strict()
        .resolve(&homeless.living_in(Some("Oslo")), Some("address.street"))
        .unwrap_err();
    assert!(matches!(
        err,
        ComparatorError::Extract(ExtractError::MissingField { ref segment, .. }) if segment == "street"
    ));
}

#[test]
fn empty_chain_returns_equal_for_every_pair() {
    let chain = ComparatorChainBuilder::<Person>::new().build();
    let people = [Person::new("a", 1), Person::new("b", 2)];

    for x in &people {
        for y in &people {
            assert_eq!(chain.compare(x, y).unwrap(), Ordering::Equal);
        }
    }

    let parsed = ComparatorChainBuilder::<Person>::new()
        .add_text(" ; ;", TextOptions::defaults())
        .build();
    assert!(parsed.is_empty());
}

#[test]
fn sorts_people_from_text() {
    let people = vec![
        Person::new("carl", 40).living_in(Some("Rome")),
        Person::new("Anna", 25).living_in(None),
        Person::new("bert", 33),
        Person::new("anna", 31).living_in(Some("Lima")),
    ];

    let chain = ComparatorChainBuilder::<Person>::new()
        .add_text("address.city,asc,true,true;name;age,desc", TextOptions::defaults())
        .build();

    let sorted = chain.sorted(people).unwrap();
    assert_eq!(names(&sorted), ["Anna", "bert", "anna", "carl"]);
}

#[test]
fn natural_ordering_of_plain_values() {
    let chain = ComparatorChainBuilder::<i64>::new()
        .add_field(SortField::natural().descending())
        .build();

    assert_eq!(chain.sorted(vec![3, 11, -2]).unwrap(), [11, 3, -2]);
    assert_eq!(
        natural_cmp(&Value::Int(2), &Value::Float(2.0)).unwrap(),
        Ordering::Equal
    );
}
