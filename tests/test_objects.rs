//! Property tests for object serialization.

use pdf_forge::object::{Dictionary, Name, Object, PdfObject, Real, Rectangle, Stream};
use proptest::prelude::*;

proptest! {
    #[test]
    fn name_escaping_is_reversible(text in "\\PC{1,24}") {
        let name = Name::new(text.clone());
        let escaped = name.encode();
        prop_assert!(escaped.bytes().all(|b| (0x21..=0x7E).contains(&b)));
        let delimiters = ['/', '(', ')', '<', '>', '[', ']', '{', '}', '%'];
        let has_delimiter = escaped.contains(delimiters);
        prop_assert!(!has_delimiter, "delimiter left in {}", escaped);
        let decoded = Name::decode(&escaped).unwrap();
        prop_assert_eq!(decoded.as_str(), text.as_str());
    }

    #[test]
    fn reals_keep_at_most_five_fraction_digits(value in -1.0e6f64..1.0e6) {
        let written = String::from_utf8(Real::new(value).unwrap().to_bytes()).unwrap();
        let fraction = written.split('.').nth(1).unwrap_or("");
        prop_assert!(fraction.len() <= 5, "{} -> {}", value, written);
        prop_assert!(!fraction.ends_with('0'));
        prop_assert!(!written.contains('e'));
        let parsed: f64 = written.parse().unwrap();
        prop_assert!((parsed - value).abs() < 1e-5);
    }

    #[test]
    fn dictionary_bytes_ignore_insertion_order(
        entries in prop::collection::btree_map("[A-Za-z]{1,8}", any::<i64>(), 0..12)
    ) {
        let forward: Dictionary = entries.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let backward: Dictionary = entries.iter().rev().map(|(k, v)| (k.as_str(), *v)).collect();
        prop_assert_eq!(forward.to_bytes(), backward.to_bytes());
        prop_assert_eq!(forward.len(), entries.len());
    }

    #[test]
    fn stream_length_matches_payload(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let stream = Stream::new(data.clone());
        let bytes = stream.to_bytes();
        let header = format!("<</Length {}>>\nstream\n", data.len());
        prop_assert!(bytes.starts_with(header.as_bytes()));
        prop_assert!(bytes.ends_with(b"\nendstream"));
        prop_assert_eq!(bytes.len(), header.len() + data.len() + b"\nendstream".len());
    }

    #[test]
    fn rectangle_order_is_fixed(
        a in -1000i32..1000, b in -1000i32..1000, c in -1000i32..1000, d in -1000i32..1000
    ) {
        let rect = Rectangle::new(a as f64, b as f64, c as f64, d as f64).unwrap();
        let written = String::from_utf8(rect.to_bytes()).unwrap();
        prop_assert_eq!(written, format!("[ {} {} {} {} ]", a, b, c, d));
        prop_assert_eq!(rect.width(), (c - a).abs() as f64);
    }
}

#[test]
fn test_nested_composites() {
    let inner = Dictionary::new().with("Kind", Name::new("Leaf"));
    let dict = Dictionary::new()
        .with("Items", vec![Object::Integer(1), Object::Dictionary(inner), Object::Null])
        .with("Name", Name::new("A B"));
    assert_eq!(
        String::from_utf8(dict.to_bytes()).unwrap(),
        "<</Items [ 1 <</Kind /Leaf>> null ]/Name /A#20B>>"
    );
}
