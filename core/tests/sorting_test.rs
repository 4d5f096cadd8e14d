use std::cmp::Ordering;
use std::path::PathBuf;

use chucker_core::{FileMeta, SortOrder, natural_cmp, natural_name_cmp};

fn meta(name: &str, created_ms: u64, modified_ms: u64) -> FileMeta {
    FileMeta { name: name.to_string(), path: PathBuf::from(name), created_ms, modified_ms }
}

#[test]
fn natural_cmp_orders_numeric_sections() {
    let mut names = vec!["note10.md", "note2.md", "note1.md", "note11.md"];
    names.sort_by(|a, b| natural_cmp(a, b));
    assert_eq!(names, vec!["note1.md", "note2.md", "note10.md", "note11.md"]);
}

#[test]
fn natural_name_cmp_is_case_insensitive() {
    assert!(natural_name_cmp("Beta.md", "alpha.md").is_gt());
    assert!(natural_name_cmp("alpha.md", "BETA.md").is_lt());
}

#[test]
fn equal_values_order_by_digit_count() {
    // 001 and 1 have the same numeric value; fewer digits sorts first.
    assert_eq!(natural_cmp("1", "001"), Ordering::Less);
    assert_eq!(natural_cmp("a001", "a1"), Ordering::Greater);
}

#[test]
fn every_variant_has_a_distinct_comparator_behaviour() {
    let a = meta("a.md", 100, 900);
    let b = meta("b.md", 200, 100);

    assert_eq!(SortOrder::AlphabeticalAsc.comparator()(&a, &b), Ordering::Less);
    assert_eq!(SortOrder::AlphabeticalDesc.comparator()(&a, &b), Ordering::Greater);
    assert_eq!(SortOrder::CreatedAsc.comparator()(&a, &b), Ordering::Less);
    assert_eq!(SortOrder::CreatedDesc.comparator()(&a, &b), Ordering::Greater);
    assert_eq!(SortOrder::ModifiedAsc.comparator()(&a, &b), Ordering::Greater);
    assert_eq!(SortOrder::ModifiedDesc.comparator()(&a, &b), Ordering::Less);
}

#[test]
fn view_state_round_trip_covers_all_host_keys() {
    let cases = [
        ("alphabetical", SortOrder::AlphabeticalAsc),
        ("alphabeticalReverse", SortOrder::AlphabeticalDesc),
        ("byModifiedTime", SortOrder::ModifiedDesc),
        ("byModifiedTimeReverse", SortOrder::ModifiedAsc),
        ("byCreatedTime", SortOrder::CreatedDesc),
        ("byCreatedTimeReverse", SortOrder::CreatedAsc),
    ];
    for (key, expected) in cases {
        assert_eq!(SortOrder::from_view_state(key), Some(expected), "key {key}");
    }

    // Unknown keys fall back to the default at the call site.
    assert_eq!(SortOrder::from_view_state("").or(Some(SortOrder::default())), Some(SortOrder::AlphabeticalAsc));
}
