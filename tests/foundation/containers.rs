//! Integration tests for containers
//!
//! Tests uniqueness and read-only semantics of each container kind.

use streamline_foundation::{Container, ContainerKind, ErrorKind};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Publisher(&'static str);

// =============================================================================
// Ordered lists
// =============================================================================

#[test]
fn ordered_list_preserves_order_and_duplicates() {
    let c = Container::collect(
        ContainerKind::OrderedList,
        vec![Publisher("b"), Publisher("a"), Publisher("b")],
    );
    assert_eq!(
        c.to_vec(),
        vec![Publisher("b"), Publisher("a"), Publisher("b")]
    );
}

#[test]
fn immutable_ordered_list_keeps_elements_but_rejects_push() {
    let source = vec![1, 2, 3];
    let mut c = Container::collect(ContainerKind::ImmutableOrderedList, source.clone());
    assert_eq!(c.to_vec(), source);

    let err = c.push(4).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ImmutableViolation {
            operation: "push",
            kind: ContainerKind::ImmutableOrderedList
        }
    ));
    assert_eq!(c.len(), 3);
}

// =============================================================================
// Unique sets
// =============================================================================

#[test]
fn unique_set_keeps_one_per_equality_class() {
    let c = Container::collect(
        ContainerKind::UniqueSet,
        vec![Publisher("b"), Publisher("a"), Publisher("b")],
    );
    assert_eq!(c.len(), 2);
    assert!(c.contains(&Publisher("a")));
    assert!(c.contains(&Publisher("b")));
}

#[test]
fn immutable_unique_set_rejects_remove_and_clear() {
    let mut c = Container::collect(ContainerKind::ImmutableUniqueSet, vec![1, 2]);
    assert!(matches!(
        c.remove(&1).unwrap_err().kind,
        ErrorKind::ImmutableViolation {
            operation: "remove",
            ..
        }
    ));
    assert!(matches!(
        c.clear().unwrap_err().kind,
        ErrorKind::ImmutableViolation {
            operation: "clear",
            ..
        }
    ));
    assert!(c.contains(&1));
}

// =============================================================================
// Freezing
// =============================================================================

#[test]
fn frozen_view_is_unaffected_by_later_changes() {
    let mut list = Container::new(ContainerKind::OrderedList);
    list.extend(vec!["x", "y"]).unwrap();
    let frozen = list.frozen();
    list.clear().unwrap();

    assert_eq!(frozen.len(), 2);
    assert!(list.is_empty());
}

#[test]
fn iterating_a_container() {
    let c = Container::collect(ContainerKind::OrderedList, vec![1, 2, 3]);
    let doubled: Vec<i32> = (&c).into_iter().map(|n| n * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}
