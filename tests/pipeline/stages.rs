//! Integration tests for pipeline stages
//!
//! Tests order preservation, source immutability and idempotence.

use proptest::prelude::*;
use streamline_foundation::{ContainerKind, ErrorKind};
use streamline_pipeline::{Pipeline, PipelineConfig, collect, filter, map, try_map};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Person {
    name: &'static str,
    age: u32,
}

fn potential_voters() -> Vec<Person> {
    vec![
        Person { name: "Tom", age: 24 },
        Person { name: "Dick", age: 75 },
        Person { name: "Harry", age: 17 },
    ]
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn adults_are_selected_and_source_is_untouched() {
    let source = potential_voters();
    let adults = filter(&source, |p| p.age >= 18);

    let names = collect(adults.iter().map(|p| p.name), ContainerKind::UniqueSet);
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Tom"));
    assert!(names.contains(&"Dick"));

    assert_eq!(source, potential_voters());
}

#[test]
fn map_then_filter_then_collect() {
    let source = potential_voters();
    let initials = Pipeline::new(&source)
        .map(|p| p.name.chars().next().unwrap_or(' '))
        .filter(|c| *c != 'H')
        .collect(ContainerKind::ImmutableOrderedList);
    assert_eq!(initials.to_vec(), vec!['T', 'D']);
}

#[test]
fn transform_failure_aborts_whole_map() {
    let source = potential_voters();
    let err = try_map(&source, |p| {
        u8::try_from(p.age * 4).map_err(|_| format!("{} is too old", p.name))
    })
    .unwrap_err();
    match err.kind {
        ErrorKind::TransformFailure { index, message, .. } => {
            assert_eq!(index, 1);
            assert_eq!(message, "Dick is too old");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn pipeline_is_idempotent(source in prop::collection::vec(any::<i32>(), 0..80)) {
        let run = || {
            collect(
                filter(&map(&source, |n| n.wrapping_mul(3)), |n| n % 2 == 0),
                ContainerKind::OrderedList,
            )
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn pipeline_builder_matches_free_functions(source in prop::collection::vec(0u16..500, 0..80)) {
        let built = Pipeline::with_config(&source, PipelineConfig::quiet())
            .map(|n| n / 2)
            .filter(|n| n % 5 != 0)
            .into_vec();
        let composed = filter(&map(&source, |n| n / 2), |n| n % 5 != 0);
        prop_assert_eq!(built, composed);
    }
}
