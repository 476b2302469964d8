//! Property-based tests for normalization, merging and rendering.
//!
//! These tests use proptest to generate random unit contents and verify that
//! the ordering, deduplication and determinism invariants hold for all of
//! them.

#[cfg(test)]
mod proptest_tests {
    use crate::config::ActiveConfig;
    use crate::merge::merge_sections;
    use crate::node::normalize;
    use crate::outline::render_outline;
    use crate::unit::{Section, Unit, UnitKind};
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value};

    // ============================================================================
    // Generators
    // ============================================================================

    /// Short item texts, so that collisions (and therefore dedup) are common.
    fn text() -> impl Strategy<Value = String> {
        "[a-d]{1,2}"
    }

    /// A raw item in any of the three authored shapes, up to a small depth.
    fn raw_item() -> impl Strategy<Value = Value> {
        let leaf = text().prop_map(Value::String);
        leaf.prop_recursive(3, 16, 3, |inner| {
            prop_oneof![
                (text(), prop::collection::vec(inner.clone(), 0..3)).prop_map(|(t, items)| {
                    let mut map = Mapping::new();
                    map.insert(Value::String(t), Value::Sequence(items));
                    Value::Mapping(map)
                }),
                (text(), prop::collection::vec(inner, 0..3)).prop_map(|(t, items)| {
                    let mut map = Mapping::new();
                    map.insert(Value::String("text".into()), Value::String(t));
                    map.insert(Value::String("items".into()), Value::Sequence(items));
                    Value::Mapping(map)
                }),
            ]
        })
    }

    fn heading() -> impl Strategy<Value = String> {
        "[A-C]"
    }

    fn unit(kind: UnitKind, name: &'static str) -> impl Strategy<Value = Unit> {
        prop::collection::vec((heading(), prop::collection::vec(raw_item(), 0..4)), 0..4).prop_map(
            move |sections| Unit {
                kind,
                name: name.to_string(),
                sections: sections
                    .into_iter()
                    .map(|(heading, items)| Section { heading, items })
                    .collect(),
            },
        )
    }

    fn units() -> impl Strategy<Value = Vec<Unit>> {
        (
            unit(UnitKind::Profile, "p"),
            unit(UnitKind::Target, "t"),
            unit(UnitKind::Pack, "k"),
        )
            .prop_map(|(p, t, k)| vec![p, t, k])
    }

    fn active() -> ActiveConfig {
        ActiveConfig {
            profile: "p".to_string(),
            targets: vec!["t".to_string()],
            packs: vec!["k".to_string()],
        }
    }

    // ============================================================================
    // Properties
    // ============================================================================

    proptest! {
        /// Property: normalizing the same raw item twice gives the same node
        #[test]
        fn normalize_is_deterministic(item in raw_item()) {
            prop_assert_eq!(normalize(&item).unwrap(), normalize(&item).unwrap());
        }

        /// Property: composing twice gives byte-identical output
        #[test]
        fn render_is_idempotent(units in units()) {
            let first = render_outline(&merge_sections(&units, &active()).unwrap());
            let second = render_outline(&merge_sections(&units, &active()).unwrap());
            prop_assert_eq!(first, second);
        }

        /// Property: headings appear in first-seen order across units
        #[test]
        fn headings_follow_first_seen_order(units in units()) {
            let mut expected: Vec<&str> = Vec::new();
            for unit in &units {
                for section in &unit.sections {
                    if !expected.contains(&section.heading.as_str()) {
                        expected.push(&section.heading);
                    }
                }
            }
            let merged = merge_sections(&units, &active()).unwrap();
            prop_assert_eq!(merged.headings().collect::<Vec<_>>(), expected);
        }

        /// Property: repeating a unit never adds output
        #[test]
        fn repeating_units_changes_nothing(units in units()) {
            let once = render_outline(&merge_sections(&units, &active()).unwrap());
            let mut doubled = units.clone();
            doubled.extend(units.iter().cloned());
            let twice = render_outline(&merge_sections(&doubled, &active()).unwrap());
            prop_assert_eq!(once, twice);
        }

        /// Property: no heading holds two structurally identical nodes
        #[test]
        fn merged_buckets_have_no_duplicates(units in units()) {
            let merged = merge_sections(&units, &active()).unwrap();
            for section in merged.iter() {
                for (i, a) in section.nodes.iter().enumerate() {
                    for b in &section.nodes[i + 1..] {
                        prop_assert!(a != b, "duplicate node {:?} under {}", a, section.heading);
                    }
                }
            }
        }

        /// Property: output always ends with exactly one newline
        #[test]
        fn outline_ends_with_single_newline(units in units()) {
            let out = render_outline(&merge_sections(&units, &active()).unwrap());
            prop_assert!(out.ends_with('\n'));
            prop_assert!(!out.ends_with("\n\n"));
        }
    }
}
