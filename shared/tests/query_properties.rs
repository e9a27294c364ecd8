//! Property and scenario tests for the list query engine.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use shared::query::{compute_view, count_active_filters, filter, sort, FilterCriteria, SortSpec};
use shared::{Club, Listable, ScoutingProfile};
use std::collections::BTreeMap;

const COUNTRIES: &[&str] = &["France", "Spain", "Italy"];
const POSITIONS: &[&str] = &["GK", "CB", "CM", "ST"];

fn arb_profile() -> impl Strategy<Value = ScoutingProfile> {
    (
        "[A-Za-z]{1,8}",
        proptest::option::of(prop::sample::select(COUNTRIES)),
        proptest::option::of(prop::sample::select(POSITIONS)),
        proptest::option::of(14u32..40),
        proptest::option::of(0.0f64..100.0),
        proptest::option::of(prop::collection::btree_map(
            prop::sample::select(&["speed", "shooting", "passing"][..]),
            0.0f64..100.0,
            0..3,
        )),
        proptest::option::of(0u64..5),
    )
        .prop_map(|(name, country, position, age, score, attributes, views)| ScoutingProfile {
            id: String::new(),
            name,
            country: country.map(str::to_string),
            position: position.map(str::to_string),
            age,
            scout_score: score,
            attributes: attributes.map(|a| {
                a.into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect::<BTreeMap<_, _>>()
            }),
            views,
            ..Default::default()
        })
}

/// Profiles tagged with their input index so identity survives cloning.
fn arb_profiles() -> impl Strategy<Value = Vec<ScoutingProfile>> {
    prop::collection::vec(arb_profile(), 0..30).prop_map(|mut profiles| {
        for (i, p) in profiles.iter_mut().enumerate() {
            p.id = i.to_string();
        }
        profiles
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::select(&["", "a", "E", "zz"][..]),
        prop::sample::select(&["", "France", "spain"][..]),
        prop::sample::select(&["", "ST", "GK"][..]),
        proptest::option::of(14u32..30),
        proptest::option::of(20u32..40),
        prop::sample::select(&["", "speed"][..]),
        proptest::option::of(0.0f64..100.0),
    )
        .prop_map(|(search, country, position, age_min, age_max, attribute, min)| {
            FilterCriteria::default()
                .with_search(search)
                .with_country(country)
                .with_position(position)
                .with_age_range(age_min, age_max)
                .with_attribute(attribute, min)
        })
}

fn arb_sort() -> impl Strategy<Value = SortSpec> {
    prop::sample::select(SortSpec::ALL.to_vec())
}

fn ids(records: &[ScoutingProfile]) -> Vec<usize> {
    records.iter().map(|p| p.id.parse().unwrap()).collect()
}

proptest! {
    #[test]
    fn filter_is_idempotent(records in arb_profiles(), criteria in arb_criteria()) {
        let once = filter(&records, &criteria);
        let twice = filter(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_criteria_is_identity(records in arb_profiles()) {
        prop_assert_eq!(filter(&records, &FilterCriteria::default()), records);
    }

    #[test]
    fn filter_keeps_input_order(records in arb_profiles(), criteria in arb_criteria()) {
        let kept = ids(&filter(&records, &criteria));
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sort_is_stable(records in arb_profiles(), spec in arb_sort()) {
        let sorted = sort(&records, spec);
        for pair in sorted.windows(2) {
            // a swapped pair that sorts back unchanged has equal keys
            let swapped = sort(&[pair[1].clone(), pair[0].clone()], spec);
            if swapped[0] == pair[1] {
                prop_assert!(ids(pair)[0] < ids(pair)[1]);
            }
        }
    }

    #[test]
    fn view_is_a_permutation_of_a_subset(
        records in arb_profiles(),
        criteria in arb_criteria(),
        spec in arb_sort(),
    ) {
        let view = compute_view(&records, &criteria, spec);
        let mut seen = ids(&view);
        let len = seen.len();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), len);
        for id in &seen {
            prop_assert!(*id < records.len());
        }
        for profile in &view {
            let id: usize = profile.id.parse().unwrap();
            prop_assert_eq!(profile, &records[id]);
        }
    }
}

#[rstest]
#[case(FilterCriteria::default(), 0)]
#[case(FilterCriteria::default().with_search("alpha"), 1)]
#[case(FilterCriteria::default().with_country("France").with_level("Academy"), 2)]
#[case(FilterCriteria::default().with_age_range(Some(18), None), 1)]
#[case(FilterCriteria::default().with_age_range(Some(18), Some(25)), 2)]
#[case(
    FilterCriteria::default()
        .with_search("x")
        .with_country("Spain")
        .with_level("Youth")
        .with_gender("Male")
        .with_position("GK")
        .with_age_range(Some(16), Some(21))
        .with_attribute("speed", Some(60.0)),
    9
)]
fn active_filter_count_matches_populated_keys(
    #[case] criteria: FilterCriteria,
    #[case] expected: usize,
) {
    assert_eq!(count_active_filters(&criteria), expected);
}

#[test_log::test]
fn scenario_club_search() {
    let clubs = vec![
        Club {
            id: "1".to_string(),
            name: "FC Alpha".to_string(),
            country: Some("France".to_string()),
            ..Default::default()
        },
        Club {
            id: "2".to_string(),
            name: "Beta United".to_string(),
            country: Some("Spain".to_string()),
            ..Default::default()
        },
    ];
    let result = filter(&clubs, &FilterCriteria::default().with_search("alpha"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "FC Alpha");
}

#[test_log::test]
fn scenario_age_range_filter() {
    let profile = |name: &str, age: Option<u32>| ScoutingProfile {
        id: name.to_string(),
        name: name.to_string(),
        age,
        ..Default::default()
    };
    let records = vec![profile("A", Some(17)), profile("B", Some(22)), profile("C", None)];
    let result = filter(
        &records,
        &FilterCriteria::default().with_age_range(Some(18), Some(25)),
    );
    let names: Vec<String> = result.iter().map(|p| p.name().into_owned()).collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test_log::test]
fn scenario_highest_performer_with_missing_score() {
    let x = ScoutingProfile {
        id: "x".to_string(),
        name: "X".to_string(),
        attributes: Some(BTreeMap::from([
            ("speed".to_string(), 80.0),
            ("shooting".to_string(), 60.0),
        ])),
        ..Default::default()
    };
    let y = ScoutingProfile {
        id: "y".to_string(),
        name: "Y".to_string(),
        scout_score: Some(95.0),
        ..Default::default()
    };
    let sorted = sort(&[x, y], SortSpec::HighestPerformer);
    let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Y", "X"]);
}
