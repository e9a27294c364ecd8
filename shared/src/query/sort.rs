use crate::models::listable::Listable;
use crate::query::criteria::SortSpec;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Returns a stably sorted copy of `records`.
pub fn sort<R: Listable + Clone>(records: &[R], spec: SortSpec) -> Vec<R> {
    let mut sorted = records.to_vec();
    sort_in_place(&mut sorted, spec);
    sorted
}

pub(crate) fn sort_in_place<R: Listable>(records: &mut [R], spec: SortSpec) {
    match spec {
        SortSpec::Recent => records.sort_by(|a, b| by_date(a, b, true)),
        SortSpec::Oldest => records.sort_by(|a, b| by_date(a, b, false)),
        SortSpec::MostViewed => {
            records.sort_by(|a, b| b.views().unwrap_or(0).cmp(&a.views().unwrap_or(0)))
        }
        SortSpec::HighestPerformer => {
            records.sort_by(|a, b| performance_score(b).total_cmp(&performance_score(a)))
        }
        SortSpec::NameAsc => records.sort_by(|a, b| by_name(a, b)),
        SortSpec::NameDesc => records.sort_by(|a, b| by_name(b, a)),
    }
}

fn timestamp<R: Listable>(record: &R) -> Option<DateTime<Utc>> {
    record.created_at().or_else(|| record.secondary_timestamp())
}

// Undated records go last in both directions.
fn by_date<R: Listable>(a: &R, b: &R, newest_first: bool) -> Ordering {
    match (timestamp(a), timestamp(b)) {
        (Some(a), Some(b)) if newest_first => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_name<R: Listable>(a: &R, b: &R) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

/// Score used by the "highest performer" ordering.
///
/// `scout_score` when present, otherwise the mean of the rated attributes,
/// otherwise `total_matches * 10 + views`.
pub fn performance_score<R: Listable>(record: &R) -> f64 {
    if let Some(score) = record.scout_score().filter(|s| s.is_finite()) {
        return score;
    }

    let values = record.attribute_values();
    if !values.is_empty() {
        return values.iter().sum::<f64>() / values.len() as f64;
    }

    let matches = f64::from(record.total_matches().unwrap_or(0));
    matches * 10.0 + record.views().unwrap_or(0) as f64
}
