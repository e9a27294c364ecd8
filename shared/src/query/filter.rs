use crate::models::listable::Listable;
use crate::query::criteria::FilterCriteria;

/// Returns the records satisfying every active criterion, in input order.
pub fn filter<R: Listable + Clone>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    let query = criteria.search_query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| passes(*record, criteria, &query))
        .cloned()
        .collect()
}

/// `query` must already be trimmed and lowercased.
fn passes<R: Listable>(record: &R, criteria: &FilterCriteria, query: &str) -> bool {
    if !query.is_empty()
        && !record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query))
    {
        return false;
    }

    if !equals_if_set(record.country(), &criteria.country)
        || !equals_if_set(record.level(), &criteria.level)
        || !equals_if_set(record.gender(), &criteria.gender)
        || !equals_if_set(record.position(), &criteria.position)
    {
        return false;
    }

    // A record without an age is kept by age filters.
    if let Some(age) = record.age() {
        if criteria.age_min.is_some_and(|min| age < min) {
            return false;
        }
        if criteria.age_max.is_some_and(|max| age > max) {
            return false;
        }
    }

    let attribute = criteria.attribute.trim();
    if !attribute.is_empty() {
        let min = criteria.attribute_min_value.unwrap_or(0.0);
        match record.attribute(attribute) {
            Some(value) if value >= min => {}
            _ => return false,
        }
    }

    true
}

fn equals_if_set(value: Option<&str>, wanted: &str) -> bool {
    let wanted = wanted.trim();
    if wanted.is_empty() {
        return true;
    }
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case(wanted))
}
