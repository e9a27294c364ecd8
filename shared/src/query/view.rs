use crate::models::listable::Listable;
use crate::query::criteria::{FilterCriteria, SortSpec};
use crate::query::filter::filter;
use crate::query::sort::sort_in_place;

/// `sort(filter(records, criteria), spec)`, recomputed whenever an input changes.
pub fn compute_view<R: Listable + Clone>(
    records: &[R],
    criteria: &FilterCriteria,
    spec: SortSpec,
) -> Vec<R> {
    let mut view = filter(records, criteria);
    sort_in_place(&mut view, spec);
    view
}

/// What a list page shows for a given derived view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<R> {
    /// Nothing has been fetched, or the source collection is empty.
    NothingYet,
    /// Records exist but the active filters exclude all of them.
    NoResults { active_filters: usize },
    Results(Vec<R>),
}

impl<R> ViewState<R> {
    pub fn records(&self) -> &[R] {
        match self {
            ViewState::Results(records) => records,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

pub fn view_state<R: Listable + Clone>(
    records: &[R],
    criteria: &FilterCriteria,
    spec: SortSpec,
) -> ViewState<R> {
    if records.is_empty() {
        return ViewState::NothingYet;
    }
    let view = compute_view(records, criteria, spec);
    if view.is_empty() {
        ViewState::NoResults {
            active_filters: crate::query::criteria::count_active_filters(criteria),
        }
    } else {
        ViewState::Results(view)
    }
}
