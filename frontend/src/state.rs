//! Page state as `yew::Reducible` values, driven by `use_reducer` in pages
//! and by the controllers.

use log::debug;
use shared::{
    count_active_filters, view_state, Advance, FilterCriteria, Listable, Page, Pagination,
    SharedError, SortSpec, ViewState, WizardState, Workflow,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub records: Vec<R>,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub loading_more: bool,
    /// True once a first fetch has succeeded
    pub fetched: bool,
    pub error: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            pagination: None,
            loading: false,
            loading_more: false,
            fetched: false,
            error: None,
        }
    }
}

impl<R: Listable + Clone> ListState<R> {
    pub fn has_more(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_more())
    }

    pub fn active_filters(&self) -> usize {
        count_active_filters(&self.criteria)
    }

    pub fn view(&self) -> ViewState<R> {
        view_state(&self.records, &self.criteria, self.sort)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<R> {
    FetchStarted,
    /// First page of a fresh fetch; replaces the loaded records.
    PageLoaded(Page<R>),
    FetchFailed(String),
    MoreStarted,
    /// A following page; appended after the loaded records.
    MoreLoaded(Page<R>),
    MoreFailed(String),
    /// A "load more" result that arrived after the list was replaced.
    MoreDiscarded,
    SetCriteria(FilterCriteria),
    SetSort(SortSpec),
    ClearFilters,
}

impl<R: Clone> Reducible for ListState<R> {
    type Action = ListAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::FetchStarted => {
                next.loading = true;
                next.error = None;
            }
            ListAction::PageLoaded(page) => {
                next.records = page.items;
                next.pagination = Some(page.pagination);
                next.loading = false;
                next.fetched = true;
            }
            ListAction::FetchFailed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            ListAction::MoreStarted => {
                next.loading_more = true;
            }
            ListAction::MoreLoaded(page) => {
                next.records.extend(page.items);
                next.pagination = Some(page.pagination);
                next.loading_more = false;
            }
            ListAction::MoreFailed(message) => {
                next.loading_more = false;
                next.error = Some(message);
            }
            ListAction::MoreDiscarded => {
                next.loading_more = false;
            }
            ListAction::SetCriteria(criteria) => {
                next.criteria = criteria;
            }
            ListAction::SetSort(sort) => {
                debug!("Sort changed to {}", sort);
                next.sort = sort;
            }
            ListAction::ClearFilters => {
                next.criteria = shared::clear_filters(&next.criteria);
            }
        }
        Rc::new(next)
    }
}

/// A wizard plus the outcome of the last advance attempt
#[derive(Debug, Clone, PartialEq)]
pub struct WizardModel<W: Workflow> {
    pub state: WizardState<W>,
    pub last_advance: Option<Advance<W::Payload>>,
}

impl<W: Workflow> WizardModel<W> {
    pub fn new(fields: W) -> Self {
        Self {
            state: WizardState::new(fields),
            last_advance: None,
        }
    }
}

impl<W: Workflow + Default> Default for WizardModel<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction<W> {
    /// Replaces the field values; progress and errors are kept.
    Edit(W),
    Advance,
    SubmitFinished(Result<(), SharedError>),
    Back,
    DismissError,
}

impl<W> Reducible for WizardModel<W>
where
    W: Workflow + Clone,
    W::Payload: Clone,
{
    type Action = WizardAction<W>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::Edit(fields) => {
                *next.state.fields_mut() = fields;
            }
            WizardAction::Advance => {
                next.last_advance = Some(next.state.begin_advance());
            }
            WizardAction::SubmitFinished(outcome) => {
                next.state.finish_submit(&outcome);
                next.last_advance = None;
            }
            WizardAction::Back => {
                next.state.back();
            }
            WizardAction::DismissError => {
                next.state.set_error(None);
            }
        }
        Rc::new(next)
    }
}
