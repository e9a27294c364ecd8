//! Fetch orchestration for list pages.
//!
//! Responses resolve out of order. A refresh bumps the request generation and
//! only a response carrying the current generation is applied. "Load more" is
//! single-flight, and a disposed controller ignores everything that resolves
//! afterwards.

use crate::api::ScoutApi;
use crate::config::Config;
use crate::state::{ListAction, ListState};
use crate::toast::ToastQueue;
use async_trait::async_trait;
use log::{debug, error, warn};
use shared::{
    Club, FilterCriteria, FootballMatch, Listable, Page, Result, ScoutingProfile, SortSpec,
    ViewState,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::Reducible;

/// Where a list page gets its records from. Pages are 1-based.
#[async_trait(?Send)]
pub trait PageSource<R> {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<R>>;
}

#[async_trait(?Send)]
impl PageSource<FootballMatch> for Rc<dyn ScoutApi> {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<FootballMatch>> {
        self.list_matches(page, limit).await
    }
}

// Clubs and profiles come back in one response.
#[async_trait(?Send)]
impl PageSource<Club> for Rc<dyn ScoutApi> {
    async fn fetch_page(&self, _page: u32, _limit: u32) -> Result<Page<Club>> {
        self.list_clubs().await.map(single_page)
    }
}

#[async_trait(?Send)]
impl PageSource<ScoutingProfile> for Rc<dyn ScoutApi> {
    async fn fetch_page(&self, _page: u32, _limit: u32) -> Result<Page<ScoutingProfile>> {
        self.list_profiles().await.map(single_page)
    }
}

fn single_page<R>(items: Vec<R>) -> Page<R> {
    let total_items = items.len() as u64;
    Page {
        items,
        pagination: shared::Pagination {
            page: 1,
            total_pages: 1,
            total_items,
        },
    }
}

pub struct ListController<R, S> {
    source: S,
    state: RefCell<Rc<ListState<R>>>,
    generation: Cell<u64>,
    disposed: Cell<bool>,
    page_size: u32,
    toasts: ToastQueue,
}

impl<R, S> ListController<R, S>
where
    R: Listable + Clone,
    S: PageSource<R>,
{
    pub fn new(source: S, toasts: ToastQueue) -> Self {
        Self::with_page_size(source, toasts, Config::default_page_size())
    }

    pub fn with_page_size(source: S, toasts: ToastQueue, page_size: u32) -> Self {
        Self {
            source,
            state: RefCell::new(Rc::new(ListState::default())),
            generation: Cell::new(0),
            disposed: Cell::new(false),
            page_size,
            toasts,
        }
    }

    pub fn state(&self) -> Rc<ListState<R>> {
        Rc::clone(&self.state.borrow())
    }

    pub fn view(&self) -> ViewState<R> {
        self.state.borrow().view()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    fn dispatch(&self, action: ListAction<R>) {
        let current = self.state();
        let next = current.reduce(action);
        *self.state.borrow_mut() = next;
    }

    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.dispatch(ListAction::SetCriteria(criteria));
    }

    pub fn set_sort(&self, sort: SortSpec) {
        self.dispatch(ListAction::SetSort(sort));
    }

    pub fn clear_filters(&self) {
        self.dispatch(ListAction::ClearFilters);
    }

    /// Fetches the first page, replacing whatever is loaded. Returns false when
    /// the response was stale or arrived after disposal.
    pub async fn refresh(&self) -> bool {
        if self.disposed.get() {
            return false;
        }
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.dispatch(ListAction::FetchStarted);
        debug!("List refresh #{} started", generation);

        let result = self.source.fetch_page(1, self.page_size).await;

        if self.disposed.get() {
            debug!("List refresh #{} resolved after teardown", generation);
            return false;
        }
        if generation != self.generation.get() {
            warn!(
                "Discarding stale list response #{} (current #{})",
                generation,
                self.generation.get()
            );
            return false;
        }

        match result {
            Ok(page) => {
                debug!("List refresh #{} loaded {} records", generation, page.items.len());
                self.dispatch(ListAction::PageLoaded(page));
                true
            }
            Err(e) => {
                error!("List refresh #{} failed: {}", generation, e);
                let message = e.user_message();
                self.toasts.error(message.clone());
                self.dispatch(ListAction::FetchFailed(message));
                false
            }
        }
    }

    /// Fetches the page after the last loaded one and appends it.
    ///
    /// Does nothing while another "load more" is in flight, while a refresh is
    /// loading, or when the server reported no further pages.
    pub async fn load_more(&self) -> bool {
        let next_page = {
            let state = self.state.borrow();
            if self.disposed.get() || state.loading || state.loading_more || !state.has_more() {
                return false;
            }
            state.pagination.map_or(1, |p| p.page + 1)
        };

        let generation = self.generation.get();
        self.dispatch(ListAction::MoreStarted);
        debug!("Loading page {}", next_page);

        let result = self.source.fetch_page(next_page, self.page_size).await;

        if self.disposed.get() {
            debug!("Page {} resolved after teardown", next_page);
            return false;
        }
        if generation != self.generation.get() {
            warn!("Discarding page {} fetched for a replaced list", next_page);
            self.dispatch(ListAction::MoreDiscarded);
            return false;
        }

        match result {
            Ok(page) => {
                self.dispatch(ListAction::MoreLoaded(page));
                true
            }
            Err(e) => {
                error!("Loading page {} failed: {}", next_page, e);
                let message = e.user_message();
                self.toasts.error(message.clone());
                self.dispatch(ListAction::MoreFailed(message));
                false
            }
        }
    }

    /// Abandons in-flight work; later resolutions leave the state untouched.
    pub fn dispose(&self) {
        debug!("List controller disposed");
        self.disposed.set(true);
    }
}

impl<R, S> ListController<R, S>
where
    R: Listable + Clone + 'static,
    S: PageSource<R> + 'static,
{
    /// Starts a refresh on the browser's microtask queue.
    pub fn spawn_refresh(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            controller.refresh().await;
        });
    }

    pub fn spawn_load_more(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            controller.load_more().await;
        });
    }
}
