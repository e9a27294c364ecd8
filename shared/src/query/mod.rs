//! Client-side list query engine: filter, sort and derive the rendered view.

pub mod criteria;
pub mod filter;
pub mod sort;
pub mod view;

pub use criteria::{clear_filters, count_active_filters, FilterCriteria, SortSpec};
pub use filter::filter;
pub use sort::{performance_score, sort};
pub use view::{compute_view, view_state, ViewState};
