//! UI components for the community TUI.
//!
//! Components are pure renderers: they receive state or a view context and
//! return the text to draw.

mod auth_modal;
mod review_list;
mod star_rating;
mod text_wrap;

pub use auth_modal::{AuthModalComponent, SUBMITTING_LABEL};
pub use review_list::{
    EMPTY_REVIEWS_MESSAGE, INVALID_DATE, ReviewListComponent, ReviewListViewContext,
    UNKNOWN_AUTHOR, author_name, format_review_date,
};
pub use star_rating::{MAX_STARS, star_rating};
pub use text_wrap::wrap_with_prefix;
