//! Review list component for displaying server reviews.
//!
//! Each review is joined to the user roster by id and rendered as a header
//! line (author, stars, date) followed by the comment. The list shows a
//! cursor marker and only renders the rows inside the scroll window.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::star_rating::star_rating;
use crate::api::{Review, User};

/// Default visible height, in reviews, for the list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 10;

/// Shown when there are no reviews.
pub const EMPTY_REVIEWS_MESSAGE: &str = "아직 리뷰가 없습니다. 가장 먼저 리뷰를 작성해보세요!";

/// Shown in place of an author missing from the roster.
pub const UNKNOWN_AUTHOR: &str = "알 수 없는 사용자";

/// Shown in place of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Context for rendering the review list view.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Reviews in display order.
    pub reviews: &'a [Review],
    /// Roster used to resolve author names.
    pub users: &'a [User],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Index of the first visible review.
    pub scroll_offset: usize,
    /// Number of reviews that fit on screen; zero uses the component default.
    pub visible_height: usize,
}

/// Component for displaying a list of reviews.
#[derive(Debug, Clone)]
pub struct ReviewListComponent {
    visible_height: usize,
}

impl Default for ReviewListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewListComponent {
    /// Creates a new review list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the review list as a string.
    ///
    /// Every review inside the scroll window produces exactly one item.
    #[must_use]
    pub fn view(&self, ctx: &ReviewListViewContext<'_>) -> String {
        if ctx.reviews.is_empty() {
            return format!("  {EMPTY_REVIEWS_MESSAGE}\n");
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (index, review) in ctx
            .reviews
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let selected = index == ctx.cursor_position;
            output.push_str(&format_review_item(review, ctx.users, selected));
        }
        output
    }
}

/// Looks up the author's display name.
#[must_use]
pub fn author_name<'a>(users: &'a [User], user_id: u64) -> &'a str {
    users
        .iter()
        .find(|user| user.id == user_id)
        .map_or(UNKNOWN_AUTHOR, |user| user.username.as_str())
}

/// Formats a timestamp as `YYYY. M. D.` in the timestamp's own offset.
///
/// Accepts RFC 3339 date-times, naive date-times and bare dates.
#[must_use]
pub fn format_review_date(timestamp: &str) -> String {
    parse_review_date(timestamp.trim()).map_or_else(
        || INVALID_DATE.to_owned(),
        |date| date.format("%Y. %-m. %-d.").to_string(),
    )
}

fn parse_review_date(timestamp: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|parsed| parsed.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(timestamp, "%Y-%m-%d"))
        .ok()
}

fn format_review_item(review: &Review, users: &[User], selected: bool) -> String {
    let prefix = if selected { ">" } else { " " };
    let author = author_name(users, review.user);
    let stars = star_rating(&review.rating);
    let date = format_review_date(&review.timestamp);
    format!(
        "{prefix} {author}  {stars}  {date}\n    {comment}\n",
        comment = review.comment
    )
}
