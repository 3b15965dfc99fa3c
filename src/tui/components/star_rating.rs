//! Five-star rating glyphs.

use crate::api::Rating;

/// Highest rating a review can carry.
pub const MAX_STARS: u8 = 5;

/// Renders `rating` as filled and empty stars.
///
/// The rating is rounded to whole stars and clamped to `0..=5`, so
/// fractional, negative or oversized values still draw five glyphs.
#[must_use]
pub fn star_rating(rating: &Rating) -> String {
    let filled = rating.as_f64().map_or(0, whole_stars);
    let empty = MAX_STARS - filled;
    let mut stars = "★".repeat(usize::from(filled));
    stars.push_str(&"☆".repeat(usize::from(empty)));
    stars
}

fn whole_stars(value: f64) -> u8 {
    let rounded = value.round();
    (0..=MAX_STARS)
        .rev()
        .find(|stars| f64::from(*stars) <= rounded)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::star_rating;
    use crate::api::Rating;

    fn rating(raw: &str) -> Rating {
        serde_json::from_str(raw).expect("rating should decode")
    }

    #[rstest]
    #[case::none("0", "☆☆☆☆☆")]
    #[case::partial("3", "★★★☆☆")]
    #[case::full("5", "★★★★★")]
    #[case::clamped("9", "★★★★★")]
    #[case::half_rounds_up("4.5", "★★★★★")]
    #[case::fraction_rounds_down("2.4", "★★☆☆☆")]
    #[case::negative("-3", "☆☆☆☆☆")]
    fn renders_filled_and_empty_stars(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(star_rating(&rating(raw)), expected);
    }

    #[test]
    fn whole_ratings_convert_from_integers() {
        assert_eq!(star_rating(&Rating::from(4)), "★★★★☆");
    }
}
