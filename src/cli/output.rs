//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use serverboard::{ApiBaseUrl, ApiError, SiteSummary};

/// Writes entity counts for the site at `base_url` to the given writer.
pub fn write_site_summary_to<W: Write>(
    writer: &mut W,
    base_url: &ApiBaseUrl,
    summary: &SiteSummary,
) -> Result<(), ApiError> {
    writeln!(writer, "Community at {}:", base_url.as_str()).map_err(|e| io_error(&e))?;
    let rows = [
        ("Users", summary.users),
        ("Servers", summary.servers),
        ("Reviews", summary.reviews),
        ("Gallery posts", summary.gallery_posts),
        ("Community posts", summary.community_posts),
        ("Community comments", summary.community_comments),
    ];
    for (label, count) in rows {
        writeln!(writer, "  {label:<20}{count}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn io_error(error: &io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serverboard::{ApiBaseUrl, SiteSummary};

    use super::write_site_summary_to;

    #[test]
    fn summary_lists_every_entity() {
        let base_url = ApiBaseUrl::parse("https://community.example.com").expect("valid URL");
        let summary = SiteSummary {
            users: 3,
            servers: 2,
            reviews: 7,
            gallery_posts: 0,
            community_posts: 4,
            community_comments: 9,
        };
        let mut buffer = Vec::new();

        write_site_summary_to(&mut buffer, &base_url, &summary).expect("write should succeed");

        let output = String::from_utf8(buffer).expect("output is UTF-8");
        insta::assert_snapshot!(output, @r"
        Community at https://community.example.com:
          Users               3
          Servers             2
          Reviews             7
          Gallery posts       0
          Community posts     4
          Community comments  9
        ");
    }
}
