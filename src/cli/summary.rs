//! Summary mode: count every list the API exposes and exit.

use std::io;

use serverboard::{ApiError, HttpCommunityGateway, SiteSummary};

use super::output::write_site_summary_to;

/// Loads all lists concurrently and prints their sizes.
///
/// # Errors
///
/// Returns the first failing request, or [`ApiError::Io`] if stdout cannot
/// be written.
pub async fn run(gateway: &HttpCommunityGateway) -> Result<(), ApiError> {
    let summary = SiteSummary::load(gateway).await?;
    tracing::debug!(?summary, "site summary loaded");
    let mut stdout = io::stdout().lock();
    write_site_summary_to(&mut stdout, gateway.base_url(), &summary)
}
