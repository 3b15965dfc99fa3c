//! High-level loaders built on a [`CommunityGateway`].

use super::error::ApiError;
use super::gateway::CommunityGateway;
use super::models::{Review, User};

/// Reviews plus the roster needed to name their authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFeed {
    /// User roster used for the author join.
    pub users: Vec<User>,
    /// Reviews in the order the API returned them.
    pub reviews: Vec<Review>,
}

/// Loads the review feed using a gateway.
pub struct ReviewFeedIntake<'client, Gateway>
where
    Gateway: CommunityGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ReviewFeedIntake<'client, Gateway>
where
    Gateway: CommunityGateway + ?Sized,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetch the roster and the reviews concurrently.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from either request.
    pub async fn load(&self) -> Result<ReviewFeed, ApiError> {
        let (users, reviews) =
            tokio::try_join!(self.client.fetch_users(), self.client.fetch_reviews())?;
        Ok(ReviewFeed { users, reviews })
    }
}

/// Entity counts across every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteSummary {
    /// Registered users.
    pub users: usize,
    /// Listed servers.
    pub servers: usize,
    /// Reviews.
    pub reviews: usize,
    /// Gallery posts.
    pub gallery_posts: usize,
    /// Community posts.
    pub community_posts: usize,
    /// Community comments.
    pub community_comments: usize,
}

impl SiteSummary {
    /// Fetches every list endpoint concurrently and counts the results.
    ///
    /// # Errors
    ///
    /// Propagates the first failing request.
    pub async fn load<Gateway>(client: &Gateway) -> Result<Self, ApiError>
    where
        Gateway: CommunityGateway + ?Sized,
    {
        let (users, servers, reviews, gallery, posts, comments) = tokio::try_join!(
            client.fetch_users(),
            client.fetch_servers(),
            client.fetch_reviews(),
            client.fetch_gallery_posts(),
            client.fetch_community_posts(),
            client.fetch_community_comments(),
        )?;

        Ok(Self {
            users: users.len(),
            servers: servers.len(),
            reviews: reviews.len(),
            gallery_posts: gallery.len(),
            community_posts: posts.len(),
            community_comments: comments.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio::runtime::Runtime;

    use super::{ReviewFeedIntake, SiteSummary};
    use crate::api::error::{ApiError, RequestError, RequestMethod};
    use crate::api::gateway::MockCommunityGateway;
    use crate::api::models::{Rating, Review, User};

    fn runtime() -> Runtime {
        Runtime::new().expect("runtime should start")
    }

    #[test]
    fn review_feed_combines_users_and_reviews() {
        let mut gateway = MockCommunityGateway::new();
        gateway.expect_fetch_users().times(1).returning(|| {
            Ok(vec![User {
                id: 1,
                username: "alice".to_owned(),
            }])
        });
        gateway.expect_fetch_reviews().times(1).returning(|| {
            Ok(vec![Review {
                id: 10,
                user: 1,
                rating: Rating::from(5),
                comment: "great".to_owned(),
                timestamp: "2025-03-01T10:00:00Z".to_owned(),
            }])
        });

        let feed = runtime()
            .block_on(ReviewFeedIntake::new(&gateway).load())
            .expect("feed should load");

        assert_eq!(feed.users.len(), 1);
        assert_eq!(feed.reviews.first().map(|review| review.id), Some(10));
    }

    #[test]
    fn review_feed_propagates_failures() {
        let mut gateway = MockCommunityGateway::new();
        gateway.expect_fetch_users().returning(|| Ok(Vec::new()));
        gateway.expect_fetch_reviews().returning(|| {
            Err(ApiError::Request(RequestError {
                method: RequestMethod::Get,
                endpoint: "/api/reviews".to_owned(),
                status: 500,
                status_text: "Internal Server Error".to_owned(),
                body: String::new(),
            }))
        });

        let error = runtime()
            .block_on(ReviewFeedIntake::new(&gateway).load())
            .expect_err("review failure should surface");

        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn site_summary_counts_every_list() {
        let mut gateway = MockCommunityGateway::new();
        gateway.expect_fetch_users().returning(|| {
            Ok(vec![
                User {
                    id: 1,
                    username: "alice".to_owned(),
                },
                User {
                    id: 2,
                    username: "bob".to_owned(),
                },
            ])
        });
        gateway.expect_fetch_servers().returning(|| Ok(Vec::new()));
        gateway.expect_fetch_reviews().returning(|| Ok(Vec::new()));
        gateway.expect_fetch_gallery_posts().returning(|| Ok(Vec::new()));
        gateway.expect_fetch_community_posts().returning(|| Ok(Vec::new()));
        gateway
            .expect_fetch_community_comments()
            .returning(|| Ok(Vec::new()));

        let summary = runtime()
            .block_on(SiteSummary::load(&gateway))
            .expect("summary should load");

        assert_eq!(
            summary,
            SiteSummary {
                users: 2,
                ..SiteSummary::default()
            }
        );
    }
}
