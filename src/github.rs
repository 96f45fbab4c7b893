use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::Deserialize;

use crate::error::{HoshiError, Result};
use crate::source::StarSource;
use crate::types::StarRecord;

pub const DEFAULT_PER_PAGE: u32 = 100;

pub struct GitHub {
    client: Octocrab,
    per_page: u32,
}

impl std::fmt::Debug for GitHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHub")
            .field("per_page", &self.per_page)
            .finish_non_exhaustive()
    }
}

impl From<octocrab::Error> for HoshiError {
    fn from(err: octocrab::Error) -> Self {
        HoshiError::Retrieval(err.to_string())
    }
}

impl GitHub {
    /// Build a client. Without a token requests are anonymous and subject to
    /// GitHub's lower unauthenticated rate limit.
    pub fn new(token: Option<String>, per_page: u32) -> Result<Self> {
        let builder = Octocrab::builder();
        let builder = match token {
            Some(token) => builder.personal_token(token),
            None => builder,
        };
        let client = builder
            .build()
            .map_err(|e| HoshiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            per_page: per_page.clamp(1, DEFAULT_PER_PAGE),
        })
    }

    fn starred_route(&self, user: &str, page: u32) -> String {
        format!(
            "/users/{}/starred?page={}&per_page={}",
            urlencoding::encode(user),
            page,
            self.per_page
        )
    }
}

#[async_trait]
impl StarSource for GitHub {
    async fn starred_page(&self, user: &str, page: u32) -> Result<Vec<StarRecord>> {
        let route = self.starred_route(user, page);
        tracing::debug!(%route, "requesting stars page");

        let body: serde_json::Value = self.client.get(&route, None::<&()>).await?;
        let repos: Vec<StarredRepo> = serde_json::from_value(body).map_err(|e| {
            HoshiError::Retrieval(format!("unexpected payload on page {}: {}", page, e))
        })?;

        Ok(repos.into_iter().map(StarRecord::from).collect())
    }
}

// GitHub API response types. Only the fields we display are decoded.

#[derive(Debug, Deserialize)]
struct StarredRepo {
    id: u64,
    name: String,
    full_name: String,
    owner: StarOwner,
    html_url: String,
    description: Option<String>,
    homepage: Option<String>,
    language: Option<String>,
    license: Option<StarLicense>,
    #[serde(default)]
    stargazers_count: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct StarOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct StarLicense {
    name: String,
}

impl From<StarredRepo> for StarRecord {
    fn from(repo: StarredRepo) -> Self {
        StarRecord {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            owner: repo.owner.login,
            description: repo.description.unwrap_or_default(),
            homepage: repo.homepage.unwrap_or_default(),
            language: repo.language.unwrap_or_default(),
            license: repo.license.map(|l| l.name),
            stars: repo.stargazers_count,
            url: repo.html_url,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}
