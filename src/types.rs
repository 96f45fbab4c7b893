use chrono::{DateTime, Utc};
use std::fmt;

/// A starred repository, as shown in the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRecord {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: String,
    pub homepage: String,
    pub language: String,
    pub license: Option<String>,
    pub stars: u32,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordering applied to the fetched stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// The order GitHub returns stars in (most recently starred first).
    #[default]
    AddedAt,
    AuthorName,
    CreatedAt,
    UpdatedAt,
    RepositoryName,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::AddedAt,
        SortKey::AuthorName,
        SortKey::CreatedAt,
        SortKey::UpdatedAt,
        SortKey::RepositoryName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::AddedAt => "added-at",
            SortKey::AuthorName => "author-name",
            SortKey::CreatedAt => "created-at",
            SortKey::UpdatedAt => "updated-at",
            SortKey::RepositoryName => "repository-name",
        }
    }

    /// Parse an `--order` value. Unknown values fall back to `AddedAt`,
    /// which keeps the fetch order untouched.
    pub fn parse(value: &str) -> SortKey {
        match SortKey::ALL.iter().find(|k| k.as_str() == value) {
            Some(key) => *key,
            None => {
                tracing::debug!(order = value, "unknown sort key, keeping fetch order");
                SortKey::AddedAt
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::StarRecord;
    use chrono::{TimeZone, Utc};

    /// A record named `owner/name` with timestamps derived from `id`.
    pub fn star(id: u64, full_name: &str) -> StarRecord {
        let (owner, name) = full_name.split_once('/').unwrap_or(("", full_name));
        StarRecord {
            id,
            name: name.to_string(),
            full_name: full_name.to_string(),
            owner: owner.to_string(),
            description: String::new(),
            homepage: String::new(),
            language: String::new(),
            license: None,
            stars: 0,
            url: format!("https://github.com/{}", full_name),
            created_at: Utc.timestamp_opt(1_500_000_000 + id as i64, 0).unwrap(),
            updated_at: Utc.timestamp_opt(1_600_000_000 + id as i64, 0).unwrap(),
        }
    }
}
