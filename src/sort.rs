use crate::types::{SortKey, StarRecord};

/// Reorder `stars` by `key`, then reverse the result if asked.
///
/// Every ordering is stable, so equal keys keep their fetch order.
pub fn sort_stars(mut stars: Vec<StarRecord>, key: SortKey, reverse: bool) -> Vec<StarRecord> {
    match key {
        SortKey::AddedAt => {}
        SortKey::AuthorName => stars.sort_by_cached_key(|s| s.owner.to_lowercase()),
        SortKey::CreatedAt => stars.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::UpdatedAt => stars.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortKey::RepositoryName => stars.sort_by_cached_key(|s| s.name.to_lowercase()),
    }

    if reverse {
        stars.reverse();
    }

    stars
}
