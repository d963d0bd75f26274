use super::RestaurantSearch;
use super::mock::MockRestaurantSearch;
use super::types::{Restaurant, mood_cuisines};
use crate::error::Result;

/// Builds the search query a recommendation runs.
///
/// The first preferred cuisine that appears in the mood's cuisine list wins,
/// otherwise the mood's first cuisine. Cravings are appended verbatim.
pub fn recommendation_query(mood: &str, cravings: &[String], preferred_cuisines: &[String]) -> String {
    let cuisines = mood_cuisines(mood);
    let preferred = preferred_cuisines.iter().find(|pref| {
        let pref = pref.to_lowercase();
        !pref.is_empty() && cuisines.iter().any(|c| c.to_lowercase().contains(&pref))
    });

    let mut query = preferred.map_or_else(|| cuisines[0].to_string(), Clone::clone);
    if !cravings.is_empty() {
        query.push(' ');
        query.push_str(&cravings.join(" "));
    }
    query
}

/// Mood-driven recommendations, best rated first.
///
/// A failing backend is not surfaced: the built-in list answers instead.
pub async fn recommend(
    search: &dyn RestaurantSearch,
    mood: &str,
    cravings: &[String],
    preferred_cuisines: &[String],
    limit: usize,
) -> Result<Vec<Restaurant>> {
    let query = recommendation_query(mood, cravings, preferred_cuisines);
    tracing::debug!(mood, query = %query, "discovery.recommend");

    let mut results = match search.search(&query, None).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(query = %query, error = %e, "discovery.recommend_fallback");
            MockRestaurantSearch::new(limit).candidates(&query)
        }
    };
    results.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    results.truncate(limit);
    Ok(results)
}
