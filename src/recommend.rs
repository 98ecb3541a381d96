use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{self, RecommendationItem};
use crate::mood::MoodCategory;

/// Deterministic-given-RNG selection: the mood's own items plus up to
/// three cross-listed items from other moods, shuffled, truncated to
/// `count`. Never returns duplicate ids.
pub fn recommend_with<R: Rng + ?Sized>(
    category: MoodCategory,
    count: usize,
    rng: &mut R,
) -> Vec<RecommendationItem> {
    if count == 0 {
        return Vec::new();
    }

    let primary = catalog::items_for(category);
    let primary_ids: HashSet<&str> = primary.iter().map(|i| i.id.as_str()).collect();

    // Cross-listed extras, taken in catalog declaration order, capped at 3.
    let mut secondary = Vec::new();
    'moods: for mood in MoodCategory::ALL {
        for candidate in catalog::items_for(mood) {
            if candidate.mood_target.contains(&category)
                && !primary_ids.contains(candidate.id.as_str())
            {
                secondary.push(candidate.clone());
                if secondary.len() == 3 {
                    break 'moods;
                }
            }
        }
    }

    let mut pool: Vec<RecommendationItem> = primary.to_vec();
    pool.extend(secondary);
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Ambient-randomness convenience over [`recommend_with`].
pub fn recommend(category: MoodCategory, count: usize) -> Vec<RecommendationItem> {
    recommend_with(category, count, &mut rand::thread_rng())
}

/// Direct lookup, no sampling: repeated calls always return the same item.
pub fn micro_habit(category: MoodCategory) -> &'static RecommendationItem {
    catalog::habit_for(category)
}
