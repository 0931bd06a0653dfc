//! Learning schedules
//!
//! Splits an ordered list of topics into consecutive day-plans. The returned
//! plans partition the input exactly: concatenating their topics in day order
//! gives back the original sequence.

use crate::model::MindMap;
use serde::{Deserialize, Serialize};

/// Topics used when no mind map is available
pub const DEFAULT_TOPICS: [&str; 8] = [
    "Target Market Analysis",
    "Tech Stack Planning",
    "Revenue Model Design",
    "Marketing Strategy",
    "User Experience Design",
    "Competitive Analysis",
    "Financial Projections",
    "Legal Considerations",
];

/// Day count offered before the user picks one
pub const DEFAULT_LEARNING_DAYS: i64 = 7;

/// Smallest day count a user may request
pub const MIN_LEARNING_DAYS: i64 = 1;

/// Largest day count a user may request
pub const MAX_LEARNING_DAYS: i64 = 30;

/// Topics assigned to one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan<T = String> {
    /// 1-based day index
    pub day: usize,
    /// Topics for this day, in input order
    pub topics: Vec<T>,
}

/// Partition items into at most `day_count` consecutive day-plans
///
/// Each day receives `ceil(len / day_count)` items except the last non-empty
/// one, which takes the remainder. Days that would be empty are omitted, so
/// fewer plans than `day_count` may come back.
///
/// Returns an empty schedule when `day_count <= 0` or `items` is empty.
#[must_use]
pub fn partition_by_day<T: Clone>(items: &[T], day_count: i64) -> Vec<DayPlan<T>> {
    if day_count <= 0 || items.is_empty() {
        return Vec::new();
    }

    let days = usize::try_from(day_count).unwrap_or(usize::MAX);
    let per_day = items.len().div_ceil(days);

    items
        .chunks(per_day)
        .take(days)
        .enumerate()
        .map(|(index, topics)| DayPlan {
            day: index + 1,
            topics: topics.to_vec(),
        })
        .collect()
}

/// Clamp a requested day count into the accepted range
#[inline]
#[must_use]
pub fn clamp_learning_days(days: i64) -> i64 {
    days.clamp(MIN_LEARNING_DAYS, MAX_LEARNING_DAYS)
}

/// Topics a learner would study for the given map
///
/// Falls back to [`DEFAULT_TOPICS`] when there is no map.
#[must_use]
pub fn learning_topics(mind_map: Option<&MindMap>) -> Vec<String> {
    match mind_map {
        Some(map) => map.flatten(),
        None => DEFAULT_TOPICS.iter().map(|t| (*t).to_owned()).collect(),
    }
}

/// Build a learning schedule for a mind map (or the default topics)
#[must_use]
pub fn learning_schedule(mind_map: Option<&MindMap>, day_count: i64) -> Vec<DayPlan> {
    let topics = learning_topics(mind_map);
    let schedule = partition_by_day(&topics, day_count);
    tracing::debug!(
        "Scheduled {} topics over {} of {} days",
        topics.len(),
        schedule.len(),
        day_count
    );
    schedule
}
