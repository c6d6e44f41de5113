//! Timeline merge
//!
//! Folds incidents and maintenances into a single newest-first sequence.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::entities::Event;

/// Comparator placing later timestamps first; equal timestamps compare equal
pub fn latest_to_oldest(a: &DateTime<Utc>, b: &DateTime<Utc>) -> Ordering {
    b.cmp(a)
}

/// Concatenate incidents then maintenances and sort newest-first.
///
/// The sort is stable, so events sharing a creation time keep their
/// pre-merge relative order.
pub fn merge_timeline(incidents: Vec<Event>, maintenances: Vec<Event>) -> Vec<Event> {
    let mut events = incidents;
    events.extend(maintenances);
    events.sort_by(|a, b| latest_to_oldest(&a.created_at, &b.created_at));
    events
}
