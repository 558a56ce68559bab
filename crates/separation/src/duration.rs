//! Minimum-duration filter applied after labelling.

use std::collections::BTreeMap;

use tracing::debug;

use crate::record::EventId;

/// Total hours per event: the sum of the step deltas of its member steps.
pub(crate) fn event_durations(labels: &[Option<EventId>], step_hours: &[f64]) -> BTreeMap<EventId, f64> {
    let mut durations = BTreeMap::new();
    for (label, &dt) in labels.iter().zip(step_hours) {
        if let Some(id) = label {
            *durations.entry(*id).or_insert(0.0) += dt;
        }
    }
    durations
}

/// Unassigns every event whose total duration is below `min_hours`.
///
/// Returns the ids that were removed. Surviving ids are not renumbered.
pub(crate) fn drop_short_events(
    labels: &mut [Option<EventId>],
    step_hours: &[f64],
    min_hours: f64,
) -> Vec<EventId> {
    let short: Vec<EventId> = event_durations(labels, step_hours)
        .into_iter()
        .filter(|&(id, hours)| {
            let drop = hours < min_hours;
            if drop {
                debug!(event = %id, hours, min_hours, "dropping short peak");
            }
            drop
        })
        .map(|(id, _)| id)
        .collect();

    if !short.is_empty() {
        for label in labels.iter_mut() {
            if label.is_some_and(|id| short.binary_search(&id).is_ok()) {
                *label = None;
            }
        }
    }
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn labels(ids: &[u32]) -> Vec<Option<EventId>> {
        ids.iter()
            .map(|&i| (i > 0).then(|| EventId::new(i)))
            .collect()
    }

    #[test]
    fn durations_sum_step_hours() {
        let l = labels(&[1, 1, 0, 2, 2, 2]);
        let dt = [0.0, 1.0, 1.0, 1.0, 0.5, 0.5];
        let d = event_durations(&l, &dt);
        assert_relative_eq!(d[&EventId::new(1)], 1.0);
        assert_relative_eq!(d[&EventId::new(2)], 2.0);
    }

    #[test]
    fn short_events_are_unassigned() {
        let mut l = labels(&[0, 1, 1, 0, 2, 2, 2, 2, 0]);
        let dt = [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let removed = drop_short_events(&mut l, &dt, 3.0);
        assert_eq!(removed, vec![EventId::new(1)]);
        assert_eq!(l, labels(&[0, 0, 0, 0, 2, 2, 2, 2, 0]));
    }

    #[test]
    fn duration_equal_to_minimum_is_kept() {
        let mut l = labels(&[1, 1, 1]);
        let removed = drop_short_events(&mut l, &[1.0, 1.0, 1.0], 3.0);
        assert!(removed.is_empty());
        assert!(l.iter().all(Option::is_some));
    }
}
