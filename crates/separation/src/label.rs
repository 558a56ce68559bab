//! Flood-peak labelling sweep.
//!
//! Assigns an [`EventId`] to each contiguous run of positive peakflow.
//! Steps with undefined peakflow (unfilled gaps) inside an event are absorbed
//! into it. Gap steps that follow a zero step are held back until the next
//! defined value: a rise adopts them into the new event, a zero discards them.
//! A run made only of gap steps therefore never becomes an event.

use tracing::debug;

use crate::record::EventId;

/// Peakflow of a single step as seen by the labeller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Peakflow {
    /// A defined peakflow value (zero or positive).
    Real(f64),
    /// No value: the step falls in an unfilled data gap.
    Gap,
}

impl From<Option<f64>> for Peakflow {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Gap, Self::Real)
    }
}

/// Whether an event is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InEvent,
}

struct Labeller {
    counter: u32,
    state: State,
    /// Gap steps seen while idle, not yet owned by any event.
    pending: Vec<usize>,
    labels: Vec<Option<EventId>>,
}

impl Labeller {
    fn new(n: usize) -> Self {
        Self {
            counter: 0,
            state: State::Idle,
            pending: Vec::new(),
            labels: vec![None; n],
        }
    }

    fn open(&mut self) {
        self.counter += 1;
        self.state = State::InEvent;
        let id = Some(EventId::new(self.counter));
        for idx in self.pending.drain(..) {
            self.labels[idx] = id;
        }
    }

    fn drop_pending(&mut self) {
        if !self.pending.is_empty() {
            debug!(
                first_step = self.pending[0],
                n_steps = self.pending.len(),
                "discarding gap-only peak"
            );
            self.pending.clear();
        }
    }

    fn step(&mut self, idx: usize, peakflow: Peakflow) {
        match (peakflow, self.state) {
            (Peakflow::Real(p), state) if p > 0.0 => {
                if state == State::Idle {
                    self.open();
                }
                self.labels[idx] = Some(EventId::new(self.counter));
            }
            (Peakflow::Gap, State::InEvent) => {
                self.labels[idx] = Some(EventId::new(self.counter));
            }
            (Peakflow::Gap, State::Idle) => self.pending.push(idx),
            (Peakflow::Real(_), _) => {
                self.state = State::Idle;
                self.drop_pending();
            }
        }
    }
}

/// Labels every step with the event it belongs to, in one forward pass.
///
/// Event ids are consecutive from 1 in order of appearance. Every event
/// holds at least one step with positive peakflow; gap runs bounded by zero
/// steps or by either end of the series stay unassigned.
pub(crate) fn label_peaks(peakflow: &[Peakflow]) -> Vec<Option<EventId>> {
    let mut labeller = Labeller::new(peakflow.len());
    for (idx, &p) in peakflow.iter().enumerate() {
        labeller.step(idx, p);
    }
    labeller.drop_pending();
    labeller.labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use Peakflow::{Gap, Real};

    fn ids(labels: &[Option<EventId>]) -> Vec<u32> {
        labels.iter().map(|l| l.map_or(0, EventId::get)).collect()
    }

    #[test]
    fn no_peaks() {
        let labels = label_peaks(&[Real(0.0); 5]);
        assert!(labels.iter().all(Option::is_none));
    }

    #[test]
    fn two_events_numbered_in_order() {
        let p = [
            Real(0.0),
            Real(1.0),
            Real(2.0),
            Real(0.0),
            Real(0.0),
            Real(3.0),
            Real(0.0),
        ];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 1, 1, 0, 0, 2, 0]);
    }

    #[test]
    fn event_at_start_of_series() {
        let p = [Real(2.0), Real(1.0), Real(0.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![1, 1, 0]);
    }

    #[test]
    fn gap_inside_event_is_absorbed() {
        let p = [Real(0.0), Real(1.0), Gap, Real(1.0), Real(0.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 1, 1, 1, 0]);
    }

    #[test]
    fn long_gap_inside_event_is_kept() {
        let p = [Real(0.0), Real(1.0), Gap, Gap, Gap, Real(1.0), Real(0.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 1, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn gap_only_run_is_discarded() {
        let p = [
            Real(0.0),
            Gap,
            Gap,
            Gap,
            Real(0.0),
            Real(4.0),
            Real(0.0),
        ];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn gap_only_run_after_event_leaves_event_intact() {
        let p = [Real(2.0), Real(0.0), Gap, Gap, Real(0.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn single_gap_step_is_discarded() {
        let p = [Real(0.0), Gap, Real(0.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 0, 0]);
    }

    #[test]
    fn gap_between_events_keeps_numbering_consecutive() {
        let p = [Real(1.0), Real(0.0), Gap, Real(0.0), Real(2.0), Real(0.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![1, 0, 0, 0, 2, 0]);
    }

    #[test]
    fn trailing_gap_inside_open_event_is_kept() {
        let p = [Real(0.0), Real(1.0), Gap, Gap];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 1, 1, 1]);
    }

    #[test]
    fn gap_then_rise_is_one_event() {
        let p = [Real(0.0), Gap, Gap, Real(5.0), Real(0.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 1, 1, 1, 0]);
    }

    #[test]
    fn trailing_gap_run_is_discarded() {
        let p = [Real(0.0), Real(1.0), Real(0.0), Gap, Gap];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 1, 0, 0, 0]);
    }

    #[test]
    fn leading_gap_run_is_discarded() {
        let p = [Gap, Gap, Real(0.0), Real(1.0)];
        assert_eq!(ids(&label_peaks(&p)), vec![0, 0, 0, 1]);
    }
}
