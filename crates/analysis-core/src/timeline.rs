//! Game timeline: period clocks folded into absolute game seconds.
//!
//! # Algorithm
//!
//! 1. **Parse** each event's `MM:SS` clock (time remaining) into seconds.
//! 2. **Fold** period and remaining time into `absolute_time =
//!    (period - 1) * 1200 + (1200 - remaining)`.
//! 3. **Skip** events whose clock cannot be read, logging them; the rest of
//!    the batch is unaffected.
//! 4. **Sort** by absolute time, ties kept in source order.
//!
//! Queries against the built timeline are read-only; a new filter or event
//! list means building a new timeline.

use rinkview_common::clock::{period_label, PERIOD_LENGTH_SECS};
use rinkview_common::error::ClockParseError;
use rinkview_common::parse_clock;
use rinkview_model::event::GameEvent;
use serde::Serialize;

/// Timeline length reported when no events are present.
pub const EMPTY_MAX_TIME_SECS: u32 = 60;

/// Convert a period number and `MM:SS` remaining-time clock into absolute
/// game seconds.
pub fn to_absolute_time(period: u32, clock: &str) -> Result<u32, ClockParseError> {
    if period == 0 {
        return Err(ClockParseError::InvalidPeriod { period });
    }

    let remaining = parse_clock(clock)?;
    if remaining > PERIOD_LENGTH_SECS {
        return Err(ClockParseError::ExceedsPeriod {
            clock: clock.to_string(),
            period_secs: PERIOD_LENGTH_SECS,
        });
    }

    let elapsed_in_period = PERIOD_LENGTH_SECS - remaining;
    (period - 1)
        .checked_mul(PERIOD_LENGTH_SECS)
        .and_then(|start| start.checked_add(elapsed_in_period))
        .ok_or(ClockParseError::InvalidPeriod { period })
}

/// An event placed on the game timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    #[serde(flatten)]
    pub event: GameEvent,

    /// Seconds since the start of the game.
    pub absolute_time: u32,

    /// Position of the event in the input list.
    pub source_index: usize,
}

impl TimelineEvent {
    pub fn id(&self) -> u64 {
        self.event.id
    }

    pub fn period(&self) -> u32 {
        self.event.period
    }

    fn distance_to(&self, t: u32) -> f64 {
        (f64::from(self.absolute_time) - f64::from(t)).abs()
    }
}

/// An event left off the timeline because its clock could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEvent {
    pub event_id: u64,
    pub error: ClockParseError,
}

/// A period-boundary marker for the scrub bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodMarker {
    /// Timeline value of the last event before the period changed.
    pub time: u32,
    /// Label of the period that ends at this marker.
    pub label: String,
}

/// Events ordered by absolute game time.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
    skipped: Vec<SkippedEvent>,
}

impl Timeline {
    /// Build a timeline from events in source order.
    pub fn build<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a GameEvent>,
    {
        let mut placed = Vec::new();
        let mut skipped = Vec::new();

        for (source_index, event) in events.into_iter().enumerate() {
            match to_absolute_time(event.period, &event.clock) {
                Ok(absolute_time) => placed.push(TimelineEvent {
                    event: event.clone(),
                    absolute_time,
                    source_index,
                }),
                Err(error) => {
                    tracing::warn!(
                        event_id = event.id,
                        period = event.period,
                        clock = %event.clock,
                        %error,
                        "Skipping event with unreadable clock"
                    );
                    skipped.push(SkippedEvent {
                        event_id: event.id,
                        error,
                    });
                }
            }
        }

        // Stable: equal times stay in source order.
        placed.sort_by_key(|e| e.absolute_time);

        tracing::debug!(
            placed = placed.len(),
            skipped = skipped.len(),
            "Timeline built"
        );

        Self {
            events: placed,
            skipped,
        }
    }

    /// Timeline events in time order.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Events that were left off the timeline.
    pub fn skipped(&self) -> &[SkippedEvent] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Latest absolute time, or [`EMPTY_MAX_TIME_SECS`] when empty.
    pub fn max_time(&self) -> u32 {
        self.max_time_or(EMPTY_MAX_TIME_SECS)
    }

    /// Latest absolute time, or `fallback` when empty.
    pub fn max_time_or(&self, fallback: u32) -> u32 {
        self.events
            .iter()
            .map(|e| e.absolute_time)
            .max()
            .unwrap_or(fallback)
    }

    /// Fraction of the timeline covered at `t`, in `[0, 1]`, with `fallback`
    /// as the length of an empty timeline.
    pub fn proportional_position(&self, t: u32, fallback: u32) -> f64 {
        let max = self.max_time_or(fallback).max(1);
        (f64::from(t) / f64::from(max)).clamp(0.0, 1.0)
    }

    /// Timeline values at which the period changes, plus the final event's
    /// time.
    pub fn period_boundaries(&self) -> Vec<u32> {
        self.closed_periods().into_iter().map(|(time, _)| time).collect()
    }

    /// Boundaries paired with the label of the period each one closes.
    pub fn period_markers(&self) -> Vec<PeriodMarker> {
        self.closed_periods()
            .into_iter()
            .map(|(time, period)| PeriodMarker {
                time,
                label: period_label(period),
            })
            .collect()
    }

    /// `(time, period)` for every period that ends on the timeline.
    ///
    /// Walking in time order from the first event's period, each change of
    /// period records the time of the last event seen before it.
    fn closed_periods(&self) -> Vec<(u32, u32)> {
        let (Some(first), Some(last)) = (self.events.first(), self.events.last()) else {
            return Vec::new();
        };

        let mut closed = Vec::new();
        let mut current_period = first.period();
        let mut last_time = first.absolute_time;
        for event in &self.events {
            if event.period() != current_period {
                closed.push((last_time, current_period));
                current_period = event.period();
            }
            last_time = event.absolute_time;
        }
        closed.push((last.absolute_time, current_period));
        closed
    }

    /// Events with `|absolute_time - t| < epsilon`, in time order.
    pub fn active_events(&self, t: u32, epsilon: f64) -> Vec<&TimelineEvent> {
        self.events
            .iter()
            .filter(|e| e.distance_to(t) < epsilon)
            .collect()
    }

    /// The single closest event strictly inside `window` seconds of `t`.
    ///
    /// Equal distances resolve to the earlier event in source order.
    pub fn nearest_event(&self, t: u32, window: f64) -> Option<&TimelineEvent> {
        self.events
            .iter()
            .filter(|e| e.distance_to(t) < window)
            .min_by(|a, b| {
                a.distance_to(t)
                    .total_cmp(&b.distance_to(t))
                    .then(a.source_index.cmp(&b.source_index))
            })
    }

    /// Latest event strictly before `t`; `None` at the start of the timeline.
    pub fn previous_event(&self, t: u32) -> Option<&TimelineEvent> {
        let end = self.events.partition_point(|e| e.absolute_time < t);
        let latest = self.events[..end].last()?.absolute_time;
        let first_at_latest = self.events[..end].partition_point(|e| e.absolute_time < latest);
        self.events.get(first_at_latest)
    }

    /// Earliest event strictly after `t`; `None` at the end of the timeline.
    pub fn next_event(&self, t: u32) -> Option<&TimelineEvent> {
        let start = self.events.partition_point(|e| e.absolute_time <= t);
        self.events.get(start)
    }
}
