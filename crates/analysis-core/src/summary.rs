//! Headline counts over the filtered event set.

use std::collections::BTreeMap;

use rinkview_model::event::GameEvent;
use rinkview_model::taxonomy::EventTypeGroup;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_events: usize,
    pub goals: usize,
    pub shots: usize,
    /// Events whose type mentions "penalty".
    pub penalties: usize,
    /// Goals as a percentage of shot attempts (`shots + goals`), 0 with no
    /// attempts.
    pub shot_accuracy_pct: f64,
    pub by_group: BTreeMap<EventTypeGroup, usize>,
}

impl SummaryStats {
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a GameEvent>,
    {
        let mut stats = SummaryStats::default();
        for event in events {
            let kind = event.normalized_type();
            stats.total_events += 1;
            match kind.as_str() {
                "goal" => stats.goals += 1,
                "shot" => stats.shots += 1,
                _ => {}
            }
            if kind.contains("penalty") {
                stats.penalties += 1;
            }
            *stats
                .by_group
                .entry(EventTypeGroup::classify(&kind))
                .or_insert(0) += 1;
        }

        let attempts = stats.shots + stats.goals;
        if attempts > 0 {
            stats.shot_accuracy_pct = stats.goals as f64 / attempts as f64 * 100.0;
        }
        stats
    }

    pub fn group_count(&self, group: EventTypeGroup) -> usize {
        self.by_group.get(&group).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: u64, kind: &str) -> GameEvent {
        serde_json::from_value(serde_json::json!({
            "id": id, "period": 1, "clock": "10:00", "team": "Canada",
            "player": "A", "event": kind
        }))
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let events = vec![
            event(1, "Shot"),
            event(2, "shot"),
            event(3, "Shot"),
            event(4, "Goal"),
            event(5, "Penalty Taken"),
            event(6, "Zone Entry"),
            event(7, "Dump In/Out"),
        ];
        let stats = SummaryStats::from_events(&events);
        assert_eq!(stats.total_events, 7);
        assert_eq!(stats.shots, 3);
        assert_eq!(stats.goals, 1);
        assert_eq!(stats.penalties, 1);
        assert_eq!(stats.shot_accuracy_pct, 25.0);
        assert_eq!(stats.group_count(EventTypeGroup::Scoring), 4);
        assert_eq!(stats.group_count(EventTypeGroup::Possession), 1);
        assert_eq!(stats.group_count(EventTypeGroup::FaceOff), 0);
    }

    #[test]
    fn test_empty_has_zero_accuracy() {
        let stats = SummaryStats::from_events(&[]);
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.shot_accuracy_pct, 0.0);
    }
}
