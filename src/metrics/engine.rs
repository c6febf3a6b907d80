//! Metrics Engine - per-play efficiency from an event snapshot
//!
//! Pure and deterministic: the same snapshot always yields the same ordered
//! table. Unknown results contribute zero points and are left out of the
//! shot-success denominator.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{PlayMetric, PlayerMetric, SessionTotals, ShotResult, TaggedEvent};

/// Running sums for one group of events
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    attempts: u32,
    points: u32,
    shot_attempts: u32,
    made_shots: u32,
}

impl Tally {
    fn add(&mut self, event: &TaggedEvent) {
        self.attempts += 1;
        self.points += event.points;
        if event.result.is_shot() {
            self.shot_attempts += 1;
            if event.result.is_make() {
                self.made_shots += 1;
            }
        }
    }

    fn points_per_attempt(&self) -> f64 {
        ratio(self.points, self.attempts)
    }

    fn success_rate(&self) -> f64 {
        ratio(self.made_shots, self.shot_attempts)
    }
}

/// `num / den`, or 0.0 when `den` is zero
fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Group events by key, keeping groups in first-seen order
fn tally_by<'a, K, F>(events: &'a [TaggedEvent], key: F) -> Vec<(K, Tally)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a TaggedEvent) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Tally)> = Vec::new();

    for event in events {
        let k = key(event);
        let slot = *index.entry(k.clone()).or_insert_with(|| {
            groups.push((k, Tally::default()));
            groups.len() - 1
        });
        groups[slot].1.add(event);
    }

    groups
}

/// Descending by PPP, then by attempts. Used with a stable sort so equal
/// rows keep first-seen order.
fn efficiency_order(a: &Tally, b: &Tally) -> Ordering {
    b.points_per_attempt()
        .total_cmp(&a.points_per_attempt())
        .then_with(|| b.attempts.cmp(&a.attempts))
}

/// Stateless aggregation over tagged events
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    /// Per-play metrics table, most efficient play first
    pub fn compute(events: &[TaggedEvent]) -> Vec<PlayMetric> {
        if events.is_empty() {
            return Vec::new();
        }

        let mut groups = tally_by(events, |e| e.play.as_str());
        let total: u32 = groups.iter().map(|(_, t)| t.attempts).sum();
        if total == 0 {
            return Vec::new();
        }

        groups.sort_by(|(_, a), (_, b)| efficiency_order(a, b));

        groups
            .into_iter()
            .map(|(play, tally)| PlayMetric {
                play: play.to_string(),
                attempts: tally.attempts,
                points: tally.points,
                points_per_attempt: tally.points_per_attempt(),
                frequency: ratio(tally.attempts, total),
                success_rate: tally.success_rate(),
            })
            .collect()
    }

    /// Per-player metrics table with the same ordering rules
    ///
    /// Events tagged without a player are grouped under `player: None`.
    pub fn compute_by_player(events: &[TaggedEvent]) -> Vec<PlayerMetric> {
        if events.is_empty() {
            return Vec::new();
        }

        let mut groups = tally_by(events, |e| e.player.as_deref());
        let total: u32 = groups.iter().map(|(_, t)| t.attempts).sum();

        groups.sort_by(|(_, a), (_, b)| efficiency_order(a, b));

        groups
            .into_iter()
            .map(|(player, tally)| PlayerMetric {
                player: player.map(str::to_string),
                attempts: tally.attempts,
                points: tally.points,
                points_per_attempt: tally.points_per_attempt(),
                frequency: ratio(tally.attempts, total),
                success_rate: tally.success_rate(),
            })
            .collect()
    }

    /// Whole-log summary
    pub fn totals(events: &[TaggedEvent]) -> SessionTotals {
        let mut tally = Tally::default();
        let mut fouls = 0;

        for event in events {
            tally.add(event);
            if event.result == ShotResult::Foul {
                fouls += 1;
            }
        }

        SessionTotals {
            events: tally.attempts,
            points: tally.points,
            points_per_attempt: tally.points_per_attempt(),
            shot_attempts: tally.shot_attempts,
            made_shots: tally.made_shots,
            fouls,
            success_rate: tally.success_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::EventLog;
    use crate::types::{Quarter, SessionContext};
    use chrono::NaiveDate;

    fn context() -> SessionContext {
        SessionContext::new(
            "Saint Mary's".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            Quarter::First,
        )
    }

    fn log_of(entries: &[(&str, ShotResult)]) -> EventLog {
        let mut log = EventLog::new();
        for (play, result) in entries {
            log.append(&context(), None, *play, *result, None);
        }
        log
    }

    #[test]
    fn test_compute_empty() {
        assert!(MetricsEngine::compute(&[]).is_empty());
        assert!(MetricsEngine::compute_by_player(&[]).is_empty());
    }

    #[test]
    fn test_pick_and_roll_scenario() {
        let log = log_of(&[
            ("PickAndRoll", ShotResult::Made2),
            ("PickAndRoll", ShotResult::Missed3),
            ("Isolation", ShotResult::Foul),
        ]);

        let metrics = MetricsEngine::compute(log.events());
        assert_eq!(metrics.len(), 2);

        let pnr = &metrics[0];
        assert_eq!(pnr.play, "PickAndRoll");
        assert_eq!(pnr.attempts, 2);
        assert_eq!(pnr.points, 2);
        assert_eq!(pnr.points_per_attempt, 1.0);
        assert_eq!(pnr.frequency, 2.0 / 3.0);
        assert_eq!(pnr.success_rate, 0.5);

        let iso = &metrics[1];
        assert_eq!(iso.play, "Isolation");
        assert_eq!(iso.attempts, 1);
        assert_eq!(iso.points, 0);
        assert_eq!(iso.points_per_attempt, 0.0);
        assert_eq!(iso.frequency, 1.0 / 3.0);
        assert_eq!(iso.success_rate, 0.0);
    }

    #[test]
    fn test_foul_only_play_is_not_nan() {
        let log = log_of(&[("Post Up", ShotResult::Foul), ("Post Up", ShotResult::Foul)]);

        let metrics = MetricsEngine::compute(log.events());
        assert_eq!(metrics[0].attempts, 2);
        assert_eq!(metrics[0].points_per_attempt, 0.0);
        assert_eq!(metrics[0].success_rate, 0.0);
        assert!(!metrics[0].success_rate.is_nan());
        assert_eq!(metrics[0].frequency, 1.0);
    }

    #[test]
    fn test_frequency_counts_fouls() {
        let log = log_of(&[
            ("Horns", ShotResult::Made2),
            ("Horns", ShotResult::Foul),
            ("Flex", ShotResult::Foul),
            ("Flex", ShotResult::Foul),
        ]);

        let metrics = MetricsEngine::compute(log.events());
        assert!(metrics.iter().all(|m| m.frequency == 0.5));
        // fouls are excluded from success rate only
        assert_eq!(metrics[0].play, "Horns");
        assert_eq!(metrics[0].success_rate, 1.0);
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let log = log_of(&[("horns", ShotResult::Made2), ("Horns", ShotResult::Made2)]);
        assert_eq!(MetricsEngine::compute(log.events()).len(), 2);
    }

    #[test]
    fn test_sort_ties_by_attempts_then_first_seen() {
        let log = log_of(&[
            ("Zipper", ShotResult::Made2),
            ("Floppy", ShotResult::Made2),
            ("Chin", ShotResult::Made2),
            ("Chin", ShotResult::Made2),
            ("Elbow", ShotResult::Made3),
        ]);

        let order: Vec<String> = MetricsEngine::compute(log.events())
            .into_iter()
            .map(|m| m.play)
            .collect();

        // Elbow has the best PPP; Chin ties at 2.0 but has more attempts;
        // Zipper and Floppy tie fully and keep first-seen order
        assert_eq!(order, vec!["Elbow", "Chin", "Zipper", "Floppy"]);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let log = log_of(&[
            ("A", ShotResult::Made2),
            ("B", ShotResult::Missed2),
            ("C", ShotResult::Made2),
            ("B", ShotResult::Made2),
        ]);

        let snapshot = log.snapshot();
        assert_eq!(
            MetricsEngine::compute(&snapshot),
            MetricsEngine::compute(&snapshot)
        );
    }

    #[test]
    fn test_unknown_result_degrades_to_zero_point_path() {
        let mut log = log_of(&[("Horns", ShotResult::Made3)]);
        log.append(&context(), None, "Horns", ShotResult::Unrecognized, None);

        let metrics = MetricsEngine::compute(log.events());
        assert_eq!(metrics[0].attempts, 2);
        assert_eq!(metrics[0].points, 3);
        assert_eq!(metrics[0].points_per_attempt, 1.5);
        assert_eq!(metrics[0].success_rate, 1.0);
    }

    #[test]
    fn test_attempts_sum_to_log_length() {
        let log = log_of(&[
            ("A", ShotResult::Made2),
            ("B", ShotResult::Missed3),
            ("A", ShotResult::Foul),
            ("C", ShotResult::Made3),
            ("B", ShotResult::Missed2),
        ]);

        let metrics = MetricsEngine::compute(log.events());
        let attempts: u32 = metrics.iter().map(|m| m.attempts).sum();
        assert_eq!(attempts as usize, log.len());

        for metric in &metrics {
            let expected: u32 = log
                .events()
                .iter()
                .filter(|e| e.play == metric.play)
                .map(|e| e.result.points())
                .sum();
            assert_eq!(metric.points, expected);
        }
    }

    #[test]
    fn test_compute_by_player() {
        let mut log = EventLog::new();
        log.append(&context(), Some("Ava".to_string()), "Horns", ShotResult::Made3, None);
        log.append(&context(), Some("Ben".to_string()), "Horns", ShotResult::Missed2, None);
        log.append(&context(), None, "Flex", ShotResult::Made2, None);

        let by_player = MetricsEngine::compute_by_player(log.events());
        assert_eq!(by_player.len(), 3);
        assert_eq!(by_player[0].player.as_deref(), Some("Ava"));
        assert_eq!(by_player[1].player, None);
        assert_eq!(by_player[2].player.as_deref(), Some("Ben"));
        assert_eq!(by_player[2].success_rate, 0.0);
    }

    #[test]
    fn test_totals() {
        let log = log_of(&[
            ("A", ShotResult::Made2),
            ("A", ShotResult::Missed3),
            ("B", ShotResult::Foul),
            ("B", ShotResult::Made3),
        ]);

        let totals = MetricsEngine::totals(log.events());
        assert_eq!(totals.events, 4);
        assert_eq!(totals.points, 5);
        assert_eq!(totals.points_per_attempt, 1.25);
        assert_eq!(totals.shot_attempts, 3);
        assert_eq!(totals.made_shots, 2);
        assert_eq!(totals.fouls, 1);
        assert_eq!(totals.success_rate, 2.0 / 3.0);
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(MetricsEngine::totals(&[]), SessionTotals::default());
    }
}
