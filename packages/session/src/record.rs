//! Attempt records and running statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shotrecall_algo::{AdjustDirection, AttemptScore, Direction, Severity, Side};

/// One scored recall attempt, appended to the session history and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub item_index: usize,
    pub side: Side,
    pub input: i32,
    pub truth: i32,
    pub delta: i32,
    pub severity: Severity,
    pub label: Direction,
    pub base_points: i32,
    pub penalty: i32,
    pub points: i32,
    pub adjust_required: bool,
    pub required_direction: Option<AdjustDirection>,
    pub adjust_correct: Option<bool>,
    pub previous_input: Option<i32>,
    pub previous_delta: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub(crate) fn from_score(
        item_index: usize,
        side: Side,
        input: i32,
        truth: i32,
        score: &AttemptScore,
        previous: Option<(i32, i32)>,
    ) -> Self {
        Self {
            item_index,
            side,
            input,
            truth,
            delta: score.delta,
            severity: score.severity,
            label: score.label,
            base_points: score.base_points,
            penalty: score.penalty,
            points: score.points,
            adjust_required: score.adjust_required,
            required_direction: score.required_direction,
            adjust_correct: score.adjust_correct,
            previous_input: previous.map(|(input, _)| input),
            previous_delta: previous.map(|(_, delta)| delta),
            created_at: Utc::now(),
        }
    }
}

/// Running aggregates over the attempt history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_attempts: i32,
    pub total_points: i64,
    pub mean_abs_error: f64,
    pub perfect_count: i32,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            total_attempts: 0,
            total_points: 0,
            mean_abs_error: 0.0,
            perfect_count: 0,
        }
    }
}

impl SessionStats {
    pub(crate) fn absorb(&mut self, record: &AttemptRecord) {
        let abs_error = record.delta.abs();
        let prior = self.mean_abs_error * self.total_attempts as f64;
        self.total_attempts += 1;
        self.total_points += record.points as i64;
        self.mean_abs_error = (prior + abs_error as f64) / self.total_attempts as f64;
        if abs_error == 0 {
            self.perfect_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(delta: i32, points: i32) -> AttemptRecord {
        AttemptRecord {
            item_index: 0,
            side: Side::Left,
            input: 50 + delta,
            truth: 50,
            delta,
            severity: Severity::from_abs_error(delta.abs()),
            label: Direction::Perfect,
            base_points: points,
            penalty: 0,
            points,
            adjust_required: false,
            required_direction: None,
            adjust_correct: None,
            previous_input: None,
            previous_delta: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_absorb() {
        let mut stats = SessionStats::default();
        stats.absorb(&record(0, 100));
        stats.absorb(&record(10, 90));

        assert_eq!(stats.total_attempts, 2);
        assert_eq!(stats.total_points, 190);
        assert!((stats.mean_abs_error - 5.0).abs() < 1e-9);
        assert_eq!(stats.perfect_count, 1);
    }

    #[test]
    fn test_record_serde_camel_case() {
        let json = serde_json::to_value(record(5, 95)).unwrap();
        assert!(json.get("itemIndex").is_some());
        assert!(json.get("basePoints").is_some());
        assert!(json.get("adjustRequired").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
