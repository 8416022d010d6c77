//! Session state aggregate.
//!
//! `SessionState` is the one owner of all mutable training-run state. Every
//! mutation goes through `&mut self`, so a submission runs its whole
//! pipeline (validate, score, record, maybe drift) before anything else can
//! observe the state. Drift is applied to both sides inside the same call,
//! never between them.

use tracing::{debug, info};

use shotrecall_algo::truth::order_for_side;
use shotrecall_algo::{
    score, snap, DriftEngine, PreviousAttempt, Side, TruthGenerator, GRID_STEP, SENTINEL,
};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::record::{AttemptRecord, SessionStats};
use crate::shot::Shot;

pub struct SessionState {
    config: SessionConfig,
    shots: Vec<Shot>,
    /// Frozen base anchors per side, sanitized onto the grid at start
    left_anchors: Vec<i32>,
    right_anchors: Vec<i32>,
    /// Per-side order permutations, frozen at start
    left_order: Vec<usize>,
    right_order: Vec<usize>,
    /// Current hidden truth per side
    left_hidden: Vec<i32>,
    right_hidden: Vec<i32>,
    drift_engine: DriftEngine,
    attempt_counter: u32,
    history: Vec<AttemptRecord>,
    stats: SessionStats,
}

impl SessionState {
    /// Start a session: freeze anchors, capture both order permutations,
    /// and commit the hidden truth for each side.
    pub fn start(shots: Vec<Shot>, config: SessionConfig) -> Result<Self, SessionError> {
        if shots.is_empty() {
            return Err(SessionError::Validation(
                "session needs at least one shot".into(),
            ));
        }
        let config = config.normalized();

        let left_anchors: Vec<i32> = shots.iter().map(|s| snap(s.left_anchor)).collect();
        let right_anchors: Vec<i32> = shots.iter().map(|s| snap(s.right_anchor)).collect();
        let left_order = order_for_side(&left_anchors, Side::Left);
        let right_order = order_for_side(&right_anchors, Side::Right);

        let (mut generator, drift_engine) = match config.seed {
            Some(seed) => (
                TruthGenerator::with_seed(seed),
                DriftEngine::with_seed(seed.wrapping_add(1)),
            ),
            None => (TruthGenerator::new(), DriftEngine::new()),
        };

        let budget = config.initial_step_budget;
        let left_hidden = generator.generate(&left_anchors, &left_order, Side::Left, budget);
        let right_hidden = generator.generate(&right_anchors, &right_order, Side::Right, budget);

        info!(
            shots = shots.len(),
            budget,
            cadence = config.drift_cadence,
            "session started"
        );

        Ok(Self {
            config,
            shots,
            left_anchors,
            right_anchors,
            left_order,
            right_order,
            left_hidden,
            right_hidden,
            drift_engine,
            attempt_counter: 0,
            history: Vec::new(),
            stats: SessionStats::default(),
        })
    }

    /// Score one recall attempt and append it to the history. Triggers a
    /// drift cycle on both sides when the attempt counter hits the cadence.
    pub fn submit(
        &mut self,
        item_index: usize,
        side: Side,
        value: i32,
    ) -> Result<AttemptRecord, SessionError> {
        if item_index >= self.shots.len() {
            return Err(SessionError::UnknownShot(item_index));
        }
        if !(0..=100).contains(&value) || value % GRID_STEP != 0 {
            return Err(SessionError::Validation(format!(
                "guess must be a multiple of {GRID_STEP} in 0..=100, got {value}"
            )));
        }
        if self.anchors(side)[item_index] == SENTINEL {
            return Err(SessionError::Validation(format!(
                "shot {item_index} is not reachable from the {} side",
                side.as_str()
            )));
        }

        let truth = self.hidden(side)[item_index];
        let previous = self
            .history
            .iter()
            .rev()
            .find(|r| r.item_index == item_index && r.side == side)
            .map(|r| PreviousAttempt {
                input: r.input,
                delta: r.delta,
            });

        let result = score(value, truth, previous);
        let record = AttemptRecord::from_score(
            item_index,
            side,
            value,
            truth,
            &result,
            previous.map(|p| (p.input, p.delta)),
        );
        self.stats.absorb(&record);
        self.history.push(record.clone());
        self.attempt_counter += 1;

        debug!(
            item_index,
            side = side.as_str(),
            value,
            points = record.points,
            "attempt scored"
        );

        let cadence = self.config.drift_cadence;
        if cadence > 0 && self.attempt_counter % cadence == 0 {
            self.apply_drift();
        }

        Ok(record)
    }

    /// Drift both sides in one atomic step.
    fn apply_drift(&mut self) {
        let steps = self.config.drift_steps();
        self.left_hidden = self.drift_engine.drift(
            &self.left_hidden,
            &self.left_anchors,
            &self.left_order,
            Side::Left,
            steps,
        );
        self.right_hidden = self.drift_engine.drift(
            &self.right_hidden,
            &self.right_anchors,
            &self.right_order,
            Side::Right,
            steps,
        );
        debug!(
            attempt = self.attempt_counter,
            steps, "drift cycle applied"
        );
    }

    /// Current hidden truth for one side (debug view; hidden during play).
    pub fn reveal(&self, side: Side) -> &[i32] {
        self.hidden(side)
    }

    /// Frozen base anchors for one side.
    pub fn base(&self, side: Side) -> &[i32] {
        self.anchors(side)
    }

    /// Frozen order permutation for one side.
    pub fn order(&self, side: Side) -> &[usize] {
        match side {
            Side::Left => &self.left_order,
            Side::Right => &self.right_order,
        }
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn anchors(&self, side: Side) -> &[i32] {
        match side {
            Side::Left => &self.left_anchors,
            Side::Right => &self.right_anchors,
        }
    }

    fn hidden(&self, side: Side) -> &[i32] {
        match side {
            Side::Left => &self.left_hidden,
            Side::Right => &self.right_hidden,
        }
    }
}
