//! Match lifecycle: NotStarted → InProgress → Over.
//!
//! The only owner of `MatchState`. Every transition validates first and
//! mutates after, so a rejected call leaves the state untouched.

use tracing::info;

use penalty_core::enums::{AttemptOutcome, MatchPhase, MatchResult};
use penalty_core::state::MatchState;
use penalty_core::types::{Point, Rect, Zone};
use penalty_core::{PenaltyError, Result};

use crate::resolver;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchStateMachine {
    state: MatchState,
}

impl MatchStateMachine {
    pub fn new(max_attempts: u32) -> Result<Self> {
        if max_attempts == 0 {
            return Err(PenaltyError::ZeroAttempts);
        }
        Ok(Self {
            state: MatchState::new(max_attempts),
        })
    }

    pub fn status(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == MatchPhase::Over
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.state.result
    }

    /// Leave NotStarted.
    pub fn start(&mut self) -> Result<()> {
        self.expect_phase(MatchPhase::NotStarted)?;
        self.state.phase = MatchPhase::InProgress;
        info!(max_attempts = self.state.max_attempts, "match started");
        Ok(())
    }

    /// Back to NotStarted with zeroed counters, from any phase.
    pub fn reset(&mut self) {
        self.state = MatchState::new(self.state.max_attempts);
    }

    /// Classify the attempt and apply its score. Enters Over on the last
    /// attempt.
    pub fn resolve_attempt(
        &mut self,
        ball: Point,
        keeper: &Rect,
        zones: &[Zone],
    ) -> Result<AttemptOutcome> {
        self.expect_phase(MatchPhase::InProgress)?;
        if zones.is_empty() {
            return Err(PenaltyError::NoZones);
        }
        if !ball.is_finite() {
            return Err(PenaltyError::NonFiniteInput {
                what: "ball position",
            });
        }

        let outcome = resolver::resolve(ball, keeper, zones);
        self.record(outcome);
        Ok(outcome)
    }

    fn record(&mut self, outcome: AttemptOutcome) {
        let s = &mut self.state;
        s.attempts += 1;
        match outcome {
            AttemptOutcome::Goal => s.player_score += 1,
            AttemptOutcome::Save | AttemptOutcome::Miss => s.goalkeeper_score += 1,
        }

        if s.attempts >= s.max_attempts {
            let result = MatchResult::from_scores(s.player_score, s.goalkeeper_score);
            s.phase = MatchPhase::Over;
            s.is_over = true;
            s.result = Some(result);
            info!(
                player = s.player_score,
                keeper = s.goalkeeper_score,
                ?result,
                "match over"
            );
        }
    }

    fn expect_phase(&self, expected: MatchPhase) -> Result<()> {
        if self.state.phase == expected {
            Ok(())
        } else {
            Err(PenaltyError::WrongPhase {
                phase: self.state.phase,
                expected,
            })
        }
    }
}

/// Final status line for a finished match.
pub fn result_message(result: MatchResult) -> &'static str {
    match result {
        MatchResult::PlayerWin => "Game Over! You win!",
        MatchResult::KeeperWin => "Game Over! Goalkeeper wins!",
        MatchResult::Draw => "Game Over! It's a draw!",
    }
}
