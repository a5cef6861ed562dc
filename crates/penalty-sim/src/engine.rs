//! Simulation engine: the render loop's single owner of per-frame state.
//!
//! `SimulationEngine` processes queued player commands, advances the ball
//! and keeper animations against the injected clock, resolves attempts, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use penalty_core::commands::PlayerCommand;
use penalty_core::config::GameConfig;
use penalty_core::constants::{BALL_DRAG_EASING, BALL_GRAB_RADIUS_FACTOR};
use penalty_core::enums::{AttemptOutcome, Difficulty, MatchPhase};
use penalty_core::events::{GameEvent, Message};
use penalty_core::state::{GameStateSnapshot, KeeperView, MatchState};
use penalty_core::types::{GoalkeeperDecision, Point, Rect, ShotParameters, SimTime};
use penalty_core::{PenaltyError, Result};
use penalty_keeper::profiles::KeeperProfile;
use penalty_keeper::{decide, KeeperContext, RandomSource};
use penalty_pitch::flight::plan_ball_flight_with;
use penalty_pitch::shot::{clamp_pointer, from_drag_points};
use penalty_pitch::PitchLayout;

use crate::animation::{BallFlight, KeeperDive};
use crate::clock::{Clock, ManualClock, SystemClock};
use crate::cooldown::Cooldown;
use crate::match_state::{result_message, MatchStateMachine};
use crate::resolver::outcome_message;
use crate::snapshot::{self, DragState};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the match and all per-shot state.
pub struct SimulationEngine<C: Clock = SystemClock, R: RandomSource = ChaCha8Rng> {
    config: GameConfig,
    layout: PitchLayout,
    clock: C,
    rng: R,
    time: SimTime,
    difficulty: Difficulty,
    keeper: KeeperProfile,
    match_sm: MatchStateMachine,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    messages: Vec<Message>,

    // --- Current shot ---
    can_shoot: bool,
    ball: Point,
    drag: Option<DragState>,
    flight: Option<BallFlight>,
    /// Finished flight, kept for the ball's resting scale.
    landed: Option<BallFlight>,
    dive: Option<KeeperDive>,
    keeper_rect: Rect,
    decision: Option<GoalkeeperDecision>,
    last_outcome: Option<AttemptOutcome>,
    cooldown: Cooldown,
}

impl SimulationEngine<SystemClock, ChaCha8Rng> {
    /// Engine on the wall clock with a seeded RNG.
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::with_parts(
            config.game,
            SystemClock::new(),
            ChaCha8Rng::seed_from_u64(config.seed),
        )
    }
}

impl SimulationEngine<ManualClock, ChaCha8Rng> {
    /// Engine on a hand-driven clock starting at 0 ms.
    pub fn headless(config: SimConfig) -> Result<Self> {
        Self::with_parts(
            config.game,
            ManualClock::default(),
            ChaCha8Rng::seed_from_u64(config.seed),
        )
    }
}

impl<C: Clock, R: RandomSource> SimulationEngine<C, R> {
    /// Engine with an explicit clock and random source.
    pub fn with_parts(config: GameConfig, clock: C, rng: R) -> Result<Self> {
        let layout = PitchLayout::from_config(&config)?;
        let match_sm = MatchStateMachine::new(config.max_attempts)?;
        let difficulty = config.difficulty;
        let keeper = KeeperProfile::from_config(difficulty, &config);
        let now_ms = clock.now_ms();

        Ok(Self {
            ball: layout.ball_origin,
            keeper_rect: layout.keeper_home(),
            config,
            layout,
            clock,
            rng,
            time: SimTime {
                tick: 0,
                now_ms,
            },
            difficulty,
            keeper,
            match_sm,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            messages: Vec::new(),
            can_shoot: false,
            drag: None,
            flight: None,
            landed: None,
            dive: None,
            decision: None,
            last_outcome: None,
            cooldown: Cooldown::default(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation to the clock's current time and return the
    /// resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        let now_ms = self.clock.now_ms().max(self.time.now_ms);
        self.time.advance(now_ms);

        self.process_commands(now_ms);

        if self.cooldown.take_due(now_ms) {
            self.reset_shot();
        }

        self.update_drag();
        // Keeper first: the save check samples its box at this same instant.
        self.update_keeper(now_ms);
        self.update_ball(now_ms);

        self.build_snapshot(now_ms)
    }

    /// Start a match, or play again once the previous one is over.
    pub fn start_match(&mut self) -> Result<()> {
        if self.match_sm.is_over() {
            self.reset_match();
        }
        self.match_sm.start()?;
        self.reset_shot();
        self.push_message("Drag the ball and release to shoot!");
        Ok(())
    }

    /// Abandon the match and return to NotStarted. A pending cooldown is
    /// consumed here and never fires.
    pub fn reset_match(&mut self) {
        self.cooldown.take_pending();
        self.match_sm.reset();
        self.reset_shot();
        info!("match reset");
        self.push_message("Start a match to begin!");
    }

    /// Copy of the current match bookkeeping.
    pub fn match_status(&self) -> MatchState {
        self.match_sm.status().clone()
    }

    pub fn phase(&self) -> MatchPhase {
        self.match_sm.phase()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &PitchLayout {
        &self.layout
    }

    pub fn can_shoot(&self) -> bool {
        self.can_shoot
    }

    pub fn is_shot_in_flight(&self) -> bool {
        self.flight.is_some()
    }

    pub fn cooldown_pending(&self) -> bool {
        self.cooldown.is_pending()
    }

    /// Decision for the shot in play, if any.
    pub fn keeper_decision(&self) -> Option<GoalkeeperDecision> {
        self.decision
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable clock access, for stepping a `ManualClock`.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Process all queued commands. Rejected commands are logged and
    /// dropped.
    fn process_commands(&mut self, now_ms: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(&command, now_ms) {
                warn!(?command, %err, kind = ?err.kind(), "command rejected");
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: &PlayerCommand, now_ms: f64) -> Result<()> {
        match *command {
            PlayerCommand::StartMatch => match self.match_sm.phase() {
                MatchPhase::NotStarted | MatchPhase::Over => self.start_match(),
                // Already playing: restart the current shot, unless aiming.
                MatchPhase::InProgress if self.drag.is_some() => {
                    debug!("start ignored while dragging");
                    Ok(())
                }
                MatchPhase::InProgress => self.manual_reset_shot(),
            },
            PlayerCommand::ResetMatch => {
                self.reset_match();
                Ok(())
            }
            PlayerCommand::ResetShot => self.manual_reset_shot(),
            PlayerCommand::SetDifficulty { difficulty } => {
                let value = difficulty.read_probability();
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(PenaltyError::DifficultyOutOfRange { value });
                }
                self.difficulty = difficulty;
                self.keeper = KeeperProfile::from_config(difficulty, &self.config);
                info!(?difficulty, "difficulty changed");
                Ok(())
            }
            PlayerCommand::BeginDrag { x, y } => self.begin_drag(Point::new(x, y)),
            PlayerCommand::DragTo { x, y } => self.drag_to(Point::new(x, y)),
            PlayerCommand::ReleaseDrag => self.release_drag(now_ms),
        }
    }

    fn manual_reset_shot(&mut self) -> Result<()> {
        self.expect_in_progress()?;
        if self.flight.is_some() {
            return Err(PenaltyError::ShotInFlight);
        }
        // Runs the pending cooldown reset now; the timer then finds nothing.
        self.cooldown.take_pending();
        self.reset_shot();
        Ok(())
    }

    fn begin_drag(&mut self, pointer: Point) -> Result<()> {
        if !pointer.is_finite() {
            return Err(PenaltyError::NonFiniteInput { what: "pointer" });
        }
        self.expect_in_progress()?;
        if self.flight.is_some() {
            return Err(PenaltyError::ShotInFlight);
        }
        if !self.can_shoot || self.drag.is_some() {
            return Ok(());
        }
        if !self
            .layout
            .grabs_ball(self.ball, pointer, BALL_GRAB_RADIUS_FACTOR)
        {
            debug!(x = pointer.x, y = pointer.y, "press missed the ball");
            return Ok(());
        }

        self.drag = Some(DragState {
            start: self.ball,
            current: self.ball,
            shot: ShotParameters::default(),
        });
        Ok(())
    }

    fn drag_to(&mut self, pointer: Point) -> Result<()> {
        if !pointer.is_finite() {
            return Err(PenaltyError::NonFiniteInput { what: "pointer" });
        }
        let max = self.config.max_drag_distance;
        let Some(drag) = self.drag.as_mut() else {
            return Ok(());
        };
        let current = clamp_pointer(drag.start, pointer, max);
        drag.shot = from_drag_points(drag.start, current, max)?;
        drag.current = current;
        Ok(())
    }

    fn release_drag(&mut self, now_ms: f64) -> Result<()> {
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };
        if drag.shot.is_shootable() {
            self.take_shot(drag.shot, now_ms)
        } else {
            debug!(power = drag.shot.power, "drag too weak to shoot");
            self.ball = self.layout.ball_origin;
            Ok(())
        }
    }

    /// Kick: the keeper decides, then ball and keeper animations start
    /// together.
    fn take_shot(&mut self, shot: ShotParameters, now_ms: f64) -> Result<()> {
        if !self.can_shoot {
            return Err(PenaltyError::ShotInFlight);
        }
        let origin = self.layout.ball_origin;
        let goal = self.layout.goal();
        let ctx = KeeperContext {
            shot,
            origin,
            difficulty: self.keeper.read_probability,
            zones: self.layout.grid.zones(),
            goal,
        };
        let decision = decide(&ctx, &mut self.rng)?;

        let plan = plan_ball_flight_with(&shot, origin, goal.origin(), self.config.ball_base_duration_ms);
        let home = self.layout.keeper_home();
        self.flight = Some(BallFlight::new(plan, now_ms));
        self.dive = Some(KeeperDive {
            from: home,
            to: self.layout.keeper_target(&decision.target_zone),
            started_ms: now_ms,
            reaction_ms: self.keeper.reaction_ms,
            duration_ms: self.keeper.dive_duration_ms,
        });
        self.keeper_rect = home;
        self.ball = origin;
        self.decision = Some(decision);
        self.can_shoot = false;

        self.events.push(GameEvent::Kick { power: shot.power });
        self.events.push(GameEvent::KeeperDive {
            direction: decision.diving_direction,
            height: decision.diving_height,
        });
        info!(
            power = shot.power,
            angle = shot.angle_degrees,
            keeper_zone = decision.target_zone.label(),
            "shot taken"
        );
        Ok(())
    }

    /// While dragging, the ball eases toward the pointer.
    fn update_drag(&mut self) {
        if let Some(drag) = &self.drag {
            self.ball = self.ball.lerp(&drag.current, BALL_DRAG_EASING);
        }
    }

    fn update_keeper(&mut self, now_ms: f64) {
        if let Some(dive) = &self.dive {
            self.keeper_rect = dive.rect_at(now_ms);
        }
    }

    fn update_ball(&mut self, now_ms: f64) {
        let Some(flight) = self.flight else {
            return;
        };
        self.ball = flight.position(now_ms);
        if flight.is_complete(now_ms) {
            self.flight = None;
            self.landed = Some(flight);
            self.resolve_shot(now_ms);
        }
    }

    fn resolve_shot(&mut self, now_ms: f64) {
        let outcome = match self.match_sm.resolve_attempt(
            self.ball,
            &self.keeper_rect,
            self.layout.grid.zones(),
        ) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%err, "attempt not resolved");
                return;
            }
        };

        let position = self.ball;
        self.events.push(match outcome {
            AttemptOutcome::Goal => GameEvent::Goal { position },
            AttemptOutcome::Save => GameEvent::Save { position },
            AttemptOutcome::Miss => GameEvent::Miss { position },
        });
        self.push_message(outcome_message(outcome));
        self.last_outcome = Some(outcome);

        let status = self.match_sm.status();
        info!(
            ?outcome,
            attempt = status.attempts,
            player = status.player_score,
            keeper = status.goalkeeper_score,
            "attempt resolved"
        );

        if let Some(result) = self.match_sm.result() {
            self.events.push(GameEvent::MatchOver { result });
            self.push_message(result_message(result));
        } else {
            self.cooldown.schedule(now_ms, self.config.cooldown_ms);
        }
    }

    /// Ball back on the spot, keeper home. Shooting is re-enabled only
    /// while a match is in progress.
    fn reset_shot(&mut self) {
        self.ball = self.layout.ball_origin;
        self.drag = None;
        self.flight = None;
        self.landed = None;
        self.dive = None;
        self.keeper_rect = self.layout.keeper_home();
        self.decision = None;
        self.last_outcome = None;
        self.can_shoot = self.match_sm.phase() == MatchPhase::InProgress;

        if self.can_shoot {
            let status = self.match_sm.status();
            let text = format!("Attempt {}/{}", status.attempts + 1, status.max_attempts);
            self.push_message(text);
        }
    }

    fn expect_in_progress(&self) -> Result<()> {
        match self.match_sm.phase() {
            MatchPhase::InProgress => Ok(()),
            phase => Err(PenaltyError::WrongPhase {
                phase,
                expected: MatchPhase::InProgress,
            }),
        }
    }

    fn push_message(&mut self, text: impl Into<String>) {
        self.messages.push(Message::new(text, self.time.tick));
    }

    fn build_snapshot(&mut self, now_ms: f64) -> GameStateSnapshot {
        GameStateSnapshot {
            time: self.time,
            match_state: self.match_sm.status().clone(),
            difficulty: self.difficulty,
            can_shoot: self.can_shoot && self.drag.is_none(),
            ball: snapshot::build_ball(
                self.ball,
                self.flight.as_ref(),
                self.landed.as_ref(),
                now_ms,
                self.layout.ball_radius,
            ),
            keeper: KeeperView {
                rect: self.keeper_rect,
                pose: snapshot::keeper_pose(self.last_outcome, self.dive.as_ref(), now_ms),
                diving: self.dive.is_some_and(|d| !d.is_complete(now_ms)),
                decision: self.decision,
            },
            goal: self.layout.goal(),
            zones: snapshot::build_zones(&self.layout.grid),
            aim: self
                .drag
                .as_ref()
                .map(|drag| snapshot::build_aim(drag, &self.layout)),
            events: std::mem::take(&mut self.events),
            messages: std::mem::take(&mut self.messages),
        }
    }
}
