//! Game session - drives one playthrough of a trace.
//!
//! The session owns the trace, a forward-only cursor and the score state. It
//! replays non-interactive steps on its own and stops at every interactive
//! step until the player submits a move or skips it.
//!
//! ```text
//! Idle --start--> Active --last step consumed--> Complete
//!   ^                                               |
//!   +--------------------- reset -------------------+
//! ```

mod outcome;

pub use outcome::{Hint, MoveOutcome, SessionPhase};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortquiz_core::{
    AlgorithmKey, Difficulty, EndGameBonus, ErrorContext, GameConfig, GameError, GameResults,
    InputKind, MoveError, Step, Trace, UserAction, accuracy_percent, apply_penalty,
    correct_move_points, efficiency_percent, end_game_bonus, grade,
};

use crate::api::{Result, RuntimeError};
use crate::clock::{Clock, SystemClock, elapsed_seconds};
use crate::config::RuntimeConfig;
use crate::input::generate_input;

/// Input label reported for arrays supplied by the caller.
pub const CUSTOM_INPUT_LABEL: &str = "Custom";

/// State of the game currently started.
#[derive(Clone, Debug)]
struct Round {
    algorithm: AlgorithmKey,
    difficulty: Difficulty,
    input_kind: Option<InputKind>,
    trace: Trace,
    cursor: usize,
    current_array: Vec<i32>,
    score: u32,
    correct: u32,
    incorrect: u32,
    streak: u32,
    max_streak: u32,
    bonus: EndGameBonus,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl Round {
    fn is_complete(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Applies the pending step's effect and moves on.
    fn consume_current(&mut self, config: &GameConfig, clock: &dyn Clock) {
        if let Some(step) = self.trace.get(self.cursor) {
            step.apply_to(&mut self.current_array);
        }
        self.cursor += 1;
        self.advance(config, clock);
    }

    /// Replays non-interactive steps up to the next interactive one, or
    /// completes the round when the trace runs out.
    fn advance(&mut self, config: &GameConfig, clock: &dyn Clock) {
        while let Some(step) = self.trace.get(self.cursor) {
            if step.requires_user_action {
                return;
            }
            self.current_array.clone_from(&step.snapshot);
            self.cursor += 1;
        }
        self.complete(config, clock);
    }

    fn complete(&mut self, config: &GameConfig, clock: &dyn Clock) {
        let ended_at = clock.now();
        self.ended_at = Some(ended_at);

        let elapsed = elapsed_seconds(self.started_at, ended_at);
        self.bonus = end_game_bonus(config, self.correct, self.incorrect, elapsed);
        self.score = self.score.saturating_add(self.bonus.total());

        tracing::info!(
            algorithm = %self.algorithm,
            score = self.score,
            correct = self.correct,
            incorrect = self.incorrect,
            elapsed,
            "game complete"
        );
    }

    fn elapsed_seconds(&self, clock: &dyn Clock) -> f64 {
        elapsed_seconds(self.started_at, self.ended_at.unwrap_or_else(|| clock.now()))
    }
}

/// One player's game: trace, cursor, score and timing.
///
/// Sessions are single-threaded; the clock is injected so timing-dependent
/// bonuses can be tested deterministically.
pub struct GameSession {
    config: GameConfig,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    round: Option<Round>,
}

impl GameSession {
    /// Idle session drawing arrays from OS entropy.
    pub fn new(config: GameConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            rng: StdRng::from_entropy(),
            round: None,
        }
    }

    /// Reseeds array generation for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Session on the system clock, seeded from `config` when a seed is set.
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let session = Self::new(config.game.clone(), Arc::new(SystemClock));
        match config.seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        }
    }

    /// Generates an array of the difficulty's size and starts a game on it.
    pub fn start(
        &mut self,
        algorithm: AlgorithmKey,
        difficulty: Difficulty,
        input_kind: InputKind,
    ) {
        let input = generate_input(input_kind, difficulty.array_size(), &mut self.rng);
        self.begin(algorithm, difficulty, Some(input_kind), input);
    }

    /// Starts a game on an explicit array.
    pub fn start_with_input(
        &mut self,
        algorithm: AlgorithmKey,
        difficulty: Difficulty,
        input: Vec<i32>,
    ) {
        self.begin(algorithm, difficulty, None, input);
    }

    fn begin(
        &mut self,
        algorithm: AlgorithmKey,
        difficulty: Difficulty,
        input_kind: Option<InputKind>,
        input: Vec<i32>,
    ) {
        let trace = algorithm.engine().generate_steps(&input);
        tracing::info!(
            %algorithm,
            %difficulty,
            len = input.len(),
            steps = trace.len(),
            moves = trace.user_action_count(),
            "game started"
        );

        let mut round = Round {
            algorithm,
            difficulty,
            input_kind,
            trace,
            cursor: 0,
            current_array: input,
            score: 0,
            correct: 0,
            incorrect: 0,
            streak: 0,
            max_streak: 0,
            bonus: EndGameBonus::default(),
            started_at: self.clock.now(),
            ended_at: None,
        };
        round.advance(&self.config, self.clock.as_ref());
        self.round = Some(round);
    }

    /// Judges `action` against the pending step.
    ///
    /// Cursor-related rejections (no game running, trace exhausted) carry no
    /// penalty. Wrong moves cost [`GameConfig::INCORRECT_PENALTY`], reset the
    /// streak and leave the cursor where it was.
    pub fn process_move(
        &mut self,
        action: UserAction,
    ) -> std::result::Result<MoveOutcome, MoveError> {
        if !self.is_active() {
            return Err(MoveError::NoActionExpected {
                context: ErrorContext::at_step(self.cursor()),
            });
        }
        let Some(round) = self.round.as_mut() else {
            return Err(MoveError::NoActionExpected {
                context: ErrorContext::default(),
            });
        };
        if round.cursor >= round.trace.len() {
            return Err(MoveError::InvalidStepIndex {
                context: ErrorContext::at_step(round.cursor),
            });
        }

        let step_index = round.cursor;
        let engine = round.algorithm.engine();
        match engine.validate_move(&round.trace, step_index, &action) {
            Ok(()) => {
                round.correct += 1;
                round.streak += 1;
                round.max_streak = round.max_streak.max(round.streak);
                let points = correct_move_points(round.difficulty, round.streak);
                round.score = round.score.saturating_add(points);
                tracing::debug!(
                    step_index,
                    %action,
                    points,
                    streak = round.streak,
                    "move accepted"
                );

                round.consume_current(&self.config, self.clock.as_ref());
                Ok(MoveOutcome {
                    step_index,
                    points,
                    score: round.score,
                    streak: round.streak,
                    completed: round.is_complete(),
                })
            }
            Err(error) => {
                if error.is_penalized() {
                    round.incorrect += 1;
                    round.streak = 0;
                    round.score = apply_penalty(round.score);
                }
                tracing::debug!(step_index, %action, code = error.error_code(), "move rejected");
                Err(error)
            }
        }
    }

    /// Performs the pending move on the player's behalf, without scoring it.
    /// Returns the index of the skipped step.
    pub fn skip_step(&mut self) -> Result<usize> {
        let round = self
            .round
            .as_mut()
            .filter(|round| !round.is_complete())
            .ok_or(RuntimeError::NotActive)?;
        let step_index = round.cursor;
        round.consume_current(&self.config, self.clock.as_ref());
        tracing::debug!(step_index, "step skipped");
        Ok(step_index)
    }

    /// Back to idle; the current game is discarded.
    pub fn reset(&mut self) {
        self.round = None;
    }

    /// Expected action and narration of the pending step.
    pub fn hint(&self) -> Option<Hint> {
        let round = self.round.as_ref().filter(|round| !round.is_complete())?;
        let step = round.trace.get(round.cursor)?;
        Some(Hint {
            step_index: round.cursor,
            action: step.expected_action()?,
            description: step.description.clone(),
        })
    }

    /// Summary of the finished game.
    pub fn results(&self) -> Result<GameResults> {
        let round = self.round.as_ref().ok_or(RuntimeError::NotActive)?;
        if !round.is_complete() {
            return Err(RuntimeError::NotComplete);
        }

        let engine = round.algorithm.engine();
        let optimal_swaps = round.trace.optimal_swap_count();
        let elapsed = round.elapsed_seconds(self.clock.as_ref());
        Ok(GameResults {
            algorithm: round.algorithm,
            algorithm_name: engine.name(),
            difficulty: round.difficulty,
            difficulty_name: round.difficulty.label(),
            input_kind: round.input_kind,
            input_name: round
                .input_kind
                .map_or(CUSTOM_INPUT_LABEL, InputKind::label),
            array_size: round.trace.input().len(),
            original_array: round.trace.input().to_vec(),
            score: round.score,
            bonus: round.bonus,
            correct_moves: round.correct,
            incorrect_moves: round.incorrect,
            optimal_swaps,
            efficiency: efficiency_percent(optimal_swaps, round.correct),
            accuracy: accuracy_percent(round.correct, round.incorrect),
            elapsed_seconds: (elapsed * 10.0).round() / 10.0,
            max_streak: round.max_streak,
            complexity: engine.complexity(),
            grade: grade(round.score, round.difficulty),
        })
    }

    // ===== accessors =====

    pub fn phase(&self) -> SessionPhase {
        match &self.round {
            None => SessionPhase::Idle,
            Some(round) if round.is_complete() => SessionPhase::Complete,
            Some(_) => SessionPhase::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == SessionPhase::Active
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == SessionPhase::Complete
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn algorithm(&self) -> Option<AlgorithmKey> {
        self.round.as_ref().map(|round| round.algorithm)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.as_ref().map(|round| round.difficulty)
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.round.as_ref().map(|round| &round.trace)
    }

    /// Trace position of the next step to consume.
    pub fn cursor(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.cursor)
    }

    /// The step waiting for a move, while active.
    pub fn pending_step(&self) -> Option<&Step> {
        let round = self.round.as_ref().filter(|round| !round.is_complete())?;
        round.trace.get(round.cursor)
    }

    pub fn current_array(&self) -> &[i32] {
        self.round
            .as_ref()
            .map_or(&[][..], |round| round.current_array.as_slice())
    }

    pub fn score(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.score)
    }

    pub fn correct_moves(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.correct)
    }

    pub fn incorrect_moves(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.incorrect)
    }

    pub fn streak(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.streak)
    }

    pub fn max_streak(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.max_streak)
    }

    /// Seconds since start, frozen once complete.
    pub fn elapsed_seconds(&self) -> f64 {
        self.round
            .as_ref()
            .map_or(0.0, |round| round.elapsed_seconds(self.clock.as_ref()))
    }
}
