//! Fixtures shared by unit tests.

use std::sync::Arc;

use sortquiz_core::{AlgorithmKey, Difficulty, GameConfig, GameResults, UserAction};

use crate::clock::ManualClock;
use crate::session::GameSession;

/// Results of a reversed three-element game played with `mistakes` wrong
/// moves before the first correct one.
pub(crate) fn sample_results(algorithm: AlgorithmKey, mistakes: u32) -> GameResults {
    let clock = Arc::new(ManualClock::default());
    let mut session = GameSession::new(GameConfig::default(), clock).with_seed(0);
    session.start_with_input(algorithm, Difficulty::Easy, vec![3, 2, 1]);

    for _ in 0..mistakes {
        let Some(hint) = session.hint() else { break };
        let wrong = match hint.action {
            UserAction::Swap { .. } => UserAction::select(0),
            UserAction::Select { .. } => UserAction::swap(0, 0),
        };
        let _ = session.process_move(wrong);
    }
    while let Some(hint) = session.hint() {
        let _ = session.process_move(hint.action);
    }

    session
        .results()
        .expect("every hinted move is accepted until the trace ends")
}
