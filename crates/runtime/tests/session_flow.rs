use std::sync::Arc;

use chrono::Duration;
use sortquiz_core::{AlgorithmKey, Difficulty, GameConfig, Grade, InputKind, MoveError, UserAction};
use sortquiz_runtime::{GameSession, ManualClock, RuntimeError, SessionPhase};
use strum::IntoEnumIterator;

fn session_with_clock() -> (GameSession, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let session = GameSession::new(GameConfig::default(), clock.clone()).with_seed(7);
    (session, clock)
}

/// Plays every hinted move, advancing the clock by `seconds_per_move` first.
fn play_out(session: &mut GameSession, clock: &ManualClock, seconds_per_move: i64) -> Vec<u32> {
    let mut points = Vec::new();
    while let Some(hint) = session.hint() {
        clock.advance(Duration::seconds(seconds_per_move));
        let outcome = session.process_move(hint.action).unwrap();
        points.push(outcome.points);
    }
    points
}

#[test]
fn perfect_fast_bubble_game() {
    let (mut session, clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Bubble, Difficulty::Easy, vec![5, 3, 8, 4, 2]);

    let points = play_out(&mut session, &clock, 1);
    assert_eq!(points, vec![100, 100, 100, 100, 150, 150, 150]);
    assert_eq!(session.phase(), SessionPhase::Complete);
    assert_eq!(session.current_array(), &[2, 3, 4, 5, 8]);

    let results = session.results().unwrap();
    assert_eq!(results.correct_moves, 7);
    assert_eq!(results.incorrect_moves, 0);
    assert_eq!(results.optimal_swaps, 7);
    assert_eq!(results.bonus.perfect, 150);
    assert_eq!(results.bonus.speed, 200);
    assert_eq!(results.score, 850 + 150 + 200);
    assert_eq!(results.elapsed_seconds, 7.0);
    assert_eq!(results.efficiency, 100);
    assert_eq!(results.accuracy, 100);
    assert_eq!(results.max_streak, 7);
    assert_eq!(results.grade, Grade::A);
    assert!(results.is_perfect());
}

#[test]
fn slow_game_earns_no_speed_bonus() {
    let (mut session, clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Selection, Difficulty::Easy, vec![2, 1]);

    play_out(&mut session, &clock, 3);
    let results = session.results().unwrap();
    assert_eq!(results.bonus.speed, 0);
    assert_eq!(results.score, 100 + 150);
}

#[test]
fn wrong_move_costs_points_and_keeps_cursor() {
    let (mut session, _clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Bubble, Difficulty::Easy, vec![5, 3, 8, 4, 2]);

    session.process_move(UserAction::swap(1, 0)).unwrap();
    assert_eq!(session.score(), 100);

    let cursor = session.cursor();
    let error = session.process_move(UserAction::swap(0, 4)).unwrap_err();
    assert!(matches!(error, MoveError::IncorrectMove { .. }));
    assert_eq!(
        error.to_string(),
        "Incorrect. In Bubble Sort, swap adjacent elements only when the left one is larger."
    );
    assert_eq!(session.score(), 50);
    assert_eq!(session.streak(), 0);
    assert_eq!(session.incorrect_moves(), 1);
    assert_eq!(session.cursor(), cursor);
    assert_eq!(session.hint().unwrap().description, "Swap 8 and 4");
}

#[test]
fn penalty_never_drives_score_negative() {
    let (mut session, _clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Heap, Difficulty::Hard, vec![1, 2, 3]);

    for _ in 0..3 {
        assert!(session.process_move(UserAction::select(1)).is_err());
    }
    assert_eq!(session.score(), 0);
    assert_eq!(session.incorrect_moves(), 3);
}

#[test]
fn merge_expects_values_not_swaps() {
    let (mut session, clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Merge, Difficulty::Easy, vec![38, 27, 43, 10]);

    assert_eq!(session.hint().unwrap().action, UserAction::select(27));
    let error = session.process_move(UserAction::swap(0, 1)).unwrap_err();
    assert!(matches!(error, MoveError::WrongActionType { .. }));

    play_out(&mut session, &clock, 1);
    assert_eq!(session.current_array(), &[10, 27, 38, 43]);
    assert_eq!(session.results().unwrap().accuracy, 89);
}

#[test]
fn skipped_steps_are_not_scored() {
    let (mut session, _clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Insertion, Difficulty::Easy, vec![3, 2, 1]);

    let mut skipped = 0;
    while session.is_active() {
        session.skip_step().unwrap();
        skipped += 1;
    }
    assert_eq!(skipped, 3);
    assert_eq!(session.current_array(), &[1, 2, 3]);

    let results = session.results().unwrap();
    assert_eq!(results.score, 0);
    assert_eq!(results.correct_moves, 0);
    assert_eq!(results.efficiency, 0);
    assert_eq!(results.accuracy, 100);
    assert_eq!(results.grade, Grade::F);
}

#[test]
fn finished_game_rejects_moves_without_penalty() {
    let (mut session, clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Quick, Difficulty::Easy, vec![2, 1]);
    play_out(&mut session, &clock, 1);
    let score = session.score();

    let error = session.process_move(UserAction::swap(0, 1)).unwrap_err();
    assert!(matches!(error, MoveError::NoActionExpected { .. }));
    assert_eq!(session.score(), score);
    assert!(matches!(session.skip_step(), Err(RuntimeError::NotActive)));
}

#[test]
fn results_wait_for_completion() {
    let (mut session, _clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Bubble, Difficulty::Easy, vec![2, 1]);
    assert!(matches!(session.results(), Err(RuntimeError::NotComplete)));
}

#[test]
fn difficulty_multiplies_move_points() {
    let (mut session, clock) = session_with_clock();
    session.start_with_input(AlgorithmKey::Bubble, Difficulty::Expert, vec![2, 1]);

    let points = play_out(&mut session, &clock, 10);
    assert_eq!(points, vec![300]);
    // 300 + perfect 150 normalizes to 150
    assert_eq!(session.results().unwrap().grade, Grade::F);
}

#[test]
fn every_algorithm_and_shape_plays_to_sorted() {
    for algorithm in AlgorithmKey::iter() {
        for kind in InputKind::iter() {
            let (mut session, clock) = session_with_clock();
            session.start(algorithm, Difficulty::Medium, kind);
            let input = session.trace().unwrap().input().to_vec();
            assert_eq!(input.len(), 8);

            play_out(&mut session, &clock, 1);
            let mut expected = input.clone();
            expected.sort();
            assert_eq!(session.current_array(), expected.as_slice(), "{algorithm} {kind}");

            let results = session.results().unwrap();
            assert_eq!(results.original_array, input);
            assert_eq!(results.input_kind, Some(kind));
            assert_eq!(results.input_name, kind.label());
        }
    }
}

#[test]
fn same_seed_generates_same_arrays() {
    let mut first = GameSession::new(GameConfig::default(), Arc::new(ManualClock::default()))
        .with_seed(2024);
    let mut second = GameSession::new(GameConfig::default(), Arc::new(ManualClock::default()))
        .with_seed(2024);

    first.start(AlgorithmKey::Quick, Difficulty::Expert, InputKind::Random);
    second.start(AlgorithmKey::Quick, Difficulty::Expert, InputKind::Random);

    assert_eq!(
        first.trace().unwrap().root(),
        second.trace().unwrap().root()
    );
}
