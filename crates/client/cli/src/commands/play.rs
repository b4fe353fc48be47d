//! Interactive game on stdin/stdout.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use sortquiz_core::StepKind;
use sortquiz_runtime::GameSession;

use super::{GameArgs, StatsArgs};
use crate::input::{HELP, PlayerCommand};
use crate::render;

/// Play a game: perform every swap (or placement) the algorithm makes
#[derive(Parser, Debug)]
pub struct Play {
    #[command(flatten)]
    pub game: GameArgs,

    #[command(flatten)]
    pub stats: StatsArgs,

    /// Do not record the result in the stats file
    #[arg(long)]
    pub no_save: bool,
}

impl Play {
    pub fn execute(self) -> Result<()> {
        let config = self.game.runtime_config()?;
        let mut session = GameSession::from_config(&config);
        match self.game.array.clone() {
            Some(array) => session.start_with_input(self.game.algorithm, config.difficulty, array),
            None => session.start(self.game.algorithm, config.difficulty, config.input_kind),
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        if !run_game(&mut session, stdin.lock(), &mut stdout)? {
            writeln!(stdout, "game abandoned")?;
            return Ok(());
        }

        let results = session.results()?;
        writeln!(stdout)?;
        write!(stdout, "{}", render::results(&results))?;

        if self.no_save {
            return Ok(());
        }
        let tracker = self.stats.open_tracker(&config)?;
        let unlocked = tracker.record(&results)?;
        for achievement in unlocked {
            writeln!(
                stdout,
                "achievement unlocked: {} - {}",
                achievement.title(),
                achievement.description()
            )?;
        }
        Ok(())
    }
}

/// Drives `session` from `input` until it completes (`true`) or the player
/// quits or input ends (`false`).
pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    out: &mut W,
) -> Result<bool> {
    let Some(algorithm) = session.algorithm() else {
        return Ok(false);
    };
    let engine = algorithm.engine();
    writeln!(out, "{}: {}.", engine.name(), engine.move_rule())?;
    match engine.action_kind() {
        StepKind::Select => writeln!(out, "Place values with `select <value>`; `help` lists commands.")?,
        _ => writeln!(out, "Swap positions with `swap <i> <j>`; `help` lists commands.")?,
    }

    let mut narrated = 0;
    let mut line = String::new();
    loop {
        narrate(session, &mut narrated, out)?;
        if session.is_complete() {
            writeln!(out, "sorted: {}", render::array(session.current_array(), &[]))?;
            return Ok(true);
        }

        let highlight = session
            .cursor()
            .checked_sub(1)
            .and_then(|last| session.trace()?.get(last))
            .map(render::highlight)
            .unwrap_or_default();
        writeln!(out)?;
        writeln!(out, "    {}", render::array(session.current_array(), &highlight))?;
        writeln!(
            out,
            "    {}",
            render::positions(session.current_array().len(), session.current_array())
        )?;
        write!(out, "score {} > ", session.score())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let command = match line.parse::<PlayerCommand>() {
            Ok(command) => command,
            Err(error) => {
                writeln!(out, "{error}")?;
                continue;
            }
        };

        match command {
            PlayerCommand::Move(action) => match session.process_move(action) {
                Ok(outcome) => writeln!(
                    out,
                    "correct +{} (streak {})",
                    outcome.points, outcome.streak
                )?,
                Err(error) => {
                    writeln!(out, "{error}")?;
                    if let Some(hint) = error.hint() {
                        writeln!(out, "hint: {hint}")?;
                    }
                    if error.is_penalized() {
                        writeln!(out, "score {} (streak reset)", session.score())?;
                    }
                }
            },
            PlayerCommand::Hint => match session.hint() {
                Some(hint) => writeln!(out, "hint: {} ({})", hint.action, hint.description)?,
                None => writeln!(out, "no move pending")?,
            },
            PlayerCommand::Skip => {
                let index = session.skip_step()?;
                writeln!(out, "skipped step {index}")?;
            }
            PlayerCommand::Help => writeln!(out, "{HELP}")?,
            PlayerCommand::Quit => return Ok(false),
        }
    }
}

/// Prints every step consumed since the last call.
fn narrate<W: Write>(session: &GameSession, narrated: &mut usize, out: &mut W) -> Result<()> {
    let Some(trace) = session.trace() else {
        return Ok(());
    };
    for step in trace.iter().take(session.cursor()).skip(*narrated) {
        writeln!(out, "{}", render::step(step))?;
    }
    *narrated = session.cursor();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortquiz_core::{AlgorithmKey, Difficulty, GameConfig};
    use sortquiz_runtime::ManualClock;
    use std::io::Cursor;
    use std::sync::Arc;

    fn session(algorithm: AlgorithmKey, array: Vec<i32>) -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), Arc::new(ManualClock::default()));
        session.start_with_input(algorithm, Difficulty::Easy, array);
        session
    }

    fn play(session: &mut GameSession, script: &str) -> (bool, String) {
        let mut out = Vec::new();
        let finished = run_game(session, Cursor::new(script), &mut out).unwrap();
        (finished, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_game_completes() {
        let mut session = session(AlgorithmKey::Bubble, vec![2, 1]);
        let (finished, out) = play(&mut session, "hint\nswap 1 0\n");

        assert!(finished);
        assert!(out.contains("hint: swap 0 1 (Swap 2 and 1)"));
        assert!(out.contains("correct +100 (streak 1)"));
        assert!(out.contains("Position 0 is sorted"));
        assert!(session.is_complete());
    }

    #[test]
    fn wrong_move_is_explained() {
        let mut session = session(AlgorithmKey::Merge, vec![2, 1]);
        let (finished, out) = play(&mut session, "select 2\nquit\n");

        assert!(!finished);
        assert!(out.contains("Incorrect. In Merge Sort"));
        assert!(out.contains("hint: Place 1 at position 0"));
        assert!(out.contains("score 0 (streak reset)"));
        assert_eq!(session.incorrect_moves(), 1);
    }

    #[test]
    fn end_of_input_abandons_the_game() {
        let mut session = session(AlgorithmKey::Heap, vec![1, 2, 3]);
        let (finished, out) = play(&mut session, "bogus\n");

        assert!(!finished);
        assert!(out.contains("unknown command"));
    }

    #[test]
    fn skip_plays_the_move_unscored() {
        let mut session = session(AlgorithmKey::Selection, vec![2, 1]);
        let (finished, _) = play(&mut session, "skip\n");

        assert!(finished);
        assert_eq!(session.score(), 0);
    }
}
