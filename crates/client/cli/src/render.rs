//! Plain-text rendering of arrays, steps and results.

use std::fmt::Write as _;

use sortquiz_core::{Achievement, GameResults, PlayerStats, SortAlgorithm, Step, StepKind};

/// Values in fixed-width cells, highlighted positions in brackets.
pub fn array(values: &[i32], highlight: &[usize]) -> String {
    let width = cell_width(values);
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if highlight.contains(&index) {
                format!("[{value:>width$}]")
            } else {
                format!(" {value:>width$} ")
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Position labels aligned with [`array`].
pub fn positions(len: usize, values: &[i32]) -> String {
    let width = cell_width(values);
    (0..len)
        .map(|index| format!(" {index:>width$} "))
        .collect::<Vec<_>>()
        .join("")
}

fn cell_width(values: &[i32]) -> usize {
    values
        .iter()
        .map(|value| value.to_string().len())
        .chain(std::iter::once(values.len().saturating_sub(1).to_string().len()))
        .max()
        .unwrap_or(1)
}

/// One narrated step, e.g. `  compare  Compare 5 and 3: 5 > 3, swap needed`.
pub fn step(step: &Step) -> String {
    let marker = if step.requires_user_action { '>' } else { ' ' };
    format!("{marker} {:<8} {}", step.kind.as_ref(), step.description)
}

/// Highlight set for a step; range steps light up their whole span.
pub fn highlight(step: &Step) -> Vec<usize> {
    match (step.kind, &step.indices[..]) {
        (StepKind::Divide | StepKind::Merge, &[low, high]) => (low..=high).collect(),
        _ => step.indices.clone(),
    }
}

pub fn explanation(engine: &dyn SortAlgorithm) -> String {
    let complexity = engine.complexity();
    let walkthrough = engine.example_walkthrough();

    let mut out = String::new();
    let _ = writeln!(out, "{}", engine.name());
    let _ = writeln!(out, "{}", "=".repeat(engine.name().len()));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", engine.explanation());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "best {}  average {}  worst {}  space {}",
        complexity.best, complexity.average, complexity.worst, complexity.space
    );
    let _ = writeln!(out);
    for line in engine.pseudocode().lines() {
        let _ = writeln!(out, "    {line}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "example {}", array(walkthrough.array, &[]));
    for (number, step) in walkthrough.steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {}  {}",
            number + 1,
            array(step.array, step.highlight),
            step.action
        );
    }
    out
}

pub fn results(results: &GameResults) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} on {} ({}, {} elements)",
        results.algorithm_name, results.difficulty_name, results.input_name, results.array_size
    );
    let _ = writeln!(out, "  grade       {}", results.grade);
    let _ = writeln!(out, "  score       {}", results.score);
    let _ = writeln!(
        out,
        "  bonuses     perfect {}  accuracy {}  speed {}",
        results.bonus.perfect, results.bonus.accuracy, results.bonus.speed
    );
    let _ = writeln!(
        out,
        "  moves       {} correct, {} incorrect (par {})",
        results.correct_moves, results.incorrect_moves, results.optimal_swaps
    );
    let _ = writeln!(out, "  accuracy    {}%", results.accuracy);
    let _ = writeln!(out, "  efficiency  {}%", results.efficiency);
    let _ = writeln!(out, "  best streak {}", results.max_streak);
    let _ = writeln!(out, "  time        {:.1}s", results.elapsed_seconds);
    let _ = writeln!(
        out,
        "  complexity  best {}  average {}  worst {}  space {}",
        results.complexity.best,
        results.complexity.average,
        results.complexity.worst,
        results.complexity.space
    );
    out
}

pub fn stats(stats: &PlayerStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "games completed  {}", stats.games_completed);
    let _ = writeln!(out, "perfect games    {}", stats.perfect_games);
    let fastest = stats
        .fastest_time
        .map_or_else(|| "-".to_string(), |seconds| format!("{seconds:.1}s"));
    let _ = writeln!(out, "fastest game     {fastest}");
    let _ = writeln!(out, "best streak      {}", stats.max_streak);
    let _ = writeln!(out, "total score      {}", stats.total_score);
    for (algorithm, count) in &stats.algorithm_completions {
        let _ = writeln!(out, "  {:<10} {count}", algorithm.as_ref());
    }
    out
}

pub fn achievement(achievement: Achievement, earned: bool) -> String {
    let mark = if earned { 'x' } else { ' ' };
    format!(
        "[{mark}] {:<14} {}",
        achievement.title(),
        achievement.description()
    )
}
