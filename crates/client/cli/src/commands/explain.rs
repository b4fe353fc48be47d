use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use sortquiz_core::{AlgorithmKey, SortAlgorithm};
use strum::IntoEnumIterator;

use crate::render;

/// Show how an algorithm works
#[derive(Parser, Debug)]
pub struct Explain {
    /// Algorithm to explain (all of them when omitted)
    pub algorithm: Option<AlgorithmKey>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl Explain {
    pub fn execute(self) -> Result<()> {
        let engines: Vec<&dyn SortAlgorithm> = match self.algorithm {
            Some(key) => vec![key.engine()],
            None => AlgorithmKey::iter().map(AlgorithmKey::engine).collect(),
        };

        let mut stdout = io::stdout();
        if self.json {
            let entries: Vec<_> = engines.iter().map(|engine| describe(*engine)).collect();
            writeln!(stdout, "{}", serde_json::to_string_pretty(&entries)?)?;
            return Ok(());
        }

        for (position, engine) in engines.iter().enumerate() {
            if position > 0 {
                writeln!(stdout)?;
            }
            write!(stdout, "{}", render::explanation(*engine))?;
        }
        Ok(())
    }
}

fn describe(engine: &dyn SortAlgorithm) -> serde_json::Value {
    serde_json::json!({
        "key": engine.key(),
        "name": engine.name(),
        "complexity": engine.complexity(),
        "move_rule": engine.move_rule(),
        "explanation": engine.explanation(),
        "pseudocode": engine.pseudocode(),
        "walkthrough": engine.example_walkthrough(),
    })
}
