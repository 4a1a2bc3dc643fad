//! Interactive REPL for lispel
//!
//! Reads one line at a time, evaluates it against a persistent global
//! environment, and prints the rendered result. Runtime failures print as
//! `Error: <message>` lines; the loop always continues to the next input.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use lispel::{Evaluator, Parser, Scanner, Value};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("lispel {}", lispel::VERSION);
    println!("Press Ctrl+C to exit");
    println!();

    let mut editor = DefaultEditor::new()?;
    let mut evaluator = Evaluator::new();

    loop {
        match editor.readline("lispel> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(&line)?;
                match eval_line(&mut evaluator, &line) {
                    Ok(value) => println!("{}", value),
                    Err(err) => eprintln!("{}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("readline error: {}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Runs one input line through the full pipeline.
///
/// Scanner and parser failures surface as `Err`; every evaluation-level
/// failure is already a renderable [`Value`].
fn eval_line(evaluator: &mut Evaluator, line: &str) -> lispel::Result<Value> {
    let mut scanner = Scanner::new(line);
    let tokens = scanner.scan_tokens()?;

    let mut parser = Parser::new(tokens);
    let tree = parser.parse()?;

    Ok(evaluator.run(&tree))
}
