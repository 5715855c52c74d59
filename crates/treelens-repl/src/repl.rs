//! REPL (Read-Eval-Print Loop) over a tree debugger.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::debug;
use treelens_core::{DebuggerConfig, SearchNode, TreeDebugger};

use crate::commands::{Command, CommandError, execute, parse};

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}

/// What a single prompt line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Debugger plus the settings that fill in omitted command arguments.
/// Holds no terminal state, so it can be driven from scripts and tests.
pub struct Session<N: SearchNode> {
    debugger: TreeDebugger<N>,
    config: DebuggerConfig,
}

impl<N: SearchNode> Session<N> {
    pub fn new(debugger: TreeDebugger<N>, config: DebuggerConfig) -> Self {
        Session { debugger, config }
    }

    pub fn debugger(&self) -> &TreeDebugger<N> {
        &self.debugger
    }

    pub fn into_debugger(self) -> TreeDebugger<N> {
        self.debugger
    }

    /// Parse and run one line.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let command = parse(line)?;
        debug!(?command, "executing");
        if command == Command::Quit {
            return Ok(Outcome::Quit);
        }
        let output = execute(&command, &mut self.debugger, &self.config)?;
        Ok(Outcome::Output(output))
    }

    /// Prompt naming the edge that led to the cursor.
    pub fn prompt(&self) -> String {
        match self.debugger.parent_edge() {
            Some(edge) => format!("treelens ({edge})> "),
            None => "treelens> ".to_string(),
        }
    }
}

/// Interactive prompt for a debugging session.
pub struct Repl<N: SearchNode> {
    editor: DefaultEditor,
    session: Session<N>,
}

impl<N: SearchNode> Repl<N> {
    pub fn new(debugger: TreeDebugger<N>, config: DebuggerConfig) -> Result<Self, ReplError> {
        Ok(Repl {
            editor: DefaultEditor::new()?,
            session: Session::new(debugger, config),
        })
    }

    /// Run the loop until `quit`, Ctrl-D, or an editor failure.
    pub fn run(&mut self) -> Result<(), ReplError> {
        self.print_banner();

        loop {
            let prompt = self.session.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    match self.session.handle_line(line) {
                        Ok(Outcome::Quit) => break,
                        Ok(Outcome::Output(output)) => {
                            if !output.is_empty() {
                                println!("{output}");
                            }
                        }
                        Err(e) => println!("{} {e}", "error:".red().bold()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "Use 'quit' or Ctrl-D to exit".yellow());
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    fn print_banner(&self) {
        println!("{}", "treelens".green().bold());
        println!("{}", self.session.debugger().summary());
        println!("Type 'help' for commands, 'quit' to exit.\n");
    }
}

/// Drop into the prompt for `debugger`, e.g. between two planning steps.
/// Returns once the operator quits.
pub fn inspect<N: SearchNode>(
    debugger: TreeDebugger<N>,
    config: DebuggerConfig,
) -> Result<(), ReplError> {
    Repl::new(debugger, config)?.run()
}
