//! Command parsing and execution for the interactive prompt.

use thiserror::Error;
use treelens_core::{
    CountKind, DebugError, DebuggerConfig, LookupKey, PrintMode, RenderOptions, SearchNode,
    TreeDebugger,
};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  show                          current node and its children
  cd <key>                      move to a child (index, edge or similar text)
  peek <key>                    show a child without moving
  root                          move back to the session root
  print [depth] [summary|complete]
  p [depth] [summary|complete]  draw the tree under the current node
  pp                            draw the whole tree under the current node
  nodes [all|decision|action]   count nodes under the current node
  depth                         deepest decision layer under the current node
  layer <depth>                 decision nodes at a given depth
  stats                         subtree statistics as JSON
  pref [depth]                  preferred actions from the current node
  help                          this text
  quit                          leave the prompt";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A child key as typed at the prompt.
pub enum KeyArg {
    Index(isize),
    Text(String),
}

impl KeyArg {
    fn parse(raw: &str) -> KeyArg {
        match raw.parse::<isize>() {
            Ok(index) => KeyArg::Index(index),
            Err(_) => KeyArg::Text(raw.to_string()),
        }
    }

    fn into_lookup<E>(self) -> LookupKey<E> {
        match self {
            KeyArg::Index(index) => LookupKey::Index(index),
            KeyArg::Text(text) => LookupKey::Text(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Cd(KeyArg),
    Peek(KeyArg),
    Root,
    Print {
        max_depth: Option<usize>,
        mode: Option<PrintMode>,
    },
    PrintAll,
    Nodes(CountKind),
    Depth,
    Layer(usize),
    Stats,
    Pref(Option<usize>),
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' expects {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{value}' is not a non-negative integer")]
    InvalidNumber { value: String },
    #[error(transparent)]
    Debug(#[from] DebugError),
    #[error("failed to encode stats: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_depth(value: &str) -> Result<usize, CommandError> {
    value.parse::<usize>().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
    })
}

/// Parse one prompt line. Everything after `cd`/`peek` is the key, so keys
/// may contain spaces.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    match name {
        "" => Err(CommandError::Empty),
        "show" | "ls" => Ok(Command::Show),
        "cd" | "peek" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: if name == "cd" { "cd" } else { "peek" },
                    argument: "a child key",
                });
            }
            let key = KeyArg::parse(rest);
            Ok(if name == "cd" {
                Command::Cd(key)
            } else {
                Command::Peek(key)
            })
        }
        "root" | "r" => Ok(Command::Root),
        "print" | "p" => {
            let mut max_depth = None;
            let mut mode = None;
            for arg in args {
                if arg.chars().all(|c| c.is_ascii_digit()) {
                    max_depth = Some(parse_depth(arg)?);
                } else {
                    mode = Some(arg.parse::<PrintMode>()?);
                }
            }
            Ok(Command::Print { max_depth, mode })
        }
        "pp" => Ok(Command::PrintAll),
        "nodes" | "nn" => {
            let kind = match args.first() {
                Some(kind) => kind.parse::<CountKind>()?,
                None => CountKind::All,
            };
            Ok(Command::Nodes(kind))
        }
        "nv" => Ok(Command::Nodes(CountKind::Decision)),
        "nq" => Ok(Command::Nodes(CountKind::Action)),
        "depth" | "d" => Ok(Command::Depth),
        "layer" => match args.first() {
            Some(depth) => Ok(Command::Layer(parse_depth(depth)?)),
            None => Err(CommandError::MissingArgument {
                command: "layer",
                argument: "a depth",
            }),
        },
        "stats" => Ok(Command::Stats),
        "pref" => {
            let max_depth = args.first().map(|depth| parse_depth(depth)).transpose()?;
            Ok(Command::Pref(max_depth))
        }
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Run a command against the debugger and return the text to print.
/// `Quit` produces no output; the caller decides what leaving means.
pub fn execute<N: SearchNode>(
    command: &Command,
    debugger: &mut TreeDebugger<N>,
    config: &DebuggerConfig,
) -> Result<String, CommandError> {
    let output = match command {
        Command::Show => debugger.to_string(),
        Command::Cd(key) => {
            let style = debugger.style();
            let view = debugger.navigate(key.clone().into_lookup::<N::Edge>())?;
            view.describe(true, &style)
        }
        Command::Peek(key) => {
            let view = debugger.get(key.clone().into_lookup::<N::Edge>())?;
            view.describe(true, &debugger.style())
        }
        Command::Root => {
            debugger.reset();
            debugger.to_string()
        }
        Command::Print { max_depth, mode } => {
            let options = RenderOptions::new(
                max_depth.or(config.max_depth),
                mode.unwrap_or(config.print_mode),
            );
            debugger.render(&options).join("\n")
        }
        Command::PrintAll => debugger.render_all().join("\n"),
        Command::Nodes(kind) => debugger.count_nodes(*kind).to_string(),
        Command::Depth => match debugger.depth() {
            Some(depth) => depth.to_string(),
            None => "no decision nodes".to_string(),
        },
        Command::Layer(depth) => {
            let style = debugger.style();
            debugger
                .layer(*depth)?
                .iter()
                .enumerate()
                .map(|(i, view)| format!("[{i}] {}", view.line(&style)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::Stats => serde_json::to_string_pretty(&debugger.stats())?,
        Command::Pref(max_depth) => {
            let steps = debugger.preferred_path(max_depth.or(config.preferred_max_depth));
            if steps.is_empty() {
                "no preferred actions".to_string()
            } else {
                steps
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(output)
}
