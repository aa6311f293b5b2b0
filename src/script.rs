//! Line-oriented command scripts.
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped. Commands mirror the shell verbs: `mkdir`, `cd`, `pwd`, `ls`,
//! `touch`, `exists`, `glob`, `tree`, `stats`.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use treefs_core::{Namespace, NodeSnapshot, TreeStats};

/// Errors raised while loading or parsing a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The command word is not recognised.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    /// A command that takes a path was given none.
    #[error("line {line}: '{command}' requires a path argument")]
    MissingArgument { line: usize, command: &'static str },

    /// A command was given more arguments than it takes.
    #[error("line {line}: '{command}' takes at most one argument")]
    TooManyArguments { line: usize, command: &'static str },

    /// The script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Mkdir(String),
    Cd(String),
    Pwd,
    Ls,
    Touch(String),
    Exists(String),
    Glob(String),
    Tree,
    Stats,
}

impl ScriptCommand {
    /// Parse one line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line_no: usize, line: &str) -> Result<Option<Self>, ScriptError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        let command = match word {
            "mkdir" => ScriptCommand::Mkdir(required(line_no, "mkdir", arg)?),
            "cd" => ScriptCommand::Cd(required(line_no, "cd", arg)?),
            "touch" => ScriptCommand::Touch(required(line_no, "touch", arg)?),
            "exists" => ScriptCommand::Exists(required(line_no, "exists", arg)?),
            "glob" => ScriptCommand::Glob(required(line_no, "glob", arg)?),
            "pwd" => ScriptCommand::Pwd,
            "ls" => ScriptCommand::Ls,
            "tree" => ScriptCommand::Tree,
            "stats" => ScriptCommand::Stats,
            other => {
                return Err(ScriptError::UnknownCommand {
                    line: line_no,
                    command: other.to_string(),
                });
            }
        };

        if words.next().is_some() || (arg.is_some() && command.takes_no_argument()) {
            return Err(ScriptError::TooManyArguments {
                line: line_no,
                command: command.name(),
            });
        }
        Ok(Some(command))
    }

    /// The command word.
    pub fn name(&self) -> &'static str {
        match self {
            ScriptCommand::Mkdir(_) => "mkdir",
            ScriptCommand::Cd(_) => "cd",
            ScriptCommand::Pwd => "pwd",
            ScriptCommand::Ls => "ls",
            ScriptCommand::Touch(_) => "touch",
            ScriptCommand::Exists(_) => "exists",
            ScriptCommand::Glob(_) => "glob",
            ScriptCommand::Tree => "tree",
            ScriptCommand::Stats => "stats",
        }
    }

    fn takes_no_argument(&self) -> bool {
        matches!(
            self,
            ScriptCommand::Pwd | ScriptCommand::Ls | ScriptCommand::Tree | ScriptCommand::Stats
        )
    }

    fn argument(&self) -> Option<&str> {
        match self {
            ScriptCommand::Mkdir(arg)
            | ScriptCommand::Cd(arg)
            | ScriptCommand::Touch(arg)
            | ScriptCommand::Exists(arg)
            | ScriptCommand::Glob(arg) => Some(arg),
            _ => None,
        }
    }

    /// Apply the command to a namespace.
    pub fn execute(&self, ns: &mut Namespace) -> Output {
        match self {
            ScriptCommand::Mkdir(path) => Output::Status { ok: ns.mkdir(path) },
            ScriptCommand::Cd(path) => Output::Status { ok: ns.chdir(path) },
            ScriptCommand::Touch(path) => Output::Status {
                ok: ns.create_file(path),
            },
            ScriptCommand::Exists(path) => Output::Status {
                ok: ns.path_exists(path),
            },
            ScriptCommand::Pwd => Output::Path {
                path: ns.current_path(),
            },
            ScriptCommand::Ls => Output::Names {
                names: ns.list_current(),
            },
            ScriptCommand::Glob(pattern) => Output::Names {
                names: ns.get_files(pattern),
            },
            ScriptCommand::Tree => Output::Tree(ns.snapshot()),
            ScriptCommand::Stats => Output::Stats(ns.stats()),
        }
    }
}

fn required(line: usize, command: &'static str, arg: Option<&str>) -> Result<String, ScriptError> {
    arg.map(str::to_string)
        .ok_or(ScriptError::MissingArgument { line, command })
}

/// Result of one executed command.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Output {
    Status { ok: bool },
    Path { path: String },
    Names { names: Vec<String> },
    Tree(NodeSnapshot),
    Stats(TreeStats),
}

/// One executed line of a script.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// 1-based line number.
    pub line: usize,
    /// Command word.
    pub command: &'static str,
    /// Path or pattern argument, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    /// What the command produced.
    pub output: Output,
}

/// Parse every line of a script, failing on the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<(usize, ScriptCommand)>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(command) = ScriptCommand::parse(idx + 1, line)? {
            commands.push((idx + 1, command));
        }
    }
    Ok(commands)
}

/// Read a script from disk.
pub fn load_script(path: &Path) -> Result<String, ScriptError> {
    fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse and run a whole script against `ns`.
///
/// Parsing happens up front, so a malformed script runs nothing.
pub fn run_script(ns: &mut Namespace, source: &str) -> Result<Vec<Record>, ScriptError> {
    let commands = parse_script(source)?;
    tracing::debug!(commands = commands.len(), "running script");

    Ok(commands
        .into_iter()
        .map(|(line, command)| Record {
            line,
            command: command.name(),
            argument: command.argument().map(str::to_string),
            output: command.execute(ns),
        })
        .collect())
}
