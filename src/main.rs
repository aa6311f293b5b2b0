//! treefs - an in-memory hierarchical namespace.
//!
//! Usage:
//!   treefs demo              Run the guided walkthrough
//!   treefs run [SCRIPT]      Execute a command script (stdin when omitted)
//!   treefs --help            Show help

mod demo;
mod script;

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};

use treefs_core::{EntryKind, Namespace, NamespaceConfig, NodeSnapshot, TreeStats};

use crate::script::{Output, Record};

#[derive(Parser)]
#[command(
    name = "treefs",
    version,
    about = "An in-memory hierarchical namespace",
    long_about = "treefs models directory trees without touching disk.\n\n\
                  Run `treefs demo` for a walkthrough, or feed a script of \
                  mkdir/cd/pwd/ls/touch/exists/glob/tree/stats commands to \
                  `treefs run`."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the guided walkthrough
    Demo,

    /// Execute a command script
    Run {
        /// Script file (reads stdin when omitted)
        script: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write the final tree as JSON to this file
        #[arg(short, long)]
        export: Option<PathBuf>,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args)]
struct LimitArgs {
    /// Deepest level at which nodes may be created
    #[arg(long, default_value_t = treefs_core::DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Longest accepted name, in bytes
    #[arg(long, default_value_t = treefs_core::DEFAULT_MAX_NAME_LEN)]
    max_name_len: usize,

    /// Let patterns match files as well as directories
    #[arg(long)]
    match_files: bool,
}

impl LimitArgs {
    fn to_config(&self) -> Result<NamespaceConfig> {
        NamespaceConfig::builder()
            .max_depth(self.max_depth)
            .max_name_len(self.max_name_len)
            .match_files(self.match_files)
            .build()
            .context("Invalid namespace configuration")
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Demo => demo::run_demo(),
        Command::Run {
            script: script_path,
            format,
            export,
            limits,
        } => run(script_path, format, export, &limits)?,
    }

    Ok(())
}

/// Execute a script and report every command's result.
fn run(
    script_path: Option<PathBuf>,
    format: OutputFormat,
    export: Option<PathBuf>,
    limits: &LimitArgs,
) -> Result<()> {
    let source = match &script_path {
        Some(path) => script::load_script(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let mut ns = Namespace::with_config(limits.to_config()?);
    let records = script::run_script(&mut ns, &source)?;

    match format {
        OutputFormat::Text => {
            for record in &records {
                print_record(record);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    if let Some(output) = export {
        let json = serde_json::to_string_pretty(&ns.snapshot())?;
        std::fs::write(&output, json)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        eprintln!("Tree exported to {}", output.display());
    }

    Ok(())
}

fn print_record(record: &Record) {
    let label = match &record.argument {
        Some(arg) => format!("{} {arg}", record.command),
        None => record.command.to_string(),
    };

    match &record.output {
        Output::Status { ok } => {
            println!("{label}: {}", if *ok { "SUCCESS" } else { "FAILED" });
        }
        Output::Path { path } => println!("{path}"),
        Output::Names { names } => {
            println!("{label} ({} entries)", names.len());
            for name in names {
                println!("- {name}");
            }
        }
        Output::Tree(snapshot) => print_tree(snapshot),
        Output::Stats(stats) => print_stats(stats),
    }
}

/// Print a tree depth-first, children indented under their parent.
fn print_tree(root: &NodeSnapshot) {
    let mut pending = vec![(root, 0usize)];

    while let Some((node, depth)) = pending.pop() {
        let indent = "  ".repeat(depth);
        let suffix = match node.kind {
            EntryKind::Directory if node.name != treefs_core::ROOT_NAME => "/",
            _ => "",
        };
        println!("{indent}{}{suffix}", node.name);

        for child in node.children.iter().rev() {
            pending.push((child, depth + 1));
        }
    }
}

fn print_stats(stats: &TreeStats) {
    println!(
        "{} files, {} directories, max depth {}",
        stats.total_files, stats.total_dirs, stats.max_depth
    );
}
