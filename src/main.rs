//! # task-cli - Personal Task Tracker
//!
//! A minimal command-line task tracker backed by a single local JSON file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! task-cli add "Write the quarterly report"
//!
//! # List everything, or just one status
//! task-cli list
//! task-cli list in-progress
//!
//! # Move a task along
//! task-cli mark-in-progress 1
//! task-cli mark-done 1
//!
//! # Edit or remove
//! task-cli update 1 "Write and send the quarterly report"
//! task-cli delete 1
//! ```
//!
//! Tasks are stored in `~/.tasks.json` by default; pass `--file <path>` to
//! keep a task list anywhere else (for example per project). The file is a
//! plain pretty-printed JSON array, friendly to version control and to being
//! poked at with `jq`.
//!
//! The tool is deliberately single-user and single-process: every command
//! loads the whole file, mutates in memory, and rewrites the file. There is
//! no locking; two simultaneous invocations can lose one side's write.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use store::Error;
use task::Status;

fn main() {
    let cli = Cli::parse();

    // Resolve the store path once; everything downstream takes it explicitly.
    let path = cli.file.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".tasks.json")
    });

    let result = match cli.command {
        Commands::Add { description } => cmd_add(&path, description),
        Commands::List { status } => cmd_list(&path, status),
        Commands::Update { id, description } => cmd_update(&path, id, description),
        Commands::Delete { id } => cmd_delete(&path, id),
        Commands::MarkInProgress { id } => cmd_set_status(&path, id, Status::InProgress),
        Commands::MarkDone { id } => cmd_set_status(&path, id, Status::Done),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => {}
        // A missing task is a user-facing message, not a failure.
        Err(Error::NotFound { id }) => println!("Task with ID {id} not found."),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
