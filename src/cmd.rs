//! Command implementations for the CLI interface.
//!
//! Each subcommand maps to one handler. Handlers load the store, mutate it
//! in memory, and rewrite the whole file on success; messaging for errors
//! and the exit code are decided by the caller in `main`.

use std::path::Path;

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::store::{Error, Store};
use crate::task::{Status, Task};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task description.
        description: String,
    },

    /// List tasks, optionally filtered by status.
    List {
        /// Status to filter by: new | in-progress | done | all.
        #[arg(default_value = "all")]
        status: String,
    },

    /// Replace a task's description.
    Update {
        /// Task ID to update.
        id: u64,
        /// New description.
        description: String,
    },

    /// Delete a task by ID.
    Delete {
        /// Task ID to delete.
        id: u64,
    },

    /// Mark a task in-progress.
    MarkInProgress {
        /// Task ID to mark.
        id: u64,
    },

    /// Mark a task done.
    MarkDone {
        /// Task ID to mark.
        id: u64,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a new task and report its id.
pub fn cmd_add(path: &Path, description: String) -> Result<(), Error> {
    let mut store = Store::load(path)?;
    let id = store.next_id();
    store.tasks.push(Task::new(id, description));
    store.save(path)?;
    println!("Task added successfully: {id}");
    Ok(())
}

/// List tasks matching a status filter ("all" matches everything).
pub fn cmd_list(path: &Path, status: String) -> Result<(), Error> {
    let store = Store::load(path)?;
    if store.tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    for task in filter_tasks(&store.tasks, &status) {
        println!("{}", render_task(task));
    }
    Ok(())
}

/// Replace the description of an existing task.
pub fn cmd_update(path: &Path, id: u64, description: String) -> Result<(), Error> {
    let mut store = Store::load(path)?;
    let Some(task) = store.get_mut(id) else {
        return Err(Error::NotFound { id });
    };
    task.description = description;
    task.touch();
    store.save(path)?;
    println!("Task updated successfully.");
    Ok(())
}

/// Delete a task by id, leaving the rest in order.
pub fn cmd_delete(path: &Path, id: u64) -> Result<(), Error> {
    let mut store = Store::load(path)?;
    if !store.remove(id) {
        return Err(Error::NotFound { id });
    }
    store.save(path)?;
    println!("Task deleted successfully.");
    Ok(())
}

/// Set a task's status. The status value comes from the subcommand, never
/// from user text.
pub fn cmd_set_status(path: &Path, id: u64, status: Status) -> Result<(), Error> {
    let mut store = Store::load(path)?;
    let Some(task) = store.get_mut(id) else {
        return Err(Error::NotFound { id });
    };
    task.status = status;
    task.touch();
    store.save(path)?;
    println!("Task status updated successfully.");
    Ok(())
}

/// Generate completions for the given shell on stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

/// Select tasks matching the filter, preserving store order.
///
/// An unrecognized status string is matched literally and simply selects
/// nothing.
pub fn filter_tasks<'a>(tasks: &'a [Task], status: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| status == "all" || t.status.as_str() == status)
        .collect()
}

/// Multi-line rendering of one task, one labelled field per line.
pub fn render_task(task: &Task) -> String {
    format!(
        "Task ID: {}\nDescription: {}\nCreated: {}\nUpdated: {}\nStatus: {}\n",
        task.task_id,
        task.description,
        task.create_time,
        task.update_time,
        task.status.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_tasks() -> Vec<Task> {
        let mut a = Task::new(1, "buy milk".into());
        a.status = Status::Done;
        let b = Task::new(2, "write report".into());
        let mut c = Task::new(3, "file taxes".into());
        c.status = Status::InProgress;
        vec![a, b, c]
    }

    #[test]
    fn filter_all_returns_everything_in_order() {
        let tasks = sample_tasks();
        let ids: Vec<u64> = filter_tasks(&tasks, "all").iter().map(|t| t.task_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filter_by_status_selects_subset() {
        let tasks = sample_tasks();
        let done: Vec<u64> = filter_tasks(&tasks, "done").iter().map(|t| t.task_id).collect();
        assert_eq!(done, vec![1]);
        let in_progress: Vec<u64> = filter_tasks(&tasks, "in-progress")
            .iter()
            .map(|t| t.task_id)
            .collect();
        assert_eq!(in_progress, vec![3]);
    }

    #[test]
    fn unknown_status_matches_nothing() {
        let tasks = sample_tasks();
        assert!(filter_tasks(&tasks, "blocked").is_empty());
    }

    #[test]
    fn render_includes_every_field() {
        let task = Task::new(7, "buy milk".into());
        let out = render_task(&task);
        assert!(out.contains("Task ID: 7"));
        assert!(out.contains("Description: buy milk"));
        assert!(out.contains(&format!("Created: {}", task.create_time)));
        assert!(out.contains(&format!("Updated: {}", task.update_time)));
        assert!(out.contains("Status: new"));
    }

    #[test]
    fn update_missing_id_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tasks.json");
        let mut store = Store::default();
        store.tasks.push(Task::new(1, "buy milk".into()));
        store.save(&path).unwrap();
        let before = fs::read(&path).unwrap();

        let err = cmd_update(&path, 99, "ignored".into()).unwrap_err();
        assert!(matches!(err, Error::NotFound { id: 99 }));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn delete_missing_id_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tasks.json");
        let mut store = Store::default();
        store.tasks.push(Task::new(1, "buy milk".into()));
        store.save(&path).unwrap();
        let before = fs::read(&path).unwrap();

        let err = cmd_delete(&path, 2).unwrap_err();
        assert!(matches!(err, Error::NotFound { id: 2 }));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn mark_done_mutates_status_and_update_time_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tasks.json");
        let mut store = Store::default();
        store.tasks.push(Task::new(1, "buy milk".into()));
        store.save(&path).unwrap();
        let created = store.tasks[0].create_time.clone();

        cmd_set_status(&path, 1, Status::Done).unwrap();

        let reloaded = Store::load(&path).unwrap();
        assert_eq!(reloaded.tasks[0].status, Status::Done);
        assert_eq!(reloaded.tasks[0].description, "buy milk");
        assert_eq!(reloaded.tasks[0].create_time, created);
    }

    #[test]
    fn add_assigns_sequential_ids_into_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tasks.json");
        cmd_add(&path, "first".into()).unwrap();
        cmd_add(&path, "second".into()).unwrap();
        cmd_add(&path, "third".into()).unwrap();

        let store = Store::load(&path).unwrap();
        let ids: Vec<u64> = store.tasks.iter().map(|t| t.task_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
