//! # Taskman CLI
//!
//! Command-line client for the task API: the terminal counterpart of the
//! task board. Each subcommand drives the same state containers a UI
//! would, then prints the refreshed list.

use anyhow::bail;
use clap::{Parser, Subcommand};
use taskman_client::http::TasksClient;
use taskman_client::state::{CreateDraft, EditDraft, TaskList};
use taskman_shared::models::task::{Task, TaskStatus};

#[derive(Parser, Debug)]
#[command(name = "taskman", version)]
#[command(about = "Task manager command-line client")]
struct Cli {
    /// Base URL of the task API
    #[arg(long, env = "TASKMAN_API_URL", default_value = "http://127.0.0.1:8800")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the current task list
    List,
    /// Create a task
    Add {
        /// Task title (required non-empty)
        #[arg(long)]
        title: String,
        /// Free-form details
        #[arg(long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        date: String,
        /// Mark the task completed immediately
        #[arg(long)]
        completed: bool,
    },
    /// Replace a task's fields
    Update {
        /// Id of the task to edit
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD, empty to clear)
        #[arg(long)]
        date: Option<String>,
        /// Flip the completion checkbox
        #[arg(long)]
        toggle: bool,
    },
    /// Delete a task (no confirmation)
    Delete {
        /// Id of the task to remove
        id: i64,
    },
    /// Check the API is reachable
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskman_client=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = TasksClient::new(&cli.api_url)?;
    let mut list = TaskList::new();

    match cli.command {
        Commands::List => {
            list.refresh(&client).await;
            print_tasks(&list.tasks);
        }
        Commands::Add {
            title,
            description,
            date,
            completed,
        } => {
            let mut draft = CreateDraft {
                title,
                description,
                status: if completed {
                    TaskStatus::Completed
                } else {
                    TaskStatus::Pending
                },
                date,
                ..Default::default()
            };

            if !draft.can_submit() {
                bail!("title must not be empty");
            }
            if !draft.submit(&client, &mut list).await {
                bail!("something went wrong creating the task");
            }

            print_tasks(&list.tasks);
        }
        Commands::Update {
            id,
            title,
            description,
            date,
            toggle,
        } => {
            list.refresh(&client).await;
            let Some(task) = list.find(id) else {
                bail!("no task with id {}", id);
            };

            let mut draft = EditDraft::open(task);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if toggle {
                draft.toggle_status();
            }

            if !draft.submit(&client, &mut list).await {
                bail!("something went wrong updating task {}", id);
            }

            print_tasks(&list.tasks);
        }
        Commands::Delete { id } => {
            list.delete(&client, id).await;
            print_tasks(&list.tasks);
        }
        Commands::Ping => {
            let greeting = client.hello().await?;
            println!("{}", greeting);
        }
    }

    Ok(())
}

fn print_tasks(tasks: &[Task]) {
    for task in tasks {
        let marker = match task.status {
            TaskStatus::Completed => "x",
            TaskStatus::Pending => " ",
        };
        let date = task
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "          ".to_string());

        match &task.description {
            Some(description) => {
                println!("[{}] {:>4}  {}  {}: {}", marker, task.id, date, task.title, description)
            }
            None => println!("[{}] {:>4}  {}  {}", marker, task.id, date, task.title),
        }
    }
}
