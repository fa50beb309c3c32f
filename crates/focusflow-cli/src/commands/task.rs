//! Task management commands.

use chrono::{Local, Utc};
use clap::Subcommand;
use focusflow_core::task::{next_reminder_time, Category, Priority, Subtask, Task, TaskStore};
use focusflow_core::Store;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Category: work, personal or shopping
        #[arg(long, default_value = "work")]
        category: String,
        /// Priority: low, mid or high
        #[arg(long, default_value = "mid")]
        priority: String,
        /// Arm a reminder at HH:MM (today, or tomorrow if already past)
        #[arg(long)]
        remind_at: Option<String>,
    },
    /// List tasks
    List {
        /// Only tasks that are not completed
        #[arg(long)]
        active: bool,
    },
    /// Get task details
    Show {
        /// Task ID
        id: String,
    },
    /// Toggle completion
    Toggle {
        /// Task ID
        id: String,
    },
    /// Rename a task
    Title {
        /// Task ID
        id: String,
        /// New title
        title: String,
    },
    /// Change priority
    Priority {
        /// Task ID
        id: String,
        /// New priority: low, mid or high
        priority: String,
    },
    /// Change category
    Category {
        /// Task ID
        id: String,
        /// New category: work, personal or shopping
        category: String,
    },
    /// Add a subtask
    SubtaskAdd {
        /// Task ID
        id: String,
        /// Subtask text
        text: String,
    },
    /// Toggle a subtask
    SubtaskToggle {
        /// Task ID
        id: String,
        /// Subtask ID
        subtask_id: String,
    },
    /// Arm a reminder at HH:MM (today, or tomorrow if already past)
    Remind {
        /// Task ID
        id: String,
        /// Wall-clock time as HH:MM
        time: String,
    },
    /// Disarm the reminder
    ClearReminder {
        /// Task ID
        id: String,
    },
}

fn parse_priority(s: &str) -> Result<Priority, Box<dyn std::error::Error>> {
    match s {
        "low" => Ok(Priority::Low),
        "mid" => Ok(Priority::Mid),
        "high" => Ok(Priority::High),
        other => Err(format!("unknown priority: {other} (expected low, mid or high)").into()),
    }
}

fn parse_category(s: &str) -> Result<Category, Box<dyn std::error::Error>> {
    match s {
        "work" => Ok(Category::Work),
        "personal" => Ok(Category::Personal),
        "shopping" => Ok(Category::Shopping),
        other => {
            Err(format!("unknown category: {other} (expected work, personal or shopping)").into())
        }
    }
}

fn parse_clock(s: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got '{s}'"))?;
    Ok((h.parse()?, m.parse()?))
}

fn reminder_trigger(
    time: &str,
) -> Result<chrono::DateTime<Utc>, Box<dyn std::error::Error>> {
    let (hour, minute) = parse_clock(time)?;
    next_reminder_time(hour, minute, Local::now())
        .ok_or_else(|| format!("invalid reminder time: {time}").into())
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = super::require_session(&store)?;
    let tasks = TaskStore::new(&store);

    match action {
        TaskAction::Add {
            title,
            category,
            priority,
            remind_at,
        } => {
            let reminder_time = remind_at.as_deref().map(reminder_trigger).transpose()?;
            let task = Task {
                id: Uuid::new_v4().to_string(),
                title,
                category: parse_category(&category)?,
                priority: parse_priority(&priority)?,
                completed: false,
                subtasks: Vec::new(),
                reminder: reminder_time.is_some(),
                reminder_time,
                created_at: Utc::now(),
            };
            tasks.add_task(&user.id, task.clone())?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { active } => {
            let all_tasks = tasks.list_tasks(&user.id)?;
            let filtered: Vec<_> = all_tasks
                .into_iter()
                .filter(|task| !active || !task.completed)
                .collect();
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        TaskAction::Show { id } => {
            let all_tasks = tasks.list_tasks(&user.id)?;
            match all_tasks.iter().find(|t| t.id == id) {
                Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
                None => println!("Task not found: {id}"),
            }
        }
        TaskAction::Toggle { id } => {
            let task = tasks
                .update_task(&user.id, &id, |t| t.completed = !t.completed)?
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Title { id, title } => {
            let task = tasks
                .update_task(&user.id, &id, |t| t.title = title)?
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Priority { id, priority } => {
            let priority = parse_priority(&priority)?;
            let task = tasks
                .update_task(&user.id, &id, |t| t.priority = priority)?
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Category { id, category } => {
            let category = parse_category(&category)?;
            let task = tasks
                .update_task(&user.id, &id, |t| t.category = category)?
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::SubtaskAdd { id, text } => {
            let subtask = Subtask {
                id: Uuid::new_v4().to_string(),
                text,
                completed: false,
            };
            let task = tasks
                .update_task(&user.id, &id, |t| t.subtasks.push(subtask))?
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::SubtaskToggle { id, subtask_id } => {
            let mut found = false;
            let task = tasks
                .update_task(&user.id, &id, |t| {
                    if let Some(st) = t.subtasks.iter_mut().find(|s| s.id == subtask_id) {
                        st.completed = !st.completed;
                        found = true;
                    }
                })?
                .ok_or(format!("Task not found: {id}"))?;
            if !found {
                return Err(format!("Subtask not found: {subtask_id}").into());
            }
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Remind { id, time } => {
            let trigger = reminder_trigger(&time)?;
            let task = tasks
                .update_task(&user.id, &id, |t| {
                    t.reminder = true;
                    t.reminder_time = Some(trigger);
                })?
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::ClearReminder { id } => {
            let task = tasks
                .update_task(&user.id, &id, |t| {
                    t.reminder = false;
                    t.reminder_time = None;
                })?
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
    }
    Ok(())
}
