mod args;
mod print;

use args::{Cli, Commands, SortArg};
use clap::Parser;
use directories::ProjectDirs;
use print::{print_config, print_messages, print_todos, print_welcome};
use std::path::PathBuf;
use todoz::api::{ConfigAction, SortKey, TodoApi, TodoFilter, TodoUpdate, TodozPaths};
use todoz::deadline;
use todoz::error::{Result, TodoError};
use todoz::index::TodoSelector;
use todoz::model::Priority;
use todoz::store::fs::FileStore;

struct AppContext {
    api: TodoApi<FileStore>,
}

/// Parses the command line, installs logging and dispatches.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { open, done }) => {
            let filter = if open {
                TodoFilter::Open
            } else if done {
                TodoFilter::Done
            } else {
                TodoFilter::All
            };
            handle_list(&ctx, filter)
        }
        Some(Commands::Add {
            name,
            priority,
            deadline,
        }) => handle_add(&mut ctx, name, priority, deadline),
        Some(Commands::Edit {
            index,
            name,
            priority,
            deadline,
            no_deadline,
        }) => handle_edit(&mut ctx, index, name, priority, deadline, no_deadline),
        Some(Commands::Done { indexes }) => handle_done(&mut ctx, indexes),
        Some(Commands::Undone { indexes }) => handle_undone(&mut ctx, indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Sort { by }) => handle_sort(&mut ctx, by),
        Some(Commands::User { name }) => handle_user(&mut ctx, name),
        Some(Commands::CheckName { name }) => handle_check_name(&ctx, name),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, TodoFilter::All),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Opt-in via RUST_LOG; an unusable filter is ignored rather than fatal.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new(if verbose { "todoz=debug" } else { "off" }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let store = FileStore::new(data_dir.clone());
    let api = TodoApi::open(store, TodozPaths { data_dir })?;
    Ok(AppContext { api })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            TodoError::Store("Could not determine a data directory; set TODOZ_HOME".to_string())
        })
}

/// Re-renders the whole list after a command so the screen always reflects
/// what was just stored.
fn render_list(ctx: &AppContext, filter: TodoFilter) -> Result<()> {
    let result = ctx.api.list_todos(filter)?;
    let date_format = ctx.api.config()?.date_format;
    if let Some(welcome) = &result.welcome {
        print_welcome(welcome);
    }
    print_todos(
        &result.listed_todos,
        filter != TodoFilter::All,
        &date_format,
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: TodoFilter) -> Result<()> {
    render_list(ctx, filter)
}

fn handle_add(
    ctx: &mut AppContext,
    name: Vec<String>,
    priority: Option<u8>,
    deadline: Option<String>,
) -> Result<()> {
    let name = name.join(" ");
    let priority = priority.map(Priority::new).transpose()?;
    let deadline = match deadline {
        Some(raw) => deadline::parse_input(&raw)?,
        None => None,
    };

    let result = ctx.api.add_todo(&name, priority, deadline)?;
    print_messages(&result.messages);
    render_list(ctx, TodoFilter::All)
}

fn handle_edit(
    ctx: &mut AppContext,
    index: String,
    name: Option<String>,
    priority: Option<u8>,
    deadline: Option<String>,
    no_deadline: bool,
) -> Result<()> {
    let selector: TodoSelector = index.parse().map_err(TodoError::Api)?;
    let mut update = TodoUpdate::new(selector);
    if let Some(name) = name {
        update = update.name(name);
    }
    if let Some(p) = priority {
        update = update.priority(Priority::new(p)?);
    }
    if no_deadline {
        update = update.deadline(None);
    } else if let Some(raw) = deadline {
        update = update.deadline(deadline::parse_input(&raw)?);
    }

    let result = ctx.api.update_todos(&[update])?;
    print_messages(&result.messages);
    render_list(ctx, TodoFilter::All)
}

fn handle_done(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.complete_todos(indexes.as_slice())?;
    print_messages(&result.messages);
    render_list(ctx, TodoFilter::All)
}

fn handle_undone(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.reopen_todos(indexes.as_slice())?;
    print_messages(&result.messages);
    render_list(ctx, TodoFilter::All)
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_todos(indexes.as_slice())?;
    print_messages(&result.messages);
    render_list(ctx, TodoFilter::All)
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_completed()?;
    print_messages(&result.messages);
    render_list(ctx, TodoFilter::All)
}

fn handle_sort(ctx: &mut AppContext, by: SortArg) -> Result<()> {
    let key = match by {
        SortArg::Priority => SortKey::Priority,
        SortArg::Deadline => SortKey::Deadline,
    };
    let result = ctx.api.sort_todos(key)?;
    print_messages(&result.messages);
    render_list(ctx, TodoFilter::All)
}

fn handle_user(ctx: &mut AppContext, name: Option<String>) -> Result<()> {
    let result = match name {
        Some(name) => ctx.api.rename_user(name)?,
        None => ctx.api.user_name()?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_check_name(ctx: &AppContext, name: Vec<String>) -> Result<()> {
    let result = ctx.api.check_name(&name.join(" "));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.configure(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
