//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::{Result, bail};
use std::io::BufRead;
use std::path::Path;

use super::Commands;
use super::args::{AddArgs, DeleteArgs, GroupsArgs, InitArgs, ListArgs, ShowArgs, UpdateArgs};
use crate::app::App;
use crate::domain::groups::search_groups;
use crate::error::Error;
use crate::output::{self, OutputMode};

/// Run a command that operates on the employee store.
///
/// `input` supplies answers to confirmation prompts.
pub(crate) async fn run(
    app: &mut App,
    command: &Commands,
    output_mode: OutputMode,
    input: &mut dyn BufRead,
) -> Result<()> {
    match command {
        Commands::Init(args) => execute_init(args, &std::env::current_dir()?).await,
        Commands::List(args) => execute_list(app, args, output_mode).await,
        Commands::Show(args) => execute_show(app, args, output_mode).await,
        Commands::Add(args) => execute_add(app, args, output_mode).await,
        Commands::Update(args) => execute_update(app, args, output_mode).await,
        Commands::Delete(args) => execute_delete(app, args, output_mode, input).await,
        Commands::Groups(args) => execute_groups(app, args, output_mode).await,
        Commands::Shell => bail!("Already in an interactive shell"),
    }
}

/// Execute the init command
pub async fn execute_init(args: &InitArgs, base_dir: &Path) -> Result<()> {
    use crate::commands::init;

    let path = init::init(base_dir, args.force).await?;
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}

/// Execute the list command
pub async fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let paging = &app.config().paging;
    if let Some(size) = args.page_size {
        paging.check_page_size(size).map_err(Error::from)?;
    }
    let request = args.page_request(paging.default_page_size);

    let page = app.storage().query(&args.criteria(), &request).await?;
    output::print_page(&page, output_mode)?;

    Ok(())
}

/// Execute the show command
pub async fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let employee = app
        .storage()
        .get(args.id)
        .await?
        .ok_or(Error::NotFound(args.id))?;

    output::print_employee(&employee, output_mode)?;

    Ok(())
}

/// Execute the add command
pub async fn execute_add(app: &mut App, args: &AddArgs, output_mode: OutputMode) -> Result<()> {
    let mut new_employee = args.to_new_employee(chrono::Utc::now());
    new_employee.group = resolve_group(app, &new_employee.group).await?;

    let employee = app.storage_mut().create(new_employee).await?;

    match output_mode {
        OutputMode::Json => output::print_employee(&employee, output_mode)?,
        OutputMode::Text => {
            println!(
                "{} employee #{}: {}",
                output::success("Added", &output::OutputConfig::from_env()),
                employee.id,
                employee.full_name()
            );
        }
    }

    Ok(())
}

/// Execute the update command
///
/// Only the fields given on the command line change; the record is
/// validated as a whole before anything is written.
pub async fn execute_update(
    app: &mut App,
    args: &UpdateArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let mut patch = args.to_update();
    if patch.is_empty() {
        bail!("Nothing to update. Pass at least one field, e.g. --status inactive");
    }

    if let Some(group) = patch.group.take() {
        patch.group = Some(resolve_group(app, &group).await?);
    }

    let employee = app.storage_mut().update(args.id, patch).await?;

    match output_mode {
        OutputMode::Json => output::print_employee(&employee, output_mode)?,
        OutputMode::Text => {
            println!(
                "{} employee #{}",
                output::success("Updated", &output::OutputConfig::from_env()),
                employee.id
            );
        }
    }

    Ok(())
}

/// Execute the delete command
pub async fn execute_delete(
    app: &mut App,
    args: &DeleteArgs,
    output_mode: OutputMode,
    input: &mut dyn BufRead,
) -> Result<()> {
    // Verify the employee exists first
    let employee = app
        .storage()
        .get(args.id)
        .await?
        .ok_or(Error::NotFound(args.id))?;

    // Confirm deletion unless --force is used
    if !args.force {
        eprint!(
            "Delete employee #{} ({})? [y/N]: ",
            employee.id,
            employee.full_name()
        );
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !is_yes(&answer) {
            let config = output::OutputConfig::from_env();
            output::print_message(&output::warning("Deletion cancelled.", &config))?;
            return Ok(());
        }
    }

    if !app.storage_mut().delete(args.id).await? {
        return Err(Error::NotFound(args.id).into());
    }

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "deleted": args.id,
                "status": "success"
            }))?;
        }
        OutputMode::Text => {
            println!("Deleted employee #{}", args.id);
        }
    }

    Ok(())
}

/// Execute the groups command
pub async fn execute_groups(app: &App, args: &GroupsArgs, output_mode: OutputMode) -> Result<()> {
    let groups = app.storage().groups().await?;
    let matching = search_groups(&groups, args.search.as_deref().unwrap_or_default());

    output::print_groups(&matching, output_mode)?;

    Ok(())
}

/// Use the reference spelling of a known group; other names are kept as typed.
async fn resolve_group(app: &App, name: &str) -> Result<String> {
    let name = name.trim();
    let groups = app.storage().groups().await?;

    match groups.iter().find(|g| g.eq_ignore_ascii_case(name)) {
        Some(group) => Ok(group.clone()),
        None => {
            tracing::debug!(group = name, "group is not in the reference list");
            Ok(name.to_string())
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
