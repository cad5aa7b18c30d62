//! Cucumber Studio API CLI binary.
//!
//! A command-line interface for interacting with the Cucumber Studio API.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use studioapi::cli::{AttributeChanges, Cli, Command, FolderCommand, ProjectCommand, ScenarioCommand};
use studioapi::{
    Attributes, CreateParams, FolderScope, PrettyPrint, ProjectScope, Resource, ResourceId,
    ScenarioScope, StudioClient, StudioError, UpdateParams,
};
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client = match StudioClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Hint: Set CUCUMBER_STUDIO_ACCESS_TOKEN, CUCUMBER_STUDIO_CLIENT and CUCUMBER_STUDIO_UID"
            );
            return ExitCode::FAILURE;
        }
    };

    if let Some(project) = cli.project.as_deref() {
        client.set_project_id(Some(project));
    }

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let StudioError::ConfigMissing(_) = e {
                eprintln!("Hint: Pass --project <ID> or set CUCUMBER_STUDIO_PROJECT_ID");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &StudioClient, cli: Cli) -> studioapi::Result<()> {
    match cli.command {
        Command::Projects { command } => handle_projects(client, command, cli.json).await,
        Command::Folders { command } => handle_folders(client, command, cli.json).await,
        Command::Scenarios { command } => handle_scenarios(client, command, cli.json).await,
    }
}

async fn handle_projects(
    client: &StudioClient,
    command: ProjectCommand,
    json: bool,
) -> studioapi::Result<()> {
    match command {
        ProjectCommand::List => {
            let projects = client.list_projects().await?;
            output_list(&projects, json)?;
        }
        ProjectCommand::Get { id } => {
            let scope = ProjectScope {
                project_id: id.map(ResourceId::from),
            };
            let project = client.get_project(scope).await?;
            output_single(&project, json)?;
        }
        ProjectCommand::Find { name } => match client.find_project_id_by_name(&name).await? {
            Some(id) if json => println!("{}", serde_json::to_string_pretty(&id)?),
            Some(id) => println!("{id}"),
            None => {
                eprintln!("No project named '{name}'");
                if json {
                    println!("null");
                }
            }
        },
        ProjectCommand::Backup { all: true } => {
            let backups = client.list_project_backups(ProjectScope::default()).await?;
            output_list(&backups, json)?;
        }
        ProjectCommand::Backup { all: false } => {
            let backup = client.get_project_backup(ProjectScope::default()).await?;
            output_single(&backup, json)?;
        }
    }
    Ok(())
}

async fn handle_folders(
    client: &StudioClient,
    command: FolderCommand,
    json: bool,
) -> studioapi::Result<()> {
    match command {
        FolderCommand::List => {
            let folders = client.list_folders(ProjectScope::default()).await?;
            output_list(&folders, json)?;
        }
        FolderCommand::Get { id } => {
            let folder = client.get_folder(FolderScope::new(id)).await?;
            output_single(&folder, json)?;
        }
        FolderCommand::Children { id } => {
            let children = client.list_child_folders(FolderScope::new(id)).await?;
            output_list(&children, json)?;
        }
        FolderCommand::Scenarios { id } => {
            let scenarios = client.list_folder_scenarios(FolderScope::new(id)).await?;
            output_list(&scenarios, json)?;
        }
        FolderCommand::Create { name, parent } => {
            let mut params = CreateParams::named(name);
            if let Some(parent) = parent {
                params = params.with_parent(&ResourceId::from(parent));
            }
            let folder = client.create_folder(params).await?;
            output_single(&folder, json)?;
        }
        FolderCommand::Update { id, changes } => {
            let params = UpdateParams::new(id, changed_attributes(changes)?);
            let folder = client.update_folder(params).await?;
            output_single(&folder, json)?;
        }
        FolderCommand::Delete { id } => {
            let body = client.delete_folder(FolderScope::new(id)).await?;
            output_deleted(&body, json)?;
        }
        FolderCommand::DeleteChildren { id } => {
            let body = client.delete_child_folders(FolderScope::new(id)).await?;
            output_deleted(&body, json)?;
        }
        FolderCommand::Clear { id } => {
            let body = client.clear_folder_scenarios(FolderScope::new(id)).await?;
            output_deleted(&body, json)?;
        }
    }
    Ok(())
}

async fn handle_scenarios(
    client: &StudioClient,
    command: ScenarioCommand,
    json: bool,
) -> studioapi::Result<()> {
    match command {
        ScenarioCommand::List => {
            let scenarios = client.list_scenarios(ProjectScope::default()).await?;
            output_list(&scenarios, json)?;
        }
        ScenarioCommand::Get { id } => {
            let scenario = client.get_scenario(ScenarioScope::new(id)).await?;
            output_single(&scenario, json)?;
        }
        ScenarioCommand::Create {
            name,
            folder,
            description,
        } => {
            let mut params = CreateParams::named(name);
            if let Some(folder) = folder {
                params = params.in_folder(&ResourceId::from(folder));
            }
            if let Some(description) = description {
                params = params.with_attribute("description", description);
            }
            let scenario = client.create_scenario(params).await?;
            output_single(&scenario, json)?;
        }
        ScenarioCommand::Update { id, changes } => {
            let params = UpdateParams::new(id, changed_attributes(changes)?);
            let scenario = client.update_scenario(params).await?;
            output_single(&scenario, json)?;
        }
        ScenarioCommand::Delete { id } => {
            let body = client.delete_scenario(ScenarioScope::new(id)).await?;
            output_deleted(&body, json)?;
        }
    }
    Ok(())
}

fn changed_attributes(changes: AttributeChanges) -> studioapi::Result<Attributes> {
    if changes.is_empty() {
        return Err(StudioError::Validation(
            "nothing to update: pass --name and/or --description".to_string(),
        ));
    }

    let mut attributes = Attributes::new();
    if let Some(name) = changes.name {
        attributes.insert("name".to_string(), Value::String(name));
    }
    if let Some(description) = changes.description {
        attributes.insert("description".to_string(), Value::String(description));
    }
    Ok(attributes)
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> studioapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list(resources: &[Resource], json: bool) -> studioapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(resources)?);
    } else {
        let rows: Vec<ResourceRow> = resources.iter().map(ResourceRow::from).collect();
        println!("{}", Table::new(rows));
        println!("\n{} item(s)", resources.len());
    }
    Ok(())
}

fn output_deleted(body: &Value, json: bool) -> studioapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(body)?);
    } else {
        println!("Deleted");
    }
    Ok(())
}

// Table row type for non-JSON output

#[derive(Tabled)]
struct ResourceRow {
    id: String,
    #[tabled(rename = "type")]
    resource_type: String,
    name: String,
    folder: String,
}

impl From<&Resource> for ResourceRow {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id.to_string(),
            resource_type: r.resource_type.to_string(),
            name: r.name().unwrap_or_default().to_string(),
            folder: r.folder_id().map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}
