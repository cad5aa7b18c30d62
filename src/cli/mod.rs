//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the studioapi binary.

use clap::{Args, Parser, Subcommand};

/// Cucumber Studio API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "studioapi", about = "Cucumber Studio API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Project to operate on (overrides CUCUMBER_STUDIO_PROJECT_ID).
    #[arg(long, short = 'p', global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Projects and their backups.
    #[command(visible_alias = "project")]
    Projects {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    /// Folders, their sub-folders and scenarios.
    #[command(visible_alias = "folder")]
    Folders {
        #[command(subcommand)]
        command: FolderCommand,
    },

    /// Scenarios.
    #[command(visible_alias = "scenario")]
    Scenarios {
        #[command(subcommand)]
        command: ScenarioCommand,
    },
}

/// `projects` subcommands.
#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// List all projects.
    List,

    /// Show one project (defaults to the selected project).
    Get {
        /// Project ID.
        id: Option<String>,
    },

    /// Print the ID of the first project with this exact name.
    Find {
        /// Project name.
        name: String,
    },

    /// Show the last backup of the selected project.
    Backup {
        /// List every backup instead of only the last one.
        #[arg(long)]
        all: bool,
    },
}

/// `folders` subcommands.
#[derive(Subcommand, Debug)]
pub enum FolderCommand {
    /// List all folders of the project.
    List,

    /// Show one folder.
    Get {
        /// Folder ID.
        id: String,
    },

    /// List the sub-folders of a folder.
    Children {
        /// Folder ID.
        id: String,
    },

    /// List the scenarios inside a folder.
    Scenarios {
        /// Folder ID.
        id: String,
    },

    /// Create a folder.
    Create {
        /// Folder name.
        name: String,

        /// Parent folder ID.
        #[arg(long)]
        parent: Option<String>,
    },

    /// Update a folder.
    Update {
        /// Folder ID.
        id: String,

        #[command(flatten)]
        changes: AttributeChanges,
    },

    /// Delete a folder.
    Delete {
        /// Folder ID.
        id: String,
    },

    /// Delete every sub-folder of a folder.
    DeleteChildren {
        /// Folder ID.
        id: String,
    },

    /// Delete every scenario inside a folder.
    Clear {
        /// Folder ID.
        id: String,
    },
}

/// `scenarios` subcommands.
#[derive(Subcommand, Debug)]
pub enum ScenarioCommand {
    /// List all scenarios of the project.
    List,

    /// Show one scenario.
    Get {
        /// Scenario ID.
        id: String,
    },

    /// Create a scenario.
    Create {
        /// Scenario name.
        name: String,

        /// Folder to create the scenario in.
        #[arg(long)]
        folder: Option<String>,

        /// Scenario description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a scenario.
    Update {
        /// Scenario ID.
        id: String,

        #[command(flatten)]
        changes: AttributeChanges,
    },

    /// Delete a scenario.
    Delete {
        /// Scenario ID.
        id: String,
    },
}

/// Attribute values accepted by `update` commands.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeChanges {
    /// New name.
    #[arg(long)]
    pub name: Option<String>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,
}

impl AttributeChanges {
    /// Whether no attribute was given.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
