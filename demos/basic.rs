//! Basic example demonstrating the Cucumber Studio API client.
//!
//! Run with:
//! ```
//! CUCUMBER_STUDIO_ACCESS_TOKEN=... CUCUMBER_STUDIO_CLIENT=... \
//! CUCUMBER_STUDIO_UID=you@example.com cargo run --example basic
//! ```

use studioapi::{CreateParams, FolderScope, ProjectScope, ScenarioScope, StudioClient};

#[tokio::main]
async fn main() -> studioapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Cucumber Studio client...");
    let mut client = StudioClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Listing Projects ---");
    let projects = client.list_projects().await?;
    println!("Found {} projects", projects.len());
    for project in &projects {
        println!("  - {} ({})", project.name().unwrap_or("<unnamed>"), project.id);
    }

    // Work in the first project unless one was configured
    if client.project_id().is_none() {
        let Some(first) = projects.first() else {
            println!("\nNo projects to work with.");
            return Ok(());
        };
        client.set_project_id(Some(first.id.clone()));
    }

    println!("\n--- Folders ---");
    let folders = client.list_folders(ProjectScope::default()).await?;
    for folder in &folders {
        let scenarios = client
            .list_folder_scenarios(FolderScope::new(folder.id.clone()))
            .await?;
        println!(
            "  - {} ({} scenarios)",
            folder.name().unwrap_or("<unnamed>"),
            scenarios.len()
        );
    }

    // Create a throwaway scenario in the root folder, then remove it
    let root = folders.iter().find(|f| f.folder_id().is_none());
    if let Some(root) = root {
        println!("\n--- Scenario Round Trip ---");
        let created = client
            .create_scenario(CreateParams::named("Example scenario").in_folder(&root.id))
            .await?;
        println!("Created scenario {}", created.id);

        client
            .delete_scenario(ScenarioScope::new(created.id.clone()))
            .await?;
        println!("Deleted scenario {}", created.id);
    }

    println!("\nDone!");
    Ok(())
}
