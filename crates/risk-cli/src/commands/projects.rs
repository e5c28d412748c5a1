use anyhow::Context;
use risk_client::AnalysisClient;

use crate::cli::{GlobalFlags, OutputFormat};

pub async fn handle(client: &AnalysisClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let projects = client
        .list_projects()
        .await
        .context("failed to list projects")?;

    match flags.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projects)?),
        OutputFormat::Text => {
            if projects.is_empty() {
                println!("no projects discovered");
                return Ok(());
            }
            for project in &projects {
                let language = project.language.as_deref().unwrap_or("-");
                println!(
                    "{:<40} {:<12} {language}",
                    project.id.full_name(),
                    project.analysis_state,
                );
            }
        }
    }
    Ok(())
}
