use anyhow::Context;
use risk_client::AnalysisClient;
use risk_core::ProjectId;
use risk_session::ProjectSelectionCoordinator;

use crate::cli::{GlobalFlags, OutputFormat, SelectArgs};

pub async fn handle(
    client: AnalysisClient,
    args: &SelectArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = ProjectId::parse(&args.project)
        .with_context(|| format!("invalid project '{}'", args.project))?;

    let mut coordinator = ProjectSelectionCoordinator::new(client);
    let outcome = coordinator.select(project.clone()).await;

    if !outcome.backend_synced {
        anyhow::bail!("backend did not acknowledge selection of {project}");
    }

    match flags.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "selected": project.full_name(),
                "generation": outcome.token.generation.value(),
            })
        ),
        OutputFormat::Text => {
            if !flags.quiet {
                println!("selected {project}");
            }
        }
    }
    Ok(())
}
