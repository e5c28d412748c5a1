use anyhow::Context;
use risk_client::AnalysisClient;
use risk_core::ProjectId;
use risk_session::{PollOutcome, poll_until_ready};

use crate::cli::{AnalyzeArgs, GlobalFlags, OutputFormat};

pub async fn handle(
    client: &AnalysisClient,
    args: &AnalyzeArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = ProjectId::parse(&args.project)
        .with_context(|| format!("invalid project '{}'", args.project))?;

    client
        .analyze(&project)
        .await
        .with_context(|| format!("analysis request for {project} failed"))?;

    if !flags.quiet && flags.format == OutputFormat::Text {
        println!("analysis requested for {project}");
    }

    if args.wait {
        match poll_until_ready(client, &project, client.policy()).await {
            PollOutcome::Ready { iterations } => match flags.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "project": project.full_name(),
                        "ready": true,
                        "iterations": iterations,
                    })
                ),
                OutputFormat::Text => println!("analysis ready for {project}"),
            },
            PollOutcome::GaveUp { iterations } => {
                anyhow::bail!(
                    "analysis of {project} not ready after {iterations} polls; try again later"
                );
            }
        }
    }
    Ok(())
}
