//! Section reports over the selected project's analysis payload.
//!
//! Every number printed here has passed the validation layer; anything
//! that did not renders as the literal `unavailable` with its reason.

use anyhow::Context;
use risk_client::endpoints::{SELECTED, Section};
use risk_client::wire::{AnalysisPayload, SelectedProjectResponse};
use risk_client::{AnalysisClient, ProjectContextValidator};
use risk_core::signals::{HotspotClass, TemporalHotspot};
use risk_core::{ProjectId, Provenance};
use risk_metrics::{
    UNAVAILABLE, baseline_multiplier, filter_by_path, fragility_score, fragility_trajectory, rank,
    validate_outcome, validate_scalar, velocity_acceleration, vulnerability_insight,
};

use crate::cli::{GlobalFlags, OutputFormat, ReportArgs};

pub async fn handle(
    client: &AnalysisClient,
    args: &ReportArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = fetch_payload(client, args).await?;
    if !payload.selected {
        anyhow::bail!("no project selected; run `rsf select <owner/name>` first");
    }
    let project = payload
        .embedded_project()
        .map(str::to_string)
        .unwrap_or_else(|| "(unknown)".to_string());
    let analysis = payload.analysis.unwrap_or_default();

    let report = build_report(args.section, &analysis, args.path.as_deref());
    match flags.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "project": project,
                "section": args.section.as_str(),
                "report": report,
            }))?
        ),
        OutputFormat::Text => {
            println!("{project} — {}", args.section);
            print_text(&report, 0);
        }
    }
    Ok(())
}

/// Fetch the selected-project payload. With `--project` the payload's
/// embedded identity is validated against it, re-fetching a bounded
/// number of times while the backend converges.
async fn fetch_payload(
    client: &AnalysisClient,
    args: &ReportArgs,
) -> anyhow::Result<SelectedProjectResponse> {
    if let Some(expected) = args.project.as_deref() {
        let expected =
            ProjectId::parse(expected).with_context(|| format!("invalid project '{expected}'"))?;
        let validator = ProjectContextValidator::new(client.policy());
        return validator
            .fetch_selected(client, &expected)
            .await
            .with_context(|| format!("could not obtain a payload for {expected}"));
    }
    client
        .fetch::<SelectedProjectResponse>(SELECTED)
        .await
        .into_result()
        .map_err(|reason| anyhow::anyhow!("failed to fetch selected project: {reason}"))
}

fn build_report(
    section: Section,
    analysis: &AnalysisPayload,
    path_filter: Option<&str>,
) -> serde_json::Value {
    match section {
        Section::Topology | Section::Impact | Section::Dependencies => {
            dependency_report(analysis)
        }
        Section::Temporal | Section::Concentration => temporal_report(analysis, path_filter),
        Section::Trajectory | Section::Predictions => trajectory_report(analysis),
    }
}

fn dependency_report(analysis: &AnalysisPayload) -> serde_json::Value {
    let Some(deps) = analysis.deps.as_ref().filter(|d| d.available) else {
        let reason = analysis
            .deps
            .as_ref()
            .and_then(|d| d.reason.clone())
            .unwrap_or_else(|| "no dependency analysis in payload".to_string());
        return unavailable_section(&reason);
    };

    let mut nodes: Vec<serde_json::Value> = deps
        .nodes
        .iter()
        .map(|node| {
            let fragility = validate_scalar(
                Some(fragility_score(node)),
                Provenance::GraphDerived,
                None,
            );
            serde_json::json!({
                "id": node.id,
                "fanIn": node.fan_in,
                "fanOut": node.fan_out,
                "fragility": fragility,
            })
        })
        .collect();
    nodes.sort_by(|a, b| {
        let score = |v: &serde_json::Value| {
            v["fragility"]["value"].as_f64().unwrap_or(f64::NEG_INFINITY)
        };
        score(b).total_cmp(&score(a))
    });

    let insight = match vulnerability_insight(&deps.nodes, &deps.links) {
        Some(insight) => serde_json::json!(insight),
        None => unavailable_section("insufficient dependency data"),
    };

    serde_json::json!({
        "available": true,
        "nodes": nodes,
        "insight": insight,
    })
}

fn temporal_report(analysis: &AnalysisPayload, path_filter: Option<&str>) -> serde_json::Value {
    let Some(temporal) = analysis.temporal.as_ref().filter(|t| t.available) else {
        let reason = analysis
            .temporal
            .as_ref()
            .and_then(|t| t.reason.clone())
            .unwrap_or_else(|| "no temporal analysis in payload".to_string());
        return unavailable_section(&reason);
    };

    let mut hotspots = temporal.temporal_hotspots.clone();
    rank(&mut hotspots);
    let selected: Vec<&TemporalHotspot> = match path_filter {
        Some(needle) => filter_by_path(&hotspots, needle),
        None => hotspots.iter().collect(),
    };

    let entries: Vec<serde_json::Value> = selected
        .iter()
        .map(|hotspot| {
            let multiplier = validate_outcome(
                baseline_multiplier(hotspot, temporal.median_frequency),
                Provenance::CommitHistory,
            );
            serde_json::json!({
                "path": hotspot.path,
                "severity": hotspot.severity_score,
                "classification": class_name(hotspot.classification),
                "commitCount": hotspot.commit_count,
                "baselineMultiplier": multiplier,
            })
        })
        .collect();

    serde_json::json!({
        "available": true,
        "medianFrequency": temporal.median_frequency,
        "windowDays": temporal.window_days,
        "hotspots": entries,
    })
}

fn trajectory_report(analysis: &AnalysisPayload) -> serde_json::Value {
    let series = analysis.commit_series.as_deref().unwrap_or(&[]);

    let trajectory = validate_outcome(fragility_trajectory(series), Provenance::CommitHistory);
    let velocity = validate_outcome(velocity_acceleration(series), Provenance::CommitHistory);

    serde_json::json!({
        "points": series.len(),
        "trajectory": trajectory,
        "velocity": velocity,
    })
}

fn unavailable_section(reason: &str) -> serde_json::Value {
    serde_json::json!({
        "available": false,
        "value": UNAVAILABLE,
        "reason": reason,
    })
}

const fn class_name(class: HotspotClass) -> &'static str {
    match class {
        HotspotClass::Burst => "burst",
        HotspotClass::Drift => "drift",
    }
}

/// Minimal indented text rendering of the report value.
fn print_text(value: &serde_json::Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                if child.is_object() || child.is_array() {
                    println!("{pad}{key}:");
                    print_text(child, depth + 1);
                } else {
                    println!("{pad}{key}: {child}");
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                println!("{pad}-");
                print_text(item, depth + 1);
            }
        }
        other => println!("{pad}{other}"),
    }
}
