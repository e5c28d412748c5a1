//! Bounded analysis-completion polling.
//!
//! After requesting analysis the backend works asynchronously; the client
//! polls the project listing until the project reports `ready`. The loop
//! has a hard iteration ceiling so a stuck analysis surfaces as a give-up
//! instead of polling forever.

use std::time::Duration;

use risk_client::AnalysisClient;
use risk_config::FetchConfig;
use risk_core::{AnalysisState, ProjectId};

/// Terminal state of a polling loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The project reached `ready` within the budget.
    Ready { iterations: u32 },
    /// The iteration ceiling was exhausted without reaching `ready`.
    GaveUp { iterations: u32 },
}

impl PollOutcome {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Poll the project listing until `project` reports `ready`.
///
/// Listing failures and a missing project both count as a not-ready
/// iteration: the analysis may still be registering. The loop always
/// terminates within `poll_max_iterations` iterations.
pub async fn poll_until_ready(
    client: &AnalysisClient,
    project: &ProjectId,
    policy: &FetchConfig,
) -> PollOutcome {
    let limit = policy.poll_max_iterations.max(1);
    let interval = Duration::from_millis(policy.poll_interval_ms);

    for iteration in 1..=limit {
        match client.list_projects().await {
            Ok(projects) => {
                let state = projects
                    .iter()
                    .find(|p| p.id == *project)
                    .map(|p| p.analysis_state);
                if state == Some(AnalysisState::Ready) {
                    tracing::info!(project = %project, iteration, "analysis ready");
                    return PollOutcome::Ready { iterations: iteration };
                }
                tracing::debug!(project = %project, iteration, ?state, "analysis not ready yet");
            }
            Err(err) => {
                tracing::warn!(project = %project, iteration, %err, "poll iteration failed");
            }
        }
        if iteration < limit {
            tokio::time::sleep(interval).await;
        }
    }

    tracing::warn!(project = %project, limit, "gave up waiting for analysis");
    PollOutcome::GaveUp { iterations: limit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn policy() -> FetchConfig {
        FetchConfig {
            timeout_ms: 2_000,
            retry_limit: 0,
            backoff_ms: 10,
            context_retry_limit: 3,
            context_retry_delay_ms: 10,
            poll_max_iterations: 3,
            poll_interval_ms: 10,
        }
    }

    fn listing(state: &str) -> String {
        format!(r#"[{{"fullName": "acme/widgets", "analysisState": "{state}"}}]"#)
    }

    fn spawn_stub(bodies: Vec<String>) -> (String, Arc<AtomicUsize>) {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind stub server");
        let base = format!("http://{}", server.server_addr());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        std::thread::spawn(move || {
            for body in bodies {
                let Ok(request) = server.recv() else { return };
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = request.respond(tiny_http::Response::from_string(body));
            }
        });
        (base, hits)
    }

    #[tokio::test]
    async fn ready_on_second_iteration() {
        let (base, hits) = spawn_stub(vec![listing("analyzing"), listing("ready")]);
        let client = AnalysisClient::with_policy(&base, policy());
        let project = ProjectId::parse("acme/widgets").unwrap();

        let outcome = poll_until_ready(&client, &project, client.policy()).await;
        assert_eq!(outcome, PollOutcome::Ready { iterations: 2 });
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn never_ready_gives_up_at_the_ceiling() {
        let (base, hits) = spawn_stub(vec![
            listing("analyzing"),
            listing("analyzing"),
            listing("analyzing"),
            listing("analyzing"),
        ]);
        let client = AnalysisClient::with_policy(&base, policy());
        let project = ProjectId::parse("acme/widgets").unwrap();

        let outcome = poll_until_ready(&client, &project, client.policy()).await;
        assert_eq!(outcome, PollOutcome::GaveUp { iterations: 3 });
        // Exactly the ceiling, not one more.
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn missing_project_counts_as_not_ready() {
        let (base, _) = spawn_stub(vec![
            "[]".to_string(),
            listing("ready"),
        ]);
        let client = AnalysisClient::with_policy(&base, policy());
        let project = ProjectId::parse("acme/widgets").unwrap();

        let outcome = poll_until_ready(&client, &project, client.policy()).await;
        assert!(outcome.is_ready());
    }

    #[tokio::test]
    async fn listing_failure_does_not_abort_the_loop() {
        let (base, _) = spawn_stub(vec!["not json".to_string(), listing("ready")]);
        let client = AnalysisClient::with_policy(&base, policy());
        let project = ProjectId::parse("acme/widgets").unwrap();

        let outcome = poll_until_ready(&client, &project, client.policy()).await;
        assert_eq!(outcome, PollOutcome::Ready { iterations: 2 });
    }
}
