//! Concurrent agent dispatch
//!
//! Fans the allocation plan out over the agent service, bounded by the
//! scenario's time budget. Individual failures never abort the batch; at the
//! deadline a cancellation token releases whatever is still in flight and
//! those results are discarded.

use crate::ports::agent_service::{AgentService, AgentServiceError};
use cityline_domain::{AgentAllocation, AgentId, AgentRegistry, AgentResponse, ClassifiedQuery};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Dispatch every allocation concurrently and collect the responses.
///
/// The returned map holds one entry per agent that produced a response,
/// including empty zero-confidence entries for non-primary agents skipped by
/// the relevance pre-check. Agents that failed or were still in flight at the
/// deadline are absent.
pub async fn dispatch(
    service: Arc<dyn AgentService>,
    registry: &AgentRegistry,
    allocations: &[AgentAllocation],
    query: &ClassifiedQuery,
    timeout: Duration,
) -> HashMap<AgentId, AgentResponse> {
    let mut results: HashMap<AgentId, AgentResponse> = HashMap::new();
    let text_lower = query.text_lower();
    let cancel = CancellationToken::new();
    let mut join_set = JoinSet::new();

    for allocation in allocations {
        let Some(agent) = registry.get(&allocation.agent_id) else {
            // The resolver filters unknown agents; this guards direct callers.
            warn!(agent = %allocation.agent_id, "allocated agent missing from registry");
            continue;
        };

        // Relevance pre-check: a non-primary agent with no specialty in the
        // query text still counts as attempted, but is not invoked.
        if !allocation.is_primary() && !agent.is_relevant_to(&text_lower) {
            debug!(agent = %allocation.agent_id, "skipping irrelevant supporting agent");
            results.insert(allocation.agent_id.clone(), AgentResponse::empty());
            continue;
        }

        let service = Arc::clone(&service);
        let agent = agent.clone();
        let query = query.clone();
        let token = cancel.child_token();

        join_set.spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => Err(AgentServiceError::Timeout),
                result = service.process_query(&agent, &query) => result,
            };
            (agent.id, result)
        });
    }

    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => {
                warn!(
                    pending = join_set.len(),
                    timeout_ms = timeout.as_millis() as u64,
                    "dispatch deadline reached, cancelling in-flight agent calls"
                );
                cancel.cancel();
                break;
            }
            next = join_set.join_next() => match next {
                None => break,
                Some(Ok((agent_id, Ok(response)))) => {
                    debug!(agent = %agent_id, confidence = response.confidence, "agent responded");
                    results.insert(agent_id, response);
                }
                Some(Ok((agent_id, Err(error)))) => {
                    warn!(agent = %agent_id, error = %error, "agent call failed");
                }
                Some(Err(error)) => {
                    warn!(error = %error, "agent task join error");
                }
            }
        }
    }

    // Reap cancelled tasks; their results are discarded by design.
    join_set.shutdown().await;

    results
}
