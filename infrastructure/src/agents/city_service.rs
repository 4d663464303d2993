//! Built-in city knowledge agent service
//!
//! Deterministic adapter behind the [`AgentService`] port: each specialized
//! agent answers from a canned knowledge base for its domain. Confidence is
//! the agent's configured baseline, so synthesis behaves the same as it
//! would against live backends.

use async_trait::async_trait;
use cityline_application::{AgentService, AgentServiceError};
use cityline_domain::{well_known, Agent, AgentResponse, ClassifiedQuery, EmotionalTone, Urgency};
use tracing::debug;

/// Agent service answering from built-in city knowledge.
pub struct CityAgentService;

impl CityAgentService {
    pub fn new() -> Self {
        Self
    }

    fn tone_for(agent: &Agent, query: &ClassifiedQuery) -> EmotionalTone {
        if query.urgency >= Urgency::Critical {
            return EmotionalTone::Urgent;
        }
        match agent.id.as_str() {
            well_known::LIFESTYLE => EmotionalTone::Welcoming,
            _ => EmotionalTone::Informative,
        }
    }
}

impl Default for CityAgentService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentService for CityAgentService {
    async fn process_query(
        &self,
        agent: &Agent,
        query: &ClassifiedQuery,
    ) -> Result<AgentResponse, AgentServiceError> {
        debug!(agent = %agent.id, intent = %query.intent, "answering from built-in knowledge");

        let (content, sources, follow_up) = match agent.id.as_str() {
            well_known::ENVIRONMENT => (
                "Current conditions in Dubai: sunny and humid, around 41 degrees with light \
                 northwesterly wind. The week ahead stays dry; expect haze in the mornings."
                    .to_string(),
                vec!["weather_service".to_string()],
                "Would you like the hourly forecast for a specific day?",
            ),
            well_known::GOVERNMENT => (
                "Most government services, including visa and Emirates ID renewals, can be \
                 completed online through the official portals or at a customer happiness \
                 center. Standard processing takes two to five working days."
                    .to_string(),
                vec!["government_portal".to_string()],
                "Do you need the document checklist for your application?",
            ),
            well_known::TRANSPORT => (
                "The metro runs every few minutes from early morning until midnight, with \
                 extended hours on weekends. Buses, trams, and taxis connect all major \
                 districts; a rechargeable transit card covers them all."
                    .to_string(),
                vec!["transport_network".to_string()],
                "Shall I outline the best route for your trip?",
            ),
            well_known::LIFESTYLE => (
                "The city offers beaches, malls, and a packed events calendar year-round. \
                 Popular dining districts stay open late, and most attractions sell tickets \
                 online in advance."
                    .to_string(),
                vec!["tourism_board".to_string()],
                "Are you looking for family-friendly options or nightlife?",
            ),
            well_known::BUSINESS => (
                "Company formation is available on the mainland or in one of the free zones, \
                 each with its own licensing rules and cost structure. Most trade licenses \
                 are issued within a week once the paperwork is in order."
                    .to_string(),
                vec!["business_registry".to_string()],
                "Do you want a comparison of mainland and free zone setups?",
            ),
            _ => (
                format!(
                    "{} has no detailed records for this topic, but general city information \
                     is available through the main helpline and the official city portal.",
                    agent.name
                ),
                vec!["city_portal".to_string()],
                "Would you like the contact details for the main helpline?",
            ),
        };

        Ok(AgentResponse::new(content, agent.base_confidence)
            .with_data_sources(sources)
            .with_collaborators(vec![agent.id.to_string()])
            .with_follow_ups(vec![follow_up.to_string()])
            .with_tone(Self::tone_for(agent, query)))
    }
}
