use super::prelude::*;
use crate::{
    gateways::geocode::{GeocodingGateway, GeocodingQuery},
    util::validate,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub seq: RequestSeq,
    pub query: GeocodingQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryStart {
    /// The text is too short, the suggestions have been cleared.
    TooShort,
    Request(SuggestionRequest),
}

/// Prepare a geocoding request for the (partial) user input.
///
/// Every request supersedes all requests issued before,
/// even a query that is too short cancels them.
pub fn begin_suggestion_query(
    state: &mut SessionState,
    settings: &MapSettings,
    text: &str,
) -> QueryStart {
    let text = text.trim();
    if !validate::is_searchable(text, settings.min_query_len) {
        state.finish_pending_request();
        state.suggestions.clear();
        return QueryStart::TooShort;
    }
    let seq = state.next_request_seq();
    log::debug!("Issue geocoding request {seq} for '{text}'");
    QueryStart::Request(SuggestionRequest {
        seq,
        query: GeocodingQuery {
            text: text.to_owned(),
            near: state.user_pos,
        },
    })
}

/// Ask the geocoding service and validate its answer.
///
/// Only the first `max_suggestions` results are considered,
/// malformed candidates among them are skipped.
pub fn fetch_suggestions<G>(
    gateway: &G,
    query: &GeocodingQuery,
    max_suggestions: usize,
) -> Result<Vec<PlaceCandidate>>
where
    G: GeocodingGateway + ?Sized,
{
    let candidates = gateway.search(query)?;
    let places = candidates
        .iter()
        .take(max_suggestions)
        .filter_map(|c| match validate::place_candidate(c) {
            Ok(place) => Some(place),
            Err(err) => {
                log::warn!("Skipping place candidate '{}': {}", c.display_name, err);
                None
            }
        })
        .collect();
    Ok(places)
}

/// Take over the suggestions of a finished request.
///
/// Responses of superseded requests are discarded.
pub fn apply_suggestions(
    state: &mut SessionState,
    seq: RequestSeq,
    result: Result<Vec<PlaceCandidate>>,
) -> Vec<RenderCommand> {
    if !state.is_pending_request(seq) {
        log::debug!("Discarding outdated suggestions of request {seq}");
        return vec![];
    }
    state.finish_pending_request();
    match result {
        Ok(places) => {
            state.suggestions = places;
            if state.suggestions.is_empty() {
                vec![RenderCommand::HideSuggestions]
            } else {
                let names = state
                    .suggestions
                    .iter()
                    .map(|p| p.full_name.clone())
                    .collect();
                vec![RenderCommand::ShowSuggestions(names)]
            }
        }
        Err(err) => {
            log::warn!("No suggestions available: {err}");
            state.suggestions.clear();
            vec![RenderCommand::HideSuggestions]
        }
    }
}

/// Query and apply suggestions in one go.
pub fn query_suggestions<G>(
    gateway: &G,
    state: &mut SessionState,
    settings: &MapSettings,
    text: &str,
) -> Result<Vec<RenderCommand>>
where
    G: GeocodingGateway + ?Sized,
{
    let SuggestionRequest { seq, query } = match begin_suggestion_query(state, settings, text) {
        QueryStart::TooShort => return Ok(vec![RenderCommand::HideSuggestions]),
        QueryStart::Request(req) => req,
    };
    let places = match fetch_suggestions(gateway, &query, settings.max_suggestions) {
        Ok(places) => places,
        Err(err) => {
            state.finish_pending_request();
            state.suggestions.clear();
            return Err(err);
        }
    };
    Ok(apply_suggestions(state, seq, Ok(places)))
}
