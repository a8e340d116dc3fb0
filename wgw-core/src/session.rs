use crate::{
    entities::{MapPoint, PlaceCandidate},
    render::LayerId,
};
use std::fmt;

/// Sequence number of a geocoding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestSeq(u64);

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The currently selected place and its visual resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub place: PlaceCandidate,
    pub marker: LayerId,
    pub route: Option<LayerId>,
}

/// Everything the widget remembers during a session.
///
/// Layer handles are owned exclusively by the session
/// and must be released before they are replaced.
#[derive(Debug, Default)]
pub struct SessionState {
    pub(crate) user_pos: Option<MapPoint>,
    pub(crate) user_marker: Option<LayerId>,
    pub(crate) destination: Option<Destination>,
    pub(crate) suggestions: Vec<PlaceCandidate>,
    pending_request: Option<RequestSeq>,
    last_layer_id: u64,
    last_request_seq: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_pos(&self) -> Option<MapPoint> {
        self.user_pos
    }

    pub fn user_marker(&self) -> Option<LayerId> {
        self.user_marker
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn suggestions(&self) -> &[PlaceCandidate] {
        &self.suggestions
    }

    /// The most recently issued request that is still awaiting its response.
    pub fn pending_request(&self) -> Option<RequestSeq> {
        self.pending_request
    }

    pub fn is_pending_request(&self, seq: RequestSeq) -> bool {
        self.pending_request == Some(seq)
    }

    pub(crate) fn next_layer_id(&mut self) -> LayerId {
        self.last_layer_id += 1;
        LayerId::from_raw(self.last_layer_id)
    }

    /// Issue a new request sequence number that supersedes all previous ones.
    pub(crate) fn next_request_seq(&mut self) -> RequestSeq {
        self.last_request_seq += 1;
        let seq = RequestSeq(self.last_request_seq);
        self.pending_request = Some(seq);
        seq
    }

    pub(crate) fn finish_pending_request(&mut self) {
        self.pending_request = None;
    }
}
