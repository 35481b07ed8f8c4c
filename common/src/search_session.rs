//! Client-side search state: the current result, the display mode and the
//! sequence numbers that keep stale responses out.

use serde::{Deserialize, Serialize};

use crate::{
    search_result::{Pagination, ResearchRecord, SearchFailure, SearchResponse},
    search_variant::SearchPlan,
};

/// Tag of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Issues increasing request tickets and tells whether a ticket is still the
/// latest one. Each search context owns its own sequencer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    List,
    Graph,
    Map,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::List, DisplayMode::Graph, DisplayMode::Map];

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::List => "List",
            DisplayMode::Graph => "Graph",
            DisplayMode::Map => "Map",
        }
    }
}

/// State of one search page. Responses are applied through [`SearchSession::complete`]
/// and only when they answer the most recently issued request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    sequencer: SearchSequencer,
    pub record: ResearchRecord,
    pub pagination: Pagination,
    pub display_mode: DisplayMode,
    pub is_loading: bool,
    pub last_failure: Option<SearchFailure>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request and returns its ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.is_loading = true;
        self.sequencer.issue()
    }

    /// Applies the outcome of the request behind `ticket`. A superseded ticket
    /// is ignored and `false` is returned.
    pub fn complete(&mut self, ticket: RequestTicket, outcome: Result<SearchResponse, SearchFailure>) -> bool {
        if !self.sequencer.is_latest(ticket) {
            return false;
        }
        self.is_loading = false;
        match outcome {
            Ok(response) => {
                if response.plan == SearchPlan::NoFilter {
                    self.display_mode = DisplayMode::Graph;
                }
                self.record = response.record;
                self.pagination = response.pagination;
                self.last_failure = None;
            }
            Err(failure) => {
                self.record = ResearchRecord::default();
                self.pagination = Pagination::default();
                self.last_failure = Some(failure);
            }
        }
        true
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }
}
