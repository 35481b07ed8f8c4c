//! Chooses which presentation a result gets, given its variant and the
//! selected display mode.

use crate::{
    search_result::{Coordinate, ResearchRecord},
    search_session::DisplayMode,
    search_variant::SearchVariant,
};

/// Per-variant list presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListView {
    Institution,
    MultiInstitution,
    Topic,
    Researcher,
    ResearcherInstitution,
    TopicResearcher,
    TopicInstitution,
    AllThree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultView {
    NoResult,
    Graph,
    Map,
    MapNotAvailable,
    ListNotAvailable,
    List(ListView),
}

pub fn select_result_view(record: &ResearchRecord, mode: DisplayMode) -> ResultView {
    if !record.has_graph() {
        return ResultView::NoResult;
    }
    match mode {
        DisplayMode::Graph => ResultView::Graph,
        DisplayMode::Map => match record.search {
            Some(SearchVariant::Topic) => ResultView::Map,
            _ => ResultView::MapNotAvailable,
        },
        DisplayMode::List => match record.search {
            None => ResultView::ListNotAvailable,
            Some(variant) => ResultView::List(list_view_for(variant, record.has_multiple_institutions)),
        },
    }
}

fn list_view_for(variant: SearchVariant, has_multiple_institutions: bool) -> ListView {
    match variant {
        SearchVariant::Institution if has_multiple_institutions => ListView::MultiInstitution,
        SearchVariant::Institution => ListView::Institution,
        SearchVariant::Topic => ListView::Topic,
        SearchVariant::Researcher => ListView::Researcher,
        SearchVariant::ResearcherInstitution => ListView::ResearcherInstitution,
        SearchVariant::TopicResearcher => ListView::TopicResearcher,
        SearchVariant::TopicInstitution => ListView::TopicInstitution,
        SearchVariant::AllThree => ListView::AllThree,
    }
}

/// Marker colour by the number of people at an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerBucket {
    Blue,
    Green,
    Violet,
    Orange,
    Red,
}

impl MarkerBucket {
    pub const ALL: [MarkerBucket; 5] = [MarkerBucket::Blue, MarkerBucket::Green, MarkerBucket::Violet, MarkerBucket::Orange, MarkerBucket::Red];

    pub fn for_count(count: u64) -> Self {
        match count {
            100_000.. => MarkerBucket::Red,
            10_000.. => MarkerBucket::Orange,
            1_000.. => MarkerBucket::Violet,
            100.. => MarkerBucket::Green,
            _ => MarkerBucket::Blue,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MarkerBucket::Blue => "#2A81CB",
            MarkerBucket::Green => "#2AAD27",
            MarkerBucket::Violet => "#9C2BCB",
            MarkerBucket::Orange => "#CB8427",
            MarkerBucket::Red => "#CB2B3E",
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            MarkerBucket::Blue => "0 - 99",
            MarkerBucket::Green => "100 - 999",
            MarkerBucket::Violet => "1,000 - 9,999",
            MarkerBucket::Orange => "10,000 - 99,999",
            MarkerBucket::Red => "100,000+",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub coordinate: Coordinate,
    /// People count from the matching organization row, if there is one.
    pub people: Option<String>,
    pub bucket: MarkerBucket,
}

/// Pairs every coordinate with its organization row by name.
pub fn map_markers(record: &ResearchRecord) -> Vec<MapMarker> {
    record
        .coordinates
        .iter()
        .map(|coordinate| {
            let row = record.organizations.iter().find(|o| o.name == coordinate.name);
            let count = row.and_then(|r| r.count_as_number()).unwrap_or(0);
            MapMarker {
                coordinate: coordinate.clone(),
                people: row.map(|r| r.count.clone()),
                bucket: MarkerBucket::for_count(count),
            }
        })
        .collect()
}
