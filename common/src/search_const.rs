//! Constants shared by the search form, the request builder and the backend client.

/// Results per page requested from the research backend.
pub const PAGE_SIZE: u32 = 25;

/// Upper bound on the number of topic tags a search can carry.
pub const MAX_TOPIC_TAGS: usize = 6;

/// Institution designations offered by the institution-type selector.
pub const INSTITUTION_TYPES: [&str; 11] = [
    "HBCU",
    "AANAPISI",
    "ANNH",
    "Carnegie R1",
    "Carnegie R2",
    "Emerging",
    "HSI",
    "MSI",
    "NASNTI",
    "PBI",
    "TCU",
];

// url query keys
pub const QUERY_KEY_INSTITUTION: &str = "institution";
pub const QUERY_KEY_INSTITUTION_TYPE: &str = "type";
pub const QUERY_KEY_TOPIC: &str = "topic";
pub const QUERY_KEY_RESEARCHER: &str = "researcher";
