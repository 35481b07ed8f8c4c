//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod topic_tags;
pub mod search_filters;
pub mod search_variant;
pub mod search_request;
pub mod search_result;
pub mod search_session;
pub mod result_view;
