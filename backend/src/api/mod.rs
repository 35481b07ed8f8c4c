//! API handlers called by the frontend server functions.

pub mod search;
pub mod autofill;
pub mod topic_space;
