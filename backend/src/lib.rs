//! Server-side access to the research backend.

pub mod api;
pub mod backend_utils;
