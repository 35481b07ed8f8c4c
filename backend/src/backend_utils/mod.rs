//! Shared helpers for talking to external services.

pub mod research_backend;
