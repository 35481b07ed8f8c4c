pub mod error_boundary;
pub mod navbar;
pub mod result_views;
pub mod search_components;
pub mod suspend_boundary;
