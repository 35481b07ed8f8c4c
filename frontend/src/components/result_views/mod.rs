pub mod graph_view;
pub mod list_views;
pub mod map_view;
pub mod record_widgets;
pub mod result_panel;
