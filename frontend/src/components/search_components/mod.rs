pub mod autofill_input;
pub mod org_list_picker;
pub mod result_controls;
pub mod search_form_panel;
pub mod topic_tags_input;
