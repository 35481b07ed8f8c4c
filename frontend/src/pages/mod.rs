pub mod home_page;
pub mod search_page;
pub mod topic_space_page;
