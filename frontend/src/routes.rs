use common::search_filters::SearchFilters;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::search_url_query::SearchUrlQuery;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;
use crate::pages::topic_space_page::TopicSpacePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    HomePage {},

    // the query string holds the filters, so a search can be shared by link
    #[route("/search?:..query")]
    SearchPage { query: SearchUrlQuery },

    #[route("/topic-space")]
    TopicSpacePage {},
}

impl Route {
    pub fn search_page_from_filters(filters: SearchFilters) -> Self {
        Self::SearchPage { query: SearchUrlQuery(filters) }
    }
}
