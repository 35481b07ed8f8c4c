pub mod search_url_query;
