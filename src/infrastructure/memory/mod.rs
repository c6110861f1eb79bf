//! Memory search client

mod http_search;

pub use http_search::HttpMemorySearch;
