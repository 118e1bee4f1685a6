pub mod cli;
pub mod config;
pub mod url_query;
pub mod utils;

pub use url_query::{
    has_query_parameter, parse_structured_url, value_for_query_parameter, QueryError, QueryItem,
    QueryLookup, QuerySource,
};
