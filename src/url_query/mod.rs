//! Read-only access to the query component of a structured URL.
//!
//! [`QueryLookup`] answers two questions about a URL's query items: what the
//! first value for a name is, and whether the name appears at all. Items are
//! re-derived from the URL on every call.

pub mod error;
pub mod lookup;
pub mod query_item;
pub mod source;
pub mod url_validator;


pub use error::QueryError;
pub use lookup::{has_query_parameter, value_for_query_parameter, QueryLookup};
pub use query_item::{QueryItem, QueryItems, RawQueryItem};
pub use source::QuerySource;
pub use url_validator::parse_structured_url;
