use tracing::{debug, trace};

use super::error::QueryError;
use super::source::QuerySource;

/// Read-only parameter lookups over a URL's query items
///
/// Blanket-implemented for every [`QuerySource`], so `url::Url` gets these
/// methods as soon as the trait is in scope. Names are compared exactly,
/// after percent-decoding and without case folding.
pub trait QueryLookup: QuerySource {
    /// Value of the first item named `key`
    ///
    /// Returns `None` both when no item is named `key` and when the first
    /// such item carries no value (`?flag`). Later duplicates are ignored.
    fn value_for_query_parameter(&self, key: &str) -> Option<String> {
        let found = self.query_items().find(|item| item.name_matches(key));
        match found {
            Some(item) => {
                let value = item.value().map(|v| v.into_owned());
                trace!("Query parameter '{}' found, value present: {}", key, value.is_some());
                value
            }
            None => {
                trace!("Query parameter '{}' not found", key);
                None
            }
        }
    }

    /// True if any item is named `key`, with or without a value
    fn has_query_parameter(&self, key: &str) -> bool {
        self.query_items().any(|item| item.name_matches(key))
    }
}

impl<T: QuerySource + ?Sized> QueryLookup for T {}

/// Checked form of [`QueryLookup::value_for_query_parameter`]
///
/// Fails with [`QueryError::InvalidArgument`] before scanning anything if
/// either input is missing.
pub fn value_for_query_parameter<U>(
    url: Option<&U>,
    key: Option<&str>,
) -> Result<Option<String>, QueryError>
where
    U: QuerySource + ?Sized,
{
    let (url, key) = require_inputs(url, key)?;
    Ok(url.value_for_query_parameter(key))
}

/// Checked form of [`QueryLookup::has_query_parameter`]
pub fn has_query_parameter<U>(url: Option<&U>, key: Option<&str>) -> Result<bool, QueryError>
where
    U: QuerySource + ?Sized,
{
    let (url, key) = require_inputs(url, key)?;
    Ok(url.has_query_parameter(key))
}

fn require_inputs<'u, 'k, U: ?Sized>(
    url: Option<&'u U>,
    key: Option<&'k str>,
) -> Result<(&'u U, &'k str), QueryError> {
    let url = url.ok_or_else(|| {
        debug!("Query lookup called without a URL");
        QueryError::InvalidArgument("url")
    })?;
    let key = key.ok_or_else(|| {
        debug!("Query lookup called without a key");
        QueryError::InvalidArgument("key")
    })?;
    Ok((url, key))
}
