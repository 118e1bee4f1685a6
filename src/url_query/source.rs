use url::Url;

use super::query_item::QueryItems;

/// A structured URL value that can hand out its query component
///
/// Implementors only need to expose the raw (still percent-encoded) query;
/// the ordered item view is derived from it on every call.
pub trait QuerySource {
    /// The query component without the leading `?`, if there is one
    fn raw_query(&self) -> Option<&str>;

    fn query_items(&self) -> QueryItems<'_> {
        QueryItems::new(self.raw_query())
    }
}

impl QuerySource for Url {
    fn raw_query(&self) -> Option<&str> {
        self.query()
    }
}

/// A bare query string, as found after the `?`
impl QuerySource for str {
    fn raw_query(&self) -> Option<&str> {
        Some(self)
    }
}

impl QuerySource for String {
    fn raw_query(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: QuerySource + ?Sized> QuerySource for &T {
    fn raw_query(&self) -> Option<&str> {
        (**self).raw_query()
    }
}
