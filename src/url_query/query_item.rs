use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::Split;
use tracing::trace;

/// A single name/value pair from a URL's query component
///
/// `value` is `None` for a bare parameter such as `?flag`, which is not
/// the same thing as `?flag=` (an empty value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryItem {
    pub name: String,
    pub value: Option<String>,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            value: value.map(Into::into),
        }
    }
}

impl fmt::Display for QueryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// One query item still in its percent-encoded wire form
///
/// Decoding is deferred so a lookup only pays for the names it compares
/// and the one value it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawQueryItem<'a> {
    raw_name: &'a str,
    raw_value: Option<&'a str>,
}

impl<'a> RawQueryItem<'a> {
    fn from_segment(segment: &'a str) -> Self {
        match segment.split_once('=') {
            Some((raw_name, raw_value)) => Self {
                raw_name,
                raw_value: Some(raw_value),
            },
            None => Self {
                raw_name: segment,
                raw_value: None,
            },
        }
    }

    pub fn name(&self) -> Cow<'a, str> {
        decode_component(self.raw_name)
    }

    pub fn value(&self) -> Option<Cow<'a, str>> {
        self.raw_value.map(decode_component)
    }

    /// True if the decoded name equals `key` exactly
    pub fn name_matches(&self, key: &str) -> bool {
        // Skip the decode when there is nothing to decode
        if !self.raw_name.contains('%') {
            return self.raw_name == key;
        }
        self.name() == key
    }

    pub fn to_item(&self) -> QueryItem {
        QueryItem {
            name: self.name().into_owned(),
            value: self.value().map(Cow::into_owned),
        }
    }
}

/// Ordered iterator over the query items of a raw query component
///
/// Borrows the query string; nothing is cached between iterations.
#[derive(Debug, Clone)]
pub struct QueryItems<'a> {
    segments: Option<Split<'a, char>>,
}

impl<'a> QueryItems<'a> {
    pub fn new(raw_query: Option<&'a str>) -> Self {
        // `?` with nothing after it carries no items
        let segments = raw_query
            .filter(|query| !query.is_empty())
            .map(|query| query.split('&'));
        Self { segments }
    }

    pub fn empty() -> Self {
        Self { segments: None }
    }

    /// Decodes every item into an owned `QueryItem`
    pub fn to_vec(&self) -> Vec<QueryItem> {
        self.clone().map(|raw| raw.to_item()).collect()
    }
}

impl<'a> Iterator for QueryItems<'a> {
    type Item = RawQueryItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.as_mut()?.next()?;
        trace!("Query segment: {}", segment);
        Some(RawQueryItem::from_segment(segment))
    }
}

/// Percent-decodes one name or value. `+` is left alone.
fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(_) => {
            trace!("Query component is not valid UTF-8 once decoded: {}", raw);
            Cow::Owned(String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(query: Option<&str>) -> Vec<QueryItem> {
        QueryItems::new(query).to_vec()
    }

    #[test]
    fn test_missing_and_empty_query() {
        assert!(items(None).is_empty());
        assert!(items(Some("")).is_empty());
        assert_eq!(QueryItems::empty().count(), 0);
    }

    #[test]
    fn test_items_keep_order() {
        let parsed = items(Some("b=2&a=1&flag"));
        assert_eq!(
            parsed,
            vec![
                QueryItem::new("b", Some("2")),
                QueryItem::new("a", Some("1")),
                QueryItem::new("flag", None::<String>),
            ]
        );
    }

    #[test]
    fn test_empty_value_is_not_absent() {
        let parsed = items(Some("a=&b"));
        assert_eq!(parsed[0].value.as_deref(), Some(""));
        assert_eq!(parsed[1].value, None);
    }

    #[test]
    fn test_value_splits_on_first_equals() {
        let parsed = items(Some("expr=x=y"));
        assert_eq!(parsed[0].name, "expr");
        assert_eq!(parsed[0].value.as_deref(), Some("x=y"));
    }

    #[test]
    fn test_empty_names_pass_through() {
        let parsed = items(Some("=v&&a=1"));
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], QueryItem::new("", Some("v")));
        assert_eq!(parsed[1], QueryItem::new("", None::<String>));
        assert_eq!(parsed[2], QueryItem::new("a", Some("1")));
    }

    #[test]
    fn test_percent_decoding() {
        let parsed = items(Some("first%20name=J%C3%BCrgen&q=a+b"));
        assert_eq!(parsed[0].name, "first name");
        assert_eq!(parsed[0].value.as_deref(), Some("Jürgen"));
        // plus signs are not form-decoded
        assert_eq!(parsed[1].value.as_deref(), Some("a+b"));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let parsed = items(Some("bad=%FF"));
        assert_eq!(parsed[0].value.as_deref(), Some("\u{FFFD}"));
    }

    #[test]
    fn test_name_matches_encoded_name() {
        let raw = QueryItems::new(Some("a%62c=1")).next().unwrap();
        assert!(raw.name_matches("abc"));
        assert!(!raw.name_matches("a%62c"));
    }

    #[test]
    fn test_display() {
        assert_eq!(QueryItem::new("a", Some("1")).to_string(), "a=1");
        assert_eq!(QueryItem::new("flag", None::<String>).to_string(), "flag");
    }
}
