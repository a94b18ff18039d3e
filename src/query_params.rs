use crate::compat::{String, ToString, Vec};
use crate::error::Result;
use crate::helpers::split_href;
use crate::mutation::Mutation;
use crate::param_map::ParamMap;
use crate::percent_encode::{SpaceEncoding, form_decode, form_decode_strict, form_encode_into};

/// Builder over the parameters of one query string.
///
/// Holds the decoded pairs in order. Every mutation changes them in place and
/// returns the re-serialized query (without leading `?`); reads never mutate.
///
/// ```
/// use query_params::QueryParams;
///
/// let mut query = QueryParams::parse("?page=1&sort=name");
/// assert_eq!(query.add_or_replace_param("page", "2"), "page=2&sort=name");
/// assert_eq!(query.get_param("sort"), Some("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
    space: SpaceEncoding,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string (with or without leading `?`).
    /// Never fails: empty segments are skipped, a segment without `=` has an empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let params = segments(query)
            .map(|(_, key, value)| (form_decode(key), form_decode(value)))
            .collect();

        Self {
            params,
            space: SpaceEncoding::default(),
        }
    }

    /// Parse like [`parse`](Self::parse), but reject malformed `%` escapes and
    /// escapes that decode to invalid UTF-8.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidPercentEncoding`](crate::ParseError::InvalidPercentEncoding)
    /// with the byte offset of a `%` not followed by two hex digits, or
    /// [`ParseError::InvalidUtf8`](crate::ParseError::InvalidUtf8) when a decoded
    /// key or value is not UTF-8.
    pub fn try_parse(query: &str) -> Result<Self> {
        let (query, prefix) = match query.strip_prefix('?') {
            Some(rest) => (rest, 1),
            None => (query, 0),
        };

        let mut params = Vec::new();
        for (offset, key, value) in segments(query) {
            let key_decoded = form_decode_strict(key, prefix + offset)?;
            let value_decoded = form_decode_strict(value, prefix + offset + key.len() + 1)?;
            params.push((key_decoded, value_decoded));
        }

        Ok(Self {
            params,
            space: SpaceEncoding::default(),
        })
    }

    /// Parse the query part of a full URL or path (`/cart?item=1#top`).
    /// Path and fragment are ignored; no `?` means an empty query.
    pub fn from_href(href: &str) -> Self {
        let (_, query, _) = split_href(href);
        Self::parse(query.unwrap_or_default())
    }

    /// Choose how spaces are written on serialization.
    #[must_use]
    pub fn with_space_encoding(mut self, space: SpaceEncoding) -> Self {
        self.space = space;
        self
    }

    pub fn space_encoding(&self) -> SpaceEncoding {
        self.space
    }

    /// Append a pair; existing values for `key` are kept.
    pub fn add_param(&mut self, key: &str, value: &str) -> String {
        self.append(key, value);
        self.serialized_query()
    }

    pub fn add_param_list<I, K, V>(&mut self, pairs: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.append(key.as_ref(), value.as_ref());
        }
        self.serialized_query()
    }

    /// Remove every value for `key`. Absent keys are a no-op.
    pub fn remove_param(&mut self, key: &str) -> String {
        self.delete(key);
        self.serialized_query()
    }

    pub fn remove_param_list<I, K>(&mut self, keys: I) -> String
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.delete(key.as_ref());
        }
        self.serialized_query()
    }

    /// Set `key` to exactly one value.
    /// An existing key keeps the position of its first occurrence; a new key goes last.
    pub fn add_or_replace_param(&mut self, key: &str, value: &str) -> String {
        self.set(key, value);
        self.serialized_query()
    }

    /// Sequential [`add_or_replace_param`](Self::add_or_replace_param); a later duplicate key wins.
    pub fn add_or_replace_param_list<I, K, V>(&mut self, pairs: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.set(key.as_ref(), value.as_ref());
        }
        self.serialized_query()
    }

    /// Get the first value for a key.
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value of each requested key, in request order, `None` when absent.
    pub fn get_param_list<'a, I>(&'a self, keys: I) -> ParamMap<'a, Option<&'a str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = ParamMap::new();
        for key in keys {
            map.insert_first(key, self.get_param(key));
        }
        map
    }

    /// Every key with its first value, in first-occurrence order.
    pub fn get_all_params(&self) -> ParamMap<'_, &str> {
        let mut map = ParamMap::new();
        for (key, value) in &self.params {
            map.insert_first(key.as_str(), value.as_str());
        }
        map
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Number of pairs, counting repeated keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Query string without leading `?`, empty when there are no parameters.
    pub fn serialized_query(&self) -> String {
        let mut result = String::new();
        self.write_query(&mut result);
        result
    }

    /// Query string with leading `?`, or empty string if no parameters.
    /// This is what a location's `search` field holds.
    pub fn search(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        self.write_query(&mut result);
        result
    }

    /// Replace the query of `href` with this one, keeping whatever comes before
    /// the `?` and the `#fragment` untouched.
    pub fn apply_to_href(&self, href: &str) -> String {
        let (before_query, _, fragment) = split_href(href);

        let mut result = String::with_capacity(href.len());
        result.push_str(before_query);
        if !self.params.is_empty() {
            result.push('?');
            self.write_query(&mut result);
        }
        result.push_str(fragment);
        result
    }

    /// Run deferred mutations in order against this builder, then serialize once.
    ///
    /// Each step sees the effects of the ones before it. Return values of the
    /// steps are ignored. Use [`step`](crate::step) to mix different closures.
    pub fn compose<I, F, R>(&mut self, steps: I) -> String
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut Self) -> R,
    {
        for step in steps {
            step(self);
        }
        debug_event!(params = self.params.len(), "composed query mutations");
        self.serialized_query()
    }

    /// Like [`compose`](Self::compose) with fallible steps.
    ///
    /// Stops at the first error and returns it. Nothing is rolled back: the
    /// steps that already ran stay applied.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step unchanged; later steps do not run.
    pub fn try_compose<I, F, R, E>(&mut self, steps: I) -> core::result::Result<String, E>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut Self) -> core::result::Result<R, E>,
    {
        for step in steps {
            step(self).inspect_err(|_| {
                debug_event!("query composition stopped by a failing step");
            })?;
        }
        Ok(self.serialized_query())
    }

    /// Apply one data-form mutation.
    pub fn apply(&mut self, mutation: &Mutation) -> String {
        self.apply_one(mutation);
        self.serialized_query()
    }

    /// Apply data-form mutations in order, serializing once at the end.
    pub fn apply_all<'m, I>(&mut self, mutations: I) -> String
    where
        I: IntoIterator<Item = &'m Mutation>,
    {
        for mutation in mutations {
            self.apply_one(mutation);
        }
        self.serialized_query()
    }

    fn apply_one(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::Add { key, value } => self.append(key, value),
            Mutation::AddOrReplace { key, value } => self.set(key, value),
            Mutation::Remove { key } => self.delete(key),
        }
    }

    fn append(&mut self, key: &str, value: &str) {
        trace_event!(key, "append query parameter");
        self.params.push((key.to_string(), value.to_string()));
    }

    fn delete(&mut self, key: &str) {
        trace_event!(key, "delete query parameter");
        self.params.retain(|(k, _)| k != key);
    }

    fn set(&mut self, key: &str, value: &str) {
        trace_event!(key, "set query parameter");
        let mut found_first = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            *v = value.to_string();
            true
        });
        if !found_first {
            self.params.push((key.to_string(), value.to_string()));
        }
    }

    fn write_query(&self, buffer: &mut String) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            form_encode_into(buffer, key, self.space);
            buffer.push('=');
            form_encode_into(buffer, value, self.space);
        }
    }
}

/// Non-empty `&`-separated segments as (`byte_offset`, `raw_key`, `raw_value`).
/// Only the first `=` splits key from value.
fn segments(query: &str) -> impl Iterator<Item = (usize, &str, &str)> {
    let mut offset = 0;
    query.split('&').filter_map(move |segment| {
        let start = offset;
        offset += segment.len() + 1;
        if segment.is_empty() {
            trace_event!(offset = start, "skipping empty query segment");
            return None;
        }
        Some(match segment.split_once('=') {
            Some((key, value)) => (start, key, value),
            None => (start, segment, ""),
        })
    })
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialized_query())
    }
}

impl core::str::FromStr for QueryParams {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}
