use percent_encoding::percent_decode_str;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::borrow::Cow;

// Raw `&`-separated segments beyond this count are ignored, empty ones included.
pub const PARAMETER_LIMIT: usize = 1000;

// Value of one query key: a single string or every value of a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    List(Vec<String>),
}

impl QueryValue {
    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(first) => {
                let first = std::mem::take(first);
                *self = QueryValue::List(vec![first, value]);
            }
            QueryValue::List(values) => values.push(value),
        }
    }
}

// Decoded query string, keyed in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    // Parse a raw (still percent-encoded) query string. Never fails: a part
    // whose escapes do not decode to UTF-8 is kept as sent, `+` aside.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(raw) = raw else {
            return params;
        };

        for segment in raw.split('&').take(PARAMETER_LIMIT) {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            params.append(decode_component(key), decode_component(value));
        }
        params
    }

    fn append(&mut self, key: String, value: String) {
        // `key[]` always yields a list stored under `key`.
        let (key, force_list) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key, false),
        };
        if key.is_empty() {
            return;
        }

        match self.entries.iter().position(|(existing, _)| *existing == key) {
            Some(index) => self.entries[index].1.push(value),
            None if force_list => self.entries.push((key, QueryValue::List(vec![value]))),
            None => self.entries.push((key, QueryValue::Single(value))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode_component(part: &str) -> String {
    let spaced: Cow<'_, str> = if part.contains('+') {
        Cow::Owned(part.replace('+', " "))
    } else {
        Cow::Borrowed(part)
    };

    match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
