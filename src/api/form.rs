//! Decoding of `application/x-www-form-urlencoded` bodies with bracket
//! nesting, so `movie[name]=Heat&movie[img]=` becomes
//! `{"movie": {"name": "Heat", "img": ""}}`.
//!
//! Repeated keys collect into an array, `key[]=v` appends to an array, and
//! nesting stops after [`MAX_DEPTH`] bracket levels (the rest of the key is
//! kept as one literal segment).

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::{Map, Value};

pub const MAX_DEPTH: usize = 5;

/// Whether the request body is form-encoded. Other bodies are not parsed.
pub fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

/// Decode a form body into a nested JSON object
pub fn parse_nested(body: &[u8]) -> Map<String, Value> {
    let mut root = Map::new();
    for (key, value) in url::form_urlencoded::parse(body) {
        if key.is_empty() {
            continue;
        }
        let path = split_key(&key);
        insert(&mut root, &path, value.into_owned());
    }
    root
}

/// Find a top-level field in a form body without building the nested tree
pub fn find_field(body: &[u8], name: &str) -> Option<String> {
    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn split_key(key: &str) -> Vec<String> {
    let open = match key.find('[') {
        Some(0) | None => return vec![key.to_string()],
        Some(open) => open,
    };

    let mut segments = vec![key[..open].to_string()];
    let mut rest = &key[open..];
    while segments.len() <= MAX_DEPTH && rest.starts_with('[') {
        match rest.find(']') {
            Some(close) => {
                segments.push(rest[1..close].to_string());
                rest = &rest[close + 1..];
            }
            // Unclosed bracket: the key is taken literally
            None => return vec![key.to_string()],
        }
    }
    if !rest.is_empty() {
        segments.push(rest.to_string());
    }
    segments
}

fn insert(map: &mut Map<String, Value>, path: &[String], value: String) {
    let Some((head, tail)) = path.split_first() else {
        return;
    };

    match tail {
        [] => append(map, head, Value::String(value)),
        [last] if last.is_empty() => {
            let slot = map
                .entry(head.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            match slot {
                Value::Array(items) => items.push(Value::String(value)),
                other => {
                    let prev = other.take();
                    *other = Value::Array(vec![prev, Value::String(value)]);
                }
            }
        }
        _ => {
            let slot = map
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            // A scalar already sitting where an object is needed is replaced
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(inner) = slot {
                insert(inner, tail, value);
            }
        }
    }
}

fn append(map: &mut Map<String, Value>, key: &str, value: Value) {
    match map.get_mut(key) {
        None => {
            map.insert(key.to_string(), value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let prev = existing.take();
            *existing = Value::Array(vec![prev, value]);
        }
    }
}
