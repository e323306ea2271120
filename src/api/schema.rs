//! Validation of movie payloads shaped as `{ movie: { name, img, summary } }`.
//!
//! Every violation is collected; the caller reports them as one message
//! joined with `", "`.

use std::fmt;

use serde_json::{Map, Value};

use crate::database::MovieFields;

/// Top-level key carrying the movie object
pub const ROOT_KEY: &str = "movie";

/// Form field used for method override; never part of the payload
pub const METHOD_OVERRIDE_KEY: &str = "_method";

struct FieldRule {
    key: &'static str,
    allow_empty: bool,
}

const FIELDS: [FieldRule; 3] = [
    FieldRule { key: "name", allow_empty: false },
    FieldRule { key: "img", allow_empty: true },
    FieldRule { key: "summary", allow_empty: false },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    NotObject,
    NotString,
    Empty,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Required => write!(f, "\"{}\" is required", self.path),
            ViolationKind::NotObject => write!(f, "\"{}\" must be of type object", self.path),
            ViolationKind::NotString => write!(f, "\"{}\" must be a string", self.path),
            ViolationKind::Empty => write!(f, "\"{}\" is not allowed to be empty", self.path),
            ViolationKind::Unknown => write!(f, "\"{}\" is not allowed", self.path),
        }
    }
}

/// Non-empty list of violations found in one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Validate a decoded payload and extract the movie fields
pub fn validate_movie(payload: &Map<String, Value>) -> Result<MovieFields, Violations> {
    let mut violations = Vec::new();

    let fields = match payload.get(ROOT_KEY) {
        None => {
            violations.push(violation(ROOT_KEY, ViolationKind::Required));
            None
        }
        Some(Value::Object(movie)) => validate_fields(movie, &mut violations),
        Some(_) => {
            violations.push(violation(ROOT_KEY, ViolationKind::NotObject));
            None
        }
    };

    for key in payload.keys() {
        if key != ROOT_KEY && key != METHOD_OVERRIDE_KEY {
            violations.push(violation(key, ViolationKind::Unknown));
        }
    }

    match fields {
        Some(fields) if violations.is_empty() => Ok(fields),
        _ => Err(Violations(violations)),
    }
}

fn validate_fields(movie: &Map<String, Value>, violations: &mut Vec<Violation>) -> Option<MovieFields> {
    let before = violations.len();
    let mut values = Vec::with_capacity(FIELDS.len());

    for rule in &FIELDS {
        let path = format!("{}.{}", ROOT_KEY, rule.key);
        match movie.get(rule.key) {
            None => violations.push(violation(&path, ViolationKind::Required)),
            Some(Value::String(s)) if s.is_empty() && !rule.allow_empty => {
                violations.push(violation(&path, ViolationKind::Empty))
            }
            Some(Value::String(s)) => values.push(s.clone()),
            Some(_) => violations.push(violation(&path, ViolationKind::NotString)),
        }
    }

    for key in movie.keys() {
        if !FIELDS.iter().any(|rule| rule.key == key) {
            violations.push(violation(&format!("{}.{}", ROOT_KEY, key), ViolationKind::Unknown));
        }
    }

    if violations.len() > before {
        return None;
    }
    let mut values = values.into_iter();
    Some(MovieFields {
        name: values.next()?,
        img: values.next()?,
        summary: values.next()?,
    })
}

fn violation(path: &str, kind: ViolationKind) -> Violation {
    Violation {
        path: path.to_string(),
        kind,
    }
}
