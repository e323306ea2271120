use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};

/// Store-assigned identifier of a movie (12-byte ObjectId, 24 hex chars on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieId(ObjectId);

impl MovieId {
    /// Allocate a fresh identifier. Ids are generated client-side, the same way
    /// the Mongo drivers do it, so create can redirect without a read-back.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for MovieId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for MovieId {
    type Err = mongodb::bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for MovieId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

/// The user-editable part of a movie: what create, update and seed carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFields {
    pub name: String,
    pub img: String,
    pub summary: String,
}

impl MovieFields {
    pub fn new(name: impl Into<String>, img: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            img: img.into(),
            summary: summary.into(),
        }
    }
}

/// A persisted movie as returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: MovieId,
    pub name: String,
    pub img: String,
    pub summary: String,
}

impl Movie {
    pub fn from_fields(id: MovieId, fields: MovieFields) -> Self {
        Self {
            id,
            name: fields.name,
            img: fields.img,
            summary: fields.summary,
        }
    }

    pub fn apply(&mut self, fields: MovieFields) {
        self.name = fields.name;
        self.img = fields.img;
        self.summary = fields.summary;
    }
}
