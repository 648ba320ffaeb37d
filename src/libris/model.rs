use serde_json::{Map, Value};
use std::fmt;

use crate::error::{LibrisError, Result};

/// Lending state of a book. Only these two values ever appear in the
/// catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Available,
    CheckedOut,
}

impl Status {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(Status::Available),
            "checked out" => Some(Status::CheckedOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: Status,
}

impl Book {
    pub fn new(id: u32, title: String, author: String, year: i32) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: Status::Available,
        }
    }

    /// Key-value representation used by the catalog file.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::from(self.id));
        map.insert("title".to_string(), Value::from(self.title.clone()));
        map.insert("author".to_string(), Value::from(self.author.clone()));
        map.insert("year".to_string(), Value::from(self.year));
        map.insert("status".to_string(), Value::from(self.status.as_str()));
        map
    }

    /// Rebuild a book from its key-value representation. Every one of the
    /// five keys must be present and carry the right type.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let id = u32::try_from(
            field(map, "id")?
                .as_u64()
                .ok_or(LibrisError::InvalidField("id"))?,
        )
        .map_err(|_| LibrisError::InvalidField("id"))?;
        let title = field(map, "title")?
            .as_str()
            .ok_or(LibrisError::InvalidField("title"))?
            .to_string();
        let author = field(map, "author")?
            .as_str()
            .ok_or(LibrisError::InvalidField("author"))?
            .to_string();
        let year = i32::try_from(
            field(map, "year")?
                .as_i64()
                .ok_or(LibrisError::InvalidField("year"))?,
        )
        .map_err(|_| LibrisError::InvalidField("year"))?;
        let status = field(map, "status")?
            .as_str()
            .and_then(Status::parse)
            .ok_or(LibrisError::InvalidField("status"))?;

        Ok(Self {
            id,
            title,
            author,
            year,
            status,
        })
    }
}

fn field<'a>(map: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value> {
    map.get(key).ok_or(LibrisError::MissingField(key))
}
