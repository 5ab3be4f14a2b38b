//! Search domain types shared by the dispatcher, controller and CLI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AlumnetError;

/// Collection a search result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Post,
    Alumni,
    Event,
    Job,
    Message,
}

impl ResultKind {
    /// Collections the dispatcher actually queries, in fetch order
    pub const FETCHED: [ResultKind; 4] = [Self::Post, Self::Alumni, Self::Event, Self::Job];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Alumni => "alumni",
            Self::Event => "event",
            Self::Job => "job",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` part of the filter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Only(ResultKind),
}

impl TypeFilter {
    /// Whether results of `kind` belong under this filter
    pub fn admits(&self, kind: ResultKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == kind,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = AlumnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "post" | "posts" => Ok(Self::Only(ResultKind::Post)),
            "alumni" => Ok(Self::Only(ResultKind::Alumni)),
            "event" | "events" => Ok(Self::Only(ResultKind::Event)),
            "job" | "jobs" => Ok(Self::Only(ResultKind::Job)),
            "message" | "messages" => Ok(Self::Only(ResultKind::Message)),
            other => Err(AlumnetError::invalid_input_field(
                format!("Unknown result type '{}'", other),
                "type",
            )),
        }
    }
}

/// Date window carried in the filter set. Not forwarded to any endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    Any,
    Today,
    Week,
    Month,
    Year,
}

impl FromStr for DateRange {
    type Err = AlumnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "" => Ok(Self::Any),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(AlumnetError::invalid_input_field(
                format!("Unknown date range '{}'", other),
                "date_range",
            )),
        }
    }
}

/// Filter set attached to every query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(rename = "type", default)]
    pub kind: TypeFilter,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = non_blank(batch.into());
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }
}

/// Blank strings mean "no constraint"
pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A single ranked hit in the merged result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: ResultKind,
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub url: String,
    pub score: u32,
}

/// Key modifiers and keys the search surface reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

/// A key press with its modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }

    /// Ctrl+K or Cmd+K
    pub fn is_open_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && matches!(self.key, Key::Char('k') | Key::Char('K'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_parse() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "Jobs".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(ResultKind::Job)
        );
        assert!("people".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn test_type_filter_admits() {
        assert!(TypeFilter::All.admits(ResultKind::Event));
        assert!(TypeFilter::Only(ResultKind::Alumni).admits(ResultKind::Alumni));
        assert!(!TypeFilter::Only(ResultKind::Alumni).admits(ResultKind::Post));
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let filter = SearchFilter::new().with_location("  ").with_batch(" 2019 ");
        assert_eq!(filter.location, None);
        assert_eq!(filter.batch.as_deref(), Some("2019"));
    }

    #[test]
    fn test_open_shortcut() {
        assert!(KeyInput::ctrl(Key::Char('k')).is_open_shortcut());
        assert!(KeyInput::meta(Key::Char('K')).is_open_shortcut());
        assert!(!KeyInput::plain(Key::Char('k')).is_open_shortcut());
    }
}
