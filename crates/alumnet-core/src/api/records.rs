//! Loosely typed collection records and their mapping into search results
//!
//! The backend returns records with optional, sometimes mistyped fields.
//! Every field is read defensively: a missing or wrongly typed value is
//! treated as absent rather than failing the whole response.

use serde_json::{Map, Value};

use crate::types::{ResultKind, SearchResult};

const POST_TITLE_CHARS: usize = 60;
const EVENT_DESCRIPTION_CHARS: usize = 120;

/// A result waiting to be scored, plus the text its relevance is judged on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub result: SearchResult,
    pub text: String,
}

/// Name of the array field each collection response carries
pub fn collection_field(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Post => "posts",
        ResultKind::Alumni => "alumni",
        ResultKind::Event => "events",
        ResultKind::Job => "jobs",
        ResultKind::Message => "messages",
    }
}

/// Fixed page a non-profile result navigates to
pub fn collection_page(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Post => "/feed",
        ResultKind::Alumni => "/alumni",
        ResultKind::Event => "/events",
        ResultKind::Job => "/jobs",
        ResultKind::Message => "/messages",
    }
}

/// Turn a decoded response body into candidates
///
/// A body without the named array (or with something other than an array
/// there) yields no candidates. Entries that are not objects are skipped.
pub fn parse_collection(kind: ResultKind, body: &Value) -> Vec<Candidate> {
    let Some(items) = body.get(collection_field(kind)).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|record| match kind {
            ResultKind::Post => post_candidate(record),
            ResultKind::Alumni => alumni_candidate(record),
            ResultKind::Event => event_candidate(record),
            ResultKind::Job => job_candidate(record),
            ResultKind::Message => message_candidate(record),
        })
        .collect()
}

fn post_candidate(record: &Map<String, Value>) -> Candidate {
    let content = text_field(record, &["content", "body"]);
    let author = record
        .get("author")
        .and_then(Value::as_object)
        .and_then(person_name)
        .or_else(|| text_field(record, &["author", "author_name"]));

    let title = content
        .as_deref()
        .map(|c| excerpt(c, POST_TITLE_CHARS))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Post".to_string());
    let description = author
        .as_deref()
        .map(|a| format!("by {}", a))
        .unwrap_or_default();

    Candidate {
        text: join_text([content.as_deref(), author.as_deref()]),
        result: SearchResult {
            kind: ResultKind::Post,
            id: id_field(record),
            title,
            description,
            image: text_field(record, &["image_url", "image"]),
            url: collection_page(ResultKind::Post).to_string(),
            score: 0,
        },
    }
}

fn alumni_candidate(record: &Map<String, Value>) -> Candidate {
    let name = person_name(record);
    let headline = text_field(record, &["headline", "current_position"]);
    let company = text_field(record, &["current_company", "company"]);
    let batch = text_field(record, &["batch", "graduation_year"]);
    let bio = text_field(record, &["bio"]);

    let role = match (headline.as_deref(), company.as_deref()) {
        (Some(h), Some(c)) => Some(format!("{} at {}", h, c)),
        (Some(h), None) => Some(h.to_string()),
        (None, Some(c)) => Some(c.to_string()),
        (None, None) => None,
    };
    let description = [role, batch.as_deref().map(|b| format!("Batch {}", b))]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    let id = id_field(record);
    Candidate {
        text: join_text([
            name.as_deref(),
            headline.as_deref(),
            company.as_deref(),
            bio.as_deref(),
        ]),
        result: SearchResult {
            kind: ResultKind::Alumni,
            url: format!("/profile/{}", id),
            id,
            title: name.unwrap_or_else(|| "Alumni".to_string()),
            description,
            image: text_field(record, &["profile_picture", "avatar_url"]),
            score: 0,
        },
    }
}

fn event_candidate(record: &Map<String, Value>) -> Candidate {
    let title = text_field(record, &["title", "name"]);
    let description = text_field(record, &["description"]);
    let location = text_field(record, &["location"]);

    Candidate {
        text: join_text([title.as_deref(), description.as_deref(), location.as_deref()]),
        result: SearchResult {
            kind: ResultKind::Event,
            id: id_field(record),
            title: title.unwrap_or_else(|| "Event".to_string()),
            description: description
                .as_deref()
                .map(|d| excerpt(d, EVENT_DESCRIPTION_CHARS))
                .unwrap_or_default(),
            image: text_field(record, &["image_url", "banner_image"]),
            url: collection_page(ResultKind::Event).to_string(),
            score: 0,
        },
    }
}

fn job_candidate(record: &Map<String, Value>) -> Candidate {
    let title = text_field(record, &["title"]);
    let company = text_field(record, &["company", "company_name"]);
    let location = text_field(record, &["location"]);
    let description = text_field(record, &["description"]);

    Candidate {
        text: join_text([
            title.as_deref(),
            company.as_deref(),
            location.as_deref(),
            description.as_deref(),
        ]),
        result: SearchResult {
            kind: ResultKind::Job,
            id: id_field(record),
            title: title.unwrap_or_else(|| "Job".to_string()),
            description: join_with(" · ", [company.as_deref(), location.as_deref()]),
            image: text_field(record, &["company_logo"]),
            url: collection_page(ResultKind::Job).to_string(),
            score: 0,
        },
    }
}

fn message_candidate(record: &Map<String, Value>) -> Candidate {
    let content = text_field(record, &["content", "body"]);
    let sender = record
        .get("sender")
        .and_then(Value::as_object)
        .and_then(person_name);

    Candidate {
        text: join_text([content.as_deref(), sender.as_deref()]),
        result: SearchResult {
            kind: ResultKind::Message,
            id: id_field(record),
            title: sender.clone().unwrap_or_else(|| "Message".to_string()),
            description: content
                .as_deref()
                .map(|c| excerpt(c, POST_TITLE_CHARS))
                .unwrap_or_default(),
            image: None,
            url: collection_page(ResultKind::Message).to_string(),
            score: 0,
        },
    }
}

/// First present key, as a trimmed non-empty string. Numbers are accepted.
fn text_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn id_field(record: &Map<String, Value>) -> String {
    text_field(record, &["id", "_id"]).unwrap_or_default()
}

fn person_name(record: &Map<String, Value>) -> Option<String> {
    let full = join_with(
        " ",
        [
            text_field(record, &["first_name"]).as_deref(),
            text_field(record, &["last_name"]).as_deref(),
        ],
    );
    if full.is_empty() {
        text_field(record, &["name", "full_name"])
    } else {
        Some(full)
    }
}

fn join_text<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    join_with(" ", parts)
}

fn join_with<'a>(separator: &str, parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
