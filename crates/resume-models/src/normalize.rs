//! Normalization and canonical serialization.
//!
//! Stored documents and request bodies are treated as untrusted: any shape
//! that is an object at the top level is mapped onto a fully populated
//! [`ResumeDocument`], filling gaps with defaults instead of failing.

use serde_json::{Map, Value};

use crate::document::{Achievement, Experience, Profile, ResumeDocument, SkillGroup};
use crate::error::{DocumentError, Result};

/// Maps arbitrary structured input onto a well-formed document.
///
/// Missing fields get their defaults and unknown fields are dropped.
/// Only a non-object top level is rejected.
pub fn normalize(raw: &Value) -> Result<ResumeDocument> {
    let obj = raw.as_object().ok_or(DocumentError::NotAnObject {
        found: kind_of(raw),
    })?;

    let profile = obj.get("profile").and_then(Value::as_object);

    Ok(ResumeDocument {
        profile: profile.map(profile_from).unwrap_or_default(),
        skills: objects(obj.get("skills")).map(skill_from).collect(),
        experience: objects(obj.get("experience"))
            .map(experience_from)
            .collect(),
        achievements: objects(obj.get("achievements"))
            .map(achievement_from)
            .collect(),
    })
}

/// Decodes JSON bytes and normalizes the result.
pub fn parse(bytes: &[u8]) -> Result<ResumeDocument> {
    let raw: Value = serde_json::from_slice(bytes)?;
    normalize(&raw)
}

/// Serializes a document to its canonical on-disk form.
///
/// Pretty-printed with two-space indentation, keys in model order,
/// non-ASCII characters written verbatim, no trailing newline.
pub fn serialize(doc: &ResumeDocument) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(doc)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn profile_from(obj: &Map<String, Value>) -> Profile {
    Profile {
        name: text(obj, "name"),
        title: text(obj, "title"),
        email: text(obj, "email"),
        phone: text(obj, "phone"),
        linkedin: text(obj, "linkedin"),
        location: text(obj, "location"),
        summary: text(obj, "summary"),
    }
}

fn skill_from(obj: &Map<String, Value>) -> SkillGroup {
    // Some exports store items as a list; the model keeps one string.
    let items = match obj.get("items") {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        _ => text(obj, "items"),
    };

    SkillGroup {
        category: text(obj, "category"),
        items,
    }
}

fn experience_from(obj: &Map<String, Value>) -> Experience {
    Experience {
        title: text(obj, "title"),
        company: text(obj, "company"),
        period: text(obj, "period"),
        responsibilities: lines(obj.get("responsibilities")),
    }
}

fn achievement_from(obj: &Map<String, Value>) -> Achievement {
    Achievement {
        title: text(obj, "title"),
        points: lines(obj.get("points")),
    }
}

/// Renders a scalar as text. Null and containers have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).and_then(scalar_text).unwrap_or_default()
}

fn lines(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(values)) => values.iter().filter_map(scalar_text).collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Iterates the object elements of a sequence field, skipping anything else.
fn objects(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}
