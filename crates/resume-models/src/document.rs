//! Résumé document types.
//!
//! Field declaration order is the canonical key order of the serialized
//! document, so reordering fields here changes the on-disk format.

use serde::{Deserialize, Serialize};

/// Contact and headline information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
    pub summary: String,
}

/// A named group of skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading (e.g. "Languages & Frameworks").
    pub category: String,
    /// Free-text, comma-separated list. Not split by this crate.
    pub items: String,
}

impl SkillGroup {
    /// Creates a skill group.
    pub fn new(category: impl Into<String>, items: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: items.into(),
        }
    }
}

/// A position held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

impl Experience {
    /// Creates an experience entry with no responsibilities.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            period: period.into(),
            responsibilities: Vec::new(),
        }
    }

    /// Adds a responsibility line.
    pub fn with_responsibility(mut self, line: impl Into<String>) -> Self {
        self.responsibilities.push(line.into());
        self
    }
}

/// A highlighted achievement with supporting points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub points: Vec<String>,
}

impl Achievement {
    /// Creates an achievement with no points.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: Vec::new(),
        }
    }

    /// Adds a supporting point.
    pub fn with_point(mut self, point: impl Into<String>) -> Self {
        self.points.push(point.into());
        self
    }
}

/// The root résumé document.
///
/// `Default` is the empty document: every profile field is `""` and every
/// collection is empty. Collections are always present, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Experience>,
    pub achievements: Vec<Achievement>,
}

impl ResumeDocument {
    /// Returns the empty document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Drops whitespace-only responsibilities and achievement points.
    ///
    /// The editor form leaves blank inputs behind when a line is added but
    /// never typed into; these are removed before saving.
    pub fn without_blank_lines(mut self) -> Self {
        for exp in &mut self.experience {
            exp.responsibilities.retain(|line| !line.trim().is_empty());
        }
        for ach in &mut self.achievements {
            ach.points.retain(|point| !point.trim().is_empty());
        }
        self
    }
}
