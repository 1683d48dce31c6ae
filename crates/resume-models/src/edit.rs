//! Edit operations on a document value.
//!
//! The editor holds one [`ResumeDocument`] value and replaces it with the
//! result of [`ResumeDocument::apply`]. Persisting happens only when the
//! caller hands the final value to the repository.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::{Achievement, Experience, Profile, ResumeDocument, SkillGroup};
use crate::error::EditError;

/// A reorderable collection of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Skills,
    Experience,
    Achievements,
}

impl Section {
    /// Returns the field name of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Achievements => "achievements",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single change to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentEdit {
    SetProfile(Profile),
    AddSkill,
    RemoveSkill { index: usize },
    UpdateSkill { index: usize, skill: SkillGroup },
    AddExperience,
    RemoveExperience { index: usize },
    AddResponsibility { experience: usize },
    RemoveResponsibility { experience: usize, index: usize },
    AddAchievement,
    RemoveAchievement { index: usize },
    AddAchievementPoint { achievement: usize },
    RemoveAchievementPoint { achievement: usize, index: usize },
    /// Moves the entry at `from` so it ends up at `to`.
    Move { section: Section, from: usize, to: usize },
}

impl ResumeDocument {
    /// Applies an edit, returning the updated document.
    ///
    /// The original is left untouched, so a failed edit loses nothing.
    pub fn apply(&self, edit: DocumentEdit) -> Result<Self, EditError> {
        let mut doc = self.clone();
        match edit {
            DocumentEdit::SetProfile(profile) => doc.profile = profile,
            DocumentEdit::AddSkill => doc.skills.push(SkillGroup::default()),
            DocumentEdit::RemoveSkill { index } => {
                check(&doc.skills, "skills", index)?;
                doc.skills.remove(index);
            }
            DocumentEdit::UpdateSkill { index, skill } => {
                check(&doc.skills, "skills", index)?;
                doc.skills[index] = skill;
            }
            DocumentEdit::AddExperience => doc.experience.push(Experience::default()),
            DocumentEdit::RemoveExperience { index } => {
                check(&doc.experience, "experience", index)?;
                doc.experience.remove(index);
            }
            DocumentEdit::AddResponsibility { experience } => {
                check(&doc.experience, "experience", experience)?;
                doc.experience[experience].responsibilities.push(String::new());
            }
            DocumentEdit::RemoveResponsibility { experience, index } => {
                check(&doc.experience, "experience", experience)?;
                let lines = &mut doc.experience[experience].responsibilities;
                check(lines, "responsibilities", index)?;
                lines.remove(index);
            }
            DocumentEdit::AddAchievement => doc.achievements.push(Achievement::default()),
            DocumentEdit::RemoveAchievement { index } => {
                check(&doc.achievements, "achievements", index)?;
                doc.achievements.remove(index);
            }
            DocumentEdit::AddAchievementPoint { achievement } => {
                check(&doc.achievements, "achievements", achievement)?;
                doc.achievements[achievement].points.push(String::new());
            }
            DocumentEdit::RemoveAchievementPoint { achievement, index } => {
                check(&doc.achievements, "achievements", achievement)?;
                let points = &mut doc.achievements[achievement].points;
                check(points, "points", index)?;
                points.remove(index);
            }
            DocumentEdit::Move { section, from, to } => match section {
                Section::Skills => move_entry(&mut doc.skills, section, from, to)?,
                Section::Experience => move_entry(&mut doc.experience, section, from, to)?,
                Section::Achievements => move_entry(&mut doc.achievements, section, from, to)?,
            },
        }
        Ok(doc)
    }
}

fn check<T>(items: &[T], section: &'static str, index: usize) -> Result<(), EditError> {
    if index < items.len() {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange {
            section,
            index,
            len: items.len(),
        })
    }
}

fn move_entry<T>(items: &mut Vec<T>, section: Section, from: usize, to: usize) -> Result<(), EditError> {
    check(items, section.as_str(), from)?;
    check(items, section.as_str(), to)?;
    let entry = items.remove(from);
    items.insert(to, entry);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_skills(categories: &[&str]) -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.skills = categories
            .iter()
            .map(|c| SkillGroup::new(*c, ""))
            .collect();
        doc
    }

    fn categories(doc: &ResumeDocument) -> Vec<&str> {
        doc.skills.iter().map(|s| s.category.as_str()).collect()
    }

    #[test]
    fn test_add_and_remove_skill() {
        let doc = ResumeDocument::default().apply(DocumentEdit::AddSkill).unwrap();
        assert_eq!(doc.skills, vec![SkillGroup::default()]);

        let doc = doc.apply(DocumentEdit::RemoveSkill { index: 0 }).unwrap();
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_update_skill() {
        let doc = doc_with_skills(&["a"])
            .apply(DocumentEdit::UpdateSkill {
                index: 0,
                skill: SkillGroup::new("Cloud", "AWS, GCP"),
            })
            .unwrap();
        assert_eq!(doc.skills[0].items, "AWS, GCP");
    }

    #[test]
    fn test_remove_out_of_range() {
        let err = doc_with_skills(&["a"])
            .apply(DocumentEdit::RemoveSkill { index: 3 })
            .unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                section: "skills",
                index: 3,
                len: 1
            }
        );
    }

    #[test]
    fn test_responsibility_edits() {
        let doc = ResumeDocument::default()
            .apply(DocumentEdit::AddExperience)
            .and_then(|d| d.apply(DocumentEdit::AddResponsibility { experience: 0 }))
            .and_then(|d| d.apply(DocumentEdit::AddResponsibility { experience: 0 }))
            .unwrap();
        assert_eq!(doc.experience[0].responsibilities.len(), 2);

        let doc = doc
            .apply(DocumentEdit::RemoveResponsibility {
                experience: 0,
                index: 1,
            })
            .unwrap();
        assert_eq!(doc.experience[0].responsibilities.len(), 1);

        let err = doc
            .apply(DocumentEdit::AddResponsibility { experience: 1 })
            .unwrap_err();
        assert!(matches!(
            err,
            EditError::IndexOutOfRange {
                section: "experience",
                ..
            }
        ));
    }

    #[test]
    fn test_achievement_point_edits() {
        let doc = ResumeDocument::default()
            .apply(DocumentEdit::AddAchievement)
            .and_then(|d| d.apply(DocumentEdit::AddAchievementPoint { achievement: 0 }))
            .unwrap();
        assert_eq!(doc.achievements[0].points, vec![String::new()]);

        let err = doc
            .apply(DocumentEdit::RemoveAchievementPoint {
                achievement: 0,
                index: 5,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            EditError::IndexOutOfRange {
                section: "points",
                ..
            }
        ));

        let doc = doc.apply(DocumentEdit::RemoveAchievement { index: 0 }).unwrap();
        assert!(doc.achievements.is_empty());
    }

    #[test]
    fn test_failed_edit_keeps_original() {
        let doc = doc_with_skills(&["a", "b"]);
        let result = doc.apply(DocumentEdit::RemoveSkill { index: 9 });

        assert!(result.is_err());
        assert_eq!(categories(&doc), vec!["a", "b"]);
    }

    #[test]
    fn test_move_entry() {
        let doc = doc_with_skills(&["a", "b", "c"])
            .apply(DocumentEdit::Move {
                section: Section::Skills,
                from: 0,
                to: 2,
            })
            .unwrap();
        assert_eq!(categories(&doc), vec!["b", "c", "a"]);

        let doc = doc
            .apply(DocumentEdit::Move {
                section: Section::Skills,
                from: 2,
                to: 0,
            })
            .unwrap();
        assert_eq!(categories(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_out_of_range() {
        let result = doc_with_skills(&["a", "b"]).apply(DocumentEdit::Move {
            section: Section::Skills,
            from: 0,
            to: 2,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_set_profile() {
        let profile = Profile {
            name: "Ann".to_string(),
            ..Profile::default()
        };
        let doc = ResumeDocument::default()
            .apply(DocumentEdit::SetProfile(profile.clone()))
            .unwrap();
        assert_eq!(doc.profile, profile);
    }

    #[test]
    fn test_edit_deserializes_from_tagged_json() {
        let edit: DocumentEdit =
            serde_json::from_str(r#"{"op": "move", "section": "experience", "from": 1, "to": 0}"#)
                .unwrap();
        assert_eq!(
            edit,
            DocumentEdit::Move {
                section: Section::Experience,
                from: 1,
                to: 0
            }
        );
    }
}
