use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the store when a project is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub(crate) fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProjectId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            other => Err(anyhow::anyhow!("Invalid ProjectStatus value: {}", other)),
        }
    }
}

/// A tracked project.
///
/// Only the store hands these out; `status` is the one field that changes
/// after creation, and only through `ProjectState::update_project_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// "1 person" or "<n> people"
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }
}

/// Validated form output, ready to be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(people: u32) -> Project {
        Project {
            id: ProjectId::new_v4(),
            title: "Build API".to_string(),
            description: "A backend service".to_string(),
            people,
            status: ProjectStatus::Active,
        }
    }

    #[test]
    fn people_label_is_singular_for_one() {
        assert_eq!(project(1).people_label(), "1 person");
        assert_eq!(project(0).people_label(), "0 people");
        assert_eq!(project(3).people_label(), "3 people");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<ProjectStatus>().unwrap(), ProjectStatus::Active);
        assert_eq!(" finished ".parse::<ProjectStatus>().unwrap(), ProjectStatus::Finished);
        assert!("done".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn project_serializes_with_lowercase_status() {
        let json = serde_json::to_value(project(2)).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["people"], 2);
    }

    #[test]
    fn project_id_round_trips_through_display() {
        let id = ProjectId::new_v4();
        assert_eq!(id.to_string().parse::<ProjectId>().unwrap(), id);
    }
}
