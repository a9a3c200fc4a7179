use thiserror::Error;
use tracing::{debug, info};

use crate::{
    core::ProjectRepository,
    models::{NewProject, ProjectId},
    validation::Validatable,
};

pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const PEOPLE_MIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Invalid input. Please make sure all fields are filled in correctly.")]
    Rejected,
}

/// Raw values of the project form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Coerces a form field to a number: blank is 0, anything unparseable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

impl ProjectInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    /// Trims and validates the three fields.
    pub fn gather(&self) -> Result<NewProject, InvalidInput> {
        let title = self.title.trim();
        let description = self.description.trim();
        let people = coerce_number(&self.people);

        let checks = [
            Validatable::new(title).required(),
            Validatable::new(description)
                .required()
                .min_length(DESCRIPTION_MIN_LENGTH),
            Validatable::new(people).required().min(PEOPLE_MIN),
        ];
        if !checks.iter().all(Validatable::is_valid) {
            debug!(input = ?self, "form rejected by validation");
            return Err(InvalidInput::Rejected);
        }

        // the store counts whole people
        if people.fract() != 0.0 || people > f64::from(u32::MAX) {
            debug!(people, "people count is not a whole number");
            return Err(InvalidInput::Rejected);
        }

        Ok(NewProject {
            title: title.to_string(),
            description: description.to_string(),
            people: people as u32,
        })
    }

    /// Creates the project on success and clears the form. On failure the
    /// form is left as typed and the store is not touched.
    pub fn submit<R>(&mut self, repo: &R) -> Result<ProjectId, InvalidInput>
    where
        R: ProjectRepository + ?Sized,
    {
        let new_project = self.gather()?;
        let id = repo.create_project(
            &new_project.title,
            &new_project.description,
            new_project.people,
        );
        info!(%id, title = %new_project.title, "project submitted");
        self.clear();
        Ok(id)
    }
}
