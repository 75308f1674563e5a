//! The form state store: one owned object holding the three state slots
//! (current values, last error record, submitted snapshot), with the update
//! operations as its only mutators.

use crate::errors::FormError;
use crate::validate::{ValidationErrors, validate};
use crate::values::{ApplicationValues, Field, Position, Skill};

/// Mutable form state.
///
/// The presentation layer owns a `FormStore` exclusively, forwards raw input
/// events into the setters and the submit event into [`FormStore::submit`].
/// Snapshot capture stays a caller decision so the store itself carries no
/// "popup open" notion.
#[derive(Debug, Default, Clone)]
pub struct FormStore {
    values: ApplicationValues,
    errors: ValidationErrors,
    submitted: Option<ApplicationValues>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ApplicationValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current error message for one field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Replace the text of one scalar field, leaving every other field
    /// untouched. Conditional fields are only writable while their position
    /// guard holds.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        use crate::values::PositionDetails::*;

        let value = value.into();
        match field {
            Field::FullName => self.values.full_name = value,
            Field::Email => self.values.email = value,
            Field::PhoneNumber => self.values.phone_number = value,
            Field::InterviewTime => self.values.interview_time = value,
            Field::RelevantExperience => match &mut self.values.position {
                Developer {
                    relevant_experience,
                }
                | Designer {
                    relevant_experience,
                    ..
                } => *relevant_experience = value,
                Manager { .. } => return Err(FormError::NotActive(field)),
            },
            Field::PortfolioUrl => match &mut self.values.position {
                Designer { portfolio_url, .. } => *portfolio_url = value,
                _ => return Err(FormError::NotActive(field)),
            },
            Field::ManagementExperience => match &mut self.values.position {
                Manager {
                    management_experience,
                } => *management_experience = value,
                _ => return Err(FormError::NotActive(field)),
            },
            Field::Position | Field::AdditionalSkills => return Err(FormError::NotText(field)),
        }
        Ok(())
    }

    /// Switch the applied-for position, converting the conditional payload
    /// (see [`crate::PositionDetails::into_position`]).
    pub fn set_position(&mut self, position: Position) {
        let details = std::mem::take(&mut self.values.position);
        self.values.position = details.into_position(position);
    }

    /// Flip exactly one skill checkbox.
    pub fn set_skill(&mut self, skill: Skill, selected: bool) {
        self.values.additional_skills.set(skill, selected);
    }

    /// String-keyed update, mirroring raw `(name, value)` input events.
    /// Skill checkboxes go through [`FormStore::set_skill`] instead.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = name
            .parse::<Field>()
            .map_err(|_| FormError::UnknownField(name.to_string()))?;
        match field {
            Field::Position => {
                let position = value
                    .parse::<Position>()
                    .map_err(|_| FormError::UnknownPosition(value.to_string()))?;
                self.set_position(position);
                Ok(())
            }
            _ => self.set_text(field, value),
        }
    }

    /// Validate the current values, replacing the error record wholesale.
    /// Returns true iff the record came back empty.
    pub fn submit(&mut self) -> bool {
        self.errors = validate(&self.values);
        self.errors.is_empty()
    }

    /// Copy the current values into the snapshot slot. Intended to be called
    /// by the presentation layer right after a successful [`FormStore::submit`];
    /// an existing snapshot is left untouched.
    pub fn capture_snapshot(&mut self) {
        if self.submitted.is_none() {
            self.submitted = Some(self.values.clone());
        }
    }

    pub fn snapshot(&self) -> Option<&ApplicationValues> {
        self.submitted.as_ref()
    }

    /// Drop the snapshot when the confirmation is dismissed.
    pub fn clear_snapshot(&mut self) {
        self.submitted = None;
    }
}
