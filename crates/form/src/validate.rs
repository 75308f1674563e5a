//! The validator: a pure, total function from the current values to an
//! error record. No short-circuit between fields; every applicable rule runs
//! and contributes at most one message per field.
//!
//! Conditional rules are reached by matching on [`PositionDetails`], so an
//! error can only ever exist for a field that is active under the current
//! position.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::values::{ApplicationValues, Field, PositionDetails};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").expect("email pattern");
    static ref URL_RE: Regex =
        Regex::new(r"(?i)^(https?|ftp)://[^\s/$.?#].[^\s]*$").expect("url pattern");
}

/// Error record: field -> human-readable message.
///
/// Absence of a key means the field currently passes; an empty record is the
/// sole submit-success criterion. The record is always rebuilt from scratch,
/// never merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Validate the current values. Deterministic, no side effects, never fails.
///
/// Empty input counts as "missing" for required checks; format checks only
/// run on non-empty input.
pub fn validate(values: &ApplicationValues) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if values.full_name.is_empty() {
        errors.insert(Field::FullName, "Full Name is required");
    }

    if values.email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&values.email) {
        errors.insert(Field::Email, "Email is invalid");
    }

    if values.phone_number.is_empty() {
        errors.insert(Field::PhoneNumber, "Phone Number is required");
    } else if !is_all_digits(&values.phone_number) {
        errors.insert(Field::PhoneNumber, "Phone Number must be a valid number");
    }

    match &values.position {
        PositionDetails::Developer {
            relevant_experience,
        }
        | PositionDetails::Designer {
            relevant_experience,
            ..
        } => {
            if relevant_experience.is_empty() {
                errors.insert(Field::RelevantExperience, "Relevant Experience is required");
            } else if !parse_number(relevant_experience).is_some_and(|n| n > 0.0) {
                errors.insert(
                    Field::RelevantExperience,
                    "Relevant Experience must be a number greater than 0",
                );
            }
        }
        PositionDetails::Manager {
            management_experience,
        } => {
            if management_experience.is_empty() {
                errors.insert(
                    Field::ManagementExperience,
                    "Management Experience is required",
                );
            }
        }
    }

    if let PositionDetails::Designer { portfolio_url, .. } = &values.position {
        if portfolio_url.is_empty() {
            errors.insert(Field::PortfolioUrl, "Portfolio URL is required");
        } else if !URL_RE.is_match(portfolio_url) {
            errors.insert(Field::PortfolioUrl, "Portfolio URL is invalid");
        }
    }

    if !values.additional_skills.any() {
        errors.insert(
            Field::AdditionalSkills,
            "At least one skill must be selected",
        );
    }

    if values.interview_time.is_empty() {
        errors.insert(
            Field::InterviewTime,
            "Preferred Interview Time is required",
        );
    }

    errors
}

/// Phone numbers must be digits only. A leading `+`, spaces and separators
/// all fail.
fn is_all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Canonical numeric parse for the experience field: `f64::from_str` on the
/// trimmed input, non-finite results rejected.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::values::{AdditionalSkills, Position};

    /// A fully valid developer application.
    fn valid_values() -> ApplicationValues {
        ApplicationValues {
            full_name: "Ada".into(),
            email: "ada@x.com".into(),
            phone_number: "5551234567".into(),
            position: PositionDetails::Developer {
                relevant_experience: "3".into(),
            },
            additional_skills: AdditionalSkills {
                javascript: true,
                css: false,
                python: false,
            },
            interview_time: "2024-01-01T10:00".into(),
        }
    }

    #[test]
    fn valid_developer_application_passes() {
        let errors = validate(&valid_values());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn empty_full_name_always_reported() {
        let mut values = valid_values();
        values.full_name.clear();
        assert_eq!(
            validate(&values).get(Field::FullName),
            Some("Full Name is required")
        );

        // Regardless of how broken the rest is.
        values.email.clear();
        values.phone_number = "call me".into();
        assert_eq!(
            validate(&values).get(Field::FullName),
            Some("Full Name is required")
        );
    }

    #[test]
    fn email_required_then_format_checked() {
        let mut values = valid_values();
        values.email.clear();
        assert_eq!(validate(&values).get(Field::Email), Some("Email is required"));

        values.email = "not-an-email".into();
        assert_eq!(validate(&values).get(Field::Email), Some("Email is invalid"));

        values.email = "a@b.c".into();
        assert_eq!(validate(&values).get(Field::Email), None);
    }

    #[test]
    fn phone_number_rejects_separators_and_plus() {
        let mut values = valid_values();
        values.phone_number = "555-1234".into();
        assert_eq!(
            validate(&values).get(Field::PhoneNumber),
            Some("Phone Number must be a valid number")
        );

        values.phone_number = "+15551234".into();
        assert_eq!(
            validate(&values).get(Field::PhoneNumber),
            Some("Phone Number must be a valid number")
        );

        values.phone_number = "0123456789".into();
        assert_eq!(validate(&values).get(Field::PhoneNumber), None);
    }

    #[test]
    fn experience_must_be_positive_number() {
        let mut values = valid_values();
        for bad in ["0", "-2", "abc", "NaN", "inf"] {
            values.position = PositionDetails::Developer {
                relevant_experience: bad.into(),
            };
            assert_eq!(
                validate(&values).get(Field::RelevantExperience),
                Some("Relevant Experience must be a number greater than 0"),
                "input {bad:?}"
            );
        }

        values.position = PositionDetails::Developer {
            relevant_experience: "2.5".into(),
        };
        assert_eq!(validate(&values).get(Field::RelevantExperience), None);
    }

    #[test]
    fn designer_requires_portfolio_url() {
        let mut values = valid_values();
        values.position = PositionDetails::Designer {
            relevant_experience: "3".into(),
            portfolio_url: String::new(),
        };
        assert_eq!(
            validate(&values).get(Field::PortfolioUrl),
            Some("Portfolio URL is required")
        );

        values.position = PositionDetails::Designer {
            relevant_experience: "3".into(),
            portfolio_url: "gopher://old.net".into(),
        };
        assert_eq!(
            validate(&values).get(Field::PortfolioUrl),
            Some("Portfolio URL is invalid")
        );

        for ok in ["https://ada.dev/work", "HTTP://ADA.DEV", "ftp://files.x.org/p"] {
            values.position = PositionDetails::Designer {
                relevant_experience: "3".into(),
                portfolio_url: ok.into(),
            };
            assert_eq!(validate(&values).get(Field::PortfolioUrl), None, "url {ok:?}");
        }
    }

    #[test]
    fn manager_requires_management_experience_only() {
        let mut values = valid_values();
        values.position = PositionDetails::Manager {
            management_experience: String::new(),
        };
        let errors = validate(&values);
        assert_eq!(
            errors.get(Field::ManagementExperience),
            Some("Management Experience is required")
        );
        // Developer/Designer rules must not fire for a manager.
        assert_eq!(errors.get(Field::RelevantExperience), None);
        assert_eq!(errors.get(Field::PortfolioUrl), None);
    }

    #[test]
    fn guard_gating_after_position_change() {
        // Manager with empty payload, then switch to Developer: no stale
        // management error may remain.
        let mut values = valid_values();
        values.position = PositionDetails::Manager {
            management_experience: String::new(),
        };
        assert!(validate(&values)
            .get(Field::ManagementExperience)
            .is_some());

        values.position = values.position.into_position(Position::Developer);
        let errors = validate(&values);
        assert_eq!(errors.get(Field::ManagementExperience), None);
        // The developer guard is now active instead.
        assert_eq!(
            errors.get(Field::RelevantExperience),
            Some("Relevant Experience is required")
        );
    }

    #[test]
    fn no_skills_selected_is_the_only_error() {
        let mut values = valid_values();
        values.additional_skills = AdditionalSkills::default();
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::AdditionalSkills),
            Some("At least one skill must be selected")
        );
    }

    #[test]
    fn interview_time_required_without_format_check() {
        let mut values = valid_values();
        values.interview_time.clear();
        assert_eq!(
            validate(&values).get(Field::InterviewTime),
            Some("Preferred Interview Time is required")
        );

        // Any non-empty string passes; there is no datetime format rule.
        values.interview_time = "whenever works".into();
        assert_eq!(validate(&values).get(Field::InterviewTime), None);
    }

    #[test]
    fn validate_is_deterministic() {
        let mut values = valid_values();
        values.email = "broken".into();
        values.phone_number = "x".into();
        assert_eq!(validate(&values), validate(&values));
    }
}
