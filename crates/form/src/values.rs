//! Data model for the job application form.
//!
//! The conditional fields (`relevantExperience`, `portfolioURL`,
//! `managementExperience`) live inside [`PositionDetails`], a tagged union
//! keyed by the selected position. A Manager value therefore has no
//! portfolio-URL slot at all, and a stale error for an inactive field is
//! unrepresentable rather than something validation has to clean up.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Position applied for. Drives which conditional fields exist.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
pub enum Position {
    #[default]
    Developer,
    Designer,
    Manager,
}

/// Per-position payload of the form.
///
/// Developer and Designer share the `relevant_experience` field; converting
/// between those two keeps it, every other payload starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "position")]
pub enum PositionDetails {
    Developer {
        relevant_experience: String,
    },
    Designer {
        relevant_experience: String,
        portfolio_url: String,
    },
    Manager {
        management_experience: String,
    },
}

impl Default for PositionDetails {
    fn default() -> Self {
        Self::Developer {
            relevant_experience: String::new(),
        }
    }
}

impl PositionDetails {
    /// The position tag of this payload.
    pub fn position(&self) -> Position {
        match self {
            Self::Developer { .. } => Position::Developer,
            Self::Designer { .. } => Position::Designer,
            Self::Manager { .. } => Position::Manager,
        }
    }

    /// Convert to the payload for `position`, keeping fields both variants
    /// share. Converting to the current position is a no-op.
    pub fn into_position(self, position: Position) -> Self {
        if self.position() == position {
            return self;
        }
        let experience = match self {
            Self::Developer {
                relevant_experience,
            }
            | Self::Designer {
                relevant_experience,
                ..
            } => relevant_experience,
            Self::Manager { .. } => String::new(),
        };
        match position {
            Position::Developer => Self::Developer {
                relevant_experience: experience,
            },
            Position::Designer => Self::Designer {
                relevant_experience: experience,
                portfolio_url: String::new(),
            },
            Position::Manager => Self::Manager {
                management_experience: String::new(),
            },
        }
    }

    pub fn relevant_experience(&self) -> Option<&str> {
        match self {
            Self::Developer {
                relevant_experience,
            }
            | Self::Designer {
                relevant_experience,
                ..
            } => Some(relevant_experience),
            Self::Manager { .. } => None,
        }
    }

    pub fn portfolio_url(&self) -> Option<&str> {
        match self {
            Self::Designer { portfolio_url, .. } => Some(portfolio_url),
            _ => None,
        }
    }

    pub fn management_experience(&self) -> Option<&str> {
        match self {
            Self::Manager {
                management_experience,
            } => Some(management_experience),
            _ => None,
        }
    }
}

/// One of the fixed skill checkboxes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Skill {
    Javascript,
    Css,
    Python,
}

impl Skill {
    /// Checkbox label as shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Javascript => "JavaScript",
            Self::Css => "CSS",
            Self::Python => "Python",
        }
    }
}

/// The fixed skill set. Exactly these three flags, no dynamic keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSkills {
    pub javascript: bool,
    pub css: bool,
    pub python: bool,
}

impl AdditionalSkills {
    /// True if at least one skill is selected.
    pub fn any(&self) -> bool {
        self.javascript || self.css || self.python
    }

    pub fn get(&self, skill: Skill) -> bool {
        match skill {
            Skill::Javascript => self.javascript,
            Skill::Css => self.css,
            Skill::Python => self.python,
        }
    }

    pub fn set(&mut self, skill: Skill, selected: bool) {
        match skill {
            Skill::Javascript => self.javascript = selected,
            Skill::Css => self.css = selected,
            Skill::Python => self.python = selected,
        }
    }
}

/// Current form values. Text fields hold the raw string as typed; parsing
/// and format checks happen in [`crate::validate`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(flatten)]
    pub position: PositionDetails,
    pub additional_skills: AdditionalSkills,
    pub interview_time: String,
}

impl ApplicationValues {
    /// Current text of a scalar field, or `None` if the field is not a text
    /// field or not active under the current position.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::InterviewTime => Some(&self.interview_time),
            Field::RelevantExperience => self.position.relevant_experience(),
            Field::PortfolioUrl => self.position.portfolio_url(),
            Field::ManagementExperience => self.position.management_experience(),
            Field::Position | Field::AdditionalSkills => None,
        }
    }
}

/// Every field of the form, used both as the error-record key and as the
/// string-keyed name in update events. The strum serializations are the wire
/// names of the original form markup.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Field {
    #[strum(serialize = "fullName")]
    FullName,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "phoneNumber")]
    PhoneNumber,
    #[strum(serialize = "position")]
    Position,
    #[strum(serialize = "relevantExperience")]
    RelevantExperience,
    #[strum(serialize = "portfolioURL")]
    PortfolioUrl,
    #[strum(serialize = "managementExperience")]
    ManagementExperience,
    #[strum(serialize = "additionalSkills")]
    AdditionalSkills,
    #[strum(serialize = "interviewTime")]
    InterviewTime,
}

impl Field {
    /// Display label as rendered next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (Years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::InterviewTime => "Preferred Interview Time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_conversion_keeps_shared_experience() {
        let details = PositionDetails::Developer {
            relevant_experience: "4".into(),
        };
        let designer = details.into_position(Position::Designer);
        assert_eq!(designer.relevant_experience(), Some("4"));
        assert_eq!(designer.portfolio_url(), Some(""));

        let manager = designer.into_position(Position::Manager);
        assert_eq!(manager.relevant_experience(), None);
        assert_eq!(manager.management_experience(), Some(""));

        // Coming back from Manager the experience is gone.
        let developer = manager.into_position(Position::Developer);
        assert_eq!(developer.relevant_experience(), Some(""));
    }

    #[test]
    fn field_wire_names_round_trip() {
        for (name, field) in [
            ("fullName", Field::FullName),
            ("portfolioURL", Field::PortfolioUrl),
            ("additionalSkills", Field::AdditionalSkills),
            ("interviewTime", Field::InterviewTime),
        ] {
            assert_eq!(name.parse::<Field>(), Ok(field));
            assert_eq!(field.to_string(), name);
        }
        assert!("fullNamename".parse::<Field>().is_err());
    }
}
