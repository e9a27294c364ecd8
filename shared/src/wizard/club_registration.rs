use crate::dto::club::CreateClubRequest;
use crate::error::{Result, SharedError};
use crate::reference;
use crate::wizard::rules::{
    not_blank, validate_country, validate_founded_year, validate_gender, validate_level,
    validate_optional_url,
};
use crate::wizard::{StepErrors, Workflow};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClubIdentityStep {
    #[validate(custom(function = "not_blank", message = "Club name is required"))]
    #[validate(length(
        min = 2,
        max = 100,
        message = "Club name must be between 2 and 100 characters"
    ))]
    pub name: String,

    #[validate(custom = "validate_country")]
    pub country: String,

    #[validate(custom = "validate_level")]
    pub level: String,

    #[validate(custom = "validate_gender")]
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClubContactStep {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(custom = "validate_optional_url")]
    pub website: String,

    #[validate(custom = "validate_founded_year")]
    pub founded_year: String,
}

/// Two-step club creation; leaving the contact step creates the club.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRegistrationForm {
    pub identity: ClubIdentityStep,
    pub contact: ClubContactStep,
}

impl Workflow for ClubRegistrationForm {
    type Payload = CreateClubRequest;

    fn step_count(&self) -> usize {
        2
    }

    fn step_title(&self, step: usize) -> &'static str {
        match step {
            1 => "Club identity",
            2 => "Contact details",
            _ => "",
        }
    }

    fn validate_step(&self, step: usize) -> std::result::Result<(), StepErrors> {
        let mut errors = StepErrors::new();
        match step {
            1 => errors.absorb(self.identity.validate()),
            2 => errors.absorb(self.contact.validate()),
            _ => {}
        }
        errors.into_result()
    }

    fn submits_on(&self, step: usize) -> bool {
        step == 2
    }

    fn payload(&self) -> Result<CreateClubRequest> {
        let country = reference::canonical_country(&self.identity.country).ok_or_else(|| {
            SharedError::Validation(format!(
                "\"{}\" is not a supported country",
                self.identity.country.trim()
            ))
        })?;

        let website = self.contact.website.trim();
        let founded = self.contact.founded_year.trim();
        let founded_year = if founded.is_empty() {
            None
        } else {
            Some(founded.parse::<i32>().map_err(|_| {
                SharedError::Validation(format!("Invalid founded year \"{}\"", founded))
            })?)
        };

        Ok(CreateClubRequest {
            name: self.identity.name.trim().to_string(),
            country: country.to_string(),
            level: self.identity.level.clone(),
            gender: self.identity.gender.clone(),
            email: self.contact.email.trim().to_string(),
            website: (!website.is_empty()).then(|| website.to_string()),
            founded_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Advance, WizardState};
    use pretty_assertions::assert_eq;

    fn identity() -> ClubIdentityStep {
        ClubIdentityStep {
            name: "FC Alpha".to_string(),
            country: "france".to_string(),
            level: "Academy".to_string(),
            gender: "Female".to_string(),
        }
    }

    #[test]
    fn test_identity_errors() {
        let form = ClubRegistrationForm {
            identity: ClubIdentityStep {
                name: "A".to_string(),
                country: "Atlantis".to_string(),
                level: "Pro".to_string(),
                gender: "Female".to_string(),
            },
            ..Default::default()
        };
        let errors = form.validate_step(1).unwrap_err();
        assert_eq!(
            errors.messages(),
            &[
                "\"Atlantis\" is not a supported country".to_string(),
                concat!(
                    "\"Pro\" is not a valid level. ",
                    "Allowed: Professional, Semi-Professional, Amateur, Academy, Youth"
                )
                .to_string(),
                "Club name must be between 2 and 100 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_contact_step_is_not_checked_on_step_one() {
        let form = ClubRegistrationForm {
            identity: identity(),
            ..Default::default()
        };
        assert!(form.validate_step(1).is_ok());
        assert!(form.validate_step(2).is_err());
    }

    #[test]
    fn test_wizard_submits_canonical_payload() {
        let mut state = WizardState::new(ClubRegistrationForm {
            identity: identity(),
            contact: ClubContactStep {
                email: "scouting@fc-alpha.example.com".to_string(),
                website: String::new(),
                founded_year: "1921".to_string(),
            },
        });
        assert_eq!(state.begin_advance(), Advance::Moved(2));
        match state.begin_advance() {
            Advance::Submit(request) => {
                assert_eq!(request.country, "France");
                assert_eq!(request.website, None);
                assert_eq!(request.founded_year, Some(1921));
            }
            other => panic!("expected submit, got {other:?}"),
        }
        assert!(state.finish_submit(&Ok(())));
        assert!(state.is_submitted());
    }
}
