//! Registration form schemas
//!
//! Each step of the registration form has a schema: an ordered list of
//! field rules checked when the user tries to move forward or submit.

use chrono::{NaiveDate, Utc};
use crate::utils::errors::FieldErrors;
use crate::utils::helpers::{file_extension, has_exact_digits, is_valid_email};
use super::draft::{
    AddressField, DraftField, FieldRef, FounderField, LegalField, ProfileField, RegistrationDraft, Step,
};

const YES_NO: &[&str] = &["Yes", "No"];

/// Types of input expected in a field
#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    Text,
    /// Numeric text within an inclusive range
    Number { min: f64, max: f64, integer: bool },
    /// `YYYY-MM-DD`, not later than today
    PastDate,
    Email,
    /// Exactly this many ASCII digits
    Digits(usize),
    Choice(&'static [&'static str]),
    File(&'static [&'static str]),
    /// Checkbox that must be ticked
    Consent,
}

/// Validation rule for a single field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub field: DraftField,
    pub label: &'static str,
    pub required: bool,
    pub input_type: InputType,
    pub max_length: Option<usize>,
    /// Pattern to match (regex)
    pub pattern: Option<&'static str>,
    /// Custom validation message
    pub error_message: Option<&'static str>,
}

impl FieldRule {
    fn new(field: impl Into<DraftField>, label: &'static str, input_type: InputType) -> Self {
        Self {
            field: field.into(),
            label,
            required: false,
            input_type,
            max_length: None,
            pattern: None,
            error_message: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    fn pattern(mut self, pattern: &'static str, message: &'static str) -> Self {
        self.pattern = Some(pattern);
        self.error_message = Some(message);
        self
    }

    fn message(mut self, message: &'static str) -> Self {
        self.error_message = Some(message);
        self
    }

    /// Check a value, returning the message to show when it is invalid
    pub fn check(&self, value: FieldRef<'_>) -> Option<String> {
        if value.is_blank() {
            return if self.required {
                Some(self.required_message())
            } else {
                None
            };
        }

        match value {
            FieldRef::Text(text) => self.check_text(text.trim()),
            FieldRef::File(Some(file)) => match &self.input_type {
                InputType::File(accepted) => {
                    let allowed = file_extension(&file.name)
                        .map(|ext| accepted.contains(&ext.as_str()))
                        .unwrap_or(false);
                    (!allowed).then(|| {
                        format!("{} must be one of: {}", self.label, accepted.join(", "))
                    })
                }
                _ => None,
            },
            FieldRef::File(None) | FieldRef::Flag(_) => None,
        }
    }

    fn required_message(&self) -> String {
        match self.input_type {
            InputType::Consent => "You must accept the Terms & Conditions".to_string(),
            InputType::File(_) => format!("{} must be uploaded", self.label),
            _ => format!("{} is required", self.label),
        }
    }

    fn invalid(&self, fallback: String) -> Option<String> {
        Some(self.error_message.map(str::to_string).unwrap_or(fallback))
    }

    fn check_text(&self, input: &str) -> Option<String> {
        // Check length constraints
        if let Some(max_length) = self.max_length {
            if input.chars().count() > max_length {
                return self.invalid(format!("{} is too long (maximum {} characters)", self.label, max_length));
            }
        }

        // Check pattern matching
        if let Some(pattern) = self.pattern {
            match regex::Regex::new(pattern) {
                Ok(regex) if regex.is_match(input) => {}
                Ok(_) => return self.invalid(format!("{} format is invalid", self.label)),
                Err(e) => {
                    tracing::error!(pattern = pattern, error = %e, "Invalid validation pattern");
                    return self.invalid(format!("{} cannot be validated", self.label));
                }
            }
        }

        // Check input type specific validation
        match &self.input_type {
            InputType::Number { min, max, integer } => {
                let parsed = if *integer {
                    input.parse::<i64>().ok().map(|n| n as f64)
                } else {
                    input.parse::<f64>().ok().filter(|n| n.is_finite())
                };
                match parsed {
                    Some(n) if n >= *min && n <= *max => None,
                    Some(_) => self.invalid(format!("{} must be between {} and {}", self.label, min, max)),
                    None => self.invalid(format!("{} must be a number", self.label)),
                }
            }
            InputType::PastDate => match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
                Ok(date) if date <= Utc::now().date_naive() => None,
                Ok(_) => self.invalid(format!("{} cannot be in the future", self.label)),
                Err(_) => self.invalid(format!("{} must be a valid date (YYYY-MM-DD)", self.label)),
            },
            InputType::Email => {
                (!is_valid_email(input)).then(|| "Invalid email format".to_string())
                    .and_then(|m| self.invalid(m))
            }
            InputType::Digits(count) => {
                (!has_exact_digits(input, *count)).then(|| format!("{} must be {} digits", self.label, count))
                    .and_then(|m| self.invalid(m))
            }
            InputType::Choice(choices) => {
                (!choices.contains(&input)).then(|| {
                    format!("Invalid choice. Available options: {}", choices.join(", "))
                })
                .and_then(|m| self.invalid(m))
            }
            InputType::Text | InputType::File(_) | InputType::Consent => None,
        }
    }
}

/// Rules for one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepSchema {
    pub step: Step,
    pub rules: Vec<FieldRule>,
}

impl StepSchema {
    /// Validate the step's sub-record
    pub fn validate(&self, draft: &RegistrationDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in &self.rules {
            if let Some(message) = rule.check(draft.value(rule.field)) {
                errors.insert(rule.field.name(), message);
            }
        }
        errors
    }

    pub fn rule(&self, field: impl Into<DraftField>) -> Option<&FieldRule> {
        let field = field.into();
        self.rules.iter().find(|r| r.field == field)
    }
}

/// Schemas for the whole registration form
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationSchema {
    steps: Vec<StepSchema>,
}

impl RegistrationSchema {
    /// Build the schema set; `team_size_max` bounds the team size field
    pub fn new(team_size_max: u32) -> Self {
        Self {
            steps: vec![
                create_profile_schema(team_size_max),
                create_legal_schema(),
                create_address_schema(),
                create_founder_schema(),
            ],
        }
    }

    pub fn step(&self, step: Step) -> &StepSchema {
        // steps are stored in form order
        &self.steps[usize::from(step.index() - 1)]
    }

    pub fn validate_step(&self, draft: &RegistrationDraft, step: Step) -> FieldErrors {
        self.step(step).validate(draft)
    }

    /// First invalid step together with its errors
    pub fn first_invalid(&self, draft: &RegistrationDraft) -> Option<(Step, FieldErrors)> {
        Step::ALL
            .iter()
            .map(|step| (*step, self.validate_step(draft, *step)))
            .find(|(_, errors)| !errors.is_empty())
    }
}

impl Default for RegistrationSchema {
    fn default() -> Self {
        Self::new(crate::config::RegistrationConfig::default().team_size_max)
    }
}

/// Create the profile step schema
fn create_profile_schema(team_size_max: u32) -> StepSchema {
    use ProfileField::*;

    StepSchema {
        step: Step::Profile,
        rules: vec![
            FieldRule::new(StartupName, "Name of Startup", InputType::Text).required().max_length(100),
            FieldRule::new(Industry, "Industry", InputType::Choice(&[
                "Technology", "Finance", "Healthcare", "Education", "E-commerce",
            ])).required(),
            FieldRule::new(Sector, "Sector", InputType::Choice(&[
                "Artificial Intelligence", "Blockchain", "Internet of Things", "SaaS", "Fintech",
            ])).required(),
            FieldRule::new(Categories, "Categories", InputType::Choice(&[
                "B2B", "B2C", "D2C", "Hardware", "Software",
            ])).required(),
            FieldRule::new(NatureOfEntity, "Nature of Entity", InputType::Choice(&[
                "Private Limited Company",
                "Limited Liability Partnership",
                "Partnership Firm",
                "Sole Proprietorship",
            ])).required(),
            FieldRule::new(BrandName, "Brand Name", InputType::Text).max_length(100),
            FieldRule::new(EntityRegistrationStatus, "Entity Registration Status", InputType::Choice(YES_NO)).required(),
            FieldRule::new(InnovationModel, "Innovation Model", InputType::Choice(&[
                "Product Innovation",
                "Process Innovation",
                "Business Model Innovation",
                "Social Innovation",
            ])),
            FieldRule::new(TeamSize, "Team Size", InputType::Number {
                min: 1.0,
                max: f64::from(team_size_max),
                integer: true,
            }).required(),
            FieldRule::new(IncubationStatus, "Incubation Status", InputType::Choice(YES_NO)).required(),
            FieldRule::new(CurrentStage, "Current Stage", InputType::Choice(&[
                "Ideation", "Validation", "Early Traction", "Scaling",
            ])).required(),
            FieldRule::new(FundingStatus, "Funding/Grants received", InputType::Choice(YES_NO)),
            FieldRule::new(StartupIndiaRegistration, "Registered under Startup India program", InputType::Choice(YES_NO)).required(),
            FieldRule::new(BusinessDescription, "Business description", InputType::Text).max_length(2000),
        ],
    }
}

/// Create the legal registration step schema
fn create_legal_schema() -> StepSchema {
    use LegalField::*;

    StepSchema {
        step: Step::LegalRegistration,
        rules: vec![
            FieldRule::new(IncorporationNumber, "Incorporation/Registration Number", InputType::Text).required().max_length(50),
            FieldRule::new(IncorporationDate, "Incorporation/Registration Date", InputType::PastDate).required(),
            FieldRule::new(IncorporationCertificate, "Incorporation/Registration Certificate", InputType::File(&[
                "pdf", "jpg", "jpeg", "png",
            ])).required(),
            FieldRule::new(TanGst, "TAN/GST", InputType::Text).max_length(20),
            FieldRule::new(IprApplication, "IPR application", InputType::Choice(YES_NO)).required(),
        ],
    }
}

/// Create the address step schema
fn create_address_schema() -> StepSchema {
    use AddressField::*;

    StepSchema {
        step: Step::Address,
        rules: vec![
            FieldRule::new(AddressLine1, "Address Line 1", InputType::Text).required().max_length(200),
            FieldRule::new(AddressLine2, "Address Line 2", InputType::Text).required().max_length(200),
            FieldRule::new(State, "State", InputType::Choice(&["Maharashtra", "Karnataka", "Delhi"])).required(),
            FieldRule::new(City, "City", InputType::Choice(&["Mumbai", "Bangalore", "Delhi"])).required(),
            FieldRule::new(District, "District", InputType::Text).max_length(100),
            FieldRule::new(PinCode, "PIN Code", InputType::Number {
                min: 100_000.0,
                max: 999_999.0,
                integer: true,
            })
            .required()
            .pattern(r"^[0-9]{6}$", "PIN code must be six digits"),
        ],
    }
}

/// Create the founder step schema
fn create_founder_schema() -> StepSchema {
    use FounderField::*;

    StepSchema {
        step: Step::Founder,
        rules: vec![
            FieldRule::new(FounderName, "Name", InputType::Text).required().max_length(100),
            FieldRule::new(Designation, "Designation", InputType::Choice(&[
                "Founder", "Co-Founder", "Director", "Partner",
            ])).required(),
            FieldRule::new(Email, "Email", InputType::Email).required(),
            FieldRule::new(MobileNumber, "Mobile No.", InputType::Digits(10))
                .required()
                .message("Mobile number must be 10 digits"),
            FieldRule::new(FounderAddress, "Address", InputType::Text).required().max_length(200),
            FieldRule::new(PanNumber, "PAN Number", InputType::Text)
                .pattern(r"^[A-Z]{5}[0-9]{4}[A-Z]$", "PAN must look like ABCDE1234F"),
            FieldRule::new(AadharNumber, "Aadhar Number", InputType::Digits(12)),
            FieldRule::new(DippNumber, "DIPP Number", InputType::Text).required().max_length(50),
            FieldRule::new(Equity, "Equity (%)", InputType::Number { min: 0.0, max: 100.0, integer: false }),
            FieldRule::new(PublishProfile, "Publish Your Profile For Showcase", InputType::Choice(YES_NO)),
            FieldRule::new(PitchDeck, "Pitch Deck", InputType::File(&["pdf", "ppt", "pptx"])).required(),
            FieldRule::new(Logo, "Your Logo", InputType::File(&["jpg", "jpeg", "png"])).required(),
            FieldRule::new(TermsAccepted, "Terms & Conditions", InputType::Consent).required(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::{FieldValue, FileHandle};

    fn set(draft: &mut RegistrationDraft, field: impl Into<DraftField>, value: impl Into<FieldValue>) {
        draft.set(field.into(), value.into()).unwrap();
    }

    #[test]
    fn test_every_field_has_a_rule() {
        let schema = RegistrationSchema::default();
        for step in Step::ALL {
            let step_schema = schema.step(step);
            assert_eq!(step_schema.step, step);
            for field in DraftField::of_step(step) {
                assert!(step_schema.rule(field).is_some(), "missing rule for {}", field.name());
            }
        }
    }

    #[test]
    fn test_empty_draft_reports_required_fields() {
        let schema = RegistrationSchema::default();
        let draft = RegistrationDraft::new();

        let errors = schema.validate_step(&draft, Step::Profile);
        assert!(errors.contains("startupName"));
        assert!(errors.contains("teamSize"));
        // optional fields stay quiet when blank
        assert!(!errors.contains("brandName"));
        assert!(!errors.contains("innovationModel"));
    }

    #[test]
    fn test_team_size_range() {
        let schema = RegistrationSchema::new(50);
        let rule = schema.step(Step::Profile).rule(ProfileField::TeamSize).unwrap();

        assert!(rule.check(FieldRef::Text("5")).is_none());
        assert!(rule.check(FieldRef::Text("0")).is_some());
        assert!(rule.check(FieldRef::Text("51")).is_some());
        assert!(rule.check(FieldRef::Text("2.5")).is_some());
        assert!(rule.check(FieldRef::Text("five")).is_some());
    }

    #[test]
    fn test_pin_code_rules() {
        let schema = RegistrationSchema::default();
        let rule = schema.step(Step::Address).rule(AddressField::PinCode).unwrap();

        assert!(rule.check(FieldRef::Text("400001")).is_none());
        assert_eq!(rule.check(FieldRef::Text("4000")).as_deref(), Some("PIN code must be six digits"));
        assert!(rule.check(FieldRef::Text("012345")).is_some());
    }

    #[test]
    fn test_founder_formats() {
        let schema = RegistrationSchema::default();
        let founder = schema.step(Step::Founder);

        let email = founder.rule(FounderField::Email).unwrap();
        assert!(email.check(FieldRef::Text("a@b.com")).is_none());
        assert_eq!(email.check(FieldRef::Text("a@b")).as_deref(), Some("Invalid email format"));

        let mobile = founder.rule(FounderField::MobileNumber).unwrap();
        assert!(mobile.check(FieldRef::Text("9876543210")).is_none());
        assert_eq!(mobile.check(FieldRef::Text("98765")).as_deref(), Some("Mobile number must be 10 digits"));

        let pan = founder.rule(FounderField::PanNumber).unwrap();
        assert!(pan.check(FieldRef::Text("ABCDE1234F")).is_none());
        assert!(pan.check(FieldRef::Text("abcde1234f")).is_some());

        let equity = founder.rule(FounderField::Equity).unwrap();
        assert!(equity.check(FieldRef::Text("12.5")).is_none());
        assert!(equity.check(FieldRef::Text("101")).is_some());
    }

    #[test]
    fn test_file_extension_and_consent() {
        let schema = RegistrationSchema::default();
        let mut draft = RegistrationDraft::new();
        set(&mut draft, FounderField::PitchDeck, FileHandle::new("deck.docx", "h1"));
        set(&mut draft, FounderField::Logo, FileHandle::new("logo.PNG", "h2"));

        let errors = schema.validate_step(&draft, Step::Founder);
        assert!(errors.contains("pitchDeck"));
        assert!(!errors.contains("logo"));
        assert_eq!(errors.get("termsAccepted"), Some("You must accept the Terms & Conditions"));
    }

    #[test]
    fn test_incorporation_date_cannot_be_in_future() {
        let schema = RegistrationSchema::default();
        let rule = schema.step(Step::LegalRegistration).rule(LegalField::IncorporationDate).unwrap();
        let tomorrow = (Utc::now().date_naive() + chrono::Duration::days(1)).format("%Y-%m-%d").to_string();

        assert!(rule.check(FieldRef::Text("2021-04-01")).is_none());
        assert!(rule.check(FieldRef::Text(&tomorrow)).is_some());
        assert!(rule.check(FieldRef::Text("01/04/2021")).is_some());
    }
}
