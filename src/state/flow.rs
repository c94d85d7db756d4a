//! Multi-step registration controller
//!
//! Drives the four registration steps over a [`RegistrationDraft`]. Forward
//! navigation and submission are gated by the step schemas; going back is
//! always allowed. A submission issues exactly one backend write.

use std::fmt;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;
use crate::config::RegistrationConfig;
use crate::models::StartupApplication;
use crate::services::api::ApiClient;
use crate::utils::errors::{FieldErrors, PortalError, Result};
use crate::utils::logging::{log_form_step, log_submission};
use super::draft::{DraftField, FieldValue, FileHandle, RegistrationDraft, Step};
use super::schema::RegistrationSchema;

/// Message shown when the backend rejects or never receives a submission
pub const SUBMISSION_FAILED_MESSAGE: &str = "Registration failed. Please try again later.";

/// Outcome kept after a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    /// Body returned by the backend, if any
    pub confirmation: Option<Value>,
}

/// Controller state
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Editing(Step),
    Submitting,
    Succeeded(SubmissionReceipt),
    /// Visible error message; `retry()` returns to the last step
    Failed(String),
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowState::Editing(step) => write!(f, "step {} ({})", step.index(), step.title()),
            FlowState::Submitting => f.write_str("submitting"),
            FlowState::Succeeded(_) => f.write_str("success"),
            FlowState::Failed(_) => f.write_str("failure"),
        }
    }
}

/// Marker for the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

/// The registration form controller
#[derive(Debug, Clone)]
pub struct RegistrationFlow {
    schema: RegistrationSchema,
    draft: RegistrationDraft,
    state: FlowState,
    errors: FieldErrors,
    placeholder_password: String,
}

impl RegistrationFlow {
    pub fn new(config: &RegistrationConfig) -> Self {
        Self {
            schema: RegistrationSchema::new(config.team_size_max),
            draft: RegistrationDraft::new(),
            state: FlowState::Editing(Step::FIRST),
            errors: FieldErrors::new(),
            placeholder_password: config.placeholder_password.clone(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Active step while editing
    pub fn current_step(&self) -> Option<Step> {
        match self.state {
            FlowState::Editing(step) => Some(step),
            _ => None,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn schema(&self) -> &RegistrationSchema {
        &self.schema
    }

    /// Field errors from the last failed `advance` or `submit`
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Step indicator markers, in form order
    pub fn progress(&self) -> Vec<(Step, StepStatus)> {
        let current = match &self.state {
            FlowState::Editing(step) => Some(*step),
            FlowState::Submitting | FlowState::Failed(_) => Some(Step::LAST),
            FlowState::Succeeded(_) => None,
        };

        Step::ALL
            .iter()
            .map(|step| {
                let status = match current {
                    None => StepStatus::Complete,
                    Some(c) if *step < c => StepStatus::Complete,
                    Some(c) if *step == c => StepStatus::Current,
                    Some(_) => StepStatus::Upcoming,
                };
                (*step, status)
            })
            .collect()
    }

    /// Write a value into the draft. No validation happens here.
    pub fn set_field(&mut self, field: impl Into<DraftField>, value: impl Into<FieldValue>) -> Result<()> {
        self.editing_step("edit")?;
        self.draft.set(field.into(), value.into())
    }

    /// Validate the current step and move forward
    pub fn advance(&mut self) -> Result<Step> {
        let step = self.editing_step("advance")?;

        let errors = self.schema.validate_step(&self.draft, step);
        if !errors.is_empty() {
            log_form_step(step.index(), step.index(), errors.len());
            self.errors = errors.clone();
            return Err(PortalError::Validation(errors));
        }

        let next = step.next();
        log_form_step(step.index(), next.index(), 0);
        self.errors = FieldErrors::new();
        self.state = FlowState::Editing(next);
        Ok(next)
    }

    /// Move back one step without validating
    pub fn retreat(&mut self) -> Result<Step> {
        let step = self.editing_step("retreat")?;
        let previous = step.previous();
        log_form_step(step.index(), previous.index(), 0);
        self.state = FlowState::Editing(previous);
        Ok(previous)
    }

    /// Validate and send the whole draft in a single write.
    ///
    /// Validation failures keep the controller editing (on the first invalid
    /// step) and never reach the network. A network failure moves to
    /// [`FlowState::Failed`]; success clears the draft.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<SubmissionReceipt> {
        let step = self.editing_step("submit")?;
        if step != Step::LAST {
            return Err(PortalError::InvalidStateTransition {
                from: self.state.to_string(),
                to: FlowState::Submitting.to_string(),
            });
        }

        let errors = self.schema.validate_step(&self.draft, Step::LAST);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(PortalError::Validation(errors));
        }

        if let Some((invalid_step, errors)) = self.schema.first_invalid(&self.draft) {
            debug!(step = invalid_step.index(), "Earlier step became invalid before submit");
            log_form_step(step.index(), invalid_step.index(), errors.len());
            self.errors = errors.clone();
            self.state = FlowState::Editing(invalid_step);
            return Err(PortalError::Validation(errors));
        }

        let application = flatten(&self.draft, &self.placeholder_password)?;
        let submission_id = Uuid::new_v4();
        self.errors = FieldErrors::new();
        self.state = FlowState::Submitting;
        info!(submission_id = %submission_id, startup = %application.startup_name, "Submitting registration");

        match api.submit_registration(&application).await {
            Ok(confirmation) => {
                log_submission(&submission_id.to_string(), true, None);
                let receipt = SubmissionReceipt { submission_id, confirmation };
                self.draft = RegistrationDraft::new();
                self.state = FlowState::Succeeded(receipt.clone());
                Ok(receipt)
            }
            Err(e) => {
                log_submission(&submission_id.to_string(), false, Some(&e.to_string()));
                self.state = FlowState::Failed(SUBMISSION_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Leave a failed submission and return to the last step with the draft intact
    pub fn retry(&mut self) -> Result<Step> {
        match self.state {
            FlowState::Failed(_) => {
                self.state = FlowState::Editing(Step::LAST);
                Ok(Step::LAST)
            }
            _ => Err(PortalError::InvalidStateTransition {
                from: self.state.to_string(),
                to: FlowState::Editing(Step::LAST).to_string(),
            }),
        }
    }

    /// Start over with an empty draft
    pub fn reset(&mut self) {
        self.draft = RegistrationDraft::new();
        self.errors = FieldErrors::new();
        self.state = FlowState::Editing(Step::FIRST);
    }

    fn editing_step(&self, action: &str) -> Result<Step> {
        match self.state {
            FlowState::Editing(step) => Ok(step),
            _ => Err(PortalError::InvalidStateTransition {
                from: self.state.to_string(),
                to: action.to_string(),
            }),
        }
    }
}

/// Merge the four sub-records into the submission payload
fn flatten(draft: &RegistrationDraft, placeholder_password: &str) -> Result<StartupApplication> {
    let profile = &draft.profile;
    let legal = &draft.legal;
    let address = &draft.address;
    let founder = &draft.founder;

    let team_size = profile.team_size.trim().parse::<u32>().map_err(|_| {
        PortalError::InvalidInput(format!("teamSize is not a whole number: {}", profile.team_size))
    })?;
    let equity = match founder.equity.trim() {
        "" => None,
        raw => Some(raw.parse::<f64>().map_err(|_| {
            PortalError::InvalidInput(format!("equity is not a number: {}", raw))
        })?),
    };

    Ok(StartupApplication {
        startup_name: profile.startup_name.trim().to_string(),
        industry: profile.industry.trim().to_string(),
        sector: profile.sector.trim().to_string(),
        categories: profile.categories.trim().to_string(),
        nature_of_entity: profile.nature_of_entity.trim().to_string(),
        brand_name: profile.brand_name.trim().to_string(),
        entity_registration_status: profile.entity_registration_status.trim().to_string(),
        innovation_model: profile.innovation_model.trim().to_string(),
        team_size,
        incubation_status: profile.incubation_status.trim().to_string(),
        current_stage: profile.current_stage.trim().to_string(),
        funding_status: profile.funding_status.trim().to_string(),
        startup_india_registration: profile.startup_india_registration.trim().to_string(),
        business_description: profile.business_description.trim().to_string(),
        incorporation_number: legal.incorporation_number.trim().to_string(),
        incorporation_date: legal.incorporation_date.trim().to_string(),
        incorporation_certificate: handle_of(&legal.incorporation_certificate),
        tan_gst: legal.tan_gst.trim().to_string(),
        ipr_application: legal.ipr_application.trim().to_string(),
        address_line1: address.address_line1.trim().to_string(),
        address_line2: address.address_line2.trim().to_string(),
        state: address.state.trim().to_string(),
        city: address.city.trim().to_string(),
        district: address.district.trim().to_string(),
        pin_code: address.pin_code.trim().to_string(),
        founder_name: founder.founder_name.trim().to_string(),
        designation: founder.designation.trim().to_string(),
        email: founder.email.trim().to_string(),
        mobile_number: founder.mobile_number.trim().to_string(),
        founder_address: founder.founder_address.trim().to_string(),
        pan_number: founder.pan_number.trim().to_string(),
        aadhar_number: founder.aadhar_number.trim().to_string(),
        dipp_number: founder.dipp_number.trim().to_string(),
        equity,
        publish_profile: founder.publish_profile.trim().to_string(),
        pitch_deck: handle_of(&founder.pitch_deck),
        logo: handle_of(&founder.logo),
        terms_accepted: founder.terms_accepted,
        password: placeholder_password.to_string(),
    })
}

fn handle_of(file: &Option<FileHandle>) -> String {
    file.as_ref().map(|f| f.handle.clone()).unwrap_or_default()
}
