//! Registration draft
//!
//! The in-progress startup registration, partitioned into one sub-record per
//! form step. Fields are addressed through a per-step field enum wrapped in
//! [`DraftField`], so every read and write is checked at compile time.

use serde::{Deserialize, Serialize};
use crate::utils::errors::{PortalError, Result};

/// One page of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    Profile = 1,
    LegalRegistration = 2,
    Address = 3,
    Founder = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Profile, Step::LegalRegistration, Step::Address, Step::Founder];
    pub const FIRST: Step = Step::Profile;
    pub const LAST: Step = Step::Founder;

    /// 1-based position
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Step> {
        Step::ALL.get(usize::from(index).checked_sub(1)?).copied()
    }

    /// Following step, clamped at the last one
    pub fn next(self) -> Step {
        Step::from_index(self.index() + 1).unwrap_or(Step::LAST)
    }

    /// Preceding step, clamped at the first one
    pub fn previous(self) -> Step {
        Step::from_index(self.index().saturating_sub(1)).unwrap_or(Step::FIRST)
    }

    /// Label shown in the step indicator
    pub fn title(self) -> &'static str {
        match self {
            Step::Profile => "Profile",
            Step::LegalRegistration => "Registration",
            Step::Address => "Address",
            Step::Founder => "Founder",
        }
    }
}

/// What a field stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    File,
    Flag,
}

impl FieldKind {
    fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "a text value",
            FieldKind::File => "a file",
            FieldKind::Flag => "a checkbox value",
        }
    }
}

/// Opaque reference to a file picked by the user; the upload itself happens elsewhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub handle: String,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self { name: name.into(), handle: handle.into() }
    }
}

/// Value written into the draft by `set_field`
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    File(FileHandle),
    Flag(bool),
    /// Clears text and file fields, unchecks flags
    Empty,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<FileHandle> for FieldValue {
    fn from(value: FileHandle) -> Self {
        FieldValue::File(value)
    }
}

impl FieldValue {
    fn into_text(self, field: &'static str) -> Result<String> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Empty => Ok(String::new()),
            _ => Err(PortalError::FieldKind { field, expected: FieldKind::Text.describe() }),
        }
    }

    fn into_file(self, field: &'static str) -> Result<Option<FileHandle>> {
        match self {
            FieldValue::File(file) => Ok(Some(file)),
            FieldValue::Empty => Ok(None),
            _ => Err(PortalError::FieldKind { field, expected: FieldKind::File.describe() }),
        }
    }

    fn into_flag(self, field: &'static str) -> Result<bool> {
        match self {
            FieldValue::Flag(flag) => Ok(flag),
            FieldValue::Empty => Ok(false),
            _ => Err(PortalError::FieldKind { field, expected: FieldKind::Flag.describe() }),
        }
    }
}

/// Borrowed view of a stored value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Text(&'a str),
    File(Option<&'a FileHandle>),
    Flag(bool),
}

impl FieldRef<'_> {
    /// Blank text, missing file or unchecked flag
    pub fn is_blank(&self) -> bool {
        match self {
            FieldRef::Text(text) => text.trim().is_empty(),
            FieldRef::File(file) => file.is_none(),
            FieldRef::Flag(flag) => !flag,
        }
    }
}

macro_rules! step_fields {
    (
        $(#[$meta:meta])*
        $name:ident => $step:ident {
            $( $variant:ident = $wire:literal : $kind:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire name used in the submission payload and error keys
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            pub fn kind(self) -> FieldKind {
                match self {
                    $( $name::$variant => FieldKind::$kind ),+
                }
            }
        }

        impl From<$name> for DraftField {
            fn from(field: $name) -> Self {
                DraftField::$step(field)
            }
        }
    };
}

step_fields! {
    /// Fields of the profile step
    ProfileField => Profile {
        StartupName = "startupName": Text,
        Industry = "industry": Text,
        Sector = "sector": Text,
        Categories = "categories": Text,
        NatureOfEntity = "natureOfEntity": Text,
        BrandName = "brandName": Text,
        EntityRegistrationStatus = "entityRegistrationStatus": Text,
        InnovationModel = "innovationModel": Text,
        TeamSize = "teamSize": Text,
        IncubationStatus = "incubationStatus": Text,
        CurrentStage = "currentStage": Text,
        FundingStatus = "fundingStatus": Text,
        StartupIndiaRegistration = "startupIndiaRegistration": Text,
        BusinessDescription = "businessDescription": Text,
    }
}

step_fields! {
    /// Fields of the legal registration step
    LegalField => Legal {
        IncorporationNumber = "incorporationNumber": Text,
        IncorporationDate = "incorporationDate": Text,
        IncorporationCertificate = "incorporationCertificate": File,
        TanGst = "tanGst": Text,
        IprApplication = "iprApplication": Text,
    }
}

step_fields! {
    /// Fields of the address step
    AddressField => Address {
        AddressLine1 = "addressLine1": Text,
        AddressLine2 = "addressLine2": Text,
        State = "state": Text,
        City = "city": Text,
        District = "district": Text,
        PinCode = "pinCode": Text,
    }
}

step_fields! {
    /// Fields of the founder step
    FounderField => Founder {
        FounderName = "founderName": Text,
        Designation = "designation": Text,
        Email = "email": Text,
        MobileNumber = "mobileNumber": Text,
        FounderAddress = "founderAddress": Text,
        PanNumber = "panNumber": Text,
        AadharNumber = "aadharNumber": Text,
        DippNumber = "dippNumber": Text,
        Equity = "equity": Text,
        PublishProfile = "publishProfile": Text,
        PitchDeck = "pitchDeck": File,
        Logo = "logo": File,
        TermsAccepted = "termsAccepted": Flag,
    }
}

/// A field of any step, tagged with the step it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Profile(ProfileField),
    Legal(LegalField),
    Address(AddressField),
    Founder(FounderField),
}

impl DraftField {
    pub fn step(self) -> Step {
        match self {
            DraftField::Profile(_) => Step::Profile,
            DraftField::Legal(_) => Step::LegalRegistration,
            DraftField::Address(_) => Step::Address,
            DraftField::Founder(_) => Step::Founder,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DraftField::Profile(f) => f.name(),
            DraftField::Legal(f) => f.name(),
            DraftField::Address(f) => f.name(),
            DraftField::Founder(f) => f.name(),
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            DraftField::Profile(f) => f.kind(),
            DraftField::Legal(f) => f.kind(),
            DraftField::Address(f) => f.kind(),
            DraftField::Founder(f) => f.kind(),
        }
    }

    /// Every field of a step, in form order
    pub fn of_step(step: Step) -> Vec<DraftField> {
        match step {
            Step::Profile => ProfileField::ALL.iter().map(|f| (*f).into()).collect(),
            Step::LegalRegistration => LegalField::ALL.iter().map(|f| (*f).into()).collect(),
            Step::Address => AddressField::ALL.iter().map(|f| (*f).into()).collect(),
            Step::Founder => FounderField::ALL.iter().map(|f| (*f).into()).collect(),
        }
    }
}

/// Profile sub-record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSection {
    pub startup_name: String,
    pub industry: String,
    pub sector: String,
    pub categories: String,
    pub nature_of_entity: String,
    pub brand_name: String,
    pub entity_registration_status: String,
    pub innovation_model: String,
    pub team_size: String,
    pub incubation_status: String,
    pub current_stage: String,
    pub funding_status: String,
    pub startup_india_registration: String,
    pub business_description: String,
}

impl ProfileSection {
    fn slot(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::StartupName => &mut self.startup_name,
            ProfileField::Industry => &mut self.industry,
            ProfileField::Sector => &mut self.sector,
            ProfileField::Categories => &mut self.categories,
            ProfileField::NatureOfEntity => &mut self.nature_of_entity,
            ProfileField::BrandName => &mut self.brand_name,
            ProfileField::EntityRegistrationStatus => &mut self.entity_registration_status,
            ProfileField::InnovationModel => &mut self.innovation_model,
            ProfileField::TeamSize => &mut self.team_size,
            ProfileField::IncubationStatus => &mut self.incubation_status,
            ProfileField::CurrentStage => &mut self.current_stage,
            ProfileField::FundingStatus => &mut self.funding_status,
            ProfileField::StartupIndiaRegistration => &mut self.startup_india_registration,
            ProfileField::BusinessDescription => &mut self.business_description,
        }
    }

    pub fn value(&self, field: ProfileField) -> FieldRef<'_> {
        FieldRef::Text(match field {
            ProfileField::StartupName => &self.startup_name,
            ProfileField::Industry => &self.industry,
            ProfileField::Sector => &self.sector,
            ProfileField::Categories => &self.categories,
            ProfileField::NatureOfEntity => &self.nature_of_entity,
            ProfileField::BrandName => &self.brand_name,
            ProfileField::EntityRegistrationStatus => &self.entity_registration_status,
            ProfileField::InnovationModel => &self.innovation_model,
            ProfileField::TeamSize => &self.team_size,
            ProfileField::IncubationStatus => &self.incubation_status,
            ProfileField::CurrentStage => &self.current_stage,
            ProfileField::FundingStatus => &self.funding_status,
            ProfileField::StartupIndiaRegistration => &self.startup_india_registration,
            ProfileField::BusinessDescription => &self.business_description,
        })
    }

    pub fn set(&mut self, field: ProfileField, value: FieldValue) -> Result<()> {
        *self.slot(field) = value.into_text(field.name())?;
        Ok(())
    }
}

/// Legal registration sub-record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegalSection {
    pub incorporation_number: String,
    pub incorporation_date: String,
    pub incorporation_certificate: Option<FileHandle>,
    pub tan_gst: String,
    pub ipr_application: String,
}

impl LegalSection {
    pub fn value(&self, field: LegalField) -> FieldRef<'_> {
        match field {
            LegalField::IncorporationNumber => FieldRef::Text(&self.incorporation_number),
            LegalField::IncorporationDate => FieldRef::Text(&self.incorporation_date),
            LegalField::IncorporationCertificate => FieldRef::File(self.incorporation_certificate.as_ref()),
            LegalField::TanGst => FieldRef::Text(&self.tan_gst),
            LegalField::IprApplication => FieldRef::Text(&self.ipr_application),
        }
    }

    pub fn set(&mut self, field: LegalField, value: FieldValue) -> Result<()> {
        let name = field.name();
        match field {
            LegalField::IncorporationNumber => self.incorporation_number = value.into_text(name)?,
            LegalField::IncorporationDate => self.incorporation_date = value.into_text(name)?,
            LegalField::IncorporationCertificate => self.incorporation_certificate = value.into_file(name)?,
            LegalField::TanGst => self.tan_gst = value.into_text(name)?,
            LegalField::IprApplication => self.ipr_application = value.into_text(name)?,
        }
        Ok(())
    }
}

/// Address sub-record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressSection {
    pub address_line1: String,
    pub address_line2: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub pin_code: String,
}

impl AddressSection {
    pub fn value(&self, field: AddressField) -> FieldRef<'_> {
        FieldRef::Text(match field {
            AddressField::AddressLine1 => &self.address_line1,
            AddressField::AddressLine2 => &self.address_line2,
            AddressField::State => &self.state,
            AddressField::City => &self.city,
            AddressField::District => &self.district,
            AddressField::PinCode => &self.pin_code,
        })
    }

    pub fn set(&mut self, field: AddressField, value: FieldValue) -> Result<()> {
        let text = value.into_text(field.name())?;
        match field {
            AddressField::AddressLine1 => self.address_line1 = text,
            AddressField::AddressLine2 => self.address_line2 = text,
            AddressField::State => self.state = text,
            AddressField::City => self.city = text,
            AddressField::District => self.district = text,
            AddressField::PinCode => self.pin_code = text,
        }
        Ok(())
    }
}

/// Founder sub-record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FounderSection {
    pub founder_name: String,
    pub designation: String,
    pub email: String,
    pub mobile_number: String,
    pub founder_address: String,
    pub pan_number: String,
    pub aadhar_number: String,
    pub dipp_number: String,
    pub equity: String,
    pub publish_profile: String,
    pub pitch_deck: Option<FileHandle>,
    pub logo: Option<FileHandle>,
    pub terms_accepted: bool,
}

impl FounderSection {
    pub fn value(&self, field: FounderField) -> FieldRef<'_> {
        match field {
            FounderField::FounderName => FieldRef::Text(&self.founder_name),
            FounderField::Designation => FieldRef::Text(&self.designation),
            FounderField::Email => FieldRef::Text(&self.email),
            FounderField::MobileNumber => FieldRef::Text(&self.mobile_number),
            FounderField::FounderAddress => FieldRef::Text(&self.founder_address),
            FounderField::PanNumber => FieldRef::Text(&self.pan_number),
            FounderField::AadharNumber => FieldRef::Text(&self.aadhar_number),
            FounderField::DippNumber => FieldRef::Text(&self.dipp_number),
            FounderField::Equity => FieldRef::Text(&self.equity),
            FounderField::PublishProfile => FieldRef::Text(&self.publish_profile),
            FounderField::PitchDeck => FieldRef::File(self.pitch_deck.as_ref()),
            FounderField::Logo => FieldRef::File(self.logo.as_ref()),
            FounderField::TermsAccepted => FieldRef::Flag(self.terms_accepted),
        }
    }

    pub fn set(&mut self, field: FounderField, value: FieldValue) -> Result<()> {
        let name = field.name();
        match field {
            FounderField::FounderName => self.founder_name = value.into_text(name)?,
            FounderField::Designation => self.designation = value.into_text(name)?,
            FounderField::Email => self.email = value.into_text(name)?,
            FounderField::MobileNumber => self.mobile_number = value.into_text(name)?,
            FounderField::FounderAddress => self.founder_address = value.into_text(name)?,
            FounderField::PanNumber => self.pan_number = value.into_text(name)?,
            FounderField::AadharNumber => self.aadhar_number = value.into_text(name)?,
            FounderField::DippNumber => self.dipp_number = value.into_text(name)?,
            FounderField::Equity => self.equity = value.into_text(name)?,
            FounderField::PublishProfile => self.publish_profile = value.into_text(name)?,
            FounderField::PitchDeck => self.pitch_deck = value.into_file(name)?,
            FounderField::Logo => self.logo = value.into_file(name)?,
            FounderField::TermsAccepted => self.terms_accepted = value.into_flag(name)?,
        }
        Ok(())
    }
}

/// The whole registration draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub profile: ProfileSection,
    pub legal: LegalSection,
    pub address: AddressSection,
    pub founder: FounderSection,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a value without validating it
    pub fn set(&mut self, field: DraftField, value: FieldValue) -> Result<()> {
        match field {
            DraftField::Profile(f) => self.profile.set(f, value),
            DraftField::Legal(f) => self.legal.set(f, value),
            DraftField::Address(f) => self.address.set(f, value),
            DraftField::Founder(f) => self.founder.set(f, value),
        }
    }

    pub fn value(&self, field: DraftField) -> FieldRef<'_> {
        match field {
            DraftField::Profile(f) => self.profile.value(f),
            DraftField::Legal(f) => self.legal.value(f),
            DraftField::Address(f) => self.address.value(f),
            DraftField::Founder(f) => self.founder.value(f),
        }
    }

    /// Text stored in a field; empty for file and flag fields
    pub fn text(&self, field: impl Into<DraftField>) -> &str {
        match self.value(field.into()) {
            FieldRef::Text(text) => text,
            _ => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_step_navigation_is_clamped() {
        assert_eq!(Step::Profile.previous(), Step::Profile);
        assert_eq!(Step::Profile.next(), Step::LegalRegistration);
        assert_eq!(Step::Founder.next(), Step::Founder);
        assert_eq!(Step::from_index(0), None);
        assert_eq!(Step::from_index(5), None);
        assert_eq!(Step::from_index(3), Some(Step::Address));
    }

    #[test]
    fn test_field_metadata() {
        let field: DraftField = LegalField::IncorporationCertificate.into();
        assert_eq!(field.step(), Step::LegalRegistration);
        assert_eq!(field.name(), "incorporationCertificate");
        assert_eq!(field.kind(), FieldKind::File);
        assert_eq!(DraftField::of_step(Step::Address).len(), 6);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut draft = RegistrationDraft::new();
        draft.set(ProfileField::StartupName.into(), "Acme".into()).unwrap();
        draft.set(FounderField::TermsAccepted.into(), true.into()).unwrap();
        draft.set(FounderField::Logo.into(), FileHandle::new("logo.png", "upload-1").into()).unwrap();

        assert_eq!(draft.text(ProfileField::StartupName), "Acme");
        assert!(draft.founder.terms_accepted);
        assert_eq!(draft.founder.logo.as_ref().map(|f| f.name.as_str()), Some("logo.png"));
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let mut draft = RegistrationDraft::new();
        let err = draft.set(FounderField::PitchDeck.into(), "deck.pdf".into()).unwrap_err();
        assert_matches!(err, PortalError::FieldKind { field: "pitchDeck", .. });
        assert!(draft.is_empty());
    }

    #[test]
    fn test_empty_clears_values() {
        let mut draft = RegistrationDraft::new();
        draft.set(AddressField::City.into(), "Mumbai".into()).unwrap();
        draft.set(AddressField::City.into(), FieldValue::Empty).unwrap();
        assert!(draft.value(AddressField::City.into()).is_blank());
    }
}
