//! Test data fixtures
//!
//! Builders for registration drafts and dashboard payloads.

use IncubatorHub::config::RegistrationConfig;
use IncubatorHub::models::{NewAdmin, NewEvent};
use IncubatorHub::state::{
    AddressField, FileHandle, FounderField, LegalField, ProfileField, RegistrationFlow, Step,
};

pub const TEST_PLACEHOLDER_PASSWORD: &str = "changeme";

pub fn registration_config() -> RegistrationConfig {
    RegistrationConfig {
        placeholder_password: TEST_PLACEHOLDER_PASSWORD.to_string(),
        team_size_max: 500,
    }
}

pub fn fill_profile(flow: &mut RegistrationFlow) {
    use ProfileField::*;
    for (field, value) in [
        (StartupName, "Acme"),
        (Industry, "Technology"),
        (Sector, "SaaS"),
        (Categories, "B2B"),
        (NatureOfEntity, "Private Limited Company"),
        (BrandName, "Acme Labs"),
        (EntityRegistrationStatus, "Yes"),
        (InnovationModel, "Product Innovation"),
        (TeamSize, "5"),
        (IncubationStatus, "No"),
        (CurrentStage, "Ideation"),
        (FundingStatus, "No"),
        (StartupIndiaRegistration, "Yes"),
        (BusinessDescription, "Developer tooling for small teams"),
    ] {
        flow.set_field(field, value).expect("profile field");
    }
}

pub fn fill_legal(flow: &mut RegistrationFlow) {
    flow.set_field(LegalField::IncorporationNumber, "U72900MH2021PTC123456").expect("legal field");
    flow.set_field(LegalField::IncorporationDate, "2021-04-01").expect("legal field");
    flow.set_field(LegalField::IncorporationCertificate, FileHandle::new("coi.pdf", "upload-coi"))
        .expect("legal field");
    flow.set_field(LegalField::TanGst, "27AAAAA0000A1Z5").expect("legal field");
    flow.set_field(LegalField::IprApplication, "No").expect("legal field");
}

pub fn fill_address(flow: &mut RegistrationFlow) {
    use AddressField::*;
    for (field, value) in [
        (AddressLine1, "12 Harbour Road"),
        (AddressLine2, "Fort"),
        (State, "Maharashtra"),
        (City, "Mumbai"),
        (District, "Mumbai City"),
        (PinCode, "400001"),
    ] {
        flow.set_field(field, value).expect("address field");
    }
}

pub fn fill_founder(flow: &mut RegistrationFlow) {
    use FounderField::*;
    for (field, value) in [
        (FounderName, "Asha Rao"),
        (Designation, "Founder"),
        (Email, "a@b.com"),
        (MobileNumber, "9876543210"),
        (FounderAddress, "12 Harbour Road, Mumbai"),
        (PanNumber, "ABCDE1234F"),
        (AadharNumber, "123412341234"),
        (DippNumber, "DIPP12345"),
        (Equity, "60"),
        (PublishProfile, "Yes"),
    ] {
        flow.set_field(field, value).expect("founder field");
    }
    flow.set_field(PitchDeck, FileHandle::new("deck.pdf", "upload-deck")).expect("founder field");
    flow.set_field(Logo, FileHandle::new("logo.png", "upload-logo")).expect("founder field");
    flow.set_field(TermsAccepted, true).expect("founder field");
}

/// Controller with every step filled in, still on step one
pub fn complete_flow() -> RegistrationFlow {
    let mut flow = RegistrationFlow::new(&registration_config());
    fill_profile(&mut flow);
    fill_legal(&mut flow);
    fill_address(&mut flow);
    fill_founder(&mut flow);
    flow
}

/// Controller with every step filled in, positioned on the founder step
pub fn flow_ready_to_submit() -> RegistrationFlow {
    let mut flow = complete_flow();
    while flow.current_step() != Some(Step::LAST) {
        flow.advance().expect("complete draft advances");
    }
    flow
}

pub fn sample_new_event() -> NewEvent {
    NewEvent {
        name: "Demo Day".to_string(),
        poster_link: "https://cdn.example.org/demo.png".to_string(),
        date: "2024-09-01T10:00".to_string(),
        description: "Cohort demo day".to_string(),
    }
}

pub fn sample_new_admin() -> NewAdmin {
    NewAdmin {
        email: "mentor@lce.org".to_string(),
        password: "s3cret-pass".to_string(),
    }
}
