//! Property tests for the route guard, the router and step navigation

mod helpers;

use helpers::*;
use proptest::prelude::*;
use IncubatorHub::middleware::{GuardDecision, RouteGuard};
use IncubatorHub::router::{Navigation, Route, Router};
use IncubatorHub::services::{Role, Session};
use IncubatorHub::state::{AddressField, DraftField, FounderField, LegalField, ProfileField, RegistrationFlow, Step};
use IncubatorHub::PortalError;

fn any_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Guest), Just(Role::Admin), Just(Role::Startup)]
}

fn any_step() -> impl Strategy<Value = Step> {
    (1u8..=4).prop_map(|i| Step::from_index(i).unwrap())
}

/// Required fields of each step, one per step is enough to block advancing
fn required_field(step: Step) -> DraftField {
    match step {
        Step::Profile => ProfileField::StartupName.into(),
        Step::LegalRegistration => LegalField::IncorporationNumber.into(),
        Step::Address => AddressField::AddressLine1.into(),
        Step::Founder => FounderField::FounderName.into(),
    }
}

/// Move a fully filled flow to `step`
fn flow_at(step: Step) -> RegistrationFlow {
    let mut flow = complete_flow();
    while flow.current_step() != Some(step) {
        flow.advance().unwrap();
    }
    flow
}

proptest! {
    #[test]
    fn guard_sends_unauthenticated_sessions_to_login(
        roles in prop::collection::vec(any_role(), 0..3),
        session_role in any_role(),
        identity in "[a-z]{0,12}",
    ) {
        let guard = RouteGuard::require(roles);
        let session = Session { authenticated: false, role: session_role, identity };
        prop_assert_eq!(guard.check(&session), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn guard_sends_startups_home_from_admin_views(identity in "[a-z]{1,12}@[a-z]{1,8}\\.com") {
        let guard = RouteGuard::require([Role::Admin]);
        let session = Session::authenticated(identity, Role::Startup);
        prop_assert_eq!(guard.check(&session), GuardDecision::RedirectHome);
    }

    #[test]
    fn protected_paths_never_render_for_guests(suffix in "(/)?(\\?[a-z]{1,5}=[a-z0-9]{1,5})?") {
        let router = Router::default();
        for route in [Route::AdminDashboard, Route::StartupDashboard] {
            let path = format!("{}{}", route.path(), suffix);
            prop_assert_eq!(
                router.resolve(&path, &Session::guest()),
                Navigation::Redirect { from: route, to: Route::Login }
            );
        }
    }

    #[test]
    fn retreat_never_fails_or_touches_the_draft(step in any_step(), junk in "\\PC{0,20}") {
        let mut flow = flow_at(step);
        // later invalid data must not block going back
        flow.set_field(FounderField::MobileNumber, junk).unwrap();
        let before = flow.draft().clone();

        let previous = flow.retreat().unwrap();
        prop_assert_eq!(previous, step.previous());
        prop_assert_eq!(flow.draft(), &before);
    }

    #[test]
    fn advance_with_missing_required_field_keeps_the_step(step in any_step()) {
        let mut flow = flow_at(step);
        flow.set_field(required_field(step), "").unwrap();

        let result = flow.advance();
        prop_assert!(matches!(result, Err(PortalError::Validation(ref errors)) if !errors.is_empty()));
        prop_assert_eq!(flow.current_step(), Some(step));
        prop_assert!(flow.errors().contains(required_field(step).name()));
    }
}

#[test]
fn test_advance_is_clamped_at_last_step() {
    let mut flow = flow_at(Step::Founder);
    assert_eq!(flow.advance().unwrap(), Step::Founder);
}

#[test]
fn test_admin_session_reaches_admin_dashboard() {
    let router = Router::default();
    let admin = admin_auth();
    assert_eq!(router.resolve("/admin", &admin), Navigation::Render(Route::AdminDashboard));
    assert_eq!(
        router.resolve("/startup", &admin),
        Navigation::Redirect { from: Route::StartupDashboard, to: Route::Home }
    );
}
