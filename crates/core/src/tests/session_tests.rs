// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{complete_request_commands, create_test_rates};
use crate::{Command, CoreError, NavigationOutcome, Session, SubmitOutcome, TravellerUpdate};
use rust_decimal::Decimal;
use travel_portal_advisory::{Advisory, AdvisoryKind};
use travel_portal_domain::{Declaration, FieldPath, FormStep, ItemId, TravelRequest, TravellerField};

fn create_session() -> Session<Vec<Advisory>> {
    Session::new(create_test_rates(), Vec::new())
}

fn create_complete_session() -> Session<Vec<Advisory>> {
    let mut session: Session<Vec<Advisory>> = create_session();
    for command in complete_request_commands() {
        session.dispatch(command).unwrap();
    }
    session
}

#[test]
fn test_new_session_starts_on_first_step() {
    let session: Session<Vec<Advisory>> = create_session();

    assert_eq!(session.current_step(), FormStep::TravellerInfo);
    assert!(session.errors().is_empty());
    assert!(!session.is_submitted());
    assert_eq!(session.cost_estimate(), Decimal::ZERO);
}

#[test]
fn test_next_step_blocked_by_current_step_errors() {
    let mut session: Session<Vec<Advisory>> = create_session();

    let outcome: NavigationOutcome = session.next_step();

    assert_eq!(outcome, NavigationOutcome::Blocked);
    assert_eq!(session.current_step(), FormStep::TravellerInfo);
    assert_eq!(
        session
            .errors()
            .get(&FieldPath::PrimaryTraveller(TravellerField::FullName)),
        Some("Full name is required")
    );
    assert_eq!(
        session.notifier().last().map(|a| a.kind),
        Some(AdvisoryKind::ValidationFailed)
    );
}

#[test]
fn test_next_step_reports_only_current_step_fields() {
    let mut session: Session<Vec<Advisory>> = create_session();

    session.next_step();

    assert!(!session.errors().contains(&FieldPath::Purpose));
    assert!(!session.errors().contains(&FieldPath::Declarations));
}

#[test]
fn test_next_step_advances_when_step_is_valid() {
    let mut session: Session<Vec<Advisory>> = create_session();
    let primary: ItemId = ItemId::new(1);
    session
        .dispatch(Command::UpdateTraveller {
            id: primary,
            update: TravellerUpdate::FullName(String::from("Jane Citizen")),
        })
        .unwrap();
    session
        .dispatch(Command::UpdateTraveller {
            id: primary,
            update: TravellerUpdate::EmployeeId(String::from("E12345")),
        })
        .unwrap();
    session
        .dispatch(Command::UpdateTraveller {
            id: primary,
            update: TravellerUpdate::CostCentre(String::from("CC-400")),
        })
        .unwrap();

    let outcome: NavigationOutcome = session.next_step();

    assert_eq!(outcome, NavigationOutcome::Advanced(FormStep::TravelDetails));
    assert_eq!(session.current_step(), FormStep::TravelDetails);
    assert!(session.errors().is_empty());
}

#[test]
fn test_walking_a_complete_request_through_every_step() {
    let mut session: Session<Vec<Advisory>> = create_complete_session();

    assert_eq!(
        session.next_step(),
        NavigationOutcome::Advanced(FormStep::TravelDetails)
    );
    assert_eq!(
        session.next_step(),
        NavigationOutcome::Advanced(FormStep::Allowances)
    );
    assert_eq!(
        session.next_step(),
        NavigationOutcome::Advanced(FormStep::Approvals)
    );
    assert_eq!(session.next_step(), NavigationOutcome::AtLastStep);
}

#[test]
fn test_previous_and_go_to_step_skip_validation() {
    let mut session: Session<Vec<Advisory>> = create_session();

    session.go_to_step(FormStep::Approvals);
    assert_eq!(session.current_step(), FormStep::Approvals);

    assert_eq!(session.previous_step(), Some(FormStep::Allowances));
    session.go_to_step(FormStep::TravellerInfo);
    assert_eq!(session.previous_step(), None);
    assert!(session.errors().is_empty());
}

#[test]
fn test_is_step_complete_does_not_record_errors() {
    let session: Session<Vec<Advisory>> = create_session();

    assert!(!session.is_step_complete(FormStep::TravellerInfo));
    assert!(session.is_step_complete(FormStep::Allowances));
    assert!(session.errors().is_empty());
}

#[test]
fn test_submit_rejects_invalid_request() {
    let mut session: Session<Vec<Advisory>> = create_session();
    let mut sink: Vec<TravelRequest> = Vec::new();

    let outcome: SubmitOutcome = session.submit(&mut sink).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(sink.is_empty());
    assert!(!session.is_submitted());
    assert!(session.errors().contains(&FieldPath::Purpose));
    assert!(session.errors().contains(&FieldPath::Declarations));
}

#[test]
fn test_submit_reports_fields_from_every_step() {
    let mut session: Session<Vec<Advisory>> = create_complete_session();
    session
        .dispatch(Command::SetDeclaration {
            declaration: Declaration::Audit,
            accepted: false,
        })
        .unwrap();
    session
        .dispatch(Command::SetPurpose {
            purpose: String::from("   "),
        })
        .unwrap();
    let mut sink: Vec<TravelRequest> = Vec::new();

    let outcome: SubmitOutcome = session.submit(&mut sink).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(session.errors().len(), 2);
    assert!(session.errors().contains(&FieldPath::Purpose));
    assert!(session.errors().contains(&FieldPath::Declarations));
}

#[test]
fn test_submit_hands_valid_request_to_sink() {
    let mut session: Session<Vec<Advisory>> = create_complete_session();
    let mut sink: Vec<TravelRequest> = Vec::new();

    let outcome: SubmitOutcome = session.submit(&mut sink).unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert!(session.is_submitted());
    assert_eq!(sink.len(), 1);
    assert_eq!(&sink[0], session.request());
    // 268.34 * 4
    assert_eq!(session.cost_estimate(), Decimal::new(107_336, 2));
    assert_eq!(
        session.notifier().last().map(|a| a.kind),
        Some(AdvisoryKind::Submitted)
    );
}

#[test]
fn test_submitted_session_rejects_further_changes() {
    let mut session: Session<Vec<Advisory>> = create_complete_session();
    let mut sink: Vec<TravelRequest> = Vec::new();
    session.submit(&mut sink).unwrap();

    let dispatch: Result<(), CoreError> = session.dispatch(Command::SetPurpose {
        purpose: String::from("Changed"),
    });
    let resubmit: Result<SubmitOutcome, CoreError> = session.submit(&mut sink);

    assert_eq!(dispatch, Err(CoreError::SessionClosed));
    assert_eq!(resubmit, Err(CoreError::SessionClosed));
    assert_eq!(session.request().purpose, "Regional site inspection");
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_rejected_command_leaves_request_unchanged() {
    let mut session: Session<Vec<Advisory>> = create_complete_session();
    let before: TravelRequest = session.request().clone();

    let result: Result<(), CoreError> = session.dispatch(Command::RemoveTraveller {
        id: ItemId::new(1),
    });

    assert!(result.is_err());
    assert_eq!(session.request(), &before);
}

#[test]
fn test_dispatch_forwards_advisories_to_notifier() {
    let mut session: Session<Vec<Advisory>> = create_session();
    session
        .dispatch(Command::SetFromDate {
            date: Some(time::macros::date!(2024 - 01 - 01)),
        })
        .unwrap();
    session
        .dispatch(Command::SetToDate {
            date: Some(time::macros::date!(2024 - 02 - 01)),
        })
        .unwrap();

    assert_eq!(session.notifier().len(), 1);
    assert_eq!(session.notifier()[0].kind, AdvisoryKind::FbtRisk);
}
