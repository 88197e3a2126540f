// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AllowanceCategory, AllowanceEntry, CarHireField, Declaration, EmergencyContactField,
    FieldPath, FlightLeg, FormStep, ItemId, LegField, RateTable, TravelRequest, TravellerField,
    ValidationErrors, is_step_complete, validate_all, validate_step,
};
use time::macros::date;

fn create_complete_request() -> TravelRequest {
    let mut request: TravelRequest = TravelRequest::new();
    let primary = &mut request.travellers[0];
    primary.full_name = String::from("Jane Citizen");
    primary.employee_id = String::from("E12345");
    primary.cost_centre = String::from("CC-400");
    request.purpose = String::from("Site inspection");
    request.travel_type = String::from("intrastate");
    request.from_date = Some(date!(2024 - 01 - 01));
    request.to_date = Some(date!(2024 - 01 - 05));
    request.destination = String::from("Launceston");
    for declaration in Declaration::ALL {
        request.declarations.set(declaration, true);
    }
    request
}

#[test]
fn test_complete_request_is_valid() {
    let request: TravelRequest = create_complete_request();
    assert!(validate_all(&request).is_empty());
    for step in FormStep::ALL {
        assert!(is_step_complete(&request, step), "step {step}");
    }
}

#[test]
fn test_blank_request_reports_required_fields() {
    let request: TravelRequest = TravelRequest::new();
    let errors: ValidationErrors = validate_all(&request);

    assert_eq!(
        errors.get(&FieldPath::PrimaryTraveller(TravellerField::FullName)),
        Some("Full name is required")
    );
    assert_eq!(
        errors.get(&FieldPath::PrimaryTraveller(TravellerField::EmployeeId)),
        Some("Employee ID is required")
    );
    assert!(errors.contains(&FieldPath::PrimaryTraveller(TravellerField::CostCentre)));
    assert_eq!(
        errors.get(&FieldPath::Purpose),
        Some("Reason for travel is required")
    );
    assert!(errors.contains(&FieldPath::TravelType));
    assert!(errors.contains(&FieldPath::FromDate));
    assert!(errors.contains(&FieldPath::ToDate));
    assert!(errors.contains(&FieldPath::Destination));
    assert!(errors.contains(&FieldPath::Declarations));
    assert_eq!(errors.len(), 9);
}

#[test]
fn test_declarations_report_one_aggregate_error() {
    let request: TravelRequest = TravelRequest::new();
    let errors: ValidationErrors = validate_step(&request, FormStep::Approvals);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(&FieldPath::Declarations),
        Some("All declarations must be accepted")
    );
}

#[test]
fn test_single_missing_declaration_fails() {
    let mut request: TravelRequest = create_complete_request();
    request.declarations.set(Declaration::NoPersonalCards, false);

    let errors: ValidationErrors = validate_all(&request);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(&FieldPath::Declarations));
}

#[test]
fn test_step_validation_only_reports_its_own_fields() {
    let mut request: TravelRequest = TravelRequest::new();
    request.require_flights = true;
    request.require_allowance = true;
    request.require_emergency_contact = true;

    for step in FormStep::ALL {
        let errors: ValidationErrors = validate_step(&request, step);
        assert!(!errors.is_empty(), "step {step}");
        for (path, _) in errors.iter() {
            assert_eq!(path.step(), step, "{path} reported for {step}");
        }
    }
}

#[test]
fn test_full_validation_reports_every_step() {
    let mut request: TravelRequest = TravelRequest::new();
    request.require_allowance = true;

    let errors: ValidationErrors = validate_all(&request);
    for step in FormStep::ALL {
        assert!(
            errors.iter().any(|(path, _)| path.step() == step),
            "no errors for {step}"
        );
    }
}

#[test]
fn test_whitespace_only_text_is_missing() {
    let mut request: TravelRequest = create_complete_request();
    request.destination = String::from("   ");

    let errors: ValidationErrors = validate_step(&request, FormStep::TravelDetails);
    assert!(errors.contains(&FieldPath::Destination));
}

#[test]
fn test_flights_require_at_least_one_leg() {
    let mut request: TravelRequest = create_complete_request();
    request.require_flights = true;

    let errors: ValidationErrors = validate_all(&request);
    assert_eq!(
        errors.get(&FieldPath::FlightLegs),
        Some("At least one flight leg is required")
    );
}

#[test]
fn test_flight_leg_fields_are_required() {
    let mut request: TravelRequest = create_complete_request();
    request.require_flights = true;
    let id: ItemId = request.allocate_item_id();
    let mut leg: FlightLeg = FlightLeg::blank(id);
    leg.from = String::from("HBA");
    request.flight_legs.push(leg);

    let errors: ValidationErrors = validate_all(&request);
    assert!(!errors.contains(&FieldPath::FlightLegs));
    assert!(!errors.contains(&FieldPath::FlightLeg {
        id,
        field: LegField::From
    }));
    assert!(errors.contains(&FieldPath::FlightLeg {
        id,
        field: LegField::To
    }));
    assert!(errors.contains(&FieldPath::FlightLeg {
        id,
        field: LegField::Date
    }));
}

#[test]
fn test_ungated_sections_are_not_validated() {
    let mut request: TravelRequest = create_complete_request();
    let id: ItemId = request.allocate_item_id();
    request.flight_legs.push(FlightLeg::blank(id));
    request.emergency_contact.name = String::new();

    assert!(validate_all(&request).is_empty());
}

#[test]
fn test_ferry_requires_crossing() {
    let mut request: TravelRequest = create_complete_request();
    request.require_ferry = true;

    let errors: ValidationErrors = validate_all(&request);
    assert_eq!(
        errors.get(&FieldPath::Ferries),
        Some("At least one ferry is required")
    );
}

#[test]
fn test_car_hire_requires_locations_and_dates() {
    let mut request: TravelRequest = create_complete_request();
    request.require_car_hire = true;
    request.car_hire.pickup_location = String::from("Hobart Airport");
    request.car_hire.pickup_date = Some(date!(2024 - 01 - 01));

    let errors: ValidationErrors = validate_all(&request);
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&FieldPath::CarHire(CarHireField::DropoffLocation)));
    assert!(errors.contains(&FieldPath::CarHire(CarHireField::DropoffDate)));
}

#[test]
fn test_accommodation_requires_type() {
    let mut request: TravelRequest = create_complete_request();
    request.require_accommodation = true;
    assert!(validate_all(&request).is_empty());

    request.accommodation.accommodation_type = None;
    let errors: ValidationErrors = validate_all(&request);
    assert_eq!(
        errors.get(&FieldPath::AccommodationType),
        Some("Accommodation type is required")
    );
}

#[test]
fn test_emergency_contact_is_gated() {
    let mut request: TravelRequest = create_complete_request();
    request.require_emergency_contact = true;

    let errors: ValidationErrors = validate_step(&request, FormStep::TravellerInfo);
    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&FieldPath::EmergencyContact(EmergencyContactField::Name)));
    assert!(errors.contains(&FieldPath::EmergencyContact(EmergencyContactField::Phone)));
    assert!(errors.contains(&FieldPath::EmergencyContact(
        EmergencyContactField::Relationship
    )));
}

#[test]
fn test_allowance_flag_requires_entry() {
    let mut request: TravelRequest = create_complete_request();
    request.require_allowance = true;

    let errors: ValidationErrors = validate_step(&request, FormStep::Allowances);
    assert_eq!(
        errors.get(&FieldPath::Allowances),
        Some("At least one LAFHA entry is required")
    );

    let id: ItemId = request.allocate_item_id();
    request.allowances.push(
        AllowanceEntry::new(id, AllowanceCategory::FullDay, &RateTable::standard(), 4).unwrap(),
    );
    assert!(is_step_complete(&request, FormStep::Allowances));
}

#[test]
fn test_field_paths_render_as_dotted_strings() {
    assert_eq!(
        FieldPath::PrimaryTraveller(TravellerField::FullName).to_string(),
        "travellers[0].full_name"
    );
    assert_eq!(
        FieldPath::FlightLeg {
            id: ItemId::new(4),
            field: LegField::Date
        }
        .to_string(),
        "flight_legs[id=4].date"
    );
    assert_eq!(
        FieldPath::CarHire(CarHireField::PickupDate).to_string(),
        "car_hire.pickup_date"
    );
    assert_eq!(FieldPath::AccommodationType.to_string(), "accommodation.type");
    assert_eq!(FieldPath::Declarations.to_string(), "declarations");
}

#[test]
fn test_errors_serialize_as_path_keyed_map() {
    let mut request: TravelRequest = create_complete_request();
    request.purpose = String::new();

    let json: serde_json::Value = serde_json::to_value(validate_all(&request)).unwrap();
    assert_eq!(json["purpose"], "Reason for travel is required");
}
