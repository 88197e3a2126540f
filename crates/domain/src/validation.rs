// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation of a travel request.
//!
//! Every pass rebuilds the error map from scratch. A step-scoped pass runs
//! only the rules of that step; a full pass runs all of them.

use crate::step::FormStep;
use crate::types::{Ferry, FlightLeg, ItemId, TravelRequest};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use time::Date;

/// A validated field of the primary traveller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TravellerField {
    /// Full name.
    FullName,
    /// Employee id.
    EmployeeId,
    /// Cost centre.
    CostCentre,
}

/// A validated field of a flight leg or ferry crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LegField {
    /// Departure point.
    From,
    /// Arrival point.
    To,
    /// Travel date.
    Date,
}

/// A validated car hire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarHireField {
    /// Pickup location.
    PickupLocation,
    /// Pickup date.
    PickupDate,
    /// Dropoff location.
    DropoffLocation,
    /// Dropoff date.
    DropoffDate,
}

/// A validated emergency contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmergencyContactField {
    /// Contact name.
    Name,
    /// Contact phone.
    Phone,
    /// Relationship to the traveller.
    Relationship,
}

/// The location of a validation error within a request.
///
/// Paths render as dotted strings, e.g. `travellers[0].full_name` or
/// `flight_legs[id=4].date`. Items in lists are addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    /// A field of the primary traveller.
    PrimaryTraveller(TravellerField),
    /// Reason for travel.
    Purpose,
    /// Travel type.
    TravelType,
    /// First day of travel.
    FromDate,
    /// Last day of travel.
    ToDate,
    /// Destination.
    Destination,
    /// The flight leg list as a whole.
    FlightLegs,
    /// A field of one flight leg.
    FlightLeg {
        /// The leg's id.
        id: ItemId,
        /// The invalid field.
        field: LegField,
    },
    /// The ferry list as a whole.
    Ferries,
    /// A field of one ferry crossing.
    Ferry {
        /// The crossing's id.
        id: ItemId,
        /// The invalid field.
        field: LegField,
    },
    /// A car hire field.
    CarHire(CarHireField),
    /// Accommodation type.
    AccommodationType,
    /// An emergency contact field.
    EmergencyContact(EmergencyContactField),
    /// The allowance list as a whole.
    Allowances,
    /// All declarations, reported together.
    Declarations,
}

impl FieldPath {
    /// Returns the wizard step that owns this field.
    #[must_use]
    pub const fn step(&self) -> FormStep {
        match self {
            Self::PrimaryTraveller(_) | Self::EmergencyContact(_) => FormStep::TravellerInfo,
            Self::Purpose
            | Self::TravelType
            | Self::FromDate
            | Self::ToDate
            | Self::Destination
            | Self::FlightLegs
            | Self::FlightLeg { .. }
            | Self::Ferries
            | Self::Ferry { .. }
            | Self::CarHire(_)
            | Self::AccommodationType => FormStep::TravelDetails,
            Self::Allowances => FormStep::Allowances,
            Self::Declarations => FormStep::Approvals,
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrimaryTraveller(field) => {
                let name: &str = match field {
                    TravellerField::FullName => "full_name",
                    TravellerField::EmployeeId => "employee_id",
                    TravellerField::CostCentre => "cost_centre",
                };
                write!(f, "travellers[0].{name}")
            }
            Self::Purpose => write!(f, "purpose"),
            Self::TravelType => write!(f, "travel_type"),
            Self::FromDate => write!(f, "from_date"),
            Self::ToDate => write!(f, "to_date"),
            Self::Destination => write!(f, "destination"),
            Self::FlightLegs => write!(f, "flight_legs"),
            Self::FlightLeg { id, field } => {
                write!(f, "flight_legs[id={id}].{}", leg_field_name(*field))
            }
            Self::Ferries => write!(f, "ferries"),
            Self::Ferry { id, field } => {
                write!(f, "ferries[id={id}].{}", leg_field_name(*field))
            }
            Self::CarHire(field) => {
                let name: &str = match field {
                    CarHireField::PickupLocation => "pickup_location",
                    CarHireField::PickupDate => "pickup_date",
                    CarHireField::DropoffLocation => "dropoff_location",
                    CarHireField::DropoffDate => "dropoff_date",
                };
                write!(f, "car_hire.{name}")
            }
            Self::AccommodationType => write!(f, "accommodation.type"),
            Self::EmergencyContact(field) => {
                let name: &str = match field {
                    EmergencyContactField::Name => "name",
                    EmergencyContactField::Phone => "phone",
                    EmergencyContactField::Relationship => "relationship",
                };
                write!(f, "emergency_contact.{name}")
            }
            Self::Allowances => write!(f, "allowances"),
            Self::Declarations => write!(f, "declarations"),
        }
    }
}

const fn leg_field_name(field: LegField) -> &'static str {
    match field {
        LegField::From => "from",
        LegField::To => "to",
        LegField::Date => "date",
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Field validation errors, keyed by field path.
///
/// An empty map means the validated fields are complete.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldPath, String>,
}

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Returns whether no errors were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for a field, if it has an error.
    #[must_use]
    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    /// Returns whether a field has an error.
    #[must_use]
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.errors.contains_key(path)
    }

    /// Iterates over errors in field path order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
        self.errors.iter().map(|(path, message)| (path, message.as_str()))
    }

    fn require(&mut self, present: bool, path: FieldPath, message: &str) {
        if !present {
            self.errors.insert(path, String::from(message));
        }
    }
}

/// Validates the fields of a single wizard step.
///
/// Fields owned by other steps are never reported.
#[must_use]
pub fn validate_step(request: &TravelRequest, step: FormStep) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    match step {
        FormStep::TravellerInfo => validate_traveller_info(request, &mut errors),
        FormStep::TravelDetails => validate_travel_details(request, &mut errors),
        FormStep::Allowances => validate_allowances(request, &mut errors),
        FormStep::Approvals => validate_approvals(request, &mut errors),
    }
    errors
}

/// Validates every field of the request, regardless of step.
#[must_use]
pub fn validate_all(request: &TravelRequest) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    validate_traveller_info(request, &mut errors);
    validate_travel_details(request, &mut errors);
    validate_allowances(request, &mut errors);
    validate_approvals(request, &mut errors);
    errors
}

/// Returns whether a step has no validation errors.
#[must_use]
pub fn is_step_complete(request: &TravelRequest, step: FormStep) -> bool {
    validate_step(request, step).is_empty()
}

fn validate_traveller_info(request: &TravelRequest, errors: &mut ValidationErrors) {
    let (full_name, employee_id, cost_centre): (&str, &str, &str) =
        request.primary_traveller().map_or(("", "", ""), |t| {
            (
                t.full_name.as_str(),
                t.employee_id.as_str(),
                t.cost_centre.as_str(),
            )
        });

    errors.require(
        has_text(full_name),
        FieldPath::PrimaryTraveller(TravellerField::FullName),
        "Full name is required",
    );
    errors.require(
        has_text(employee_id),
        FieldPath::PrimaryTraveller(TravellerField::EmployeeId),
        "Employee ID is required",
    );
    errors.require(
        has_text(cost_centre),
        FieldPath::PrimaryTraveller(TravellerField::CostCentre),
        "Cost centre is required",
    );

    // Emergency contact details are only collected when requested.
    if request.require_emergency_contact {
        let contact = &request.emergency_contact;
        errors.require(
            has_text(&contact.name),
            FieldPath::EmergencyContact(EmergencyContactField::Name),
            "Emergency contact name is required",
        );
        errors.require(
            has_text(&contact.phone),
            FieldPath::EmergencyContact(EmergencyContactField::Phone),
            "Emergency contact phone is required",
        );
        errors.require(
            has_text(&contact.relationship),
            FieldPath::EmergencyContact(EmergencyContactField::Relationship),
            "Emergency contact relationship is required",
        );
    }
}

fn validate_travel_details(request: &TravelRequest, errors: &mut ValidationErrors) {
    errors.require(
        has_text(&request.purpose),
        FieldPath::Purpose,
        "Reason for travel is required",
    );
    errors.require(
        has_text(&request.travel_type),
        FieldPath::TravelType,
        "Travel type is required",
    );
    errors.require(
        request.from_date.is_some(),
        FieldPath::FromDate,
        "From date is required",
    );
    errors.require(
        request.to_date.is_some(),
        FieldPath::ToDate,
        "To date is required",
    );
    errors.require(
        has_text(&request.destination),
        FieldPath::Destination,
        "Destination is required",
    );

    if request.require_flights {
        errors.require(
            !request.flight_legs.is_empty(),
            FieldPath::FlightLegs,
            "At least one flight leg is required",
        );
        for leg in &request.flight_legs {
            validate_leg(errors, &LegParts::from(leg), |id, field| {
                FieldPath::FlightLeg { id, field }
            });
        }
    }

    if request.require_ferry {
        errors.require(
            !request.ferries.is_empty(),
            FieldPath::Ferries,
            "At least one ferry is required",
        );
        for ferry in &request.ferries {
            validate_leg(errors, &LegParts::from(ferry), |id, field| FieldPath::Ferry {
                id,
                field,
            });
        }
    }

    if request.require_car_hire {
        let car_hire = &request.car_hire;
        errors.require(
            has_text(&car_hire.pickup_location),
            FieldPath::CarHire(CarHireField::PickupLocation),
            "Pickup location is required",
        );
        errors.require(
            car_hire.pickup_date.is_some(),
            FieldPath::CarHire(CarHireField::PickupDate),
            "Pickup date is required",
        );
        errors.require(
            has_text(&car_hire.dropoff_location),
            FieldPath::CarHire(CarHireField::DropoffLocation),
            "Dropoff location is required",
        );
        errors.require(
            car_hire.dropoff_date.is_some(),
            FieldPath::CarHire(CarHireField::DropoffDate),
            "Dropoff date is required",
        );
    }

    if request.require_accommodation {
        errors.require(
            request.accommodation.accommodation_type.is_some(),
            FieldPath::AccommodationType,
            "Accommodation type is required",
        );
    }
}

fn validate_allowances(request: &TravelRequest, errors: &mut ValidationErrors) {
    if request.require_allowance {
        errors.require(
            !request.allowances.is_empty(),
            FieldPath::Allowances,
            "At least one LAFHA entry is required",
        );
    }
}

fn validate_approvals(request: &TravelRequest, errors: &mut ValidationErrors) {
    // One aggregate error, not one per declaration.
    errors.require(
        request.declarations.all_accepted(),
        FieldPath::Declarations,
        "All declarations must be accepted",
    );
}

/// The validated parts shared by flight legs and ferry crossings.
struct LegParts<'a> {
    id: ItemId,
    from: &'a str,
    to: &'a str,
    date: Option<Date>,
}

impl<'a> From<&'a FlightLeg> for LegParts<'a> {
    fn from(leg: &'a FlightLeg) -> Self {
        Self {
            id: leg.id,
            from: &leg.from,
            to: &leg.to,
            date: leg.date,
        }
    }
}

impl<'a> From<&'a Ferry> for LegParts<'a> {
    fn from(ferry: &'a Ferry) -> Self {
        Self {
            id: ferry.id,
            from: &ferry.from,
            to: &ferry.to,
            date: ferry.date,
        }
    }
}

fn validate_leg(
    errors: &mut ValidationErrors,
    leg: &LegParts<'_>,
    path: impl Fn(ItemId, LegField) -> FieldPath,
) {
    errors.require(
        has_text(leg.from),
        path(leg.id, LegField::From),
        "Departure point is required",
    );
    errors.require(
        has_text(leg.to),
        path(leg.id, LegField::To),
        "Arrival point is required",
    );
    errors.require(
        leg.date.is_some(),
        path(leg.id, LegField::Date),
        "Travel date is required",
    );
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}
