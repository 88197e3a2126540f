// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;
use travel_portal_domain::{AccommodationType, AllowanceCategory, Declaration, ItemId, iso_date};

/// A command represents one user edit as data only.
///
/// Commands are the only way to change a request. Each variant addresses
/// exactly one field or list item; list items are addressed by id.
///
/// Commands deserialize from JSON objects tagged by `command`, e.g.
/// `{"command": "set_from_date", "date": "2024-01-01"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Book on behalf of other travellers. Resets the additional travellers.
    SetBookingOnBehalf {
        /// Whether booking on behalf is enabled.
        enabled: bool,
    },
    /// Add a blank additional traveller.
    AddTraveller,
    /// Remove an additional traveller.
    RemoveTraveller {
        /// The traveller to remove.
        id: ItemId,
    },
    /// Change one field of a traveller.
    UpdateTraveller {
        /// The traveller to change.
        id: ItemId,
        /// The new field value.
        update: TravellerUpdate,
    },
    /// Set the reason for travel.
    SetPurpose {
        /// The reason for travel.
        purpose: String,
    },
    /// Set the travel type.
    SetTravelType {
        /// The travel type.
        travel_type: String,
    },
    /// Set the destination.
    SetDestination {
        /// The destination.
        destination: String,
    },
    /// Set or clear the first day of travel.
    SetFromDate {
        /// The date, or `None` to clear it.
        #[serde(with = "iso_date::option", default)]
        date: Option<Date>,
    },
    /// Set or clear the last day of travel.
    SetToDate {
        /// The date, or `None` to clear it.
        #[serde(with = "iso_date::option", default)]
        date: Option<Date>,
    },
    /// Mark the trip as including personal travel. Enabling clears allowances.
    SetPersonalTravel {
        /// Whether personal travel is included.
        enabled: bool,
    },
    /// Require flights. Disabling clears the legs and the return flight.
    SetRequireFlights {
        /// Whether flights are required.
        required: bool,
    },
    /// Add a blank flight leg.
    AddFlightLeg,
    /// Remove a flight leg.
    RemoveFlightLeg {
        /// The leg to remove.
        id: ItemId,
    },
    /// Change one field of a flight leg.
    UpdateFlightLeg {
        /// The leg to change.
        id: ItemId,
        /// The new field value.
        update: FlightLegUpdate,
    },
    /// Request a return flight.
    SetReturnFlight {
        /// Whether a return flight is required.
        enabled: bool,
    },
    /// Set the baggage preference.
    SetBaggage {
        /// The baggage preference.
        baggage: String,
    },
    /// Require ferry travel. Disabling clears the crossings.
    SetRequireFerry {
        /// Whether ferry travel is required.
        required: bool,
    },
    /// Add a blank ferry crossing.
    AddFerry,
    /// Remove a ferry crossing.
    RemoveFerry {
        /// The crossing to remove.
        id: ItemId,
    },
    /// Change one field of a ferry crossing.
    UpdateFerry {
        /// The crossing to change.
        id: ItemId,
        /// The new field value.
        update: FerryUpdate,
    },
    /// Require a hire car. Disabling resets the car hire details.
    SetRequireCarHire {
        /// Whether a hire car is required.
        required: bool,
    },
    /// Change one car hire field.
    UpdateCarHire {
        /// The new field value.
        update: CarHireUpdate,
    },
    /// Require accommodation. Disabling resets accommodation and clears allowances.
    SetRequireAccommodation {
        /// Whether accommodation is required.
        required: bool,
    },
    /// Select or clear the accommodation type.
    SetAccommodationType {
        /// The accommodation type, or `None` to clear the selection.
        accommodation_type: Option<AccommodationType>,
    },
    /// Set the accommodation notes.
    SetAccommodationNotes {
        /// The notes.
        notes: String,
    },
    /// Claim an allowance. Disabling clears the entries. Enabling is
    /// rejected for trips with personal travel.
    SetRequireAllowance {
        /// Whether an allowance is claimed.
        required: bool,
    },
    /// Add a full day allowance entry for the trip length. Rejected for trips
    /// with personal travel.
    AddAllowance,
    /// Remove an allowance entry. Removing the last entry clears the claim.
    RemoveAllowance {
        /// The entry to remove.
        id: ItemId,
    },
    /// Change an entry's category. The rate is re-read from the rate table.
    SetAllowanceCategory {
        /// The entry to change.
        id: ItemId,
        /// The new category.
        category: AllowanceCategory,
    },
    /// Hand-enter an entry's daily rate.
    SetAllowanceRate {
        /// The entry to change.
        id: ItemId,
        /// The new daily rate.
        rate: Decimal,
    },
    /// Change the number of days an entry claims.
    SetAllowanceDays {
        /// The entry to change.
        id: ItemId,
        /// The new day count. Must be at least 1.
        days: u32,
    },
    /// Supply an emergency contact.
    SetRequireEmergencyContact {
        /// Whether an emergency contact is supplied.
        required: bool,
    },
    /// Change one emergency contact field.
    UpdateEmergencyContact {
        /// The new field value.
        update: EmergencyContactUpdate,
    },
    /// Accept or withdraw a declaration.
    SetDeclaration {
        /// The declaration.
        declaration: Declaration,
        /// Whether it is accepted.
        accepted: bool,
    },
}

impl Command {
    /// Returns the command name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetBookingOnBehalf { .. } => "SetBookingOnBehalf",
            Self::AddTraveller => "AddTraveller",
            Self::RemoveTraveller { .. } => "RemoveTraveller",
            Self::UpdateTraveller { .. } => "UpdateTraveller",
            Self::SetPurpose { .. } => "SetPurpose",
            Self::SetTravelType { .. } => "SetTravelType",
            Self::SetDestination { .. } => "SetDestination",
            Self::SetFromDate { .. } => "SetFromDate",
            Self::SetToDate { .. } => "SetToDate",
            Self::SetPersonalTravel { .. } => "SetPersonalTravel",
            Self::SetRequireFlights { .. } => "SetRequireFlights",
            Self::AddFlightLeg => "AddFlightLeg",
            Self::RemoveFlightLeg { .. } => "RemoveFlightLeg",
            Self::UpdateFlightLeg { .. } => "UpdateFlightLeg",
            Self::SetReturnFlight { .. } => "SetReturnFlight",
            Self::SetBaggage { .. } => "SetBaggage",
            Self::SetRequireFerry { .. } => "SetRequireFerry",
            Self::AddFerry => "AddFerry",
            Self::RemoveFerry { .. } => "RemoveFerry",
            Self::UpdateFerry { .. } => "UpdateFerry",
            Self::SetRequireCarHire { .. } => "SetRequireCarHire",
            Self::UpdateCarHire { .. } => "UpdateCarHire",
            Self::SetRequireAccommodation { .. } => "SetRequireAccommodation",
            Self::SetAccommodationType { .. } => "SetAccommodationType",
            Self::SetAccommodationNotes { .. } => "SetAccommodationNotes",
            Self::SetRequireAllowance { .. } => "SetRequireAllowance",
            Self::AddAllowance => "AddAllowance",
            Self::RemoveAllowance { .. } => "RemoveAllowance",
            Self::SetAllowanceCategory { .. } => "SetAllowanceCategory",
            Self::SetAllowanceRate { .. } => "SetAllowanceRate",
            Self::SetAllowanceDays { .. } => "SetAllowanceDays",
            Self::SetRequireEmergencyContact { .. } => "SetRequireEmergencyContact",
            Self::UpdateEmergencyContact { .. } => "UpdateEmergencyContact",
            Self::SetDeclaration { .. } => "SetDeclaration",
        }
    }
}

/// A new value for one traveller field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravellerUpdate {
    /// Full legal name.
    FullName(String),
    /// Employee number.
    EmployeeId(String),
    /// Home region.
    Region(String),
    /// Cost centre.
    CostCentre(String),
    /// Mobile phone number.
    Mobile(String),
}

/// A new value for one flight leg field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightLegUpdate {
    /// Departure port.
    From(String),
    /// Arrival port.
    To(String),
    /// Date of travel.
    Date(#[serde(with = "iso_date::option")] Option<Date>),
    /// Preferred departure time.
    Time(String),
    /// Preferred airline.
    AirlinePreference(String),
}

/// A new value for one ferry crossing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FerryUpdate {
    /// Departure terminal.
    From(String),
    /// Arrival terminal.
    To(String),
    /// Date of travel.
    Date(#[serde(with = "iso_date::option")] Option<Date>),
    /// Preferred sailing time.
    Time(String),
    /// Booking notes.
    Notes(String),
}

/// A new value for one car hire field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarHireUpdate {
    /// Pickup location.
    PickupLocation(String),
    /// Pickup date.
    PickupDate(#[serde(with = "iso_date::option")] Option<Date>),
    /// Dropoff location.
    DropoffLocation(String),
    /// Dropoff date.
    DropoffDate(#[serde(with = "iso_date::option")] Option<Date>),
    /// Vehicle class.
    CarType(String),
    /// Whether the car is shared.
    Shared(bool),
    /// Who the car is shared with.
    SharedWith(String),
}

/// A new value for one emergency contact field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyContactUpdate {
    /// Contact name.
    Name(String),
    /// Contact phone number.
    Phone(String),
    /// Relationship to the traveller.
    Relationship(String),
}
