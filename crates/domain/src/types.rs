// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::allowance::AllowanceEntry;
use crate::cost::compute_cost_estimate;
use crate::error::DomainError;
use crate::nights::compute_nights;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

// ISO `YYYY-MM-DD` dates, shared with the command layer.
time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Identifies one item inside a list-typed section of a request.
///
/// Ids are allocated from a per-request counter and never reused, so an id
/// keeps addressing the same item while other items are added or removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an `ItemId` from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person travelling under the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traveller {
    /// The traveller's item id.
    pub id: ItemId,
    /// Full legal name.
    pub full_name: String,
    /// Employee number.
    pub employee_id: String,
    /// Home region.
    pub region: String,
    /// Cost centre the travel is charged to.
    pub cost_centre: String,
    /// Mobile phone number.
    pub mobile: String,
}

impl Traveller {
    /// Creates a traveller with every text field empty.
    #[must_use]
    pub const fn blank(id: ItemId) -> Self {
        Self {
            id,
            full_name: String::new(),
            employee_id: String::new(),
            region: String::new(),
            cost_centre: String::new(),
            mobile: String::new(),
        }
    }
}

/// One flight leg of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    /// The leg's item id.
    pub id: ItemId,
    /// Departure port.
    pub from: String,
    /// Arrival port.
    pub to: String,
    /// Date of travel.
    #[serde(with = "iso_date::option", default)]
    pub date: Option<Date>,
    /// Preferred departure time, free text.
    pub time: String,
    /// Preferred airline, free text.
    pub airline_preference: String,
}

impl FlightLeg {
    /// Creates an empty flight leg.
    #[must_use]
    pub const fn blank(id: ItemId) -> Self {
        Self {
            id,
            from: String::new(),
            to: String::new(),
            date: None,
            time: String::new(),
            airline_preference: String::new(),
        }
    }
}

/// One ferry crossing of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ferry {
    /// The crossing's item id.
    pub id: ItemId,
    /// Departure terminal.
    pub from: String,
    /// Arrival terminal.
    pub to: String,
    /// Date of travel.
    #[serde(with = "iso_date::option", default)]
    pub date: Option<Date>,
    /// Preferred sailing time, free text.
    pub time: String,
    /// Booking notes.
    pub notes: String,
}

impl Ferry {
    /// Creates an empty ferry crossing.
    #[must_use]
    pub const fn blank(id: ItemId) -> Self {
        Self {
            id,
            from: String::new(),
            to: String::new(),
            date: None,
            time: String::new(),
            notes: String::new(),
        }
    }
}

/// Car hire booking details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarHire {
    /// Where the car is collected.
    pub pickup_location: String,
    /// When the car is collected.
    #[serde(with = "iso_date::option", default)]
    pub pickup_date: Option<Date>,
    /// Where the car is returned.
    pub dropoff_location: String,
    /// When the car is returned.
    #[serde(with = "iso_date::option", default)]
    pub dropoff_date: Option<Date>,
    /// Requested vehicle class.
    pub car_type: String,
    /// Whether the car is shared with another traveller.
    pub shared: bool,
    /// Who the car is shared with.
    pub shared_with: String,
}

impl Default for CarHire {
    fn default() -> Self {
        Self {
            pickup_location: String::new(),
            pickup_date: None,
            dropoff_location: String::new(),
            dropoff_date: None,
            car_type: String::from("small"),
            shared: false,
            shared_with: String::new(),
        }
    }
}

/// The kind of accommodation the traveller will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    /// Hotel booked through the travel provider.
    #[default]
    Hotel,
    /// Private accommodation arranged by the traveller.
    Private,
    /// Any other employee-arranged accommodation.
    Other,
}

impl AccommodationType {
    /// Returns the lowercase label of this accommodation type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Private => "private",
            Self::Other => "other",
        }
    }
}

/// Accommodation details.
///
/// The type is optional so that a cleared selection can be reported by
/// validation; new requests start with `Hotel` selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accommodation {
    /// The selected accommodation type.
    #[serde(rename = "type")]
    pub accommodation_type: Option<AccommodationType>,
    /// Free-text notes.
    pub notes: String,
}

impl Default for Accommodation {
    fn default() -> Self {
        Self {
            accommodation_type: Some(AccommodationType::Hotel),
            notes: String::new(),
        }
    }
}

/// Who to contact if something goes wrong while travelling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Contact name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Relationship to the traveller.
    pub relationship: String,
}

/// One of the acknowledgements required before a request can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Declaration {
    /// The request is correct and has been approved.
    CorrectAndApproved,
    /// Overpayments may be recovered through payroll.
    PayrollDeduction,
    /// The request may be audited.
    Audit,
    /// Bookings are made through the travel management company.
    TravelManagementBookings,
    /// Personal cards are not used for work travel.
    NoPersonalCards,
}

impl Declaration {
    /// Every declaration, in display order.
    pub const ALL: [Self; 5] = [
        Self::CorrectAndApproved,
        Self::PayrollDeduction,
        Self::Audit,
        Self::TravelManagementBookings,
        Self::NoPersonalCards,
    ];
}

/// The five acknowledgements and whether each has been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Declarations {
    /// See [`Declaration::CorrectAndApproved`].
    pub correct_and_approved: bool,
    /// See [`Declaration::PayrollDeduction`].
    pub payroll_deduction: bool,
    /// See [`Declaration::Audit`].
    pub audit: bool,
    /// See [`Declaration::TravelManagementBookings`].
    pub travel_management_bookings: bool,
    /// See [`Declaration::NoPersonalCards`].
    pub no_personal_cards: bool,
}

impl Declarations {
    /// Returns whether the given declaration has been accepted.
    #[must_use]
    pub const fn is_accepted(&self, declaration: Declaration) -> bool {
        match declaration {
            Declaration::CorrectAndApproved => self.correct_and_approved,
            Declaration::PayrollDeduction => self.payroll_deduction,
            Declaration::Audit => self.audit,
            Declaration::TravelManagementBookings => self.travel_management_bookings,
            Declaration::NoPersonalCards => self.no_personal_cards,
        }
    }

    /// Records whether the given declaration has been accepted.
    pub const fn set(&mut self, declaration: Declaration, accepted: bool) {
        match declaration {
            Declaration::CorrectAndApproved => self.correct_and_approved = accepted,
            Declaration::PayrollDeduction => self.payroll_deduction = accepted,
            Declaration::Audit => self.audit = accepted,
            Declaration::TravelManagementBookings => self.travel_management_bookings = accepted,
            Declaration::NoPersonalCards => self.no_personal_cards = accepted,
        }
    }

    /// Returns whether every declaration has been accepted.
    #[must_use]
    pub fn all_accepted(&self) -> bool {
        Declaration::ALL.iter().all(|d| self.is_accepted(*d))
    }
}

/// A travel and allowance request.
///
/// `nights` is derived from the trip dates and can only change through
/// [`TravelRequest::recompute_nights`]. Item ids come from
/// [`TravelRequest::allocate_item_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct TravelRequest {
    /// Whether the request covers travellers other than the requester.
    pub booking_on_behalf: bool,
    /// Travellers; the first entry is the primary traveller.
    pub travellers: Vec<Traveller>,
    /// Reason for travel.
    pub purpose: String,
    /// Travel type (e.g. domestic, intrastate).
    pub travel_type: String,
    /// First day of travel.
    #[serde(with = "iso_date::option")]
    pub from_date: Option<Date>,
    /// Last day of travel.
    #[serde(with = "iso_date::option")]
    pub to_date: Option<Date>,
    /// Destination.
    pub destination: String,
    /// Nights away, derived from the trip dates.
    nights: u32,
    /// Whether the trip includes a personal travel component.
    pub personal_travel: bool,
    /// Whether flights are required.
    pub require_flights: bool,
    /// Flight legs.
    pub flight_legs: Vec<FlightLeg>,
    /// Whether a return flight is required.
    pub return_flight: bool,
    /// Baggage allowance preference.
    pub baggage: String,
    /// Whether ferry travel is required.
    pub require_ferry: bool,
    /// Ferry crossings.
    pub ferries: Vec<Ferry>,
    /// Whether a hire car is required.
    pub require_car_hire: bool,
    /// Car hire details.
    pub car_hire: CarHire,
    /// Whether accommodation is required.
    pub require_accommodation: bool,
    /// Accommodation details.
    pub accommodation: Accommodation,
    /// Whether a living-away-from-home allowance is claimed.
    pub require_allowance: bool,
    /// Allowance line items.
    pub allowances: Vec<AllowanceEntry>,
    /// Whether an emergency contact is supplied.
    pub require_emergency_contact: bool,
    /// Emergency contact details.
    pub emergency_contact: EmergencyContact,
    /// Submission acknowledgements.
    pub declarations: Declarations,
    #[serde(skip)]
    next_item_id: u64,
}

impl TravelRequest {
    /// Creates a request with default values and a blank primary traveller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            booking_on_behalf: false,
            travellers: vec![Traveller::blank(ItemId::new(1))],
            purpose: String::new(),
            travel_type: String::new(),
            from_date: None,
            to_date: None,
            destination: String::new(),
            nights: 0,
            personal_travel: false,
            require_flights: false,
            flight_legs: Vec::new(),
            return_flight: false,
            baggage: String::from("carry-on"),
            require_ferry: false,
            ferries: Vec::new(),
            require_car_hire: false,
            car_hire: CarHire::default(),
            require_accommodation: false,
            accommodation: Accommodation::default(),
            require_allowance: false,
            allowances: Vec::new(),
            require_emergency_contact: false,
            emergency_contact: EmergencyContact::default(),
            declarations: Declarations::default(),
            next_item_id: 2,
        }
    }

    /// Returns the number of nights away.
    #[must_use]
    pub const fn nights(&self) -> u32 {
        self.nights
    }

    /// Recomputes `nights` from the trip dates.
    ///
    /// When either date is missing the previous value is kept and `None` is
    /// returned.
    pub fn recompute_nights(&mut self) -> Option<u32> {
        let nights: u32 = compute_nights(self.from_date, self.to_date)?;
        self.nights = nights;
        Some(nights)
    }

    /// Allocates a fresh item id.
    pub const fn allocate_item_id(&mut self) -> ItemId {
        let id: ItemId = ItemId::new(self.next_item_id);
        self.next_item_id += 1;
        id
    }

    /// Returns the primary traveller, if present.
    #[must_use]
    pub fn primary_traveller(&self) -> Option<&Traveller> {
        self.travellers.first()
    }

    /// Returns the total estimated allowance cost.
    #[must_use]
    pub fn cost_estimate(&self) -> Decimal {
        compute_cost_estimate(&self.allowances)
    }

    /// Looks up a traveller by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotFound` if no traveller has this id.
    pub fn traveller_mut(&mut self, id: ItemId) -> Result<&mut Traveller, DomainError> {
        find_mut(&mut self.travellers, "travellers", id, |t| t.id)
    }

    /// Looks up a flight leg by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotFound` if no leg has this id.
    pub fn flight_leg_mut(&mut self, id: ItemId) -> Result<&mut FlightLeg, DomainError> {
        find_mut(&mut self.flight_legs, "flight_legs", id, |l| l.id)
    }

    /// Looks up a ferry crossing by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotFound` if no crossing has this id.
    pub fn ferry_mut(&mut self, id: ItemId) -> Result<&mut Ferry, DomainError> {
        find_mut(&mut self.ferries, "ferries", id, |f| f.id)
    }

    /// Looks up an allowance entry by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotFound` if no entry has this id.
    pub fn allowance_mut(&mut self, id: ItemId) -> Result<&mut AllowanceEntry, DomainError> {
        find_mut(&mut self.allowances, "allowances", id, |a| a.id)
    }
}

impl Default for TravelRequest {
    fn default() -> Self {
        Self::new()
    }
}

fn find_mut<'a, T>(
    items: &'a mut [T],
    collection: &'static str,
    id: ItemId,
    id_of: impl Fn(&T) -> ItemId,
) -> Result<&'a mut T, DomainError> {
    items
        .iter_mut()
        .find(|item| id_of(item) == id)
        .ok_or(DomainError::ItemNotFound { collection, id })
}
