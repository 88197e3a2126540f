// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{
    CarHireUpdate, Command, EmergencyContactUpdate, FerryUpdate, FlightLegUpdate,
    TravellerUpdate,
};
use crate::error::CoreError;
use crate::state::TransitionResult;
use tracing::debug;
use travel_portal_advisory::Advisory;
use travel_portal_domain::{
    Accommodation, AllowanceCategory, AllowanceEntry, CarHire, DomainError, EmergencyContact,
    Ferry, FlightLeg, ItemId, RateTable, TravelRequest, Traveller, checked_cost_estimate,
    default_allowance, default_allowance_days, exceeds_fbt_risk, validate_allowance_days,
    validate_allowance_rate,
};

/// Derived state that must be refreshed after a command.
#[derive(Debug, Clone, Copy, Default)]
struct Recompute {
    /// A trip date changed.
    nights: bool,
    /// A field the allowance defaulting rule depends on changed.
    allowance_default: bool,
}

impl Recompute {
    const NONE: Self = Self {
        nights: false,
        allowance_default: false,
    };
    const NIGHTS: Self = Self {
        nights: true,
        allowance_default: true,
    };
    const ALLOWANCE_DEFAULT: Self = Self {
        nights: false,
        allowance_default: true,
    };
}

/// Applies a command to the current request, producing a new request and
/// any advisories raised along the way.
///
/// After the command itself, derived state is refreshed in a fixed order:
/// nights are recomputed when a date changed, then the allowance defaulting
/// rule runs when one of its trigger fields changed.
///
/// # Arguments
///
/// * `rates` - The allowance rate table
/// * `state` - The current request (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new request and advisories
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command addresses an item id that does not exist
/// - The command would remove the primary traveller
/// - A traveller is added while not booking on behalf of others
/// - An allowance day count is zero or a rate is negative
/// - An allowance is claimed on a trip with personal travel
/// - The allowance total would no longer fit in a `Decimal`
pub fn apply(
    rates: &RateTable,
    state: &TravelRequest,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    debug!(command = command.name(), "Applying command");

    let mut new_state: TravelRequest = state.clone();
    let mut advisories: Vec<Advisory> = Vec::new();

    let recompute: Recompute = apply_command(rates, &mut new_state, command, &mut advisories)?;

    if recompute.nights
        && let Some(nights) = new_state.recompute_nights()
    {
        debug!(nights, "Recomputed nights");
        if exceeds_fbt_risk(nights) {
            advisories.push(Advisory::fbt_risk(nights));
        }
    }

    if recompute.allowance_default
        && let Some(entry) = apply_allowance_defaulting(rates, &mut new_state)
        && entry.classification().is_reportable()
    {
        advisories.push(Advisory::reportable_allowance(entry.days));
    }

    if checked_cost_estimate(&new_state.allowances).is_none() {
        return Err(DomainError::CostEstimateOverflow.into());
    }

    Ok(TransitionResult {
        new_state,
        advisories,
    })
}

/// Seeds a default allowance entry when the request qualifies.
///
/// The request qualifies when accommodation is required and is private or
/// other, the trip is not personal travel, and there are no allowance entries.
/// When it does, the allowance claim is switched on and one entry is added
/// with the category implied by the accommodation, its table rate, and the
/// trip length in days. Existing entries are never touched, so the rule fires
/// at most once until the list is emptied again.
///
/// # Returns
///
/// The seeded entry, or `None` if the request did not qualify.
pub fn apply_allowance_defaulting<'a>(
    rates: &RateTable,
    request: &'a mut TravelRequest,
) -> Option<&'a AllowanceEntry> {
    let default = default_allowance(request, rates)?;
    let id: ItemId = request.allocate_item_id();

    debug!(
        category = %default.category,
        days = default.days,
        classification = %default.classification(),
        "Seeding default allowance"
    );

    request.require_allowance = true;
    request.allowances.push(default.into_entry(id));
    request.allowances.last()
}

#[allow(clippy::too_many_lines)]
fn apply_command(
    rates: &RateTable,
    request: &mut TravelRequest,
    command: Command,
    advisories: &mut Vec<Advisory>,
) -> Result<Recompute, CoreError> {
    match command {
        Command::SetBookingOnBehalf { enabled } => {
            request.booking_on_behalf = enabled;
            request.travellers.truncate(1);
            if enabled {
                let id: ItemId = request.allocate_item_id();
                request.travellers.push(Traveller::blank(id));
            }
        }
        Command::AddTraveller => {
            if !request.booking_on_behalf {
                return Err(DomainError::NotBookingOnBehalf.into());
            }
            let id: ItemId = request.allocate_item_id();
            request.travellers.push(Traveller::blank(id));
        }
        Command::RemoveTraveller { id } => {
            if request.primary_traveller().is_some_and(|t| t.id == id) {
                return Err(DomainError::PrimaryTravellerRequired.into());
            }
            remove_item(&mut request.travellers, "travellers", id, |t| t.id)?;
        }
        Command::UpdateTraveller { id, update } => {
            let traveller: &mut Traveller = request.traveller_mut(id)?;
            match update {
                TravellerUpdate::FullName(value) => traveller.full_name = value,
                TravellerUpdate::EmployeeId(value) => traveller.employee_id = value,
                TravellerUpdate::Region(value) => traveller.region = value,
                TravellerUpdate::CostCentre(value) => traveller.cost_centre = value,
                TravellerUpdate::Mobile(value) => traveller.mobile = value,
            }
        }
        Command::SetPurpose { purpose } => request.purpose = purpose,
        Command::SetTravelType { travel_type } => request.travel_type = travel_type,
        Command::SetDestination { destination } => request.destination = destination,
        Command::SetFromDate { date } => {
            request.from_date = date;
            return Ok(Recompute::NIGHTS);
        }
        Command::SetToDate { date } => {
            request.to_date = date;
            return Ok(Recompute::NIGHTS);
        }
        Command::SetPersonalTravel { enabled } => {
            request.personal_travel = enabled;
            if enabled {
                clear_allowances(request);
            }
            return Ok(Recompute::ALLOWANCE_DEFAULT);
        }
        Command::SetRequireFlights { required } => {
            request.require_flights = required;
            if !required {
                request.flight_legs.clear();
                request.return_flight = false;
            }
        }
        Command::AddFlightLeg => {
            let id: ItemId = request.allocate_item_id();
            request.flight_legs.push(FlightLeg::blank(id));
        }
        Command::RemoveFlightLeg { id } => {
            remove_item(&mut request.flight_legs, "flight_legs", id, |l| l.id)?;
        }
        Command::UpdateFlightLeg { id, update } => {
            let leg: &mut FlightLeg = request.flight_leg_mut(id)?;
            match update {
                FlightLegUpdate::From(value) => leg.from = value,
                FlightLegUpdate::To(value) => leg.to = value,
                FlightLegUpdate::Date(value) => leg.date = value,
                FlightLegUpdate::Time(value) => leg.time = value,
                FlightLegUpdate::AirlinePreference(value) => leg.airline_preference = value,
            }
        }
        Command::SetReturnFlight { enabled } => request.return_flight = enabled,
        Command::SetBaggage { baggage } => request.baggage = baggage,
        Command::SetRequireFerry { required } => {
            request.require_ferry = required;
            if !required {
                request.ferries.clear();
            }
        }
        Command::AddFerry => {
            let id: ItemId = request.allocate_item_id();
            request.ferries.push(Ferry::blank(id));
        }
        Command::RemoveFerry { id } => {
            remove_item(&mut request.ferries, "ferries", id, |f| f.id)?;
        }
        Command::UpdateFerry { id, update } => {
            let ferry: &mut Ferry = request.ferry_mut(id)?;
            match update {
                FerryUpdate::From(value) => ferry.from = value,
                FerryUpdate::To(value) => ferry.to = value,
                FerryUpdate::Date(value) => ferry.date = value,
                FerryUpdate::Time(value) => ferry.time = value,
                FerryUpdate::Notes(value) => ferry.notes = value,
            }
        }
        Command::SetRequireCarHire { required } => {
            request.require_car_hire = required;
            if !required {
                request.car_hire = CarHire::default();
            }
        }
        Command::UpdateCarHire { update } => {
            let car_hire: &mut CarHire = &mut request.car_hire;
            match update {
                CarHireUpdate::PickupLocation(value) => car_hire.pickup_location = value,
                CarHireUpdate::PickupDate(value) => car_hire.pickup_date = value,
                CarHireUpdate::DropoffLocation(value) => car_hire.dropoff_location = value,
                CarHireUpdate::DropoffDate(value) => car_hire.dropoff_date = value,
                CarHireUpdate::CarType(value) => car_hire.car_type = value,
                CarHireUpdate::Shared(value) => car_hire.shared = value,
                CarHireUpdate::SharedWith(value) => car_hire.shared_with = value,
            }
        }
        Command::SetRequireAccommodation { required } => {
            request.require_accommodation = required;
            if !required {
                request.accommodation = Accommodation::default();
                clear_allowances(request);
            }
            return Ok(Recompute::ALLOWANCE_DEFAULT);
        }
        Command::SetAccommodationType { accommodation_type } => {
            request.accommodation.accommodation_type = accommodation_type;
            return Ok(Recompute::ALLOWANCE_DEFAULT);
        }
        Command::SetAccommodationNotes { notes } => request.accommodation.notes = notes,
        Command::SetRequireAllowance { required } => {
            if required {
                ensure_allowance_available(request)?;
                request.require_allowance = true;
            } else {
                clear_allowances(request);
            }
        }
        Command::AddAllowance => {
            ensure_allowance_available(request)?;
            let id: ItemId = request.allocate_item_id();
            let days: u32 = default_allowance_days(request.nights());
            let entry: AllowanceEntry =
                AllowanceEntry::new(id, AllowanceCategory::FullDay, rates, days)?;
            if entry.classification().is_reportable() {
                advisories.push(Advisory::reportable_allowance(entry.days));
            }
            request.require_allowance = true;
            request.allowances.push(entry);
        }
        Command::RemoveAllowance { id } => {
            remove_item(&mut request.allowances, "allowances", id, |a| a.id)?;
            if request.allowances.is_empty() {
                request.require_allowance = false;
            }
        }
        Command::SetAllowanceCategory { id, category } => {
            request.allowance_mut(id)?.set_category(category, rates);
        }
        Command::SetAllowanceRate { id, rate } => {
            validate_allowance_rate(rate)?;
            request.allowance_mut(id)?.rate = rate;
        }
        Command::SetAllowanceDays { id, days } => {
            validate_allowance_days(days)?;
            let entry: &mut AllowanceEntry = request.allowance_mut(id)?;
            let was_reportable: bool = entry.classification().is_reportable();
            entry.days = days;
            if !was_reportable && entry.classification().is_reportable() {
                advisories.push(Advisory::reportable_allowance(days));
            }
        }
        Command::SetRequireEmergencyContact { required } => {
            request.require_emergency_contact = required;
        }
        Command::UpdateEmergencyContact { update } => {
            let contact: &mut EmergencyContact = &mut request.emergency_contact;
            match update {
                EmergencyContactUpdate::Name(value) => contact.name = value,
                EmergencyContactUpdate::Phone(value) => contact.phone = value,
                EmergencyContactUpdate::Relationship(value) => contact.relationship = value,
            }
        }
        Command::SetDeclaration {
            declaration,
            accepted,
        } => request.declarations.set(declaration, accepted),
    }

    Ok(Recompute::NONE)
}

const fn ensure_allowance_available(request: &TravelRequest) -> Result<(), DomainError> {
    if request.personal_travel {
        return Err(DomainError::AllowanceUnavailableForPersonalTravel);
    }
    Ok(())
}

fn clear_allowances(request: &mut TravelRequest) {
    request.allowances.clear();
    request.require_allowance = false;
}

fn remove_item<T>(
    items: &mut Vec<T>,
    collection: &'static str,
    id: ItemId,
    id_of: impl Fn(&T) -> ItemId,
) -> Result<(), DomainError> {
    let index: usize = items
        .iter()
        .position(|item| id_of(item) == id)
        .ok_or(DomainError::ItemNotFound { collection, id })?;
    items.remove(index);
    Ok(())
}
