// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionResult, TravellerUpdate, apply};
use time::Date;
use time::macros::date;
use travel_portal_domain::{AccommodationType, Declaration, ItemId, RateTable, TravelRequest};

pub fn create_test_rates() -> RateTable {
    RateTable::standard()
}

/// Applies commands in order, panicking on the first rejection.
pub fn apply_all(state: &TravelRequest, commands: Vec<Command>) -> TravelRequest {
    let rates: RateTable = create_test_rates();
    let mut current: TravelRequest = state.clone();
    for command in commands {
        let result: TransitionResult = apply(&rates, &current, command).unwrap();
        current = result.new_state;
    }
    current
}

pub fn set_dates_commands(from: Date, to: Date) -> Vec<Command> {
    vec![
        Command::SetFromDate { date: Some(from) },
        Command::SetToDate { date: Some(to) },
    ]
}

/// A 22 night trip with accommodation required but no type chosen yet.
pub fn create_trip_with_accommodation() -> TravelRequest {
    let mut commands: Vec<Command> =
        set_dates_commands(date!(2024 - 01 - 01), date!(2024 - 01 - 23));
    commands.push(Command::SetAccommodationType {
        accommodation_type: None,
    });
    commands.push(Command::SetRequireAccommodation { required: true });
    apply_all(&TravelRequest::new(), commands)
}

/// Commands that make every step of a single traveller request valid.
pub fn complete_request_commands() -> Vec<Command> {
    let primary: ItemId = ItemId::new(1);
    let mut commands: Vec<Command> = vec![
        Command::UpdateTraveller {
            id: primary,
            update: TravellerUpdate::FullName(String::from("Jane Citizen")),
        },
        Command::UpdateTraveller {
            id: primary,
            update: TravellerUpdate::EmployeeId(String::from("E12345")),
        },
        Command::UpdateTraveller {
            id: primary,
            update: TravellerUpdate::CostCentre(String::from("CC-400")),
        },
        Command::SetPurpose {
            purpose: String::from("Regional site inspection"),
        },
        Command::SetTravelType {
            travel_type: String::from("intrastate"),
        },
        Command::SetDestination {
            destination: String::from("Broome"),
        },
    ];
    commands.extend(set_dates_commands(date!(2024 - 03 - 04), date!(2024 - 03 - 08)));
    commands.push(Command::SetRequireAccommodation { required: true });
    commands.push(Command::SetAccommodationType {
        accommodation_type: Some(AccommodationType::Private),
    });
    for declaration in Declaration::ALL {
        commands.push(Command::SetDeclaration {
            declaration,
            accepted: true,
        });
    }
    commands
}
