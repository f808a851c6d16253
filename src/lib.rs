// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Power Network

This is a library for modelling an electrical distribution network of power
plants and households, connected by wires, and for answering at any time
whether a given household has electricity.

A household has electricity if it is wired to an alive plant, or if it is
wired, directly or through other households, to a household that is.

## The `PowerNetwork`

The main struct is [`PowerNetwork`].  Plants and households are created with
[`create_plant`][PowerNetwork::create_plant] and
[`create_household`][PowerNetwork::create_household], which return
[`PlantHandle`]s and [`HouseholdHandle`]s.  A handle can only be used with the
network that created it; passing it to any other network fails with an
[`ErrorKind::InvalidEntity`] error.

The network is mutated with:

- [`connect_household_to_plant`][PowerNetwork::connect_household_to_plant]
- [`connect_households`][PowerNetwork::connect_households]
- [`disconnect_household_from_plant`][PowerNetwork::disconnect_household_from_plant]
- [`kill_plant`][PowerNetwork::kill_plant]
- [`repair_plant`][PowerNetwork::repair_plant]

Wires between households can't be removed.

## Incremental power state

Every mutation updates the power state of the affected households right away,
so that [`has_electricity`][PowerNetwork::has_electricity] is a constant time
lookup that never traverses the network.

The cached state can be checked against a full reachability scan with
[`validate`][PowerNetwork::validate], or after every mutation by enabling
[`NetworkConfig::verify_consistency`].
*/

mod config;
pub use config::NetworkConfig;

mod handle;
pub use handle::{HouseholdHandle, PlantHandle, PowerSource};

mod network;
pub use network::{iterators, PowerNetwork};

mod site;

mod error;
pub use error::{Error, ErrorKind};
