// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `network` module.
//!
//! - the `verifying` constructor, which returns a network that checks its
//!   power state against a full scan after every mutation.
//! - the `NetworkBuilder`, which can declaratively build chains, rings and
//!   other household configurations for use in tests.

use crate::{Error, HouseholdHandle, NetworkConfig, PlantHandle, PowerNetwork};

/// Returns an empty network that validates itself after every mutation.
pub(super) fn verifying() -> PowerNetwork {
    PowerNetwork::with_config(NetworkConfig {
        verify_consistency: true,
        ..Default::default()
    })
}

/// A builder for creating complex network configurations easily, for use in
/// tests.
pub(super) struct NetworkBuilder {
    network: PowerNetwork,
}

impl NetworkBuilder {
    /// Creates a new `NetworkBuilder`, wrapping a verifying network.
    pub(super) fn new() -> Self {
        NetworkBuilder {
            network: verifying(),
        }
    }

    /// Adds a plant to the network and returns its handle.
    pub(super) fn plant(&mut self) -> PlantHandle {
        self.network.create_plant()
    }

    /// Adds a household to the network and returns its handle.
    pub(super) fn household(&mut self) -> HouseholdHandle {
        self.network.create_household()
    }

    /// Wires a household to a plant.
    pub(super) fn wire(
        &mut self,
        household: HouseholdHandle,
        plant: PlantHandle,
    ) -> Result<&mut Self, Error> {
        self.network.connect_household_to_plant(household, plant)?;
        Ok(self)
    }

    /// Wires two households to each other.
    pub(super) fn link(
        &mut self,
        household: HouseholdHandle,
        other: HouseholdHandle,
    ) -> Result<&mut Self, Error> {
        self.network.connect_households(household, other)?;
        Ok(self)
    }

    /// Adds the given number of households, each wired to the next one, and
    /// returns their handles.
    pub(super) fn chain(&mut self, length: usize) -> Result<Vec<HouseholdHandle>, Error> {
        let households = (0..length).map(|_| self.household()).collect::<Vec<_>>();
        for pair in households.windows(2) {
            self.link(pair[0], pair[1])?;
        }
        Ok(households)
    }

    /// Adds a chain of households whose last household is also wired to the
    /// first one, and returns their handles.
    pub(super) fn ring(&mut self, length: usize) -> Result<Vec<HouseholdHandle>, Error> {
        let households = self.chain(length)?;
        if let (Some(&first), Some(&last)) = (households.first(), households.last()) {
            if length > 2 {
                self.link(last, first)?;
            }
        }
        Ok(households)
    }

    /// Returns the network built so far.
    pub(super) fn build(self) -> PowerNetwork {
        self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let ring = builder.ring(4)?;
        let chain = builder.chain(2)?;
        let plant = builder.plant();
        builder.wire(chain[1], plant)?;
        let network = builder.build();

        assert!(network.config().verify_consistency);
        assert_eq!(network.household_count(), 6);
        for h in &ring {
            assert_eq!(network.household_neighbors(*h)?.count(), 2);
            assert!(!network.has_electricity(*h)?);
        }
        assert!(network.powered_households().eq(chain));

        Ok(())
    }
}
