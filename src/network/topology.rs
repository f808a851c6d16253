// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for wiring households to plants and to each other.
//!
//! Every method validates its arguments before touching the graph, updates the
//! wire, and then hands over to the propagation engine to bring the cached
//! power state up to date.

use crate::{Error, HouseholdHandle, PlantHandle, PowerNetwork};

/// Topology mutations.
impl PowerNetwork {
    /// Wires the given household to the given plant.
    ///
    /// If the plant is alive, the household and every household reachable
    /// from it gain electricity.  Wiring an already wired pair is a no-op.
    pub fn connect_household_to_plant(
        &mut self,
        household: HouseholdHandle,
        plant: PlantHandle,
    ) -> Result<(), Error> {
        let h = self.household_index(household)?;
        let p = self.plant_index(plant)?;

        self.graph.update_edge(h, p, ());
        tracing::debug!(
            "Connected household {} to plant {}.",
            h.index(),
            p.index()
        );

        if self.graph[p].is_alive_plant() {
            self.gain_plant_source(h, p);
        }

        self.verify_if_configured()
    }

    /// Wires two households to each other.
    ///
    /// Household wires can't be removed.  If exactly one of the households
    /// has electricity, the other one and everything reachable from it gain
    /// electricity too.
    ///
    /// Wiring a household to itself is logged and ignored, or rejected with
    /// an `InvalidConnection` error if
    /// [`reject_self_connections`][crate::NetworkConfig::reject_self_connections]
    /// is set.
    pub fn connect_households(
        &mut self,
        household: HouseholdHandle,
        other: HouseholdHandle,
    ) -> Result<(), Error> {
        let a = self.household_index(household)?;
        let b = self.household_index(other)?;

        if a == b {
            if self.config.reject_self_connections {
                return Err(Error::invalid_connection(format!(
                    "Household {} can't be connected to itself.",
                    a.index()
                )));
            }
            tracing::warn!(
                "Ignoring connection of household {} to itself.",
                a.index()
            );
            return Ok(());
        }

        self.graph.update_edge(a, b, ());
        tracing::debug!(
            "Connected household {} to household {}.",
            a.index(),
            b.index()
        );

        self.merge_households(a, b);

        self.verify_if_configured()
    }

    /// Removes the wire between the given household and plant.
    ///
    /// If the plant was the last alive plant wired to the household, the power
    /// state of the household's whole component is recomputed.  Removing a
    /// wire that doesn't exist is a no-op.
    pub fn disconnect_household_from_plant(
        &mut self,
        household: HouseholdHandle,
        plant: PlantHandle,
    ) -> Result<(), Error> {
        let h = self.household_index(household)?;
        let p = self.plant_index(plant)?;

        let Some(edge) = self.graph.find_edge(h, p) else {
            tracing::warn!(
                "Household {} is not connected to plant {}.",
                h.index(),
                p.index()
            );
            return Ok(());
        };
        self.graph.remove_edge(edge);
        tracing::debug!(
            "Disconnected household {} from plant {}.",
            h.index(),
            p.index()
        );

        if self.drop_plant_source(h, p) {
            self.propagate_loss(h);
        }

        self.verify_if_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::test_utils::{verifying, NetworkBuilder};
    use crate::NetworkConfig;

    #[test]
    fn test_default_state() -> Result<(), Error> {
        let mut network = verifying();
        let household = network.create_household();
        assert!(!network.has_electricity(household)?);
        Ok(())
    }

    #[test]
    fn test_single_source() -> Result<(), Error> {
        let mut network = verifying();
        let household = network.create_household();
        let plant = network.create_plant();

        network.connect_household_to_plant(household, plant)?;
        assert!(network.has_electricity(household)?);

        network.disconnect_household_from_plant(household, plant)?;
        assert!(!network.has_electricity(household)?);
        assert_eq!(network.connected_plants(household)?.count(), 0);
        assert_eq!(network.connected_households(plant)?.count(), 0);

        Ok(())
    }

    #[test]
    fn test_symmetric_wires() -> Result<(), Error> {
        let mut network = verifying();
        let h1 = network.create_household();
        let h2 = network.create_household();
        let plant = network.create_plant();

        network.connect_household_to_plant(h1, plant)?;
        network.connect_household_to_plant(h1, plant)?;
        network.connect_households(h1, h2)?;
        network.connect_households(h2, h1)?;

        assert!(network.connected_plants(h1)?.eq([plant]));
        assert!(network.connected_households(plant)?.eq([h1]));
        assert!(network.household_neighbors(h1)?.eq([h2]));
        assert!(network.household_neighbors(h2)?.eq([h1]));

        Ok(())
    }

    #[test]
    fn test_disconnect_missing_wire() -> Result<(), Error> {
        let mut network = verifying();
        let h1 = network.create_household();
        let h2 = network.create_household();
        let plant = network.create_plant();

        network.connect_household_to_plant(h1, plant)?;
        network.disconnect_household_from_plant(h2, plant)?;

        assert!(network.has_electricity(h1)?);
        assert!(!network.has_electricity(h2)?);

        Ok(())
    }

    #[test]
    fn test_dead_plant_connection() -> Result<(), Error> {
        let mut network = verifying();
        let household = network.create_household();
        let plant = network.create_plant();

        assert!(!network.has_electricity(household)?);
        network.kill_plant(plant)?;
        network.connect_household_to_plant(household, plant)?;
        assert!(!network.has_electricity(household)?);

        network.repair_plant(plant)?;
        assert!(network.has_electricity(household)?);

        Ok(())
    }

    #[test]
    fn test_connect_households() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        let plant = builder.plant();
        let powered = builder.chain(3)?;
        let unpowered = builder.chain(3)?;
        let isolated = builder.chain(2)?;
        builder.wire(powered[0], plant)?;
        let mut network = builder.build();

        for h in &unpowered {
            assert!(!network.has_electricity(*h)?);
        }

        // Neither side has electricity.
        network.connect_households(unpowered[2], isolated[0])?;
        for h in unpowered.iter().chain(&isolated) {
            assert!(!network.has_electricity(*h)?);
        }

        // Exactly one side has electricity.
        network.connect_households(unpowered[1], powered[2])?;
        for h in powered.iter().chain(&unpowered).chain(&isolated) {
            assert!(network.has_electricity(*h)?);
        }

        // Both sides have electricity.
        network.connect_households(isolated[1], powered[0])?;
        assert_eq!(network.powered_households().count(), 8);

        Ok(())
    }

    #[test]
    fn test_self_connection() -> Result<(), Error> {
        let mut network = PowerNetwork::new();
        let household = network.create_household();
        let plant = network.create_plant();
        network.connect_households(household, household)?;
        assert_eq!(network.household_neighbors(household)?.count(), 0);
        assert!(!network.has_electricity(household)?);

        network.connect_household_to_plant(household, plant)?;
        network.connect_households(household, household)?;
        assert!(network.has_electricity(household)?);
        network.validate()?;

        let mut network = PowerNetwork::with_config(NetworkConfig {
            reject_self_connections: true,
            verify_consistency: true,
        });
        let household = network.create_household();
        assert_eq!(
            network.connect_households(household, household),
            Err(Error::invalid_connection(
                "Household 0 can't be connected to itself."
            ))
        );
        assert_eq!(network.household_neighbors(household)?.count(), 0);

        Ok(())
    }
}
