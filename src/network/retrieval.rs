// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for querying plants, households and their power state from a
//! [`PowerNetwork`].

use petgraph::graph::NodeIndex;

use crate::iterators::{ConnectedHouseholds, ConnectedPlants, Households, Plants};
use crate::{Error, HouseholdHandle, PlantHandle, PowerNetwork, PowerSource};

/// Plant and household retrieval.
impl PowerNetwork {
    /// Returns true if the given household currently has electricity.
    ///
    /// This reads cached state and never traverses the network.
    pub fn has_electricity(&self, household: HouseholdHandle) -> Result<bool, Error> {
        let index = self.household_index(household)?;
        Ok(self.graph[index].is_powered())
    }

    /// Returns true if the given plant is alive.
    pub fn is_alive(&self, plant: PlantHandle) -> Result<bool, Error> {
        let index = self.plant_index(plant)?;
        Ok(self.graph[index].is_alive_plant())
    }

    /// Returns the direct neighbors currently supplying the given household
    /// with electricity.  The list is empty iff the household has no
    /// electricity.
    pub fn powered_by(&self, household: HouseholdHandle) -> Result<Vec<PowerSource>, Error> {
        let index = self.household_index(household)?;
        let sources: Vec<PowerSource> = self.graph[index]
            .powered_by()
            .map(|sources| {
                sources
                    .iter()
                    .map(|&i| {
                        if self.graph[i].is_plant() {
                            PowerSource::Plant(self.plant_handle(i))
                        } else {
                            PowerSource::Household(self.household_handle(i))
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(sources)
    }

    /// Returns an iterator over the plants in the network.
    pub fn plants(&self) -> Plants<'_> {
        Plants {
            network: self,
            iter: self.graph.node_indices(),
        }
    }

    /// Returns an iterator over the households in the network.
    pub fn households(&self) -> Households<'_> {
        Households {
            network: self,
            iter: self.graph.node_indices(),
            powered_only: false,
        }
    }

    /// Returns an iterator over the households that currently have
    /// electricity.
    pub fn powered_households(&self) -> Households<'_> {
        Households {
            network: self,
            iter: self.graph.node_indices(),
            powered_only: true,
        }
    }

    /// Returns the number of plants in the network.
    pub fn plant_count(&self) -> usize {
        self.plants().count()
    }

    /// Returns the number of plants in the network that are alive.
    pub fn alive_plant_count(&self) -> usize {
        self.graph
            .node_weights()
            .filter(|site| site.is_alive_plant())
            .count()
    }

    /// Returns the number of households in the network.
    pub fn household_count(&self) -> usize {
        self.households().count()
    }

    /// Returns an iterator over the plants wired to the given household,
    /// whether they are alive or not.
    ///
    /// Returns an error if the household doesn't belong to this network.
    pub fn connected_plants(
        &self,
        household: HouseholdHandle,
    ) -> Result<ConnectedPlants<'_>, Error> {
        let index = self.household_index(household)?;
        Ok(ConnectedPlants {
            network: self,
            iter: self.graph.neighbors(index),
        })
    }

    /// Returns an iterator over the households wired to the given plant.
    ///
    /// Returns an error if the plant doesn't belong to this network.
    pub fn connected_households(
        &self,
        plant: PlantHandle,
    ) -> Result<ConnectedHouseholds<'_>, Error> {
        let index = self.plant_index(plant)?;
        Ok(ConnectedHouseholds {
            network: self,
            iter: self.graph.neighbors(index),
        })
    }

    /// Returns an iterator over the households wired to the given household.
    ///
    /// Returns an error if the household doesn't belong to this network.
    pub fn household_neighbors(
        &self,
        household: HouseholdHandle,
    ) -> Result<ConnectedHouseholds<'_>, Error> {
        let index = self.household_index(household)?;
        Ok(ConnectedHouseholds {
            network: self,
            iter: self.graph.neighbors(index),
        })
    }

    pub(crate) fn alive_plants_of(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .neighbors(index)
            .filter(|&i| self.graph[i].is_alive_plant())
    }

    pub(crate) fn household_neighbors_of(
        &self,
        index: NodeIndex,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .neighbors(index)
            .filter(|&i| self.graph[i].is_household())
    }

    pub(crate) fn has_alive_plant(&self, index: NodeIndex) -> bool {
        self.alive_plants_of(index).next().is_some()
    }

    pub(crate) fn is_powered(&self, index: NodeIndex) -> bool {
        self.graph[index].is_powered()
    }
}
