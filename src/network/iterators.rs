// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over the plants and households in a `PowerNetwork`.

use petgraph::graph::{Neighbors, NodeIndices};

use crate::{HouseholdHandle, PlantHandle, PowerNetwork};

/// An iterator over the plants in a `PowerNetwork`, in creation order.
pub struct Plants<'a> {
    pub(crate) network: &'a PowerNetwork,
    pub(crate) iter: NodeIndices,
}

impl Iterator for Plants<'_> {
    type Item = PlantHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let network = self.network;
        self.iter
            .by_ref()
            .find(|&i| network.graph[i].is_plant())
            .map(|i| network.plant_handle(i))
    }
}

/// An iterator over the households in a `PowerNetwork`, in creation order.
pub struct Households<'a> {
    pub(crate) network: &'a PowerNetwork,
    pub(crate) iter: NodeIndices,
    /// Skip households that have no electricity.
    pub(crate) powered_only: bool,
}

impl Iterator for Households<'_> {
    type Item = HouseholdHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let network = self.network;
        let powered_only = self.powered_only;
        self.iter
            .by_ref()
            .find(|&i| {
                let site = &network.graph[i];
                site.is_household() && (!powered_only || site.is_powered())
            })
            .map(|i| network.household_handle(i))
    }
}

/// An iterator over the plants wired to a household.
pub struct ConnectedPlants<'a> {
    pub(crate) network: &'a PowerNetwork,
    pub(crate) iter: Neighbors<'a, ()>,
}

impl Iterator for ConnectedPlants<'_> {
    type Item = PlantHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let network = self.network;
        self.iter
            .by_ref()
            .find(|&i| network.graph[i].is_plant())
            .map(|i| network.plant_handle(i))
    }
}

/// An iterator over the households wired to a plant or to another household.
pub struct ConnectedHouseholds<'a> {
    pub(crate) network: &'a PowerNetwork,
    pub(crate) iter: Neighbors<'a, ()>,
}

impl Iterator for ConnectedHouseholds<'_> {
    type Item = HouseholdHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let network = self.network;
        self.iter
            .by_ref()
            .find(|&i| network.graph[i].is_household())
            .map(|i| network.household_handle(i))
    }
}
