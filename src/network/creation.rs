// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`PowerNetwork`] instances and the plants and
//! households in them, and for resolving handles back to graph nodes.

use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::graph::NodeIndex;

use crate::{site::Site, Error, HouseholdHandle, NetworkConfig, PlantHandle, PowerNetwork};

use super::SiteGraph;

/// Source of the ids that tie handles to the network that created them.
static NEXT_NETWORK_ID: AtomicU64 = AtomicU64::new(1);

impl Default for PowerNetwork {
    fn default() -> Self {
        Self::new()
    }
}

/// `PowerNetwork` instantiation.
impl PowerNetwork {
    /// Creates an empty [`PowerNetwork`] with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    /// Creates an empty [`PowerNetwork`] with the given configuration.
    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            graph: SiteGraph::new_undirected(),
            network_id: NEXT_NETWORK_ID.fetch_add(1, Ordering::Relaxed),
            config,
        }
    }

    /// Returns the configuration of the network.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Adds a new plant to the network, which is alive and not connected to
    /// any household.
    pub fn create_plant(&mut self) -> PlantHandle {
        let index = self.graph.add_node(Site::plant());
        tracing::debug!("Created plant {}.", index.index());
        PlantHandle::new(self.network_id, index)
    }

    /// Adds a new household to the network, which has no connections and no
    /// electricity.
    pub fn create_household(&mut self) -> HouseholdHandle {
        let index = self.graph.add_node(Site::household());
        tracing::debug!("Created household {}.", index.index());
        HouseholdHandle::new(self.network_id, index)
    }

    /// Returns the graph index of the given plant.
    ///
    /// Returns an error if the plant doesn't belong to this network.
    pub(crate) fn plant_index(&self, plant: PlantHandle) -> Result<NodeIndex, Error> {
        self.resolve(plant.network_id, plant.index, Site::is_plant, "Plant")
    }

    /// Returns the graph index of the given household.
    ///
    /// Returns an error if the household doesn't belong to this network.
    pub(crate) fn household_index(&self, household: HouseholdHandle) -> Result<NodeIndex, Error> {
        self.resolve(
            household.network_id,
            household.index,
            Site::is_household,
            "Household",
        )
    }

    fn resolve(
        &self,
        network_id: u64,
        index: NodeIndex,
        is_expected_kind: fn(&Site) -> bool,
        kind: &str,
    ) -> Result<NodeIndex, Error> {
        if network_id != self.network_id {
            return Err(Error::invalid_entity(format!(
                "{kind} {} does not belong to this network.",
                index.index()
            )));
        }
        match self.graph.node_weight(index) {
            Some(site) if is_expected_kind(site) => Ok(index),
            Some(site) => Err(Error::invalid_entity(format!(
                "{kind} {} is a {site} in this network.",
                index.index()
            ))),
            None => Err(Error::invalid_entity(format!(
                "{kind} {} not found.",
                index.index()
            ))),
        }
    }

    /// Returns the handle of the plant at the given graph index.
    pub(crate) fn plant_handle(&self, index: NodeIndex) -> PlantHandle {
        PlantHandle::new(self.network_id, index)
    }

    /// Returns the handle of the household at the given graph index.
    pub(crate) fn household_handle(&self, index: NodeIndex) -> HouseholdHandle {
        HouseholdHandle::new(self.network_id, index)
    }
}
