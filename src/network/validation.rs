// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating a [`PowerNetwork`] against a full reachability scan.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use crate::{Error, PowerNetwork};

impl PowerNetwork {
    /// Checks the wires and the cached power state of every household.
    ///
    /// Households with electricity are recomputed from scratch, by searching
    /// outwards from every household that is wired to an alive plant, and
    /// compared against the cache.  Returns an `Internal` error that lists the
    /// inconsistent households, if there are any.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_wires()?;
        self.validate_power_state()
    }

    /// Runs [`validate`][PowerNetwork::validate] if the network was configured
    /// to verify every mutation.
    pub(crate) fn verify_if_configured(&self) -> Result<(), Error> {
        if self.config.verify_consistency {
            self.validate()
        } else {
            Ok(())
        }
    }

    /// Validates that every wire has a household on at least one end, and
    /// that no household is wired to itself.
    fn validate_wires(&self) -> Result<(), Error> {
        for edge in self.graph.raw_edges() {
            let (a, b) = (edge.source(), edge.target());
            if a == b {
                return Err(Error::internal(format!(
                    "Site {} is wired to itself.",
                    a.index()
                )));
            }
            if self.graph[a].is_plant() && self.graph[b].is_plant() {
                return Err(Error::internal(format!(
                    "Plants {} and {} are wired to each other.",
                    a.index(),
                    b.index()
                )));
            }
        }
        Ok(())
    }

    fn validate_power_state(&self) -> Result<(), Error> {
        let powered = self.reachable_from_alive_plants();

        let inconsistent = self
            .graph
            .node_indices()
            .filter(|&i| {
                let Some(cached) = self.graph[i].powered_by() else {
                    return false;
                };
                let expected = if powered.contains(&i) {
                    self.alive_plants_of(i)
                        .chain(self.household_neighbors_of(i))
                        .collect::<HashSet<_>>()
                } else {
                    HashSet::new()
                };
                *cached != expected
            })
            .map(|i| i.index())
            .collect::<Vec<_>>();

        if !inconsistent.is_empty() {
            return Err(Error::internal(format!(
                "Households {:?} have an inconsistent power state.",
                inconsistent
            )));
        }

        Ok(())
    }

    /// Multi-source search over household wires, seeded with every household
    /// that is wired to an alive plant.
    fn reachable_from_alive_plants(&self) -> HashSet<NodeIndex> {
        let mut stack = self
            .graph
            .node_indices()
            .filter(|&i| self.graph[i].is_household() && self.has_alive_plant(i))
            .collect::<Vec<_>>();
        let mut visited = stack.iter().copied().collect::<HashSet<_>>();

        while let Some(index) = stack.pop() {
            for neighbor in self.household_neighbors_of(index) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        visited
    }
}
