// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains methods that help with graph traversal.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::NodeIndex;

use crate::{Error, HouseholdHandle, PowerNetwork};

/// Traversal methods.
impl PowerNetwork {
    /// Returns the households that can be reached from the given household
    /// through household wires, starting with the given household itself.
    ///
    /// Returns an error if the household doesn't belong to this network.
    pub fn component_of(&self, household: HouseholdHandle) -> Result<Vec<HouseholdHandle>, Error> {
        let index = self.household_index(household)?;
        Ok(self
            .component_indices(index)
            .into_iter()
            .map(|i| self.household_handle(i))
            .collect())
    }

    /// Breadth-first search over household wires, in visiting order.
    pub(crate) fn component_indices(&self, start: NodeIndex) -> Vec<NodeIndex> {
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut found = vec![];

        while let Some(index) = queue.pop_front() {
            found.push(index);
            for neighbor in self.household_neighbors_of(index) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        found
    }
}
