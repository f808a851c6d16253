// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The power propagation engine, which keeps the cached power state of every
//! household up to date as plants die and come back, and as wires are added
//! and removed.
//!
//! A household's cache holds the alive plants wired to it and, if its
//! component has electricity, all its household neighbors.  The cache is
//! empty iff the household has no electricity.
//!
//! Household wires are never removed, so a component only ever grows.  When a
//! household loses its last alive plant, its whole component is cleared and
//! then flooded again from any member that is still wired to an alive plant.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::NodeIndex;

use crate::{Error, PlantHandle, PowerNetwork};

/// Plant state transitions.
impl PowerNetwork {
    /// Marks the given plant as dead.  Killing a dead plant is a no-op.
    ///
    /// Households that depended on the plant, directly or through other
    /// households, lose electricity unless they can still reach another alive
    /// plant.
    pub fn kill_plant(&mut self, plant: PlantHandle) -> Result<(), Error> {
        let p = self.plant_index(plant)?;
        if !self.graph[p].is_alive_plant() {
            tracing::debug!("Plant {} is already dead.", p.index());
            return Ok(());
        }

        self.graph[p].set_alive(false);
        tracing::debug!("Killed plant {}.", p.index());

        if self.alive_plant_count() == 0 {
            self.blackout();
            return self.verify_if_configured();
        }

        let households = self.graph.neighbors(p).collect::<Vec<_>>();
        let mut recomputed = HashSet::new();
        for h in households {
            if recomputed.contains(&h) {
                continue;
            }
            if self.drop_plant_source(h, p) {
                recomputed.extend(self.propagate_loss(h));
            }
        }

        self.verify_if_configured()
    }

    /// Marks the given plant as alive.  Repairing an alive plant is a no-op.
    ///
    /// Every household wired to the plant, and every household reachable from
    /// those, gains electricity.
    pub fn repair_plant(&mut self, plant: PlantHandle) -> Result<(), Error> {
        let p = self.plant_index(plant)?;
        if self.graph[p].is_alive_plant() {
            tracing::debug!("Plant {} is already alive.", p.index());
            return Ok(());
        }

        self.graph[p].set_alive(true);
        tracing::debug!("Repaired plant {}.", p.index());

        let households = self.graph.neighbors(p).collect::<Vec<_>>();
        for h in households {
            self.gain_plant_source(h, p);
        }

        self.verify_if_configured()
    }
}

/// Propagation internals.
impl PowerNetwork {
    /// Registers the alive plant `p` as a power source of household `h`,
    /// flooding `h`'s component if `h` had no electricity before.
    pub(crate) fn gain_plant_source(&mut self, h: NodeIndex, p: NodeIndex) {
        if !self.is_powered(h) {
            self.propagate_gain(h);
        }
        if let Some(sources) = self.graph[h].powered_by_mut() {
            sources.insert(p);
        }
    }

    /// Brings the caches of two freshly wired households up to date.
    pub(crate) fn merge_households(&mut self, a: NodeIndex, b: NodeIndex) {
        match (self.is_powered(a), self.is_powered(b)) {
            (true, true) => {
                for (from, to) in [(a, b), (b, a)] {
                    if let Some(sources) = self.graph[from].powered_by_mut() {
                        sources.insert(to);
                    }
                }
            }
            (true, false) => {
                self.propagate_gain(b);
            }
            (false, true) => {
                self.propagate_gain(a);
            }
            (false, false) => {}
        }
    }

    /// Removes plant `p` from the cache of household `h`.
    ///
    /// Returns true if `h` has no alive plant left and is wired to other
    /// households, in which case the caller must run loss propagation from
    /// `h`.
    pub(crate) fn drop_plant_source(&mut self, h: NodeIndex, p: NodeIndex) -> bool {
        if let Some(sources) = self.graph[h].powered_by_mut() {
            sources.remove(&p);
        }
        if self.has_alive_plant(h) {
            return false;
        }
        if self.household_neighbors_of(h).next().is_some() {
            return true;
        }
        if let Some(sources) = self.graph[h].powered_by_mut() {
            sources.clear();
        }
        false
    }

    /// Floods electricity from household `start` to every household reachable
    /// from it.
    ///
    /// Must only be called when `start`'s component can reach an alive plant.
    /// Running it on a component that already has electricity is a no-op.
    pub(crate) fn propagate_gain(&mut self, start: NodeIndex) {
        let mut visited = HashSet::from([start]);
        let mut frontier = VecDeque::from([start]);

        while let Some(index) = frontier.pop_front() {
            let neighbors = self.household_neighbors_of(index).collect::<Vec<_>>();
            let sources = self
                .alive_plants_of(index)
                .chain(neighbors.iter().copied())
                .collect::<HashSet<_>>();
            tracing::trace!(
                "Household {} is powered by {} sources.",
                index.index(),
                sources.len()
            );
            if let Some(cache) = self.graph[index].powered_by_mut() {
                *cache = sources;
            }

            for neighbor in neighbors {
                if visited.insert(neighbor) {
                    frontier.push_back(neighbor);
                }
            }
        }

        tracing::debug!(
            "Flooded electricity from household {} to {} households.",
            start.index(),
            visited.len()
        );
    }

    /// Clears the component of household `start`, and floods it again from
    /// any member that is still wired to an alive plant.
    ///
    /// Returns the households of the component.
    pub(crate) fn propagate_loss(&mut self, start: NodeIndex) -> Vec<NodeIndex> {
        let component = self.component_indices(start);
        for &index in &component {
            if let Some(sources) = self.graph[index].powered_by_mut() {
                sources.clear();
            }
        }

        let seed = component.iter().copied().find(|&i| self.has_alive_plant(i));
        match seed {
            Some(seed) => {
                tracing::debug!(
                    "Household {} lost its plants, household {} still has one.",
                    start.index(),
                    seed.index()
                );
                self.propagate_gain(seed);
            }
            None => {
                tracing::debug!(
                    "Household {} lost its plants, {} households without electricity.",
                    start.index(),
                    component.len()
                );
            }
        }

        component
    }

    /// Clears the cache of every household.
    fn blackout(&mut self) {
        tracing::debug!("No alive plants left, all households lose electricity.");
        for site in self.graph.node_weights_mut() {
            if let Some(sources) = site.powered_by_mut() {
                sources.clear();
            }
        }
    }
}
