// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `Site` enum, which is the node weight stored in the
//! network graph for every plant and household.

use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use std::fmt::Display;

/// A node of the power network.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Site {
    /// A power source, that is either alive or dead.
    Plant { alive: bool },
    /// A consumer, along with the cached set of direct neighbors that
    /// currently supply it with electricity.
    Household { powered_by: HashSet<NodeIndex> },
}

impl Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Site::Plant { .. } => write!(f, "Plant"),
            Site::Household { .. } => write!(f, "Household"),
        }
    }
}

impl Site {
    /// Returns a new plant, which is alive.
    pub(crate) fn plant() -> Self {
        Site::Plant { alive: true }
    }

    /// Returns a new household, which has no electricity.
    pub(crate) fn household() -> Self {
        Site::Household {
            powered_by: HashSet::new(),
        }
    }

    pub(crate) fn is_plant(&self) -> bool {
        matches!(self, Site::Plant { .. })
    }

    pub(crate) fn is_household(&self) -> bool {
        matches!(self, Site::Household { .. })
    }

    pub(crate) fn is_alive_plant(&self) -> bool {
        matches!(self, Site::Plant { alive: true })
    }

    /// Returns true if the site is a household with at least one power
    /// source.
    pub(crate) fn is_powered(&self) -> bool {
        self.powered_by().is_some_and(|sources| !sources.is_empty())
    }

    pub(crate) fn powered_by(&self) -> Option<&HashSet<NodeIndex>> {
        match self {
            Site::Household { powered_by } => Some(powered_by),
            Site::Plant { .. } => None,
        }
    }

    pub(crate) fn powered_by_mut(&mut self) -> Option<&mut HashSet<NodeIndex>> {
        match self {
            Site::Household { powered_by } => Some(powered_by),
            Site::Plant { .. } => None,
        }
    }

    /// Updates the state of a plant.  Has no effect on households.
    pub(crate) fn set_alive(&mut self, value: bool) {
        if let Site::Plant { alive } = self {
            *alive = value;
        }
    }
}
