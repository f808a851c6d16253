// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Handles that callers use to address the plants and households of a
//! [`PowerNetwork`][crate::PowerNetwork].
//!
//! A handle remembers which network created it, so that passing it to a
//! different network is detected and rejected with an `InvalidEntity` error.

use petgraph::graph::NodeIndex;

/// A macro for defining a handle type, along with its constructor, accessors
/// and `Display` implementation.
macro_rules! Handle {
    ($name:ident, $label:literal) => {
        #[doc = concat!("A handle to a ", $label, " in a `PowerNetwork`.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            pub(crate) network_id: u64,
            pub(crate) index: NodeIndex,
        }

        impl $name {
            pub(crate) fn new(network_id: u64, index: NodeIndex) -> Self {
                Self { network_id, index }
            }

            #[doc = concat!(
                "Returns the id of the ", $label, ", which is unique and stable ",
                "within its network."
            )]
            pub fn id(&self) -> u64 {
                self.index.index() as u64
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.id())
            }
        }
    };
}

Handle!(PlantHandle, "plant");
Handle!(HouseholdHandle, "household");

/// A direct neighbor that supplies a household with electricity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerSource {
    Plant(PlantHandle),
    Household(HouseholdHandle),
}

impl std::fmt::Display for PowerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerSource::Plant(plant) => write!(f, "{plant}"),
            PowerSource::Household(household) => write!(f, "{household}"),
        }
    }
}
