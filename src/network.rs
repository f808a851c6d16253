// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the plants and households of an electrical
//! distribution network, and the wires between them.

mod creation;
mod propagation;
mod retrieval;
mod topology;
mod traversal;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

use crate::{site::Site, NetworkConfig};
use petgraph::graph::UnGraph;

/// Plants and households are the nodes of an undirected graph, and every
/// wire is an edge.  Nodes are never removed, so their `NodeIndex`es stay
/// stable for the lifetime of the network.
pub(crate) type SiteGraph = UnGraph<Site, ()>;

/// An electrical distribution network of plants and households, that keeps
/// track of which households currently have electricity.
#[derive(Debug)]
pub struct PowerNetwork {
    graph: SiteGraph,
    network_id: u64,
    config: NetworkConfig,
}
