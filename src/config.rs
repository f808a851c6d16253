// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `PowerNetwork`.

/// Configuration options for the `PowerNetwork`.
#[derive(Clone, Default, Debug)]
pub struct NetworkConfig {
    /// Whether connecting a household to itself is an error.  When this is
    /// `true`, such connections are rejected with an `InvalidConnection`
    /// error, otherwise they are logged and ignored.
    pub reject_self_connections: bool,

    /// Whether to check the cached power state of every household against a
    /// full reachability scan after each mutating operation.  This is
    /// expensive and meant for tests and debugging.
    pub verify_consistency: bool,
}
