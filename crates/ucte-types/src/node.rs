//! UCTE node type.
//!
//! This module provides the `Node` struct representing one line of a
//! `##Z` (country or cross-border) node block.

use crate::{Country, NodeStatus, NodeType, PowerPlantType};

/// An electrical node from a `##Z` block.
///
/// Every field is optional: a field that is blank, malformed, or beyond the
/// end of a truncated line is `None`. `None` means "absent or unparseable",
/// never zero.
///
/// # Examples
///
/// ```
/// use ucte_types::{Node, NodeType};
///
/// let node = Node {
///     code: Some("HSENJ 2 ".to_string()),
///     type_code: Some(2),
///     voltage: Some(246.7),
///     ..Default::default()
/// };
///
/// assert_eq!(node.node_type(), Some(NodeType::PU));
/// assert_eq!(node.country().unwrap().iso_code, "HR");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Node code (8 characters, trailing blanks kept).
    pub code: Option<String>,
    /// Geographical name (trailing blanks kept).
    pub geographical_name: Option<String>,
    /// Status code: 0 real, 1 equivalent.
    pub status: Option<u8>,
    /// Node type code: 0 PQ, 1 Qθ, 2 PU, 3 slack.
    pub type_code: Option<u8>,
    /// Reference voltage (kV).
    pub voltage: Option<f64>,
    /// Active load (MW).
    pub active_load: Option<f64>,
    /// Reactive load (MVar).
    pub reactive_load: Option<f64>,
    /// Active power generation (MW).
    pub active_generation: Option<f64>,
    /// Reactive power generation (MVar).
    pub reactive_generation: Option<f64>,
    /// Minimum permissible generation (MW).
    pub min_generation_mw: Option<f64>,
    /// Maximum permissible generation (MW).
    pub max_generation_mw: Option<f64>,
    /// Minimum permissible generation (MVar).
    pub min_generation_mvar: Option<f64>,
    /// Maximum permissible generation (MVar).
    pub max_generation_mvar: Option<f64>,
    /// Static of primary control (%).
    pub primary_control_static: Option<f64>,
    /// Nominal power for primary control (MW).
    pub primary_control_power: Option<f64>,
    /// Three phase short circuit power (MVA).
    pub short_circuit_power: Option<f64>,
    /// X/R ratio.
    pub x_r_ratio: Option<f64>,
    /// Power plant type letter.
    pub power_plant_type: Option<char>,
}

impl Node {
    /// Returns the status enum value, if the code is recognized.
    pub fn node_status(&self) -> Option<NodeStatus> {
        self.status.and_then(NodeStatus::from_code)
    }

    /// Returns the node type enum value, if the code is recognized.
    pub fn node_type(&self) -> Option<NodeType> {
        self.type_code.and_then(NodeType::from_code)
    }

    /// Returns the power plant type, if the letter is recognized.
    pub fn plant_type(&self) -> Option<PowerPlantType> {
        self.power_plant_type.and_then(PowerPlantType::from_code)
    }

    /// Returns true if this is the global slack node.
    pub fn is_slack(&self) -> bool {
        self.node_type().is_some_and(NodeType::is_slack)
    }

    /// Returns true for cross-border X-nodes.
    pub fn is_border_node(&self) -> bool {
        self.code.as_deref().is_some_and(|c| c.starts_with('X'))
    }

    /// Returns the country the node code belongs to, from its first character.
    pub fn country(&self) -> Option<&'static Country> {
        let prefix = self.code.as_deref()?.chars().next()?;
        Country::by_node_prefix(prefix)
    }
}
