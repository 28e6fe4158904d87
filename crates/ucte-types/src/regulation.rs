//! UCTE transformer regulation types.
//!
//! This module provides `TransformerRegulation` (the `##R` block, one line per
//! regulated transformer) and `TransformerSpecParam` (the `##TT` block, one
//! line per tap position of a special transformer).

use crate::RegulationType;

/// Phase (voltage ratio) regulation block of a `##R` line.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseRegulation {
    /// Voltage change per tap δu (%).
    pub delta: Option<f64>,
    /// Number of taps n, counted from neutral to one ultimate position
    /// (a +13/neutral/-13 changer has n = 13).
    pub taps: Option<i32>,
    /// Current tap position n'.
    pub tap_position: Option<i32>,
    /// On load tap changer voltage target for node 2 (kV).
    pub voltage: Option<f64>,
}

/// Angle regulation block of a `##R` line.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleRegulation {
    /// Voltage change per tap δu (%).
    pub delta: Option<f64>,
    /// Number of taps n.
    pub taps: Option<i32>,
    /// Current tap position n'.
    pub tap_position: Option<i32>,
    /// Angle Θ (°).
    pub angle: Option<f64>,
    /// On load tap changer active power flow target (MW).
    pub active_power: Option<f64>,
    /// Regulation type code, `ASYM`, `SYMM` or blank.
    pub regulation_type: Option<String>,
}

impl AngleRegulation {
    /// Returns the regulation type, if the code is recognized.
    pub fn kind(&self) -> Option<RegulationType> {
        self.regulation_type
            .as_deref()
            .and_then(RegulationType::from_code)
    }
}

/// Regulation parameters of a transformer from the `##R` block.
///
/// # Examples
///
/// ```
/// use ucte_types::{AngleRegulation, RegulationType, TransformerRegulation};
///
/// let regulation = TransformerRegulation {
///     angle: AngleRegulation {
///         regulation_type: Some("SYMM".to_string()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// assert_eq!(regulation.angle.kind(), Some(RegulationType::Symmetrical));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformerRegulation {
    /// Code of the first node.
    pub node1: Option<String>,
    /// Code of the second node.
    pub node2: Option<String>,
    /// Order code of the regulated transformer.
    pub order_code: Option<char>,
    /// Phase regulation parameters.
    pub phase: PhaseRegulation,
    /// Angle regulation parameters.
    pub angle: AngleRegulation,
}

/// One tap position of a special transformer from the `##TT` block.
///
/// Impedances pertain to the rated voltage of the non-regulated winding 1.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformerSpecParam {
    /// Code of the first node.
    pub node1: Option<String>,
    /// Code of the second node.
    pub node2: Option<String>,
    /// Order code of the transformer.
    pub order_code: Option<char>,
    /// Tap position n'.
    pub tap_position: Option<i32>,
    /// Resistance R at tap n' (Ω).
    pub resistance: Option<f64>,
    /// Reactance X at tap n' (Ω).
    pub reactance: Option<f64>,
    /// Voltage change δu at tap n' (%).
    pub delta: Option<f64>,
    /// Phase shift angle α at tap n' (°), 0 for phase regulation.
    pub angle: Option<f64>,
}
