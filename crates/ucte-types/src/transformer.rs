//! UCTE transformer type.

use crate::BranchStatus;

/// A two-winding transformer from the `##T` block.
///
/// Impedances pertain to the rated voltage of the non-regulated winding 1.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformer {
    /// Code of the first node (non-regulated winding).
    pub node1: Option<String>,
    /// Code of the second node (regulated winding).
    pub node2: Option<String>,
    /// Order code distinguishing parallel branches.
    pub order_code: Option<char>,
    /// Status code, one of 0, 1, 8, 9.
    pub status: Option<u8>,
    /// Rated voltage of winding 1 (kV).
    pub rated_voltage1: Option<f64>,
    /// Rated voltage of winding 2 (kV).
    pub rated_voltage2: Option<f64>,
    /// Nominal power (MVA).
    pub nominal_power: Option<f64>,
    /// Resistance R (Ω).
    pub resistance: Option<f64>,
    /// Reactance X (Ω).
    pub reactance: Option<f64>,
    /// Susceptance B (µS).
    pub susceptance: Option<f64>,
    /// Conductance G (µS).
    pub conductance: Option<f64>,
    /// Current limit I (A).
    pub current_limit: Option<i32>,
    /// Element name (trailing blanks kept).
    pub element_name: Option<String>,
}

impl Transformer {
    /// Returns the status enum value, if the code is recognized.
    pub fn branch_status(&self) -> Option<BranchStatus> {
        self.status.and_then(BranchStatus::from_code)
    }

    /// Returns true if the status code says the transformer is in operation.
    pub fn is_in_operation(&self) -> bool {
        self.branch_status().is_some_and(BranchStatus::is_in_operation)
    }

    /// Returns the rated voltage ratio V1/V2, when both are known and V2 is nonzero.
    pub fn rated_ratio(&self) -> Option<f64> {
        match (self.rated_voltage1, self.rated_voltage2) {
            (Some(v1), Some(v2)) if v2 != 0.0 => Some(v1 / v2),
            _ => None,
        }
    }
}
