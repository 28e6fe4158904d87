//! UCTE line type.
//!
//! This module provides the `Line` struct representing one AC branch from the
//! `##L` block.

use crate::BranchStatus;

/// An AC line from the `##L` block.
///
/// # Examples
///
/// ```
/// use ucte_types::{BranchStatus, Line};
///
/// let line = Line {
///     node1: Some("HERNES1 ".to_string()),
///     node2: Some("XER_PE11".to_string()),
///     order_code: Some('1'),
///     status: Some(8),
///     reactance: Some(13.47),
///     ..Default::default()
/// };
///
/// assert_eq!(line.branch_status(), Some(BranchStatus::RealOutOfOperation));
/// assert!(!line.is_in_operation());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Code of the first node.
    pub node1: Option<String>,
    /// Code of the second node.
    pub node2: Option<String>,
    /// Order code distinguishing parallel branches.
    pub order_code: Option<char>,
    /// Status code, one of 0, 1, 2, 7, 8, 9.
    pub status: Option<u8>,
    /// Resistance R (Ω).
    pub resistance: Option<f64>,
    /// Reactance X (Ω).
    pub reactance: Option<f64>,
    /// Susceptance B (µS).
    pub susceptance: Option<f64>,
    /// Current limit I (A).
    pub current_limit: Option<i32>,
    /// Element name (trailing blanks kept).
    pub element_name: Option<String>,
}

impl Line {
    /// Returns the status enum value, if the code is recognized.
    pub fn branch_status(&self) -> Option<BranchStatus> {
        self.status.and_then(BranchStatus::from_code)
    }

    /// Returns true if the status code says the line is in operation.
    pub fn is_in_operation(&self) -> bool {
        self.branch_status().is_some_and(BranchStatus::is_in_operation)
    }

    /// Returns true if the line is a busbar coupler.
    pub fn is_busbar_coupler(&self) -> bool {
        self.branch_status()
            .is_some_and(BranchStatus::is_busbar_coupler)
    }
}
