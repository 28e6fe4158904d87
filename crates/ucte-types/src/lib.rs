//! # ucte-types
//!
//! Type definitions for UCTE-DEF power grid exchange files.
//!
//! This crate provides Rust type definitions for the records of a UCTE data
//! exchange file (nodes, lines, transformers and their regulation data),
//! the code sets those records refer to, and the static country table.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use ucte_types::{BranchStatus, Country, FileType, Line};
//!
//! let line = Line {
//!     node1: Some("HBRINJ2 ".to_string()),
//!     node2: Some("HVEPAD2 ".to_string()),
//!     status: Some(0),
//!     ..Default::default()
//! };
//! assert_eq!(line.branch_status(), Some(BranchStatus::RealInOperation));
//!
//! assert_eq!(FileType::from_code("SN"), Some(FileType::Snapshot));
//! assert_eq!(Country::by_iso_code("HR").unwrap().english_name(), "Croatia");
//! ```

#![warn(missing_docs)]

pub mod country;
mod enums;
mod line;
mod node;
mod regulation;
mod transformer;

// Re-export all public types at crate root
pub use country::{Country, COUNTRIES};
pub use enums::{
    BranchStatus, CodeKind, FileType, NodeStatus, NodeType, PowerPlantType, RegulationType,
    UnknownCode, Weekday,
};
pub use line::Line;
pub use node::Node;
pub use regulation::{AngleRegulation, PhaseRegulation, TransformerRegulation, TransformerSpecParam};
pub use transformer::Transformer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _node = Node::default();
        let _line = Line::default();
        let _transformer = Transformer::default();
        let _regulation = TransformerRegulation::default();
        let _spec = TransformerSpecParam::default();
        let _status = BranchStatus::RealInOperation;
        let _kind = CodeKind::Weekday;
    }

    #[test]
    fn test_country_table_accessible() {
        assert_eq!(COUNTRIES.len(), 36);
        assert_eq!(Country::by_iso_code("DE").unwrap().node_prefix, 'D');
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let line = Line {
            node1: Some("LBERIC2 ".to_string()),
            node2: Some("LKLECE2 ".to_string()),
            order_code: Some('2'),
            status: Some(1),
            resistance: Some(4.0),
            reactance: Some(53.5),
            susceptance: Some(120.0),
            current_limit: Some(640),
            element_name: Some("BER-KLE220EQ".to_string()),
        };

        let json = serde_json::to_string(&line).unwrap();
        let parsed: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(line, parsed);
    }
}
