//! UCTE node block parser.
//!
//! Parses the lines of the `##Z<cc>` and `##ZXX` blocks.

use ucte_types::Node;

use crate::parser::{field, UcteRecord};

/// Column layout of a node line.
mod columns {
    use std::ops::Range;

    pub const CODE: Range<usize> = 0..8;
    pub const GEOGRAPHICAL_NAME: Range<usize> = 9..21;
    pub const STATUS: Range<usize> = 22..23;
    pub const TYPE_CODE: Range<usize> = 24..25;
    pub const VOLTAGE: Range<usize> = 26..32;
    pub const ACTIVE_LOAD: Range<usize> = 33..40;
    pub const REACTIVE_LOAD: Range<usize> = 41..48;
    pub const ACTIVE_GENERATION: Range<usize> = 49..56;
    pub const REACTIVE_GENERATION: Range<usize> = 57..64;
    pub const MIN_GENERATION_MW: Range<usize> = 65..72;
    pub const MAX_GENERATION_MW: Range<usize> = 73..80;
    pub const MIN_GENERATION_MVAR: Range<usize> = 81..88;
    pub const MAX_GENERATION_MVAR: Range<usize> = 89..96;
    pub const PRIMARY_CONTROL_STATIC: Range<usize> = 97..102;
    pub const PRIMARY_CONTROL_POWER: Range<usize> = 103..110;
    pub const SHORT_CIRCUIT_POWER: Range<usize> = 111..118;
    pub const X_R_RATIO: Range<usize> = 119..126;
    pub const POWER_PLANT_TYPE: usize = 127;
}

impl UcteRecord for Node {
    const KIND: &'static str = "node";

    fn from_line(line: &str) -> Self {
        Node {
            code: field::text(line, columns::CODE),
            geographical_name: field::text(line, columns::GEOGRAPHICAL_NAME),
            status: field::integer(line, columns::STATUS),
            type_code: field::integer(line, columns::TYPE_CODE),
            voltage: field::real(line, columns::VOLTAGE),
            active_load: field::real(line, columns::ACTIVE_LOAD),
            reactive_load: field::real(line, columns::REACTIVE_LOAD),
            active_generation: field::real(line, columns::ACTIVE_GENERATION),
            reactive_generation: field::real(line, columns::REACTIVE_GENERATION),
            min_generation_mw: field::real(line, columns::MIN_GENERATION_MW),
            max_generation_mw: field::real(line, columns::MAX_GENERATION_MW),
            min_generation_mvar: field::real(line, columns::MIN_GENERATION_MVAR),
            max_generation_mvar: field::real(line, columns::MAX_GENERATION_MVAR),
            primary_control_static: field::real(line, columns::PRIMARY_CONTROL_STATIC),
            primary_control_power: field::real(line, columns::PRIMARY_CONTROL_POWER),
            short_circuit_power: field::real(line, columns::SHORT_CIRCUIT_POWER),
            x_r_ratio: field::real(line, columns::X_R_RATIO),
            power_plant_type: field::character(line, columns::POWER_PLANT_TYPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucte_types::{NodeType, PowerPlantType};

    #[test]
    fn test_parse_full_node() {
        let line = "LSOSTA16 LSOSTA16     0 2  400.8     0.0     0.0  -382.0   -29.8     0.0  -553.0   400.0  -300.0   0.0     0.0     0.0     0.0 L";
        let node = Node::from_line(line);

        assert_eq!(node.code.as_deref(), Some("LSOSTA16"));
        assert_eq!(node.geographical_name.as_deref(), Some("LSOSTA16    "));
        assert_eq!(node.status, Some(0));
        assert_eq!(node.type_code, Some(2));
        assert_eq!(node.voltage, Some(400.8));
        assert_eq!(node.active_load, Some(0.0));
        assert_eq!(node.reactive_load, Some(0.0));
        assert_eq!(node.active_generation, Some(-382.0));
        assert_eq!(node.reactive_generation, Some(-29.8));
        assert_eq!(node.min_generation_mw, Some(0.0));
        assert_eq!(node.max_generation_mw, Some(-553.0));
        assert_eq!(node.min_generation_mvar, Some(400.0));
        assert_eq!(node.max_generation_mvar, Some(-300.0));
        assert_eq!(node.primary_control_static, Some(0.0));
        assert_eq!(node.primary_control_power, Some(0.0));
        assert_eq!(node.short_circuit_power, Some(0.0));
        assert_eq!(node.x_r_ratio, Some(0.0));
        assert_eq!(node.power_plant_type, Some('L'));

        assert_eq!(node.node_type(), Some(NodeType::PU));
        assert_eq!(node.plant_type(), Some(PowerPlantType::Lignite));
    }

    #[test]
    fn test_parse_truncated_node() {
        let line = "HDJALE5  HE Dale      0 2  116.5     0.0     0.0   -10.0     7.0    -6.0   -20.4     7.0   -12.0   0.0 ";
        let node = Node::from_line(line);

        assert_eq!(node.code.as_deref(), Some("HDJALE5 "));
        assert_eq!(node.geographical_name.as_deref(), Some("HE Dale     "));
        assert_eq!(node.voltage, Some(116.5));
        assert_eq!(node.active_generation, Some(-10.0));
        assert_eq!(node.max_generation_mvar, Some(-12.0));
        assert_eq!(node.primary_control_static, Some(0.0));

        // Everything past column 103 is missing.
        assert_eq!(node.primary_control_power, None);
        assert_eq!(node.short_circuit_power, None);
        assert_eq!(node.x_r_ratio, None);
        assert_eq!(node.power_plant_type, None);
    }

    #[test]
    fn test_malformed_fields_are_isolated() {
        let line = "LDIVAC11 LDIVAC11     A            155.7    28.0     0.0     0.0     0.0     0.0   100.0  -100.0   0.0     0.0     0.0     0.0  ";
        let node = Node::from_line(line);

        assert_eq!(node.status, None);
        assert_eq!(node.type_code, None);
        assert_eq!(node.voltage, None);
        assert_eq!(node.active_load, Some(155.7));
        assert_eq!(node.reactive_load, Some(28.0));
        assert_eq!(node.min_generation_mvar, Some(100.0));
        assert_eq!(node.max_generation_mvar, Some(-100.0));
        assert_eq!(node.x_r_ratio, Some(0.0));
        assert_eq!(node.power_plant_type, Some(' '));
        assert_eq!(node.plant_type(), None);
    }

    #[test]
    fn test_x_r_ratio_has_its_own_column() {
        let line = "HSENJ 2  HE Senj      0 2  246.7     0.0     0.0     0.0     0.0   -35.0   -72.0    31.0   -35.0   5.0   100.0  1500.0    12.5 H";
        let node = Node::from_line(line);

        assert_eq!(node.primary_control_static, Some(5.0));
        assert_eq!(node.primary_control_power, Some(100.0));
        assert_eq!(node.short_circuit_power, Some(1500.0));
        assert_eq!(node.x_r_ratio, Some(12.5));
        assert_eq!(node.plant_type(), Some(PowerPlantType::Hydro));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let line = "HDONJM5  Donji Miholj   9  117.0     1.5    -0.4     0.0     0.0 ";
        let first = Node::from_line(line);
        let second = Node::from_line(line);

        assert_eq!(first, second);
        assert_eq!(first.status, None);
        assert_eq!(first.type_code, Some(9));
        assert_eq!(first.reactive_load, Some(-0.4));
    }
}
