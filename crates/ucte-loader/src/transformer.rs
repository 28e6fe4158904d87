//! UCTE transformer block parser.
//!
//! Parses the lines of the `##T` block.

use ucte_types::Transformer;

use crate::parser::{field, UcteRecord};

/// Column layout of a transformer record.
mod columns {
    use std::ops::Range;

    pub const NODE1: Range<usize> = 0..8;
    pub const NODE2: Range<usize> = 9..17;
    pub const ORDER_CODE: usize = 18;
    pub const STATUS: Range<usize> = 20..21;
    pub const NOMINAL_POWER: Range<usize> = 34..39;
    pub const RESISTANCE: Range<usize> = 40..46;
    pub const REACTANCE: Range<usize> = 47..53;
    pub const SUSCEPTANCE: Range<usize> = 54..62;
    pub const CONDUCTANCE: Range<usize> = 63..69;
    pub const CURRENT_LIMIT: Range<usize> = 70..76;
    pub const ELEMENT_NAME: Range<usize> = 77..89;

    /// Rated voltage of winding 1 or 2; the two fields are 6 columns apart.
    pub const fn rated_voltage(winding: usize) -> Range<usize> {
        16 + 6 * winding..21 + 6 * winding
    }
}

impl UcteRecord for Transformer {
    const KIND: &'static str = "transformer";

    fn from_line(line: &str) -> Self {
        Transformer {
            node1: field::text(line, columns::NODE1),
            node2: field::text(line, columns::NODE2),
            order_code: field::character(line, columns::ORDER_CODE),
            status: field::integer(line, columns::STATUS),
            rated_voltage1: field::real(line, columns::rated_voltage(1)),
            rated_voltage2: field::real(line, columns::rated_voltage(2)),
            nominal_power: field::real(line, columns::NOMINAL_POWER),
            resistance: field::real(line, columns::RESISTANCE),
            reactance: field::real(line, columns::REACTANCE),
            susceptance: field::real(line, columns::SUSCEPTANCE),
            conductance: field::real(line, columns::CONDUCTANCE),
            current_limit: field::integer(line, columns::CURRENT_LIMIT),
            element_name: field::text(line, columns::ELEMENT_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rated_voltage_columns() {
        assert_eq!(columns::rated_voltage(1), 22..27);
        assert_eq!(columns::rated_voltage(2), 28..33);
    }

    #[test]
    fn test_parse_transformer_record() {
        let t = Transformer::from_line(
            "LBERIC1  LBERIC2  1 0 400.0 231.0   400  0.250  15.75  -37.057  5.622   1000 BER400 TR422",
        );

        assert_eq!(t.node1.as_deref(), Some("LBERIC1 "));
        assert_eq!(t.node2.as_deref(), Some("LBERIC2 "));
        assert_eq!(t.order_code, Some('1'));
        assert_eq!(t.status, Some(0));
        assert_eq!(t.rated_voltage1, Some(400.0));
        assert_eq!(t.rated_voltage2, Some(231.0));
        assert_eq!(t.nominal_power, Some(400.0));
        assert_eq!(t.resistance, Some(0.25));
        assert_eq!(t.reactance, Some(15.75));
        assert_eq!(t.susceptance, Some(-37.057));
        assert_eq!(t.conductance, Some(5.622));
        assert_eq!(t.current_limit, Some(1000));
        assert_eq!(t.element_name.as_deref(), Some("BER400 TR422"));
    }

    #[test]
    fn test_element_name_keeps_interior_spacing() {
        let t = Transformer::from_line(
            "LDIVAC11 LDIVAC21 1 1 400.0 220.0   300  3.579 141.29    0.000  0.000    433 DIV 42 TR EQ",
        );

        assert_eq!(t.status, Some(1));
        assert_eq!(t.rated_voltage2, Some(220.0));
        assert_eq!(t.nominal_power, Some(300.0));
        assert_eq!(t.reactance, Some(141.29));
        assert_eq!(t.current_limit, Some(433));
        assert_eq!(t.element_name.as_deref(), Some("DIV 42 TR EQ"));
    }

    #[test]
    fn test_unnamed_transformer() {
        let t = Transformer::from_line(
            "HKONJS2  HKONJS1  1 0 231.0 400.0 400.0  0.194   15.6    -8.66    2.4   1000 ",
        );

        assert_eq!(t.rated_voltage1, Some(231.0));
        assert_eq!(t.rated_voltage2, Some(400.0));
        assert_eq!(t.susceptance, Some(-8.66));
        assert_eq!(t.conductance, Some(2.4));
        assert_eq!(t.current_limit, Some(1000));
        assert_eq!(t.element_name, None);
    }
}
