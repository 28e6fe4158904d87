//! UCTE special transformer tap-step parser.
//!
//! Parses the lines of the `##TT` block.

use ucte_types::TransformerSpecParam;

use crate::parser::{field, UcteRecord};

mod columns {
    use std::ops::Range;

    pub const NODE1: Range<usize> = 0..8;
    pub const NODE2: Range<usize> = 9..17;
    pub const ORDER_CODE: usize = 18;
    pub const TAP_POSITION: Range<usize> = 22..25;
    pub const DELTA: Range<usize> = 40..45;
    pub const ANGLE: Range<usize> = 46..51;

    pub const RESISTANCE: usize = 0;
    pub const REACTANCE: usize = 1;

    /// R (index 0) or X (index 1) at the tap.
    pub const fn impedance(index: usize) -> Range<usize> {
        26 + 7 * index..32 + 7 * index
    }
}

impl UcteRecord for TransformerSpecParam {
    const KIND: &'static str = "transformer tap step";

    fn from_line(line: &str) -> Self {
        TransformerSpecParam {
            node1: field::text(line, columns::NODE1),
            node2: field::text(line, columns::NODE2),
            order_code: field::character(line, columns::ORDER_CODE),
            tap_position: field::integer(line, columns::TAP_POSITION),
            resistance: field::real(line, columns::impedance(columns::RESISTANCE)),
            reactance: field::real(line, columns::impedance(columns::REACTANCE)),
            delta: field::real(line, columns::DELTA),
            angle: field::real(line, columns::ANGLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tap_step() {
        let p = TransformerSpecParam::from_line("HSENJ 5  HSENJ 2  1 0  12  0.090    8.6 19.44 -10.5 ");

        assert_eq!(p.node1.as_deref(), Some("HSENJ 5 "));
        assert_eq!(p.node2.as_deref(), Some("HSENJ 2 "));
        assert_eq!(p.order_code, Some('1'));
        assert_eq!(p.tap_position, Some(12));
        assert_eq!(p.resistance, Some(0.09));
        assert_eq!(p.reactance, Some(8.6));
        assert_eq!(p.delta, Some(19.44));
        assert_eq!(p.angle, Some(-10.5));
    }

    #[test]
    fn test_negative_tap() {
        let p = TransformerSpecParam::from_line("HZERJA2  HZERJA1  1 0 -12  0.195   20.0 -9.79 -4.48 ");

        assert_eq!(p.tap_position, Some(-12));
        assert_eq!(p.resistance, Some(0.195));
        assert_eq!(p.reactance, Some(20.0));
        assert_eq!(p.delta, Some(-9.79));
        assert_eq!(p.angle, Some(-4.48));
    }

    #[test]
    fn test_truncated_tap_step() {
        let p = TransformerSpecParam::from_line("HZERJA2  HZERJA1  1 0  11  0.195");

        assert_eq!(p.tap_position, Some(11));
        assert_eq!(p.resistance, Some(0.195));
        assert_eq!(p.reactance, None);
        assert_eq!(p.delta, None);
        assert_eq!(p.angle, None);
    }
}
