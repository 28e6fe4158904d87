//! UCTE transformer regulation block parser.
//!
//! Parses the lines of the `##R` block. A regulation line carries two blocks
//! with the same shape, phase regulation first and angle regulation second;
//! the shared fields of block `i` sit at a fixed stride from the first one.

use ucte_types::{AngleRegulation, PhaseRegulation, TransformerRegulation};

use crate::parser::{field, UcteRecord};

/// Column layout of a regulation record.
mod columns {
    use std::ops::Range;

    pub const NODE1: Range<usize> = 0..8;
    pub const NODE2: Range<usize> = 9..17;
    pub const ORDER_CODE: usize = 18;
    pub const PHASE_VOLTAGE: Range<usize> = 33..38;
    pub const ANGLE: Range<usize> = 45..50;
    pub const ANGLE_ACTIVE_POWER: Range<usize> = 58..63;
    pub const ANGLE_TYPE: Range<usize> = 64..68;

    pub const PHASE_BLOCK: usize = 0;
    pub const ANGLE_BLOCK: usize = 1;

    pub const fn delta(block: usize) -> Range<usize> {
        20 + 19 * block..25 + 19 * block
    }

    pub const fn taps(block: usize) -> Range<usize> {
        26 + 25 * block..28 + 25 * block
    }

    pub const fn tap_position(block: usize) -> Range<usize> {
        29 + 25 * block..32 + 25 * block
    }
}

impl UcteRecord for TransformerRegulation {
    const KIND: &'static str = "transformer regulation";

    fn from_line(line: &str) -> Self {
        use columns::{ANGLE_BLOCK, PHASE_BLOCK};

        TransformerRegulation {
            node1: field::text(line, columns::NODE1),
            node2: field::text(line, columns::NODE2),
            order_code: field::character(line, columns::ORDER_CODE),
            phase: PhaseRegulation {
                delta: field::real(line, columns::delta(PHASE_BLOCK)),
                taps: field::integer(line, columns::taps(PHASE_BLOCK)),
                tap_position: field::integer(line, columns::tap_position(PHASE_BLOCK)),
                voltage: field::real(line, columns::PHASE_VOLTAGE),
            },
            angle: AngleRegulation {
                delta: field::real(line, columns::delta(ANGLE_BLOCK)),
                taps: field::integer(line, columns::taps(ANGLE_BLOCK)),
                tap_position: field::integer(line, columns::tap_position(ANGLE_BLOCK)),
                angle: field::real(line, columns::ANGLE),
                active_power: field::real(line, columns::ANGLE_ACTIVE_POWER),
                regulation_type: field::text(line, columns::ANGLE_TYPE),
            },
        }
    }
}
