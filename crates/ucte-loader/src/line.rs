//! UCTE line block parser.
//!
//! Parses the lines of the `##L` block.

use ucte_types::Line;

use crate::parser::{field, UcteRecord};

/// Column layout of a line record.
mod columns {
    use std::ops::Range;

    pub const NODE1: Range<usize> = 0..8;
    pub const NODE2: Range<usize> = 9..17;
    pub const ORDER_CODE: usize = 18;
    pub const STATUS: Range<usize> = 20..21;
    pub const RESISTANCE: Range<usize> = 22..28;
    pub const REACTANCE: Range<usize> = 29..35;
    pub const SUSCEPTANCE: Range<usize> = 36..44;
    pub const CURRENT_LIMIT: Range<usize> = 45..51;
    pub const ELEMENT_NAME: Range<usize> = 52..64;
}

impl UcteRecord for Line {
    const KIND: &'static str = "line";

    fn from_line(line: &str) -> Self {
        Line {
            node1: field::text(line, columns::NODE1),
            node2: field::text(line, columns::NODE2),
            order_code: field::character(line, columns::ORDER_CODE),
            status: field::integer(line, columns::STATUS),
            resistance: field::real(line, columns::RESISTANCE),
            reactance: field::real(line, columns::REACTANCE),
            susceptance: field::real(line, columns::SUSCEPTANCE),
            current_limit: field::integer(line, columns::CURRENT_LIMIT),
            element_name: field::text(line, columns::ELEMENT_NAME),
        }
    }
}
