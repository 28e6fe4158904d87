//! Country codes used by UCTE exchange files.
//!
//! The table lists every country known to the exchange format together with
//! the single character that prefixes its node codes. It is plain static data:
//! built at compile time, never mutated, and safe to read from any thread.
//!
//! # Examples
//!
//! ```
//! use ucte_types::Country;
//!
//! let croatia = Country::by_iso_code("HR").unwrap();
//! assert_eq!(croatia.native_name(), "Hrvatska");
//! assert_eq!(croatia.english_name(), "Croatia");
//! assert_eq!(croatia.node_prefix, 'H');
//!
//! // Node codes start with the country's prefix character.
//! assert_eq!(Country::by_node_prefix('L').unwrap().iso_code, "SI");
//! ```

use crate::enums::{CodeKind, UnknownCode};

/// One entry of the country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Country {
    /// Position in the table, starting at 1.
    pub number: u8,
    /// Short country code as used in the UCTE documentation (e.g. `D`, `SLO`).
    pub short_code: &'static str,
    /// Bilingual name, `Native (English)`.
    pub name: &'static str,
    /// First character of every node code belonging to this country.
    pub node_prefix: char,
    /// ISO 3166 alpha-2 code, as used in file names.
    pub iso_code: &'static str,
}

impl Country {
    const fn new(
        number: u8,
        short_code: &'static str,
        name: &'static str,
        node_prefix: char,
        iso_code: &'static str,
    ) -> Self {
        Self {
            number,
            short_code,
            name,
            node_prefix,
            iso_code,
        }
    }

    /// Finds a country by its ISO code.
    pub fn by_iso_code(iso_code: &str) -> Option<&'static Country> {
        COUNTRIES.iter().find(|c| c.iso_code == iso_code)
    }

    /// Finds a country by the node code prefix character.
    pub fn by_node_prefix(prefix: char) -> Option<&'static Country> {
        COUNTRIES.iter().find(|c| c.node_prefix == prefix)
    }

    /// Finds a country by its ISO code, reporting unknown codes as an error.
    pub fn lookup(iso_code: &str) -> Result<&'static Country, UnknownCode> {
        Self::by_iso_code(iso_code).ok_or_else(|| UnknownCode::new(CodeKind::Country, iso_code))
    }

    /// Returns the name in the country's own language.
    ///
    /// Entries without an English part return the whole name.
    pub fn native_name(&self) -> &'static str {
        match self.name.split_once(" (") {
            Some((native, _)) => native,
            None => self.name,
        }
    }

    /// Returns the English name.
    pub fn english_name(&self) -> &'static str {
        match self.name.split_once(" (") {
            Some((_, english)) => english.strip_suffix(')').unwrap_or(english),
            None => self.name,
        }
    }

    /// Returns true for the pseudo-country of cross-border X-nodes.
    pub fn is_border(&self) -> bool {
        self.iso_code == BORDER_ISO_CODE
    }
}

/// ISO code of the fictitious border node pseudo-country.
pub const BORDER_ISO_CODE: &str = "XX";

/// All countries known to the exchange format.
pub static COUNTRIES: [Country; 36] = [
    Country::new(1, "A", "Österreich (Austria)", 'O', "AT"),
    Country::new(2, "AL", "Shqiperia (Albania)", 'A', "AL"),
    Country::new(3, "B", "Belgique (Belgium)", 'B', "BE"),
    Country::new(4, "BG", "Bulgarija (Bulgaria)", 'V', "BG"),
    Country::new(5, "BiH", "Bosna i Hercegovina (Bosnia and Herzegovina)", 'W', "BA"),
    Country::new(6, "BY", "Belorussija (Belarus)", '3', "BY"),
    Country::new(7, "CH", "Schweiz (Switzerland)", 'S', "CH"),
    Country::new(8, "CZ", "Ceska Republika (Czech Republic)", 'C', "CZ"),
    Country::new(9, "D", "Deutschland (Germany)", 'D', "DE"),
    Country::new(10, "DK", "Danmark (Denmark)", 'K', "DK"),
    Country::new(11, "E", "Espana (Spain)", 'E', "ES"),
    Country::new(12, "F", "France (France)", 'F', "FR"),
    Country::new(13, "GB", "Great Britain (Great Britain)", '5', "GB"),
    Country::new(14, "GR", "Hellas (Greece)", 'G', "GR"),
    Country::new(15, "H", "Magyarorszag (Hungary)", 'M', "HU"),
    Country::new(16, "HR", "Hrvatska (Croatia)", 'H', "HR"),
    Country::new(17, "I", "Italia (Italy)", 'I', "IT"),
    Country::new(18, "L", "Luxembourg (Luxemburg)", '1', "LU"),
    Country::new(19, "LT", "Lietuva (Lithuania)", '6', "LT"),
    Country::new(20, "MA", "Maroc (Morocco)", '2', "MA"),
    Country::new(21, "MD", "Moldava (Moldavia)", '7', "MD"),
    Country::new(22, "MK", "Makedonija (FYROM)", 'Y', "MK"),
    Country::new(23, "N", "Norge (Norway)", '9', "NO"),
    Country::new(24, "NL", "Nederland (Netherlands)", 'N', "NL"),
    Country::new(25, "P", "Portugal (Portugal)", 'P', "PT"),
    Country::new(26, "PL", "Polska (Poland)", 'Z', "PL"),
    Country::new(27, "RO", "Romania (Romania)", 'R', "RO"),
    Country::new(28, "RUS", "Rossija (Russia)", '4', "RU"),
    Country::new(29, "S", "Sverige (Sweden)", '8', "SE"),
    Country::new(30, "SK", "Slovensko (Slovakia)", 'Q', "SK"),
    Country::new(31, "SLO", "Slovenija (Slovenia)", 'L', "SI"),
    Country::new(32, "TR", "Türkiye (Turkey)", 'T', "TR"),
    Country::new(33, "UA", "Ukraina (Ukraine)", 'U', "UA"),
    Country::new(34, "MNE", "Crna Gora (Montenegro)", '0', "ME"),
    Country::new(35, "SRB", "Srbija (Serbia)", 'J', "RS"),
    Country::new(36, "--", "Fictitious border node", 'X', "XX"),
];
