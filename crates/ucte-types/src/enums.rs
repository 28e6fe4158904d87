//! UCTE-DEF enumeration types.
//!
//! The exchange format encodes most classifications as single digits or
//! letters. Records keep the raw code (so an unexpected value survives
//! parsing), and these enums give the recognized codes a name.

use std::fmt;
use std::str::FromStr;

/// The kind of code that failed to resolve in a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeKind {
    /// Two-letter file type code (`FO`, `SN`, `RE`, `LR`).
    FileType,
    /// Weekday digit, 1 for Monday through 7 for Sunday.
    Weekday,
    /// ISO country code.
    Country,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileType => write!(f, "file type"),
            Self::Weekday => write!(f, "weekday"),
            Self::Country => write!(f, "country"),
        }
    }
}

/// A code was present but is not part of the known code set.
///
/// # Examples
///
/// ```
/// use ucte_types::{CodeKind, FileType};
///
/// let err = "XY".parse::<FileType>().unwrap_err();
/// assert_eq!(err.kind, CodeKind::FileType);
/// assert_eq!(err.code, "XY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode {
    /// Which code set the lookup ran against.
    pub kind: CodeKind,
    /// The code exactly as it appeared.
    pub code: String,
}

impl UnknownCode {
    /// Creates a new error for `code` in the `kind` code set.
    pub fn new(kind: CodeKind, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
        }
    }
}

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} code: '{}'", self.kind, self.code)
    }
}

impl std::error::Error for UnknownCode {}

/// Whether a node is a real or an equivalent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeStatus {
    /// Real node (code 0).
    Real,
    /// Equivalent node (code 1).
    Equivalent,
}

impl NodeStatus {
    /// Creates a NodeStatus from its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Real),
            1 => Some(Self::Equivalent),
            _ => None,
        }
    }

    /// Returns the numeric code for this status.
    pub fn code(self) -> u8 {
        match self {
            Self::Real => 0,
            Self::Equivalent => 1,
        }
    }
}

/// Node type code used by the load flow formulation.
///
/// # Examples
///
/// ```
/// use ucte_types::NodeType;
///
/// assert_eq!(NodeType::from_code(2), Some(NodeType::PU));
/// assert!(NodeType::from_code(3).unwrap().is_slack());
/// assert_eq!(NodeType::from_code(4), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeType {
    /// P and Q constant (code 0).
    PQ,
    /// Q and θ constant (code 1).
    QTheta,
    /// P and U constant (code 2).
    PU,
    /// U and θ constant, the global slack node (code 3).
    Slack,
}

impl NodeType {
    /// Creates a NodeType from its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::PQ),
            1 => Some(Self::QTheta),
            2 => Some(Self::PU),
            3 => Some(Self::Slack),
            _ => None,
        }
    }

    /// Returns the numeric code for this node type.
    pub fn code(self) -> u8 {
        match self {
            Self::PQ => 0,
            Self::QTheta => 1,
            Self::PU => 2,
            Self::Slack => 3,
        }
    }

    /// Returns true for the global slack node type.
    pub fn is_slack(self) -> bool {
        self == Self::Slack
    }
}

/// Primary energy source of the power plant connected to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerPlantType {
    /// `H`
    Hydro,
    /// `N`
    Nuclear,
    /// `L`
    Lignite,
    /// `C`
    HardCoal,
    /// `G`
    Gas,
    /// `O`
    Oil,
    /// `W`
    Wind,
    /// `F`
    Further,
}

impl PowerPlantType {
    /// Creates a PowerPlantType from its letter code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Self::Hydro),
            'N' => Some(Self::Nuclear),
            'L' => Some(Self::Lignite),
            'C' => Some(Self::HardCoal),
            'G' => Some(Self::Gas),
            'O' => Some(Self::Oil),
            'W' => Some(Self::Wind),
            'F' => Some(Self::Further),
            _ => None,
        }
    }

    /// Returns the letter code for this plant type.
    pub fn code(self) -> char {
        match self {
            Self::Hydro => 'H',
            Self::Nuclear => 'N',
            Self::Lignite => 'L',
            Self::HardCoal => 'C',
            Self::Gas => 'G',
            Self::Oil => 'O',
            Self::Wind => 'W',
            Self::Further => 'F',
        }
    }
}

/// Operating status of a line or transformer.
///
/// Busbar couplers only appear on lines; transformers use the real and
/// equivalent variants.
///
/// # Examples
///
/// ```
/// use ucte_types::BranchStatus;
///
/// let status = BranchStatus::from_code(8).unwrap();
/// assert!(!status.is_in_operation());
/// assert!(!status.is_equivalent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BranchStatus {
    /// Real element in operation (code 0).
    RealInOperation,
    /// Equivalent element in operation (code 1).
    EquivalentInOperation,
    /// Busbar coupler in operation (code 2).
    BusbarCouplerInOperation,
    /// Busbar coupler out of operation (code 7).
    BusbarCouplerOutOfOperation,
    /// Real element out of operation (code 8).
    RealOutOfOperation,
    /// Equivalent element out of operation (code 9).
    EquivalentOutOfOperation,
}

impl BranchStatus {
    /// Creates a BranchStatus from its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::RealInOperation),
            1 => Some(Self::EquivalentInOperation),
            2 => Some(Self::BusbarCouplerInOperation),
            7 => Some(Self::BusbarCouplerOutOfOperation),
            8 => Some(Self::RealOutOfOperation),
            9 => Some(Self::EquivalentOutOfOperation),
            _ => None,
        }
    }

    /// Returns the numeric code for this status.
    pub fn code(self) -> u8 {
        match self {
            Self::RealInOperation => 0,
            Self::EquivalentInOperation => 1,
            Self::BusbarCouplerInOperation => 2,
            Self::BusbarCouplerOutOfOperation => 7,
            Self::RealOutOfOperation => 8,
            Self::EquivalentOutOfOperation => 9,
        }
    }

    /// Returns true if the element is in operation.
    pub fn is_in_operation(self) -> bool {
        matches!(
            self,
            Self::RealInOperation | Self::EquivalentInOperation | Self::BusbarCouplerInOperation
        )
    }

    /// Returns true for equivalent (non-physical) elements.
    pub fn is_equivalent(self) -> bool {
        matches!(
            self,
            Self::EquivalentInOperation | Self::EquivalentOutOfOperation
        )
    }

    /// Returns true for busbar couplers (R = X = B = 0 by definition).
    pub fn is_busbar_coupler(self) -> bool {
        matches!(
            self,
            Self::BusbarCouplerInOperation | Self::BusbarCouplerOutOfOperation
        )
    }
}

/// Angle regulation type of a phase shifting transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegulationType {
    /// `ASYM`
    Asymmetrical,
    /// `SYMM`
    Symmetrical,
}

impl RegulationType {
    /// Creates a RegulationType from its four-letter code.
    ///
    /// Surrounding blanks are ignored; a blank code is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "ASYM" => Some(Self::Asymmetrical),
            "SYMM" => Some(Self::Symmetrical),
            _ => None,
        }
    }

    /// Returns the four-letter code for this regulation type.
    pub fn code(self) -> &'static str {
        match self {
            Self::Asymmetrical => "ASYM",
            Self::Symmetrical => "SYMM",
        }
    }
}

/// Type of a UCTE exchange file, encoded in the file name.
///
/// # Examples
///
/// ```
/// use ucte_types::FileType;
///
/// let file_type: FileType = "LR".parse().unwrap();
/// assert_eq!(file_type.name(), "Long Term Reference");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// `FO`
    Forecast,
    /// `SN`
    Snapshot,
    /// `RE`
    Reference,
    /// `LR`
    LongTermReference,
}

impl FileType {
    /// Creates a FileType from its two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FO" => Some(Self::Forecast),
            "SN" => Some(Self::Snapshot),
            "RE" => Some(Self::Reference),
            "LR" => Some(Self::LongTermReference),
            _ => None,
        }
    }

    /// Returns the two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Forecast => "FO",
            Self::Snapshot => "SN",
            Self::Reference => "RE",
            Self::LongTermReference => "LR",
        }
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Forecast => "Forecast",
            Self::Snapshot => "Snapshot",
            Self::Reference => "Reference",
            Self::LongTermReference => "Long Term Reference",
        }
    }
}

impl FromStr for FileType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownCode::new(CodeKind::FileType, s))
    }
}

/// Day of the week, numbered from 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    /// 1
    Monday,
    /// 2
    Tuesday,
    /// 3
    Wednesday,
    /// 4
    Thursday,
    /// 5
    Friday,
    /// 6
    Saturday,
    /// 7
    Sunday,
}

impl Weekday {
    /// Creates a Weekday from its number (1 = Monday).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Returns the number of this weekday (1 = Monday).
    pub fn number(self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    /// Returns the English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| UnknownCode::new(CodeKind::Weekday, s))
    }
}
