//! File name metadata.
//!
//! UCTE files are named `yyyymmdd_HHMM_TYw_ccv.uct`:
//!
//! ```text
//! 20200418_0930_FO6_HR1.uct
//! │       │    │ ││ │ └ version
//! │       │    │ ││ └── ISO country code
//! │       │    │ │└──── weekday, 1 = Monday
//! │       │    │ └───── file type (FO, SN, RE, LR)
//! │       │    └─────── hour and minute
//! │       └──────────── separator
//! └──────────────────── year, month and day
//! ```

use std::path::Path;

use ucte_types::{Country, FileType, UnknownCode, Weekday};

use crate::parser::field;
use crate::types::{UcteError, UcteResult};

/// Shortest name that still carries the country code.
const MIN_NAME_LEN: usize = 20;

/// Metadata decoded from a UCTE file name.
///
/// # Examples
///
/// ```
/// use ucte_loader::FileMetadata;
///
/// let meta = FileMetadata::parse("20200418_0930_FO6_HR1.uct").unwrap();
/// assert_eq!((meta.year, meta.month, meta.day), (2020, 4, 18));
/// assert_eq!(meta.file_type_name().unwrap(), "Forecast");
/// assert_eq!(meta.weekday_name().unwrap(), "Saturday");
/// assert_eq!(meta.country_code, "HR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Base file name, directories stripped.
    pub file_name: String,
    /// Raw `yyyymmdd` digits.
    pub date: String,
    /// Raw `HHMM` digits.
    pub time: String,
    /// Year.
    pub year: u16,
    /// Month, 1-12 for well-formed names.
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Hour.
    pub hour: u8,
    /// Minute.
    pub minute: u8,
    /// Two-letter file type code.
    pub file_type_code: String,
    /// Weekday digit as written in the name.
    pub weekday_code: String,
    /// ISO country code.
    pub country_code: String,
    /// Version token, everything from position 20 up to the extension.
    pub version: String,
}

impl FileMetadata {
    /// Decodes the metadata of a file name or path.
    ///
    /// Directory components separated by `/` or `\` are ignored.
    ///
    /// # Errors
    /// Returns [`UcteError::InvalidFileName`] if the name is too short to hold
    /// the country code, or if the date or time positions are not digits.
    pub fn parse(file_name: &str) -> UcteResult<Self> {
        let name = file_name
            .rsplit(|c| c == '/' || c == '\\')
            .next()
            .unwrap_or(file_name);

        let invalid = |reason| UcteError::InvalidFileName {
            name: name.to_string(),
            reason,
        };

        if name.chars().count() < MIN_NAME_LEN {
            return Err(invalid("too short for yyyymmdd_HHMM_TYw_cc"));
        }

        let date = field::slice(name, 0..8);
        if !is_digits(date) {
            return Err(invalid("date is not yyyymmdd"));
        }
        let time = field::slice(name, 9..13);
        if !is_digits(time) {
            return Err(invalid("time is not HHMM"));
        }

        let stem = name.split('.').next().unwrap_or(name);

        Ok(Self {
            file_name: name.to_string(),
            year: digits(&date[0..4]),
            month: digits(&date[4..6]),
            day: digits(&date[6..8]),
            hour: digits(&time[0..2]),
            minute: digits(&time[2..4]),
            date: date.to_string(),
            time: time.to_string(),
            file_type_code: field::slice(name, 14..16).to_string(),
            weekday_code: field::slice(name, 16..17).to_string(),
            country_code: field::slice(name, 18..20).to_string(),
            version: field::slice(stem, MIN_NAME_LEN..usize::MAX).to_string(),
        })
    }

    /// Decodes the metadata of a path without touching the file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> UcteResult<Self> {
        Self::parse(&path.as_ref().to_string_lossy())
    }

    /// Returns the date as `YYYY-MM-DD`.
    pub fn date_iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Returns the date as `DD.MM.YYYY.`
    pub fn date_hr(&self) -> String {
        format!("{:02}.{:02}.{:04}.", self.day, self.month, self.year)
    }

    /// Returns the time as `HH:MM`.
    pub fn time_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Returns the file type.
    pub fn file_type(&self) -> Result<FileType, UnknownCode> {
        self.file_type_code.parse()
    }

    /// Returns the file type name, e.g. `Forecast`.
    pub fn file_type_name(&self) -> Result<&'static str, UnknownCode> {
        self.file_type().map(FileType::name)
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Result<Weekday, UnknownCode> {
        self.weekday_code.parse()
    }

    /// Returns the weekday name, e.g. `Saturday`.
    pub fn weekday_name(&self) -> Result<&'static str, UnknownCode> {
        self.weekday().map(Weekday::name)
    }

    /// Returns the country table entry for the country code.
    pub fn country(&self) -> Result<&'static Country, UnknownCode> {
        Country::lookup(&self.country_code)
    }

    /// Returns the bilingual country name, e.g. `Hrvatska (Croatia)`.
    pub fn country_name_full(&self) -> Result<&'static str, UnknownCode> {
        self.country().map(|c| c.name)
    }

    /// Returns the English country name.
    pub fn country_name(&self) -> Result<&'static str, UnknownCode> {
        self.country().map(Country::english_name)
    }

    /// Returns the country name in its own language.
    pub fn country_name_native(&self) -> Result<&'static str, UnknownCode> {
        self.country().map(Country::native_name)
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a run of ASCII digits that has already been validated.
fn digits<T: From<u8> + std::ops::Mul<Output = T> + std::ops::Add<Output = T>>(value: &str) -> T {
    value
        .bytes()
        .fold(T::from(0), |acc, b| acc * T::from(10) + T::from(b - b'0'))
}
