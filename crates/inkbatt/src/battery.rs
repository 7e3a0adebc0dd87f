//! Battery capacity source
//!
//! Reads the charge percentage the power-supply driver exports through
//! sysfs. The value is a small decimal text file; parsing is permissive
//! about surrounding whitespace and trailing junk, but a reading with no
//! digits at all is an error, not a 0% battery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Capacity attribute of the PMIC's battery charger.
pub const CAPACITY_PATH: &str = "/sys/class/power_supply/mc13892_bat/capacity";

/// Errors from one capacity reading.
#[derive(Debug)]
pub enum ReadError {
    /// The sysfs attribute could not be read
    Io(io::Error),
    /// The attribute contents held no parsable percentage
    Malformed(String),
}

impl core::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "reading capacity: {e}"),
            ReadError::Malformed(raw) => write!(f, "malformed capacity reading {raw:?}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::Malformed(_) => None,
        }
    }
}

/// Read-only view of the battery's charge percentage.
pub struct BatterySource {
    path: PathBuf,
}

impl Default for BatterySource {
    fn default() -> Self {
        Self::new()
    }
}

impl BatterySource {
    pub fn new() -> Self {
        Self::with_path(CAPACITY_PATH)
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// One capacity reading, clamped to `[0, 100]`.
    pub fn read_percent(&self) -> Result<u8, ReadError> {
        let raw = fs::read_to_string(&self.path).map_err(ReadError::Io)?;
        let value =
            parse_capacity(&raw).ok_or_else(|| ReadError::Malformed(raw.trim().to_string()))?;
        Ok(value.min(100) as u8)
    }
}

/// Leading decimal digit run after optional whitespace; trailing bytes are
/// ignored the way a C `atoi` would ignore them.
fn parse_capacity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_newline_terminated_values() {
        assert_eq!(parse_capacity("57"), Some(57));
        assert_eq!(parse_capacity("100\n"), Some(100));
        assert_eq!(parse_capacity("  7 "), Some(7));
    }

    #[test]
    fn tolerates_trailing_junk() {
        assert_eq!(parse_capacity("42%"), Some(42));
        assert_eq!(parse_capacity("13 mAh"), Some(13));
    }

    #[test]
    fn rejects_digitless_input() {
        assert_eq!(parse_capacity(""), None);
        assert_eq!(parse_capacity("\n"), None);
        assert_eq!(parse_capacity("unknown"), None);
        assert_eq!(parse_capacity("-5"), None);
    }

    #[test]
    fn read_percent_clamps_and_surfaces_errors() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("inkbatt-capacity-{}", std::process::id()));

        fs::write(&path, "250\n").unwrap();
        let source = BatterySource::with_path(&path);
        assert_eq!(source.read_percent().unwrap(), 100);

        fs::write(&path, "garbage").unwrap();
        assert!(matches!(
            source.read_percent(),
            Err(ReadError::Malformed(_))
        ));

        fs::remove_file(&path).unwrap();
        assert!(matches!(source.read_percent(), Err(ReadError::Io(_))));
    }
}
