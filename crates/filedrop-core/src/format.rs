//! Decimal byte-size formatting.
//!
//! Scales a raw byte count into a display value with a unit, using
//! decimal (1000-based) multiples to match what file managers and
//! upload dialogs typically show, not binary (1024-based) ones.

use std::fmt;

/// Bytes per kilobyte (decimal).
const BYTES_PER_KB: u64 = 1000;

/// Bytes per megabyte (decimal).
const BYTES_PER_MB: u64 = 1000 * BYTES_PER_KB;

/// Unit selected for a formatted byte count.
///
/// Ordered smallest to largest so that unit selection can be checked
/// for monotonicity with `<`/`>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    /// Raw bytes, shown as an integer.
    Bytes,
    /// Kilobytes (1000 bytes), shown to two decimal places.
    Kilobytes,
    /// Megabytes (1,000,000 bytes), shown to two decimal places.
    Megabytes,
}

impl SizeUnit {
    /// Untranslated unit symbol, as used in the default size templates.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Kilobytes => "kB",
            Self::Megabytes => "MB",
        }
    }
}

/// A byte count scaled for display: a formatted numeric value plus the
/// unit it is expressed in.
///
/// The value is kept as a string ("999", "1.00") because the
/// presentation rules differ per unit: bytes render as an integer,
/// kilobytes and megabytes to exactly two decimal places. Localized
/// final text is produced by [`Catalog::size_text`].
///
/// [`Catalog::size_text`]: crate::catalog::Catalog::size_text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSize {
    /// Formatted numeric value, without the unit.
    pub value: String,
    /// Unit the value is expressed in.
    pub unit: SizeUnit,
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Scale a byte count into a human-readable value and unit.
///
/// Counts below 1000 stay in bytes; counts below 1,000,000 become
/// kilobytes; everything else becomes megabytes. Kilobyte and megabyte
/// values are rounded to two decimal places, so 999,999 bytes renders
/// as "1000.00 kB" rather than jumping units early.
#[must_use]
// f64 has plenty of precision here: two decimal places survive exactly
// for any size below 2^53 bytes.
#[allow(clippy::cast_precision_loss)]
pub fn human_readable_bytes(bytes: u64) -> FormattedSize {
    if bytes < BYTES_PER_KB {
        FormattedSize {
            value: bytes.to_string(),
            unit: SizeUnit::Bytes,
        }
    } else if bytes < BYTES_PER_MB {
        FormattedSize {
            value: format!("{:.2}", bytes as f64 / BYTES_PER_KB as f64),
            unit: SizeUnit::Kilobytes,
        }
    } else {
        FormattedSize {
            value: format!("{:.2}", bytes as f64 / BYTES_PER_MB as f64),
            unit: SizeUnit::Megabytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        let size = human_readable_bytes(0);
        assert_eq!(size.value, "0");
        assert_eq!(size.unit, SizeUnit::Bytes);
    }

    #[test]
    fn just_under_kilobyte_threshold() {
        let size = human_readable_bytes(999);
        assert_eq!(size.value, "999");
        assert_eq!(size.unit, SizeUnit::Bytes);
    }

    #[test]
    fn exactly_one_kilobyte() {
        let size = human_readable_bytes(1000);
        assert_eq!(size.value, "1.00");
        assert_eq!(size.unit, SizeUnit::Kilobytes);
    }

    #[test]
    fn just_under_megabyte_threshold() {
        // Stays in kB even though it rounds to 1000.00.
        let size = human_readable_bytes(999_999);
        assert_eq!(size.value, "1000.00");
        assert_eq!(size.unit, SizeUnit::Kilobytes);
    }

    #[test]
    fn exactly_one_megabyte() {
        let size = human_readable_bytes(1_000_000);
        assert_eq!(size.value, "1.00");
        assert_eq!(size.unit, SizeUnit::Megabytes);
    }

    #[test]
    fn kilobytes_round_to_two_places() {
        let size = human_readable_bytes(1234);
        assert_eq!(size.value, "1.23");
        assert_eq!(size.unit, SizeUnit::Kilobytes);

        let size = human_readable_bytes(1750);
        assert_eq!(size.value, "1.75");
    }

    #[test]
    fn large_megabyte_count() {
        let size = human_readable_bytes(2_500_000_000);
        assert_eq!(size.value, "2500.00");
        assert_eq!(size.unit, SizeUnit::Megabytes);
    }

    #[test]
    fn unit_is_monotonic_across_thresholds() {
        let samples: [u64; 8] = [
            0,
            1,
            999,
            1000,
            500_000,
            999_999,
            1_000_000,
            10_000_000_000,
        ];
        let units: Vec<SizeUnit> = samples
            .iter()
            .map(|&b| human_readable_bytes(b).unit)
            .collect();
        assert!(units.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn display_appends_unit_symbol() {
        assert_eq!(human_readable_bytes(999).to_string(), "999 bytes");
        assert_eq!(human_readable_bytes(1000).to_string(), "1.00 kB");
        assert_eq!(human_readable_bytes(1_000_000).to_string(), "1.00 MB");
    }
}
