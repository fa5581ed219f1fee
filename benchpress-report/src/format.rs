//! Unit Formatting
//!
//! Magnitude-aware formatting for the two quantities shown in a report:
//! durations (nanoseconds) and memory peaks (bytes).
//!
//! The thresholds are inclusive (`>=`) and the precision is fixed, since both
//! are visible in every rendered table.

/// Nanoseconds per millisecond
const NS_PER_MS: f64 = 1_000_000.0;
/// Nanoseconds per microsecond
const NS_PER_US: f64 = 1_000.0;
/// Bytes per mebibyte
const BYTES_PER_MB: f64 = 1_048_576.0;
/// Bytes per kibibyte
const BYTES_PER_KB: f64 = 1_024.0;

/// Format a duration given in nanoseconds.
///
/// - `>= 1ms` renders as milliseconds with two decimals (`1.50ms`)
/// - `>= 1μs` renders as microseconds with two decimals (`1.00μs`)
/// - anything smaller renders as whole nanoseconds (`999ns`)
pub fn format_time(nanoseconds: f64) -> String {
    if nanoseconds >= NS_PER_MS {
        format!("{:.2}ms", nanoseconds / NS_PER_MS)
    } else if nanoseconds >= NS_PER_US {
        format!("{:.2}μs", nanoseconds / NS_PER_US)
    } else {
        format!("{:.0}ns", nanoseconds)
    }
}

/// Format a memory amount given in bytes, using powers of 1024.
///
/// - `>= 1MB` renders as `1.00MB`
/// - `>= 1KB` renders as `1.00KB`
/// - anything smaller renders as whole bytes (`1023B`)
pub fn format_memory(bytes: f64) -> String {
    if bytes >= BYTES_PER_MB {
        format!("{:.2}MB", bytes / BYTES_PER_MB)
    } else if bytes >= BYTES_PER_KB {
        format!("{:.2}KB", bytes / BYTES_PER_KB)
    } else {
        format!("{:.0}B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_nanoseconds() {
        assert_eq!(format_time(0.0), "0ns");
        assert_eq!(format_time(1.0), "1ns");
        assert_eq!(format_time(999.0), "999ns");
    }

    #[test]
    fn test_format_time_microseconds() {
        assert_eq!(format_time(1_000.0), "1.00μs");
        assert_eq!(format_time(1_500.0), "1.50μs");
        // Rounds up inside the microsecond band rather than switching units
        assert_eq!(format_time(999_999.0), "1000.00μs");
    }

    #[test]
    fn test_format_time_milliseconds() {
        assert_eq!(format_time(1_000_000.0), "1.00ms");
        assert_eq!(format_time(1_500_000.0), "1.50ms");
        assert_eq!(format_time(2_500_000_000.0), "2500.00ms");
    }

    #[test]
    fn test_format_time_suffix_and_precision() {
        for ns in [0.0, 12.0, 999.4, 1_000.0, 54_321.0, 1_000_000.0, 9.87e9] {
            let s = format_time(ns);
            if let Some(num) = s.strip_suffix("ns") {
                assert!(!num.contains('.'), "{s}");
            } else {
                let num = s
                    .strip_suffix("μs")
                    .or_else(|| s.strip_suffix("ms"))
                    .unwrap_or_else(|| panic!("unexpected unit in {s}"));
                let (_, decimals) = num.split_once('.').expect("two decimals");
                assert_eq!(decimals.len(), 2, "{s}");
            }
        }
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory(0.0), "0B");
        assert_eq!(format_memory(1_023.0), "1023B");
        assert_eq!(format_memory(1_024.0), "1.00KB");
        assert_eq!(format_memory(1_536.0), "1.50KB");
        assert_eq!(format_memory(1_048_576.0), "1.00MB");
        assert_eq!(format_memory(2_097_152.0), "2.00MB");
    }

    #[test]
    fn test_format_memory_boundaries_inclusive() {
        assert!(format_memory(1_023.99).ends_with('B'));
        assert!(!format_memory(1_023.99).ends_with("KB"));
        assert!(format_memory(1_048_575.0).ends_with("KB"));
        assert!(format_memory(1_048_576.0).ends_with("MB"));
    }
}
