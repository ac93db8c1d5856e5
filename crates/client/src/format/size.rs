//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Shown when Everything reports no usable size.
pub const NO_SIZE: &str = "N/A";

/// Shown for folders instead of a size.
pub const FOLDER_SIZE: &str = "(folder)";

/// Format Everything's decimal size text with two decimals and a binary unit.
///
/// Folders always render as `(folder)`. Missing, unparseable, and zero sizes
/// render as `N/A`. Values past the terabyte range stay in TB.
pub fn format_size(size: Option<&str>, is_folder: bool) -> String {
    if is_folder {
        return FOLDER_SIZE.to_string();
    }

    let bytes = match size.and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(bytes) if bytes > 0 => bytes,
        _ => return NO_SIZE.to_string(),
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(Some("1"), false), "1.00 bytes");
        assert_eq!(format_size(Some("1023"), false), "1023.00 bytes");
        assert_eq!(format_size(Some("1024"), false), "1.00 KB");
        assert_eq!(format_size(Some("1536"), false), "1.50 KB");
        assert_eq!(format_size(Some("1048576"), false), "1.00 MB");
        assert_eq!(format_size(Some("1073741824"), false), "1.00 GB");
        assert_eq!(format_size(Some("1099511627776"), false), "1.00 TB");
    }

    #[test]
    fn test_capped_at_terabytes() {
        assert_eq!(format_size(Some("1125899906842624"), false), "1024.00 TB");
    }

    #[test]
    fn test_missing_or_unparseable() {
        assert_eq!(format_size(None, false), "N/A");
        assert_eq!(format_size(Some(""), false), "N/A");
        assert_eq!(format_size(Some("0"), false), "N/A");
        assert_eq!(format_size(Some("-12"), false), "N/A");
        assert_eq!(format_size(Some("big"), false), "N/A");
    }

    #[test]
    fn test_folder_ignores_size() {
        for size in [None, Some("0"), Some("4096"), Some("garbage")] {
            assert_eq!(format_size(size, true), "(folder)");
        }
    }
}
