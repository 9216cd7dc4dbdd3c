use time::UtcOffset;

/// Build a UtcOffset from a fractional number of hours
///
/// Returns `None` for non-finite input or anything outside ±25:59:59.
///
/// # Examples
///
/// ```
/// use logger::utc_offset_from_hours;
///
/// let jakarta = utc_offset_from_hours(7.0).unwrap();   // UTC+7
/// let nepal = utc_offset_from_hours(5.75).unwrap();    // UTC+5:45
/// let marquesas = utc_offset_from_hours(-9.5).unwrap(); // UTC-9:30
/// assert_eq!(nepal.as_hms(), (5, 45, 0));
/// assert_eq!(marquesas.as_hms(), (-9, -30, 0));
/// assert!(utc_offset_from_hours(f64::NAN).is_none());
/// ```
pub fn utc_offset_from_hours(hours: f64) -> Option<UtcOffset> {
    if !hours.is_finite() {
        return None;
    }

    let seconds = (hours * 3600.0).round();
    if seconds < f64::from(i32::MIN) || seconds > f64::from(i32::MAX) {
        return None;
    }

    UtcOffset::from_whole_seconds(seconds as i32).ok()
}

/// Helper function to create a UtcOffset from hours and minutes
///
/// # Examples
///
/// ```
/// use logger::utc_offset_hms;
///
/// let india = utc_offset_hms(5, 30, 0).unwrap();     // UTC+5:30 (India)
/// let chatham = utc_offset_hms(12, 45, 0).unwrap();  // UTC+12:45 (Chatham Islands)
/// assert!(utc_offset_hms(30, 0, 0).is_none());
/// ```
pub fn utc_offset_hms(hours: i8, minutes: i8, seconds: i8) -> Option<UtcOffset> {
    UtcOffset::from_hms(hours, minutes, seconds).ok()
}
