/// Whole hours, minutes and seconds of a fractional hour value, each floored.
pub fn split_hours(decimal_hours: f64) -> (i64, i64, i64) {
    let hours = decimal_hours.floor();
    let minutes_frac = (decimal_hours - hours) * 60.0;
    let minutes = minutes_frac.floor();
    let seconds = ((minutes_frac - minutes) * 60.0).floor();
    (hours as i64, minutes as i64, seconds as i64)
}

/// `"HH:MM:SS AM"` style 12-hour clock. Inputs outside [0, 24) are not wrapped.
pub fn format_clock(decimal_hours: f64) -> String {
    let (hours, minutes, seconds) = split_hours(decimal_hours);
    let meridiem = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = if hours > 12 {
        hours - 12
    } else if hours == 0 {
        12
    } else {
        hours
    };
    format!("{display_hours:02}:{minutes:02}:{seconds:02} {meridiem}")
}

/// Elapsed `"HH:MM:SS"` between two fractional hour values, truncated to whole seconds.
pub fn format_duration(a: f64, b: f64) -> String {
    let seconds_a = (a * 3600.0).floor() as i64;
    let seconds_b = (b * 3600.0).floor() as i64;
    let diff_hours = seconds_a.abs_diff(seconds_b) as f64 / 3600.0;
    let (hours, minutes, seconds) = split_hours(diff_hours);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
