/// Render a minute count as `"{h}h {m}m"`.
///
/// Fractional input (an average) is rounded to whole minutes before it is
/// split, so 479.6 reads "8h 0m" rather than "7h 60m".
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as u64;
    format!("{}h {}m", total / 60, total % 60)
}
