//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output. Colors are applied only
//! when the target stream supports them; call [`set_color`] to force them
//! off.

use kitchonomy_core::{ExpiryTier, QuantityTier};
use owo_colors::{OwoColorize, Stream};

/// Enable or disable colored output for the whole process.
///
/// `true` restores automatic detection (terminal and `NO_COLOR`).
pub fn set_color(enabled: bool) {
    if enabled {
        owo_colors::unset_override();
    } else {
        owo_colors::set_override(false);
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!(
            "{} {}",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            message
        );
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stream::Stderr, |t| t.red()),
            message
        );
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!(
            "{} {}",
            "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
            message
        );
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!(
            "{} {}",
            "ℹ".if_supports_color(Stream::Stdout, |t| t.blue()),
            message
        );
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.if_supports_color(Stream::Stdout, |t| t.bold()));
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Badge for a quantity tier, e.g. `[critical]`.
pub fn quantity_badge(tier: QuantityTier) -> String {
    let label = format!("[{}]", tier.as_str());
    match tier {
        QuantityTier::Critical => label.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        QuantityTier::Low => label.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
        QuantityTier::Ok => label.if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
    }
}

/// Badge for an expiry tier. Items without a date get a dimmed dash.
pub fn expiry_badge(tier: ExpiryTier) -> String {
    match tier {
        ExpiryTier::Expired => "expired".if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        ExpiryTier::ExpiringSoon => "expiring soon"
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
        ExpiryTier::Fresh => "fresh".if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
        ExpiryTier::None => "-".if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string(),
    }
}

/// A fixed-width text meter for a 0-100 percentage.
pub fn meter(percentage: f64, width: usize) -> String {
    let ratio = if percentage.is_finite() {
        (percentage / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage, dropping a zero fraction.
pub fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{:.0}%", percentage)
    } else {
        format!("{:.1}%", percentage)
    }
}

/// Describe a signed day distance to an expiry date.
pub fn format_days_left(days: i64) -> String {
    match days {
        d if d < -1 => format!("expired {} days ago", -d),
        -1 => "expired yesterday".to_string(),
        0 => "expires today".to_string(),
        1 => "expires tomorrow".to_string(),
        d => format!("expires in {} days", d),
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_rounds_to_width() {
        assert_eq!(meter(37.5, 8), "[███░░░░░]");
        assert_eq!(meter(0.0, 4), "[░░░░]");
        assert_eq!(meter(100.0, 4), "[████]");
    }

    #[test]
    fn test_meter_clamps_out_of_range() {
        assert_eq!(meter(140.0, 4), "[████]");
        assert_eq!(meter(-3.0, 4), "[░░░░]");
        assert_eq!(meter(f64::NAN, 2), "[░░]");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(37.5), "37.5%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_format_days_left() {
        assert_eq!(format_days_left(-3), "expired 3 days ago");
        assert_eq!(format_days_left(-1), "expired yesterday");
        assert_eq!(format_days_left(0), "expires today");
        assert_eq!(format_days_left(1), "expires tomorrow");
        assert_eq!(format_days_left(3), "expires in 3 days");
    }

    #[test]
    fn test_badges_without_color() {
        set_color(false);
        assert_eq!(quantity_badge(QuantityTier::Critical), "[critical]");
        assert_eq!(expiry_badge(ExpiryTier::ExpiringSoon), "expiring soon");
        assert_eq!(expiry_badge(ExpiryTier::None), "-");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "item", "items"), "1 item");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "item", "items"), "5 items");
    }
}
