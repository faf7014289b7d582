use chrono::{Local, Timelike};

/// Sub-line shown under the banner headline.
pub const TAGLINE: &str = "Ready to make smarter farming decisions today?";

/// Salutation for a 24-hour clock hour: morning before 12, afternoon
/// before 17, evening otherwise.
pub fn salutation(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Banner headline for a user at a given hour, e.g. `Good Morning, Farmer!`.
pub fn headline(user_name: &str, hour: u32) -> String {
    format!("{}, {}!", salutation(hour), user_name)
}

/// Banner headline for the current local time.
pub fn headline_now(user_name: &str) -> String {
    headline(user_name, Local::now().hour())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cropcast_core::config::GeneralConfig;

    #[test]
    fn test_salutation_boundaries() {
        assert_eq!(salutation(0), "Good Morning");
        assert_eq!(salutation(11), "Good Morning");
        assert_eq!(salutation(12), "Good Afternoon");
        assert_eq!(salutation(16), "Good Afternoon");
        assert_eq!(salutation(17), "Good Evening");
        assert_eq!(salutation(23), "Good Evening");
    }

    #[test]
    fn test_headline_format() {
        assert_eq!(headline("Farmer", 9), "Good Morning, Farmer!");
        assert_eq!(headline("Asha", 14), "Good Afternoon, Asha!");
        assert_eq!(headline("Ravi", 20), "Good Evening, Ravi!");
    }

    #[test]
    fn test_headline_uses_configured_default_name() {
        let config = GeneralConfig::default();
        assert_eq!(headline(&config.user_name, 9), "Good Morning, Farmer!");
    }

    #[test]
    fn test_headline_now_contains_name() {
        let line = headline_now("Farmer");
        assert!(line.starts_with("Good "));
        assert!(line.ends_with(", Farmer!"));
    }

    #[test]
    fn test_tagline() {
        assert_eq!(TAGLINE, "Ready to make smarter farming decisions today?");
    }
}
