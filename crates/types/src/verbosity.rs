//! Log verbosity levels

use std::fmt;

/// Minimum severity a logger emits, ordered `Debug < Info < Warn < Error`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Verbosity {
    /// Every level, least severe first
    pub const ALL: [Verbosity; 4] = [
        Verbosity::Debug,
        Verbosity::Info,
        Verbosity::Warn,
        Verbosity::Error,
    ];

    /// Strict, case-sensitive lookup
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "debug" => Some(Verbosity::Debug),
            "info" => Some(Verbosity::Info),
            "warn" => Some(Verbosity::Warn),
            "error" => Some(Verbosity::Error),
            _ => None,
        }
    }

    /// Total lookup: anything unrecognised maps to `Info`
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Debug => "debug",
            Verbosity::Info => "info",
            Verbosity::Warn => "warn",
            Verbosity::Error => "error",
        }
    }

    /// Comma separated list of the accepted names
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(Verbosity::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_known_names() {
        for level in Verbosity::ALL {
            assert_eq!(Verbosity::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Verbosity::parse("DEBUG"), None);
        assert_eq!(Verbosity::parse("Info"), None);
        assert_eq!(Verbosity::parse(" info"), None);
        assert_eq!(Verbosity::parse("trace"), None);
        assert_eq!(Verbosity::parse(""), None);
    }

    #[test]
    fn test_from_name_is_total() {
        assert_eq!(Verbosity::from_name("debug"), Verbosity::Debug);
        assert_eq!(Verbosity::from_name("warn"), Verbosity::Warn);
        assert_eq!(Verbosity::from_name("unknown"), Verbosity::Info);
        assert_eq!(Verbosity::from_name("verbose"), Verbosity::Info);
    }

    #[test]
    fn test_ordering() {
        assert!(Verbosity::Debug < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Warn);
        assert!(Verbosity::Warn < Verbosity::Error);

        let mut sorted = Verbosity::ALL;
        sorted.sort();
        assert_eq!(sorted, Verbosity::ALL);
    }

    #[test]
    fn test_allowed_values() {
        assert_eq!(Verbosity::allowed_values(), "debug, info, warn, error");
    }

    #[test]
    fn test_display_matches_name() {
        for level in Verbosity::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }
}
