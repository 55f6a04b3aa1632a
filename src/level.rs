use std::fmt;

/// Severity attached to every diagnostic record.
///
/// Only `Panic` changes control flow: records at that level are always
/// followed by process termination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
    Panic,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 4] = [Level::Info, Level::Warn, Level::Error, Level::Panic];

    /// The label printed between the brackets of a record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
            Level::Panic => "Panic",
        }
    }

    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Level::Panic)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_output_format() {
        assert_eq!(Level::Info.as_str(), "Info");
        assert_eq!(Level::Warn.as_str(), "Warn");
        assert_eq!(Level::Error.as_str(), "Error");
        assert_eq!(Level::Panic.as_str(), "Panic");
    }

    #[test]
    fn test_display_agrees_with_as_str() {
        for level in Level::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn test_only_panic_is_fatal() {
        let fatal: Vec<Level> = Level::ALL.into_iter().filter(|l| l.is_fatal()).collect();
        assert_eq!(fatal, vec![Level::Panic]);
    }

    #[test]
    fn test_all_is_ordered_by_severity() {
        let mut sorted = Level::ALL;
        sorted.sort();
        assert_eq!(sorted, Level::ALL);
        assert!(Level::Info < Level::Panic);
    }
}
