//! Priority module - urgency levels for suggested tasks

/// Priority of a suggested task
///
/// Variants are declared from most to least urgent. Inference checks them in
/// exactly this order, so a span matching several levels resolves to the most
/// urgent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// Must be handled immediately
    Critical,

    /// Important, ahead of normal work
    High,

    /// Normal work (the default when nothing is inferred)
    #[default]
    Medium,

    /// Optional or minor work
    Low,
}

impl Priority {
    /// All priorities in evaluation order
    pub const ORDERED: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Get the priority name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_evaluation_order() {
        assert_eq!(Priority::ORDERED[0], Priority::Critical);
        assert_eq!(Priority::ORDERED[3], Priority::Low);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(Priority::Critical.as_str(), "CRITICAL");
        assert_eq!(Priority::Low.to_string(), "LOW");
    }
}
