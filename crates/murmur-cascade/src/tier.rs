//! Escalation tiers and their model bindings.

use std::fmt;

/// Escalation level for one transcription attempt.
///
/// Preference order is `Primary`, then `Secondary`, then `Tertiary`;
/// escalation proceeds strictly downward and never back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// First choice, highest fidelity.
    Primary,
    /// First fallback.
    Secondary,
    /// Last-resort fallback.
    Tertiary,
}

impl Tier {
    /// All tiers in escalation order.
    pub const ALL: [Tier; 3] = [Tier::Primary, Tier::Secondary, Tier::Tertiary];

    /// The next tier down, or `None` at the bottom of the chain.
    #[must_use]
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Primary => Some(Tier::Secondary),
            Tier::Secondary => Some(Tier::Tertiary),
            Tier::Tertiary => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Primary => "primary",
            Tier::Secondary => "secondary",
            Tier::Tertiary => "tertiary",
        };
        f.write_str(name)
    }
}

/// Immutable binding of each tier to a remote model identifier.
///
/// Constructed once at startup from configuration and passed by
/// reference into the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierModels {
    /// Model serving the `Primary` tier.
    pub primary: String,
    /// Model serving the `Secondary` tier.
    pub secondary: String,
    /// Model serving the `Tertiary` tier.
    pub tertiary: String,
}

impl TierModels {
    /// Model identifier bound to `tier`.
    #[must_use]
    pub fn model_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::Primary => &self.primary,
            Tier::Secondary => &self.secondary,
            Tier::Tertiary => &self.tertiary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models() -> TierModels {
        TierModels {
            primary: "model-a".into(),
            secondary: "model-b".into(),
            tertiary: "model-c".into(),
        }
    }

    #[test]
    fn escalation_order_is_strictly_downward() {
        assert_eq!(Tier::Primary.next(), Some(Tier::Secondary));
        assert_eq!(Tier::Secondary.next(), Some(Tier::Tertiary));
        assert_eq!(Tier::Tertiary.next(), None);
    }

    #[test]
    fn all_matches_next_chain() {
        let mut walked = vec![Tier::ALL[0]];
        while let Some(next) = walked.last().copied().and_then(Tier::next) {
            walked.push(next);
        }
        assert_eq!(walked, Tier::ALL);
    }

    #[test]
    fn display_is_stable_lowercase() {
        assert_eq!(Tier::Primary.to_string(), "primary");
        assert_eq!(Tier::Secondary.to_string(), "secondary");
        assert_eq!(Tier::Tertiary.to_string(), "tertiary");
    }

    #[test]
    fn model_for_maps_each_tier() {
        let m = models();
        assert_eq!(m.model_for(Tier::Primary), "model-a");
        assert_eq!(m.model_for(Tier::Secondary), "model-b");
        assert_eq!(m.model_for(Tier::Tertiary), "model-c");
    }
}
