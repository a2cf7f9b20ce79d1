//! Guess selection policies
//!
//! Once a score has narrowed the possible solutions to two or more, the
//! policy decides what to play next. A single remaining solution is always
//! played directly, whatever the policy.

use std::fmt;

/// How the next guess is picked from the remaining possibilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPolicy {
    /// Play the first remaining possible solution
    FirstOne,
    /// Play a uniformly random remaining possible solution
    Random,
    /// Knuth's minimax over every unplayed codeword
    #[default]
    Knuth,
}

impl GuessPolicy {
    pub const ALL: [Self; 3] = [Self::FirstOne, Self::Random, Self::Knuth];

    /// Create a policy from its name
    ///
    /// Supported names: "first-one", "random", "knuth" (or "minimax").
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first-one" | "first" => Some(Self::FirstOne),
            "random" => Some(Self::Random),
            "knuth" | "minimax" => Some(Self::Knuth),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstOne => "first-one",
            Self::Random => "random",
            Self::Knuth => "knuth",
        }
    }
}

impl fmt::Display for GuessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trip() {
        for policy in GuessPolicy::ALL {
            assert_eq!(GuessPolicy::from_name(policy.name()), Some(policy));
        }
    }

    #[test]
    fn aliases_and_unknown_names() {
        assert_eq!(GuessPolicy::from_name("minimax"), Some(GuessPolicy::Knuth));
        assert_eq!(GuessPolicy::from_name("first"), Some(GuessPolicy::FirstOne));
        assert_eq!(GuessPolicy::from_name("entropy"), None);
    }

    #[test]
    fn knuth_is_default() {
        assert_eq!(GuessPolicy::default(), GuessPolicy::Knuth);
    }
}
