//! Heuristic strength scoring
//!
//! The score depends on the config only, never on the generated text, so it
//! can be recomputed on every frame.

use serde::Serialize;

use crate::types::GeneratorConfig;

/// Five-level strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Map a point count (0-5) to a level
    pub fn from_points(points: u8) -> Self {
        match points {
            0 | 1 => Strength::Weak,
            2 => Strength::Fair,
            3 => Strength::Good,
            4 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// Fill percentage of the strength bar
    pub fn percent(&self) -> u16 {
        match self {
            Strength::Weak => 20,
            Strength::Fair => 40,
            Strength::Good => 60,
            Strength::Strong => 80,
            Strength::VeryStrong => 100,
        }
    }

    /// Frontend-neutral colour name; the TUI maps it onto its palette
    pub fn color_tag(&self) -> &'static str {
        match self {
            Strength::Weak => "red",
            Strength::Fair => "orange",
            Strength::Good => "yellow",
            Strength::Strong => "lime",
            Strength::VeryStrong => "green",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived strength display values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthInfo {
    pub strength: Strength,
    pub points: u8,
    pub label: &'static str,
    pub color_tag: &'static str,
    pub percent: u16,
}

/// Count heuristic points for a config (0-5)
pub fn points(config: &GeneratorConfig) -> u8 {
    let length = config.length();
    [
        length >= 8,
        length >= 12,
        length >= 16,
        config.numbers,
        config.symbols,
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count() as u8
}

/// Score a config
pub fn score(config: &GeneratorConfig) -> StrengthInfo {
    let points = points(config);
    let strength = Strength::from_points(points);
    StrengthInfo {
        strength,
        points,
        label: strength.label(),
        color_tag: strength.color_tag(),
        percent: strength.percent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_config_is_weak() {
        let info = score(&GeneratorConfig::new(6, false, false));
        assert_eq!(info.points, 0);
        assert_eq!(info.label, "Weak");
        assert_eq!(info.percent, 20);
    }

    #[test]
    fn test_length_eight_alone_is_still_weak() {
        let info = score(&GeneratorConfig::new(8, false, false));
        assert_eq!(info.points, 1);
        assert_eq!(info.strength, Strength::Weak);
    }

    #[test]
    fn test_length_twelve_with_numbers_is_good() {
        let info = score(&GeneratorConfig::new(12, true, false));
        assert_eq!(info.points, 3);
        assert_eq!(info.label, "Good");
        assert_eq!(info.percent, 60);
        assert_eq!(info.color_tag, "yellow");
    }

    #[test]
    fn test_everything_enabled_is_very_strong() {
        let info = score(&GeneratorConfig::new(16, true, true));
        assert_eq!(info.points, 5);
        assert_eq!(info.label, "Very Strong");
        assert_eq!(info.percent, 100);
        assert_eq!(info.color_tag, "green");
    }

    #[test]
    fn test_fair_and_strong() {
        assert_eq!(score(&GeneratorConfig::new(6, true, true)).strength, Strength::Fair);
        assert_eq!(score(&GeneratorConfig::new(16, true, false)).strength, Strength::Strong);
        assert_eq!(score(&GeneratorConfig::new(100, false, true)).percent, 80);
    }

    #[test]
    fn test_score_is_pure() {
        let config = GeneratorConfig::new(14, false, true);
        let first = score(&config);
        for _ in 0..10 {
            assert_eq!(score(&config), first);
        }
    }

    #[test]
    fn test_from_points_saturates() {
        assert_eq!(Strength::from_points(0), Strength::Weak);
        assert_eq!(Strength::from_points(9), Strength::VeryStrong);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Strength::Weak < Strength::Fair);
        assert!(Strength::Strong < Strength::VeryStrong);
    }
}
