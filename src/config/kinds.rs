use clap::ValueEnum;
use derive_more::Display;
use serde::Deserialize;

/// Kind of development the session pretends to be doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevelopmentType {
    #[default]
    Backend,
    Frontend,
    Fullstack,
    #[display("Data Science")]
    DataScience,
    #[display("DevOps")]
    #[value(name = "devops")]
    #[serde(rename = "devops")]
    DevOps,
    Blockchain,
    #[display("Machine Learning")]
    MachineLearning,
    #[display("Systems Programming")]
    SystemsProgramming,
    #[display("Game Development")]
    GameDevelopment,
    Security,
}

/// How much technical jargon to sprinkle into summaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum, Display, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum JargonLevel {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

/// How busy the output looks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum, Display, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

impl Complexity {
    /// Activities run per loop iteration.
    #[must_use]
    pub fn activity_count(self) -> usize {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Extreme => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_type_display() {
        assert_eq!(DevelopmentType::Backend.to_string(), "Backend");
        assert_eq!(DevelopmentType::DataScience.to_string(), "Data Science");
        assert_eq!(DevelopmentType::DevOps.to_string(), "DevOps");
    }

    #[test]
    fn test_development_type_cli_names() {
        let devops = DevelopmentType::from_str("devops", false).unwrap();
        assert_eq!(devops, DevelopmentType::DevOps);

        let ml = DevelopmentType::from_str("machine-learning", false).unwrap();
        assert_eq!(ml, DevelopmentType::MachineLearning);
    }

    #[test]
    fn test_jargon_ordering() {
        assert!(JargonLevel::Low < JargonLevel::Medium);
        assert!(JargonLevel::Extreme >= JargonLevel::Medium);
    }

    #[test]
    fn test_complexity_activity_count() {
        assert_eq!(Complexity::Low.activity_count(), 1);
        assert_eq!(Complexity::Medium.activity_count(), 2);
        assert_eq!(Complexity::High.activity_count(), 3);
        assert_eq!(Complexity::Extreme.activity_count(), 4);
    }
}
