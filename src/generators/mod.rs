//! Random text tables the activities draw from.

pub mod code_analyzer;
pub mod data_processing;
pub mod jargon;
pub mod metrics;
pub mod network_activity;
pub mod system_monitoring;

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;
    use crate::{config::DevelopmentType, rng::Rng};

    #[test]
    fn test_every_dev_type_has_text() {
        let mut rng = Rng::seeded(99);

        for &dev_type in DevelopmentType::value_variants() {
            assert!(!data_processing::data_operation(&mut rng, dev_type).is_empty());
            assert!(!data_processing::data_sub_operation(&mut rng, dev_type).is_empty());
            assert!(!data_processing::data_details(&mut rng, dev_type).is_empty());
            assert!(!code_analyzer::code_issue(&mut rng, dev_type).is_empty());
            assert!(!metrics::performance_metric(&mut rng, dev_type).is_empty());
            assert!(!metrics::metric_unit(&mut rng, dev_type).is_empty());
            assert!(!metrics::optimization_recommendation(&mut rng, dev_type).is_empty());
            assert!(!network_activity::endpoint(&mut rng, dev_type).is_empty());
            assert!(!network_activity::request_details(&mut rng, dev_type).is_empty());
        }
    }

    #[test]
    fn test_filename_shape() {
        let mut rng = Rng::seeded(12);

        for &dev_type in DevelopmentType::value_variants() {
            let name = code_analyzer::filename(&mut rng, dev_type);
            assert!(name.contains('/'), "{name} should have a directory");
            assert!(name.contains('.'), "{name} should have an extension");
        }
    }

    #[test]
    fn test_complexity_metric_has_number() {
        let mut rng = Rng::seeded(21);
        for _ in 0..30 {
            let metric = code_analyzer::complexity_metric(&mut rng);
            assert!(metric.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_system_text_not_empty() {
        let mut rng = Rng::seeded(5);
        assert!(!system_monitoring::system_event(&mut rng).is_empty());
        assert!(
            system_monitoring::system_recommendation(&mut rng).starts_with("Recommendation:")
        );
    }
}
