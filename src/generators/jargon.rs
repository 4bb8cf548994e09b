//! Summary lines that sound more impressive the higher the jargon level.

use crate::{
    config::{DevelopmentType, JargonLevel},
    rng::Rng,
};

const AMPLIFIERS: &[&str] = &[
    "leveraging zero-copy semantics",
    "with eventually consistent guarantees",
    "across a polyglot microservice mesh",
    "using a lock-free event-sourced core",
    "through declarative intent-based orchestration",
    "with idempotent saga compensation",
];

const EXTREME_TAILS: &[&str] = &[
    "while preserving Byzantine fault tolerance",
    "via a self-healing hexagonal architecture",
    "under formally verified linearizability",
    "with quantum-resistant provenance tracking",
    "using neuro-symbolic feedback loops",
];

fn domain_terms(dev_type: DevelopmentType) -> &'static [&'static str] {
    match dev_type {
        DevelopmentType::Backend => &[
            "service mesh",
            "connection pooling",
            "CQRS read models",
            "API gateway",
        ],
        DevelopmentType::Frontend => &[
            "virtual DOM reconciliation",
            "hydration boundaries",
            "atomic CSS",
            "render props",
        ],
        DevelopmentType::Fullstack => &[
            "isomorphic rendering",
            "edge functions",
            "BFF layer",
            "typed RPC contracts",
        ],
        DevelopmentType::DataScience => &[
            "feature stores",
            "columnar storage",
            "Bayesian priors",
            "stratified sampling",
        ],
        DevelopmentType::DevOps => &[
            "GitOps reconciliation",
            "immutable infrastructure",
            "blue-green rollouts",
            "policy as code",
        ],
        DevelopmentType::Blockchain => &[
            "zk-rollups",
            "merkle patricia tries",
            "optimistic finality",
            "sharded consensus",
        ],
        DevelopmentType::MachineLearning => &[
            "attention heads",
            "gradient checkpointing",
            "embedding spaces",
            "model distillation",
        ],
        DevelopmentType::SystemsProgramming => &[
            "NUMA-aware allocation",
            "memory fences",
            "io_uring submission queues",
            "RCU grace periods",
        ],
        DevelopmentType::GameDevelopment => &[
            "entity component systems",
            "deferred shading",
            "spatial hashing",
            "frame pacing",
        ],
        DevelopmentType::Security => &[
            "zero-trust segmentation",
            "hardware enclaves",
            "threat modeling",
            "key attestation",
        ],
    }
}

fn amplify(rng: &mut Rng, base: String, level: JargonLevel) -> String {
    match level {
        JargonLevel::Low | JargonLevel::Medium => base,
        JargonLevel::High => format!("{base} {}", rng.pick(AMPLIFIERS)),
        JargonLevel::Extreme => format!(
            "{base} {} {}",
            rng.pick(AMPLIFIERS),
            rng.pick(EXTREME_TAILS)
        ),
    }
}

fn phrase(
    rng: &mut Rng,
    dev_type: DevelopmentType,
    level: JargonLevel,
    openers: &[&str],
) -> String {
    let opener = rng.pick(openers);
    let term = rng.pick(domain_terms(dev_type));
    amplify(rng, format!("{opener} {term}"), level)
}

pub fn code_jargon(rng: &mut Rng, dev_type: DevelopmentType, level: JargonLevel) -> String {
    phrase(
        rng,
        dev_type,
        level,
        &[
            "Refactored toward",
            "Reduced cyclomatic coupling around",
            "Aligned module boundaries with",
            "Hardened invariants in",
        ],
    )
}

pub fn performance_jargon(rng: &mut Rng, dev_type: DevelopmentType, level: JargonLevel) -> String {
    phrase(
        rng,
        dev_type,
        level,
        &[
            "Tail latency dominated by",
            "Throughput ceiling traced to",
            "Hot path amortized through",
            "Cache locality improved via",
        ],
    )
}

pub fn data_jargon(rng: &mut Rng, dev_type: DevelopmentType, level: JargonLevel) -> String {
    phrase(
        rng,
        dev_type,
        level,
        &[
            "Data lineage reconciled through",
            "Backpressure absorbed by",
            "Schema evolution handled with",
            "Batch windows realigned around",
        ],
    )
}

pub fn network_jargon(rng: &mut Rng, dev_type: DevelopmentType, level: JargonLevel) -> String {
    phrase(
        rng,
        dev_type,
        level,
        &[
            "Connection reuse tuned for",
            "Retry budget rebalanced across",
            "Head-of-line blocking mitigated by",
            "Traffic shaping coordinated with",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_jargon_is_short() {
        let mut rng = Rng::seeded(1);
        let line = code_jargon(&mut rng, DevelopmentType::Backend, JargonLevel::Medium);
        assert!(!AMPLIFIERS.iter().any(|a| line.contains(a)));
        assert!(domain_terms(DevelopmentType::Backend).iter().any(|t| line.ends_with(t)));
    }

    #[test]
    fn test_extreme_jargon_stacks_phrases() {
        let mut rng = Rng::seeded(2);
        let line = network_jargon(&mut rng, DevelopmentType::Security, JargonLevel::Extreme);
        assert!(AMPLIFIERS.iter().any(|a| line.contains(a)));
        assert!(EXTREME_TAILS.iter().any(|t| line.ends_with(t)));
    }

    #[test]
    fn test_high_jargon_has_one_amplifier() {
        let mut rng = Rng::seeded(3);
        let line = data_jargon(&mut rng, DevelopmentType::DataScience, JargonLevel::High);
        assert!(AMPLIFIERS.iter().any(|a| line.ends_with(a)));
        assert!(!EXTREME_TAILS.iter().any(|t| line.contains(t)));
    }
}
