use crate::{config::DevelopmentType, rng::Rng};

struct SourceTree {
    dirs: &'static [&'static str],
    stems: &'static [&'static str],
    extensions: &'static [&'static str],
}

fn source_tree(dev_type: DevelopmentType) -> SourceTree {
    match dev_type {
        DevelopmentType::Backend => SourceTree {
            dirs: &[
                "src/api",
                "src/services",
                "src/handlers",
                "src/repository",
                "src/middleware",
            ],
            stems: &[
                "user_controller",
                "auth_service",
                "payment_gateway",
                "order_repository",
                "rate_limiter",
                "session_store",
            ],
            extensions: &["rs", "go", "java", "py"],
        },
        DevelopmentType::Frontend => SourceTree {
            dirs: &[
                "src/components",
                "src/hooks",
                "src/pages",
                "src/store",
                "src/styles",
            ],
            stems: &[
                "NavigationBar",
                "UserProfile",
                "useInfiniteScroll",
                "CheckoutForm",
                "ThemeProvider",
                "DataTable",
            ],
            extensions: &["tsx", "jsx", "ts", "vue"],
        },
        DevelopmentType::Fullstack => SourceTree {
            dirs: &[
                "client/src",
                "server/src",
                "shared/types",
                "server/routes",
                "client/api",
            ],
            stems: &[
                "auth",
                "session_sync",
                "graphql_schema",
                "dashboard",
                "validation",
                "websocket_bridge",
            ],
            extensions: &["ts", "tsx", "js", "rs"],
        },
        DevelopmentType::DataScience => SourceTree {
            dirs: &["notebooks", "pipelines", "etl", "analysis", "features"],
            stems: &[
                "feature_engineering",
                "data_cleaning",
                "cohort_analysis",
                "time_series",
                "outlier_detection",
            ],
            extensions: &["py", "ipynb", "sql", "r"],
        },
        DevelopmentType::DevOps => SourceTree {
            dirs: &[
                "terraform/modules",
                "k8s/manifests",
                "ansible/roles",
                ".github/workflows",
                "helm/charts",
            ],
            stems: &[
                "vpc",
                "ingress",
                "autoscaler",
                "deploy",
                "monitoring",
                "secrets",
            ],
            extensions: &["tf", "yaml", "yml", "sh"],
        },
        DevelopmentType::Blockchain => SourceTree {
            dirs: &[
                "contracts",
                "contracts/tokens",
                "scripts",
                "test/contracts",
                "programs",
            ],
            stems: &[
                "TokenVault",
                "StakingPool",
                "Governance",
                "BridgeRelay",
                "NFTMarketplace",
            ],
            extensions: &["sol", "rs", "vy", "move"],
        },
        DevelopmentType::MachineLearning => SourceTree {
            dirs: &["models", "training", "inference", "datasets", "experiments"],
            stems: &[
                "transformer_block",
                "trainer",
                "embedding_layer",
                "data_loader",
                "quantizer",
                "evaluator",
            ],
            extensions: &["py", "ipynb", "yaml"],
        },
        DevelopmentType::SystemsProgramming => SourceTree {
            dirs: &["src/kernel", "src/alloc", "src/sched", "src/io", "src/sync"],
            stems: &[
                "page_allocator",
                "ring_buffer",
                "spinlock",
                "interrupt_handler",
                "mmap",
                "scheduler",
            ],
            extensions: &["rs", "c", "h", "cpp"],
        },
        DevelopmentType::GameDevelopment => SourceTree {
            dirs: &[
                "Source/Gameplay",
                "Source/Physics",
                "Source/Rendering",
                "Assets/Scripts",
                "Source/AI",
            ],
            stems: &[
                "PlayerController",
                "CollisionSystem",
                "ShadowPass",
                "ParticleEmitter",
                "NavMeshAgent",
            ],
            extensions: &["cpp", "h", "cs", "hlsl"],
        },
        DevelopmentType::Security => SourceTree {
            dirs: &[
                "src/auth",
                "src/crypto",
                "policies",
                "src/audit",
                "scanners",
            ],
            stems: &[
                "token_validator",
                "key_rotation",
                "access_policy",
                "audit_log",
                "tls_config",
                "sanitizer",
            ],
            extensions: &["rs", "go", "py", "rego"],
        },
    }
}

/// A plausible source path for `dev_type`.
pub fn filename(rng: &mut Rng, dev_type: DevelopmentType) -> String {
    let tree = source_tree(dev_type);
    let dir = rng.pick(tree.dirs);
    let stem = rng.pick(tree.stems);
    let extension = rng.pick(tree.extensions);
    format!("{dir}/{stem}.{extension}")
}

pub fn code_issue(rng: &mut Rng, dev_type: DevelopmentType) -> &'static str {
    let issues: &[&'static str] = match dev_type {
        DevelopmentType::Backend => &[
            "Unbounded query result set",
            "Missing index on foreign key",
            "N+1 query pattern",
            "Unvalidated request payload",
            "Blocking call in async handler",
        ],
        DevelopmentType::Frontend => &[
            "Unnecessary re-render",
            "Missing key prop in list",
            "Unhandled promise rejection",
            "Inaccessible form control",
            "Layout shift on load",
        ],
        DevelopmentType::Fullstack => &[
            "Schema drift between client and server",
            "Duplicated validation logic",
            "Over-fetching in API response",
            "Stale cache after mutation",
            "Inconsistent error envelope",
        ],
        DevelopmentType::DataScience => &[
            "Data leakage in train/test split",
            "Unhandled missing values",
            "Non-deterministic sampling",
            "Implicit type coercion in join",
            "Unscaled feature column",
        ],
        DevelopmentType::DevOps => &[
            "Hardcoded credentials in manifest",
            "Missing resource limits",
            "Unpinned image tag",
            "Overly permissive IAM policy",
            "Missing health check",
        ],
        DevelopmentType::Blockchain => &[
            "Reentrancy risk in withdraw",
            "Unchecked external call",
            "Integer overflow in reward math",
            "Gas-heavy loop over storage",
            "Missing access modifier",
        ],
        DevelopmentType::MachineLearning => &[
            "Gradient explosion risk",
            "Unfrozen batch norm during eval",
            "Label imbalance not handled",
            "Checkpoint missing optimizer state",
            "Inconsistent preprocessing at inference",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Potential use-after-free",
            "Unaligned memory access",
            "Lock held across await point",
            "Unchecked buffer length",
            "False sharing on hot counter",
        ],
        DevelopmentType::GameDevelopment => &[
            "Allocation in update loop",
            "Physics step tied to frame rate",
            "Overdraw in particle shader",
            "Missing LOD for distant mesh",
            "Unbounded event queue",
        ],
        DevelopmentType::Security => &[
            "Weak hashing algorithm",
            "Timing-unsafe comparison",
            "Missing CSRF protection",
            "Verbose error leaks stack trace",
            "Insecure deserialization",
        ],
    };

    rng.pick(issues)
}

/// A complexity figure such as `Cyclomatic complexity: 12`.
pub fn complexity_metric(rng: &mut Rng) -> String {
    match rng.range(0..6_u8) {
        0 => format!("Cyclomatic complexity: {}", rng.range(1..30)),
        1 => format!("Cognitive complexity: {}", rng.range(1..40)),
        2 => format!("Maintainability index: {}", rng.range(40..100)),
        3 => format!("Lines: {}, functions: {}", rng.range(50..1200), rng.range(2..60)),
        4 => format!("Coupling: {} dependencies", rng.range(1..25)),
        _ => format!("Test coverage: {}%", rng.range(45..100)),
    }
}
