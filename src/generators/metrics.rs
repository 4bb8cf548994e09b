use crate::{config::DevelopmentType, rng::Rng};

pub fn performance_metric(rng: &mut Rng, dev_type: DevelopmentType) -> &'static str {
    let metrics: &[&'static str] = match dev_type {
        DevelopmentType::Backend => &[
            "API latency",
            "Database query time",
            "Connection pool wait",
            "Request throughput",
            "Cache lookup time",
        ],
        DevelopmentType::Frontend => &[
            "First contentful paint",
            "Time to interactive",
            "Component render time",
            "Bundle parse time",
            "Layout recalculation",
        ],
        DevelopmentType::Fullstack => &[
            "Round-trip latency",
            "Hydration time",
            "API payload size",
            "Server render time",
            "Sync queue depth",
        ],
        DevelopmentType::DataScience => &[
            "Pipeline stage duration",
            "Rows processed",
            "Query scan volume",
            "Aggregation time",
            "Feature build time",
        ],
        DevelopmentType::DevOps => &[
            "Pod startup time",
            "Deployment rollout time",
            "Node CPU saturation",
            "Container restarts",
            "Load balancer latency",
        ],
        DevelopmentType::Blockchain => &[
            "Block propagation time",
            "Transaction finality",
            "Gas per transaction",
            "Mempool size",
            "Peer sync lag",
        ],
        DevelopmentType::MachineLearning => &[
            "Epoch duration",
            "Inference latency",
            "GPU utilization",
            "Batch throughput",
            "Gradient sync time",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Allocation rate",
            "Context switch time",
            "Cache miss ratio",
            "Syscall latency",
            "Lock wait time",
        ],
        DevelopmentType::GameDevelopment => &[
            "Frame time",
            "Draw calls",
            "Physics step time",
            "Asset load time",
            "GPU frame budget",
        ],
        DevelopmentType::Security => &[
            "Handshake time",
            "Encryption throughput",
            "Token validation time",
            "Scan duration",
            "Key derivation time",
        ],
    };

    rng.pick(metrics)
}

pub fn metric_unit(rng: &mut Rng, dev_type: DevelopmentType) -> &'static str {
    let units: &[&'static str] = match dev_type {
        DevelopmentType::DataScience | DevelopmentType::MachineLearning => {
            &["seconds", "samples/sec", "MB", "rows/sec"]
        }
        DevelopmentType::GameDevelopment => &["ms", "fps", "draw calls", "MB"],
        DevelopmentType::Blockchain => &["ms", "TPS", "gwei", "blocks"],
        DevelopmentType::SystemsProgramming => &["ns", "μs", "ops/sec", "KB"],
        _ => &["ms", "req/sec", "MB", "ops/sec"],
    };

    rng.pick(units)
}

pub fn optimization_recommendation(rng: &mut Rng, dev_type: DevelopmentType) -> &'static str {
    let recommendations: &[&'static str] = match dev_type {
        DevelopmentType::Backend => &[
            "Add a composite index on the orders lookup path",
            "Introduce read replicas for reporting queries",
            "Batch outbound webhook deliveries",
            "Enable response caching for idempotent endpoints",
        ],
        DevelopmentType::Frontend => &[
            "Code-split the dashboard route",
            "Memoize expensive list item components",
            "Defer loading of below-the-fold images",
            "Move heavy computation to a web worker",
        ],
        DevelopmentType::Fullstack => &[
            "Co-locate data fetching with route components",
            "Switch hot endpoints to incremental sync",
            "Trim unused fields from the API payload",
            "Stream server-rendered markup",
        ],
        DevelopmentType::DataScience => &[
            "Partition the dataset by event date",
            "Replace row-wise transforms with vectorized operations",
            "Cache intermediate pipeline stages",
            "Push filters down into the source query",
        ],
        DevelopmentType::DevOps => &[
            "Right-size node pools for the current workload",
            "Enable horizontal pod autoscaling on the API tier",
            "Cache container layers in the CI runners",
            "Move batch jobs to spot instances",
        ],
        DevelopmentType::Blockchain => &[
            "Pack storage variables to reduce slot usage",
            "Replace loops over mappings with indexed events",
            "Batch validator signature checks",
            "Cache contract state reads in memory",
        ],
        DevelopmentType::MachineLearning => &[
            "Enable mixed-precision training",
            "Increase batch size with gradient accumulation",
            "Quantize the model for inference",
            "Prefetch batches on a separate loader thread",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Pad per-core counters to cache line size",
            "Replace the global lock with sharded locks",
            "Use an arena allocator for short-lived objects",
            "Batch syscalls with vectored I/O",
        ],
        DevelopmentType::GameDevelopment => &[
            "Instance repeated meshes",
            "Move physics to a fixed timestep",
            "Pool particle allocations",
            "Stream textures by distance",
        ],
        DevelopmentType::Security => &[
            "Enable TLS session resumption",
            "Cache validated tokens for their lifetime",
            "Use hardware-accelerated AES",
            "Run dependency scans incrementally",
        ],
    };

    rng.pick(recommendations)
}
