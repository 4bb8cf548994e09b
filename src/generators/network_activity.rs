use crate::{config::DevelopmentType, rng::Rng};

const METHODS: &[(&str, u32)] = &[
    ("GET", 50),
    ("POST", 25),
    ("PUT", 10),
    ("DELETE", 5),
    ("PATCH", 10),
];

const STATUSES: &[(u16, u32)] = &[
    (200, 60),
    (201, 10),
    (204, 5),
    (301, 3),
    (304, 5),
    (400, 5),
    (401, 3),
    (403, 2),
    (404, 4),
    (429, 1),
    (500, 1),
    (503, 1),
];

pub fn endpoint(rng: &mut Rng, dev_type: DevelopmentType) -> &'static str {
    let endpoints: &[&'static str] = match dev_type {
        DevelopmentType::Backend => &[
            "/api/v1/users",
            "/api/v1/orders/{id}",
            "/api/v1/payments/charge",
            "/api/v2/auth/token",
            "/internal/health",
        ],
        DevelopmentType::Frontend => &[
            "/assets/main.chunk.js",
            "/api/graphql",
            "/static/fonts/inter.woff2",
            "/api/session",
            "/cdn/images/hero.webp",
        ],
        DevelopmentType::Fullstack => &[
            "/api/graphql",
            "/api/trpc/user.profile",
            "/ws/notifications",
            "/api/auth/callback",
            "/_next/data/build/index.json",
        ],
        DevelopmentType::DataScience => &[
            "/warehouse/query",
            "/datasets/events/partitions",
            "/features/online/lookup",
            "/notebooks/kernels/start",
            "/export/parquet",
        ],
        DevelopmentType::DevOps => &[
            "/apis/apps/v1/deployments",
            "/metrics",
            "/v1/secrets/data/app",
            "/api/v4/pipelines",
            "/healthz",
        ],
        DevelopmentType::Blockchain => &[
            "/rpc/eth_sendRawTransaction",
            "/rpc/eth_getBlockByNumber",
            "/validators/duties",
            "/mempool/pending",
            "/bridge/relay",
        ],
        DevelopmentType::MachineLearning => &[
            "/v1/models/ranker:predict",
            "/training/jobs",
            "/registry/models/latest",
            "/embeddings/batch",
            "/experiments/metrics",
        ],
        DevelopmentType::SystemsProgramming => &[
            "/debug/pprof/heap",
            "/sys/stats",
            "/ipc/channel/7",
            "/trace/events",
            "/admin/shutdown",
        ],
        DevelopmentType::GameDevelopment => &[
            "/matchmaking/queue",
            "/session/state",
            "/leaderboard/global",
            "/assets/bundles/level3",
            "/telemetry/frame",
        ],
        DevelopmentType::Security => &[
            "/oauth2/token",
            "/.well-known/jwks.json",
            "/audit/events",
            "/scan/results",
            "/mfa/verify",
        ],
    };

    rng.pick(endpoints)
}

pub fn method(rng: &mut Rng) -> &'static str {
    rng.pick_weighted(METHODS).copied().unwrap_or("GET")
}

pub fn status(rng: &mut Rng) -> u16 {
    rng.pick_weighted(STATUSES).copied().unwrap_or(200)
}

pub fn request_details(rng: &mut Rng, dev_type: DevelopmentType) -> &'static str {
    let details: &[&'static str] = match dev_type {
        DevelopmentType::Frontend | DevelopmentType::Fullstack => &[
            "Served from browser cache (stale-while-revalidate)",
            "Preloaded via link header",
            "Compressed with brotli, 71% smaller",
            "Deduplicated with in-flight request",
        ],
        DevelopmentType::Blockchain => &[
            "Relayed to 24 peers",
            "Nonce gap detected, transaction queued",
            "Included in block after 2 confirmations",
            "Gas estimate refreshed from oracle",
        ],
        DevelopmentType::Security => &[
            "mTLS handshake verified client certificate",
            "Request signature validated",
            "Blocked by WAF rule 942100",
            "Token scope narrowed to read-only",
        ],
        _ => &[
            "Connection reused from keep-alive pool",
            "Retried once after upstream timeout",
            "Response cached for 300s",
            "Routed to nearest region",
            "Payload validated against schema",
        ],
    };

    rng.pick(details)
}
