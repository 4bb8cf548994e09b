use crate::rng::Rng;

const SYSTEM_EVENTS: &[&str] = &[
    "Garbage collection cycle completed in 12ms",
    "Worker thread pool resized to 16 threads",
    "Log rotation completed for application logs",
    "Scheduled backup snapshot created",
    "TLS certificate cache refreshed",
    "Connection pool recycled 8 idle connections",
    "Kernel page cache flushed to disk",
    "Background index compaction started",
    "Health check passed on all replicas",
    "Swap usage returned to baseline",
    "Container memory limit raised by orchestrator",
    "NTP clock drift corrected by 3ms",
];

const SYSTEM_RECOMMENDATIONS: &[&str] = &[
    "Recommendation: Increase worker pool size during peak hours",
    "Recommendation: Move log shipping to a dedicated volume",
    "Recommendation: Enable memory compaction on long-running services",
    "Recommendation: Raise file descriptor limits for the API tier",
    "Recommendation: Schedule index maintenance outside business hours",
    "Recommendation: Pin latency-sensitive processes to isolated cores",
    "Recommendation: Consider vertical scaling for the cache nodes",
];

pub fn system_event(rng: &mut Rng) -> &'static str {
    rng.pick(SYSTEM_EVENTS)
}

pub fn system_recommendation(rng: &mut Rng) -> &'static str {
    rng.pick(SYSTEM_RECOMMENDATIONS)
}
