#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::{sync::atomic::Ordering, thread, time::Duration};

use stakeholder::{
    Pace, Rng, Session, SessionConfig, activities,
    config::{Complexity, DevelopmentType, JargonLevel},
    display,
    progress::{MemoryTerminal, Terminal},
};

fn session(config: SessionConfig, seed: u64) -> Session<MemoryTerminal> {
    Session::with_terminal(config, Rng::seeded(seed), MemoryTerminal::new(), Pace::Instant)
}

fn minimal() -> SessionConfig {
    SessionConfig::builder().minimal(true).build()
}

fn output(session: Session<MemoryTerminal>) -> Vec<String> {
    session
        .into_terminal()
        .lines()
        .iter()
        .map(|l| l.trim_end().to_owned())
        .collect()
}

fn count_containing(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|l| l.contains(needle)).count()
}

#[test]
fn test_boot_sequence() {
    let config = SessionConfig::builder()
        .minimal(true)
        .project("quantum-ledger")
        .framework("Axum")
        .build();
    let mut s = session(config, 1);
    display::boot_sequence(&mut s).unwrap();
    assert!(s.terminal().is_cursor_visible());

    let lines = output(s);
    assert!(lines.iter().any(|l| l.contains("INITIALIZING DEVELOPMENT ENVIRONMENT")));
    assert!(lines.contains(&"Project: QUANTUM-LEDGER".to_owned()));
    assert!(lines.contains(&"Environment: Backend Development".to_owned()));
    assert!(lines.contains(&"Framework: Axum".to_owned()));
    for message in [
        "  Loading configuration files...",
        "  Establishing secure connections...",
        "  Initializing development modules...",
        "  Syncing with repository...",
        "  Analyzing code dependencies...",
    ] {
        assert!(lines.contains(&message.to_owned()), "missing {message}");
    }
    assert!(lines.iter().any(|l| l.contains("DEVELOPMENT ENVIRONMENT INITIALIZED")));
}

#[test]
fn test_boot_sequence_without_framework() {
    let mut s = session(minimal(), 2);
    display::boot_sequence(&mut s).unwrap();
    let lines = output(s);
    assert_eq!(count_containing(&lines, "Framework:"), 0);
}

#[test]
fn test_code_analysis() {
    let config = SessionConfig::builder()
        .minimal(true)
        .framework("Actix")
        .build();
    let mut s = session(config, 3);
    activities::analyze_code(&mut s).unwrap();
    assert!(s.terminal().is_cursor_visible());

    let lines = output(s);
    assert_eq!(
        lines[0],
        "🔍 Running Code Analysis on API Components (Actix specific)"
    );
    assert_eq!(count_containing(&lines, "📊 Analysis Complete:"), 1);
    assert_eq!(count_containing(&lines, "  - Code quality score:"), 1);
}

#[test]
fn test_low_jargon_skips_jargon_line() {
    let config = SessionConfig::builder()
        .minimal(true)
        .jargon(JargonLevel::Low)
        .build();
    let mut s = session(config, 4);
    activities::analyze_code(&mut s).unwrap();

    let lines = output(s);
    let debt = lines
        .iter()
        .position(|l| l.starts_with("  - Technical debt:"))
        .unwrap();
    assert_eq!(lines[debt + 1], "");
}

#[test]
fn test_performance_units_follow_dev_type() {
    let config = SessionConfig::builder()
        .minimal(true)
        .dev_type(DevelopmentType::DataScience)
        .build();
    let mut s = session(config, 5);
    activities::measure_performance(&mut s).unwrap();

    let lines = output(s);
    assert_eq!(lines[0], "⚡ Benchmarking Data Processing Pipeline");
    assert!(lines.iter().any(|l| l.starts_with("  - P99:") && l.ends_with(" seconds")));
    assert_eq!(count_containing(&lines, "💡 Recommendation:"), 1);

    let mut s = session(minimal(), 5);
    activities::measure_performance(&mut s).unwrap();
    let lines = output(s);
    assert!(lines.iter().any(|l| l.starts_with("  - Median:") && l.ends_with(" milliseconds")));
}

#[test]
fn test_system_monitoring_one_line_per_tick() {
    let mut s = session(minimal(), 6);
    activities::monitor_system(&mut s).unwrap();

    let lines = output(s);
    let ticks = count_containing(&lines, "  CPU: ");
    assert!((5..15).contains(&ticks), "{ticks} ticks");
    assert!(lines.iter().any(|l| l.starts_with("  - Recommendation:")));
}

#[test]
fn test_data_processing() {
    let mut s = session(minimal(), 7);
    activities::process_data(&mut s).unwrap();
    assert!(s.terminal().is_cursor_visible());

    let lines = output(s);
    assert_eq!(lines[0], "🔄 Processing API Data Streams");
    let operations = lines
        .iter()
        .filter(|l| l.starts_with("  🔄 ") && l.contains(" records ("))
        .count();
    assert!((5..20).contains(&operations), "{operations} operations");
    assert_eq!(count_containing(&lines, "📊 Data Processing Summary:"), 1);
}

#[test]
fn test_network_activity() {
    let config = SessionConfig::builder()
        .minimal(true)
        .dev_type(DevelopmentType::Security)
        .build();
    let mut s = session(config, 8);
    activities::watch_network(&mut s).unwrap();

    let lines = output(s);
    assert_eq!(lines[0], "🌐 Analyzing Network Security Patterns");
    let requests = count_containing(&lines, "  → ");
    assert!((5..15).contains(&requests), "{requests} requests");
    assert!(lines.iter().any(|l| l.ends_with(" KB")));
}

#[test]
fn test_random_alert() {
    let mut s = session(minimal(), 9);
    display::random_alert(&mut s).unwrap();

    let lines = output(s);
    assert!(lines[0].starts_with("🚨 "));
    assert!(lines[0].contains(" ALERT ["));
    assert!(lines[1].starts_with("  ↳ AUTOMATED RESPONSE: "));
}

#[test]
fn test_team_activity() {
    let mut s = session(minimal(), 10);
    display::team_activity(&mut s).unwrap();

    let lines = output(s);
    assert!(lines[0].starts_with("👥 TEAM: "));
    assert!(lines[0].ends_with(" minutes ago)"));
}

#[test]
fn test_round_runs_activities() {
    let config = SessionConfig::builder()
        .minimal(true)
        .complexity(Complexity::Extreme)
        .alerts(true)
        .team(true)
        .build();
    let mut s = session(config, 11);
    s.round().unwrap();
    assert!(s.terminal().is_cursor_visible());
    assert!(!s.expired());

    let lines = output(s);
    let summaries = lines.iter().filter(|l| l.starts_with("📊 ")).count()
        + count_containing(&lines, "📈 Performance Results:");
    assert_eq!(summaries, 4);
}

#[test]
fn test_same_seed_same_session() {
    let run = |seed| {
        let config = SessionConfig::builder()
            .minimal(true)
            .complexity(Complexity::High)
            .build();
        let mut s = session(config, seed);
        s.round().unwrap();
        output(s)
    };

    assert_eq!(run(42), run(42));
}

#[test]
fn test_interrupted_run_returns_with_cursor_visible() {
    let mut s = session(minimal(), 12);
    s.shutdown_handle().store(true, Ordering::SeqCst);

    s.run().unwrap();
    assert!(s.interrupted());
    assert!(s.expired());
    assert!(s.terminal().is_cursor_visible());

    let lines = output(s);
    assert!(lines.iter().any(|l| l.contains("INITIALIZING DEVELOPMENT ENVIRONMENT")));
    assert_eq!(count_containing(&lines, "📊 "), 0);
}

#[test]
fn test_interrupt_during_unbounded_run() {
    // duration 0 only ends through the shutdown flag
    let mut s = session(minimal(), 13);
    let shutdown = s.shutdown_handle();
    let interrupter = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        shutdown.store(true, Ordering::SeqCst);
    });

    s.run().unwrap();
    interrupter.join().unwrap();
    assert!(s.terminal().is_cursor_visible());
}

#[test]
fn test_interrupt_finishes_open_bar() {
    let mut s = session(minimal(), 14);
    s.shutdown_handle().store(true, Ordering::SeqCst);
    activities::analyze_code(&mut s).unwrap();
    assert!(s.terminal().is_cursor_visible());

    let lines = output(s);
    assert_eq!(count_containing(&lines, "📊 Analysis Complete:"), 1);
    assert_eq!(count_containing(&lines, "  ✓ "), 0);
    assert_eq!(count_containing(&lines, "  ⚠️ "), 0);
}
