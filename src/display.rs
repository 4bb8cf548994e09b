//! Boot banner, random alerts and team notifications.

use std::sync::atomic::Ordering;

use anyhow::Result;
use colored::Color;

use crate::{
    config::DevelopmentType,
    console::{paint, tint},
    progress::{ProgressBar, Terminal},
    session::Session,
};

const BOOT_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";
const BOOT_STEPS: u64 = 100;

const TEAM_MEMBERS: &[&str] = &[
    "Alice", "Bob", "Carlos", "Diana", "Eva", "Felix", "Grace", "Hector", "Irene", "Jack",
];

const TEAM_ACTIONS: &[&str] = &[
    "Review requested on PR #342",
    "Mentioned you in a comment",
    "Assigned ticket DEV-867 to you",
    "Requested your input on design decision",
    "Shared documentation for your review",
];

fn boot_message(step: u64) -> Option<&'static str> {
    match step {
        0 => Some("Loading configuration files..."),
        20 => Some("Establishing secure connections..."),
        40 => Some("Initializing development modules..."),
        60 => Some("Syncing with repository..."),
        80 => Some("Analyzing code dependencies..."),
        _ => None,
    }
}

/// Header, a 100-step initialization bar, and the ready banner.
pub fn boot_sequence<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        shutdown,
        ..
    } = session;

    terminal.write_line("")?;
    terminal.write_line(&paint("INITIALIZING DEVELOPMENT ENVIRONMENT", Color::Cyan))?;
    terminal.write_line(&tint(
        &format!("Project: {}", config.project.to_uppercase()),
        Color::Yellow,
        config.minimal,
    ))?;
    terminal.write_line(&tint(
        &format!("Environment: {} Development", config.dev_type),
        Color::Green,
        config.minimal,
    ))?;
    if !config.framework.is_empty() {
        terminal.write_line(&tint(
            &format!("Framework: {}", config.framework),
            Color::Blue,
            config.minimal,
        ))?;
    }
    terminal.write_line("")?;

    let mut pb = ProgressBar::with_terminal(BOOT_STEPS, BOOT_TEMPLATE, &mut *terminal);
    for step in 0..BOOT_STEPS {
        pb.set_position(step)?;
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        if let Some(message) = boot_message(step) {
            pb.write_line(&format!("  {message}"))?;
        }

        pace.pause_random(rng, 50..100);
    }
    pb.finish_and_clear()?;
    drop(pb);

    terminal.write_line("")?;
    terminal.write_line(&paint("✅ DEVELOPMENT ENVIRONMENT INITIALIZED", Color::Green))?;
    terminal.write_line("")?;
    pace.pause(500);

    Ok(())
}

const ALERT_TYPES: &[&str] = &[
    "SECURITY",
    "PERFORMANCE",
    "RESOURCE",
    "DEPLOYMENT",
    "COMPLIANCE",
];

fn alert_message(alert_type: &str, dev_type: DevelopmentType) -> &'static str {
    use DevelopmentType as D;

    match (alert_type, dev_type) {
        ("SECURITY", D::Security) => "Potential intrusion attempt detected on production server",
        ("SECURITY", D::Backend) => "API authentication token expiration approaching",
        ("SECURITY", D::Frontend) => "Cross-site scripting vulnerability detected in form input",
        ("SECURITY", D::Blockchain) => "Smart contract privilege escalation vulnerability detected",
        ("SECURITY", _) => "Unusual login pattern detected in production environment",

        ("PERFORMANCE", D::Backend) => "API response time degradation detected in payment endpoint",
        ("PERFORMANCE", D::Frontend) => "Rendering performance issue detected in main dashboard",
        ("PERFORMANCE", D::DataScience) => "Data processing pipeline throughput reduced by 25%",
        ("PERFORMANCE", D::MachineLearning) => "Model inference latency exceeding threshold",
        ("PERFORMANCE", _) => "Performance regression detected in latest deployment",

        ("RESOURCE", D::DevOps) => "Kubernetes cluster resource allocation approaching limit",
        ("RESOURCE", D::Backend) => "Database connection pool nearing capacity",
        ("RESOURCE", D::DataScience) => "Data processing job memory usage exceeding allocation",
        ("RESOURCE", _) => "System resource utilization approaching threshold",

        ("DEPLOYMENT", D::DevOps) => "Canary deployment showing increased error rate",
        ("DEPLOYMENT", D::Backend) => "Service deployment incomplete on 3 nodes",
        ("DEPLOYMENT", D::Frontend) => "Asset optimization failed in production build",
        ("DEPLOYMENT", _) => "CI/CD pipeline failure detected in release branch",

        ("COMPLIANCE", D::Security) => "Potential data handling policy violation detected",
        ("COMPLIANCE", D::Backend) => "API endpoint missing required audit logging",
        ("COMPLIANCE", D::Blockchain) => "Smart contract failing regulatory compliance check",
        ("COMPLIANCE", _) => "Code scan detected potential compliance issue",

        _ => "System alert condition detected",
    }
}

fn automated_response(alert_type: &str) -> &'static str {
    match alert_type {
        "SECURITY" => "Initiating security protocol and notifying security team",
        "PERFORMANCE" => "Analyzing performance metrics and scaling resources",
        "RESOURCE" => "Optimizing resource allocation and preparing scaling plan",
        "DEPLOYMENT" => "Running deployment recovery procedure and notifying DevOps",
        "COMPLIANCE" => "Documenting issue and preparing compliance report",
        _ => "Initiating standard recovery procedure",
    }
}

fn severity_color(severity: &str) -> Color {
    match severity {
        "CRITICAL" => Color::Red,
        "HIGH" => Color::Yellow,
        "MEDIUM" => Color::Cyan,
        _ => Color::White,
    }
}

pub fn random_alert<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        ..
    } = session;

    let alert_type = rng.pick(ALERT_TYPES);
    let severity = if rng.chance(0.25) {
        "CRITICAL"
    } else if rng.chance(0.33) {
        "HIGH"
    } else {
        "MEDIUM"
    };
    let message = alert_message(alert_type, config.dev_type);

    terminal.write_line(&tint(
        &format!("🚨 {alert_type} ALERT [{severity}]: {message}"),
        severity_color(severity),
        config.minimal,
    ))?;
    terminal.write_line(&format!(
        "  ↳ AUTOMATED RESPONSE: {}",
        automated_response(alert_type)
    ))?;
    terminal.write_line("")?;

    pace.pause(1000);
    Ok(())
}

fn team_activities(dev_type: DevelopmentType) -> &'static [&'static str] {
    match dev_type {
        DevelopmentType::Backend => &[
            "pushed new API endpoint implementation",
            "requested code review on service layer refactoring",
            "merged database optimization pull request",
            "commented on your API authentication PR",
            "resolved 3 high-priority backend bugs",
        ],
        DevelopmentType::Frontend => &[
            "updated UI component library",
            "pushed new responsive design implementation",
            "fixed cross-browser compatibility issue",
            "requested review on animation performance PR",
            "updated design system documentation",
        ],
        DevelopmentType::Fullstack => &[
            "implemented end-to-end feature integration",
            "fixed client-server sync issue",
            "updated full-stack deployment pipeline",
            "refactored shared validation logic",
            "documented API integration patterns",
        ],
        DevelopmentType::DataScience => &[
            "updated data transformation pipeline",
            "shared new analysis notebook",
            "optimized data aggregation queries",
            "updated visualization dashboard",
            "documented new data metrics",
        ],
        DevelopmentType::DevOps => &[
            "updated Kubernetes configuration",
            "improved CI/CD pipeline performance",
            "added new monitoring alerts",
            "fixed auto-scaling configuration",
            "updated infrastructure documentation",
        ],
        DevelopmentType::Blockchain => &[
            "optimized smart contract gas usage",
            "implemented new transaction validation",
            "updated consensus algorithm implementation",
            "fixed wallet integration issue",
            "documented token economics model",
        ],
        DevelopmentType::MachineLearning => &[
            "shared improved model accuracy results",
            "optimized model training pipeline",
            "added new feature extraction method",
            "implemented model versioning system",
            "documented model evaluation metrics",
        ],
        DevelopmentType::SystemsProgramming => &[
            "optimized memory allocation strategy",
            "reduced thread contention in core module",
            "implemented lock-free data structure",
            "fixed race condition in scheduler",
            "documented concurrency pattern usage",
        ],
        DevelopmentType::GameDevelopment => &[
            "optimized rendering pipeline",
            "fixed physics collision detection issue",
            "implemented new particle effect system",
            "reduced loading time by 30%",
            "documented game engine architecture",
        ],
        DevelopmentType::Security => &[
            "implemented additional encryption layer",
            "fixed authentication bypass vulnerability",
            "updated security scanning rules",
            "implemented improved access control",
            "documented security compliance requirements",
        ],
    }
}

pub fn team_activity<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        ..
    } = session;

    let member = rng.pick(TEAM_MEMBERS);
    let activity = rng.pick(team_activities(config.dev_type));
    let minutes_ago = rng.range(1..30);

    terminal.write_line(&tint(
        &format!("👥 TEAM: {member} {activity} ({minutes_ago} minutes ago)"),
        Color::Cyan,
        config.minimal,
    ))?;

    if rng.chance(0.5) {
        let action = rng.pick(TEAM_ACTIONS);
        terminal.write_line(&format!("  ↳ ACTION NEEDED: {action}"))?;
    }
    terminal.write_line("")?;

    pace.pause(800);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_messages_every_twenty_steps() {
        let messages: Vec<u64> = (0..BOOT_STEPS)
            .filter(|step| boot_message(*step).is_some())
            .collect();
        assert_eq!(messages, vec![0, 20, 40, 60, 80]);
    }

    #[test]
    fn test_alert_message_falls_back_per_type() {
        assert_eq!(
            alert_message("RESOURCE", DevelopmentType::DevOps),
            "Kubernetes cluster resource allocation approaching limit"
        );
        assert_eq!(
            alert_message("RESOURCE", DevelopmentType::GameDevelopment),
            "System resource utilization approaching threshold"
        );
        assert_eq!(
            alert_message("UNKNOWN", DevelopmentType::Backend),
            "System alert condition detected"
        );
    }

    #[test]
    fn test_every_alert_type_has_response() {
        for alert_type in ALERT_TYPES {
            assert_ne!(
                automated_response(alert_type),
                "Initiating standard recovery procedure"
            );
        }
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color("CRITICAL"), Color::Red);
        assert_eq!(severity_color("HIGH"), Color::Yellow);
        assert_eq!(severity_color("MEDIUM"), Color::Cyan);
    }
}
