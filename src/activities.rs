//! The five activities a session rotates through. Each prints a title,
//! drives one or more progress bars, and ends with a summary block.

use std::sync::atomic::Ordering;

use anyhow::Result;
use colored::Color;

use crate::{
    config::{DevelopmentType, JargonLevel},
    console::{padded_number, threshold_color, tint},
    generators::{
        code_analyzer, data_processing, jargon, metrics, network_activity, system_monitoring,
    },
    progress::{ProgressBar, Terminal},
    session::Session,
};

pub type Activity<T> = fn(&mut Session<T>) -> Result<()>;

const CODE_ANALYSIS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})";
const PERFORMANCE_TEMPLATE: &str =
    "{spinner:.yellow} [{elapsed_precise}] [{bar:40.yellow/blue}] {pos}/{len} samples ({eta})";
const MONITORING_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.green/blue}] {pos}/{len} seconds";
const SUBTASK_TEMPLATE: &str =
    "     {spinner:.blue} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len}";

/// Every activity with a name for the log.
#[must_use]
pub fn all<T: Terminal>() -> [(&'static str, Activity<T>); 5] {
    [
        ("code analysis", analyze_code::<T> as Activity<T>),
        ("performance metrics", measure_performance::<T> as Activity<T>),
        ("system monitoring", monitor_system::<T> as Activity<T>),
        ("data processing", process_data::<T> as Activity<T>),
        ("network activity", watch_network::<T> as Activity<T>),
    ]
}

fn wants_jargon(level: JargonLevel) -> bool {
    level >= JargonLevel::Medium
}

pub fn analyze_code<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        shutdown,
        ..
    } = session;

    let files = rng.range(5..25_u64);
    let total_lines = rng.range(1000..10000);
    let suffix = config.framework_suffix();

    let title = match config.dev_type {
        DevelopmentType::Backend => {
            format!("🔍 Running Code Analysis on API Components{suffix}")
        }
        DevelopmentType::Frontend => format!("🔍 Analyzing UI Components{suffix}"),
        DevelopmentType::Fullstack => "🔍 Analyzing Full-Stack Integration Points".into(),
        DevelopmentType::DataScience => "🔍 Analyzing Data Pipeline Components".into(),
        DevelopmentType::DevOps => "🔍 Analyzing Infrastructure Configuration".into(),
        DevelopmentType::Blockchain => "🔍 Analyzing Smart Contract Security".into(),
        DevelopmentType::MachineLearning => "🔍 Analyzing Model Prediction Accuracy".into(),
        DevelopmentType::SystemsProgramming => "🔍 Analyzing Memory Safety Patterns".into(),
        DevelopmentType::GameDevelopment => "🔍 Analyzing Game Physics Components".into(),
        DevelopmentType::Security => "🔍 Running Security Vulnerability Scan".into(),
    };
    terminal.write_line(&tint(&title, Color::Blue, config.minimal))?;

    let mut pb = ProgressBar::with_terminal(files, CODE_ANALYSIS_TEMPLATE, &mut *terminal);
    for i in 0..files {
        pb.set_position(i)?;
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        if rng.chance(0.33) {
            let file = code_analyzer::filename(rng, config.dev_type);
            let issue = code_analyzer::code_issue(rng, config.dev_type);
            let complexity = code_analyzer::complexity_metric(rng);

            let message = if rng.chance(0.25) {
                format!("  ⚠️ {file} - {issue}: {complexity}")
            } else {
                format!("  ✓ {file} - {complexity}")
            };
            pb.write_line(&message)?;
        }

        pace.pause_random(rng, 100..300);
    }
    pb.finish()?;
    drop(pb);

    let issues = rng.range(0..5);
    let quality = rng.range(85..99);
    let tech_debt = rng.range(1..15);

    terminal.write_line(&format!(
        "📊 Analysis Complete: {files} files, {total_lines} lines of code"
    ))?;
    terminal.write_line(&format!("  - Issues found: {issues}"))?;
    terminal.write_line(&format!("  - Code quality score: {quality}%"))?;
    terminal.write_line(&format!("  - Technical debt: {tech_debt}%"))?;

    if wants_jargon(config.jargon) {
        let line = jargon::code_jargon(rng, config.dev_type, config.jargon);
        terminal.write_line(&format!("  - {line}"))?;
    }
    terminal.write_line("")?;

    Ok(())
}

/// Element at `fraction` of the way through `sorted`, clamped to the last one.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    let index = (sorted.len() as f64 * fraction) as usize;
    let last = sorted.len().saturating_sub(1);
    sorted.get(index.min(last)).copied().unwrap_or_default()
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn measure_performance<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        shutdown,
        ..
    } = session;

    let title = match config.dev_type {
        DevelopmentType::Backend => "⚡ Analyzing API Response Time",
        DevelopmentType::Frontend => "⚡ Measuring UI Rendering Performance",
        DevelopmentType::Fullstack => "⚡ Evaluating End-to-End Performance",
        DevelopmentType::DataScience => "⚡ Benchmarking Data Processing Pipeline",
        DevelopmentType::DevOps => "⚡ Evaluating Infrastructure Scalability",
        DevelopmentType::Blockchain => "⚡ Measuring Transaction Throughput",
        DevelopmentType::MachineLearning => "⚡ Benchmarking Model Training Speed",
        DevelopmentType::SystemsProgramming => "⚡ Measuring Memory Allocation Efficiency",
        DevelopmentType::GameDevelopment => "⚡ Analyzing Frame Rate Optimization",
        DevelopmentType::Security => "⚡ Benchmarking Encryption Performance",
    };
    terminal.write_line(&tint(title, Color::Yellow, config.minimal))?;

    let iterations = rng.range(50..200_u64);
    let mut samples = Vec::new();

    let mut pb = ProgressBar::with_terminal(iterations, PERFORMANCE_TEMPLATE, &mut *terminal);
    for i in 0..iterations {
        pb.set_position(i)?;
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        let base: i32 = match config.dev_type {
            DevelopmentType::Backend => rng.range(20..80),
            DevelopmentType::Frontend => rng.range(5..30),
            DevelopmentType::DataScience => rng.range(100..500),
            DevelopmentType::Blockchain => rng.range(200..800),
            DevelopmentType::MachineLearning => rng.range(300..900),
            _ => rng.range(10..100),
        };
        let jitter = rng.range(-5..5);
        samples.push(f64::from(base.saturating_add(jitter).max(1)));

        if i % 10 == 0 && rng.chance(0.33) {
            let name = metrics::performance_metric(rng, config.dev_type);
            let value = rng.range(10..999);
            let unit = metrics::metric_unit(rng, config.dev_type);
            pb.write_line(&format!("  📊 {name}: {value} {unit}"))?;
        }

        pace.pause_random(rng, 50..100);
    }
    pb.finish()?;
    drop(pb);

    samples.sort_by(f64::total_cmp);
    let unit = match config.dev_type {
        DevelopmentType::DataScience | DevelopmentType::MachineLearning => "seconds",
        _ => "milliseconds",
    };

    terminal.write_line("📈 Performance Results:")?;
    terminal.write_line(&format!("  - Average: {:.2} {unit}", mean(&samples)))?;
    terminal.write_line(&format!("  - Median: {:.2} {unit}", percentile(&samples, 0.5)))?;
    terminal.write_line(&format!("  - P95: {:.2} {unit}", percentile(&samples, 0.95)))?;
    terminal.write_line(&format!("  - P99: {:.2} {unit}", percentile(&samples, 0.99)))?;

    let recommendation = metrics::optimization_recommendation(rng, config.dev_type);
    terminal.write_line(&format!("💡 Recommendation: {recommendation}"))?;

    if wants_jargon(config.jargon) {
        let line = jargon::performance_jargon(rng, config.dev_type, config.jargon);
        terminal.write_line(&format!("  - {line}"))?;
    }
    terminal.write_line("")?;

    Ok(())
}

pub fn monitor_system<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        shutdown,
        ..
    } = session;

    terminal.write_line(&tint(
        "🖥️ System Resource Monitoring",
        Color::Green,
        config.minimal,
    ))?;

    let seconds = rng.range(5..15_u64);
    let cpu_base: i64 = rng.range(10..60);
    let memory_base: i64 = rng.range(30..70);
    let network_base: i64 = rng.range(1..20);
    let disk_base: i64 = rng.range(5..40);

    let mut pb = ProgressBar::with_terminal(seconds, MONITORING_TEMPLATE, &mut *terminal);
    for i in 0..seconds {
        pb.set_position(i)?;
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        let cpu = cpu_base.saturating_add(rng.range(-5..10));
        let memory = memory_base.saturating_add(rng.range(-3..5));
        let network = network_base.saturating_add(rng.range(-1..3));
        let disk = disk_base.saturating_add(rng.range(-2..4));
        let processes = rng.range(80..200);

        let cpu_text = if cpu > 60 {
            format!("{cpu}% (!)")
        } else {
            format!("{cpu}%    ")
        };

        // Printed through the bar so the line is blanked first.
        pb.write_line(&format!(
            "  CPU: {}  |  RAM: {}  |  Network: {}  |  Disk I/O: {}  |  Processes: {processes}",
            tint(&cpu_text, threshold_color(cpu, 60, 80), config.minimal),
            tint(
                &format!("{memory}%"),
                threshold_color(memory, 70, 85),
                config.minimal
            ),
            padded_number(network, " MB/s", 2),
            padded_number(disk, " MB/s", 2),
        ))?;

        if i % 3 == 0 && rng.chance(0.33) {
            let event = system_monitoring::system_event(rng);
            pb.write_line(&format!("  🔄 {event}"))?;
        }

        pace.pause_random(rng, 200..500);
    }
    pb.finish()?;
    drop(pb);

    let peak_cpu = cpu_base.saturating_add(rng.range(5..15));
    let peak_memory = memory_base.saturating_add(rng.range(5..15));
    let throughput = network_base.saturating_add(rng.range(5..10));
    let disk_throughput = disk_base.saturating_add(rng.range(2..8));

    terminal.write_line("📊 Resource Utilization Summary:")?;
    terminal.write_line(&format!("  - Peak CPU: {peak_cpu}%"))?;
    terminal.write_line(&format!("  - Peak Memory: {peak_memory}%"))?;
    terminal.write_line(&format!("  - Network Throughput: {throughput} MB/s"))?;
    terminal.write_line(&format!("  - Disk Throughput: {disk_throughput} MB/s"))?;
    terminal.write_line(&format!(
        "  - {}",
        system_monitoring::system_recommendation(rng)
    ))?;
    terminal.write_line("")?;

    Ok(())
}

pub fn process_data<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        shutdown,
        ..
    } = session;

    let title = match config.dev_type {
        DevelopmentType::Backend => "🔄 Processing API Data Streams",
        DevelopmentType::Frontend => "🔄 Processing User Interaction Data",
        DevelopmentType::Fullstack => "🔄 Synchronizing Client-Server Data",
        DevelopmentType::DataScience => "🔄 Running Data Transformation Pipeline",
        DevelopmentType::DevOps => "🔄 Analyzing System Logs",
        DevelopmentType::Blockchain => "🔄 Validating Transaction Blocks",
        DevelopmentType::MachineLearning => "🔄 Processing Training Data Batches",
        DevelopmentType::SystemsProgramming => "🔄 Optimizing Memory Access Patterns",
        DevelopmentType::GameDevelopment => "🔄 Processing Game Asset Pipeline",
        DevelopmentType::Security => "🔄 Analyzing Security Event Logs",
    };
    terminal.write_line(&tint(title, Color::Cyan, config.minimal))?;

    let operations = rng.range(5..20_u32);
    for _ in 0..operations {
        if shutdown.load(Ordering::SeqCst) {
            break;
        }
        let operation = data_processing::data_operation(rng, config.dev_type);
        let records = rng.range(100..10000);
        let size = rng.range(1..100);
        let size_unit = if rng.chance(0.25) { "GB" } else { "MB" };

        terminal.write_line(&format!(
            "  🔄 {operation} {records} records ({size} {size_unit})"
        ))?;

        if rng.chance(0.33) {
            let subtasks = rng.range(10..30_u64);
            let mut pb = ProgressBar::with_terminal(subtasks, SUBTASK_TEMPLATE, &mut *terminal);

            for step in 0..subtasks {
                pb.set_position(step)?;
                if shutdown.load(Ordering::SeqCst) {
                    break;
                }
                pace.pause_random(rng, 20..100);

                if rng.chance(0.125) {
                    let sub_operation = data_processing::data_sub_operation(rng, config.dev_type);
                    pb.write_line(&format!("       - {sub_operation}"))?;
                }
            }
            pb.finish_and_clear()?;
        } else {
            pace.pause_random(rng, 300..800);
        }

        if rng.chance(0.5) {
            let details = data_processing::data_details(rng, config.dev_type);
            terminal.write_line(&format!("     ✓ {details}"))?;
        }
    }

    let processed = rng.range(10_000..1_000_000);
    let rate = rng.range(1000..10000);
    let total_size = rng.range(10..500);
    let time_saved = rng.range(10..60);

    terminal.write_line("📊 Data Processing Summary:")?;
    terminal.write_line(&format!("  - Records processed: {processed}"))?;
    terminal.write_line(&format!("  - Processing rate: {rate} records/sec"))?;
    terminal.write_line(&format!("  - Total data size: {total_size} GB"))?;
    terminal.write_line(&format!("  - Estimated time saved: {time_saved} minutes"))?;

    if wants_jargon(config.jargon) {
        let line = jargon::data_jargon(rng, config.dev_type, config.jargon);
        terminal.write_line(&format!("  - {line}"))?;
    }
    terminal.write_line("")?;

    Ok(())
}

fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Blue,
        "PUT" => Color::Yellow,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}

fn status_color(status: u16) -> Color {
    match status {
        200..=299 => Color::Green,
        300..=399 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn watch_network<T: Terminal>(session: &mut Session<T>) -> Result<()> {
    let Session {
        config,
        rng,
        terminal,
        pace,
        shutdown,
        ..
    } = session;

    let title = match config.dev_type {
        DevelopmentType::Backend => "🌐 Monitoring API Network Traffic",
        DevelopmentType::Frontend => "🌐 Analyzing Client-Side Network Requests",
        DevelopmentType::Fullstack => "🌐 Optimizing Client-Server Communication",
        DevelopmentType::DataScience => "🌐 Synchronizing Distributed Data Nodes",
        DevelopmentType::DevOps => "🌐 Monitoring Infrastructure Network",
        DevelopmentType::Blockchain => "🌐 Monitoring Blockchain Network",
        DevelopmentType::MachineLearning => "🌐 Distributing Model Training",
        DevelopmentType::SystemsProgramming => "🌐 Analyzing Network Protocol Efficiency",
        DevelopmentType::GameDevelopment => "🌐 Simulating Multiplayer Network Conditions",
        DevelopmentType::Security => "🌐 Analyzing Network Security Patterns",
    };
    terminal.write_line(&tint(title, Color::Magenta, config.minimal))?;

    let requests = rng.range(5..15_u32);
    for _ in 0..requests {
        if shutdown.load(Ordering::SeqCst) {
            break;
        }
        let endpoint = network_activity::endpoint(rng, config.dev_type);
        let method = network_activity::method(rng);
        let status = network_activity::status(rng);
        let size = rng.range(1..1000);
        let time: i64 = rng.range(10..500);

        terminal.write_line(&format!(
            "  {}  {endpoint:<32}  → {} | {} | {size} KB",
            tint(&format!("{method:<8}"), method_color(method), config.minimal),
            tint(&status.to_string(), status_color(status), config.minimal),
            padded_number(time, " ms", 3),
        ))?;

        if rng.chance(0.33) {
            let details = network_activity::request_details(rng, config.dev_type);
            terminal.write_line(&format!("     ↳ {details}"))?;
        }

        pace.pause_random(rng, 100..400);
    }

    let total = rng.range(1000..10000);
    let average = rng.range(50..200);
    let success = rng.range(95..100);
    let bandwidth = rng.range(10..100);

    terminal.write_line("📊 Network Activity Summary:")?;
    terminal.write_line(&format!("  - Total requests: {total}"))?;
    terminal.write_line(&format!("  - Average response time: {average} ms"))?;
    terminal.write_line(&format!("  - Success rate: {success}%"))?;
    terminal.write_line(&format!("  - Bandwidth utilization: {bandwidth} MB/s"))?;

    if wants_jargon(config.jargon) {
        let line = jargon::network_jargon(rng, config.dev_type, config.jargon);
        terminal.write_line(&format!("  - {line}"))?;
    }
    terminal.write_line("")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_picks_sorted_index() {
        let sorted: Vec<f64> = (1..=100).map(f64::from).collect();
        assert!((percentile(&sorted, 0.5) - 51.0).abs() < f64::EPSILON);
        assert!((percentile(&sorted, 0.95) - 96.0).abs() < f64::EPSILON);
        assert!((percentile(&sorted, 0.99) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentile_clamps_and_handles_empty() {
        assert!((percentile(&[3.0], 0.99) - 3.0).abs() < f64::EPSILON);
        assert!(percentile(&[], 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < f64::EPSILON);
        assert!(mean(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_request_colors() {
        assert_eq!(method_color("GET"), Color::Green);
        assert_eq!(method_color("DELETE"), Color::Red);
        assert_eq!(method_color("PATCH"), Color::White);
        assert_eq!(status_color(204), Color::Green);
        assert_eq!(status_color(304), Color::Yellow);
        assert_eq!(status_color(404), Color::Red);
    }

    #[test]
    fn test_all_lists_five_activities() {
        let names: Vec<&str> = all::<crate::progress::MemoryTerminal>()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"system monitoring"));
    }
}
