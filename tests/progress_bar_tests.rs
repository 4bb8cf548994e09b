#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use crossterm::style::Color;
use stakeholder::progress::{
    BarPhase, Field, FieldColor, MemoryTerminal, ProgressBar, SPINNER_FRAMES, Template, Terminal,
};

const BOOT: &str = "{spinner:.green} [{elapsed_precise}] [{bar:10.cyan/blue}] {pos}/{len} ({eta})";

#[test]
fn test_boot_template_first_frame() {
    let mut pb = ProgressBar::with_terminal(10, BOOT, MemoryTerminal::new());
    pb.set_position(0).unwrap();

    let term = pb.terminal();
    assert_eq!(
        term.line(0),
        "⠁ [00:00:00] [▰▱▱▱▱▱▱▱▱▱] 1/10 (00:00:00)"
    );
    assert_eq!(term.cells(0)[0].color, Color::Green);
    // ambient color after the spinner
    assert_eq!(term.cells(0)[1].color, Color::Reset);
    assert_eq!(term.cursor_column(), 0);
}

#[test]
fn test_spinner_steps_once_per_render() {
    let mut pb = ProgressBar::with_terminal(50, "{spinner}{spinner}", MemoryTerminal::new());

    for (i, frame) in SPINNER_FRAMES.iter().take(5).enumerate() {
        pb.set_position(u64::try_from(i).unwrap()).unwrap();
        let line = pb.terminal().line(0);
        assert!(line.starts_with(*frame), "frame {i}: {line}");
        assert_eq!(line.chars().nth(1), Some(*frame));
    }
}

#[test]
fn test_bar_colors_and_restoration() {
    let mut term = MemoryTerminal::new();
    term.set_foreground(Color::Magenta).unwrap();

    let mut pb = ProgressBar::with_terminal(4, "[{bar:4.yellow/blue}]", &mut term);
    pb.set_position(1).unwrap();
    drop(pb);

    let cells = term.cells(0);
    assert_eq!(cells[0].color, Color::Magenta);
    assert_eq!(cells[1].color, Color::Yellow);
    assert_eq!(cells[2].color, Color::Yellow);
    assert_eq!(cells[3].color, Color::Blue);
    assert_eq!(cells[5].color, Color::Magenta);
    assert_eq!(term.foreground(), Color::Magenta);
}

#[test]
fn test_log_lines_stack_above_bar() {
    let mut pb = ProgressBar::with_terminal(5, "{pos}/{len}", MemoryTerminal::new());

    for i in 0..5 {
        pb.set_position(i).unwrap();
        if i < 4 {
            pb.write_line(&format!("step {i}")).unwrap();
        }
    }

    let lines: Vec<String> = pb
        .terminal()
        .lines()
        .iter()
        .map(|l| l.trim_end().to_owned())
        .collect();
    assert_eq!(lines, vec!["step 0", "step 1", "step 2", "step 3", ""]);
    assert_eq!(pb.phase(), BarPhase::Finished);
}

#[test]
fn test_template_validation_up_front() {
    let template: Template = "{spinner:.blue} {bar:30.cyan/blue} {pos}".parse().unwrap();
    assert_eq!(
        template.fields()[0],
        Field::Spinner {
            color: FieldColor::Blue
        }
    );

    let err = Template::parse("{pos} {wat}").unwrap_err();
    assert_eq!(err.to_string(), "invalid template field `wat`");
}

#[test]
fn test_dyn_terminal_target() {
    let mut term = MemoryTerminal::new();
    {
        let target: &mut dyn Terminal = &mut term;
        let mut pb = ProgressBar::with_terminal(3, "{pos}", target);
        pb.set_position(0).unwrap();
    }
    assert_eq!(term.line(0), "1");
}
