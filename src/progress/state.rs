use std::time::{Duration, Instant};

/// Braille animation cycled by `{spinner}`; the trailing blank is a frame too.
pub const SPINNER_FRAMES: &[char] = &[
    '⠁', '⠁', '⠉', '⠙', '⠚', '⠒', '⠂', '⠂', '⠒', '⠲', '⠴', '⠤', '⠄', '⠄', '⠤', '⠠', '⠠', '⠤', '⠦',
    '⠖', '⠒', '⠐', '⠐', '⠒', '⠓', '⠋', '⠉', '⠈', '⠈', ' ',
];

/// Mutable data a bar renders from.
///
/// Invariant: `0 <= value <= max_value` and `max_value >= 1`.
#[derive(Debug, Clone)]
pub struct ProgressState {
    value: u64,
    max_value: u64,
    start: Instant,
    spinner_frame: usize,
    max_rendered_width: u16,
}

impl ProgressState {
    /// Starts the clock. A `max_value` of zero is raised to one.
    #[must_use]
    pub fn new(max_value: u64) -> Self {
        Self {
            value: 0,
            max_value: max_value.max(1),
            start: Instant::now(),
            spinner_frame: 0,
            max_rendered_width: 0,
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Stores `value`, clamped to `max_value`.
    pub fn set_value(&mut self, value: u64) {
        self.value = value.min(self.max_value);
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.value >= self.max_value
    }

    #[must_use]
    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    #[must_use]
    pub fn spinner_glyph(&self) -> char {
        SPINNER_FRAMES
            .get(self.spinner_frame)
            .copied()
            .unwrap_or(' ')
    }

    #[allow(clippy::arithmetic_side_effects)]
    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Remaining time projected from the current rate.
    #[must_use]
    pub fn eta(&self) -> Duration {
        self.eta_after(self.elapsed())
    }

    /// Linear projection: `elapsed * max / value - elapsed`.
    ///
    /// Zero at both ends of the range, where there is nothing to project.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn eta_after(&self, elapsed: Duration) -> Duration {
        if self.value == 0 || self.value >= self.max_value {
            return Duration::ZERO;
        }

        let elapsed_ms = elapsed.as_millis();
        let estimated_total = elapsed_ms * u128::from(self.max_value) / u128::from(self.value);
        let remaining = estimated_total.saturating_sub(elapsed_ms);

        Duration::from_millis(u64::try_from(remaining).unwrap_or(u64::MAX))
    }

    /// Widest column any render has reached.
    #[must_use]
    pub fn max_rendered_width(&self) -> u16 {
        self.max_rendered_width
    }

    pub fn record_width(&mut self, column: u16) {
        self.max_rendered_width = self.max_rendered_width.max(column);
    }
}

/// Formats as `hh:mm:ss`. Hours keep counting past 24.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn format_hms(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_empty() {
        let state = ProgressState::new(10);
        assert_eq!(state.value(), 0);
        assert_eq!(state.max_value(), 10);
        assert_eq!(state.spinner_frame(), 0);
        assert_eq!(state.max_rendered_width(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_zero_max_is_raised_to_one() {
        let state = ProgressState::new(0);
        assert_eq!(state.max_value(), 1);
    }

    #[test]
    fn test_set_value_clamps_to_max() {
        let mut state = ProgressState::new(5);
        state.set_value(42);
        assert_eq!(state.value(), 5);
        assert!(state.is_complete());
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = ProgressState::new(1);
        for _ in 0..SPINNER_FRAMES.len() {
            state.advance_spinner();
        }
        assert_eq!(state.spinner_frame(), 0);
        assert_eq!(state.spinner_glyph(), SPINNER_FRAMES[0]);

        state.advance_spinner();
        assert_eq!(state.spinner_frame(), 1);
    }

    #[test]
    fn test_eta_zero_at_start() {
        let state = ProgressState::new(5);
        assert_eq!(state.eta_after(Duration::from_secs(30)), Duration::ZERO);
    }

    #[test]
    fn test_eta_zero_when_complete() {
        let mut state = ProgressState::new(5);
        state.set_value(5);
        assert_eq!(state.eta_after(Duration::from_secs(30)), Duration::ZERO);
    }

    #[test]
    fn test_eta_linear_projection() {
        let mut state = ProgressState::new(10);
        state.set_value(2);
        // 2 of 10 in 4s => 20s total => 16s left
        assert_eq!(
            state.eta_after(Duration::from_secs(4)),
            Duration::from_secs(16)
        );

        state.set_value(5);
        assert_eq!(
            state.eta_after(Duration::from_secs(4)),
            Duration::from_secs(4)
        );
    }

    #[test]
    fn test_eta_non_zero_strictly_inside_range() {
        let mut state = ProgressState::new(100);
        for value in 1..100 {
            state.set_value(value);
            assert!(state.eta_after(Duration::from_secs(100)) > Duration::ZERO);
        }
    }

    #[test]
    fn test_record_width_is_high_water_mark() {
        let mut state = ProgressState::new(1);
        state.record_width(30);
        state.record_width(12);
        assert_eq!(state.max_rendered_width(), 30);
        state.record_width(31);
        assert_eq!(state.max_rendered_width(), 31);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::ZERO), "00:00:00");
        assert_eq!(format_hms(Duration::from_millis(59_999)), "00:00:59");
        assert_eq!(format_hms(Duration::from_secs(3_725)), "01:02:05");
        assert_eq!(format_hms(Duration::from_secs(100 * 3_600)), "100:00:00");
    }
}
