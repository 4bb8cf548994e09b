//! The main loop: pick activities by complexity until the duration runs out.

use std::{
    ops::Range,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use log::{debug, info};

use crate::{
    activities,
    config::SessionConfig,
    display,
    progress::{StdoutTerminal, Terminal},
    rng::Rng,
};

/// Whether pauses actually sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Realtime,
    /// No sleeping; used to run activities headless.
    Instant,
}

impl Pace {
    pub fn pause(self, millis: u64) {
        if self == Self::Realtime {
            thread::sleep(Duration::from_millis(millis));
        }
    }

    /// Pauses for a random number of milliseconds in `range`.
    pub fn pause_random(self, rng: &mut Rng, range: Range<u64>) {
        let millis = rng.range(range);
        self.pause(millis);
    }
}

pub struct Session<T: Terminal = StdoutTerminal> {
    pub(crate) config: SessionConfig,
    pub(crate) rng: Rng,
    pub(crate) terminal: T,
    pub(crate) pace: Pace,
    /// Raised from outside (Ctrl-C) to end the session early.
    pub(crate) shutdown: Arc<AtomicBool>,
    started: Instant,
}

impl Session<StdoutTerminal> {
    #[must_use]
    pub fn new(config: SessionConfig, rng: Rng) -> Self {
        Self::with_terminal(config, rng, StdoutTerminal::new(), Pace::Realtime)
    }
}

impl<T: Terminal> Session<T> {
    pub fn with_terminal(config: SessionConfig, rng: Rng, terminal: T, pace: Pace) -> Self {
        Self {
            config,
            rng,
            terminal,
            pace,
            shutdown: Arc::new(AtomicBool::new(false)),
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Flag that stops the session once set. Hand a clone to a signal handler.
    #[must_use]
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// True once interrupted or once the configured duration has elapsed.
    /// A duration of 0 only ends by interruption.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.interrupted()
            || (self.config.duration > 0
                && self.started.elapsed() >= Duration::from_secs(self.config.duration))
    }

    /// Boot sequence, then activity rounds until the duration elapses.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "session started: project={} duration={}s",
            self.config.project, self.config.duration
        );

        display::boot_sequence(self)?;
        self.started = Instant::now();

        let mut rounds: u64 = 0;
        while !self.expired() {
            self.round()?;
            rounds = rounds.saturating_add(1);
        }

        info!(
            "session finished after {rounds} rounds in {}s (interrupted: {})",
            self.started.elapsed().as_secs(),
            self.interrupted()
        );
        Ok(())
    }

    /// One loop iteration: a shuffled subset of activities, then maybe an
    /// alert and maybe a team update.
    pub fn round(&mut self) -> Result<()> {
        let mut all = activities::all::<T>();
        self.rng.shuffle(&mut all);

        let count = self.config.complexity.activity_count();
        for &(name, activity) in all.iter().take(count) {
            debug!("running activity {name}");
            activity(self)?;
            self.pace.pause_random(&mut self.rng, 100..500);

            if self.expired() {
                return Ok(());
            }
        }

        if self.config.alerts && self.rng.chance(0.1) {
            display::random_alert(self)?;
        }

        if self.config.team && self.rng.chance(0.2) {
            display::team_activity(self)?;
        }

        Ok(())
    }
}
