use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bon::Builder;
use log::{info, warn};
use serde::Deserialize;

use super::kinds::{Complexity, DevelopmentType, JargonLevel};
use crate::common::project_config_dir;

pub(crate) const PROFILE_FILE_NAME: &str = "stakeholder.toml";
pub const DEFAULT_PROJECT: &str = "distributed-cluster";

#[derive(clap::Args, Default)]
pub struct SessionArgs {
    /// Type of development activity to simulate
    #[arg(short = 'd', long, value_enum)]
    pub dev_type: Option<DevelopmentType>,

    /// Level of technical jargon in output
    #[arg(short, long, value_enum)]
    pub jargon: Option<JargonLevel>,

    /// How busy and complex the output should appear
    #[arg(short, long, value_enum)]
    pub complexity: Option<Complexity>,

    /// Duration in seconds to run (0 = run until interrupted)
    #[arg(short = 'T', long)]
    pub duration: Option<u64>,

    /// Show critical system alerts or issues
    #[arg(short, long)]
    pub alerts: bool,

    /// Simulate a specific project
    #[arg(short, long)]
    pub project: Option<String>,

    /// Use less colorful output
    #[arg(short, long)]
    pub minimal: bool,

    /// Show team collaboration activity
    #[arg(short, long)]
    pub team: bool,

    /// Simulate a specific framework usage
    #[arg(short = 'F', long)]
    pub framework: Option<String>,
}

/// Optional TOML profile. Every key may be left out.
///
/// ```toml
/// dev-type = "game-development"
/// complexity = "extreme"
/// alerts = true
/// project = "quantum-ledger"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Profile {
    pub dev_type: Option<DevelopmentType>,
    pub jargon: Option<JargonLevel>,
    pub complexity: Option<Complexity>,
    pub duration: Option<u64>,
    pub alerts: Option<bool>,
    pub project: Option<String>,
    pub minimal: Option<bool>,
    pub team: Option<bool>,
    pub framework: Option<String>,
}

impl Profile {
    pub(crate) fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;

        let profile: Profile = toml::from_str(&content)
            .with_context(|| format!("Unable to parse profile {}", path.display()))?;

        Ok(profile)
    }

    /// Loads `explicit` if given, otherwise the default profile if one exists.
    ///
    /// Only an explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("loading profile {}", path.display());
            return Self::load_from_path(path);
        }

        let path = match default_profile_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("no default profile location: {e}");
                return Ok(Self::default());
            }
        };

        if path.exists() {
            info!("loading profile {}", path.display());
            Self::load_from_path(&path)
        } else {
            //
            // no profile, built-in defaults
            //
            Ok(Self::default())
        }
    }
}

fn default_profile_path() -> Result<PathBuf> {
    Ok(project_config_dir()?.join(PROFILE_FILE_NAME))
}

/// Everything a session needs to decide what to print.
#[derive(Debug, Clone, Builder)]
pub struct SessionConfig {
    #[builder(default)]
    pub dev_type: DevelopmentType,
    #[builder(default)]
    pub jargon: JargonLevel,
    #[builder(default)]
    pub complexity: Complexity,
    /// Seconds to run; 0 runs until interrupted.
    #[builder(default)]
    pub duration: u64,
    #[builder(default)]
    pub alerts: bool,
    #[builder(into, default = DEFAULT_PROJECT.to_owned())]
    pub project: String,
    #[builder(default)]
    pub minimal: bool,
    #[builder(default)]
    pub team: bool,
    #[builder(into, default)]
    pub framework: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SessionConfig {
    /// Command line over profile over built-in defaults. Switches are OR-ed.
    #[must_use]
    pub fn resolve(args: &SessionArgs, profile: Profile) -> Self {
        let config = Self::builder()
            .maybe_dev_type(args.dev_type.or(profile.dev_type))
            .maybe_jargon(args.jargon.or(profile.jargon))
            .maybe_complexity(args.complexity.or(profile.complexity))
            .maybe_duration(args.duration.or(profile.duration))
            .alerts(args.alerts || profile.alerts.unwrap_or(false))
            .maybe_project(args.project.clone().or(profile.project))
            .minimal(args.minimal || profile.minimal.unwrap_or(false))
            .team(args.team || profile.team.unwrap_or(false))
            .maybe_framework(args.framework.clone().or(profile.framework))
            .build();

        info!(
            "session: dev_type={} jargon={} complexity={} duration={}s alerts={} team={} minimal={} project={} framework={}",
            config.dev_type,
            config.jargon,
            config.complexity,
            config.duration,
            config.alerts,
            config.team,
            config.minimal,
            config.project,
            config.framework,
        );

        config
    }

    /// `" (<framework> specific)"`, or empty without a framework.
    #[must_use]
    pub fn framework_suffix(&self) -> String {
        if self.framework.is_empty() {
            String::new()
        } else {
            format!(" ({} specific)", self.framework)
        }
    }
}
