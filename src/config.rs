use std::path::{Path, PathBuf};

use color_eyre::eyre::{self, bail, WrapErr};
use orrery::{bodies::SolarSystem, catalog, scale::SceneScale, time::preset};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Settings read from `orrery.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Starting date, `YYYY-MM-DD`, RFC 3339, or a preset name.
    pub start: String,
    /// Whole days advanced per tick.
    pub step_days: i64,
    /// Milliseconds between ticks.
    pub tick_ms: u64,
    /// Number of ticks to run.
    pub ticks: u64,
    pub realistic_scale: bool,
    /// RON body catalog replacing the built-in one.
    pub catalog: Option<PathBuf>,
    /// Body ids to report each tick. Empty reports every planet.
    pub focus: Vec<String>,
    pub scale: SceneScale,
    /// Clock changes scheduled by tick, written as `[[events]]` tables.
    pub events: Vec<ClockEvent>,
}

/// Changes applied to the clock before tick `tick` is evaluated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockEvent {
    pub tick: u64,
    pub playing: Option<bool>,
    pub step_days: Option<i64>,
    /// Preset name, see [`orrery::time::PRESET_DATES`].
    pub jump_to: Option<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            start: "2000-01-01T12:00:00Z".to_owned(),
            step_days: 1,
            tick_ms: 100,
            ticks: 50,
            realistic_scale: false,
            catalog: None,
            focus: Vec::new(),
            scale: SceneScale::default(),
            events: Vec::new(),
        }
    }
}

/// Speeds offered by the time controls, in days per tick.
pub const SPEEDS: [i64; 4] = [1, 10, 100, 1000];

fn check_speed(step_days: i64) -> eyre::Result<()> {
    if !SPEEDS.contains(&step_days.abs()) {
        bail!("step_days must be one of {SPEEDS:?} (negative runs backwards), got {step_days}");
    }
    Ok(())
}

impl DriverConfig {
    pub fn parse(src: &str) -> eyre::Result<Self> {
        let config: Self = toml::from_str(src).wrap_err("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, or fall back to defaults when it does not exist.
    pub fn load(path: &Path) -> eyre::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let src = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Self::parse(&src)
    }

    fn validate(&self) -> eyre::Result<()> {
        check_speed(self.step_days)?;
        if self.scale.distance <= 0.0 || self.scale.size <= 0.0 {
            bail!("scale factors must be positive");
        }
        for event in &self.events {
            if event.tick >= self.ticks {
                warn!(tick = event.tick, ticks = self.ticks, "clock event after the last tick");
            }
            if let Some(step_days) = event.step_days {
                check_speed(step_days)?;
            }
            if let Some(name) = &event.jump_to {
                if preset(name).is_none() {
                    bail!("event at tick {}: unknown preset `{name}`", event.tick);
                }
            }
            if event.playing.is_none() && event.step_days.is_none() && event.jump_to.is_none() {
                bail!("event at tick {} changes nothing", event.tick);
            }
        }
        Ok(())
    }

    /// Events due before tick `tick`, in file order.
    pub fn events_at(&self, tick: u64) -> impl Iterator<Item = &ClockEvent> + '_ {
        self.events.iter().filter(move |e| e.tick == tick)
    }

    pub fn load_catalog(&self) -> eyre::Result<SolarSystem> {
        let Some(path) = &self.catalog else {
            return Ok(catalog::builtin());
        };
        let src = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read catalog {}", path.display()))?;
        SolarSystem::from_ron(&src)
    }
}
