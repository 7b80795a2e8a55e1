use color_eyre::eyre::{self, OptionExt};
use orrery::time::{parse_date, preset};
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::config::ClockEvent;

/// The simulation clock. Owns the current date; the engine only ever sees
/// the value it hands out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Clock {
    date: OffsetDateTime,
    step_days: i64,
    playing: bool,
}

impl Clock {
    pub fn new(date: OffsetDateTime, step_days: i64) -> Self {
        Self {
            date,
            step_days,
            playing: true,
        }
    }

    /// Accepts anything [`parse_date`] does, or a preset name.
    pub fn parse(start: &str, step_days: i64) -> eyre::Result<Self> {
        let date = match preset(start) {
            Some(date) => date,
            None => parse_date(start)?,
        };
        Ok(Self::new(date, step_days))
    }

    pub fn date(&self) -> OffsetDateTime {
        self.date
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn set_speed(&mut self, step_days: i64) {
        self.step_days = step_days;
    }

    /// Advance one tick and return the new date. A paused clock stays put.
    pub fn tick(&mut self) -> OffsetDateTime {
        if self.playing {
            self.date = self
                .date
                .checked_add(Duration::days(self.step_days))
                .unwrap_or(self.date);
        }
        self.date
    }

    pub fn jump_to(&mut self, name: &str) -> eyre::Result<()> {
        self.date = preset(name).ok_or_eyre(format!("unknown preset `{name}`"))?;
        Ok(())
    }

    /// Apply a scheduled change: speed, then play state, then the jump.
    pub fn apply(&mut self, event: &ClockEvent) -> eyre::Result<()> {
        if let Some(step_days) = event.step_days {
            self.set_speed(step_days);
        }
        if let Some(playing) = event.playing {
            self.set_playing(playing);
        }
        if let Some(name) = &event.jump_to {
            self.jump_to(name)?;
        }
        info!(
            tick = event.tick,
            date = %self.date,
            playing = self.playing,
            step_days = self.step_days,
            "clock changed"
        );
        Ok(())
    }
}
