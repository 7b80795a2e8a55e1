#![warn(clippy::unwrap_used, clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]
use std::{
    path::PathBuf,
    sync::{mpsc, Arc},
    thread,
    time::Duration,
};

use backend::{handler_thread, Frame, HReq, HRes};
use clock::Clock;
use color_eyre::eyre::{self, bail, OptionExt};
use config::DriverConfig;
use itertools::Itertools;
use nalgebra::Vector3;
use orrery::{
    bodies::{BodyKind, SolarSystem},
    cache::PositionCache,
    format::format_distance,
    kepler::{distance_between, ecliptic::ecliptic_longitude},
    scale::{satellite_clamp_engaged, SceneScale},
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod backend;
mod clock;
mod config;

fn report(frame: &Frame, system: &SolarSystem, focus: &[String], scale: &SceneScale) -> String {
    let ids: Vec<&str> = if focus.is_empty() {
        system
            .of_kind(BodyKind::Planet)
            .map(|b| &*b.id)
            .collect()
    } else {
        focus.iter().map(String::as_str).collect()
    };
    let bodies = ids
        .iter()
        .filter_map(|id| {
            let body = system.get(id)?;
            let p = frame.positions.get(*id)?;
            let size = frame.sizes.get(*id)?;
            Some(format!(
                "{} {} λ={:.1}° r={size:.4}",
                body.name,
                format_distance(distance_between(p, &Vector3::zeros(), scale)),
                ecliptic_longitude(body, frame.date)
            ))
        })
        .join(" | ");
    format!(
        "{}  sun overhead {}  day {} twilight {} night {}  {}",
        frame.date.date(),
        frame.subsolar,
        frame.regions.daylight.len(),
        frame.regions.twilight.len(),
        frame.regions.night.len(),
        bodies
    )
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("orrery.toml"), PathBuf::from);
    let config = DriverConfig::load(&path)?;
    let system = Arc::new(config.load_catalog()?);
    if system.star().is_none() {
        bail!("catalog has no star");
    }
    for id in &config.focus {
        system
            .get(id)
            .ok_or_eyre(format!("focus body `{id}` is not in the catalog"))?;
    }
    for moon in system.of_kind(BodyKind::Moon) {
        if satellite_clamp_engaged(moon, &config.scale) {
            info!(moon = %moon.id, "orbit raised to clear its parent");
        }
    }

    let mut clock = Clock::parse(&config.start, config.step_days)?;
    let cache = Arc::new(PositionCache::new(config.scale));
    let (main_tx, handler_rx) = mpsc::channel();
    let (handler_tx, main_rx) = mpsc::channel();
    let handler = {
        let system = system.clone();
        let cache = cache.clone();
        let realistic = config.realistic_scale;
        thread::spawn(move || handler_thread(handler_rx, handler_tx, system, cache, realistic))
    };

    info!(start = %clock.date(), step_days = config.step_days, ticks = config.ticks, "running");
    for tick in 0..config.ticks {
        for event in config.events_at(tick) {
            clock.apply(event)?;
        }
        main_tx.send(HReq::Evaluate(clock.date()))?;
        match main_rx.recv()? {
            HRes::Frame(frame) => {
                let line = report(&frame, &system, &config.focus, &config.scale);
                if clock.playing() {
                    println!("{line}");
                } else {
                    println!("{line}  [paused]");
                }
            }
            HRes::CacheCleared => warn!("unexpected reply"),
        }
        clock.tick();
        // positions are never revisited once the clock moves on
        main_tx.send(HReq::ClearCache)?;
        main_rx.recv()?;
        thread::sleep(Duration::from_millis(config.tick_ms));
    }

    main_tx.send(HReq::Shutdown)?;
    if handler.join().is_err() {
        bail!("handler thread panicked");
    }
    Ok(())
}
