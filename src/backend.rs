use std::{
    collections::HashMap,
    sync::{
        mpsc::{Receiver, Sender},
        Arc,
    },
};

use nalgebra::Vector3;
use orrery::{
    bodies::SolarSystem,
    cache::PositionCache,
    illumination::{classify_regions, subsolar_point, SubsolarPoint, SunlitRegions},
    scale::visual_size,
};
use time::OffsetDateTime;
use tracing::{debug, trace};

pub enum HReq {
    Evaluate(OffsetDateTime),
    ClearCache,
    Shutdown,
}

/// Everything the display layer needs for one tick.
#[derive(Clone, Debug)]
pub struct Frame {
    pub date: OffsetDateTime,
    pub positions: HashMap<Arc<str>, Vector3<f64>>,
    pub sizes: HashMap<Arc<str>, f64>,
    pub subsolar: SubsolarPoint,
    pub regions: SunlitRegions,
}

pub enum HRes {
    Frame(Box<Frame>),
    CacheCleared,
}

/// Evaluate the engine for `date`.
pub fn evaluate(
    system: &SolarSystem,
    cache: &PositionCache,
    realistic: bool,
    date: OffsetDateTime,
) -> Frame {
    let positions = cache.system_positions(system, date);
    let sizes = system
        .bodies
        .iter()
        .map(|b| (b.id.clone(), visual_size(b, realistic, cache.scale())))
        .collect();
    Frame {
        date,
        positions,
        sizes,
        subsolar: subsolar_point(date),
        regions: classify_regions(date),
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn handler_thread(
    rx: Receiver<HReq>,
    tx: Sender<HRes>,
    system: Arc<SolarSystem>,
    cache: Arc<PositionCache>,
    realistic: bool,
) {
    while let Ok(req) = rx.recv() {
        let res = match req {
            HReq::Evaluate(date) => {
                trace!(%date, "evaluating");
                HRes::Frame(Box::new(evaluate(&system, &cache, realistic, date)))
            }
            HReq::ClearCache => {
                cache.clear();
                HRes::CacheCleared
            }
            HReq::Shutdown => break,
        };
        if tx.send(res).is_err() {
            break;
        }
    }
    let (hits, misses) = cache.stats();
    debug!(hits, misses, "handler thread exiting");
}
