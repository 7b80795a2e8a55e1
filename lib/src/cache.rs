//! Memoized positions.
//!
//! Positions are pure functions of `(body, date, parent position)`, so a
//! cache can be shared freely between threads and dropped at any time.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use nalgebra::Vector3;
use ordered_float::OrderedFloat;
use parking_lot::RwLock;
use time::OffsetDateTime;
use tracing::trace;

use crate::{
    bodies::{Body, SolarSystem},
    kepler::orbits::{orbital_position, system_positions_with},
    scale::SceneScale,
};

type Key = (Arc<str>, OffsetDateTime, [OrderedFloat<f64>; 3]);

#[derive(Debug)]
pub struct PositionCache {
    scale: SceneScale,
    entries: RwLock<HashMap<Key, Vector3<f64>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PositionCache {
    pub fn new(scale: SceneScale) -> Self {
        Self {
            scale,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn scale(&self) -> &SceneScale {
        &self.scale
    }

    /// Same result as [`orbital_position`] with this cache's scale.
    pub fn position(
        &self,
        body: &Body,
        date: OffsetDateTime,
        parent_position: Vector3<f64>,
    ) -> Vector3<f64> {
        let key = (
            body.id.clone(),
            date,
            [
                OrderedFloat(parent_position.x),
                OrderedFloat(parent_position.y),
                OrderedFloat(parent_position.z),
            ],
        );
        if let Some(p) = self.entries.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *p;
        }
        trace!(body = %body.id, %date, "position cache miss");
        self.misses.fetch_add(1, Ordering::Relaxed);
        let p = orbital_position(body, date, parent_position, &self.scale);
        self.entries.write().insert(key, p);
        p
    }

    /// Cached counterpart of [`crate::kepler::system_positions`].
    pub fn system_positions(
        &self,
        system: &SolarSystem,
        date: OffsetDateTime,
    ) -> HashMap<Arc<str>, Vector3<f64>> {
        system_positions_with(system, |body, parent| self.position(body, date, parent))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
