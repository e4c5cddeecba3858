use std::collections::HashSet;

use log::{debug, trace};

use super::collidable::{Collidable, CollidableId};
use super::collision::{ColliderRef, Collision, PreCollision};
use super::sweep::{insertion_sort_by_key, Axis, MarkerKind, SweepMarker};
use crate::colliders::Collider;
use crate::detection;
use crate::error::CollisionError;
use crate::math::Point2D;

/// One registered object: its elementary colliders plus the lazy-removal
/// tombstone. The slot stays occupied until the next sweep purges the
/// object's markers.
#[derive(Debug)]
struct Entry {
    colliders: Vec<Collider>,
    pending_removal: bool,
}

/// Frame-stepped collision detection over a mutable set of registered
/// objects: sweep-and-prune broad phase on both axes, narrow-phase
/// verification of the surviving pairs.
///
/// Single-threaded by design; the intended per-frame order is
/// register/deregister, move colliders, [`update`](Self::update), then
/// [`collisions`](Self::collisions).
#[derive(Debug, Default)]
pub struct CollisionManager {
    entries: Vec<Option<Entry>>,
    free_slots: Vec<usize>,
    x_markers: Vec<SweepMarker>,
    y_markers: Vec<SweepMarker>,
}

impl CollisionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an object and indexes its current colliders, returning a
    /// stable handle. Fails if the object reports a composite collider:
    /// the broad phase needs a bounding rect per collider, so only
    /// elementary colliders may be registered (flatten composites in the
    /// `Collidable` implementation).
    pub fn register<C>(&mut self, obj: &C) -> Result<CollidableId, CollisionError>
    where
        C: Collidable + ?Sized,
    {
        let colliders = obj.colliders();
        for collider in &colliders {
            collider.bounding_rect()?;
        }

        let slot = match self.free_slots.pop() {
            Some(slot) => slot,
            None => {
                self.entries.push(None);
                self.entries.len() - 1
            }
        };
        let id = CollidableId(slot);

        for index in 0..colliders.len() {
            let target = ColliderRef {
                object: id,
                collider: index,
            };
            self.x_markers.push(SweepMarker::new(target, MarkerKind::Begin));
            self.x_markers.push(SweepMarker::new(target, MarkerKind::End));
            self.y_markers.push(SweepMarker::new(target, MarkerKind::Begin));
            self.y_markers.push(SweepMarker::new(target, MarkerKind::End));
        }
        debug!(
            "registered collidable {:?} with {} collider(s)",
            id,
            colliders.len()
        );
        self.entries[slot] = Some(Entry {
            colliders,
            pending_removal: false,
        });
        self.update();
        Ok(id)
    }

    pub fn register_many(
        &mut self,
        objs: &[&dyn Collidable],
    ) -> Result<Vec<CollidableId>, CollisionError> {
        objs.iter().map(|obj| self.register(*obj)).collect()
    }

    /// Marks an object for removal. Its sweep markers stay in the marker
    /// sequences until the next broad phase purges them, but the object
    /// stops participating in results immediately. Unknown or already
    /// removed ids are ignored.
    pub fn deregister(&mut self, id: CollidableId) {
        match self.entries.get_mut(id.0).and_then(Option::as_mut) {
            Some(entry) if !entry.pending_removal => {
                entry.pending_removal = true;
                debug!("deregistered collidable {:?}", id);
            }
            _ => debug!("deregister of inactive collidable {:?} ignored", id),
        }
    }

    pub fn deregister_many(&mut self, ids: &[CollidableId]) {
        for &id in ids {
            self.deregister(id);
        }
    }

    /// True if the object is registered and not pending removal.
    pub fn is_active(&self, id: CollidableId) -> bool {
        self.entries
            .get(id.0)
            .and_then(Option::as_ref)
            .is_some_and(|entry| !entry.pending_removal)
    }

    /// Number of active objects.
    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .flatten()
            .filter(|entry| !entry.pending_removal)
            .count()
    }

    /// The object's colliders, for hit-testing and rendering.
    pub fn colliders(&self, id: CollidableId) -> Option<&[Collider]> {
        if !self.is_active(id) {
            return None;
        }
        self.entries[id.0]
            .as_ref()
            .map(|entry| entry.colliders.as_slice())
    }

    /// Mutable access to the object's colliders so the caller's frame
    /// loop can move them. Call [`update`](Self::update) afterwards to
    /// restore marker order.
    pub fn colliders_mut(&mut self, id: CollidableId) -> Option<&mut [Collider]> {
        if !self.is_active(id) {
            return None;
        }
        self.entries[id.0]
            .as_mut()
            .map(|entry| entry.colliders.as_mut_slice())
    }

    /// Translates every collider of the object by `v`. Inactive ids are
    /// ignored.
    pub fn translate(&mut self, id: CollidableId, v: Point2D) {
        if let Some(colliders) = self.colliders_mut(id) {
            for collider in colliders {
                collider.translate(v);
            }
        }
    }

    /// Re-sorts both axis marker sequences by current projected value,
    /// begin markers before end markers at equal coordinates. Call once
    /// per frame after moving objects.
    pub fn update(&mut self) {
        let entries = &self.entries;
        insertion_sort_by_key(&mut self.x_markers, |m| {
            (marker_value(entries, m, Axis::X), m.kind)
        });
        insertion_sort_by_key(&mut self.y_markers, |m| {
            (marker_value(entries, m, Axis::Y), m.kind)
        });
    }

    /// Runs the full pipeline and returns the verified collision set for
    /// the current frame.
    ///
    /// Propagates the narrow-phase error if two registered colliders form
    /// a pairing the detector does not implement.
    pub fn collisions(&mut self) -> Result<HashSet<Collision>, CollisionError> {
        let candidates = self.broad_phase();
        self.narrow_phase(&candidates)
    }

    /// Sweep-and-prune on both axes; a pair survives only if its bounding
    /// rects overlap on both. Marker sequences must be sorted on entry
    /// (see [`update`](Self::update)). Pending removals are purged here,
    /// after both axes have been swept.
    fn broad_phase(&mut self) -> HashSet<PreCollision> {
        let colliding_in_x = self.broad_phase_axis(Axis::X);
        let colliding_in_y = self.broad_phase_axis(Axis::Y);
        self.purge_removed();
        let combined: HashSet<PreCollision> = colliding_in_x
            .intersection(&colliding_in_y)
            .copied()
            .collect();
        trace!(
            "broad phase: {} x-candidates, {} y-candidates, {} combined",
            colliding_in_x.len(),
            colliding_in_y.len(),
            combined.len()
        );
        combined
    }

    /// One sweep-and-prune pass: walk the sorted markers keeping a set of
    /// currently open intervals; every begin marker pairs with everything
    /// open (except colliders of the same object). Markers of objects
    /// pending removal are skipped and physically deleted after the walk.
    fn broad_phase_axis(&mut self, axis: Axis) -> HashSet<PreCollision> {
        let markers = match axis {
            Axis::X => &self.x_markers,
            Axis::Y => &self.y_markers,
        };

        let mut pre_collisions = HashSet::new();
        let mut touching: Vec<ColliderRef> = Vec::new();
        let mut keep = vec![true; markers.len()];

        for (i, marker) in markers.iter().enumerate() {
            let target = marker.target;
            if !self.is_active(target.object) {
                keep[i] = false;
                continue;
            }
            match marker.kind {
                MarkerKind::End => {
                    touching.retain(|open| *open != target);
                }
                MarkerKind::Begin => {
                    for &open in &touching {
                        if open.object == target.object {
                            continue;
                        }
                        pre_collisions.insert(PreCollision::new(target, open));
                    }
                    touching.push(target);
                }
            }
        }

        let markers = match axis {
            Axis::X => &mut self.x_markers,
            Axis::Y => &mut self.y_markers,
        };
        let mut index = 0;
        markers.retain(|_| {
            let kept = keep[index];
            index += 1;
            kept
        });

        pre_collisions
    }

    /// Frees the slots of objects whose markers both sweeps have now
    /// deleted.
    fn purge_removed(&mut self) {
        for (slot, entry) in self.entries.iter_mut().enumerate() {
            if entry.as_ref().is_some_and(|e| e.pending_removal) {
                *entry = None;
                self.free_slots.push(slot);
                debug!("purged collidable slot {}", slot);
            }
        }
    }

    /// Verifies every broad-phase candidate with the exact detector.
    fn narrow_phase(
        &self,
        candidates: &HashSet<PreCollision>,
    ) -> Result<HashSet<Collision>, CollisionError> {
        let mut collisions = HashSet::new();
        for &pair in candidates {
            let (Some(first), Some(second)) =
                (self.collider(pair.first), self.collider(pair.second))
            else {
                continue;
            };
            if let Some(vector) = detection::collide(first, second)? {
                collisions.insert(Collision::new(pair, vector));
            }
        }
        trace!(
            "narrow phase: {} of {} candidates collide",
            collisions.len(),
            candidates.len()
        );
        Ok(collisions)
    }

    fn collider(&self, target: ColliderRef) -> Option<&Collider> {
        self.entries
            .get(target.object.0)?
            .as_ref()?
            .colliders
            .get(target.collider)
    }
}

/// A marker's sort key: the projected coordinate of its collider's
/// current bounding rect. Markers never outlive their entry, and only
/// elementary colliders are registered, so the fallback is unreachable.
fn marker_value(entries: &[Option<Entry>], marker: &SweepMarker, axis: Axis) -> i64 {
    let target = marker.target;
    match entries
        .get(target.object.0)
        .and_then(Option::as_ref)
        .and_then(|entry| entry.colliders.get(target.collider))
        .and_then(|collider| collider.bounding_rect().ok())
    {
        Some(rect) => marker.value(&rect, axis),
        None => {
            debug_assert!(false, "sweep marker without a live collider: {:?}", target);
            i64::MAX
        }
    }
}
