//! Open/closed bookkeeping for one A* search run.
//!
//! [`FrontierState`] owns the *open* set (discovered, not yet final) and the
//! *closed* set (final) of a single search. Every location moves
//! unseen → open → closed at most once; the only other transition is a
//! cost-improving replacement within open.
//!
//! The open set is a location index plus a binary heap ordered by
//! `(total_cost, admission order)`. Replaced or closed entries are left in
//! the heap and discarded lazily; after every mutation the heap top is
//! guaranteed live, so [`FrontierState::min_open_waypoint`] is a pure query.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use waygrid_core::Point;

use crate::error::FrontierError;
use crate::waypoint::Waypoint;

/// Heap size (relative to the live open count) above which stale keys are
/// swept out in one pass.
const COMPACT_FACTOR: usize = 4;
const COMPACT_MIN: usize = 64;

struct OpenEntry {
    waypoint: Waypoint,
    seq: u64,
}

/// Heap key for an admitted waypoint.
///
/// A key is live while `open[location].seq == seq`.
#[derive(Clone, Copy, Debug)]
struct OpenKey {
    total_cost: f32,
    seq: u64,
    location: Point,
}

impl PartialEq for OpenKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenKey {}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both fields so the max-heap pops the smallest total
        // cost first, and among equals the earliest admission.
        other
            .total_cost
            .total_cmp(&self.total_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier and visited-set state of one A* search over a map `M`.
///
/// The map is only borrowed so the search loop can get it back through
/// [`map`](Self::map); the frontier never queries it.
pub struct FrontierState<'m, M: ?Sized> {
    map: &'m M,
    open: HashMap<Point, OpenEntry>,
    closed: HashMap<Point, Waypoint>,
    heap: BinaryHeap<OpenKey>,
    next_seq: u64,
}

impl<'m, M: ?Sized> FrontierState<'m, M> {
    /// Create an empty frontier for a search over `map`.
    pub fn new(map: &'m M) -> Self {
        Self {
            map,
            open: HashMap::new(),
            closed: HashMap::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Like [`new`](Self::new), for callers whose map may be missing.
    ///
    /// Fails with [`FrontierError::InvalidArgument`] when `map` is `None`.
    pub fn try_new(map: Option<&'m M>) -> Result<Self, FrontierError> {
        map.map(Self::new)
            .ok_or_else(|| FrontierError::InvalidArgument("map cannot be absent".to_string()))
    }

    /// The map this search runs on.
    #[inline]
    pub fn map(&self) -> &'m M {
        self.map
    }

    /// The open waypoint with the lowest total cost, or `None` if open is
    /// empty.
    ///
    /// Ties go to the waypoint admitted first; a cost-improving replacement
    /// counts as a new admission. The waypoint stays open.
    pub fn min_open_waypoint(&self) -> Option<&Waypoint> {
        let top = self.heap.peek()?;
        self.open.get(&top.location).map(|e| &e.waypoint)
    }

    /// Admit `waypoint` to the open set, or use it to improve the open
    /// waypoint already at its location.
    ///
    /// Returns `true` if the waypoint was stored: either nothing was open at
    /// its location, or the open waypoint there had a strictly greater
    /// previous cost. Otherwise the open set is unchanged and `false` is
    /// returned.
    ///
    /// The closed set is not consulted. Callers must skip locations for
    /// which [`is_location_closed`](Self::is_location_closed) holds.
    ///
    /// # Panics
    ///
    /// In debug builds, panics when `waypoint` sits at an already closed
    /// location. Release builds perform no such check.
    pub fn add_open_waypoint(&mut self, waypoint: Waypoint) -> bool {
        let location = waypoint.location();
        debug_assert!(
            !self.closed.contains_key(&location),
            "waypoint at {location} offered after its location was closed"
        );

        if let Some(existing) = self.open.get(&location) {
            if existing.waypoint.previous_cost() > waypoint.previous_cost() {
                log::trace!(
                    "frontier: improve {location} g {} -> {}",
                    existing.waypoint.previous_cost(),
                    waypoint.previous_cost()
                );
            } else {
                return false;
            }
        } else {
            log::trace!(
                "frontier: open {location} g={} f={}",
                waypoint.previous_cost(),
                waypoint.total_cost()
            );
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenKey {
            total_cost: waypoint.total_cost(),
            seq,
            location,
        });
        self.open.insert(location, OpenEntry { waypoint, seq });
        self.discard_stale();
        true
    }

    /// Number of waypoints currently open.
    #[inline]
    pub fn num_open_waypoints(&self) -> usize {
        self.open.len()
    }

    /// Move the open waypoint at `location` into the closed set.
    ///
    /// The stored waypoint (with its costs and predecessor) becomes the
    /// final entry for `location`. Fails with
    /// [`FrontierError::PreconditionViolation`], leaving the state
    /// unchanged, if nothing is open there.
    pub fn close_waypoint(&mut self, location: Point) -> Result<(), FrontierError> {
        let Some(entry) = self.open.remove(&location) else {
            return Err(FrontierError::PreconditionViolation { location });
        };
        log::trace!(
            "frontier: close {location} g={}",
            entry.waypoint.previous_cost()
        );
        self.closed.insert(location, entry.waypoint);
        self.discard_stale();
        Ok(())
    }

    /// Whether `location` has been closed in this run.
    #[inline]
    pub fn is_location_closed(&self, location: Point) -> bool {
        self.closed.contains_key(&location)
    }

    /// Whether a waypoint is currently open at `location`.
    #[inline]
    pub fn is_location_open(&self, location: Point) -> bool {
        self.open.contains_key(&location)
    }

    /// The open waypoint at `location`, if any.
    pub fn open_waypoint(&self, location: Point) -> Option<&Waypoint> {
        self.open.get(&location).map(|e| &e.waypoint)
    }

    /// The closed waypoint at `location`, if any.
    pub fn closed_waypoint(&self, location: Point) -> Option<&Waypoint> {
        self.closed.get(&location)
    }

    #[inline]
    pub fn num_closed_waypoints(&self) -> usize {
        self.closed.len()
    }

    /// Locations from the start of the search to `last`, inclusive.
    ///
    /// Walks predecessor links through the closed set. A predecessor that
    /// is not closed ends the walk (it is still included as the first
    /// location).
    pub fn path_to(&self, last: &Waypoint) -> Vec<Point> {
        let mut path = vec![last.location()];
        let mut next = last.predecessor();
        while let Some(loc) = next {
            // A well-formed chain visits each closed location at most once.
            if path.len() > self.closed.len() + 1 {
                break;
            }
            path.push(loc);
            next = self.closed.get(&loc).and_then(Waypoint::predecessor);
        }
        path.reverse();
        path
    }

    /// Pop heap keys that no longer match an open entry until the top is
    /// live, and sweep the whole heap when stale keys pile up.
    fn discard_stale(&mut self) {
        while let Some(top) = self.heap.peek() {
            let live = self
                .open
                .get(&top.location)
                .is_some_and(|e| e.seq == top.seq);
            if live {
                break;
            }
            self.heap.pop();
        }

        if self.heap.len() > COMPACT_MIN && self.heap.len() > self.open.len() * COMPACT_FACTOR {
            let open = &self.open;
            self.heap
                .retain(|k| open.get(&k.location).is_some_and(|e| e.seq == k.seq));
        }
    }
}

impl<M: ?Sized> fmt::Debug for FrontierState<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontierState")
            .field("open", &self.open.len())
            .field("closed", &self.closed.len())
            .field("heap", &self.heap.len())
            .finish()
    }
}
