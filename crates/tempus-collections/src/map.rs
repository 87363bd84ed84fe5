// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Maps
//!
//! An interval map associates values with disjoint regions of an ordered
//! domain. Keys are intervals; a lookup by point finds the region that
//! includes it. Inserting a key that overlaps stored regions overwrites the
//! overlapping parts and leaves the rest of each region with its old value:
//!
//! ```text
//! put([3, 5], X)      [3 ───── 5]              X
//! put([4, 6], Y)      [3 ─ 4)[4 ───── 6]       X, Y
//! ```
//!
//! `LinearIntervalMap` keeps its entries in a vector and answers every query
//! with a linear scan.

use smallvec::SmallVec;
use tempus_core::math::kind::IntervalType;

/// A map from disjoint key intervals to values.
///
/// # Invariants
///
/// No two stored key intervals intersect.
pub trait IntervalMap<I, V>
where
    I: IntervalType,
{
    /// Returns the value of the region that includes `point`.
    fn get(&self, point: &I::Point) -> Option<&V>;

    /// Associates `value` with every point of `key`, overwriting the parts
    /// of stored regions that `key` intersects. An empty `key` leaves the
    /// map unchanged.
    fn put(&mut self, key: I, value: V);

    /// Removes every point of `key` from the map. Stored regions that only
    /// partially intersect `key` keep their remaining parts.
    fn remove(&mut self, key: &I);

    /// Returns `true` if some region includes `point`.
    #[inline]
    fn contains_key(&self, point: &I::Point) -> bool {
        self.get(point).is_some()
    }

    /// Returns `true` if some stored region intersects `key`.
    fn contains_intersecting_key(&self, key: &I) -> bool;
}

/// An [`IntervalMap`] backed by a vector and scanned linearly.
///
/// Entries are kept ordered by their lower limit.
///
/// # Examples
///
/// ```rust
/// # use tempus_collections::map::{IntervalMap, LinearIntervalMap};
/// # use tempus_core::math::interval::Interval;
///
/// let mut map = LinearIntervalMap::new();
/// map.put(Interval::closed(3, 5), "X");
/// map.put(Interval::closed(4, 6), "Y");
///
/// assert_eq!(map.get(&3), Some(&"X"));
/// assert_eq!(map.get(&4), Some(&"Y"));
/// assert_eq!(map.get(&6), Some(&"Y"));
/// assert_eq!(map.get(&7), None);
/// assert_eq!(map.to_string(), "{[3, 4)=X, [4, 6]=Y}");
/// ```
#[derive(Debug, Clone)]
pub struct LinearIntervalMap<I, V> {
    entries: Vec<(I, V)>,
}

impl<I, V> LinearIntervalMap<I, V>
where
    I: IntervalType,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored regions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates the stored regions and their values in ascending order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&I, &V)> + ExactSizeIterator {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &I> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k)
    }

    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns the stored region that includes `point` together with its
    /// value.
    #[inline]
    pub fn get_key_value(&self, point: &I::Point) -> Option<(&I, &V)> {
        self.entries
            .iter()
            .find(|(k, _)| k.includes(point))
            .map(|(k, v)| (k, v))
    }

    #[inline]
    fn sort_entries(&mut self) {
        self.entries
            .sort_by(|(a, _), (b, _)| a.as_interval().lower().cmp(b.as_interval().lower()));
    }
}

impl<I, V> Default for LinearIntervalMap<I, V>
where
    I: IntervalType,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I, V> IntervalMap<I, V> for LinearIntervalMap<I, V>
where
    I: IntervalType,
    V: Clone,
{
    #[inline]
    fn get(&self, point: &I::Point) -> Option<&V> {
        self.get_key_value(point).map(|(_, v)| v)
    }

    fn put(&mut self, key: I, value: V) {
        // An empty key covers no point and is never stored.
        if key.is_empty() {
            return;
        }
        self.remove(&key);
        self.entries.push((key, value));
        self.sort_entries();
        log::trace!("interval map: put, {} regions stored", self.entries.len());
    }

    fn remove(&mut self, key: &I) {
        // Compute every replacement before touching the entries so the map
        // is never left half rewritten.
        let mut replaced = 0usize;
        let mut pieces: SmallVec<(I, V), 4> = SmallVec::new();
        for (stored, value) in &self.entries {
            if !key.intersects(stored) {
                continue;
            }
            replaced += 1;
            for piece in key.complement_relative_to(stored) {
                pieces.push((piece, value.clone()));
            }
        }
        if replaced == 0 {
            return;
        }

        log::trace!(
            "interval map: remove rewrites {} regions into {} pieces",
            replaced,
            pieces.len()
        );

        self.entries.retain(|(stored, _)| !key.intersects(stored));
        self.entries.extend(pieces);
        self.sort_entries();
    }

    #[inline]
    fn contains_intersecting_key(&self, key: &I) -> bool {
        self.entries.iter().any(|(k, _)| key.intersects(k))
    }
}

impl<I, V> Extend<(I, V)> for LinearIntervalMap<I, V>
where
    I: IntervalType,
    V: Clone,
{
    fn extend<T: IntoIterator<Item = (I, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<I, V> FromIterator<(I, V)> for LinearIntervalMap<I, V>
where
    I: IntervalType,
    V: Clone,
{
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<I, V> std::fmt::Display for LinearIntervalMap<I, V>
where
    I: IntervalType,
    I::Point: std::fmt::Display,
    V: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key.as_interval(), value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use tempus_core::math::interval::Interval;

    type Map = LinearIntervalMap<Interval<i32>, &'static str>;

    fn iv(lo: i32, lc: bool, hi: i32, hc: bool) -> Interval<i32> {
        Interval::over(Some(lo), lc, Some(hi), hc)
    }

    fn entries(map: &Map) -> Vec<(Interval<i32>, &'static str)> {
        map.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn assert_disjoint<V>(map: &LinearIntervalMap<Interval<i32>, V>) {
        let keys: Vec<_> = map.keys().collect();
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert!(!a.intersects(b), "{} intersects {}", a, b);
            }
        }
    }

    #[test]
    fn test_put_overwrites_overlap() {
        let mut map = Map::new();
        map.put(Interval::closed(3, 5), "X");
        map.put(Interval::closed(4, 6), "Y");
        assert_eq!(map.get(&3), Some(&"X"));
        assert_eq!(map.get(&4), Some(&"Y"));
        assert_eq!(map.get(&6), Some(&"Y"));
        assert_eq!(
            entries(&map),
            vec![(iv(3, true, 4, false), "X"), (Interval::closed(4, 6), "Y")]
        );
    }

    #[test]
    fn test_put_full_overwrite() {
        let mut map = Map::new();
        map.put(Interval::closed(1, 10), "A");
        map.put(Interval::closed(1, 10), "B");
        assert_eq!(entries(&map), vec![(Interval::closed(1, 10), "B")]);
    }

    #[test]
    fn test_put_splits_middle() {
        let mut map = Map::new();
        map.put(Interval::closed(0, 10), "A");
        map.put(Interval::open(4, 6), "B");
        assert_eq!(
            entries(&map),
            vec![
                (Interval::closed(0, 4), "A"),
                (Interval::open(4, 6), "B"),
                (Interval::closed(6, 10), "A"),
            ]
        );
        assert_eq!(map.get(&4), Some(&"A"));
        assert_eq!(map.get(&5), Some(&"B"));
        assert_eq!(map.get(&6), Some(&"A"));
    }

    #[test]
    fn test_put_spanning_several_regions() {
        let mut map = Map::new();
        map.put(Interval::closed(0, 2), "A");
        map.put(Interval::closed(3, 5), "B");
        map.put(Interval::closed(6, 8), "C");
        map.put(Interval::closed(1, 7), "D");
        assert_eq!(
            entries(&map),
            vec![
                (iv(0, true, 1, false), "A"),
                (Interval::closed(1, 7), "D"),
                (iv(7, false, 8, true), "C"),
            ]
        );
    }

    #[test]
    fn test_remove() {
        let mut map = Map::new();
        map.put(Interval::closed(0, 10), "A");

        // Middle split.
        map.remove(&Interval::closed(4, 6));
        assert_eq!(
            entries(&map),
            vec![
                (iv(0, true, 4, false), "A"),
                (iv(6, false, 10, true), "A"),
            ]
        );
        assert!(!map.contains_key(&5));

        // Edge trim.
        map.remove(&Interval::up_to(1));
        assert_eq!(
            entries(&map),
            vec![
                (iv(1, false, 4, false), "A"),
                (iv(6, false, 10, true), "A"),
            ]
        );

        // Full coverage.
        map.remove(&Interval::and_more(5));
        assert_eq!(entries(&map), vec![(iv(1, false, 4, false), "A")]);

        // Nothing intersects.
        map.remove(&Interval::closed(20, 30));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_unbounded_keys() {
        let mut map = Map::new();
        map.put(Interval::all(), "all");
        map.put(Interval::closed(0, 0), "zero");
        assert_eq!(
            entries(&map),
            vec![
                (Interval::under(0), "all"),
                (Interval::single_element(0), "zero"),
                (Interval::more_than(0), "all"),
            ]
        );
        assert_eq!(map.get(&i32::MIN), Some(&"all"));
        assert_eq!(map.get(&0), Some(&"zero"));
    }

    #[test]
    fn test_put_empty_key_is_ignored() {
        let mut map = Map::new();
        map.put(Interval::empty(1), "a");
        map.put(Interval::empty(1), "b");
        map.put(Interval::from(7..7), "c");
        assert!(map.is_empty());
        assert_eq!(map.to_string(), "{}");

        map.put(Interval::closed(0, 4), "d");
        map.put(Interval::empty(2), "e");
        assert_eq!(entries(&map), vec![(Interval::closed(0, 4), "d")]);
        assert_eq!(map.get(&2), Some(&"d"));
    }

    #[test]
    fn test_contains() {
        let mut map = Map::new();
        map.put(iv(0, true, 5, false), "A");
        assert!(map.contains_key(&0));
        assert!(!map.contains_key(&5));
        assert!(map.contains_intersecting_key(&Interval::closed(4, 9)));
        assert!(!map.contains_intersecting_key(&Interval::closed(5, 9)));
        assert_eq!(map.get_key_value(&2), Some((&iv(0, true, 5, false), &"A")));
    }

    #[test]
    fn test_from_iter_and_display() {
        let map: Map = [
            (Interval::closed(3, 5), "X"),
            (Interval::closed(4, 6), "Y"),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.to_string(), "{[3, 4)=X, [4, 6]=Y}");
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec!["X", "Y"]);

        let mut map = map;
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.to_string(), "{}");
    }

    #[test]
    fn test_matches_point_model() {
        // Ends sit on even values so odd probes fall between them.
        const LO: i32 = -12;
        const HI: i32 = 12;
        let mut rng = StdRng::seed_from_u64(7);
        let mut map: LinearIntervalMap<Interval<i32>, u32> = LinearIntervalMap::new();
        let mut model: Vec<Option<u32>> = vec![None; (HI - LO + 1) as usize];

        for step in 0..500u32 {
            let a = rng.random_range(-5..=5) * 2;
            let b = rng.random_range(-5..=5) * 2;
            let lower = (!rng.random_bool(0.1)).then_some(a.min(b));
            let upper = (!rng.random_bool(0.1)).then_some(a.max(b));
            let key = Interval::over(lower, rng.random_bool(0.5), upper, rng.random_bool(0.5));

            let put = rng.random_bool(0.7);
            if put {
                map.put(key, step);
            } else {
                map.remove(&key);
            }
            for (slot, p) in model.iter_mut().zip(LO..=HI) {
                if key.includes(&p) {
                    *slot = put.then_some(step);
                }
            }

            assert_disjoint(&map);
            assert!(map.keys().all(|k| !k.is_empty()));
            for (slot, p) in model.iter().zip(LO..=HI) {
                assert_eq!(map.get(&p).copied(), *slot, "point {} after {}", p, key);
            }
        }
    }
}
