use serde::{Deserialize, Serialize};

use crate::PixelPoint;

/// Ordered clicks of the current measurement.
///
/// Insertion order defines segment adjacency. Points are never deduplicated;
/// clicking the same pixel twice yields a zero-length segment. Every mutation
/// raises a change flag that the control loop consumes with
/// [`Session::take_changed`] to decide when a new report is due.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    points: Vec<PixelPoint>,
    #[serde(skip)]
    changed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, p: PixelPoint) {
        self.points.push(p);
        self.changed = true;
    }

    /// Drop every point. Always flags a change, even on an empty session.
    pub fn clear(&mut self) {
        self.points.clear();
        self.changed = true;
    }

    /// Points in selection order.
    pub fn snapshot(&self) -> &[PixelPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Return whether the session changed since the last call and reset the flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_selection_order() {
        let mut s = Session::new();
        let p1 = PixelPoint::new(10, 20);
        let p2 = PixelPoint::new(5, 7);
        s.append(p1);
        s.append(p2);
        assert_eq!(s.snapshot(), &[p1, p2]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn clear_empties_the_session() {
        let mut s = Session::new();
        s.append(PixelPoint::new(1, 1));
        s.append(PixelPoint::new(2, 2));
        s.clear();
        assert!(s.snapshot().is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut s = Session::new();
        let p = PixelPoint::new(3, 4);
        s.append(p);
        s.append(p);
        assert_eq!(s.snapshot(), &[p, p]);
    }

    #[test]
    fn change_flag_is_consumed_once() {
        let mut s = Session::new();
        assert!(!s.take_changed());

        s.append(PixelPoint::new(0, 0));
        assert!(s.take_changed());
        assert!(!s.take_changed());

        s.clear();
        assert!(s.take_changed());
        s.clear();
        assert!(s.take_changed());
        assert!(!s.take_changed());
    }

    #[test]
    fn clear_then_append_in_one_step_still_flags() {
        let mut s = Session::new();
        s.append(PixelPoint::new(0, 0));
        let _ = s.take_changed();

        s.clear();
        s.append(PixelPoint::new(9, 9));
        assert_eq!(s.len(), 1);
        assert!(s.take_changed());
    }
}
