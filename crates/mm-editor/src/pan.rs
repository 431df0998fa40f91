//! Drag-to-pan tracking.

use mm_core::Point;

#[derive(Debug, Clone, Copy, Default)]
pub struct PanState {
    active: bool,
    /// Surface position the last delta was measured from.
    anchor: Point,
}

impl PanState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self, at: Point) {
        self.active = true;
        self.anchor = at;
        log::debug!("pan start at ({}, {})", at.x, at.y);
    }

    pub fn stop(&mut self) {
        if self.active {
            log::debug!("pan stop");
        }
        self.active = false;
    }

    /// Cursor delta since the previous drag step, re-anchoring at `to`.
    /// `None` when not panning.
    pub fn drag(&mut self, to: Point) -> Option<Point> {
        if !self.active {
            return None;
        }
        let delta = to.delta(self.anchor);
        self.anchor = to;
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_reports_incremental_deltas() {
        let mut pan = PanState::default();
        assert_eq!(pan.drag(Point::new(5, 5)), None);

        pan.start(Point::new(10, 10));
        assert_eq!(pan.drag(Point::new(15, 12)), Some(Point::new(5, 2)));
        assert_eq!(pan.drag(Point::new(15, 20)), Some(Point::new(0, 8)));

        pan.stop();
        assert!(!pan.is_active());
        assert_eq!(pan.drag(Point::new(0, 0)), None);
    }
}
