//! Input abstraction layer.
//!
//! Host events (DOM mouse events, test drivers) are normalized into
//! [`InputEvent`] before reaching the mapper. Positions are whole surface
//! pixels relative to the surface's top-left corner.

use mm_core::Point;

/// Which pointer button a press came from, using DOM `MouseEvent.button`
/// numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Click { x: i32, y: i32 },
    /// Right click or any other request for a context action.
    ContextClick { x: i32, y: i32 },
    PointerDown { x: i32, y: i32, button: PointerButton },
    PointerUp { x: i32, y: i32 },
    /// Pointer left the surface.
    PointerLeave { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
}

impl InputEvent {
    /// Build a move event from float client coordinates already made
    /// relative to the surface.
    pub fn pointer_move(x: f64, y: f64) -> Self {
        let p = Point::coerce(x, y);
        Self::PointerMove { x: p.x, y: p.y }
    }

    pub fn pointer_down(x: f64, y: f64, button: i16) -> Self {
        let p = Point::coerce(x, y);
        Self::PointerDown {
            x: p.x,
            y: p.y,
            button: PointerButton::from_code(button),
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            Self::Click { x, y }
            | Self::ContextClick { x, y }
            | Self::PointerDown { x, y, .. }
            | Self::PointerUp { x, y }
            | Self::PointerLeave { x, y }
            | Self::PointerMove { x, y } => Point::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_follow_dom_numbering() {
        assert_eq!(PointerButton::from_code(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_code(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_code(4), PointerButton::Other(4));
    }

    #[test]
    fn float_positions_truncate() {
        let e = InputEvent::pointer_move(10.9, f64::NAN);
        assert_eq!(e, InputEvent::PointerMove { x: 10, y: 0 });
        assert_eq!(e.position(), Point::new(10, 0));
    }
}
