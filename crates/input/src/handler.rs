//! Pointer click tracking for terminal mouse events.
//!
//! A click only counts if the pointer is released near where it was pressed;
//! anything that travels further is a drag and is dropped.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Pointer, POINTER_DRAG_THRESHOLD};

/// Terminal area the cube is drawn in, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Terminal cell to normalized device coordinates relative to `rect`.
///
/// Cell centers are used, so the first column maps just inside -1. Cells
/// outside `rect` map outside `-1..=1`.
pub fn to_ndc(col: u16, row: u16, rect: Rect) -> Pointer {
    if rect.width == 0 || rect.height == 0 {
        return Pointer::new(f32::INFINITY, f32::INFINITY);
    }
    let fx = (f32::from(col) - f32::from(rect.x) + 0.5) / f32::from(rect.width);
    let fy = (f32::from(row) - f32::from(rect.y) + 0.5) / f32::from(rect.height);
    Pointer::new(fx * 2.0 - 1.0, -(fy * 2.0 - 1.0))
}

/// What a mouse event meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Pressed,
    /// The press moved too far and will not click.
    Cancelled,
    /// Released without dragging, at this terminal cell.
    Clicked { col: u16, row: u16 },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    pressed_at: Option<(u16, u16)>,
    threshold: u16,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::with_threshold(POINTER_DRAG_THRESHOLD)
    }

    pub fn with_threshold(threshold: u16) -> Self {
        Self {
            pressed_at: None,
            threshold,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn press(&mut self, col: u16, row: u16) -> PointerEvent {
        self.pressed_at = Some((col, row));
        PointerEvent::Pressed
    }

    pub fn move_to(&mut self, col: u16, row: u16) -> Option<PointerEvent> {
        let (px, py) = self.pressed_at?;
        let dx = f32::from(col) - f32::from(px);
        let dy = f32::from(row) - f32::from(py);
        if (dx * dx + dy * dy).sqrt() > f32::from(self.threshold) {
            self.pressed_at = None;
            return Some(PointerEvent::Cancelled);
        }
        None
    }

    pub fn release(&mut self, col: u16, row: u16) -> Option<PointerEvent> {
        self.pressed_at
            .take()
            .map(|_| PointerEvent::Clicked { col, row })
    }

    /// Feed a crossterm mouse event. Only the left button counts.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<PointerEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(self.press(event.column, event.row)),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.move_to(event.column, event.row)
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(event.column, event.row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_release_clicks() {
        let mut t = PointerTracker::new();
        assert_eq!(t.press(10, 5), PointerEvent::Pressed);
        assert_eq!(t.move_to(11, 6), None);
        assert_eq!(t.release(11, 6), Some(PointerEvent::Clicked { col: 11, row: 6 }));
        assert!(!t.is_pressed());
    }

    #[test]
    fn drag_cancels_click() {
        let mut t = PointerTracker::new();
        t.press(10, 5);
        assert_eq!(t.move_to(13, 5), Some(PointerEvent::Cancelled));
        assert_eq!(t.release(13, 5), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = PointerTracker::new();
        assert_eq!(t.release(0, 0), None);
    }

    #[test]
    fn crossterm_events() {
        let mut t = PointerTracker::new();
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 4));
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 4, 4)),
            Some(PointerEvent::Clicked { col: 4, row: 4 })
        );
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 4, 4)),
            None
        );
    }

    #[test]
    fn ndc_corners_and_center() {
        let rect = Rect::new(10, 0, 9, 9);
        let top_left = to_ndc(10, 0, rect);
        assert!(top_left.x < -0.6 && top_left.y > 0.6);
        let center = to_ndc(14, 4, rect);
        assert!(center.x.abs() < 1e-6 && center.y.abs() < 1e-6);
        let bottom_right = to_ndc(18, 8, rect);
        assert!(bottom_right.x > 0.6 && bottom_right.y < -0.6);
        assert!(to_ndc(0, 4, rect).x < -1.0);
    }
}
