use crate::drag::DragSession;
use crate::store::ItemId;
use eframe::egui;
use std::time::{Duration, Instant};

pub const LONG_PRESS_MS: u64 = 500;
pub const DRAG_THRESHOLD: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Pending,
    Dragging,
    LongPressArmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSignal {
    DragStart,
    LongPress,
}

/// One pointer interaction, created on press over a row body and dropped on
/// release, window blur, or Escape. While it lives it classifies the press
/// into drag or long-press; a session that ends still `Pending` was a tap.
pub struct InteractionSession {
    pub item: ItemId,
    pub phase: GesturePhase,
    origin: egui::Pos2,
    pressed_at: Instant,
    pub drag: Option<DragSession>,
}

impl InteractionSession {
    pub fn begin(item: ItemId, origin: egui::Pos2, now: Instant) -> Self {
        Self {
            item,
            phase: GesturePhase::Pending,
            origin,
            pressed_at: now,
            drag: None,
        }
    }

    /// Advances the classification for the current pointer position. The
    /// displacement check runs before the hold deadline, so a press that
    /// crosses the threshold in the same step it expires resolves as a drag
    /// and the long-press can never fire afterwards.
    pub fn advance(&mut self, pointer: egui::Pos2, now: Instant) -> Option<GestureSignal> {
        if self.phase != GesturePhase::Pending {
            return None;
        }
        let dx = (pointer.x - self.origin.x).abs();
        let dy = (pointer.y - self.origin.y).abs();
        if dx.max(dy) > DRAG_THRESHOLD {
            self.phase = GesturePhase::Dragging;
            return Some(GestureSignal::DragStart);
        }
        if now.duration_since(self.pressed_at) >= Duration::from_millis(LONG_PRESS_MS) {
            self.phase = GesturePhase::LongPressArmed;
            return Some(GestureSignal::LongPress);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> egui::Pos2 {
        egui::pos2(x, y)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn still_press_fires_long_press_exactly_once() {
        let t0 = Instant::now();
        let mut session = InteractionSession::begin(1, at(50.0, 50.0), t0);

        assert_eq!(session.advance(at(52.0, 51.0), t0 + ms(499)), None);
        assert_eq!(
            session.advance(at(52.0, 51.0), t0 + ms(500)),
            Some(GestureSignal::LongPress)
        );
        assert_eq!(session.phase, GesturePhase::LongPressArmed);
        assert_eq!(session.advance(at(52.0, 51.0), t0 + ms(900)), None);
    }

    #[test]
    fn crossing_threshold_starts_drag_and_disarms_the_timer() {
        let t0 = Instant::now();
        let mut session = InteractionSession::begin(1, at(50.0, 50.0), t0);

        assert_eq!(
            session.advance(at(50.0, 59.0), t0 + ms(100)),
            Some(GestureSignal::DragStart)
        );
        assert_eq!(session.phase, GesturePhase::Dragging);
        // well past the hold deadline, but the timer is gone
        assert_eq!(session.advance(at(50.0, 59.0), t0 + ms(800)), None);
    }

    #[test]
    fn displacement_at_threshold_stays_pending() {
        let t0 = Instant::now();
        let mut session = InteractionSession::begin(1, at(50.0, 50.0), t0);

        assert_eq!(session.advance(at(58.0, 50.0), t0 + ms(100)), None);
        assert_eq!(session.phase, GesturePhase::Pending);
    }

    #[test]
    fn either_axis_counts_toward_the_threshold() {
        let t0 = Instant::now();
        let mut session = InteractionSession::begin(1, at(50.0, 50.0), t0);
        assert_eq!(
            session.advance(at(41.0, 50.0), t0 + ms(50)),
            Some(GestureSignal::DragStart)
        );
    }

    #[test]
    fn threshold_crossed_at_the_deadline_resolves_as_drag() {
        let t0 = Instant::now();
        let mut session = InteractionSession::begin(1, at(50.0, 50.0), t0);
        assert_eq!(
            session.advance(at(70.0, 50.0), t0 + ms(500)),
            Some(GestureSignal::DragStart)
        );
        assert_eq!(session.advance(at(70.0, 50.0), t0 + ms(501)), None);
    }
}
