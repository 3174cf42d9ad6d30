use crate::store::ItemId;
use eframe::egui;

/// Live drag state: which item floats, where the pointer grabbed it, and
/// which slot the placeholder currently occupies. Owned by the interaction
/// session and dropped with it.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub item: ItemId,
    pointer_offset: f32,
    pub placeholder: usize,
}

impl DragSession {
    pub fn begin(item: ItemId, item_top: f32, pointer_y: f32, placeholder: usize) -> Self {
        Self {
            item,
            pointer_offset: pointer_y - item_top,
            placeholder,
        }
    }

    /// Top edge of the floating row, keeping the grab point under the pointer.
    pub fn float_top(&self, pointer_y: f32) -> f32 {
        pointer_y - self.pointer_offset
    }

    /// Stores the slot only when it changed, so repeated identical pointer
    /// positions are observably a no-op.
    pub fn retarget(&mut self, slot: usize) -> bool {
        if self.placeholder == slot {
            return false;
        }
        self.placeholder = slot;
        true
    }
}

/// Slot of the first sibling row whose vertical midpoint lies below the
/// pointer; one past the last row when none does. Rows are the visible
/// (non-dragged) rows in visual order.
pub fn placeholder_slot(pointer_y: f32, rows: &[egui::Rect]) -> usize {
    for (slot, rect) in rows.iter().enumerate() {
        if pointer_y < rect.center().y {
            return slot;
        }
    }
    rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    // three 44px rows with a 4px gap, like the live list
    fn rows() -> Vec<egui::Rect> {
        (0..3)
            .map(|i| {
                let top = i as f32 * 48.0;
                egui::Rect::from_min_max(egui::pos2(0.0, top), egui::pos2(200.0, top + 44.0))
            })
            .collect()
    }

    #[test]
    fn pointer_above_first_midpoint_targets_slot_zero() {
        assert_eq!(placeholder_slot(10.0, &rows()), 0);
    }

    #[test]
    fn pointer_between_midpoints_inserts_before_the_lower_row() {
        // first midpoint is 22, second is 70
        assert_eq!(placeholder_slot(30.0, &rows()), 1);
        assert_eq!(placeholder_slot(69.0, &rows()), 1);
    }

    #[test]
    fn pointer_below_all_midpoints_appends() {
        assert_eq!(placeholder_slot(500.0, &rows()), 3);
    }

    #[test]
    fn no_siblings_always_targets_slot_zero() {
        assert_eq!(placeholder_slot(123.0, &[]), 0);
    }

    #[test]
    fn retarget_is_idempotent_for_the_same_slot() {
        let mut drag = DragSession::begin(1, 0.0, 12.0, 0);
        assert!(drag.retarget(2));
        assert!(!drag.retarget(2));
        assert_eq!(drag.placeholder, 2);
    }

    #[test]
    fn float_top_keeps_the_grab_offset() {
        let drag = DragSession::begin(1, 100.0, 112.0, 0);
        assert_eq!(drag.float_top(112.0), 100.0);
        assert_eq!(drag.float_top(200.0), 188.0);
    }
}
