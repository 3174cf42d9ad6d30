use crate::store::ItemId;

/// Per-item inline edit state. At most one item is in edit mode at a time;
/// while an item is editing, the gesture layer refuses to start a session
/// for it, so editing and dragging never overlap on the same item.
#[derive(Default)]
pub struct InlineEdit {
    active: Option<EditState>,
}

pub struct EditState {
    item: ItemId,
    pub buffer: String,
    focus_pending: bool,
}

impl InlineEdit {
    /// No-op when the item is already in edit mode.
    pub fn enter(&mut self, item: ItemId, current_text: String) {
        if self.is_editing(item) {
            return;
        }
        self.active = Some(EditState {
            item,
            buffer: current_text,
            focus_pending: true,
        });
    }

    /// Ends the edit and hands the raw buffer back; the store decides
    /// whether the text actually changes (blank renames revert there).
    pub fn commit(&mut self) -> Option<(ItemId, String)> {
        self.active.take().map(|state| (state.item, state.buffer))
    }

    /// Ends the edit discarding the buffer.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_editing(&self, item: ItemId) -> bool {
        self.active.as_ref().is_some_and(|state| state.item == item)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn state_mut(&mut self, item: ItemId) -> Option<&mut EditState> {
        self.active
            .as_mut()
            .filter(|state| state.item == item)
    }
}

impl EditState {
    /// True exactly once, on the first frame the editor is shown; the UI
    /// focuses the field and puts the cursor at the end of the text.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }
}
