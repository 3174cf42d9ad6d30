pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: ItemId,
    pub text: String,
}

/// Ordered list of items. The only component that mutates list order;
/// everything else requests changes through it.
#[derive(Debug, Default)]
pub struct ListStore {
    items: Vec<ListItem>,
    next_id: ItemId,
}

impl ListStore {
    pub fn from_texts(texts: &[String]) -> Self {
        let mut store = Self::default();
        for text in texts {
            store.add(text);
        }
        store
    }

    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ListItem {
            id,
            text: trimmed.to_string(),
        });
        Some(id)
    }

    /// Blank or unchanged text leaves the item untouched and returns false,
    /// so callers can skip persistence.
    pub fn rename(&mut self, id: ItemId, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if item.text == trimmed {
            return false;
        }
        item.text = trimmed.to_string();
        true
    }

    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.items.remove(index);
        true
    }

    /// Moves the item to `slot`, counted among the remaining items with the
    /// moved one taken out first. Clamped to the list end.
    pub fn reorder(&mut self, id: ItemId, slot: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let item = self.items.remove(from);
        let to = slot.min(self.items.len());
        self.items.insert(to, item);
        from != to
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn text_of(&self, id: ItemId) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.text.as_str())
    }

    pub fn texts(&self) -> Vec<String> {
        self.items.iter().map(|item| item.text.clone()).collect()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(texts: &[&str]) -> ListStore {
        let texts: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        ListStore::from_texts(&texts)
    }

    #[test]
    fn add_trims_and_rejects_blank() {
        let mut store = ListStore::default();
        assert!(store.add("  Milk  ").is_some());
        assert!(store.add("   ").is_none());
        assert!(store.add("").is_none());
        assert_eq!(store.texts(), vec!["Milk"]);
    }

    #[test]
    fn rename_to_blank_keeps_prior_text() {
        let mut store = store_of(&["Milk", "Eggs", "Bread"]);
        let eggs = store.items()[1].id;
        assert!(!store.rename(eggs, ""));
        assert!(!store.rename(eggs, "   "));
        assert_eq!(store.texts(), vec!["Milk", "Eggs", "Bread"]);
    }

    #[test]
    fn rename_applies_trimmed_text() {
        let mut store = store_of(&["Milk"]);
        let id = store.items()[0].id;
        assert!(store.rename(id, " Oat milk "));
        assert_eq!(store.text_of(id), Some("Oat milk"));
        // unchanged text reports no change
        assert!(!store.rename(id, "Oat milk"));
    }

    #[test]
    fn reorder_matches_remove_then_reinsert() {
        for from in 0..4 {
            for to in 0..4 {
                let mut store = store_of(&["A", "B", "C", "D"]);
                let id = store.items()[from].id;

                let mut expected = store.texts();
                let moved = expected.remove(from);
                expected.insert(to.min(expected.len()), moved);

                store.reorder(id, to);
                assert_eq!(store.texts(), expected, "from {from} to {to}");
            }
        }
    }

    #[test]
    fn reorder_sole_item_is_a_noop() {
        let mut store = store_of(&["Milk"]);
        let id = store.items()[0].id;
        assert!(!store.reorder(id, 0));
        assert!(!store.reorder(id, 5));
        assert_eq!(store.texts(), vec!["Milk"]);
    }

    #[test]
    fn texts_round_trip() {
        let store = store_of(&["Milk", "Eggs", "Bread"]);
        let reloaded = ListStore::from_texts(&store.texts());
        assert_eq!(reloaded.texts(), store.texts());
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut store = store_of(&["Milk"]);
        assert!(!store.remove(999));
        assert_eq!(store.len(), 1);
    }
}
