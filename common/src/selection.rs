//! Per-item selection sets: multi-select, bookmarks, cart and pins.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalogue_item::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SelectionRole {
    /// Multi-select for comparison and graphing.
    Selected,
    Bookmarked,
    Cart,
    Pinned,
}

impl SelectionRole {
    pub const ALL: [SelectionRole; 4] = [SelectionRole::Selected, SelectionRole::Bookmarked, SelectionRole::Cart, SelectionRole::Pinned];
}

/// Four independent identifier sets. Identifiers need not exist in any dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionSets {
    sets: BTreeMap<SelectionRole, BTreeSet<ItemId>>,
}

impl SelectionSets {
    /// Flips membership of `id` in `role` and returns the new membership.
    pub fn toggle(&mut self, role: SelectionRole, id: &ItemId) -> bool {
        let set = self.sets.entry(role).or_default();
        if set.remove(id) {
            false
        } else {
            set.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, role: SelectionRole, id: &ItemId) -> bool {
        self.sets.get(&role).is_some_and(|set| set.contains(id))
    }

    pub fn members(&self, role: SelectionRole) -> impl Iterator<Item = &ItemId> {
        self.sets.get(&role).into_iter().flatten()
    }

    pub fn count(&self, role: SelectionRole) -> usize {
        self.sets.get(&role).map_or(0, BTreeSet::len)
    }

    pub fn toggle_selected(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Selected, id)
    }

    pub fn toggle_bookmarked(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Bookmarked, id)
    }

    pub fn toggle_cart(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Cart, id)
    }

    pub fn toggle_pinned(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Pinned, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_identity_for_every_role() {
        let id = ItemId::from("rbi-42");
        for role in SelectionRole::ALL {
            let mut sets = SelectionSets::default();
            sets.toggle(SelectionRole::Pinned, &ItemId::from("other"));
            let before = sets.clone();
            sets.toggle(role, &id);
            sets.toggle(role, &id);
            assert_eq!(sets.count(role), before.count(role));
            assert_eq!(sets.contains(role, &id), before.contains(role, &id));
        }
    }

    #[test]
    fn roles_are_independent() {
        let id = ItemId::from("a");
        let mut sets = SelectionSets::default();
        assert!(sets.toggle_bookmarked(&id));
        assert!(sets.toggle_cart(&id));
        assert!(sets.contains(SelectionRole::Bookmarked, &id));
        assert!(sets.contains(SelectionRole::Cart, &id));
        assert!(!sets.contains(SelectionRole::Selected, &id));
        assert!(!sets.toggle_bookmarked(&id));
        assert!(sets.contains(SelectionRole::Cart, &id));
        assert_eq!(sets.members(SelectionRole::Cart).collect::<Vec<_>>(), vec![&id]);
    }
}
