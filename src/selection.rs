//! The list of placeable structure types offered to the user.

use bevy::prelude::*;

use crate::structures::StructureKind;

/// Holds the structure kind the user currently has picked for placement.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SelectionList {
    selected: Option<StructureKind>,
}

impl SelectionList {
    pub fn select(&mut self, kind: StructureKind) {
        self.selected = Some(kind);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_item(&self) -> Option<StructureKind> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_clear() {
        let mut list = SelectionList::default();
        assert!(list.selected_item().is_none());

        list.select(StructureKind::Sawmill);
        assert_eq!(list.selected_item(), Some(StructureKind::Sawmill));

        list.select(StructureKind::Farm);
        assert_eq!(list.selected_item(), Some(StructureKind::Farm));

        list.clear();
        assert!(list.selected_item().is_none());
    }
}
