//! Equipment-to-animation resolver
//!
//! Once per frame the soldier's (held, armor, helmet) classes are compared
//! with the previous frame's. Only a difference requests a new animation
//! set; this is the single place the soldier's animation changes.

use serde::{Deserialize, Serialize};

use super::lookup::AnimationLookup;
use super::region::AnimationRegion;
use crate::core::error::Result;
use crate::inventory::{EquipmentSlot, Inventory};
use crate::items::ItemClass;

/// Snapshot of what the soldier visibly carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquipmentKey {
    /// Class of the item in the selected general slot
    pub held: ItemClass,
    pub armor: ItemClass,
    pub helmet: ItemClass,
}

impl EquipmentKey {
    pub fn observe(inventory: &Inventory, selected: usize) -> Result<Self> {
        Ok(Self {
            held: inventory.get_item(selected)?.class(),
            armor: inventory.get_equipment(EquipmentSlot::Armor).class(),
            helmet: inventory.get_equipment(EquipmentSlot::Helmet).class(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentResolver {
    last: Option<EquipmentKey>,
    region: Option<AnimationRegion>,
    swaps: u64,
}

impl EquipmentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare this frame's key with the last one, swapping on change.
    ///
    /// Returns the new region when a swap happened. The first frame always
    /// swaps since nothing has been observed yet.
    pub fn update(
        &mut self,
        key: EquipmentKey,
        lookup: &dyn AnimationLookup,
    ) -> Option<&AnimationRegion> {
        let changed = self.last != Some(key);
        self.last = Some(key);

        if !changed {
            return None;
        }

        let region = lookup.lookup(&key);
        tracing::debug!(
            "Animation swap -> {} (held {:?}, armor {:?}, helmet {:?})",
            region.atlas,
            key.held,
            key.armor,
            key.helmet
        );
        self.swaps += 1;
        self.region = Some(region);
        self.region.as_ref()
    }

    /// Animation set currently shown
    pub fn region(&self) -> Option<&AnimationRegion> {
        self.region.as_ref()
    }

    /// Number of animation swaps requested so far
    pub fn swaps(&self) -> u64 {
        self.swaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::lookup::AtlasTable;
    use crate::items::{ArmorModel, ItemCatalog};
    use std::cell::Cell;

    /// Counts lookups so tests can assert how often the collaborator is hit
    struct CountingLookup {
        calls: Cell<u32>,
    }

    impl AnimationLookup for CountingLookup {
        fn lookup(&self, key: &EquipmentKey) -> AnimationRegion {
            self.calls.set(self.calls.get() + 1);
            AtlasTable.lookup(key)
        }
    }

    #[test]
    fn test_no_swap_without_change() {
        let inventory = Inventory::new(3);
        let lookup = CountingLookup { calls: Cell::new(0) };
        let mut resolver = EquipmentResolver::new();

        let key = EquipmentKey::observe(&inventory, 0).unwrap();
        assert!(resolver.update(key, &lookup).is_some());
        for _ in 0..20 {
            assert!(resolver.update(key, &lookup).is_none());
        }
        assert_eq!(lookup.calls.get(), 1);
        assert_eq!(resolver.swaps(), 1);
    }

    #[test]
    fn test_swap_once_per_change() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(3);
        let lookup = CountingLookup { calls: Cell::new(0) };
        let mut resolver = EquipmentResolver::new();

        resolver.update(EquipmentKey::observe(&inventory, 0).unwrap(), &lookup);

        inventory.set_equipment(EquipmentSlot::Armor, catalog.armor(ArmorModel::SoftVest));
        for _ in 0..5 {
            resolver.update(EquipmentKey::observe(&inventory, 0).unwrap(), &lookup);
        }
        assert_eq!(lookup.calls.get(), 2);
        assert!(resolver.region().unwrap().atlas.contains("soft-vest"));

        // Selecting another slot with the same (Empty) class is not a change
        resolver.update(EquipmentKey::observe(&inventory, 1).unwrap(), &lookup);
        assert_eq!(lookup.calls.get(), 2);
    }

    #[test]
    fn test_switching_back_is_a_change() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(2);
        inventory.set_item(1, catalog.medkit()).unwrap();
        let mut resolver = EquipmentResolver::new();

        resolver.update(EquipmentKey::observe(&inventory, 0).unwrap(), &AtlasTable);
        resolver.update(EquipmentKey::observe(&inventory, 1).unwrap(), &AtlasTable);
        resolver.update(EquipmentKey::observe(&inventory, 0).unwrap(), &AtlasTable);
        assert_eq!(resolver.swaps(), 3);
        assert!(resolver
            .region()
            .unwrap()
            .atlas
            .ends_with("soldier-animation.pack"));
    }
}
