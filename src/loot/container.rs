//! World loot containers (chests)

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::MatchConfig;
use crate::core::error::{check_slot, Result};
use crate::core::types::{ContainerId, Vec2};
use crate::items::{Item, ItemCatalog};

/// A chest's fixed set of slots, separate from any inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootContainer {
    id: ContainerId,
    position: Vec2,
    pub(crate) slots: Vec<Item>,
}

impl LootContainer {
    /// An empty container with `slots` slots
    pub fn new(id: ContainerId, position: Vec2, slots: usize) -> Self {
        Self {
            id,
            position,
            slots: vec![Item::Empty; slots],
        }
    }

    /// A chest as it spawns in the world: two medkits plus random rolls
    pub fn spawn_chest<R: Rng + ?Sized>(
        id: ContainerId,
        position: Vec2,
        config: &MatchConfig,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> Self {
        let mut chest = Self::new(id, position, config.chest_slots);
        if 2 + config.chest_loot_rolls > config.chest_slots {
            tracing::warn!(
                "Chest {:?}: {} loot rolls do not fit in {} slots, extra rolls dropped",
                id,
                config.chest_loot_rolls,
                config.chest_slots
            );
        }
        let medkits = [catalog.medkit(), catalog.medkit()];
        let rolls = (0..config.chest_loot_rolls).map(|_| catalog.random_loot(rng));

        for (slot, item) in chest.slots.iter_mut().zip(medkits.into_iter().chain(rolls)) {
            *slot = item;
        }

        tracing::debug!(
            "Chest {:?} spawned at ({:.1}, {:.1}) with {} items",
            id,
            position.x,
            position.y,
            chest.item_count()
        );
        chest
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Item::is_empty)
    }

    pub fn items(&self) -> &[Item] {
        &self.slots
    }

    /// Number of non-Empty slots
    pub fn item_count(&self) -> usize {
        self.slots.iter().filter(|item| !item.is_empty()).count()
    }

    pub fn get_item(&self, slot: usize) -> Result<&Item> {
        check_slot(slot, self.slots.len())?;
        Ok(&self.slots[slot])
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Item::is_empty)
    }

    /// Can a soldier standing at `point` reach this container?
    pub fn in_reach(&self, point: Vec2, range: f32) -> bool {
        self.position.distance(point) <= range
    }
}
