//! Match session - the per-frame loop around the player soldier
//!
//! Each tick processes the frame's inputs in order, advances the soldier,
//! then moves the body with whatever speed the current activity allows.

use ahash::AHashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::animation::{AnimationLookup, AtlasTable};
use crate::combat::{ActionOutcome, ActivityKind, Mobility, NoEffect};
use crate::core::config::MatchConfig;
use crate::core::error::Result;
use crate::core::types::{ContainerId, Tick, Vec2};
use crate::game::hud::{Hud, HudSnapshot};
use crate::game::world::{KinematicBody, RigidBody};
use crate::inventory::EquipmentSlot;
use crate::items::ItemCatalog;
use crate::loot::{inventory_to_loot, loot_to_inventory, Exchange, LootContainer};
use crate::soldier::{CancelReason, Soldier};

/// One player command for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    Select(usize),
    Scroll(i32),
    /// Use the selected item (fire / heal)
    Use,
    Reload,
    Equip(usize),
    Unequip(EquipmentSlot),
    /// Take from the chest in reach
    Take { container_slot: usize },
    /// Put an inventory item into the chest in reach
    Stash { slot: usize },
    /// Menu opened or action interrupted
    Cancel,
    Move(Vec2),
}

impl PlayerInput {
    /// Inputs that handle items and are refused while the soldier is blocked
    fn handles_items(&self) -> bool {
        matches!(
            self,
            PlayerInput::Equip(_)
                | PlayerInput::Unequip(_)
                | PlayerInput::Take { .. }
                | PlayerInput::Stash { .. }
        )
    }
}

/// Events generated during a session tick
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Action(ActionOutcome),
    Equipped { slot: usize, changed: bool },
    Unequipped { slot: EquipmentSlot, changed: bool },
    Exchanged { container: ContainerId, exchange: Exchange },
    /// A loot input arrived with no chest in reach
    NoContainerInReach,
    ActivityCompleted(ActivityKind),
    ActivityCancelled(ActivityKind),
    AnimationChanged { atlas: String },
}

pub struct Session {
    config: MatchConfig,
    catalog: ItemCatalog,
    lookup: Box<dyn AnimationLookup>,
    hud: Hud,
    player: Soldier,
    body: KinematicBody,
    containers: AHashMap<ContainerId, LootContainer>,
    rng: ChaCha8Rng,
    next_container: u32,
    pub current_tick: Tick,
}

impl Session {
    pub fn new(config: MatchConfig, catalog: ItemCatalog, seed: u64) -> Self {
        Self::with_lookup(config, catalog, seed, Box::new(AtlasTable::new()))
    }

    pub fn with_lookup(
        config: MatchConfig,
        catalog: ItemCatalog,
        seed: u64,
        lookup: Box<dyn AnimationLookup>,
    ) -> Self {
        let player = Soldier::new(&config);
        Self {
            hud: Hud::new(config.inventory_slots),
            player,
            body: KinematicBody::new(Vec2::ZERO),
            containers: AHashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_container: 0,
            current_tick: 0,
            config,
            catalog,
            lookup,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn player(&self) -> &Soldier {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Soldier {
        &mut self.player
    }

    pub fn player_position(&self) -> Vec2 {
        self.body.position()
    }

    pub fn container(&self, id: ContainerId) -> Option<&LootContainer> {
        self.containers.get(&id)
    }

    /// Spawn a chest with rolled loot at `position`
    pub fn spawn_chest(&mut self, position: Vec2) -> ContainerId {
        let id = ContainerId(self.next_container);
        self.next_container = self.next_container.saturating_add(1);
        let chest =
            LootContainer::spawn_chest(id, position, &self.config, &self.catalog, &mut self.rng);
        self.containers.insert(id, chest);
        id
    }

    /// Place a prepared container in the world
    pub fn insert_container(&mut self, container: LootContainer) {
        self.next_container = self
            .next_container
            .max(container.id().0.saturating_add(1));
        self.containers.insert(container.id(), container);
    }

    /// Closest chest within interaction range of the player
    pub fn container_in_reach(&self) -> Option<ContainerId> {
        let position = self.body.position();
        let range = self.config.loot_interaction_range;
        self.containers
            .values()
            .filter(|c| c.in_reach(position, range))
            .min_by(|a, b| {
                a.position()
                    .distance(position)
                    .total_cmp(&b.position().distance(position))
            })
            .map(|c| c.id())
    }

    pub fn snapshot(&self) -> Result<HudSnapshot> {
        HudSnapshot::capture(&self.hud, &self.player)
    }

    /// Run one frame
    pub fn tick(&mut self, delta: f32, inputs: &[PlayerInput]) -> Result<Vec<SessionEvent>> {
        let mut events = Vec::new();
        let mut movement = Vec2::ZERO;

        for input in inputs {
            match *input {
                PlayerInput::Move(direction) => movement += direction,
                other => self.handle_input(other, &mut events)?,
            }
        }

        let selected = self.hud.selected_slot();
        let report = self.player.update(delta, selected, self.lookup.as_ref())?;
        if let Some(kind) = report.cancelled {
            events.push(SessionEvent::ActivityCancelled(kind));
        }
        if let Some(kind) = report.completed {
            events.push(SessionEvent::ActivityCompleted(kind));
        }
        if let Some(region) = report.animation {
            events.push(SessionEvent::AnimationChanged {
                atlas: region.atlas,
            });
        }

        let speed = self.config.base_speed * self.player.speed_factor(&self.config);
        self.body.drive(movement, speed, delta);

        for event in &events {
            tracing::trace!("tick {}: {:?}", self.current_tick, event);
        }
        self.current_tick += 1;
        Ok(events)
    }

    fn handle_input(&mut self, input: PlayerInput, events: &mut Vec<SessionEvent>) -> Result<()> {
        let selected = self.hud.selected_slot();
        if input.handles_items() && self.player.mobility() == Mobility::Blocked {
            events.push(SessionEvent::Action(ActionOutcome::Ignored(NoEffect::Busy)));
            return Ok(());
        }
        match input {
            PlayerInput::Select(slot) => self.hud.select(slot)?,
            PlayerInput::Scroll(step) => self.hud.scroll(step),
            PlayerInput::Use => {
                let outcome = self.player.use_selected_item(selected)?;
                events.push(SessionEvent::Action(outcome));
            }
            PlayerInput::Reload => {
                let outcome = self.player.reload_selected_weapon(selected)?;
                events.push(SessionEvent::Action(outcome));
            }
            PlayerInput::Equip(slot) => {
                let changed = self.player.inventory_mut().equip_from_slot(slot)?;
                events.push(SessionEvent::Equipped { slot, changed });
            }
            PlayerInput::Unequip(slot) => {
                let changed = self.player.inventory_mut().unequip(slot);
                events.push(SessionEvent::Unequipped { slot, changed });
            }
            PlayerInput::Take { container_slot } => {
                let Some(id) = self.container_in_reach() else {
                    events.push(SessionEvent::NoContainerInReach);
                    return Ok(());
                };
                if let Some(container) = self.containers.get_mut(&id) {
                    let exchange =
                        loot_to_inventory(container, container_slot, self.player.inventory_mut())?;
                    events.push(SessionEvent::Exchanged {
                        container: id,
                        exchange,
                    });
                }
            }
            PlayerInput::Stash { slot } => {
                let Some(id) = self.container_in_reach() else {
                    events.push(SessionEvent::NoContainerInReach);
                    return Ok(());
                };
                if let Some(container) = self.containers.get_mut(&id) {
                    let exchange =
                        inventory_to_loot(self.player.inventory_mut(), slot, container)?;
                    events.push(SessionEvent::Exchanged {
                        container: id,
                        exchange,
                    });
                }
            }
            PlayerInput::Cancel => {
                if let Some(kind) = self.player.cancel_activity(CancelReason::Interrupted) {
                    events.push(SessionEvent::ActivityCancelled(kind));
                }
            }
            PlayerInput::Move(_) => {}
        }
        Ok(())
    }
}
