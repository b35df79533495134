//! Soldier - inventory, vitals and combat activity of one combatant
//!
//! The HUD owns the selected slot; every action takes it as an argument.
//! Per frame, `update` runs cancellation checks, advances the in-flight
//! activity, refreshes the armor display and lets the animation resolver
//! look at the equipment.

pub mod damage;

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationLookup, AnimationRegion, EquipmentKey, EquipmentResolver};
use crate::combat::{
    ActionOutcome, ActivityKind, CombatActivity, CombatMachine, CombatState, Mobility, NoEffect,
};
use crate::core::config::MatchConfig;
use crate::core::error::Result;
use crate::core::types::SoldierId;
use crate::inventory::{AmmoTransfer, Inventory};
use crate::items::Item;

pub use damage::{HitReport, HitZone};

/// What happened to a soldier during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoldierUpdate {
    pub completed: Option<ActivityKind>,
    pub cancelled: Option<ActivityKind>,
    /// New animation set, when the equipment changed this frame
    pub animation: Option<AnimationRegion>,
}

/// Effect an item has on its holder when an activity completes
enum Effect {
    Heal(u32),
    Reload(u32),
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancelReason {
    /// Selection moved away from the slot the activity acts on
    SelectionChanged,
    /// The item in that slot was removed or replaced
    ItemChanged,
    /// Menu opened, player interrupted, etc.
    Interrupted,
}

#[derive(Debug, Clone)]
pub struct Soldier {
    id: SoldierId,
    health: u32,
    max_health: u32,
    armor_points: u32,
    firing: bool,
    fired_instant: bool,
    inventory: Inventory,
    combat: CombatMachine,
    resolver: EquipmentResolver,
}

impl Soldier {
    pub fn new(config: &MatchConfig) -> Self {
        Self::with_inventory(config, Inventory::new(config.inventory_slots))
    }

    pub fn with_inventory(config: &MatchConfig, inventory: Inventory) -> Self {
        Self {
            id: SoldierId::new(),
            health: config.max_health,
            max_health: config.max_health,
            armor_points: inventory.armor_points(),
            firing: false,
            fired_instant: false,
            inventory,
            combat: CombatMachine::new(),
            resolver: EquipmentResolver::new(),
        }
    }

    pub fn id(&self) -> SoldierId {
        self.id
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Armor display value, refreshed every frame from the equipped armor
    pub fn armor_points(&self) -> u32 {
        self.armor_points
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn combat_state(&self) -> CombatState {
        self.combat.state()
    }

    pub fn activity(&self) -> Option<&CombatActivity> {
        self.combat.activity()
    }

    pub fn animation(&self) -> Option<&AnimationRegion> {
        self.resolver.region()
    }

    pub fn resolver(&self) -> &EquipmentResolver {
        &self.resolver
    }

    /// Movement signal for the movement system
    pub fn mobility(&self) -> Mobility {
        self.combat.mobility()
    }

    /// Multiplier applied to the base movement speed
    pub fn speed_factor(&self, config: &MatchConfig) -> f32 {
        match self.mobility() {
            Mobility::Free => 1.0,
            Mobility::Slowed => config.slowed_speed_factor,
            Mobility::Blocked => 0.0,
        }
    }

    /// Add `difference` to health, clamped to [0, max_health]
    pub fn change_health(&mut self, difference: i32) {
        let next = self.health as i64 + difference as i64;
        self.health = next.clamp(0, self.max_health as i64) as u32;
    }

    /// Act with the item in the selected slot
    pub fn use_selected_item(&mut self, selected: usize) -> Result<ActionOutcome> {
        let target = self.id;
        let item = self.inventory.get_item_mut(selected)?;
        let class = item.class();

        let outcome = match item {
            Item::Medkit(medkit) => self.combat.begin(CombatActivity::new(
                ActivityKind::Healing,
                selected,
                class,
                target,
                medkit.time_to_use,
            )),
            Item::Weapon(_) if self.combat.is_busy() => ActionOutcome::Ignored(NoEffect::Busy),
            Item::Weapon(weapon) => {
                if !weapon.shoot() {
                    return Ok(ActionOutcome::Ignored(NoEffect::EmptyMagazine));
                }
                let cooldown = weapon.time_to_fire;
                self.firing = true;
                if cooldown <= 0.0 {
                    self.fired_instant = true;
                    ActionOutcome::Fired
                } else {
                    self.combat.begin(CombatActivity::new(
                        ActivityKind::Firing,
                        selected,
                        class,
                        target,
                        cooldown,
                    ))
                }
            }
            Item::Empty | Item::Ammo(_) | Item::Armor(_) | Item::Helmet(_) => {
                ActionOutcome::Ignored(NoEffect::InvalidAction)
            }
        };
        Ok(outcome)
    }

    /// Start reloading the selected weapon from matching ammo boxes
    pub fn reload_selected_weapon(&mut self, selected: usize) -> Result<ActionOutcome> {
        let item = self.inventory.get_item(selected)?;
        let Some(weapon) = item.as_weapon() else {
            return Ok(ActionOutcome::Ignored(NoEffect::InvalidAction));
        };
        if !self.inventory.has_ammo_for(weapon.ammo_type) {
            return Ok(ActionOutcome::Ignored(NoEffect::InsufficientAmmo));
        }

        let activity = CombatActivity::new(
            ActivityKind::Reloading,
            selected,
            item.class(),
            self.id,
            weapon.time_to_reload,
        );
        let missing = weapon.missing();
        let outcome = self.combat.begin(activity);
        if outcome.took_effect() {
            tracing::debug!("Reloading slot {} ({} rounds missing)", selected, missing);
        }
        Ok(outcome)
    }

    /// Refill the selected weapon; see `Inventory::transfer_ammo`
    pub fn transfer_ammo(
        &mut self,
        selected: usize,
        bullets_in_weapon: u32,
    ) -> Result<Option<AmmoTransfer>> {
        self.inventory.transfer_ammo(selected, bullets_in_weapon)
    }

    /// Completion effect of a finished activity on the item it acted on
    pub fn apply_action(&mut self, activity: &CombatActivity) -> Result<()> {
        let slot = activity.slot;
        let effect = match (activity.kind, self.inventory.get_item(slot)?) {
            (ActivityKind::Healing, Item::Medkit(medkit)) => Effect::Heal(medkit.heal_amount),
            (ActivityKind::Reloading, Item::Weapon(weapon)) => Effect::Reload(weapon.bullets()),
            _ => Effect::Nothing,
        };

        match effect {
            Effect::Heal(amount) => {
                self.change_health(amount.min(i32::MAX as u32) as i32);
                // Single use
                self.inventory.set_item(slot, Item::Empty)?;
                tracing::debug!("Healed {} -> health {}", amount, self.health);
            }
            Effect::Reload(bullets) => {
                self.transfer_ammo(slot, bullets)?;
            }
            Effect::Nothing => {}
        }
        Ok(())
    }

    /// Drop the in-flight activity without applying any of its effect
    pub fn cancel_activity(&mut self, reason: CancelReason) -> Option<ActivityKind> {
        let cancelled = self.combat.cancel()?;
        tracing::debug!("Soldier {:?} activity cancelled: {:?}", self.id.0, reason);
        Some(cancelled.kind)
    }

    /// Reason the current activity should stop, if it no longer applies
    fn stale_activity(&self, selected: usize) -> Option<CancelReason> {
        let activity = self.combat.activity()?;
        if activity.slot != selected {
            return Some(CancelReason::SelectionChanged);
        }
        let still_there = self
            .inventory
            .get_item(activity.slot)
            .map(|item| item.class() == activity.class)
            .unwrap_or(false);
        if !still_there {
            return Some(CancelReason::ItemChanged);
        }
        None
    }

    /// Per-frame update
    pub fn update(
        &mut self,
        delta: f32,
        selected: usize,
        lookup: &dyn AnimationLookup,
    ) -> Result<SoldierUpdate> {
        let mut report = SoldierUpdate::default();

        if let Some(reason) = self.stale_activity(selected) {
            report.cancelled = self.cancel_activity(reason);
        }

        if let Some(finished) = self.combat.advance(delta) {
            self.apply_action(&finished)?;
            report.completed = Some(finished.kind);
        }

        self.firing = self.combat.state() == CombatState::Firing || self.fired_instant;
        self.fired_instant = false;

        self.armor_points = self.inventory.armor_points();

        let key = EquipmentKey::observe(&self.inventory, selected)?;
        report.animation = self.resolver.update(key, lookup).cloned();

        Ok(report)
    }

    /// HUD: bullets loaded in the selected weapon
    pub fn bullets_in_magazine(&self, selected: usize) -> Result<Option<u32>> {
        self.inventory.bullets_in_magazine(selected)
    }

    /// HUD: matching rounds in ammo boxes for the selected weapon
    pub fn bullets_in_ammo_boxes(&self, selected: usize) -> Result<Option<u32>> {
        self.inventory.bullets_in_ammo_boxes(selected)
    }
}
