//! Rendezvous - scripted match runner
//!
//! Plays a short fixed scenario against the engine (loot a chest, put on a vest,
//! take fire, heal, reload, shoot) and prints the HUD after every scripted step.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use rendezvous::core::config::{config, set_config, MatchConfig};
use rendezvous::core::error::Result;
use rendezvous::core::types::Vec2;
use rendezvous::game::{HudSnapshot, PlayerInput, Session, SessionEvent};
use rendezvous::items::{AmmoType, ArmorModel, ItemCatalog, WeaponModel};
use rendezvous::soldier::HitZone;

/// Scripted match runner
#[derive(Parser, Debug)]
#[command(name = "rendezvous")]
#[command(about = "Run a scripted match and print the HUD after each step")]
struct Args {
    /// Match config TOML (defaults used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Item catalog TOML overriding the built-in stats
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for chest loot rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Print snapshots as JSON lines
    #[arg(long)]
    json: bool,
}

/// One scripted step
struct Step {
    label: &'static str,
    delta: f32,
    inputs: Vec<PlayerInput>,
}

impl Step {
    fn new(label: &'static str, delta: f32, inputs: Vec<PlayerInput>) -> Self {
        Self {
            label,
            delta,
            inputs,
        }
    }
}

#[derive(Serialize)]
struct StepReport<'a> {
    step: &'a str,
    tick: u64,
    position: [f32; 2],
    hud: &'a HudSnapshot,
}

fn script() -> Vec<Step> {
    vec![
        Step::new("open chest", 0.016, vec![PlayerInput::Take { container_slot: 0 }]),
        Step::new("put on vest", 0.016, vec![PlayerInput::Equip(3)]),
        Step::new("take hit", 0.016, vec![]),
        Step::new("start heal", 0.5, vec![PlayerInput::Use]),
        Step::new("try to walk", 0.5, vec![PlayerInput::Move(Vec2::X)]),
        Step::new("finish heal", 2.5, vec![]),
        Step::new("select pistol", 0.016, vec![PlayerInput::Select(1)]),
        Step::new("start reload", 0.5, vec![PlayerInput::Reload]),
        Step::new("walk while reloading", 1.0, vec![PlayerInput::Move(Vec2::Y)]),
        Step::new("fire", 0.1, vec![PlayerInput::Use]),
        Step::new("cooldown", 0.5, vec![]),
        Step::new("stash ammo", 0.016, vec![PlayerInput::Stash { slot: 2 }]),
        Step::new("walk away", 1.0, vec![PlayerInput::Move(Vec2::new(1.0, 1.0))]),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rendezvous=info".into()),
        )
        .init();

    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => ItemCatalog::load_from_toml(path)?,
        None => ItemCatalog::with_defaults(),
    };
    if set_config(loaded).is_err() {
        tracing::warn!("Match config already set, keeping the first one");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Rendezvous starting (seed {})", seed);

    let mut session = Session::new(config().clone(), catalog, seed);
    let chest = session.spawn_chest(Vec2::new(1.0, 0.0));
    tracing::info!("Chest {:?} spawned next to the player", chest);

    // Starting kit: an empty pistol, one box of rounds and a vest to wear
    let pistol = session.catalog().weapon(WeaponModel::G21);
    let rounds = session.catalog().full_ammo_box(AmmoType::Nine);
    let vest = session.catalog().armor(ArmorModel::SoftVest);
    let inventory = session.player_mut().inventory_mut();
    inventory.set_item(1, pistol)?;
    inventory.set_item(2, rounds)?;
    inventory.set_item(3, vest)?;

    for step in script() {
        if step.label == "take hit" {
            let report = session.player_mut().take_hit(120, HitZone::Body);
            tracing::info!("Player hit: {:?}", report);
        }

        let events = session.tick(step.delta, &step.inputs)?;
        for event in &events {
            match event {
                SessionEvent::Action(outcome) if outcome.took_effect() => {
                    tracing::info!("{}: {:?}", step.label, outcome)
                }
                SessionEvent::Action(outcome) => {
                    tracing::warn!("{}: ignored ({:?})", step.label, outcome)
                }
                SessionEvent::Equipped { changed: false, .. } => {
                    tracing::warn!("{}: nothing to equip", step.label)
                }
                _ => {}
            }
        }

        let hud = session.snapshot()?;
        let position = session.player_position();
        if args.json {
            let report = StepReport {
                step: step.label,
                tick: session.current_tick,
                position: [position.x, position.y],
                hud: &hud,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_snapshot(step.label, session.current_tick, position, &hud);
        }
    }

    Ok(())
}

fn print_snapshot(label: &str, tick: u64, position: Vec2, hud: &HudSnapshot) {
    println!("=== Tick {} - {} ===", tick, label);
    println!(
        "  Health {}  Armor {}  Position ({:.1}, {:.1})",
        hud.health, hud.armor, position.x, position.y
    );
    for (slot, name) in hud.slots.iter().enumerate() {
        let marker = if slot == hud.selected_slot { ">" } else { " " };
        println!("  {} [{}] {}", marker, slot, name);
    }
    println!("  Helmet: {}  Armor: {}", hud.helmet, hud.armor_piece);
    if let (Some(loaded), Some(spare)) = (hud.bullets_in_magazine, hud.bullets_in_ammo_boxes) {
        println!("  Ammo {} / {}", loaded, spare);
    }
    if let Some(activity) = &hud.activity {
        println!("  {} {:.0}%", activity.activity, activity.progress * 100.0);
    }
    if hud.firing {
        println!("  FIRING");
    }
}
