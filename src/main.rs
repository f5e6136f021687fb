//! Roguelife - headless runner
//!
//! Builds a small island, lets the player auto-explore it for a number of
//! ticks and prints what the player observed along the way.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roguelife::actions::ActionKind;
use roguelife::ai::Ai;
use roguelife::core::config::SimulationConfig;
use roguelife::core::error::{Result, RogueError};
use roguelife::core::types::EntityId;
use roguelife::ecs::world::World;
use roguelife::entity::factories;
use roguelife::render;
use roguelife::simulation::{player_turn, run_tick};
use roguelife::world::{GameMap, TileKind};

const SAVE_PATH: &str = "roguelife_save.json";

/// Smallest map the handcrafted island fits on
const MIN_WIDTH: i32 = 32;
const MIN_HEIGHT: i32 = 20;

#[derive(Parser, Debug)]
#[command(name = "roguelife")]
#[command(about = "Run the life simulation headless and print the player's log")]
struct Args {
    /// TOML config file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Override the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Ask the player for a reflection every this many ticks (0 = never)
    #[arg(long, default_value_t = 100)]
    reflect_every: u64,

    /// Print the explored map at the end
    #[arg(long)]
    show_map: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roguelife=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    tracing::info!(seed = config.seed, ticks = args.ticks, "Roguelife starting");

    let mut world = World::new(config)?;
    let player = build_island(&mut world)?;

    if let Err(err) = run(&mut world, player, &args) {
        tracing::error!(%err, "simulation aborted");
        match world.snapshot().save(Path::new(SAVE_PATH)) {
            Ok(()) => tracing::info!(path = SAVE_PATH, "world saved"),
            Err(save_err) => tracing::warn!(%save_err, "could not save world"),
        }
        return Err(err);
    }

    print_log(&world, player);
    if args.show_map {
        for row in render::ascii_frame(&world) {
            println!("{row}");
        }
    }
    Ok(())
}

fn run(world: &mut World, player: EntityId, args: &Args) -> Result<()> {
    let mut explorer = Ai::AutoExplore;

    for _ in 0..args.ticks {
        let alive = world.actor(player).is_some_and(|a| a.is_alive());
        if !alive {
            tracing::info!(tick = world.now(), "the player has died");
            break;
        }

        let action = explorer.plan(world, player).unwrap_or(ActionKind::Wait);
        if let Err(impossible) = player_turn(world, action) {
            // Already in the player's log; the world still moves on
            tracing::debug!(reason = %impossible, "player action failed");
            run_tick(world);
        }

        let now = world.now();
        if args.reflect_every > 0 && now % args.reflect_every == 0 {
            reflect(world, player)?;
        }
    }

    Ok(())
}

/// Record a reflection in the player's log. A failing text collaborator
/// only costs this reflection; a missing player is fatal.
fn reflect(world: &mut World, player: EntityId) -> Result<()> {
    match world.reflect_on(player) {
        Ok(text) => world.observe_plain(player, text),
        Err(err @ (RogueError::EntityNotFound(_) | RogueError::NotAnActor(_))) => return Err(err),
        Err(err) => tracing::warn!(%err, tick = world.now(), "reflection skipped"),
    }
    Ok(())
}

/// Water all around, a sand beach, grass inland with a small stone hut, then
/// the inhabitants. Returns the player's id.
fn build_island(world: &mut World) -> Result<EntityId> {
    let (w, h) = (world.config.map_width, world.config.map_height);
    if w < MIN_WIDTH || h < MIN_HEIGHT {
        return Err(RogueError::InvalidConfig(format!(
            "the island needs at least a {MIN_WIDTH}x{MIN_HEIGHT} map, got {w}x{h}"
        )));
    }

    let mut map = GameMap::new(w, h, TileKind::Water);
    map.fill_rect(2, 2, w - 3, h - 3, TileKind::Sand);
    map.fill_rect(4, 4, w - 5, h - 5, TileKind::Grass);
    map.fill_rect(w / 2 + 2, 5, w / 2 + 8, 9, TileKind::Wall);
    map.fill_rect(w / 2 + 3, 6, w / 2 + 7, 8, TileKind::Floor);
    map.set_tile(w / 2 + 5, 9, TileKind::Floor);
    map.set_tile(6, h - 6, TileKind::Mountain);
    map.set_tile(7, h - 6, TileKind::Mountain);
    map.fill_rect(w - 8, h - 7, w - 6, h - 6, TileKind::Forest);
    world.map = map;

    let player = factories::spawn_player(world, 5, 5)?;

    factories::spawn_wandering_human(world, 8, 6)?;
    factories::spawn_exploring_human(world, 6, 8)?;
    factories::spawn_orc(world, w / 2 + 5, 7)?;
    factories::spawn_troll(world, w - 7, h - 8)?;

    factories::spawn_health_potion(world, 7, 5)?;
    factories::spawn_confusion_scroll(world, w / 2 + 4, 7)?;
    factories::spawn_fireball_scroll(world, 10, h - 6)?;
    factories::spawn_lightning_scroll(world, w - 10, h / 2)?;
    factories::spawn_apple(world, 9, 9)?;

    factories::spawn_tree(world, 12, 6)?;
    factories::spawn_tree(world, w - 9, h - 9)?;

    Ok(player)
}

fn print_log(world: &World, player: EntityId) {
    let Some(actor) = world.actor(player) else {
        return;
    };
    println!("=== {} ===", world.full_name_of(player));
    for observation in actor.log.iter() {
        println!("{}  {}", world.clock.format(observation.timestamp), observation.text);
    }
}
