use std::path::PathBuf;

use cube_core::scramble::{DEFAULT_SCRAMBLE_LENGTH, scramble, seeded_scramble};
use cube_core::{CubeState, MOVE_TABLE, Move, parse_moves, validate_move_table};
use cube_prefs::Preferences;
use cube_view::{CubeEngine, InputDispatcher, KeyOutcome, NetSnapshot, SHIFT_KEY};
use eyre::Result;
use itertools::Itertools;
use web_time::Duration;

/// Frame rate of the simulated frame loop.
const DEFAULT_FPS: u32 = 60;

/// Upper bound on frames spent waiting for one animation to finish.
const MAX_FRAMES_PER_MOVE: usize = 100_000;

/// Command-line 3x3x3 cube simulator
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// Preferences file to load on top of the defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print the net as color initials instead of colored blocks.
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Replay key presses through the simulator and print the net.
    Play {
        /// Keys to press, one character each. Uppercase letters are pressed
        /// with Shift held, which reverses the move.
        keys: String,
        /// Press a key every frame instead of waiting for each animation to
        /// finish. Keys pressed during an animation are dropped.
        #[arg(long)]
        no_wait: bool,
        /// Frames per second of the simulated frame loop.
        #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,
    },
    /// Apply move notation such as `R U R' U'` to a solved cube and print the
    /// net.
    Apply {
        /// Moves to apply.
        #[arg(required = true, allow_hyphen_values = true)]
        notation: Vec<String>,
    },
    /// Print a random scramble and the net it produces.
    Scramble {
        /// Number of moves.
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Check the move table against cube geometry.
    Check,
    /// Print the effective preferences as YAML.
    Prefs,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.config.as_deref())?;
    let print_state = |state: &CubeState| {
        let net = NetSnapshot::of(state);
        print_net(&net, &prefs, args.plain);
    };

    match args.subcommand {
        Subcommand::Play {
            keys,
            no_wait,
            fps,
        } => {
            let frame = Duration::from_secs_f64(1.0 / fps as f64);
            let (engine, net) = play(&prefs, &keys, no_wait, frame)?;
            print_net(&net, &prefs, args.plain);
            if engine.state().is_solved() {
                println!("solved");
            }
            Ok(())
        }

        Subcommand::Apply { notation } => {
            let moves = parse_moves(&notation.join(" "))?;
            let mut state = CubeState::solved();
            state.apply_moves(moves);
            print_state(&state);
            Ok(())
        }

        Subcommand::Scramble { length, seed } => {
            let moves = match seed {
                Some(seed) => seeded_scramble(seed, length),
                None => scramble(&mut rand::rng(), length),
            };
            println!("{}", moves.iter().join(" "));
            let mut state = CubeState::solved();
            state.apply_moves(moves);
            print_state(&state);
            Ok(())
        }

        Subcommand::Check => {
            validate_move_table()?;
            println!("move table OK ({} moves)", MOVE_TABLE.len());
            Ok(())
        }

        Subcommand::Prefs => {
            print!("{}", prefs.to_yaml_string()?);
            Ok(())
        }
    }
}

/// Presses each key in `keys` and runs the simulated frame loop until the
/// last animation finishes.
fn play(
    prefs: &Preferences,
    keys: &str,
    no_wait: bool,
    frame: Duration,
) -> Result<(CubeEngine, NetSnapshot)> {
    let mut engine = CubeEngine::new(&prefs.animation)?;
    let mut input = InputDispatcher::default();
    let mut net = NetSnapshot::of(engine.state());

    let mut applied: Vec<Move> = vec![];
    let mut dropped = 0;
    let mut frames = 0;

    for c in keys.chars().filter(|c| !c.is_whitespace()) {
        if !no_wait {
            frames += settle(&mut engine, frame);
        }

        let shift = c.is_uppercase();
        if shift {
            input.on_key_down(&mut engine, SHIFT_KEY, &mut net);
        }
        match input.on_key_down(&mut engine, &c.to_string(), &mut net) {
            KeyOutcome::Applied(mv) => applied.push(mv),
            KeyOutcome::Dropped => dropped += 1,
            KeyOutcome::Unrecognized => log::warn!("{c:?} is not a move key"),
            KeyOutcome::Modifier => (),
        }
        if shift {
            input.on_key_up(SHIFT_KEY);
        }

        if no_wait {
            engine.proceed(frame);
            frames += 1;
        }
    }
    frames += settle(&mut engine, frame);

    println!("applied: {}", applied.iter().join(" "));
    if dropped > 0 {
        println!("dropped: {dropped} key presses during animation");
    }
    log::info!("simulated {frames} frames");

    Ok((engine, net))
}

/// Runs frames until no animation is in progress. Returns the number of
/// frames run.
fn settle(engine: &mut CubeEngine, frame: Duration) -> usize {
    let mut frames = 0;
    while engine.is_locked() {
        if frames >= MAX_FRAMES_PER_MOVE {
            log::warn!("animation did not finish after {frames} frames; finishing it now");
            engine.finish_animation();
            break;
        }
        engine.proceed(frame);
        frames += 1;
    }
    frames
}

fn print_net(net: &NetSnapshot, prefs: &Preferences, plain: bool) {
    if plain {
        print!("{net}");
    } else {
        print!("{}", crate::display::ansi_net(net, &prefs.colors));
    }
}
