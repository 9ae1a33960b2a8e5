//! Ball Bin headless driver
//!
//! Stands in for a windowed frame loop: loads the config, feeds a scripted
//! sequence of inputs through a fixed-timestep accumulator and logs what
//! lands in the bin. Set `RUST_LOG=debug` to see every release.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use ball_bin::WorldConfig;
use ball_bin::consts::{MAX_SUBSTEPS, SIM_DT};
use ball_bin::scene::draw_list;
use ball_bin::sim::{PhysicsWorld, TickInput};

const CONFIG_PATH: &str = "ball_bin.json";

/// Frames of wall-clock time the scripted session runs for
const SESSION_FRAMES: u32 = 1800;

/// Driver instance holding the world and frame loop state
struct Driver {
    world: PhysicsWorld,
    accumulator: f32,
    input: TickInput,
    ticks: u64,
}

impl Driver {
    fn new(world: PhysicsWorld) -> Self {
        Self {
            world,
            accumulator: 0.0,
            input: TickInput::default(),
            ticks: 0,
        }
    }

    /// Run simulation ticks for one frame of `dt` seconds
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let summary = self.world.step(&self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.ticks += 1;

            // Clear one-shot inputs after processing
            self.input.release = false;

            if self.ticks % 120 == 0 {
                log::info!(
                    "tick {}: {} in bin, {} contacts, {} on floor",
                    self.ticks,
                    self.world.settled().len(),
                    summary.pair_contacts,
                    summary.floor_contacts
                );
            }
        }
    }

    /// Scripted player: sweep the held ball back and forth, drop every second
    fn script(&mut self, frame: u32) {
        let phase = (frame / 45) % 4;
        self.input.left_held = phase == 1;
        self.input.right_held = phase == 3;
        if frame % 60 == 59 {
            self.input.release = true;
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ball Bin (headless) starting...");

    let config = match WorldConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config {}: {}", CONFIG_PATH, e);
            return ExitCode::FAILURE;
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let world = match PhysicsWorld::new(config, seed) {
        Ok(world) => world,
        Err(e) => {
            log::error!("World refused to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut driver = Driver::new(world);
    for frame in 0..SESSION_FRAMES {
        driver.script(frame);
        driver.update(SIM_DT);
    }

    let world = &driver.world;
    let floor = world.bin().bottom();
    let resting = world
        .settled()
        .iter()
        .filter(|b| (b.bottom() - floor).abs() < 1e-3)
        .count();
    log::info!(
        "Done after {} ticks: {} balls dropped, {} resting on the floor, {} shapes to draw",
        driver.ticks,
        world.settled().len(),
        resting,
        draw_list(world).len()
    );
    ExitCode::SUCCESS
}
