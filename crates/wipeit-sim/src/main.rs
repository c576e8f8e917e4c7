use anyhow::Context;
use glam::Vec2;
use std::collections::VecDeque;
use std::f32::consts::TAU;
use std::time::Duration;

use wipeit_core::worker::WireResults;
use wipeit_core::{
    as_millis_f64, synth, Clock, GameConfig, GameEvent, GameLoop, Hand, LandmarkWorker,
    ManualClock, RecordingSurface, Sprite, Viewport, WorkerError, WorkerLink, WorkerResponse,
    WorkerStatus, DEFAULT_SEED,
};

const FPS: u32 = 60;
const DEFAULT_SECONDS: u32 = 60;
const VIEW_W: f32 = 640.0;
const VIEW_H: f32 = 480.0;
// frames until the scripted model reports ready
const WARMUP_FRAMES: u64 = 30;
// frames between a detect request and its answer
const LATENCY_FRAMES: u64 = 2;
const HAND_SCALE: f32 = 0.12;

/// Which pose the scripted hand holds at a given time.
fn pose_at(t: f32) -> (Vec2, fn(Vec2, f32) -> Hand) {
    // Lissajous sweep over most of the frame
    let center = Vec2::new(
        0.5 + 0.4 * (TAU * t / 7.0).sin(),
        0.5 + 0.35 * (TAU * t / 5.0).sin(),
    );
    // a fist for one second out of every five, scissors now and then
    let phase = t % 5.0;
    let pose: fn(Vec2, f32) -> Hand = if phase >= 4.0 {
        synth::fist
    } else if (t % 13.0) >= 12.0 {
        synth::scissors
    } else {
        synth::open_hand
    };
    (center, pose)
}

/// In-process stand-in for the landmark worker: answers each request a few
/// frames later through the same link the browser worker uses.
struct ScriptedWorker {
    link: WorkerLink,
    frame: u64,
    in_flight: VecDeque<(u64, f64)>,
    requests: u64,
}

impl ScriptedWorker {
    fn new(link: WorkerLink) -> Self {
        link.dispatch(WorkerResponse::Status {
            status: WorkerStatus::Loading,
        });
        Self {
            link,
            frame: 0,
            in_flight: VecDeque::new(),
            requests: 0,
        }
    }

    /// Advances one frame and delivers the answers that are due.
    fn pump(&mut self) {
        self.frame += 1;
        if self.frame == WARMUP_FRAMES {
            self.link.dispatch(WorkerResponse::Status {
                status: WorkerStatus::Ready,
            });
        }
        while let Some(&(due, ts)) = self.in_flight.front() {
            if due > self.frame {
                break;
            }
            self.in_flight.pop_front();
            let (center, pose) = pose_at((ts / 1000.0) as f32);
            let hand = pose(center, HAND_SCALE);
            self.link.dispatch(WorkerResponse::Results {
                results: WireResults {
                    landmarks: vec![hand.points],
                },
                timestamp: ts,
            });
        }
    }
}

impl LandmarkWorker for ScriptedWorker {
    fn is_ready(&self) -> bool {
        self.link.is_ready()
    }

    fn detect(&mut self, timestamp_ms: f64) -> Result<(), WorkerError> {
        if !self.is_ready() {
            return Err(WorkerError::NotReady);
        }
        self.requests += 1;
        self.in_flight
            .push_back((self.frame + LATENCY_FRAMES, timestamp_ms));
        Ok(())
    }
}

#[derive(Default)]
struct Summary {
    spawned: u32,
    wiped: u32,
    level_ups: Vec<(f64, usize)>,
}

fn load_config(path: Option<&str>) -> anyhow::Result<GameConfig> {
    match path {
        None => Ok(GameConfig::default()),
        Some(p) => {
            let raw = std::fs::read_to_string(p).with_context(|| format!("reading {}", p))?;
            GameConfig::from_json_str(&raw).with_context(|| format!("parsing {}", p))
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let seconds: u32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad duration {:?}", s))?,
        None => DEFAULT_SECONDS,
    };
    let config = load_config(args.next().as_deref())?;
    let seed = config.seed.unwrap_or(DEFAULT_SEED);

    let clock = ManualClock::new();
    let (link, inbox) = WorkerLink::new();
    let mut worker = ScriptedWorker::new(link);
    let mut surface = RecordingSurface::new(Viewport::new(VIEW_W, VIEW_H));
    let mut game = GameLoop::new(&config, seed, inbox);
    let mut events = Vec::new();
    let mut summary = Summary::default();

    game.start(clock.now(), &mut events);
    log::info!(
        "[sim] {}s at {} fps, {} levels, seed {}",
        seconds,
        FPS,
        config.levels.len(),
        seed
    );

    let dt = Duration::from_secs(1) / FPS;
    for frame in 0..(seconds as u64 * FPS as u64) {
        clock.advance(dt);
        worker.pump();
        events.clear();
        // the fake camera produces a new frame every tick
        let video_time = frame as f64 / FPS as f64;
        game.tick(
            clock.now(),
            Some(video_time),
            &mut worker,
            &mut surface,
            &mut events,
        );
        for ev in &events {
            match ev {
                GameEvent::Spawned { .. } => summary.spawned += 1,
                GameEvent::Wiped { .. } => summary.wiped += 1,
                GameEvent::LevelUp { from, to } => {
                    let at = as_millis_f64(clock.now()) / 1000.0;
                    log::info!("[sim] level {} -> {} at {:.1}s", from, to, at);
                    summary.level_ups.push((at, *to));
                }
                GameEvent::Started | GameEvent::Stopped => {}
            }
        }
        if frame % (FPS as u64 * 10) == 0 {
            log::info!(
                "[sim] t={:>3}s score={} level={} dirt={} gesture={:?} sprites={}",
                frame / FPS as u64,
                game.session.score(),
                game.session.level(),
                game.session.targets().len(),
                game.session.last_gesture(),
                surface.sprites(Sprite::Dirt).count()
            );
        }
    }
    game.stop(&mut events);

    println!("detect requests : {}", worker.requests);
    println!("dirt spawned    : {}", summary.spawned);
    println!("dirt wiped      : {}", summary.wiped);
    println!("final score     : {}", game.session.score());
    println!("final level     : {}", game.session.level() + 1);
    for (at, level) in &summary.level_ups {
        println!("  level {} reached at {:.1}s", level + 1, at);
    }
    Ok(())
}
