pub mod clock;
pub mod collision;
pub mod config;
pub mod constants;
pub mod dirt;
pub mod error;
pub mod game_loop;
pub mod gesture;
pub mod landmarks;
pub mod level;
pub mod render;
pub mod session;
pub mod synth;
pub mod worker;

pub use clock::*;
pub use config::GameConfig;
pub use constants::*;
pub use dirt::{DirtId, DirtSpawner, DirtTarget, SpawnerState};
pub use error::{ConfigError, WorkerError};
pub use game_loop::{GameLoop, TickOutcome};
pub use gesture::{classify, is_paper, Gesture, GestureThresholds};
pub use landmarks::{DetectionResult, Hand, Landmark, Rect, Viewport};
pub use level::{LevelConfig, LevelTable};
pub use render::{RecordingSurface, RenderConfig, Renderer, Sprite, Surface};
pub use session::{GameEvent, GameSession};
pub use worker::{
    mailbox, DetectRequest, FrameGate, LandmarkWorker, MailboxReceiver, MailboxSender, WorkerLink,
    WorkerResponse, WorkerStatus,
};
