//! Samurai Admin Common Library
//!
//! CLIとWeb(WASM)で共有されるセッション管理・APIクライアント・表示モデル

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod sequencer;
pub mod session;
pub mod time;
pub mod types;
pub mod view;

pub use api::{ApiClient, ApiResponse, Command, Transport, COMMUNICATION_FAILED};
pub use config::ClientConfig;
pub use controller::{AppState, Controller, Phase, StateHandle, Tab, ToastKind};
pub use error::{Error, Result};
pub use session::{MemoryStorage, SessionStore, StorageBackend};
pub use time::{Clock, FixedClock, LocalClock};
pub use types::{EventInfo, LogEntry, Mode, Session, Settings, SettingsData, TargetItem};
pub use view::{EventStatus, EventsView, Region, SettingsForm, StatusCards};
