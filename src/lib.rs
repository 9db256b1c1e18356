pub mod config;
pub mod error;
#[cfg(feature = "gtk")]
pub mod gtk;
pub mod logging;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod toast;
pub mod ui;

pub use config::{load_toast_config, OverlapPolicy, ToastConfig, DEFAULT_DURATION_MS};
pub use error::{ToastError, ToastResult};
pub use scheduler::{ManualScheduler, Scheduler, Task, TimerHandle};
pub use state::{ToastEvent, Visibility};
pub use surface::{MemorySurface, StyleTarget, TextSlot, ToastSurface};
pub use toast::{ToastKind, ToastPresenter, ToastRequest};
