pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod score;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use score::{aggregate_by_period, category_progress, day_score, ACTIVITY_CATEGORY_COUNT};
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
