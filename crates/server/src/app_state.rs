use std::path::PathBuf;

use shared::domain::BlockRecord;

pub(crate) struct AppState {
    pub(crate) catalog: Vec<BlockRecord>,
    pub(crate) index_path: PathBuf,
    pub(crate) static_dir: PathBuf,
    pub(crate) request_logging: bool,
}
