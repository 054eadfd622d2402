use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub images_found: u64,
    pub images_processed: u64,
    pub images_skipped: u64,
    pub chunks: u64,
    pub groups: u64,
    pub files_written: u64,
}
