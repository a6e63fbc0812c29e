use serde::{Deserialize, Serialize};

///
/// Policy deciding whether a candidate input file is large enough to be
/// included in a manifest.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileThreshold {
    /// Minimum size of the file in bytes
    MinFileSize(u64),
    /// Minimum number of lines, counted after decompression
    MinLines(u64),
}

impl Default for FileThreshold {
    fn default() -> Self {
        FileThreshold::MinFileSize(0)
    }
}

impl FileThreshold {
    /// The configured line count, if this is a line-count policy.
    pub fn min_lines(&self) -> Option<u64> {
        match self {
            FileThreshold::MinLines(n) => Some(*n),
            FileThreshold::MinFileSize(_) => None,
        }
    }
}
