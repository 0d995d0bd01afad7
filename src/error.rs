//! Errors raised while turning a trip response into renderable state.

use crate::polyline::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("malformed route geometry: {0}")]
    MalformedGeometry(#[from] DecodeError),

    #[error("cannot compute bounds over zero points")]
    EmptyBoundsInput,

    #[error("log index {index} is out of range for {len} daily logs")]
    CursorOutOfRange { index: usize, len: usize },

    #[error("{logs} daily logs but {sheets} log sheets")]
    LogSheetMismatch { logs: usize, sheets: usize },

    #[error("log sheet is not valid base64: {0}")]
    LogSheetEncoding(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ViewError>;
