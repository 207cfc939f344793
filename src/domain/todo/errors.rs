//! Todo Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("无效的描述: {0}")]
    InvalidDescription(&'static str),
}
