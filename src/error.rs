//! # 错误类型模块
//!
//! 隐写核心与其 I/O 协作者可能产生的全部错误。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 隐写过程中可能出现的错误。
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Unable to load carrier image {path:?}")]
    CarrierLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unable to write carrier image {path:?}")]
    CarrierWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Not enough space in the image: required {required} bits, available {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    #[error("Slot {slot} is outside the carrier (capacity {capacity} slots)")]
    SlotOutOfRange { slot: usize, capacity: usize },

    #[error("Declared message length {declared} bytes exceeds what the carrier holds ({available} bytes)")]
    LengthPrefixOutOfRange { declared: u64, available: usize },

    #[error("Unable to read message file {path:?}")]
    MessageRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not open log file {path:?}")]
    LogInit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("A logger is already installed for this process")]
    LoggerInstalled(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, StegoError>;
