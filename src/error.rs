//! # 错误类型模块
//!
//! 加载阶段与解码阶段各有一个错误枚举。
//! `DecodeError` 的文本就是打印给用户的诊断行，调用方直接输出 `Display` 即可。

use std::io;
use std::path::PathBuf;

/// 读取图像文件时可能出现的错误。
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Unable to open file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to query file metadata: {path}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Short read on {path}: expected {expected} bytes, got {actual}")]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

/// 解码过程中检测到的内容级异常。
///
/// 这些都不是进程级错误：解码在检测点停止，输出一行诊断信息。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("File is too small to contain a BMP header.")]
    TruncatedHeader { len: usize },

    #[error("Unsupported BMP format. Only 32-bit BMP files are supported.")]
    UnsupportedBitDepth { bits_per_pixel: u16 },

    #[error("Corrupt BMP: image width and height must be non-zero.")]
    EmptyImage { width: u32, height: u32 },

    #[error("Corrupt BMP: pixel data lies outside the file.")]
    PixelDataOutOfBounds { required: u64, available: u64 },

    #[error("Header not found.")]
    MarkerNotFound,

    #[error("Invalid message length detected.")]
    InvalidLength { length: u16, capacity: u64 },

    #[error("Reached the top of the image unexpectedly.")]
    ReachedImageEdge { decoded: usize },
}
