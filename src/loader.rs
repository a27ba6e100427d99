//! # 图像加载模块
//!
//! 只负责把文件的全部字节读入一块连续内存，不做任何解析。

use crate::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 读取整个文件并返回其字节。
///
/// 先通过元数据获取文件长度，再一次性读入；实际读到的字节数少于元数据长度时视为失败。
/// 返回的缓冲区归调用方所有，离开作用域即释放。
///
/// # Errors
///
/// 文件无法打开、无法获取元数据、读取失败或读取不完整时返回 `LoadError`。
pub fn load(path: &Path) -> Result<Vec<u8>, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let expected = file
        .metadata()
        .map_err(|source| LoadError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let mut buffer = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    file.read_to_end(&mut buffer)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let actual = buffer.len() as u64;
    if actual < expected {
        return Err(LoadError::ShortRead {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    log::debug!("loaded {} bytes from {}", actual, path.display());
    Ok(buffer)
}
