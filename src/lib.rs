//! # bmp_decode 库
//!
//! 从 32 位 BMP 图像中恢复以标记像素开头的隐藏消息。

// 声明库包含的所有模块。

pub mod bmp;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod loader;
pub mod steganography;
