//! # 隐写解码模块
//!
//! 在像素数据中寻找标记像素，读取其所在行最右侧像素编码的长度，
//! 再从标记像素右侧开始逐像素读取消息字节。

use crate::bmp::{BmpHeader, Raster};
use crate::constants::{LENGTH_CHANNELS, MARKER_PIXEL, MESSAGE_CHANNEL};
use crate::error::DecodeError;

/// 标记像素的位置 (内存行坐标，行 0 为最下行)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub x: u32,
    pub y: u32,
}

/// 一次解码尝试的完整结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// 解析出的文件头，无论后续步骤成功与否都会保留。
    pub header: BmpHeader,
    /// 检测到的消息长度；在找到标记像素之前失败时为 `None`。
    pub message_length: Option<u16>,
    /// 解码出的消息字节，或者使解码停止的异常。
    pub outcome: Result<Vec<u8>, DecodeError>,
}

impl DecodeReport {
    /// 消息按 C 字符串显示的部分：截止到第一个 NUL 字节，原样保留其余字节。
    pub fn message_display_bytes(&self) -> Option<&[u8]> {
        let bytes = self.outcome.as_ref().ok()?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Some(&bytes[..end])
    }
}

/// 按固定顺序扫描标记像素：行从 `height - 1` 递减到 0，行内列从 0 递增。
///
/// 返回第一个前三个通道字节等于 `MARKER_PIXEL` 的像素位置。
pub fn find_marker(raster: &Raster) -> Option<Marker> {
    (0..raster.height()).rev().find_map(|y| {
        (0..raster.width()).find_map(|x| {
            raster
                .pixel(x, y)
                .filter(|pixel| pixel[..MARKER_PIXEL.len()] == MARKER_PIXEL)
                .map(|_| Marker { x, y })
        })
    })
}

/// 标记所在行最右侧像素的第 0 与第 2 通道之和。
///
/// 标记行不在视图内时返回 `None`。
pub fn message_length(raster: &Raster, marker: &Marker) -> Option<u16> {
    let pixel = raster.pixel(raster.width() - 1, marker.y)?;
    Some(
        LENGTH_CHANNELS
            .iter()
            .map(|&channel| u16::from(pixel[channel]))
            .sum(),
    )
}

/// 标记位置允许的最大消息长度：`width * height - (y * width + x)`。
///
/// 线性偏移按行号递增计算，而读取实际上是行号递减的，
/// 因此这个值与真正剩余的像素数并不一致。
pub fn capacity(raster: &Raster, marker: &Marker) -> u64 {
    let width = u64::from(raster.width());
    let height = u64::from(raster.height());
    width * height - (u64::from(marker.y) * width + u64::from(marker.x))
}

/// 从标记右侧一格开始读取 `length` 个消息字节。
///
/// 列递增；列到达宽度时回到第 0 列，行号减一。需要越过第 0 行时停止。
///
/// # Errors
///
/// 读取途中需要第 0 行之下的行时返回 `DecodeError::ReachedImageEdge`，已读取的部分被丢弃。
pub fn extract(raster: &Raster, marker: &Marker, length: u16) -> Result<Vec<u8>, DecodeError> {
    let mut message = Vec::with_capacity(usize::from(length));
    let (mut x, mut y) = (marker.x + 1, marker.y);

    for _ in 0..length {
        if x >= raster.width() {
            x = 0;
            if y == 0 {
                return Err(DecodeError::ReachedImageEdge {
                    decoded: message.len(),
                });
            }
            y -= 1;
        }

        let pixel = raster
            .pixel(x, y)
            .ok_or(DecodeError::ReachedImageEdge {
                decoded: message.len(),
            })?;
        message.push(pixel[MESSAGE_CHANNEL]);
        x += 1;
    }

    Ok(message)
}

/// 对整个文件缓冲区执行一次解码。
///
/// 只有在连文件头都无法读取时才返回 `Err`；其余所有异常都记录在 `DecodeReport::outcome` 中。
///
/// # Errors
///
/// 缓冲区短于 BMP 文件头时返回 `DecodeError::TruncatedHeader`。
pub fn decode(buffer: &[u8]) -> Result<DecodeReport, DecodeError> {
    let header = BmpHeader::parse(buffer)?;
    let mut report = DecodeReport {
        header,
        message_length: None,
        outcome: Err(DecodeError::MarkerNotFound),
    };

    let raster = match Raster::new(buffer, &header) {
        Ok(raster) => raster,
        Err(err) => {
            log::debug!("{:?}", err);
            report.outcome = Err(err);
            return Ok(report);
        }
    };

    let Some(marker) = find_marker(&raster) else {
        log::debug!("no marker pixel in {}x{} image", raster.width(), raster.height());
        return Ok(report);
    };
    log::debug!("marker pixel at ({}, {})", marker.x, marker.y);

    // 标记来自同一视图，其所在行一定存在
    let Some(length) = message_length(&raster, &marker) else {
        return Ok(report);
    };
    report.message_length = Some(length);

    let max_length = capacity(&raster, &marker);
    log::debug!("message length {}, capacity {}", length, max_length);
    if u64::from(length) > max_length {
        report.outcome = Err(DecodeError::InvalidLength {
            length,
            capacity: max_length,
        });
        return Ok(report);
    }

    report.outcome = extract(&raster, &marker, length);
    if let Err(err) = &report.outcome {
        log::debug!("{:?}", err);
    }
    Ok(report)
}
