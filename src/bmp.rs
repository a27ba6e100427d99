//! # BMP 结构模块
//!
//! 按字段逐个以小端序解析 BMP 文件头，并在像素数据之上提供一个带边界检查的只读视图。
//! 不依赖任何宿主结构体布局。

use crate::constants::{BYTES_PER_PIXEL, HEADER_FIELDS_SIZE, ROW_ALIGNMENT, SUPPORTED_BITS_PER_PIXEL};
use crate::error::DecodeError;
use std::fmt;

/// 文件开头紧凑排列的全部文件头字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
    pub info_header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression_type: u32,
    pub compressed_size: u32,
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

impl BmpHeader {
    /// 从缓冲区开头解析文件头。
    ///
    /// # Errors
    ///
    /// 缓冲区不足 `HEADER_FIELDS_SIZE` 字节时返回 `DecodeError::TruncatedHeader`。
    pub fn parse(buffer: &[u8]) -> Result<Self, DecodeError> {
        let Some(bytes) = buffer.get(..HEADER_FIELDS_SIZE) else {
            return Err(DecodeError::TruncatedHeader { len: buffer.len() });
        };

        Ok(Self {
            signature: [bytes[0], bytes[1]],
            file_size: read_u32(bytes, 2),
            reserved: read_u32(bytes, 6),
            data_offset: read_u32(bytes, 10),
            info_header_size: read_u32(bytes, 14),
            width: read_u32(bytes, 18),
            height: read_u32(bytes, 22),
            planes: read_u16(bytes, 26),
            bits_per_pixel: read_u16(bytes, 28),
            compression_type: read_u32(bytes, 30),
            compressed_size: read_u32(bytes, 34),
        })
    }
}

impl fmt::Display for BmpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signature: String = self.signature.iter().map(|&b| char::from(b)).collect();
        writeln!(f, "signature: {}", signature)?;
        writeln!(f, "file_size: {}", self.file_size)?;
        writeln!(f, "data_offset: {}", self.data_offset)?;
        writeln!(f, "info_header_size: {}", self.info_header_size)?;
        writeln!(f, "width: {}", self.width)?;
        writeln!(f, "height: {}", self.height)?;
        writeln!(f, "planes: {}", self.planes)?;
        writeln!(f, "bit_per_px: {}", self.bits_per_pixel)?;
        writeln!(f, "compression_type: {}", self.compression_type)?;
        write!(f, "compression_size: {}", self.compressed_size)
    }
}

/// 32 位像素阵列的只读视图。
///
/// 行按自底向上存储：内存行 0 是视觉上最下面的一行。
/// 构造时已校验整个像素区域位于缓冲区内，之后的 `pixel` 访问不会越界。
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
    row_stride: usize,
}

impl<'a> Raster<'a> {
    /// 校验位深与几何信息，建立像素视图。
    ///
    /// # Errors
    ///
    /// * 位深不是 32 —— `UnsupportedBitDepth`
    /// * 宽或高为 0 —— `EmptyImage`
    /// * `data_offset + row_stride * height` 超出缓冲区 —— `PixelDataOutOfBounds`
    pub fn new(buffer: &'a [u8], header: &BmpHeader) -> Result<Self, DecodeError> {
        if header.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
            return Err(DecodeError::UnsupportedBitDepth {
                bits_per_pixel: header.bits_per_pixel,
            });
        }

        let (width, height) = (header.width, header.height);
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyImage { width, height });
        }

        let row_stride = (u64::from(width) * BYTES_PER_PIXEL as u64 + (ROW_ALIGNMENT - 1))
            & !(ROW_ALIGNMENT - 1);
        let offset = u64::from(header.data_offset);
        let available = buffer.len() as u64;
        let required = row_stride
            .checked_mul(u64::from(height))
            .and_then(|size| size.checked_add(offset))
            .unwrap_or(u64::MAX);

        if required > available {
            return Err(DecodeError::PixelDataOutOfBounds {
                required,
                available,
            });
        }

        // required <= buffer.len()，以下转换不会截断
        let pixels = &buffer[offset as usize..required as usize];
        log::debug!(
            "raster {}x{}, stride {} bytes, pixel data at {}..{}",
            width,
            height,
            row_stride,
            offset,
            required
        );

        Ok(Self {
            pixels,
            width,
            height,
            row_stride: row_stride as usize,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 每条扫描线的字节数 (含对齐填充)。
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// 读取第 `y` 行 (内存行，0 为最下行) 第 `x` 列像素的 4 个通道字节，按文件顺序。
    ///
    /// 坐标超出图像时返回 `None`。
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; BYTES_PER_PIXEL]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y as usize * self.row_stride + x as usize * BYTES_PER_PIXEL;
        self.pixels
            .get(start..start + BYTES_PER_PIXEL)?
            .try_into()
            .ok()
    }
}
