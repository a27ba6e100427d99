//! 集成测试共用的辅助函数：生成随机图像，并按解码器约定把消息写进像素。
//!
//! 坐标使用解码器的内存行约定 (行 0 为最下行)；`image` 的行 0 在最上面，
//! 文件中的第 0 个通道字节对应 `Rgba` 的蓝色通道 (索引 2)，第 2 个对应红色通道 (索引 0)。

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use rand::RngCore;

pub const MARKER_RGBA: Rgba<u8> = Rgba([217, 188, 127, 255]);

/// 文件通道索引到 `Rgba` 通道索引的映射。
fn rgba_index(file_channel: usize) -> usize {
    [2, 1, 0, 3][file_channel]
}

fn visual_row(img: &RgbaImage, memory_row: u32) -> u32 {
    img.height() - 1 - memory_row
}

pub fn set_file_channel(img: &mut RgbaImage, x: u32, memory_row: u32, channel: usize, value: u8) {
    let row = visual_row(img, memory_row);
    img.get_pixel_mut(x, row).0[rgba_index(channel)] = value;
}

pub fn file_channel(img: &RgbaImage, x: u32, memory_row: u32, channel: usize) -> u8 {
    img.get_pixel(x, visual_row(img, memory_row)).0[rgba_index(channel)]
}

/// 生成随机像素图像，并确保其中没有意外出现的标记像素。
pub fn random_image(width: u32, height: u32) -> RgbaImage {
    let mut raw = vec![0u8; (width * height * 4) as usize];
    rand::rng().fill_bytes(&mut raw);

    let mut img = RgbaImage::new(width, height);
    img.pixels_mut()
        .zip(raw.chunks_exact(4))
        .for_each(|(pixel, chunk)| {
            *pixel = Rgba([chunk[0], chunk[1], chunk[2], 255]);
            if pixel.0[..3] == MARKER_RGBA.0[..3] {
                pixel.0[0] = 0;
            }
        });
    img
}

/// 把 `message` 按解码器的读取顺序写入图像：标记放在 `(x, memory_row)`，
/// 长度写在同一行最右侧像素的第 0 与第 2 通道。
///
/// 长度像素同时落在读取路径上时，其第 0 通道就是消息字节，第 2 通道补足差值；
/// 消息无法满足这个约束时直接 panic。
pub fn embed(img: &mut RgbaImage, x: u32, memory_row: u32, message: &[u8]) {
    let width = img.width();
    assert!(x + 1 < width, "a marker in the last column encodes its own length");
    *img.get_pixel_mut(x, visual_row(img, memory_row)) = MARKER_RGBA;

    let (mut cx, mut cy) = (x + 1, memory_row);
    for &byte in message {
        if cx >= width {
            cx = 0;
            cy = cy.checked_sub(1).expect("message runs past the bottom row");
        }
        set_file_channel(img, cx, cy, 0, byte);
        cx += 1;
    }

    let length = message.len();
    let low = usize::from(file_channel(img, width - 1, memory_row, 0));
    let length_in_path = length > (width - 2 - x) as usize;
    let (first, third) = if length_in_path {
        assert!(
            low <= length && length - low <= 255,
            "message length {} cannot be encoded next to byte {}",
            length,
            low
        );
        (low, length - low)
    } else {
        let first = length.min(255);
        (first, length - first)
    };
    set_file_channel(img, width - 1, memory_row, 0, first as u8);
    set_file_channel(img, width - 1, memory_row, 2, third as u8);
}
