/// 解码器读取的紧凑文件头字段总长度 (字节)：从签名到压缩后大小，无填充。
/// 任何更短的文件都无法被解释。
pub const HEADER_FIELDS_SIZE: usize = 38;

/// 唯一支持的位深。
pub const SUPPORTED_BITS_PER_PIXEL: u16 = 32;

/// 32 位像素占用的字节数。
pub const BYTES_PER_PIXEL: usize = 4;

/// 每条扫描线按 4 字节对齐。
pub const ROW_ALIGNMENT: u64 = 4;

/// 标记像素前三个通道字节 (按文件存储顺序)。
pub const MARKER_PIXEL: [u8; 3] = [127, 188, 217];

/// 消息字节取自像素的第 0 个通道。
pub const MESSAGE_CHANNEL: usize = 0;

/// 长度像素中相加的两个通道：第 0 个和第 2 个。
pub const LENGTH_CHANNELS: [usize; 2] = [0, 2];
