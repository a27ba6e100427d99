//! # 命令行接口模块
//!
//! 使用 `clap` 定义程序的命令行结构：一个位置参数 (输入图像) 和可选的输出文件。

use clap::Parser;
use std::path::PathBuf;

/// 参数数量不对时打印的用法行。
pub const USAGE: &str = "Usage: decode <input_filename>";

/// 从 32 位 BMP 图像中提取以标记像素开头的隐藏文本。
#[derive(Parser, Debug)]
#[command(
    name = "decode",
    version,
    about,
    long_about = "从 32 位 BMP 图像中提取隐藏文本：先寻找标记像素 (127, 188, 217)，再按其所在行最右侧像素读取长度，逐像素恢复消息。"
)]
pub struct Cli {
    /// 含有隐藏消息的 32 位 BMP 图像路径。
    pub image: PathBuf,

    /// 将解码出的原始字节另存到该文件。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件已存在时覆盖它。
    #[arg(short, long, requires = "output")]
    pub force: bool,
}
