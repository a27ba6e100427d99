//! # 命令处理逻辑模块
//!
//! 协调文件读取、调用解码器并向用户报告结果。
//! 信息性内容 (文件头字段、消息长度、消息) 写到标准输出，诊断信息写到标准错误。

use crate::cli::Cli;
use crate::loader::load;
use crate::steganography::decode;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};

/// 处理一次解码请求。
///
/// 读取图像、打印文件头、解码并输出消息。内容层面的异常 (位深不支持、找不到标记、
/// 长度非法、读取越过图像边界) 只打印诊断信息，仍然返回 `Ok(())`。
///
/// # Arguments
///
/// * `args` - 解析后的命令行参数。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入图像。
/// * 指定的输出文件已存在且没有 `--force`。
/// * 无法写入输出文件。
pub fn handle_decode(args: Cli) -> Result<()> {
    if let Some(output) = &args.output {
        anyhow::ensure!(
            args.force || !output.exists(),
            "Output file already exists: {} (use --force to overwrite)",
            output.to_string_lossy().red().bold()
        );
    }

    let picture = load(&args.image).context("Failed to read file")?;

    let report = match decode(&picture) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(());
        }
    };

    println!("{}", report.header);

    if let Some(length) = report.message_length {
        println!("Detected message length: {}", length);
    }

    let message = match &report.outcome {
        Ok(message) => message,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(());
        }
    };

    if let Some(shown) = report.message_display_bytes() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(b"Decoded message: ")?;
        stdout.write_all(shown)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    if let Some(output) = &args.output {
        fs::write(output, message).with_context(|| {
            format!(
                "Unable to write to target text file: {}",
                output.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The message has been saved: {}",
            output.to_string_lossy().green().bold()
        );
    }

    Ok(())
}
