use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

use bmp_decode::{
    cli::{Cli, USAGE},
    handler::handle_decode,
};

/// 程序的主入口点
///
/// 参数错误或文件读取失败时以 1 退出；任何完成的解码尝试 (包括内容异常) 都以 0 退出。
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 解析命令行参数，--help / --version 按 clap 的默认方式处理
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("argument error: {}", err);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match handle_decode(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
