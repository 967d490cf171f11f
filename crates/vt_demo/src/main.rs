//! A minimal CLI that feeds a byte stream through `vt_core::Controller`
//! and prints the resulting grid plus cursor/title metadata. Useful for
//! sanity-checking the engine against a captured session without a real
//! terminal renderer.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use vt_core::Controller;

#[derive(Parser, Debug)]
#[command(version, about = "Replay a byte stream through the vt_core engine", long_about = None)]
struct Args {
    /// File to replay; reads stdin if omitted.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    #[arg(long, default_value_t = 24)]
    rows: i32,

    #[arg(long, default_value_t = 80)]
    cols: i32,
}

fn read_input(path: &Option<PathBuf>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(p) => std::fs::read(p),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info").unwrap().start();

    let args = Args::parse();
    let bytes = match read_input(&args.path) {
        Ok(b) => b,
        Err(e) => {
            log::error!("failed to read input: {e}");
            std::process::exit(1);
        }
    };

    let mut controller = Controller::new(args.rows, args.cols);
    controller.write(String::from_utf8_lossy(&bytes).chars());

    println!("{}", controller.grid_to_string());
    println!("---");
    println!("cursor: ({}, {})", controller.cursor().x, controller.cursor().y);
    println!("title: {:?}", controller.title());
    println!("icon: {:?}", controller.icon_name());

    for req in controller.take_clipboard_requests() {
        log::info!("clipboard write requested: selector={} bytes={}", req.selector, req.data.len());
    }
}
