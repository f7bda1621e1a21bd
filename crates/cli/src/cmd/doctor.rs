use noticeblocks_core::config::loader::default_config_path;
use noticeblocks_core::config::types::ResolvedConfig;
use noticeblocks_core::{build_parser, version};
use tracing::debug;

pub fn run(rc: &ResolvedConfig) {
    if let Err(e) = build_parser() {
        println!("FAIL nblk doctor");
        println!("{e}");
        std::process::exit(1);
    }
    debug!("parser with notice blocks builds");

    println!("OK   nblk doctor");
    println!("version: {}", version());
    match rc.source {
        Some(ref p) => println!("path: {}", p.display()),
        None => println!("path: (defaults, no file at {})", default_config_path().display()),
    }
    println!("logging.level: {}", rc.logging.level);
    if let Some(ref file) = rc.logging.file {
        println!("logging.file: {}", file.display());
    }
    println!("render.markdown: {}", rc.render.markdown);
    println!("globals: {}", rc.globals.len());
}
