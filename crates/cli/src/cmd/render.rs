use crate::RenderArgs;
use noticeblocks_core::config::types::ResolvedConfig;
use noticeblocks_core::{RenderOptions, globals_from_pairs, render_file, render_source};
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info};

pub fn run(cfg: &ResolvedConfig, args: &RenderArgs) {
    let mut vars = cfg.globals.clone();
    // Command-line values override config globals.
    vars.extend(args.vars.iter().cloned());
    let globals = globals_from_pairs(vars);

    let options = RenderOptions { markdown: args.markdown || cfg.render.markdown };
    debug!(markdown = options.markdown, "rendering");

    let result = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => render_file(path, &globals, &options),
        _ => {
            let mut source = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut source) {
                fail(&format!("failed to read stdin: {e}"));
            }
            render_source(&source, &globals, &options)
        }
    };

    let rendered = match result {
        Ok(s) => s,
        Err(e) => fail(&e.to_string()),
    };

    match args.output {
        Some(ref out) => {
            if let Err(e) = fs::write(out, &rendered) {
                fail(&format!("failed to write {}: {e}", out.display()));
            }
            info!(output = %out.display(), "rendered template");
            println!("OK   nblk render");
            println!("output: {}", out.display());
        }
        None => print!("{rendered}"),
    }
}

fn fail(msg: &str) -> ! {
    println!("FAIL nblk render");
    println!("{msg}");
    std::process::exit(1);
}
