// SPDX-License-Identifier: MIT
//
// barista — top-bar theme engine CLI.
//
// This is the binary that wires together the crates:
//
//   barista-color → channel math primitives
//   barista-theme → seed config in, derived palette out
//   barista-style → rule composition, icons, artifact writing
//
// One invocation is one engine pass: read the seed configuration from a
// TOML file, derive the palette, write the stylesheet / icon / toolkit
// artifacts into the theme directory, and flip the reload marker the
// host watches. The settings layer re-invokes it on every change.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use barista_style::{Engine, FsSink};
use barista_theme::{DerivedPalette, ThemeConfig};

struct Options {
    config: PathBuf,
    theme_dir: PathBuf,
    gtk_config_dir: PathBuf,
    disable: bool,
    print_css: bool,
}

fn usage() -> ! {
    eprintln!(
        "usage: barista [--config <file>] [--theme-dir <dir>] [--gtk-dir <dir>] [--disable] [--print-css]

  --config <file>     seed configuration (TOML); default: barista.toml
  --theme-dir <dir>   where stylesheet.css and media/ land; default: .
  --gtk-dir <dir>     toolkit config root (holds gtk-3.0/, gtk-4.0/)
  --disable           restore external state and remove engine artifacts
  --print-css         print the composed stylesheet to stdout and exit"
    );
    process::exit(2);
}

fn parse_args() -> Options {
    let mut opts = Options {
        config: PathBuf::from("barista.toml"),
        theme_dir: PathBuf::from("."),
        gtk_config_dir: default_gtk_dir(),
        disable: false,
        print_css: false,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(v) => opts.config = PathBuf::from(v),
                None => usage(),
            },
            "--theme-dir" => match args.next() {
                Some(v) => opts.theme_dir = PathBuf::from(v),
                None => usage(),
            },
            "--gtk-dir" => match args.next() {
                Some(v) => opts.gtk_config_dir = PathBuf::from(v),
                None => usage(),
            },
            "--disable" => opts.disable = true,
            "--print-css" => opts.print_css = true,
            "--help" | "-h" => usage(),
            other => {
                eprintln!("barista: unknown argument `{other}`");
                usage();
            }
        }
    }
    opts
}

fn default_gtk_dir() -> PathBuf {
    env::var_os("XDG_CONFIG_HOME").map_or_else(
        || {
            env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(".config")
        },
        PathBuf::from,
    )
}

fn load_config(path: &Path) -> ThemeConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("barista: cannot read {}: {e}", path.display());
            process::exit(1);
        }
    };
    match toml::from_str(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("barista: invalid config {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args();
    let sink = FsSink::new(&opts.theme_dir, &opts.gtk_config_dir);
    let mut engine = Engine::new(sink);

    if opts.disable {
        let failures = engine.disable();
        if failures.is_empty() {
            tracing::info!("engine artifacts removed, external state restored");
        } else {
            process::exit(1);
        }
        return;
    }

    let cfg = load_config(&opts.config);

    if opts.print_css {
        let pal = DerivedPalette::derive(&cfg);
        print!("{}", barista_style::shell::compose(&cfg, &pal));
        return;
    }

    let report = engine.apply(&cfg);
    if report.skipped {
        tracing::info!("pass suppressed by config flags");
        return;
    }
    tracing::info!(
        stylesheet = report.stylesheet_written,
        icons = report.icons_written.len(),
        gtk = report.gtk_written,
        "theme applied"
    );
    if !report.is_clean() {
        // Failures were already logged per artifact; the next settings
        // change re-derives and re-writes, so this is not fatal.
        process::exit(1);
    }
}
