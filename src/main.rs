#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use slideshow::cli::Cli;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("slideshow", LevelFilter::Debug)
        .init();
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    if let Err(e) = slideshow::app::run(cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
