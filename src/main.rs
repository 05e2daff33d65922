use std::path::PathBuf;

use clap::{command, error::ErrorKind, Arg, ArgAction, Command};
use context::Context;
use converter::convert;
use log::debug;

mod assembler;
mod changelog;
mod context;
mod converter;
mod note;
mod store;

fn cli() -> Command {
    command!().args(&[
        Arg::new("changelog")
            .help("ChangeLog file to convert")
            .value_name("CHANGELOG")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf)),
        Arg::new("out_dir")
            .help("Directory in which ChangeLogMemo.qvnotebook is created")
            .short('o')
            .long("out-dir")
            .value_name("DIR")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("."),
        Arg::new("utc")
            .help("Anchor ChangeLog dates in UTC instead of the local timezone")
            .long("utc")
            .action(ArgAction::SetTrue),
    ])
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // usage errors exit with 1, before anything is read or written
            e.print().ok();
            std::process::exit(1);
        }
    };

    let ctx = Context::from_matches(&matches)?;
    debug!("{ctx:?}");
    convert(&ctx)?;

    Ok(())
}
