use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::ArgMatches;

/// Timezone in which ChangeLog dates are anchored before conversion to unix time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug)]
pub(crate) struct Context {
    pub changelog_path: PathBuf,
    pub out_dir: PathBuf,
    pub timezone: Timezone,
}

impl Context {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let changelog_path: &PathBuf = matches
            .get_one("changelog")
            .context("ChangeLog path is required")?;
        if !changelog_path.is_file() {
            bail!("{changelog_path:?} is not a file.");
        }
        let out_dir: &PathBuf = matches
            .get_one("out_dir")
            .context("output directory is required")?;
        if out_dir.exists() && !out_dir.is_dir() {
            bail!("if out_dir exists, it must be directory.");
        }
        let timezone = if matches.get_flag("utc") {
            Timezone::Utc
        } else {
            Timezone::Local
        };

        Ok(Self {
            changelog_path: changelog_path.to_owned(),
            out_dir: out_dir.to_owned(),
            timezone,
        })
    }
}
