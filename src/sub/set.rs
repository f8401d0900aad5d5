use std::process::exit;

use clap::{App, Arg, ArgMatches, SubCommand};
use thiserror::Error;

use super::{dump_error, SubCmd};

use crate::config::Config;
use crate::core::declaration::{self, Declaration};
use crate::core::sync::{self, Synchronizer, DEFAULT_DECLARATION, DEFAULT_MARKER_FILE};
use crate::core::version::{self, Version};

pub fn new() -> Box<dyn SubCmd> {
    Box::new(Set::new())
}

pub struct Set();

impl Set {
    pub fn new() -> Set {
        Set()
    }

    fn wrapped_exec(&self, matches: &ArgMatches, mut config: Config) -> Result<()> {
        // バージョンの検証はファイル操作より先に行う。
        let version: Version = matches.value_of("version").unwrap().parse()?;

        if let Some(path) = matches.value_of("file") {
            config.set_target_file(path);
        }
        if let Some(path) = matches.value_of("marker") {
            config.set_marker_file(path);
        }
        if let Some(name) = matches.value_of("declaration") {
            config.set_declaration(name);
        }

        let target = config.target_file().ok_or(Error::NoValue("target_file"))?;
        let marker = config
            .marker_file()
            .unwrap_or_else(|| DEFAULT_MARKER_FILE.as_ref());
        let declaration = Declaration::new(config.declaration().unwrap_or(DEFAULT_DECLARATION))?;

        let sync = Synchronizer::new(target, marker, declaration);
        let report = sync.run(&version)?;

        if let Some(previous) = report.previous() {
            println!("{} -> {}", previous, version);
        } else {
            println!("{}", version);
        }

        Ok(())
    }
}

impl SubCmd for Set {
    fn name(&self) -> &'static str {
        "set"
    }

    fn command_args(&self) -> App<'static, 'static> {
        SubCommand::with_name(self.name())
            .about("set a new version to the target file and the marker file")
            .arg(
                Arg::with_name("version")
                    .required(true)
                    .help("new version string"),
            )
            .arg(
                Arg::with_name("file")
                    .short("f")
                    .long("file")
                    .takes_value(true)
                    .help("target file holding the version declaration"),
            )
            .arg(
                Arg::with_name("marker")
                    .short("m")
                    .long("marker")
                    .takes_value(true)
                    .help("marker file passed to later pipeline steps"),
            )
            .arg(
                Arg::with_name("declaration")
                    .short("d")
                    .long("declaration")
                    .takes_value(true)
                    .help("declaration name to rewrite"),
            )
    }

    fn exec(&self, matches: &ArgMatches, config: Config) -> ! {
        match self.wrapped_exec(matches, config) {
            Ok(()) => exit(0),
            Err(e) => {
                if cfg!(debug_assertions) {
                    eprintln!("{:#?}", e);
                }
                dump_error(e);
                exit(1)
            }
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no config value: {0}")]
    NoValue(&'static str),

    #[error("invalid version: {0}")]
    Version(#[from] version::Error),

    #[error("invalid declaration: {0}")]
    Declaration(#[from] declaration::Error),

    #[error("version sync error: {0}")]
    Sync(#[from] sync::Error),
}
