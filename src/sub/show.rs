use std::process::exit;

use clap::{App, Arg, ArgMatches, SubCommand};
use thiserror::Error;

use super::{dump_error, SubCmd};

use crate::config::Config;
use crate::core::declaration::{self, Declaration};
use crate::core::sync::{self, Synchronizer, DEFAULT_DECLARATION, DEFAULT_MARKER_FILE};

pub fn new() -> Box<dyn SubCmd> {
    Box::new(Show::new())
}

pub struct Show();

impl Show {
    pub fn new() -> Show {
        Show()
    }

    fn wrapped_exec(&self, matches: &ArgMatches, mut config: Config) -> Result<()> {
        if let Some(path) = matches.value_of("file") {
            config.set_target_file(path);
        }
        if let Some(name) = matches.value_of("declaration") {
            config.set_declaration(name);
        }

        let target = config.target_file().ok_or(Error::NoValue("target_file"))?;
        let declaration = Declaration::new(config.declaration().unwrap_or(DEFAULT_DECLARATION))?;

        let sync = Synchronizer::new(target, DEFAULT_MARKER_FILE, declaration);
        println!("{}", sync.current()?);

        Ok(())
    }
}

impl SubCmd for Show {
    fn name(&self) -> &'static str {
        "show"
    }

    fn command_args(&self) -> App<'static, 'static> {
        SubCommand::with_name(self.name())
            .about("show the version declared in the target file")
            .arg(
                Arg::with_name("file")
                    .short("f")
                    .long("file")
                    .takes_value(true)
                    .help("target file holding the version declaration"),
            )
            .arg(
                Arg::with_name("declaration")
                    .short("d")
                    .long("declaration")
                    .takes_value(true)
                    .help("declaration name to look up"),
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

    #[error("invalid declaration: {0}")]
    Declaration(#[from] declaration::Error),

    #[error("version sync error: {0}")]
    Sync(#[from] sync::Error),
}
