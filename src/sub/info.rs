use std::process::exit;

use clap::{App, ArgMatches, SubCommand};

use super::SubCmd;

use crate::config::Config;
use crate::version::version;

pub fn new() -> Box<dyn SubCmd> {
    Box::new(Info::new())
}

pub struct Info();

impl Info {
    pub fn new() -> Info {
        Info()
    }
}

impl SubCmd for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn command_args(&self) -> App<'static, 'static> {
        SubCommand::with_name(self.name()).about("show tool version and effective config")
    }

    fn exec(&self, _matches: &ArgMatches, config: Config) -> ! {
        println!("Version:");
        println!("    {}", version(10));
        println!();

        println!("Config:");
        config.show();

        exit(0)
    }
}
