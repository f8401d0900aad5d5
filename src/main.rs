use std::io::stderr;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{crate_name, App, Arg};

use versync::config;
use versync::smalllog;
use versync::sub::{sub_commands, SubCommandSet};
use versync::version::version;

fn main() {
    smalllog::init();

    if let Err(e) = w_main() {
        eprintln!("{}", e);
        if cfg!(debug_assertions) {
            eprintln!("{:#?}", e);
        }
        exit(1);
    }
}

fn w_main() -> Result<()> {
    let mut config = config::auto_load().context("loading config files")?;

    let subs = sub_commands();
    let ver = version(8);

    let matches = arg_defs(&subs, &ver).get_matches();

    if let Some(level) = matches.value_of("log_level") {
        config
            .set_log_level_str(level)
            .context("applying --log-level")?;
    }
    config.apply_log();

    if let (subcmd_name, Some(matches)) = matches.subcommand() {
        if subcmd_name != "" {
            subs.execute(subcmd_name, matches, config);
        }
    }

    let mut out = stderr();
    arg_defs(&subs, &ver).write_long_help(&mut out)?;
    eprintln!();
    exit(1);
}

fn arg_defs<'a>(subs: &'a SubCommandSet, version: &'a str) -> App<'a, 'a> {
    App::new(crate_name!())
        .version(version)
        .about("Synchronize a release version into a source file and a marker file")
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log-level")
                .takes_value(true)
                .help("log level (off|error|warn|info|debug|trace)"),
        )
        .subcommands(subs.arg_defs())
}
