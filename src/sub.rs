//! サブコマンドの定義

use std::collections::BTreeMap;
use std::error::Error;

use clap::{App, ArgMatches};
use log::error;

use crate::config::Config;

mod check;
mod info;
mod set;
mod show;

/// サブコマンドの共通インターフェース
pub trait SubCmd {
    /// サブコマンド名を返す。
    fn name(&self) -> &'static str;
    /// コマンドライン引数の定義を返す。
    fn command_args(&self) -> App<'static, 'static>;
    /// サブコマンドを実行し、終了コードと共にプロセスを終了する。
    fn exec(&self, matches: &ArgMatches, config: Config) -> !;
}

/// 全サブコマンドを登録した[`SubCommandSet`](struct.SubCommandSet.html)を返す。
pub fn sub_commands() -> SubCommandSet {
    let mut subs = SubCommandSet::new();

    subs.append(check::new());
    subs.append(info::new());
    subs.append(set::new());
    subs.append(show::new());

    subs
}

/// 登録されたサブコマンドの集合
pub struct SubCommandSet {
    table: BTreeMap<String, Box<dyn SubCmd>>,
}

impl<'a> SubCommandSet {
    fn new() -> SubCommandSet {
        SubCommandSet {
            table: BTreeMap::new(),
        }
    }

    /// 各サブコマンドのコマンドライン引数定義のイテレータを返す。
    pub fn arg_defs(&'a self) -> impl Iterator<Item = App<'a, 'a>> {
        self.table.iter().map(|(_, c)| c.command_args())
    }

    /// 指定された名前のサブコマンドを実行する。
    ///
    /// 該当するサブコマンドが存在する場合、実行後にプロセスを終了するため戻らない。
    pub fn execute(&self, name: &str, matches: &ArgMatches, config: Config) {
        if let Some(cmd) = self.table.get(name) {
            cmd.exec(matches, config);
        }
    }

    fn append(&mut self, subcmd: Box<dyn SubCmd>) {
        if let Some(exists) = self.table.insert(subcmd.name().to_owned(), subcmd) {
            panic!("registering duplicated subcommand: {}", exists.name());
        }
    }
}

// 失敗したサブコマンドのエラーを原因まで含めてログに出力する。
pub(crate) fn dump_error(e: impl Error) {
    error!("{}", e);
    dump_sources(e.source());
}

fn dump_sources(e: Option<&(dyn Error + 'static)>) {
    if let Some(e) = e {
        error!("    # {}", e);
        dump_sources(e.source());
    }
}
