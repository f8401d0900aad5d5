//! 同期対象となるバージョン文字列の表現

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// リリースツールから渡されるバージョン文字列
///
/// 空文字列でないこと以外の検証は行わない。
/// セマンティックバージョンの文法には従わなくてもよい。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(String);

impl Version {
    /// バージョン文字列から`Version`を生成する。
    ///
    /// # Failures
    ///
    /// `s`が空文字列の場合、[`Error::Empty`](enum.Error.html#variant.Empty)を返す。
    pub fn new(s: &str) -> Result<Version> {
        if s.is_empty() {
            return Err(Error::Empty);
        }

        Ok(Version(s.to_owned()))
    }

    /// バージョン文字列への参照を返す。
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Version> {
        Version::new(s)
    }
}

/// `Result`の本モジュール用エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// バージョン文字列の検証エラー
#[derive(Debug, Error)]
pub enum Error {
    /// バージョン文字列が空
    #[error("no version provided")]
    Empty,
}

#[cfg(test)]
mod test;
