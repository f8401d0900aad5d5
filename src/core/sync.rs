//! バージョン宣言行とマーカーファイルの同期処理

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::core::declaration::{Declaration, Rewrite};
use crate::core::version::Version;

/// マーカーファイルの既定のファイル名
pub const DEFAULT_MARKER_FILE: &str = "VERSION";

/// 書き換え対象の既定の宣言名
pub const DEFAULT_DECLARATION: &str = "__version__";

/// ターゲットファイルとマーカーファイルへバージョンを同期する型。
///
/// ターゲットファイルは宣言行のみを書き換え、他の内容は変更しない。
/// マーカーファイルは後続のパイプラインステップへバージョンを引き継ぐため、
/// 内容全体をバージョン文字列で上書きする。
#[derive(Debug)]
pub struct Synchronizer {
    target_file: PathBuf,
    marker_file: PathBuf,
    declaration: Declaration,
}

impl Synchronizer {
    /// `Synchronizer`を生成する。
    pub fn new<P, Q>(target_file: P, marker_file: Q, declaration: Declaration) -> Synchronizer
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Synchronizer {
            target_file: target_file.as_ref().to_owned(),
            marker_file: marker_file.as_ref().to_owned(),
            declaration,
        }
    }

    /// ターゲットファイルの宣言行とマーカーファイルを`version`で書き換える。
    ///
    /// 宣言行が存在しない場合、ターゲットファイルは変更せず、
    /// マーカーファイルのみ書き込む。
    /// マーカーファイルは改行を付けずバージョン文字列のみを書き込む。
    ///
    /// # Failures
    ///
    /// ファイルの読み書きに失敗した場合、[`Error::IO`](enum.Error.html#variant.IO)を返す。
    /// ターゲットファイルの処理に失敗した場合、マーカーファイルへの書き込みは行わない。
    // TODO: マーカー書き込みに失敗した場合にターゲットファイルを巻き戻す手段を検討する。
    pub fn run(&self, version: &Version) -> Result<Report> {
        let content = fs::read_to_string(&self.target_file)
            .map_err(|e| Error::io("reading target file", &self.target_file, e))?;

        let previous = match self.declaration.rewrite(&content, version.as_str()) {
            Rewrite::Replaced { content, previous } => {
                fs::write(&self.target_file, content)
                    .map_err(|e| Error::io("writing target file", &self.target_file, e))?;
                info!(
                    "replaced {} = \"{}\" -> \"{}\" in {:?}",
                    self.declaration.name(),
                    previous,
                    version,
                    self.target_file
                );
                Some(previous)
            }
            Rewrite::NotFound => {
                warn!(
                    "no declaration line {} in {:?}, target left unchanged",
                    self.declaration.name(),
                    self.target_file
                );
                None
            }
        };

        fs::write(&self.marker_file, version.as_str())
            .map_err(|e| Error::io("writing marker file", &self.marker_file, e))?;
        info!("wrote marker file {:?}", self.marker_file);

        Ok(Report { previous })
    }

    /// ターゲットファイルの宣言行から現在のバージョンを読み出す。
    ///
    /// # Failures
    ///
    /// ファイルの読み込みに失敗した場合、[`Error::IO`](enum.Error.html#variant.IO)を返す。
    /// 宣言行が存在しない場合、[`Error::MissingDeclaration`](enum.Error.html#variant.MissingDeclaration)を返す。
    pub fn current(&self) -> Result<String> {
        let content = fs::read_to_string(&self.target_file)
            .map_err(|e| Error::io("reading target file", &self.target_file, e))?;

        self.declaration
            .find(&content)
            .map(|v| v.to_owned())
            .ok_or_else(|| Error::MissingDeclaration {
                name: self.declaration.name().to_owned(),
                path: self.target_file.clone(),
            })
    }

    /// マーカーファイルの内容を読み出す。
    ///
    /// # Failures
    ///
    /// ファイルの読み込みに失敗した場合、[`Error::IO`](enum.Error.html#variant.IO)を返す。
    pub fn marker(&self) -> Result<String> {
        fs::read_to_string(&self.marker_file)
            .map_err(|e| Error::io("reading marker file", &self.marker_file, e))
    }
}

/// 同期処理の実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    previous: Option<String>,
}

impl Report {
    /// 置換前に宣言されていた値を返す。
    ///
    /// 宣言行が存在しなかった場合`None`を返す。
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}

/// `Result`の本モジュール用エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 同期処理のエラー
#[derive(Debug, Error)]
pub enum Error {
    /// ファイル入出力の失敗
    #[error("failed {op} {path:?}: {source}")]
    IO {
        /// 失敗した操作
        op: &'static str,
        /// 操作対象のパス
        path: PathBuf,
        /// 元となった入出力エラー
        source: io::Error,
    },

    /// 宣言行が存在しない
    #[error("declaration {name} not found in {path:?}")]
    MissingDeclaration {
        /// 検索した宣言名
        name: String,
        /// 検索したファイルのパス
        path: PathBuf,
    },
}

impl Error {
    fn io(op: &'static str, path: &Path, source: io::Error) -> Error {
        Error::IO {
            op,
            path: path.to_owned(),
            source,
        }
    }
}

#[cfg(test)]
mod test;
