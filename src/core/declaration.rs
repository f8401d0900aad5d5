//! ターゲットファイル内のバージョン宣言行を扱う

use regex::{NoExpand, Regex};
use thiserror::Error;

/// バージョン宣言行のパターン
///
/// `name = "value"`または`name = 'value'`形式の行を表す。
/// パターンは行頭・行末にアンカーされ、値は閉じ引用符までの非貪欲マッチで取り出す。
#[derive(Debug)]
pub struct Declaration {
    name: String,
    pattern: Regex,
}

impl Declaration {
    /// 宣言名から`Declaration`を生成する。
    ///
    /// 宣言名に含まれる正規表現のメタ文字はエスケープされ、字句として扱われる。
    ///
    /// # Failures
    ///
    /// `name`が空文字列の場合、[`Error::EmptyName`](enum.Error.html#variant.EmptyName)を返す。
    pub fn new(name: &str) -> Result<Declaration> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let pattern = Regex::new(&format!(
            r#"(?m)^{}\s*=\s*(?:"(.*?)"|'(.*?)')$"#,
            regex::escape(name)
        ))
        .unwrap();

        Ok(Declaration {
            name: name.to_owned(),
            pattern,
        })
    }

    /// 宣言名を返す。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `content`中の最初の宣言行から値を取り出す。
    pub fn find<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(content)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
    }

    /// `content`中の最初の宣言行の値を`version`に置き換えた文字列を返す。
    ///
    /// 置換後の行は元の引用符の種類に関わらず二重引用符を使用する。
    /// `version`中の文字は置換テンプレートとして展開されない。
    ///
    /// 宣言行が存在しない場合、[`Rewrite::NotFound`](enum.Rewrite.html#variant.NotFound)を返す。
    pub fn rewrite(&self, content: &str, version: &str) -> Rewrite {
        let previous = match self.find(content) {
            Some(p) => p.to_owned(),
            None => return Rewrite::NotFound,
        };

        let line = format!("{} = \"{}\"", self.name, version);
        let replaced = self.pattern.replace(content, NoExpand(&line)).into_owned();

        Rewrite::Replaced {
            content: replaced,
            previous,
        }
    }
}

/// 宣言行の書き換え結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// 最初の宣言行を置き換えた
    Replaced {
        /// 置換後のファイル内容
        content: String,
        /// 置換前に宣言されていた値
        previous: String,
    },
    /// 宣言行が存在しなかった
    NotFound,
}

/// `Result`の本モジュール用エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 宣言パターンの生成エラー
#[derive(Debug, Error)]
pub enum Error {
    /// 宣言名が空
    #[error("declaration name is empty")]
    EmptyName,
}

#[cfg(test)]
mod test;
