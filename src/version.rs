//! ツール自身のバージョン表記を生成する補助関数群

/// コンパイル時の環境変数に設定されたGitリポジトリ情報から、[Semantic Versioning 2.0.0](https://semver.org/)準拠のバージョン表記を生成する。
///
/// 基本のバージョンは`CARGO_PKG_VERSION`から取得する。
/// 環境変数`GIT_HASH`が設定されている場合、先頭`hash_len`文字をビルドメタデータとして付加する。
pub fn version(hash_len: usize) -> String {
    let mut ver = env!("CARGO_PKG_VERSION").to_string();

    if let Some(hash) = option_env!("GIT_HASH") {
        let len = hash_len.min(hash.len());
        ver.push('+');
        ver.push_str(&hash[..len]);
    }

    ver
}
