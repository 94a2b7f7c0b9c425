//! (言語, 名前空間) ペアをアセットルート配下のパスへ解決する
//!
//! パストラバーサル対策として、解決結果がルート配下に収まることを
//! 字句的に検証します（ファイルシステムへのアクセスは一切行いません）。

use std::path::{
    Component,
    Path,
    PathBuf,
};

use super::types::LanguagesError;

/// `languages_dir/language/namespace.json` を組み立てて返す
///
/// # Errors
/// - `language` / `namespace` に `..` などが含まれ、正規化後のパスが
///   `languages_dir` の外に出る場合は [`LanguagesError::InvalidPath`]
pub fn resolve_namespace_path(
    languages_dir: &Path,
    language: &str,
    namespace: &str,
) -> Result<PathBuf, LanguagesError> {
    let candidate =
        lexical_normalize(&languages_dir.join(language).join(format!("{namespace}.json")));

    if candidate.starts_with(lexical_normalize(languages_dir)) {
        Ok(candidate)
    } else {
        tracing::warn!(%language, %namespace, "Rejected language path outside asset root");
        Err(LanguagesError::InvalidPath {
            language: language.to_string(),
            namespace: namespace.to_string(),
        })
    }
}

/// `..` / `.` を字句的に解決する（シンボリックリンクは関知しない）
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
}
