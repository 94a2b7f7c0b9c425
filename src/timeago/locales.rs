//! timeago ライブラリがサポートするロケールコードのカタログ
//!
//! ロケールファイルのディレクトリを一度だけ走査して
//! `jquery.timeago.<code>.js` の `<code>` 部分を集めます。
//! 走査はプロセス起動時（リゾルバー構築時）の一回きりです。

use std::collections::HashSet;
use std::path::Path;

use crate::languages::LanguagesError;

/// ロケールファイル名の接頭辞
const LOCALE_FILE_PREFIX: &str = "jquery.timeago.";

/// ロケールファイル名の接尾辞
const LOCALE_FILE_SUFFIX: &str = ".js";

/// timeago がサポートするロケールコードの集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeagoLocales {
    /// サポートされるロケールコード
    codes: HashSet<String>,
}

impl TimeagoLocales {
    /// ロケールディレクトリを走査してカタログを作成する
    ///
    /// `jquery.timeago.<code>.js` 形式のファイル名から `<code>` を
    /// 抽出します。形式に合わないエントリは無視します。
    ///
    /// # Errors
    /// - ディレクトリが存在しない場合は [`LanguagesError::NotFound`]
    /// - その他の読み取りエラーは [`LanguagesError::Io`]
    pub fn scan(locales_dir: &Path) -> Result<Self, LanguagesError> {
        let entries = match std::fs::read_dir(locales_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LanguagesError::NotFound(locales_dir.to_path_buf()));
            }
            Err(e) => return Err(LanguagesError::Io(e)),
        };

        let mut codes = HashSet::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(code) = name
                .strip_prefix(LOCALE_FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(LOCALE_FILE_SUFFIX))
                && !code.is_empty()
            {
                codes.insert(code.to_string());
            }
        }

        tracing::debug!(count = codes.len(), dir = %locales_dir.display(), "Scanned timeago locales");
        Ok(Self { codes })
    }

    /// 既知のコード集合からカタログを作成する（テスト・ブリッジ用）
    #[must_use]
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { codes: codes.into_iter().map(Into::into).collect() }
    }

    /// `code` がサポートされているか
    #[must_use]
    pub fn supports(&self, code: &str) -> bool {
        !code.is_empty() && self.codes.contains(code)
    }

    /// サポートされるコード数
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// カタログが空か
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
