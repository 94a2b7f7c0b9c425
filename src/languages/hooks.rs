//! 翻訳データ変換フック
//!
//! プラグイン機構の `filter:languages.get` に相当する差し替えポイント。
//! グローバルレジストリではなく、[`LanguageAssets`](super::LanguageAssets)
//! 構築時に注入された変換列として保持します。

use thiserror::Error;

use super::types::TranslationMap;

/// `get` が変換フックを通す際のフック名（プラグイン機構との橋渡し用）
pub const FILTER_LANGUAGES_GET: &str = "filter:languages.get";

/// Error raised by a translation transform; surfaced unchanged to the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("translation transform failed for '{language}/{namespace}': {message}")]
pub struct TransformError {
    /// Language code being loaded when the transform failed
    pub language: String,
    /// Namespace being loaded when the transform failed
    pub namespace: String,
    /// Transform-supplied failure description
    pub message: String,
}

impl TransformError {
    /// フック実装側が失敗を報告するためのコンストラクタ
    #[must_use]
    pub fn new(
        language: impl Into<String>,
        namespace: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { language: language.into(), namespace: namespace.into(), message: message.into() }
    }
}

/// 変換フックに渡されるエンベロープ
///
/// フックは `data` を自由に書き換えてよい。`language` / `namespace` は
/// 文脈情報であり、書き換えても読み込み対象は変わらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPayload {
    /// 読み込み中の言語コード
    pub language: String,
    /// 読み込み中の名前空間
    pub namespace: String,
    /// 翻訳データ（変換対象）
    pub data: TranslationMap,
}

/// 翻訳データの変換フック
///
/// 登録順に適用される。ゼロ個なら素通し。失敗はローダー自身の失敗として
/// 呼び出し元へ伝播する（黙殺しない）。
pub trait TranslationTransform: Send + Sync {
    /// ペイロードを変換する
    ///
    /// # Errors
    /// - 変換を続行できない場合は [`TransformError`]
    fn apply(&self, payload: &mut TranslationPayload) -> Result<(), TransformError>;
}

impl<F> TranslationTransform for F
where
    F: Fn(&mut TranslationPayload) -> Result<(), TransformError> + Send + Sync,
{
    fn apply(&self, payload: &mut TranslationPayload) -> Result<(), TransformError> {
        self(payload)
    }
}
