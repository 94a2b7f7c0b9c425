//! language-assets
//!
//! Web アプリケーションの i18n サブシステム向けの言語アセットリゾルバー。
//! ビルド済みの言語アセットツリー（言語コードごとのディレクトリ +
//! 名前空間ごとの翻訳 JSON）から翻訳データと言語メタデータを解決し、
//! timeago ロケールコードへのマッピングを行います。

pub mod languages;
pub mod timeago;

// 主要な型を再エクスポート
pub use languages::{
    LanguageAssets,
    LanguageDescriptor,
    LanguagesError,
    TranslationMap,
    TranslationPayload,
    TranslationTransform,
};
pub use timeago::TimeagoLocales;
