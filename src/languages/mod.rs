//! 言語アセットの解決を行うモジュール
mod hooks;
mod path;
mod resolver;
mod types;

pub use hooks::{
    FILTER_LANGUAGES_GET,
    TransformError,
    TranslationPayload,
    TranslationTransform,
};
pub use path::resolve_namespace_path;
pub use resolver::LanguageAssets;
pub use types::{
    LanguageDescriptor,
    LanguageMetadata,
    LanguagesError,
    TranslationMap,
};
