//! 言語アセットのデータモデルとエラー型
//!
//! ディスク上の JSON（`metadata.json` / `language.json` / 名前空間
//! ファイル）に対応する型と、解決処理全体で共有するエラー分類です。

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::hooks::TransformError;

/// Flat key/value mapping for one language + one namespace.
pub type TranslationMap = HashMap<String, String>;

/// Defines errors that may occur while resolving language assets
#[derive(Error, Debug)]
pub enum LanguagesError {
    /// `language`/`namespace` input escaped the sandboxed asset root
    #[error("invalid language path: {language}/{namespace}")]
    InvalidPath {
        /// Offending language code input
        language: String,
        /// Offending namespace input
        namespace: String,
    },
    /// Asset file does not exist
    #[error("language asset not found: {0}")]
    NotFound(PathBuf),
    /// Error when failing to read an asset file (anything but absence)
    #[error("failed to read language asset: {0}")]
    Io(#[from] std::io::Error),
    /// Error when failing to parse an asset file as JSON
    #[error("failed to parse language asset: {0}")]
    Parse(#[from] serde_json::Error),
    /// A registered translation transform failed
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Descriptor for one installed language (`language.json`).
///
/// Fields default to empty strings on deserialization so that a structurally
/// valid file with missing fields yields an invalid descriptor to be filtered
/// out, rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageDescriptor {
    /// Language code (e.g., "en-GB")
    pub code: String,
    /// Human-readable display name
    pub name: String,
    /// Text direction ("ltr" or "rtl")
    pub dir: String,
}

impl LanguageDescriptor {
    /// A descriptor counts only when all three fields are present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty() && !self.name.is_empty() && !self.dir.is_empty()
    }
}

/// Shape of the asset root's `metadata.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LanguageMetadata {
    /// Codes of all installed languages, in build order
    pub languages: Vec<String>,
}

/// Reads an asset file, canonicalizing absence into [`LanguagesError::NotFound`].
///
/// Every "missing file is fine" decision in this crate matches on that variant
/// exactly; any other I/O failure stays [`LanguagesError::Io`].
pub(super) async fn read_asset_file(path: &Path) -> Result<String, LanguagesError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(LanguagesError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(LanguagesError::Io(e)),
    }
}
