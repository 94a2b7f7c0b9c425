//! 言語アセットリゾルバー本体
//!
//! アセットルート（言語コードごとのディレクトリ + `metadata.json`）を
//! 読み取り、コード一覧・言語一覧・翻訳名前空間を解決します。
//! コード一覧と言語一覧はプロセス内でメモ化されます。

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use tokio::sync::RwLock;

use super::hooks::{
    FILTER_LANGUAGES_GET,
    TranslationPayload,
    TranslationTransform,
};
use super::path::resolve_namespace_path;
use super::types::{
    LanguageDescriptor,
    LanguageMetadata,
    LanguagesError,
    TranslationMap,
    read_asset_file,
};
use crate::timeago::{
    TimeagoCodeMap,
    TimeagoLocales,
};

/// アセットルート直下のインストール済みコード一覧ファイル
const METADATA_FILE: &str = "metadata.json";

/// 各言語ディレクトリ直下のディスクリプタファイル
const DESCRIPTOR_FILE: &str = "language.json";

/// timeago マッピングの構成（ロケールカタログ + コード対応関数）
struct TimeagoSupport {
    /// timeago ライブラリがサポートするロケールコード集合
    locales: TimeagoLocales,
    /// アプリ言語コード → timeago コードの対応関数
    code_map: TimeagoCodeMap,
}

/// 言語アセットリゾルバー
///
/// # キャッシュ
///
/// コード一覧とディスクリプタ一覧は初回成功時にメモ化されます。
/// 空の読み込み結果も「読み込み済み」としてキャッシュされます
/// （空 = 未読み込み、とは扱いません）。無効化は [`Self::invalidate`] で
/// 明示的に行います。
pub struct LanguageAssets {
    /// 言語アセットツリーのルート
    languages_dir: PathBuf,
    /// `get` 時に適用される変換フック（登録順）
    transforms: Vec<Box<dyn TranslationTransform>>,
    /// インストール済みコード一覧のキャッシュ（`None` = 未読み込み）
    code_cache: RwLock<Option<Vec<String>>>,
    /// 有効なディスクリプタ一覧のキャッシュ（`None` = 未読み込み）
    list_cache: RwLock<Option<Vec<LanguageDescriptor>>>,
    /// timeago マッピング構成（未構成なら常に空文字へフォールバック）
    timeago: Option<TimeagoSupport>,
}

impl fmt::Debug for LanguageAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageAssets")
            .field("languages_dir", &self.languages_dir)
            .field("transforms", &self.transforms.len())
            .field("timeago", &self.timeago.is_some())
            .finish_non_exhaustive()
    }
}

impl LanguageAssets {
    /// 新しいリゾルバーを作成
    ///
    /// `languages_dir` はビルド済み言語アセットツリーのルート。
    /// この時点ではファイルシステムに触れません。
    #[must_use]
    pub fn new(languages_dir: impl Into<PathBuf>) -> Self {
        Self {
            languages_dir: languages_dir.into(),
            transforms: Vec::new(),
            code_cache: RwLock::new(None),
            list_cache: RwLock::new(None),
            timeago: None,
        }
    }

    /// 変換フックを追加する（追加順に適用）
    #[must_use]
    pub fn with_transform(mut self, transform: impl TranslationTransform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// timeago マッピングを構成する
    ///
    /// 未構成の場合、[`Self::user_timeago_code`] は常に空文字を返します。
    #[must_use]
    pub fn with_timeago(mut self, locales: TimeagoLocales, code_map: TimeagoCodeMap) -> Self {
        self.timeago = Some(TimeagoSupport { locales, code_map });
        self
    }

    /// アセットルートを取得
    #[must_use]
    pub fn languages_dir(&self) -> &Path {
        &self.languages_dir
    }

    /// (言語, 名前空間) の翻訳データを読み込む
    ///
    /// 読み込んだデータは登録済みの変換フック
    /// （[`FILTER_LANGUAGES_GET`]）を順に通してから返します。
    ///
    /// # Errors
    /// - 入力がアセットルート外を指す場合は [`LanguagesError::InvalidPath`]
    ///   （ファイルシステムへのアクセスは行われない）
    /// - ファイルが存在しない場合は [`LanguagesError::NotFound`]
    /// - JSON が不正な場合は [`LanguagesError::Parse`]
    ///   （空データ扱いになるのは JSON の `null` のみ。`false` や `0`
    ///   などオブジェクトでも `null` でもない内容は Parse エラー）
    /// - 変換フックが失敗した場合は [`LanguagesError::Transform`]
    pub async fn get(
        &self,
        language: &str,
        namespace: &str,
    ) -> Result<TranslationMap, LanguagesError> {
        let path = resolve_namespace_path(&self.languages_dir, language, namespace)?;

        let content = read_asset_file(&path).await?;
        let parsed: Option<TranslationMap> = serde_json::from_str(&content)?;

        let mut payload = TranslationPayload {
            language: language.to_string(),
            namespace: namespace.to_string(),
            data: parsed.unwrap_or_default(),
        };
        tracing::debug!(
            hook = FILTER_LANGUAGES_GET,
            %language,
            %namespace,
            transforms = self.transforms.len(),
            "Applying translation transforms"
        );
        for transform in &self.transforms {
            transform.apply(&mut payload)?;
        }

        Ok(payload.data)
    }

    /// インストール済みの言語コード一覧を返す
    ///
    /// 初回成功時に結果をキャッシュし、以後は I/O なしで返します。
    ///
    /// # Errors
    /// - `metadata.json` の読み込みエラー（不在は除く。不在は
    ///   「アセット未ビルド」の正常系として空リストを返す）
    /// - JSON パースエラー
    pub async fn list_codes(&self) -> Result<Vec<String>, LanguagesError> {
        if let Some(codes) = self.code_cache.read().await.as_ref() {
            return Ok(codes.clone());
        }

        let metadata_path = self.languages_dir.join(METADATA_FILE);
        let codes = match read_asset_file(&metadata_path).await {
            Ok(content) => serde_json::from_str::<LanguageMetadata>(&content)?.languages,
            Err(LanguagesError::NotFound(_)) => {
                // アセットツリーが未ビルドの間はキャッシュせず、毎回確認する
                tracing::debug!(path = %metadata_path.display(), "Language metadata not built yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(count = codes.len(), "Loaded installed language codes");
        *self.code_cache.write().await = Some(codes.clone());
        Ok(codes)
    }

    /// インストール済み言語のディスクリプタ一覧を返す
    ///
    /// コードごとの `language.json` を並行に読み込み、不在・不完全な
    /// ものは除外します。順序はコード一覧の順序に従います。
    /// 初回成功時に結果をキャッシュします。
    ///
    /// # Errors
    /// - ディスクリプタの読み込みエラー（不在は除く。不在はその言語を
    ///   スキップする）
    /// - JSON パースエラー
    pub async fn list(&self) -> Result<Vec<LanguageDescriptor>, LanguagesError> {
        if let Some(descriptors) = self.list_cache.read().await.as_ref() {
            return Ok(descriptors.clone());
        }

        let codes = self.list_codes().await?;

        // 並行に読み、結果をすべて集めてから後処理する
        // （不在 → スキップ、それ以外の失敗 → 全体を失敗させる）
        let attempts = codes.iter().map(|code| {
            let descriptor_path = self.languages_dir.join(code).join(DESCRIPTOR_FILE);
            async move {
                match read_asset_file(&descriptor_path).await {
                    Ok(content) => {
                        let descriptor: LanguageDescriptor = serde_json::from_str(&content)?;
                        Ok(Some(descriptor))
                    }
                    Err(LanguagesError::NotFound(_)) => {
                        tracing::debug!(path = %descriptor_path.display(), "Skipping language without descriptor");
                        Ok(None)
                    }
                    Err(e) => Err(e),
                }
            }
        });
        let outcomes = futures::future::join_all(attempts).await;

        let mut descriptors = Vec::new();
        for outcome in outcomes {
            if let Some(descriptor) = outcome?
                && descriptor.is_valid()
            {
                descriptors.push(descriptor);
            }
        }

        tracing::debug!(count = descriptors.len(), "Loaded language descriptors");
        *self.list_cache.write().await = Some(descriptors.clone());
        Ok(descriptors)
    }

    /// 利用者の言語コードに対応する timeago ロケールコードを返す
    ///
    /// `user_lang` がインストール済みで、かつ対応コードが timeago 側で
    /// サポートされている場合のみマッピング結果を返します。どちらかを
    /// 満たさない場合は空文字（= デフォルト動作へのフォールバック）で、
    /// エラーにはなりません。
    ///
    /// # Errors
    /// - コード一覧の読み込みエラー（[`Self::list_codes`] に準ずる）
    pub async fn user_timeago_code(&self, user_lang: &str) -> Result<String, LanguagesError> {
        let Some(timeago) = &self.timeago else {
            return Ok(String::new());
        };

        let codes = self.list_codes().await?;
        let mapped = (timeago.code_map)(user_lang);

        if codes.iter().any(|code| code == user_lang) && timeago.locales.supports(&mapped) {
            Ok(mapped)
        } else {
            Ok(String::new())
        }
    }

    /// 両キャッシュを破棄する（次回呼び出しで再読み込み）
    pub async fn invalidate(&self) {
        tracing::debug!("Invalidating language asset caches");
        *self.code_cache.write().await = None;
        *self.list_cache.write().await = None;
    }
}
