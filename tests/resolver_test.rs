//! 言語アセットリゾルバーの公開 API を通したテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use language_assets::{
    LanguageAssets,
    LanguagesError,
    TimeagoLocales,
    TranslationPayload,
    languages::TransformError,
    timeago::default_code_map,
};
use tempfile::TempDir;
use tokio_test::assert_ok;

/// ビルド済み言語アセットツリーと timeago ロケールディレクトリを作る
///
/// ```text
/// <tmp>/language/metadata.json
/// <tmp>/language/en-GB/{language,common,admin}.json
/// <tmp>/language/fa-IR/{language,common}.json   (rtl)
/// <tmp>/language/xx/common.json                 (ディスクリプタなし)
/// <tmp>/timeago-locales/jquery.timeago.{en,fa,pt-br}.js
/// ```
fn build_fixture(tmp: &Path) -> (PathBuf, PathBuf) {
    let languages = tmp.join("language");
    fs::create_dir(&languages).unwrap();
    fs::write(
        languages.join("metadata.json"),
        r#"{"languages": ["en-GB", "fa-IR", "xx"]}"#,
    )
    .unwrap();

    fs::create_dir(languages.join("en-GB")).unwrap();
    fs::write(
        languages.join("en-GB/language.json"),
        r#"{"code": "en-GB", "name": "English (UK)", "dir": "ltr"}"#,
    )
    .unwrap();
    fs::write(
        languages.join("en-GB/common.json"),
        r#"{"save": "Save", "cancel": "Cancel"}"#,
    )
    .unwrap();
    fs::write(languages.join("en-GB/admin.json"), r#"{"settings": "Settings"}"#).unwrap();

    fs::create_dir(languages.join("fa-IR")).unwrap();
    fs::write(
        languages.join("fa-IR/language.json"),
        r#"{"code": "fa-IR", "name": "فارسی", "dir": "rtl"}"#,
    )
    .unwrap();
    fs::write(languages.join("fa-IR/common.json"), r#"{"save": "ذخیره"}"#).unwrap();

    fs::create_dir(languages.join("xx")).unwrap();
    fs::write(languages.join("xx/common.json"), r#"{"save": "??"}"#).unwrap();

    let timeago = tmp.join("timeago-locales");
    fs::create_dir(&timeago).unwrap();
    for name in ["jquery.timeago.en.js", "jquery.timeago.fa.js", "jquery.timeago.pt-br.js"] {
        fs::write(timeago.join(name), "").unwrap();
    }

    (languages, timeago)
}

fn build_resolver(languages: &Path, timeago: &Path) -> LanguageAssets {
    LanguageAssets::new(languages)
        .with_timeago(TimeagoLocales::scan(timeago).unwrap(), default_code_map())
}

#[tokio::test]
async fn get_roundtrips_namespace_content() {
    let tmp = TempDir::new().unwrap();
    let (languages, timeago) = build_fixture(tmp.path());
    let assets = build_resolver(&languages, &timeago);

    let common = tokio_test::assert_ok!(assets.get("en-GB", "common").await);
    assert_eq!(common.get("save").map(String::as_str), Some("Save"));
    assert_eq!(common.get("cancel").map(String::as_str), Some("Cancel"));

    let admin = assets.get("en-GB", "admin").await.unwrap();
    assert_eq!(admin.get("settings").map(String::as_str), Some("Settings"));

    let rtl = assets.get("fa-IR", "common").await.unwrap();
    assert_eq!(rtl.get("save").map(String::as_str), Some("ذخیره"));
}

#[tokio::test]
async fn transforms_run_in_registration_order() {
    let tmp = TempDir::new().unwrap();
    let (languages, timeago) = build_fixture(tmp.path());
    let assets = build_resolver(&languages, &timeago)
        .with_transform(|payload: &mut TranslationPayload| -> Result<(), TransformError> {
            payload.data.insert("brand".to_string(), "first".to_string());
            Ok(())
        })
        .with_transform(|payload: &mut TranslationPayload| -> Result<(), TransformError> {
            // 後段のフックは前段の結果を上書きできる
            payload.data.insert("brand".to_string(), "second".to_string());
            Ok(())
        });

    let common = assets.get("en-GB", "common").await.unwrap();

    assert_eq!(common.get("brand").map(String::as_str), Some("second"));
    // ディスク上の内容も残っている
    assert_eq!(common.get("save").map(String::as_str), Some("Save"));
}

#[tokio::test]
async fn traversal_inputs_fail_before_any_read() {
    let tmp = TempDir::new().unwrap();
    let (languages, timeago) = build_fixture(tmp.path());
    // ルートの外にある読めてはいけないファイル
    fs::write(tmp.path().join("secrets.json"), r#"{"key": "value"}"#).unwrap();
    let assets = build_resolver(&languages, &timeago);

    for (language, namespace) in
        [("..", "secrets"), ("../..", "etc/passwd"), ("en-GB", "../../secrets")]
    {
        let result = assets.get(language, namespace).await;
        assert!(
            matches!(result, Err(LanguagesError::InvalidPath { .. })),
            "expected InvalidPath for {language}/{namespace}"
        );
    }
}

#[tokio::test]
async fn list_skips_languages_without_valid_descriptor() {
    let tmp = TempDir::new().unwrap();
    let (languages, timeago) = build_fixture(tmp.path());
    let assets = build_resolver(&languages, &timeago);

    let descriptors = assets.list().await.unwrap();

    // xx にはディスクリプタがないので除外される
    let codes: Vec<&str> = descriptors.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["en-GB", "fa-IR"]);
    assert_eq!(descriptors[1].dir, "rtl");
}

#[tokio::test]
async fn codes_are_served_from_cache_after_first_read() {
    let tmp = TempDir::new().unwrap();
    let (languages, timeago) = build_fixture(tmp.path());
    let assets = build_resolver(&languages, &timeago);

    let first = assets.list_codes().await.unwrap();
    fs::remove_file(languages.join("metadata.json")).unwrap();
    let second = assets.list_codes().await.unwrap();
    assert_eq!(first, second);

    // 明示的な無効化で初めて再読される
    assets.invalidate().await;
    assert!(assets.list_codes().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_metadata_means_nothing_installed() {
    let tmp = TempDir::new().unwrap();
    let assets = LanguageAssets::new(tmp.path().join("language"));

    assert!(assets.list_codes().await.unwrap().is_empty());
    assert!(assets.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn user_timeago_code_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let (languages, timeago) = build_fixture(tmp.path());
    let assets = build_resolver(&languages, &timeago);

    // インストール済み (en-GB) かつサポート済み (en)
    assert_eq!(assets.user_timeago_code("en-GB").await.unwrap(), "en");
    // インストール済み (fa-IR) かつサポート済み (fa)
    assert_eq!(assets.user_timeago_code("fa-IR").await.unwrap(), "fa");
    // pt-BR は timeago 側にはあるがインストールされていない
    assert_eq!(assets.user_timeago_code("pt-BR").await.unwrap(), "");
    // xx はインストール済みだが timeago 側にない
    assert_eq!(assets.user_timeago_code("xx").await.unwrap(), "");
}
