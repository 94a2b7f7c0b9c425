//! timeago（相対時刻表記）ライブラリとの連携
//!
//! timeago 側のロケールカタログの走査と、アプリ言語コードから
//! timeago ロケールコードへの対応表を提供します。
mod locales;
mod mapping;

pub use locales::TimeagoLocales;
pub use mapping::{
    TimeagoCodeMap,
    default_code_map,
};
