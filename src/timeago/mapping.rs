//! アプリ言語コード → timeago ロケールコードの対応
//!
//! 対応表はこのコンポーネントの所有物ではなく差し替え可能な関数として
//! 注入されます。ここでは既定の固定対応表のみを提供します。

/// アプリ言語コードを timeago ロケールコードへ写す関数
pub type TimeagoCodeMap = Box<dyn Fn(&str) -> String + Send + Sync>;

/// 既定の対応表
///
/// 命名規約が食い違う少数のコードだけを写し、それ以外はそのまま
/// 通します（timeago 側に存在するかどうかの検証は呼び出し側の仕事）。
#[must_use]
pub fn default_code_map() -> TimeagoCodeMap {
    Box::new(|user_lang: &str| {
        match user_lang {
            "en-GB" | "en-US" => "en",
            "fa-IR" => "fa",
            "pt-BR" => "pt-br",
            "nb" => "no",
            other => other,
        }
        .to_string()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// 既定の対応表: 既知の食い違いは写され、それ以外は素通し
    #[rstest]
    #[case("en-GB", "en")]
    #[case("en-US", "en")]
    #[case("fa-IR", "fa")]
    #[case("pt-BR", "pt-br")]
    #[case("nb", "no")]
    #[case("ja", "ja")]
    #[case("zh-CN", "zh-CN")]
    fn default_map_known_pairs(#[case] user_lang: &str, #[case] expected: &str) {
        let map = default_code_map();

        assert_that!(map(user_lang), eq(expected));
    }
}
