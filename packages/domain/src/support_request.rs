//! # サポート依頼
//!
//! ポータルのフォームから送信されるサポート依頼を表す。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`SupportRequest`] | サポート依頼 | 1 回のフォーム送信に対応。永続化しない |
//! | [`Urgency`] | 緊急度 | Low / Medium / High の 3 段階 |
//!
//! ## 設計方針
//!
//! - **緊急度の未指定は Medium**: フォームにフィールドが無い、または空の場合
//! - **不正な緊急度は拒否**: 3 段階以外の値は [`SupportRequestError::InvalidUrgency`]
//! - **サービス名は自由入力を許容**: [`SERVICE_CATALOG`] はフォームの選択肢にすぎない

use thiserror::Error;

/// フォームに表示するサービス一覧
pub const SERVICE_CATALOG: &[&str] = &[
    "PC Repairs & Upgrades",
    "Smart Home Setup",
    "Home Wi-Fi Solutions",
    "Home Cybersecurity",
    "Remote Support",
    "Software Licensing",
    "Business IT Support",
    "Other",
];

/// サポート依頼のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupportRequestError {
    /// 緊急度が Low / Medium / High のいずれでもない
    #[error("Invalid urgency \"{0}\". Please choose Low, Medium or High.")]
    InvalidUrgency(String),
}

/// 緊急度
///
/// 件名の先頭（`[High] ...`）とメール本文に表示される。
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    /// フォーム値から緊急度を決定する
    ///
    /// 未指定（`None`）または空白のみの場合は [`Urgency::Medium`]。
    pub fn from_form(value: Option<&str>) -> Result<Self, SupportRequestError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(v) => v
                .parse()
                .map_err(|_| SupportRequestError::InvalidUrgency(v.to_string())),
        }
    }
}

/// サポート依頼
///
/// HTTP リクエスト 1 件ごとに生成され、メール送信後に破棄される。
/// 文字列フィールドは未エスケープの生の入力値を保持する。
/// HTML エスケープはメール生成時にテンプレート側で行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportRequest {
    pub name:    String,
    pub email:   String,
    pub phone:   String,
    /// [`SERVICE_CATALOG`] のいずれか、または自由入力
    pub service: String,
    pub urgency: Urgency,
    pub summary: String,
}

impl SupportRequest {
    /// 返信先アドレス
    ///
    /// 依頼者のメールアドレスが空でなければそれを返す。
    pub fn reply_to(&self) -> Option<&str> {
        let email = self.email.trim();
        (!email.is_empty()).then_some(email)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Low", Urgency::Low)]
    #[case("Medium", Urgency::Medium)]
    #[case("High", Urgency::High)]
    #[case("high", Urgency::High)]
    #[case(" LOW ", Urgency::Low)]
    fn from_formが3段階の値を受け付ける(#[case] input: &str, #[case] expected: Urgency) {
        assert_eq!(Urgency::from_form(Some(input)), Ok(expected));
    }

    #[test]
    fn from_formで未指定の場合はmediumになる() {
        assert_eq!(Urgency::from_form(None), Ok(Urgency::Medium));
        assert_eq!(Urgency::from_form(Some("")), Ok(Urgency::Medium));
        assert_eq!(Urgency::from_form(Some("   ")), Ok(Urgency::Medium));
    }

    #[rstest]
    #[case("Critical")]
    #[case("<script>")]
    #[case("2")]
    fn from_formで不正な値を拒否する(#[case] input: &str) {
        assert_eq!(
            Urgency::from_form(Some(input)),
            Err(SupportRequestError::InvalidUrgency(input.to_string()))
        );
    }

    #[test]
    fn urgencyの表示名がフォーム値と一致する() {
        assert_eq!(Urgency::Low.to_string(), "Low");
        assert_eq!(Urgency::Medium.to_string(), "Medium");
        assert_eq!(Urgency::High.to_string(), "High");
    }

    fn make_request(email: &str) -> SupportRequest {
        SupportRequest {
            name:    "Jane Citizen".to_string(),
            email:   email.to_string(),
            phone:   "0400 000 000".to_string(),
            service: "Remote Support".to_string(),
            urgency: Urgency::High,
            summary: "Laptop will not boot".to_string(),
        }
    }

    #[test]
    fn reply_toはメールアドレスがある場合に返る() {
        let request = make_request(" jane@example.com ");
        assert_eq!(request.reply_to(), Some("jane@example.com"));
    }

    #[test]
    fn reply_toはメールアドレスが空の場合にnoneになる() {
        assert_eq!(make_request("").reply_to(), None);
        assert_eq!(make_request("  ").reply_to(), None);
    }

    #[test]
    fn サービス一覧の最後はother() {
        assert_eq!(SERVICE_CATALOG.last(), Some(&"Other"));
    }
}
