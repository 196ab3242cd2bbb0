//! # ポータル設定
//!
//! 環境変数からポータルサーバーの設定を読み込む。
//! 起動時に 1 度だけ読み込み、以降は不変の値として各コンポーネントに渡す。

use std::{env, time::Duration};

use bluemoon_infra::{ResendConfig, notification::API_KEY_ENV};
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 数値であるべき環境変数が数値でない
    #[error("{name} は正の数値である必要があります（値: {value:?}）")]
    InvalidNumber { name: &'static str, value: String },

    /// `NOTIFICATION_BACKEND` が未知の値
    #[error("NOTIFICATION_BACKEND は resend または noop である必要があります（値: {0:?}）")]
    InvalidBackend(String),
}

/// メール送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBackend {
    /// Resend API 経由で送信（本番）
    Resend,
    /// 送信しない（ログ出力のみ）
    Noop,
}

impl NotificationBackend {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "resend" => Ok(Self::Resend),
            "noop" => Ok(Self::Noop),
            other => Err(ConfigError::InvalidBackend(other.to_string())),
        }
    }
}

/// ポータルサーバーの設定
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 通知機能の設定
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド
    pub backend:       NotificationBackend,
    /// Resend 送信設定（backend=resend の場合に使用）
    pub resend:        ResendConfig,
    /// サポート依頼の送信先
    pub support_inbox: String,
}

impl PortalConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// `from_env` はプロセスの環境変数を参照する。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let port = parse_number::<u16>("PORTAL_PORT", lookup("PORTAL_PORT"), 8080)?;
        let timeout_value = lookup("NOTIFICATION_TIMEOUT_SECS");
        let timeout_secs =
            parse_number::<u64>("NOTIFICATION_TIMEOUT_SECS", timeout_value.clone(), 10)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidNumber {
                name:  "NOTIFICATION_TIMEOUT_SECS",
                value: timeout_value.unwrap_or_default(),
            });
        }

        Ok(Self {
            host: var_or("PORTAL_HOST", "0.0.0.0"),
            port,
            notification: NotificationConfig {
                backend:       NotificationBackend::parse(&var_or(
                    "NOTIFICATION_BACKEND",
                    "resend",
                ))?,
                resend:        ResendConfig {
                    base_url:     var_or("RESEND_BASE_URL", "https://api.resend.com"),
                    api_key:      lookup(API_KEY_ENV)
                        .map(|key| key.trim().to_string())
                        .filter(|key| !key.is_empty()),
                    from_address: var_or(
                        "NOTIFICATION_FROM_ADDRESS",
                        "Blue Moon Portal <support@bluemoonit.com.au>",
                    ),
                    timeout:      Duration::from_secs(timeout_secs),
                },
                support_inbox: var_or("SUPPORT_INBOX_ADDRESS", "support@bluemoonit.com.au"),
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、from_lookup で検証する

    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<PortalConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PortalConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn 未設定の場合はデフォルト値になる() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.notification.backend, NotificationBackend::Resend);
        assert_eq!(config.notification.resend.base_url, "https://api.resend.com");
        assert_eq!(config.notification.resend.api_key, None);
        assert_eq!(
            config.notification.resend.timeout,
            Duration::from_secs(10)
        );
        assert_eq!(
            config.notification.support_inbox,
            "support@bluemoonit.com.au"
        );
    }

    #[test]
    fn 環境変数の値が反映される() {
        let config = load(&[
            ("PORTAL_HOST", "127.0.0.1"),
            ("PORTAL_PORT", "3000"),
            ("NOTIFICATION_BACKEND", "noop"),
            ("RESEND_API_KEY", "re_abc"),
            ("NOTIFICATION_TIMEOUT_SECS", "3"),
            ("SUPPORT_INBOX_ADDRESS", "help@example.com"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.notification.backend, NotificationBackend::Noop);
        assert_eq!(
            config.notification.resend.api_key.as_deref(),
            Some("re_abc")
        );
        assert_eq!(config.notification.resend.timeout, Duration::from_secs(3));
        assert_eq!(config.notification.support_inbox, "help@example.com");
    }

    #[test]
    fn 空のapiキーは未設定として扱う() {
        let config = load(&[("RESEND_API_KEY", "  ")]).unwrap();

        assert_eq!(config.notification.resend.api_key, None);
    }

    #[test]
    fn apiキーの前後の空白と改行は取り除かれる() {
        let config = load(&[("RESEND_API_KEY", "re_abc\n")]).unwrap();

        assert_eq!(
            config.notification.resend.api_key.as_deref(),
            Some("re_abc")
        );
    }

    #[test]
    fn タイムアウト0秒はエラーになる() {
        let result = load(&[("NOTIFICATION_TIMEOUT_SECS", "0")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidNumber {
                name:  "NOTIFICATION_TIMEOUT_SECS",
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn 不正なポート番号はエラーになる() {
        let result = load(&[("PORTAL_PORT", "eighty")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidNumber {
                name:  "PORTAL_PORT",
                value: "eighty".to_string(),
            }
        );
    }

    #[test]
    fn 不正なバックエンドはエラーになる() {
        let result = load(&[("NOTIFICATION_BACKEND", "smtp")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidBackend("smtp".to_string())
        );
    }

    #[test]
    fn debug出力にapiキーが含まれない() {
        let config = load(&[("RESEND_API_KEY", "re_secret_value")]).unwrap();

        assert!(!format!("{config:?}").contains("re_secret_value"));
    }
}
