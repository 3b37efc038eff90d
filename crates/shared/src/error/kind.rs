//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by all bounded contexts.

use serde::Serialize;

/// エラー種別の列挙体
///
/// 認証・ストレージ・設定にまたがる障害をアプリケーション共通の分類で表します。
/// 表示層はこの分類をもとにユーザーへの見せ方（再入力の促し・待機表示・
/// ブロッキング表示）を決定します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.as_str(), "Not Found");
/// assert!(!kind.is_system_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値の検証に失敗
    ValidationFailed,
    /// 認証に失敗（資格情報不正・未ログインなど）
    AuthenticationFailed,
    /// アクセス権限なし
    PermissionDenied,
    /// リソースが見つからない
    NotFound,
    /// 現在の状態と競合（メールアドレスの重複登録など）
    Conflict,
    /// 必須設定の不足・不正（起動時に検出）
    ConfigurationInvalid,
    /// ストレージが利用できない（接続断・過負荷など）
    StorageUnavailable,
    /// 内部エラー
    InternalError,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::ValidationFailed.as_str(), "Validation Failed");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "Validation Failed",
            ErrorKind::AuthenticationFailed => "Authentication Failed",
            ErrorKind::PermissionDenied => "Permission Denied",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::ConfigurationInvalid => "Configuration Invalid",
            ErrorKind::StorageUnavailable => "Storage Unavailable",
            ErrorKind::InternalError => "Internal Error",
        }
    }

    /// システム側の障害かどうかを判定
    ///
    /// 設定不備・ストレージ障害・内部エラーは `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_system_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::ConfigurationInvalid
                | ErrorKind::StorageUnavailable
                | ErrorKind::InternalError
        )
    }

    /// 利用者の操作に起因するエラーかどうかを判定
    ///
    /// 再入力・再操作で回復可能なエラーは `true` を返します。
    #[inline]
    pub const fn is_user_error(&self) -> bool {
        !self.is_system_error()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
