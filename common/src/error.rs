//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 通信層の失敗（ネットワーク・非JSON応答など）。利用者には汎用メッセージのみ表示する
    #[error("通信エラー: {0}")]
    Transport(String),

    /// リモート側が `success:false` を返した
    #[error("{0}")]
    Application(String),

    /// 送信前の入力チェック
    #[error("{0}")]
    Validation(String),

    #[error("ストレージエラー: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 画面に出してよいメッセージ
    ///
    /// 通信エラーの詳細は診断ログ専用なので、ここでは汎用文言に置き換える
    pub fn user_message(&self) -> String {
        match self {
            Error::Transport(_) | Error::Json(_) => crate::api::COMMUNICATION_FAILED.to_string(),
            Error::Application(msg) | Error::Validation(msg) => msg.clone(),
            Error::Storage(_) => "セッションの保存に失敗しました".to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transport() {
        let error = Error::Transport("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("通信エラー"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_application_is_verbatim() {
        let error = Error::Application("トークンの有効期限が切れています".to_string());
        assert_eq!(format!("{}", error), "トークンの有効期限が切れています");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_user_message_hides_transport_detail() {
        let error = Error::Transport("dns lookup failed: api.example".to_string());
        let message = error.user_message();
        assert!(!message.contains("dns"));
        assert_eq!(message, crate::api::COMMUNICATION_FAILED);
    }

    #[test]
    fn test_user_message_validation() {
        let error = Error::Validation("商品管理番号を入力してください".to_string());
        assert_eq!(error.user_message(), "商品管理番号を入力してください");
    }
}
