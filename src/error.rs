use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ユーザーIDが設定されていません。`samurai config --set-user USER_ID` で設定するか SAMURAI_USER_ID を指定してください")]
    MissingUserId,

    #[error("ログインに失敗しました: {0}")]
    Login(String),

    #[error("{0}")]
    Remote(String),

    #[error("入力エラー: {0}")]
    Input(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    Http(String),

    #[error(transparent)]
    Core(#[from] samurai_admin_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for AdminError {
    fn from(e: dialoguer::Error) -> Self {
        AdminError::Input(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
