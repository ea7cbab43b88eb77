use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenbanError {
    #[error("`mark` must be a 1-length string: {0:?}")]
    InvalidMark(String),

    // 数えていない (またはリセット済みの) 名前の表示を要求された
    #[error("No counter entry about {name:?}")]
    NoEntry { name: String },

    #[error("No displaytext function about {name:?}")]
    NoDisplayer { name: String },

    #[error("Failed to build renban pattern: {0}")]
    Pattern(#[from] regex::Error),
}
