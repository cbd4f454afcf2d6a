use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Skew or distribution name rejected before sampling starts
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A page index escaped `[0, pages)`
    #[error("Page index {page} out of range for {pages} pages")]
    OutOfRange { page: u32, pages: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Malformed trace: {0}")]
    MalformedTrace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Easily performs a `return Err(Error::Kind(format!("...")))` for maximum laziness
macro_rules! error {
    ($kind:ident, $($args:tt)*) => {{
        return Err($crate::error::Error::$kind(format!($($args)*)));
    }}
}
pub(crate) use error;
