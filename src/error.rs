use std::fmt::{Debug, Display, Formatter};
use std::io;

pub type GreeterResult<T> = Result<T, GreeterError>;

#[derive(Debug)]
pub enum GreeterError {
    IO(io::Error),
    Config(String),
}

impl Display for GreeterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(e) => write!(f, "output error: {}", e),
            Self::Config(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GreeterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IO(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<io::Error> for GreeterError {
    fn from(err: io::Error) -> Self {
        Self::IO(err)
    }
}

impl From<toml::de::Error> for GreeterError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
