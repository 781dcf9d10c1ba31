use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ViewModelError {
    Simple(String),
    StrumParsing(strum::ParseError),
    MpscSend(String),
}

impl Error for ViewModelError {}

impl fmt::Display for ViewModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error_string = match self {
            ViewModelError::Simple(msg) => {
                format!("PendingTradesView-Error | Other - {}", msg)
            }
            ViewModelError::StrumParsing(err) => {
                format!("PendingTradesView-Error | StrumParseError - {}", err)
            }
            ViewModelError::MpscSend(msg) => {
                format!("PendingTradesView-Error | MpscSendError - {}", msg)
            }
        };
        write!(f, "{}", error_string)
    }
}

impl From<strum::ParseError> for ViewModelError {
    fn from(e: strum::ParseError) -> ViewModelError {
        ViewModelError::StrumParsing(e)
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for ViewModelError {
    fn from(e: tokio::sync::mpsc::error::SendError<T>) -> ViewModelError {
        ViewModelError::MpscSend(e.to_string())
    }
}
