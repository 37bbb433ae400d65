use std::fmt;

#[derive(Debug)]
pub enum AppError {
    GenericString(String),
    IoError(std::io::Error),
    P1Error(dsmr_p1::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::GenericString(err) => write!(f, "{}", err),
            AppError::IoError(err) => write!(f, "{}", err),
            AppError::P1Error(err) => write!(f, "{}", err),
        }
    }
}

impl From<String> for AppError {
    fn from(err: String) -> AppError {
        AppError::GenericString(err)
    }
}

impl<'a> From<&'a str> for AppError {
    fn from(err: &'a str) -> AppError {
        AppError::GenericString(err.to_owned())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> AppError {
        AppError::IoError(err)
    }
}

impl From<dsmr_p1::Error> for AppError {
    fn from(err: dsmr_p1::Error) -> AppError {
        match err {
            dsmr_p1::Error::Io(err) => AppError::IoError(err),
            err => AppError::P1Error(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
