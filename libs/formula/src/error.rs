use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("element name can not start with lowercase letter")]
    LowerCaseLetterStart,

    #[error("element quantity can not be below \"1\"")]
    WrongElementQuantity,

    #[error("element quantity can not be placed before element")]
    WrongElementQuantityPlacement,

    #[error("numeric overflow")]
    Overflow,
}
