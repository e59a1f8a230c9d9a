use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Every way a conversion can be refused.
///
/// All of these are raised before any text is produced; none of them is
/// recoverable by retrying with the same input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The input could not be read as a number.
    #[error("Nur Zahlen (type({0})) können in Wörter konvertiert werden.")]
    NotANumber(String),

    /// An ordinal was requested for a value with a fractional part.
    #[error("Die Gleitkommazahl {0} kann nicht in eine Ordnungszahl konvertiert werden.")]
    FloatOrdinal(String),

    #[error("Die negative Zahl {0} kann nicht in eine Ordnungszahl konvertiert werden.")]
    NegativeOrdinal(BigInt),

    #[error("Die Zahl {value} muss kleiner als {limit} sein.")]
    TooLarge { value: BigInt, limit: BigUint },

    #[error("Eingabewert muss ein Datum sein: {0}")]
    NotADate(String),

    #[error("Währungscode \"{0}\" ist nicht implementiert.")]
    UnsupportedCurrency(String),

    #[error("Sprache \"{0}\" wird nicht unterstützt.")]
    UnsupportedLanguage(String),

    #[error("Unbekanntes Ausgabeformat \"{0}\".")]
    UnknownTarget(String),
}

pub type ConversionResult<T> = Result<T, ConversionError>;
