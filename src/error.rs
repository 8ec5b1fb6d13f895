///
/// Failures of the stability pipeline.
///
/// [Error::Data] is fatal: the reference tables are rejected at construction
/// and nothing can be computed over them.
/// [Error::OutOfRange] is recoverable: the caller aborts the single request
/// and surfaces the message, no partial series is produced.
pub enum Error {
    ///
    /// Malformed reference table, detected at construction.
    Data(String),
    ///
    /// Requested draft lies outside the hydrostatic table domain,
    /// extrapolation is not performed.
    OutOfRange(String),
}
//
//
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data(why) => write!(f, "Error::Data({:?})", why),
            Self::OutOfRange(why) => write!(f, "Error::OutOfRange({:?})", why),
        }
    }
}
//
//
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data(why) | Self::OutOfRange(why) => write!(f, "{}", why),
        }
    }
}
//
//
impl std::error::Error for Error {}
