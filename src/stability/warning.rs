#[cfg(test)]
#[path = "../tests/stability/warning_test.rs"]
mod tests;
//
use strum_macros::{Display, EnumIter};
///
/// Advisory signals attached to a complete [StabilityReport].
///
/// A warning never aborts the computation, the report it comes with
/// is fully populated.
///
/// [StabilityReport]: super::stability_report::StabilityReport
#[derive(Clone, PartialEq, Debug, Display, EnumIter)]
pub enum Warning {
    ///
    /// Derived displacement fell outside the cross-curve axis,
    /// KN values are taken at the nearest boundary row.
    #[strum(to_string = "displacement {requested} t is outside the cross curves, KN taken at {clamped_to} t")]
    DisplacementClamped { requested: f64, clamped_to: f64 },
    ///
    /// No sampled heel angle develops a positive righting arm.
    #[strum(to_string = "negative stability: the greatest righting arm is not positive")]
    NegativeStability,
    ///
    /// Metacentric height estimate is not positive.
    #[strum(to_string = "negative metacentric height estimate")]
    NegativeGm,
    ///
    /// KG outside the range typical for cargo vessels.
    #[strum(to_string = "KG={kg} m is outside the typical range of 0..20 m")]
    UnusualKg { kg: f64 },
}
