//! Body weight input validation.
//!
//! Both interfaces funnel raw weight input through here so the contract is
//! identical everywhere: non-numeric input and values outside (0, 300] are
//! rejected with a message suitable for a reprompt.

/// Lowest weight the interfaces offer (kg)
pub const MIN_WEIGHT_KG: f64 = 1.0;
/// Highest accepted weight (kg)
pub const MAX_WEIGHT_KG: f64 = 300.0;
/// Pre-filled weight in the form interface (kg)
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Spin increment in the form interface (kg)
pub const WEIGHT_STEP_KG: f64 = 0.5;

/// Why a weight input was rejected.
///
/// The Display strings double as the reprompt messages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeightError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Please enter a valid weight between 1 and 300 kg.")]
    OutOfRange,
}

/// Validate an already-numeric weight value
pub fn check_weight(weight: f64) -> std::result::Result<f64, WeightError> {
    // Written positively so NaN also lands in the error branch
    if weight > 0.0 && weight <= MAX_WEIGHT_KG {
        Ok(weight)
    } else {
        Err(WeightError::OutOfRange)
    }
}

/// Parse and validate a raw weight string
pub fn parse_weight(input: &str) -> std::result::Result<f64, WeightError> {
    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| WeightError::NotANumber)?;
    check_weight(weight)
}
