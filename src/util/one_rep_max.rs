//! One-rep-max estimation (Epley formula).

#[cfg(test)]
#[path = "one_rep_max_test.rs"]
mod one_rep_max_test;

pub const INVALID_INPUT: &str = "Please provide valid numbers greater than zero.";

/// Estimated single-repetition maximum for `reps` repetitions at `weight`.
pub fn epley(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / 30.0)
}

/// Parse raw form inputs and estimate the one-rep max in kilograms.
///
/// # Errors
///
/// Returns [`INVALID_INPUT`] unless both inputs parse to finite numbers above zero.
pub fn estimate(weight: &str, reps: &str) -> Result<f64, &'static str> {
    let weight = parse_positive(weight).ok_or(INVALID_INPUT)?;
    let reps = parse_positive(reps).ok_or(INVALID_INPUT)?;
    Ok(epley(weight, reps))
}

/// Result line shown under the calculator.
pub fn describe(estimate_kg: f64) -> String {
    format!("Your estimated one rep max is: {estimate_kg:.2} kg")
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
