use super::*;
use crate::util::one_rep_max::INVALID_INPUT;

#[test]
fn calculate_describes_estimate() {
    assert_eq!(
        calculate("100", "10"),
        Outcome::Estimate("Your estimated one rep max is: 133.33 kg".to_owned())
    );
}

#[test]
fn calculate_reports_invalid_input() {
    assert_eq!(calculate("", "5"), Outcome::Invalid(INVALID_INPUT));
    assert_eq!(calculate("80", "0"), Outcome::Invalid(INVALID_INPUT));
}
