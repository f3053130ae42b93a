use std::fmt::Display;
use std::ops::RangeInclusive;

/// Record `name` as invalid unless `value` lies in `range`.
///
/// NaN never lies in a range, so float fields are rejected when not finite.
pub(crate) fn check_range<T: PartialOrd + Display>(
    errors: &mut Vec<String>,
    name: &str,
    value: T,
    range: RangeInclusive<T>,
) {
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}

pub(crate) fn check_finite(errors: &mut Vec<String>, name: &str, value: f32) {
    if !value.is_finite() {
        errors.push(format!("{name} = {value} must be finite"));
    }
}
