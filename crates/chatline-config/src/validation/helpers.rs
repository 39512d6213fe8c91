use std::fmt::Display;
use std::ops::RangeInclusive;

/// Record `name` as invalid unless `value` lies in `allowed`.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, allowed: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !allowed.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            allowed.start(),
            allowed.end()
        ));
    }
}
