pub const PERCENTAGE_MIN: u8 = 0;
pub const PERCENTAGE_MAX: u8 = 100;

/// Clamps `value` into `[0, 100]`.
///
/// Only the two comparisons are applied, so anything that fails both
/// (e.g. `f64::NAN`) comes back unchanged.
#[inline]
pub fn clamp_percentage<T>(value: T) -> T
where
    T: PartialOrd + From<u8>,
{
    let max = T::from(PERCENTAGE_MAX);
    if value > max {
        return max;
    }
    let min = T::from(PERCENTAGE_MIN);
    if value < min {
        return min;
    }
    value
}
