use crate::Vec3;

/// Normalize or zero: unit-length copy of `v`, or [`Vec3::ZERO`] when `v`
/// has zero (or non-finite) length. Never returns NaN.
#[inline]
pub fn noz_vec3(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// `true` if `v` has length 1 within `eps`.
#[inline]
pub fn is_unit_length(v: Vec3, eps: f32) -> bool {
    (v.length() - 1.0).abs() <= eps
}
