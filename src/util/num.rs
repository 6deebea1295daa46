/// Number of bits in the integer view used by bitwise operators.
pub const INT_BITS: u32 = i32::BITS;

/// Truncates a value toward zero into the signed integer view.
///
/// The integer part wraps modulo 2^32 like a 32-bit register, so an
/// unsigned literal such as `0xffffffff` reads back as `-1`. Values beyond
/// the `i64` range saturate before wrapping and `NaN` becomes `0`, so the
/// conversion is always defined.
///
/// ## Example
/// ```
/// use bincalc::util::num::truncate;
///
/// assert_eq!(truncate(2.9), 2);
/// assert_eq!(truncate(-2.9), -2);
/// assert_eq!(truncate(4_294_967_295.0), -1);
/// assert_eq!(truncate(2_147_483_648.0), i32::MIN);
/// assert_eq!(truncate(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn truncate(value: f64) -> i32 {
    value as i64 as i32
}

/// Shifts the bits of `value` left, treating them as unsigned.
///
/// Shift amounts outside `0..32` clear every bit.
///
/// ## Example
/// ```
/// use bincalc::util::num::shift_left;
///
/// assert_eq!(shift_left(1, 4), 16);
/// assert_eq!(shift_left(1, 31), i32::MIN);
/// assert_eq!(shift_left(1, 32), 0);
/// assert_eq!(shift_left(1, -1), 0);
/// ```
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn shift_left(value: i32, amount: i32) -> i32 {
    if amount < 0 || amount as u32 >= INT_BITS {
        return 0;
    }
    ((value as u32) << amount) as i32
}

/// Shifts the bits of `value` right, treating them as unsigned.
///
/// This is a logical shift: zeros are shifted in even for negative values.
/// Shift amounts outside `0..32` clear every bit.
///
/// ## Example
/// ```
/// use bincalc::util::num::shift_right;
///
/// assert_eq!(shift_right(16, 2), 4);
/// assert_eq!(shift_right(-1, 28), 0xF);
/// assert_eq!(shift_right(-1, 40), 0);
/// ```
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn shift_right(value: i32, amount: i32) -> i32 {
    if amount < 0 || amount as u32 >= INT_BITS {
        return 0;
    }
    ((value as u32) >> amount) as i32
}

/// Integer remainder with the sign of the dividend.
///
/// Returns `None` when `divisor` is zero. `i32::MIN % -1` wraps to `0`
/// instead of overflowing.
///
/// ## Example
/// ```
/// use bincalc::util::num::remainder;
///
/// assert_eq!(remainder(7, 3), Some(1));
/// assert_eq!(remainder(-7, 3), Some(-1));
/// assert_eq!(remainder(i32::MIN, -1), Some(0));
/// assert_eq!(remainder(7, 0), None);
/// ```
#[must_use]
pub const fn remainder(dividend: i32, divisor: i32) -> Option<i32> {
    if divisor == 0 {
        return None;
    }
    Some(dividend.wrapping_rem(divisor))
}

/// Multiplies `value` by every integer from `start - 1` down to `2`.
///
/// This is the calculator's factorial: `start` is the integer view of the
/// operand while `value` keeps its fractional part, so `factorial(5.0, 5)`
/// is `120` and any `start` of `2` or less leaves `value` untouched.
///
/// ## Example
/// ```
/// use bincalc::util::num::factorial;
///
/// assert_eq!(factorial(5.0, 5), 120.0);
/// assert_eq!(factorial(1.0, 1), 1.0);
/// assert_eq!(factorial(0.0, 0), 0.0);
/// assert_eq!(factorial(5.5, 5), 132.0);
/// ```
#[must_use]
pub fn factorial(mut value: f64, start: i32) -> f64 {
    for i in (2..start).rev() {
        // Saturated products cannot change any more.
        if value == 0.0 || !value.is_finite() {
            break;
        }
        value *= f64::from(i);
    }
    value
}
