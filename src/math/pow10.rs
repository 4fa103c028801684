/// Powers of ten from `10^0` through `10^19`, the largest that fits in a `u64`.
pub const POW10: [u64; 20] = {
    let mut tab = [1u64; 20];
    let mut e = 1;
    while e < tab.len() {
        tab[e] = 10 * tab[e - 1];
        e += 1;
    }
    tab
};

/// Largest exponent usable with `scale_u64`.
pub const MAX_U64_EXPONENT: u32 = 19;

/// Largest exponent usable with `scale_i64`.
pub const MAX_I64_EXPONENT: u32 = 18;

/// Number of decimal digits needed to represent `v`, in the range `[1, 20]`.
#[inline]
pub const fn digit_count_u64(v: u64) -> u32 {
    match v.checked_ilog10() {
        Some(log) => log + 1,
        None => 1
    }
}

/// Number of decimal digits needed to represent `|v|`, in the range `[1, 19]`.
///
/// `i64::MIN` is measured through its unsigned magnitude.
#[inline]
pub const fn digit_count_i64(v: i64) -> u32 {
    digit_count_u64(v.unsigned_abs())
}

/// Returns `base * 10^exponent`, or `base / 10^-exponent` for a negative exponent.
///
/// # Panics
///
/// Panics if `|exponent| > 19` or if the product overflows a `u64`.
pub fn scale_u64(base: u64, exponent: i32) -> u64 {
    let index = exponent.unsigned_abs();
    assert!(index <= MAX_U64_EXPONENT, "power-of-ten exponent {} out of range", exponent);
    let pow = POW10[index as usize];
    if exponent < 0 {
        base / pow
    } else {
        match base.checked_mul(pow) {
            Some(scaled) => scaled,
            None => panic!("{} * 10^{} overflows u64", base, exponent)
        }
    }
}

/// Returns `base * 10^exponent`, or `base / 10^-exponent` for a negative exponent.
///
/// # Panics
///
/// Panics if `|exponent| > 18` or if the product overflows an `i64`.
pub fn scale_i64(base: i64, exponent: i32) -> i64 {
    let index = exponent.unsigned_abs();
    assert!(index <= MAX_I64_EXPONENT, "power-of-ten exponent {} out of range", exponent);
    let pow = POW10[index as usize] as i64;
    if exponent < 0 {
        base / pow
    } else {
        match base.checked_mul(pow) {
            Some(scaled) => scaled,
            None => panic!("{} * 10^{} overflows i64", base, exponent)
        }
    }
}
