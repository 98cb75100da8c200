/// Parse a decimal temperature with exactly one fractional digit (e.g. `-3.4`,
/// `12.3`) without going through `str::parse`.
///
/// Digits are accumulated as an integer count of tenths and scaled once at the
/// end, so the `.` is skipped rather than used for place value. Input is not
/// validated: anything other than one fractional digit yields a wrong value,
/// and values with more than 18 digits wrap around instead of panicking.
///
/// # Examples
/// ```
/// use brc_processor::utils::parse_temperature;
///
/// assert_eq!(parse_temperature(b"-3.4"), -3.4);
/// assert_eq!(parse_temperature(b"12.3"), 12.3);
/// ```
#[inline]
pub fn parse_temperature(bytes: &[u8]) -> f64 {
    let mut negative = false;
    let mut tenths: i64 = 0;

    for &b in bytes {
        match b {
            b'-' => negative = true,
            b'.' => {}
            _ => {
                tenths = tenths
                    .wrapping_mul(10)
                    .wrapping_add(b.wrapping_sub(b'0') as i64)
            }
        }
    }

    let value = tenths as f64 / 10.0;
    if negative {
        -value
    } else {
        value
    }
}
