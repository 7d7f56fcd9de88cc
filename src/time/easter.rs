use chrono::NaiveDate;

/// Easter Sunday on the Gregorian calendar (anonymous Gregorian algorithm,
/// also known as Meeus/Jones/Butcher).
///
/// Only integer arithmetic is used. Floor division keeps the intermediate
/// terms non-negative, so every `i32` year produces a month of 3 or 4 and a
/// day inside that month. The result is `None` only for years `NaiveDate`
/// cannot represent; any year read off an existing `NaiveDate` always has an
/// Easter. Results before 1583 are arithmetic extrapolations with no
/// historical meaning.
pub fn easter(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let g = (8 * b + 13).div_euclid(25);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;
    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
}
