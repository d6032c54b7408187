//! Profile - Personal Details Shared by Several Pages

use chrono::{Datelike, Local, NaiveDate};

pub const OWNER_NAME: &str = "Corentin Bedo";
pub const EMAIL: &str = "corentin.bedo05@gmail.com";
pub const LOCATION: &str = "Toulouse, France";
pub const PROGRAMME: &str = "B2 Infrastructure & Cloud - Ynov Campus";
pub const GITHUB_URL: &str = "https://github.com/Coco-Bd";
/// Not published yet
pub const LINKEDIN_URL: &str = "#";

/// Birth date (year, month, day)
pub const BIRTH_DATE: (i32, u32, u32) = (2005, 11, 3);

/// Completed years between `birth` and `today`
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let years = today.year() - birth.year();
    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
    let years = if before_birthday { years - 1 } else { years };
    u32::try_from(years).unwrap_or(0)
}

/// Current age from the local clock
pub fn current_age() -> u32 {
    let (year, month, day) = BIRTH_DATE;
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(birth) => age_on(birth, Local::now().date_naive()),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_age_changes_on_birthday() {
        let birth = date(2005, 11, 3);
        assert_eq!(age_on(birth, date(2025, 11, 2)), 19);
        assert_eq!(age_on(birth, date(2025, 11, 3)), 20);
        assert_eq!(age_on(birth, date(2026, 1, 1)), 20);
    }

    #[test]
    fn test_age_before_birth_is_zero() {
        assert_eq!(age_on(date(2005, 11, 3), date(2004, 1, 1)), 0);
    }
}
