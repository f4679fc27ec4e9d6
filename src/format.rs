use chrono::NaiveDate;

use crate::models::Star;

/// Day-first date as shown on Russian-locale pages, e.g. `20.11.2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Five-star indicator: full below the integer part of the rating, half for
/// the rest.
pub fn star_kinds(rating: f32) -> [Star; 5] {
    let full = rating.floor().clamp(0.0, 5.0) as usize;
    std::array::from_fn(|i| if i < full { Star::Full } else { Star::Half })
}

pub fn format_rating(rating: f32) -> String {
    format!("{rating}")
}

/// Staggered entrance animation for the card at `index`.
pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {}ms;", index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_day_first() {
        let d = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        assert_eq!(format_date(d), "02.11.2025");
    }

    #[test]
    fn stars_follow_floor_of_rating() {
        use Star::*;
        assert_eq!(star_kinds(4.8), [Full, Full, Full, Full, Half]);
        assert_eq!(star_kinds(5.0), [Full; 5]);
        assert_eq!(star_kinds(0.0), [Half; 5]);
        assert_eq!(star_kinds(2.5), [Full, Full, Half, Half, Half]);
    }

    #[test]
    fn rating_prints_shortest_form() {
        assert_eq!(format_rating(4.8), "4.8");
        assert_eq!(format_rating(5.0), "5");
    }

    #[test]
    fn delay_grows_by_100ms() {
        assert_eq!(animation_delay(0), "animation-delay: 0ms;");
        assert_eq!(animation_delay(3), "animation-delay: 300ms;");
    }
}
