//! Hard-coded sample catalog used to seed the theater at startup.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{Movie, Show};
use crate::theater::Theater;

pub fn seed_sample_shows(theater: &mut Theater) {
    let endgame = Movie::new("Avengers: Endgame", "Action/Adventure", 181, "9.5");
    let lion_king = Movie::new("The Lion King", "Animation/Family", 118, "8.8");
    let joker = Movie::new("Joker", "Crime/Drama", 122, "8.5");

    let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid sample date");
    let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid sample time");

    theater.add_show(Show::new(101, endgame.clone(), date, at(10, 0)));
    theater.add_show(Show::new(102, endgame, date, at(14, 0)));
    theater.add_show(Show::new(103, lion_king, date, at(11, 0)));
    theater.add_show(Show::new(104, joker, date, at(18, 0)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_seeds_four_shows_in_insertion_order() {
        let mut theater = Theater::new("Test Theater", 8, 10);
        seed_sample_shows(&mut theater);

        let shows = theater.shows();
        assert_eq!(shows.len(), 4);
        assert_eq!(
            shows.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![101, 102, 103, 104]
        );
        assert_eq!(shows[0].movie.title, "Avengers: Endgame");
        assert_eq!(shows[3].movie.duration_minutes, 122);
    }
}
