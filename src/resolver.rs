use crate::model::{Movie, User};
use std::ops::RangeInclusive;

pub const DEFAULT_FAVORITE_YEARS: RangeInclusive<i32> = 2000..=2015;

/// Computes `favoriteMovies`. Every user gets the same list: the movies
/// released inside `years`.
#[derive(Debug, Clone)]
pub struct FavoriteMovies {
    years: RangeInclusive<i32>,
}

impl Default for FavoriteMovies {
    fn default() -> Self {
        FavoriteMovies::new(DEFAULT_FAVORITE_YEARS)
    }
}

impl FavoriteMovies {
    pub fn new(years: RangeInclusive<i32>) -> Self {
        FavoriteMovies { years }
    }

    pub fn resolve(&self, _user: &User, movies: &[Movie]) -> Vec<Movie> {
        movies
            .iter()
            .filter(|movie| self.years.contains(&movie.year))
            .cloned()
            .collect()
    }
}

/// Friends are returned exactly as embedded in the record.
pub fn friends(user: &User) -> &[User] {
    &user.friends
}
