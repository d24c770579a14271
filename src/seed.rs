use crate::database::MemoryDb;
use crate::model::*;

fn user(id: u64, name: &str, age: i32, nationality: Nationality) -> User {
    User {
        id,
        name: name.to_owned(),
        username: format!("{}123", name),
        age,
        nationality,
        friends: Vec::new(),
    }
}

fn movie(id: u64, name: &str, year: i32, in_theaters: bool) -> Movie {
    Movie {
        id,
        name: name.to_owned(),
        year,
        in_theaters,
    }
}

/// The fixed dataset the service starts with.
pub fn seed_db() -> MemoryDb {
    let joan = user(2, "Joan", 38, Nationality::GERMANY);
    let john = user(3, "John", 44, Nationality::SPAIN);
    let mut mark = user(1, "Mark", 18, Nationality::US);
    mark.friends = vec![joan.clone(), john.clone()];

    MemoryDb::with_records(
        vec![mark, joan, john],
        vec![
            movie(1, "Interstellar", 2018, false),
            movie(2, "Avengers", 2016, false),
            movie(3, "Shrek", 2007, true),
        ],
    )
}
