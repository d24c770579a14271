use crate::model::*;
use log::debug;
use std::convert::Infallible;

pub trait UserDb {
    type Error;
    fn users(&self) -> Result<Vec<User>, Self::Error>;
    fn get_user(&self, id: u64) -> Result<Option<User>, Self::Error>;
    fn add_user(&mut self, user: NewUser) -> Result<User, Self::Error>;
    fn update_user(&mut self, update: UserUpdate) -> Result<Option<User>, Self::Error>;
}

pub trait MovieDb {
    type Error;
    fn movies(&self) -> Result<Vec<Movie>, Self::Error>;
    fn get_movie(&self, name: &str) -> Result<Option<Movie>, Self::Error>;
}

/// Users and movies kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryDb {
    users: Vec<User>,
    movies: Vec<Movie>,
}

impl MemoryDb {
    /// Takes the records as given. Ids are not checked for uniqueness or order.
    pub fn with_records(users: Vec<User>, movies: Vec<Movie>) -> Self {
        MemoryDb { users, movies }
    }

    // The next id follows the last inserted user, not the largest id.
    fn next_user_id(&self) -> u64 {
        self.users.last().map(|user| user.id + 1).unwrap_or(1)
    }
}

impl UserDb for MemoryDb {
    type Error = Infallible;

    fn users(&self) -> Result<Vec<User>, Infallible> {
        Ok(self.users.clone())
    }

    fn get_user(&self, id: u64) -> Result<Option<User>, Infallible> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    fn add_user(&mut self, user: NewUser) -> Result<User, Infallible> {
        let user = User {
            id: self.next_user_id(),
            name: user.name,
            username: user.username,
            age: user.age,
            nationality: user.nationality,
            // created users have no friends; serialized as [] rather than null
            friends: Vec::new(),
        };
        debug!("created user: {:?}", user);
        self.users.push(user.clone());
        Ok(user)
    }

    fn update_user(&mut self, update: UserUpdate) -> Result<Option<User>, Infallible> {
        let updated = self
            .users
            .iter_mut()
            .find(|user| user.id == update.id)
            .map(|user| {
                user.name = update.name;
                user.username = update.username;
                user.nationality = update.nationality;
                user.clone()
            });
        debug!("updated user: {:?}", updated);
        Ok(updated)
    }
}

impl MovieDb for MemoryDb {
    type Error = Infallible;

    fn movies(&self) -> Result<Vec<Movie>, Infallible> {
        Ok(self.movies.clone())
    }

    fn get_movie(&self, name: &str) -> Result<Option<Movie>, Infallible> {
        Ok(self.movies.iter().find(|movie| movie.name == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_db;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_owned(),
            username: format!("{}1", name),
            age: 25,
            nationality: Nationality::US,
        }
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_owned(),
            username: name.to_owned(),
            age: 30,
            nationality: Nationality::GERMANY,
            friends: Vec::new(),
        }
    }

    #[test]
    fn create_assigns_last_id_plus_one() {
        let mut db = seed_db();
        let ana = db.add_user(new_user("Ana")).unwrap();
        assert_eq!(ana.id, 4);
        assert_eq!(ana.username, "Ana1");
        let bob = db.add_user(new_user("Bob")).unwrap();
        assert_eq!(bob.id, 5);
        assert_eq!(db.users().unwrap().len(), 5);
        assert_eq!(db.get_user(4).unwrap(), Some(ana));
        assert_eq!(db.get_user(5).unwrap(), Some(bob));
        assert_eq!(db.get_user(6).unwrap(), None);
    }

    #[test]
    fn create_on_empty_store_starts_at_one() {
        let mut db = MemoryDb::default();
        assert_eq!(db.add_user(new_user("Ana")).unwrap().id, 1);
    }

    #[test]
    fn out_of_order_ids_collide() {
        let mut db = MemoryDb::with_records(vec![user(5, "Eve"), user(2, "Dan")], Vec::new());
        let created = db.add_user(new_user("Ana")).unwrap();
        assert_eq!(created.id, 3);

        let mut db = MemoryDb::with_records(vec![user(3, "Eve"), user(1, "Dan")], Vec::new());
        let created = db.add_user(new_user("Ana")).unwrap();
        assert_eq!(created.id, 2);
        let created = db.add_user(new_user("Bob")).unwrap();
        assert_eq!(created.id, 3);
        let with_three = db
            .users()
            .unwrap()
            .into_iter()
            .filter(|user| user.id == 3)
            .count();
        assert_eq!(with_three, 2);
        // first match wins
        assert_eq!(db.get_user(3).unwrap().unwrap().name, "Eve");
    }

    #[test]
    fn update_keeps_age() {
        let mut db = seed_db();
        let updated = db
            .update_user(UserUpdate {
                id: 2,
                name: "Joanna".to_owned(),
                username: "Joanna2".to_owned(),
                nationality: Nationality::SPAIN,
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Joanna");
        assert_eq!(updated.username, "Joanna2");
        assert_eq!(updated.nationality, Nationality::SPAIN);
        assert_eq!(updated.age, 38);
        assert_eq!(db.get_user(2).unwrap(), Some(updated));
    }

    #[test]
    fn update_does_not_touch_embedded_friends() {
        let mut db = seed_db();
        db.update_user(UserUpdate {
            id: 2,
            name: "Joanna".to_owned(),
            username: "Joanna2".to_owned(),
            nationality: Nationality::SPAIN,
        })
        .unwrap();
        let mark = db.get_user(1).unwrap().unwrap();
        assert_eq!(mark.friends[0].id, 2);
        assert_eq!(mark.friends[0].name, "Joan");
    }

    #[test]
    fn update_missing_user_is_not_found() {
        let mut db = seed_db();
        let updated = db
            .update_user(UserUpdate {
                id: 42,
                name: "Nobody".to_owned(),
                username: "nobody".to_owned(),
                nationality: Nationality::US,
            })
            .unwrap();
        assert_eq!(updated, None);
        assert_eq!(db.users().unwrap().len(), 3);
    }

    #[test]
    fn movie_lookup_by_name() {
        let db = seed_db();
        assert_eq!(db.movies().unwrap().len(), 3);
        assert_eq!(db.get_movie("Avengers").unwrap().unwrap().year, 2016);
        assert_eq!(db.get_movie("NoSuchMovie").unwrap(), None);
        assert_eq!(db.get_movie("avengers").unwrap(), None);
    }

    #[test]
    fn duplicate_movie_names_return_first() {
        let movies = [(1, 1999), (2, 2001)]
            .iter()
            .map(|(id, year)| Movie {
                id: *id,
                name: "Dune".to_owned(),
                year: *year,
                in_theaters: false,
            })
            .collect();
        let db = MemoryDb::with_records(Vec::new(), movies);
        assert_eq!(db.get_movie("Dune").unwrap().unwrap().id, 1);
    }
}
