//! The operation surface: `users`, `user`, `movies`, `movie`, `createUser`
//! and `updateUser`, either called directly or dispatched by name with JSON
//! arguments.

use crate::database::{MovieDb, UserDb};
use crate::error::storage_error;
use crate::model::*;
use crate::resolver::{self, FavoriteMovies};
use crate::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A GraphQL `ID` argument, sent either as a number or as text.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Id {
    Number(serde_json::Number),
    Text(String),
}

fn integral(value: f64) -> Option<u64> {
    if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

impl Id {
    /// Numeric coercion: whitespace is ignored, an empty string is 0 and
    /// only non-negative integral values name a user.
    pub fn coerce(&self) -> Option<u64> {
        match self {
            Id::Number(number) => number
                .as_u64()
                .or_else(|| number.as_f64().and_then(integral)),
            Id::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Some(0)
                } else {
                    text.parse::<f64>().ok().and_then(integral)
                }
            }
        }
    }
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Id::Number(id.into())
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id::Text(id.to_owned())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(number) => write!(f, "{}", number),
            Id::Text(text) => f.write_str(text),
        }
    }
}

fn parse_nationality(nationality: Option<String>) -> Result<Nationality> {
    nationality
        .map(|n| n.parse())
        .unwrap_or_else(|| Ok(Nationality::default()))
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub username: String,
    pub age: i32,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl CreateUserInput {
    pub fn validate(self) -> Result<NewUser> {
        Ok(NewUser {
            name: self.name,
            username: self.username,
            age: self.age,
            nationality: parse_nationality(self.nationality)?,
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateUserInput {
    pub id: Id,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl UpdateUserInput {
    /// `None` when the id cannot name any user.
    pub fn validate(self) -> Result<Option<UserUpdate>> {
        let UpdateUserInput {
            id,
            name,
            username,
            nationality,
        } = self;
        let nationality = parse_nationality(nationality)?;
        Ok(id.coerce().map(|id| UserUpdate {
            id,
            name,
            username,
            nationality,
        }))
    }
}

/// A user as returned to callers, with relations resolved.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub age: i32,
    pub nationality: Nationality,
    pub friends: Vec<UserView>,
    pub favorite_movies: Vec<Movie>,
}

#[derive(Deserialize)]
struct UserArgs {
    id: Id,
}

#[derive(Deserialize)]
struct MovieArgs {
    name: String,
}

#[derive(Deserialize)]
struct InputArgs<T> {
    input: T,
}

pub struct Api<D> {
    db: D,
    favorites: FavoriteMovies,
}

impl<D> Api<D>
where
    D: UserDb + MovieDb,
    <D as UserDb>::Error: fmt::Debug,
    <D as MovieDb>::Error: fmt::Debug,
{
    pub fn new(db: D, favorites: FavoriteMovies) -> Self {
        Api { db, favorites }
    }

    fn all_movies(&self) -> Result<Vec<Movie>> {
        MovieDb::movies(&self.db).map_err(storage_error)
    }

    fn view(&self, user: User, movies: &[Movie]) -> UserView {
        let favorite_movies = self.favorites.resolve(&user, movies);
        let friends = resolver::friends(&user)
            .iter()
            .cloned()
            .map(|friend| self.view(friend, movies))
            .collect();
        UserView {
            id: user.id,
            name: user.name,
            username: user.username,
            age: user.age,
            nationality: user.nationality,
            friends,
            favorite_movies,
        }
    }

    fn view_opt(&self, user: Option<User>) -> Result<Option<UserView>> {
        match user {
            Some(user) => {
                let movies = self.all_movies()?;
                Ok(Some(self.view(user, &movies)))
            }
            None => Ok(None),
        }
    }

    pub fn users(&self) -> Result<Vec<UserView>> {
        let movies = self.all_movies()?;
        let users = self.db.users().map_err(storage_error)?;
        Ok(users
            .into_iter()
            .map(|user| self.view(user, &movies))
            .collect())
    }

    pub fn user(&self, id: &Id) -> Result<Option<UserView>> {
        let id = match id.coerce() {
            Some(id) => id,
            None => {
                debug!("user id {} names no user", id);
                return Ok(None);
            }
        };
        let user = self.db.get_user(id).map_err(storage_error)?;
        self.view_opt(user)
    }

    pub fn movies(&self) -> Result<Vec<Movie>> {
        self.all_movies()
    }

    pub fn movie(&self, name: &str) -> Result<Option<Movie>> {
        self.db.get_movie(name).map_err(storage_error)
    }

    pub fn create_user(&mut self, input: CreateUserInput) -> Result<UserView> {
        let new_user = input.validate()?;
        let user = self.db.add_user(new_user).map_err(storage_error)?;
        let movies = self.all_movies()?;
        Ok(self.view(user, &movies))
    }

    pub fn update_user(&mut self, input: UpdateUserInput) -> Result<Option<UserView>> {
        let update = match input.validate()? {
            Some(update) => update,
            None => {
                debug!("no user can match the update id");
                return Ok(None);
            }
        };
        let user = self.db.update_user(update).map_err(storage_error)?;
        self.view_opt(user)
    }

    /// Runs the operation called `operation`. Absent results become `null`.
    pub fn dispatch(&mut self, operation: &str, arguments: Value) -> Result<Value> {
        debug!("{} {}", operation, arguments);
        let result = match operation {
            "users" => serde_json::to_value(self.users()?)?,
            "user" => {
                let args: UserArgs = serde_json::from_value(arguments)?;
                serde_json::to_value(self.user(&args.id)?)?
            }
            "movies" => serde_json::to_value(self.movies()?)?,
            "movie" => {
                let args: MovieArgs = serde_json::from_value(arguments)?;
                serde_json::to_value(self.movie(&args.name)?)?
            }
            "createUser" => {
                let args: InputArgs<CreateUserInput> = serde_json::from_value(arguments)?;
                serde_json::to_value(self.create_user(args.input)?)?
            }
            "updateUser" => {
                let args: InputArgs<UpdateUserInput> = serde_json::from_value(arguments)?;
                serde_json::to_value(self.update_user(args.input)?)?
            }
            other => return Err(Error::UnknownOperation(other.to_owned())),
        };
        Ok(result)
    }
}
