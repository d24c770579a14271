use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nationality {
    US,
    GERMANY,
    SPAIN,
}

impl Default for Nationality {
    fn default() -> Self {
        Nationality::US
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Nationality::US => "US",
            Nationality::GERMANY => "GERMANY",
            Nationality::SPAIN => "SPAIN",
        };
        f.write_str(name)
    }
}

impl FromStr for Nationality {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "US" => Ok(Nationality::US),
            "GERMANY" => Ok(Nationality::GERMANY),
            "SPAIN" => Ok(Nationality::SPAIN),
            other => Err(crate::Error::InvalidArgument(format!(
                "unknown nationality: {}",
                other
            ))),
        }
    }
}

/// A stored user. `friends` holds copies of other users as they were when
/// the record was written, not references into the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub age: i32,
    pub nationality: Nationality,
    #[serde(default)]
    pub friends: Vec<User>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub name: String,
    pub year: i32,
    #[serde(rename = "inTheaters")]
    pub in_theaters: bool,
}

/// Fields of a user about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub age: i32,
    pub nationality: Nationality,
}

/// Fields overwritten by an update. `age` is not among them.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub nationality: Nationality,
}
