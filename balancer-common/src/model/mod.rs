use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

pub const POOL_CAPACITY: usize = 10;
pub const TEAM_SIZE: usize = 5;

pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 30000;

/// Opaque player identifier, unique within the pool that issued it
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u64);

impl PlayerId
{
    pub fn new(raw: u64) -> PlayerId
    {
        PlayerId(raw)
    }

    pub fn value(&self) -> u64
    {
        self.0
    }
}

impl fmt::Display for PlayerId
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId
{
    type Err = ParseIntError;

    fn from_str(raw: &str) -> ::std::result::Result<PlayerId, ParseIntError>
    {
        raw.trim().parse::<u64>().map(PlayerId)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: u32,
}

impl Player
{
    pub fn new<S>(id: PlayerId, name: S, rating: u32) -> Player
        where S: Into<String>
    {
        Player {
            id,
            name: name.into(),
            rating,
        }
    }
}

pub fn is_valid_rating(rating: i64) -> bool
{
    rating >= MIN_RATING as i64 && rating <= MAX_RATING as i64
}
