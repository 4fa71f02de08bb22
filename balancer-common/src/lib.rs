// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

extern crate chrono;
extern crate serde;
extern crate serde_json;

pub mod model;
pub mod pool;
pub mod balance;
pub mod session;
pub mod api;

/*
    Common error_chain for all of lib to use so the ? operator passes things around real well.

    Add `use ::errors::*;` to the sub-modules to gain access to it.
*/
pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain!{
        foreign_links {
            Io(::std::io::Error);
            ParseInt(::std::num::ParseIntError);
            Json(::serde_json::Error);
        }

        errors {
            PoolFull {
                description("player pool is at capacity")
                display("Maximum {} players allowed", ::model::POOL_CAPACITY)
            }
            EmptyName {
                description("player name is empty")
                display("Player name must not be empty")
            }
            RatingOutOfRange(rating: i64) {
                description("rating is outside the allowed range")
                display("Rating {} is outside {}-{}", rating, ::model::MIN_RATING, ::model::MAX_RATING)
            }
            PoolNotFull(count: usize) {
                description("balancing needs a full pool")
                display("Please add exactly {} players (have {})", ::model::POOL_CAPACITY, count)
            }
        }
    }
}
