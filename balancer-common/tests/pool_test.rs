extern crate balancer_common;

use balancer_common::errors::ErrorKind;
use balancer_common::model::{PlayerId, MAX_RATING, MIN_RATING, POOL_CAPACITY};
use balancer_common::pool::PlayerPool;

use std::collections::HashSet;

fn full_pool() -> PlayerPool
{
    let mut pool = PlayerPool::new();
    for index in 0..POOL_CAPACITY
    {
        pool.add(format!("player{}", index), 1000 + index as i64).unwrap();
    }

    pool
}

#[test]
fn test_add_keeps_order() {
    let mut pool = PlayerPool::new();

    let alice = pool.add("Alice", 1500).unwrap();
    let bob = pool.add("Bob", 30000).unwrap();

    let names: Vec<&str> = pool.players().iter().map(|player| player.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(pool.get(alice).unwrap().rating, 1500);
    assert_eq!(pool.get(bob).unwrap().rating, 30000);
}

#[test]
fn test_ids_are_unique() {
    let pool = full_pool();

    let ids: HashSet<PlayerId> = pool.players().iter().map(|player| player.id).collect();
    assert_eq!(ids.len(), POOL_CAPACITY);

    let mut previous = None;
    for player in pool.players()
    {
        if let Some(previous) = previous
        {
            assert!(player.id > previous);
        }
        previous = Some(player.id);
    }
}

#[test]
fn test_eleventh_player_rejected() {
    let mut pool = full_pool();

    let error = pool.add("Late", 1500).unwrap_err();

    match error.kind()
    {
        ErrorKind::PoolFull => {},
        other => panic!("Unexpected error: {:?}", other),
    }
    assert_eq!(pool.len(), POOL_CAPACITY);
    assert_eq!(error.to_string(), "Maximum 10 players allowed");
}

#[test]
fn test_empty_name_rejected() {
    let mut pool = PlayerPool::new();

    match pool.add("", 1500).unwrap_err().kind()
    {
        ErrorKind::EmptyName => {},
        other => panic!("Unexpected error: {:?}", other),
    }
    assert!(pool.is_empty());
}

#[test]
fn test_rating_bounds() {
    let mut pool = PlayerPool::new();

    assert!(pool.add("low", MIN_RATING as i64).is_ok());
    assert!(pool.add("high", MAX_RATING as i64).is_ok());

    for rating in vec![0, -5, MAX_RATING as i64 + 1]
    {
        match pool.add("bad", rating).unwrap_err().kind()
        {
            ErrorKind::RatingOutOfRange(found) => assert_eq!(*found, rating),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    assert_eq!(pool.len(), 2);
}

#[test]
fn test_remove() {
    let mut pool = PlayerPool::new();
    let alice = pool.add("Alice", 1500).unwrap();
    let bob = pool.add("Bob", 1600).unwrap();

    let removed = pool.remove(alice).unwrap();

    assert_eq!(removed.name, "Alice");
    assert_eq!(pool.len(), 1);
    assert!(pool.get(alice).is_none());
    assert!(pool.get(bob).is_some());
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut pool = full_pool();
    let before = pool.players().to_vec();

    assert!(pool.remove(PlayerId::new(7)).is_none());
    assert_eq!(pool.players(), &before[..]);
}

#[test]
fn test_clear_then_refill() {
    let mut pool = full_pool();
    let last = pool.players().last().unwrap().id;

    pool.clear();
    assert!(pool.is_empty());

    let id = pool.add("Again", 10).unwrap();
    assert!(id > last);
}
