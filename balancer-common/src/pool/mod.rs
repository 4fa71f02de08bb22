use chrono::Utc;

use model::{Player, PlayerId, POOL_CAPACITY, is_valid_rating};

use ::errors::*;

/// Staging list of registered players, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct PlayerPool
{
    players: Vec<Player>,
    last_id: Option<PlayerId>,
}

impl PlayerPool
{
    pub fn new() -> PlayerPool
    {
        PlayerPool {
            players: Vec::with_capacity(POOL_CAPACITY),
            last_id: None,
        }
    }

    /// Registers a new player at the end of the pool
    /// 
    /// # Arguments
    /// * `name` Display name, must not be empty
    /// * `rating` Skill rating, must be within `MIN_RATING..=MAX_RATING`
    /// 
    /// # Return
    /// * The identifier handed out to the new player
    pub fn add<S>(&mut self, name: S, rating: i64) -> Result<PlayerId>
        where S: Into<String>
    {
        if self.is_full()
        {
            bail!(ErrorKind::PoolFull);
        }

        let name = name.into();
        if name.is_empty()
        {
            bail!(ErrorKind::EmptyName);
        }

        if !is_valid_rating(rating)
        {
            bail!(ErrorKind::RatingOutOfRange(rating));
        }

        let id = self.next_id();
        debug!("Adding player: {:?} with rating: {} as {}", name, rating, id);

        self.players.push(Player::new(id, name, rating as u32));

        Ok(id)
    }

    /// Removes the player with `id`, unknown ids leave the pool untouched
    pub fn remove(&mut self, id: PlayerId) -> Option<Player>
    {
        match self.players.iter().position(|player| player.id == id)
        {
            None =>
            {
                trace!("No player with id: {} to remove", id);
                None
            },
            Some(index) => Some(self.players.remove(index)),
        }
    }

    pub fn clear(&mut self)
    {
        self.players.clear();
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player>
    {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn players(&self) -> &[Player]
    {
        &self.players
    }

    pub fn len(&self) -> usize
    {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool
    {
        self.players.len() >= POOL_CAPACITY
    }

    /*
        Ids come from the millisecond clock. Two adds within the same millisecond (or a clock
        that went backwards) would collide so never hand out anything <= the last id.
    */
    fn next_id(&mut self) -> PlayerId
    {
        let now = Utc::now().timestamp_millis().max(0) as u64;

        let raw = match self.last_id
        {
            Some(last) if now <= last.value() => last.value() + 1,
            _ => now,
        };

        let id = PlayerId::new(raw);
        self.last_id = Some(id);

        id
    }
}
