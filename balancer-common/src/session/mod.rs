use model::{Player, PlayerId};
use pool::PlayerPool;
use balance::{self, TeamAssignment};
use api::lobby::Lobby;

use ::errors::*;

/// Everything one user is working with: the pool and the last team split made from it
#[derive(Debug, Clone, Default)]
pub struct Session
{
    pool: PlayerPool,
    teams: Option<TeamAssignment>,
}

impl Session
{
    pub fn new() -> Session
    {
        Session {
            pool: PlayerPool::new(),
            teams: None,
        }
    }

    pub fn pool(&self) -> &PlayerPool
    {
        &self.pool
    }

    pub fn teams(&self) -> Option<&TeamAssignment>
    {
        self.teams.as_ref()
    }

    pub fn add_player<S>(&mut self, name: S, rating: i64) -> Result<PlayerId>
        where S: Into<String>
    {
        let id = self.pool.add(name, rating)?;
        self.discard_teams();

        Ok(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player>
    {
        let removed = self.pool.remove(id);
        if removed.is_some()
        {
            self.discard_teams();
        }

        removed
    }

    /// Replaces the current teams with a fresh split of the pool.
    /// Leaves everything as it was when the pool is not full.
    pub fn balance(&mut self) -> Result<TeamAssignment>
    {
        let teams = balance::balance_teams(self.pool.players())?;
        info!("Balanced teams: {} vs {}", teams.team1.total_rating(), teams.team2.total_rating());

        self.teams = Some(teams.clone());

        Ok(teams)
    }

    pub fn reset(&mut self)
    {
        info!("Resetting session with {} players", self.pool.len());

        self.pool.clear();
        self.teams = None;
    }

    pub fn lobby(&self) -> Lobby
    {
        Lobby::from_parts(self.pool.players(), self.teams.as_ref())
    }

    fn discard_teams(&mut self)
    {
        if self.teams.take().is_some()
        {
            debug!("Pool changed, discarding team assignment");
        }
    }
}
