use model::{Player, PlayerId, POOL_CAPACITY, TEAM_SIZE};

use ::errors::*;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Team
{
    players: Vec<Player>,
}

impl Team
{
    pub fn new() -> Team
    {
        Team {
            players: Vec::with_capacity(TEAM_SIZE),
        }
    }

    fn push(&mut self, player: Player)
    {
        self.players.push(player);
    }

    /// Players in the order they were assigned
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
        self.players.len() >= TEAM_SIZE
    }

    pub fn contains(&self, id: PlayerId) -> bool
    {
        self.players.iter().any(|player| player.id == id)
    }

    pub fn total_rating(&self) -> u32
    {
        self.players.iter().map(|player| player.rating).sum()
    }

    /// Mean rating rounded to one decimal place, `0.0` for an empty team
    pub fn average_rating(&self) -> f64
    {
        if self.players.is_empty()
        {
            return 0.0;
        }

        let average = self.total_rating() as f64 / self.players.len() as f64;

        (average * 10.0).round() / 10.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct TeamAssignment
{
    pub team1: Team,
    pub team2: Team,
}

/// Splits a full pool into two teams of `TEAM_SIZE`
/// 
/// Players are walked from highest to lowest rating (ties keep their pool order) and each one
/// joins whichever team has the lower running total, `team1` on ties. Once a team is full the
/// rest go to the other team. Greedy, no search.
/// 
/// # Arguments
/// * `players` Exactly `POOL_CAPACITY` players
/// 
/// # Return
/// * Both teams, each listing players in the order they were picked
pub fn balance_teams(players: &[Player]) -> Result<TeamAssignment>
{
    if players.len() != POOL_CAPACITY
    {
        bail!(ErrorKind::PoolNotFull(players.len()));
    }

    let mut sorted: Vec<&Player> = players.iter().collect();
    /* sort_by is stable so equal ratings keep the order they were added in */
    sorted.sort_by(|a, b| b.rating.cmp(&a.rating));

    let mut team1 = Team::new();
    let mut team2 = Team::new();
    let mut team1_sum: u32 = 0;
    let mut team2_sum: u32 = 0;

    for player in sorted
    {
        let to_team1 = !team1.is_full() && (team2.is_full() || team1_sum <= team2_sum);

        if to_team1
        {
            team1_sum += player.rating;
            team1.push(player.clone());
        } else
        {
            team2_sum += player.rating;
            team2.push(player.clone());
        }

        trace!("Assigned {:?} to team {}. Sums: {} / {}", player.name, if to_team1 { 1 } else { 2 }, team1_sum, team2_sum);
    }

    debug!("Balanced teams with totals {} and {}", team1_sum, team2_sum);

    Ok(TeamAssignment::new(team1, team2))
}
