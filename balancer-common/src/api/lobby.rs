use model::{Player, PlayerId, POOL_CAPACITY};
use balance::{Team, TeamAssignment};

use super::format::{format_average, format_rating};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct PlayerView
{
    pub id: PlayerId,
    pub name: String,
    pub rating: u32,
    pub display_rating: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct TeamView
{
    pub players: Vec<PlayerView>,
    pub total_rating: u32,
    pub average_rating: f64,
    pub display_average: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct Lobby
{
    pub pool: Vec<PlayerView>,
    pub capacity: usize,
    pub team1: TeamView,
    pub team2: TeamView,
}

impl<'a> From<&'a Player> for PlayerView
{
    fn from(player: &'a Player) -> PlayerView
    {
        PlayerView::new(player.id, player.name.clone(), player.rating, format_rating(player.rating))
    }
}

impl<'a> From<&'a Team> for TeamView
{
    fn from(team: &'a Team) -> TeamView
    {
        let average = team.average_rating();

        TeamView::new(team.players().iter().map(PlayerView::from).collect(), team.total_rating(), average, format_average(average))
    }
}

impl Lobby
{
    /// Snapshot of a pool and its teams. No teams means both sides show up empty.
    pub fn from_parts(pool: &[Player], teams: Option<&TeamAssignment>) -> Lobby
    {
        let empty = Team::new();
        let (team1, team2) = match teams
        {
            Some(teams) => (&teams.team1, &teams.team2),
            None => (&empty, &empty),
        };

        Lobby::new(pool.iter().map(PlayerView::from).collect(), POOL_CAPACITY, TeamView::from(team1), TeamView::from(team2))
    }

    pub fn is_balanced(&self) -> bool
    {
        !self.team1.players.is_empty() || !self.team2.players.is_empty()
    }
}
