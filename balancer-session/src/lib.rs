#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate log;

extern crate serde_json;

extern crate balancer_common;

pub mod command;

use command::Command;

use balancer_common::api::format::format_rating;
use balancer_common::api::lobby::{Lobby, TeamView};
use balancer_common::errors::{ErrorKind, Result};
use balancer_common::model::POOL_CAPACITY;
use balancer_common::session::Session;

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow
{
    Continue,
    Quit,
}

pub const HELP: &'static str = "Commands:
  add <name>|<rating>   register a player (rating 1-30000)
  remove <id>           remove a player by id
  balance               split exactly 10 players into two teams
  reset                 clear players and teams
  show                  print players and teams
  json                  print players and teams as JSON
  quit                  exit";

/// Parses one input line and applies it to `session`, writing any notice to `out`
pub fn run_line<W>(session: &mut Session, line: &str, out: &mut W) -> Result<Flow>
    where W: Write
{
    if line.trim().is_empty()
    {
        return Ok(Flow::Continue);
    }

    match Command::from_str(line)
    {
        Err(error) =>
        {
            debug!("Failed to parse {:?} because {}", line, error);
            writeln!(out, "Unknown command: {}", line.trim())?;
            Ok(Flow::Continue)
        },
        Ok(command) => run_command(session, command, out),
    }
}

pub fn run_command<W>(session: &mut Session, command: Command, out: &mut W) -> Result<Flow>
    where W: Write
{
    trace!("Running command: {:?}", command);

    match command
    {
        Command::Add { name, rating: Some(rating) } =>
        {
            match session.add_player(name, rating)
            {
                Ok(id) => info!("Added player: {}", id),
                Err(error) => match error.kind()
                {
                    ErrorKind::PoolFull => writeln!(out, "{}", error)?,
                    _ => debug!("Ignoring add: {}", error),
                },
            }
        },
        Command::Add { name, rating: None } => debug!("Ignoring add for {:?} without a numeric rating", name),
        Command::Remove(id) =>
        {
            if session.remove_player(id).is_none()
            {
                debug!("Nothing removed for id: {}", id);
            }
        },
        Command::Balance =>
        {
            if let Err(error) = session.balance()
            {
                match error.kind()
                {
                    ErrorKind::PoolNotFull(_) => writeln!(out, "Please add exactly {} players", POOL_CAPACITY)?,
                    _ => return Err(error),
                }
            }
        },
        Command::Reset => session.reset(),
        Command::Show => write_lobby(&session.lobby(), out)?,
        Command::Json => writeln!(out, "{}", serde_json::to_string_pretty(&session.lobby())?)?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

pub fn write_lobby<W>(lobby: &Lobby, out: &mut W) -> Result<()>
    where W: Write
{
    writeln!(out, "Player Pool ({}/{})", lobby.pool.len(), lobby.capacity)?;
    for player in lobby.pool.iter()
    {
        writeln!(out, "  [{}] {} - Rating: {}", player.id, player.name, player.display_rating)?;
    }

    if lobby.is_balanced()
    {
        write_team("Team 1", &lobby.team1, out)?;
        write_team("Team 2", &lobby.team2, out)?;
    }

    Ok(())
}

fn write_team<W>(label: &str, team: &TeamView, out: &mut W) -> Result<()>
    where W: Write
{
    writeln!(out, "{} (Avg: {}, Total: {})", label, team.display_average, format_rating(team.total_rating))?;
    for player in team.players.iter()
    {
        writeln!(out, "  {} - Rating: {}", player.name, player.display_rating)?;
    }

    Ok(())
}
