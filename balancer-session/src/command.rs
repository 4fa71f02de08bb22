use balancer_common::errors::Result;
use balancer_common::model::PlayerId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command
{
    /// `rating` is `None` when it wasn't a whole number, such adds get dropped quietly
    Add { name: String, rating: Option<i64> },
    Remove(PlayerId),
    Balance,
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

impl Command
{
    pub fn from_str(raw: &str) -> Result<Command>
    {
        let raw = raw.trim_start();
        let mut splits = raw.splitn(2, char::is_whitespace);

        let keyword = splits.next().ok_or("No command")?;
        let rest = splits.next().unwrap_or("");

        match keyword.to_lowercase().as_str()
        {
            "add" =>
            {
                /* Names may contain spaces or even '|' so only the last '|' separates the rating */
                let mut parts = rest.trim_end().rsplitn(2, '|');
                let rating = parts.next().ok_or("No rating")?;
                let name = parts.next().ok_or("Expected <name>|<rating>")?;

                Ok(Command::Add {
                    name: name.to_string(),
                    rating: rating.trim().parse::<i64>().ok(),
                })
            },
            "remove" => Ok(Command::Remove(rest.parse::<PlayerId>()?)),
            "balance" => Ok(Command::Balance),
            "reset" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => bail!("Unknown command: {}", keyword),
        }
    }
}
