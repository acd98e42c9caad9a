use std::str::FromStr;

use anyhow::{Result, bail};

use crate::view::sort::SortKey;

pub const HELP: &str = "\
commands:
  r, refresh          fetch the batch again
  / <term>            filter symbols (`/` alone clears)
  s <key>             sort by symbol | price | change (repeat to flip)
  unsort              drop the sort
  h, help             show this help
  q, quit             exit";

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Refresh,
    Search(String),
    Sort(SortKey),
    ClearSort,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if let Some(term) = line.strip_prefix('/') {
            return Ok(Self::Search(term.trim().to_string()));
        }

        let (verb, argument) = match line.split_once(char::is_whitespace) {
            Some((verb, argument)) => (verb, argument.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Show),
            "r" | "refresh" => Ok(Self::Refresh),
            "search" => Ok(Self::Search(argument.to_string())),
            "s" | "sort" if !argument.is_empty() => Ok(Self::Sort(argument.parse()?)),
            "s" | "sort" => bail!("sort needs a key: symbol, price or change"),
            "unsort" => Ok(Self::ClearSort),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => bail!("unknown command: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse(""), Command::Show);
        assert_eq!(parse("  r "), Command::Refresh);
        assert_eq!(parse("/aa"), Command::Search("aa".to_string()));
        assert_eq!(parse("/"), Command::Search(String::new()));
        assert_eq!(parse("search ms"), Command::Search("ms".to_string()));
        assert_eq!(parse("s price"), Command::Sort(SortKey::Price));
        assert_eq!(parse("sort change"), Command::Sort(SortKey::ChangePercent));
        assert_eq!(parse("unsort"), Command::ClearSort);
        assert_eq!(parse("QUIT"), Command::Quit);
    }

    #[test]
    fn rejects_unknown_input() {
        assert!("s".parse::<Command>().is_err());
        assert!("s volume".parse::<Command>().is_err());
        assert!("launch".parse::<Command>().is_err());
    }
}
