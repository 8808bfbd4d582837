use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use inn_types::{RoomNumber, Tier};

#[derive(Parser)]
#[command(
    name = "inn",
    about = "Front desk for a fifteen-room hotel ledger",
    version,
)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file overriding the tariff and tax rate
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read desk commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One line typed at the front desk.
#[derive(Parser)]
#[command(name = "desk", no_binary_name = true, disable_version_flag = true)]
pub struct DeskLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List vacant rooms per tier
    Available,
    /// Check a guest into a room
    Checkin(CheckinArgs),
    /// Show who occupies a room
    Search(RoomArgs),
    /// Check a guest out and print the bill
    Checkout(RoomArgs),
    /// List current guests
    Guests,
    /// Show per-day rates
    Rates,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args)]
pub struct CheckinArgs {
    /// 1 (Non-AC), 2 (AC), 3 (Premium), or the tier name
    #[arg(short, long)]
    pub tier: Tier,
    #[arg(short, long)]
    pub room: RoomNumber,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub surname: String,
    #[arg(long)]
    pub days: u32,
    /// Check-in date (DD/MM/YYYY)
    #[arg(long = "checkin")]
    pub check_in: String,
    /// Check-out date (DD/MM/YYYY)
    #[arg(long = "checkout")]
    pub check_out: String,
    #[arg(long)]
    pub guests: u32,
    #[arg(long)]
    pub contact: String,
}

#[derive(Args)]
pub struct RoomArgs {
    pub room: RoomNumber,
}

/// Split a desk line into words. Double quotes group words containing spaces.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    words.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".into());
    }
    if pending {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk(line: &str) -> DeskLine {
        DeskLine::try_parse_from(split_line(line).unwrap()).unwrap()
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["inn"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.config.is_none());
        assert!(cli.script.is_none());
    }

    #[test]
    fn parse_json_and_config() {
        let cli =
            Cli::try_parse_from(["inn", "--format", "json", "--config", "inn.toml", "-v"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("inn.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_available() {
        assert!(matches!(desk("available").command, Command::Available));
    }

    #[test]
    fn parse_checkin_with_selector() {
        let line = "checkin --tier 1 --room 7 --name Ravi --surname Kumar --days 3 \
                    --checkin 01/01/2024 --checkout 04/01/2024 --guests 2 --contact 98765";
        if let Command::Checkin(args) = desk(line).command {
            assert_eq!(args.tier, Tier::NonAc);
            assert_eq!(args.room, 7);
            assert_eq!(args.days, 3);
            assert_eq!(args.check_in, "01/01/2024");
            assert_eq!(args.check_out, "04/01/2024");
            assert_eq!(args.guests, 2);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_checkin_with_quoted_name() {
        let line = "checkin -t premium -r 12 --name \"Mary Ann\" --surname Lee --days 1 \
                    --checkin a --checkout b --guests 1 --contact c";
        if let Command::Checkin(args) = desk(line).command {
            assert_eq!(args.tier, Tier::Premium);
            assert_eq!(args.name, "Mary Ann");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn checkin_requires_every_field() {
        let words = split_line("checkin --tier 2 --room 1 --name A").unwrap();
        assert!(DeskLine::try_parse_from(words).is_err());
    }

    #[test]
    fn unknown_tier_rejected() {
        let words = split_line(
            "checkin --tier 9 --room 1 --name A --surname B --days 1 \
             --checkin x --checkout y --guests 1 --contact z",
        )
        .unwrap();
        assert!(DeskLine::try_parse_from(words).is_err());
    }

    #[test]
    fn parse_search_and_checkout() {
        if let Command::Search(args) = desk("search 4").command {
            assert_eq!(args.room, 4);
        } else {
            panic!("wrong command");
        }
        if let Command::Checkout(args) = desk("checkout 11").command {
            assert_eq!(args.room, 11);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn exit_is_quit() {
        assert!(matches!(desk("exit").command, Command::Quit));
        assert!(matches!(desk("quit").command, Command::Quit));
    }

    #[test]
    fn split_handles_quotes_and_spaces() {
        assert_eq!(
            split_line("  search   3 ").unwrap(),
            vec!["search".to_string(), "3".to_string()]
        );
        assert_eq!(
            split_line("a \"b c\" \"\"").unwrap(),
            vec!["a".to_string(), "b c".to_string(), String::new()]
        );
        assert!(split_line("a \"b").is_err());
    }
}
