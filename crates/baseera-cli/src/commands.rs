//! REPL command grammar.

use std::str::FromStr;

use baseera_core::analysis::{AnalysisCategory, Audience, ResultAction, Sensitivity};
use baseera_core::case::OutcomeFilter;
use baseera_core::error::{BaseeraError, Result};

/// Command names offered for completion, in help order.
pub const COMMAND_NAMES: &[&str] = &[
    "login",
    "logout",
    "go",
    "whoami",
    "notifications",
    "read",
    "sidebar",
    "upload",
    "remove",
    "next",
    "set",
    "start",
    "cases",
    "action",
    "help",
    "quit",
];

/// Wizard setting changed by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Category(AnalysisCategory),
    Sensitivity(Sensitivity),
    Audience(Audience),
    /// Flips the historical-comparison switch.
    Historical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login,
    Logout,
    Go(String),
    WhoAmI,
    Notifications,
    Read(String),
    Sidebar,
    /// Attach a document; `None` attaches the sample document.
    Upload(Option<String>),
    Remove,
    Next,
    Set(Setting),
    Start,
    Cases {
        query: String,
        outcome: OutcomeFilter,
    },
    Action(ResultAction),
    Help,
    Quit,
}

fn parse_value<T: FromStr>(field: &str, value: Option<&str>) -> Result<T> {
    let value = value.ok_or_else(|| BaseeraError::invalid_input(format!("set {field} needs a value")))?;
    value
        .parse()
        .map_err(|_| BaseeraError::invalid_input(format!("unknown {field} '{value}'")))
}

fn parse_setting(args: &[&str]) -> Result<Setting> {
    let field = args
        .first()
        .ok_or_else(|| BaseeraError::invalid_input("usage: set <category|sensitivity|audience|historical> [value]"))?;
    let value = args.get(1).copied();
    match *field {
        "category" => Ok(Setting::Category(parse_value(field, value)?)),
        "sensitivity" => Ok(Setting::Sensitivity(parse_value(field, value)?)),
        "audience" => Ok(Setting::Audience(parse_value(field, value)?)),
        "historical" => Ok(Setting::Historical),
        other => Err(BaseeraError::invalid_input(format!("unknown setting '{other}'"))),
    }
}

fn parse_cases(args: &[&str]) -> Result<Command> {
    let mut query = Vec::new();
    let mut outcome = OutcomeFilter::All;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if *arg == "--outcome" {
            let value = iter
                .next()
                .ok_or_else(|| BaseeraError::invalid_input("--outcome needs a value"))?;
            outcome = value.parse()?;
        } else {
            query.push(*arg);
        }
    }
    Ok(Command::Cases {
        query: query.join(" "),
        outcome,
    })
}

impl FromStr for Command {
    type Err = BaseeraError;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(BaseeraError::invalid_input("empty command"));
        };

        let rest = || args.join(" ");
        match name {
            "login" => Ok(Self::Login),
            "logout" => Ok(Self::Logout),
            "go" => match args.first() {
                Some(path) => Ok(Self::Go((*path).to_string())),
                None => Err(BaseeraError::invalid_input("usage: go <path>")),
            },
            "whoami" => Ok(Self::WhoAmI),
            "notifications" | "notifs" => Ok(Self::Notifications),
            "read" => match args.first() {
                Some(id) => Ok(Self::Read((*id).to_string())),
                None => Err(BaseeraError::invalid_input("usage: read <notification id>")),
            },
            "sidebar" => Ok(Self::Sidebar),
            "upload" => Ok(Self::Upload(Some(rest()).filter(|name| !name.is_empty()))),
            "remove" => Ok(Self::Remove),
            "next" => Ok(Self::Next),
            "set" => Ok(Self::Set(parse_setting(args)?)),
            "start" => Ok(Self::Start),
            "cases" => parse_cases(args),
            "action" => {
                let action = args
                    .first()
                    .ok_or_else(|| BaseeraError::invalid_input("usage: action <download|approve|archive>"))?;
                action
                    .parse()
                    .map(Self::Action)
                    .map_err(|_| BaseeraError::invalid_input(format!("unknown action '{action}'")))
            }
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(BaseeraError::invalid_input(format!("unknown command '{other}'"))),
        }
    }
}
