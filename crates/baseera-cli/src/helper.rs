//! Line-editor helper: completion, hints and highlighting.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMAND_NAMES;

const ROUTE_PATHS: &[&str] = &[
    "/",
    "/dashboard",
    "/analysis/new",
    "/analyses",
    "/cases",
    "/reports",
    "/settings",
    "/developers",
];

const SET_FIELDS: &[&str] = &["category", "sensitivity", "audience", "historical"];
const ACTIONS: &[&str] = &["download", "approve", "archive"];

#[derive(Clone, Default)]
pub struct CliHelper;

impl CliHelper {
    /// Candidates for the word under the cursor, given the words before it.
    fn candidates(previous: &[&str]) -> &'static [&'static str] {
        match previous {
            [] => COMMAND_NAMES,
            ["go"] => ROUTE_PATHS,
            ["set"] => SET_FIELDS,
            ["action"] => ACTIONS,
            _ => &[],
        }
    }

    /// Splits `line` into the finished words and the start of the word being typed.
    fn split(line: &str) -> (Vec<&str>, usize, &str) {
        let word = line.rsplit(char::is_whitespace).next().unwrap_or_default();
        let start = line.len() - word.len();
        let previous = line[..start].split_whitespace().collect();
        (previous, start, word)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (previous, start, word) = Self::split(&line[..pos]);
        let candidates = Self::candidates(&previous)
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (command, rest) = trimmed.split_at(end);
        if COMMAND_NAMES.contains(&command) {
            Owned(format!("{indent}{}{rest}", command.bright_cyan()))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (previous, _, word) = Self::split(line);
        if word.is_empty() {
            return None;
        }
        Self::candidates(&previous)
            .iter()
            .find(|candidate| candidate.starts_with(word) && candidate.len() > word.len())
            .map(|candidate| candidate[word.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_follow_command() {
        let (previous, start, word) = CliHelper::split("go /ca");
        assert_eq!(previous, vec!["go"]);
        assert_eq!(start, 3);
        assert_eq!(word, "/ca");
        assert!(CliHelper::candidates(&previous).contains(&"/cases"));

        let (previous, _, word) = CliHelper::split("lo");
        assert!(previous.is_empty());
        let matches: Vec<_> = CliHelper::candidates(&previous)
            .iter()
            .filter(|c| c.starts_with(word))
            .collect();
        assert_eq!(matches, vec![&"login", &"logout"]);
    }

    #[test]
    fn test_no_candidates_for_free_text() {
        let (previous, _, _) = CliHelper::split("cases بنك ");
        assert!(CliHelper::candidates(&previous).is_empty());
    }
}
