use std::{
    collections::BTreeSet,
    fmt,
    io::{self, Write},
};

use colored::Colorize;

use crate::types::{BookKind, Status};

/// An ordered, duplicate-free set of book kinds, as collected from a
/// comma-separated `--type` argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookKinds(pub BTreeSet<BookKind>);

impl BookKinds {
    pub fn iter(&self) -> impl Iterator<Item = BookKind> + '_ {
        self.0.iter().cloned()
    }

    pub fn to_vec(&self) -> Vec<BookKind> {
        self.0.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BookKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}

/// Parses a comma-separated list of book kinds, e.g. `physical,kindle`.
///
/// Accepts the keyword `all` for every known kind, tolerates surrounding
/// whitespace and hyphenated spellings, ignores case, and deduplicates.
/// Unknown kinds are rejected; forward-compatible passthrough applies only
/// to data coming back from the server, not to arguments typed by the user.
pub fn parse_book_kinds(input: &str) -> Result<BookKinds, String> {
    if input.trim().is_empty() {
        return Err("book type cannot be empty".to_string());
    }

    let mut kinds = BTreeSet::new();
    for segment in input.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(format!("empty segment in '{}'", input));
        }

        let normalized = segment.to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "all" => {
                kinds.extend(BookKind::ALL.clone());
            }
            "physical" => {
                kinds.insert(BookKind::Physical);
            }
            "kindle" => {
                kinds.insert(BookKind::Kindle);
            }
            "audible" => {
                kinds.insert(BookKind::Audible);
            }
            "ebook" => {
                kinds.insert(BookKind::Ebook);
            }
            _ => return Err(format!("invalid value '{}' for book type", segment)),
        }
    }

    Ok(BookKinds(kinds))
}

/// Parses a single reading status, e.g. `reading` or `want-to-read`.
pub fn parse_status(input: &str) -> Result<Status, String> {
    let normalized = input.trim().to_lowercase().replace('-', "_");
    match normalized.as_str() {
        "unread" => Ok(Status::Unread),
        "reading" => Ok(Status::Reading),
        "completed" => Ok(Status::Completed),
        "abandoned" => Ok(Status::Abandoned),
        "want_to_read" => Ok(Status::WantToRead),
        "" => Err("status cannot be empty".to_string()),
        _ => Err(format!("invalid value '{}' for status", input)),
    }
}

/// Strips hyphens and spaces from an ISBN, the way the lookup endpoint
/// expects it.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Formats a count with grouped thousands, e.g. `1234567` -> `1,234,567`.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Asks a yes/no question on stdin. Anything but an explicit `y`/`yes`
/// counts as a decline, including EOF.
pub fn confirm(question: &str) -> bool {
    print!("[{}] {} [y/N]: ", "?".cyan().bold(), question);
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

/// Reads one line from stdin after printing a prompt. Returns `None` on
/// EOF or a read error.
pub fn prompt_line(prompt: &str) -> Option<String> {
    print!("{} ", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim_end_matches(['\n', '\r']).to_string()),
        Err(_) => None,
    }
}
