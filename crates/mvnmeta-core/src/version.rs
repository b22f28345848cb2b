//! Maven version parsing and comparison.
//!
//! Versions follow Maven's `ComparableVersion` ordering:
//! - The string is lower-cased and split on `.`, `-` and on transitions
//!   between digits and letters
//! - `-` and digit/letter transitions open a nested sub-list
//! - Numeric items compare as (arbitrarily large) numbers
//! - String qualifiers have a fixed ordering:
//!   `alpha` < `beta` < `milestone` < `rc` < `snapshot` < `""` (release) < `sp`,
//!   with any other qualifier sorting after `sp`, lexically
//! - Trailing "null" items (`0`, release qualifiers, empty lists) are dropped,
//!   so `1.0` equals `1`
//!
//! Every string parses, which makes the ordering total.

use std::cmp::Ordering;
use std::fmt;

/// A parsed Maven version with comparable items.
#[derive(Debug, Clone)]
pub struct MavenVersion {
    pub original: String,
    items: Vec<Item>,
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Item {
    /// Decimal digits without leading zeros; zero is `"0"`.
    Int(String),
    /// Qualifier with aliases already applied (`ga` -> `""`, `cr` -> `rc`, ...).
    Str(String),
    List(Vec<Item>),
}

/// Well-known qualifiers, lowest first. The empty string is the release.
const QUALIFIERS: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

const RELEASE_INDEX: usize = 5;

impl MavenVersion {
    pub fn parse(version: &str) -> Self {
        Self {
            original: version.to_string(),
            items: parse_items(version),
        }
    }
}

/// Compare two version strings by Maven ordering.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    MavenVersion::parse(a).cmp(&MavenVersion::parse(b))
}

impl fmt::Display for MavenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_lists(&self.items, &other.items)
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_lists(left: &[Item], right: &[Item]) -> Ordering {
    let max_len = left.len().max(right.len());
    for i in 0..max_len {
        let ord = match (left.get(i), right.get(i)) {
            (None, None) => Ordering::Equal,
            (None, Some(r)) => compare_item(r, None).reverse(),
            (Some(l), r) => compare_item(l, r),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Compare an item against another item, or against "nothing" when the
/// other version has run out of items.
fn compare_item(a: &Item, b: Option<&Item>) -> Ordering {
    match (a, b) {
        (Item::Int(n), None) => {
            if n == "0" {
                Ordering::Equal
            } else {
                Ordering::Greater
            }
        }
        (Item::Int(n), Some(Item::Int(m))) => n.len().cmp(&m.len()).then_with(|| n.cmp(m)),
        (Item::Int(_), Some(_)) => Ordering::Greater,

        (Item::Str(s), None) => comparable_qualifier(s).cmp(&RELEASE_INDEX.to_string()),
        (Item::Str(_), Some(Item::Int(_))) => Ordering::Less,
        (Item::Str(s), Some(Item::Str(t))) => comparable_qualifier(s).cmp(&comparable_qualifier(t)),
        (Item::Str(_), Some(Item::List(_))) => Ordering::Less,

        (Item::List(items), None) => items
            .first()
            .map_or(Ordering::Equal, |first| compare_item(first, None)),
        (Item::List(_), Some(Item::Int(_))) => Ordering::Less,
        (Item::List(_), Some(Item::Str(_))) => Ordering::Greater,
        (Item::List(l), Some(Item::List(r))) => compare_lists(l, r),
    }
}

/// Sort key of a qualifier: its index among the known qualifiers, or
/// `"7-<qualifier>"` for unknown ones so they sort after all known ones.
fn comparable_qualifier(qualifier: &str) -> String {
    match QUALIFIERS.iter().position(|q| *q == qualifier) {
        Some(i) => i.to_string(),
        None => format!("{}-{qualifier}", QUALIFIERS.len()),
    }
}

fn is_null(item: &Item) -> bool {
    match item {
        Item::Int(n) => n == "0",
        Item::Str(s) => s.is_empty(),
        Item::List(items) => items.is_empty(),
    }
}

fn int_item(digits: &str) -> Item {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        Item::Int("0".to_string())
    } else {
        Item::Int(trimmed.to_string())
    }
}

fn str_item(value: &str, followed_by_digit: bool) -> Item {
    let value = if followed_by_digit && value.len() == 1 {
        match value {
            "a" => "alpha",
            "b" => "beta",
            "m" => "milestone",
            other => other,
        }
    } else {
        value
    };
    let value = match value {
        "ga" | "final" | "release" => "",
        "cr" => "rc",
        other => other,
    };
    Item::Str(value.to_string())
}

fn token_item(is_digit: bool, token: &str) -> Item {
    if is_digit {
        int_item(token)
    } else {
        str_item(token, false)
    }
}

/// Drop trailing null items, looking through trailing sub-lists.
fn normalize(items: &mut Vec<Item>) {
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if is_null(&items[i]) {
            items.remove(i);
        } else if !matches!(items[i], Item::List(_)) {
            break;
        }
    }
}

fn parse_items(version: &str) -> Vec<Item> {
    let version = version.to_lowercase();
    let chars: Vec<char> = version.chars().collect();

    // Each new sub-list is always the last element of its parent, so the
    // open lists form a stack that is folded back up at the end.
    let mut stack: Vec<Vec<Item>> = vec![Vec::new()];
    let mut is_digit = false;
    let mut start = 0;

    for (i, &ch) in chars.iter().enumerate() {
        let token: String = chars[start..i].iter().collect();
        let current = stack.len() - 1;
        match ch {
            '.' | '-' => {
                if i == start {
                    stack[current].push(Item::Int("0".to_string()));
                } else {
                    stack[current].push(token_item(is_digit, &token));
                }
                start = i + 1;
                if ch == '-' {
                    stack.push(Vec::new());
                }
            }
            c if c.is_ascii_digit() => {
                if !is_digit && i > start {
                    stack[current].push(str_item(&token, true));
                    start = i;
                    stack.push(Vec::new());
                }
                is_digit = true;
            }
            _ => {
                if is_digit && i > start {
                    stack[current].push(int_item(&token));
                    start = i;
                    stack.push(Vec::new());
                }
                is_digit = false;
            }
        }
    }

    if chars.len() > start {
        let token: String = chars[start..].iter().collect();
        let current = stack.len() - 1;
        stack[current].push(token_item(is_digit, &token));
    }

    while stack.len() > 1 {
        let mut inner = stack.pop().unwrap_or_default();
        normalize(&mut inner);
        if let Some(parent) = stack.last_mut() {
            parent.push(Item::List(inner));
        }
    }

    let mut root = stack.pop().unwrap_or_default();
    normalize(&mut root);
    root
}
