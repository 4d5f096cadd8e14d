//! Sibling sort orders mirrored from the host's file browser.
//!
//! The host persists one of six sort keys in its browser view state. The
//! command reads that key, maps it onto [`SortOrder`], and sorts siblings with
//! a pure comparator looked up per variant. Alphabetical comparison is natural
//! ordering: case-insensitive and numeric-aware, so `a2` sorts before `a10`.

use std::cmp::Ordering;

use crate::types::FileMeta;

/// Comparator signature used for sibling sorting.
pub type SortFn = fn(&FileMeta, &FileMeta) -> Ordering;

/// The six sort orders the host's file browser can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    AlphabeticalAsc,
    AlphabeticalDesc,
    CreatedAsc,
    CreatedDesc,
    ModifiedAsc,
    ModifiedDesc,
}

impl SortOrder {
    /// Map the host browser's persisted sort key onto a variant.
    ///
    /// The host's time-based keys list newest first, so `byModifiedTime` is
    /// the descending variant and its `Reverse` form the ascending one.
    /// Unknown keys yield `None`; callers fall back to the default order.
    pub fn from_view_state(key: &str) -> Option<Self> {
        match key {
            "alphabetical" => Some(SortOrder::AlphabeticalAsc),
            "alphabeticalReverse" => Some(SortOrder::AlphabeticalDesc),
            "byModifiedTime" => Some(SortOrder::ModifiedDesc),
            "byModifiedTimeReverse" => Some(SortOrder::ModifiedAsc),
            "byCreatedTime" => Some(SortOrder::CreatedDesc),
            "byCreatedTimeReverse" => Some(SortOrder::CreatedAsc),
            _ => None,
        }
    }

    /// Pure comparator for this variant.
    pub fn comparator(self) -> SortFn {
        match self {
            SortOrder::AlphabeticalAsc => cmp_name_asc,
            SortOrder::AlphabeticalDesc => cmp_name_desc,
            SortOrder::CreatedAsc => cmp_created_asc,
            SortOrder::CreatedDesc => cmp_created_desc,
            SortOrder::ModifiedAsc => cmp_modified_asc,
            SortOrder::ModifiedDesc => cmp_modified_desc,
        }
    }
}

fn cmp_name_asc(a: &FileMeta, b: &FileMeta) -> Ordering {
    natural_name_cmp(&a.name, &b.name)
}

fn cmp_name_desc(a: &FileMeta, b: &FileMeta) -> Ordering {
    natural_name_cmp(&b.name, &a.name)
}

// Time-based variants tie-break by name so the sibling sequence stays
// deterministic when timestamps collide (common on fast batch creation).

fn cmp_created_asc(a: &FileMeta, b: &FileMeta) -> Ordering {
    a.created_ms.cmp(&b.created_ms).then_with(|| natural_name_cmp(&a.name, &b.name))
}

fn cmp_created_desc(a: &FileMeta, b: &FileMeta) -> Ordering {
    b.created_ms.cmp(&a.created_ms).then_with(|| natural_name_cmp(&a.name, &b.name))
}

fn cmp_modified_asc(a: &FileMeta, b: &FileMeta) -> Ordering {
    a.modified_ms.cmp(&b.modified_ms).then_with(|| natural_name_cmp(&a.name, &b.name))
}

fn cmp_modified_desc(a: &FileMeta, b: &FileMeta) -> Ordering {
    b.modified_ms.cmp(&a.modified_ms).then_with(|| natural_name_cmp(&a.name, &b.name))
}

/// Case-insensitive natural comparison of two file names.
pub fn natural_name_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp(&a.to_lowercase(), &b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Natural comparison: digit runs compare by numeric value before digit
/// count, number tokens sort ahead of text tokens.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_tokens = tokenize(a);
    let b_tokens = tokenize(b);

    for (a_tok, b_tok) in a_tokens.iter().zip(b_tokens.iter()) {
        let order = match (a_tok, b_tok) {
            (Token::Number(a_digits, a_val), Token::Number(b_digits, b_val)) => {
                a_val.cmp(b_val).then_with(|| a_digits.len().cmp(&b_digits.len()))
            }
            (Token::Text(a_text), Token::Text(b_text)) => a_text.cmp(b_text),
            (Token::Number(..), Token::Text(..)) => Ordering::Less,
            (Token::Text(..), Token::Number(..)) => Ordering::Greater,
        };
        if order != Ordering::Equal {
            return order;
        }
    }

    a_tokens.len().cmp(&b_tokens.len()).then_with(|| a.cmp(b))
}

/// One lexical unit of a file name under natural comparison.
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    Text(&'a str),
    Number(&'a str, u128),
}

/// Split `input` into alternating text and digit-run tokens.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < input.len() {
        let run_start = pos;
        let digits = bytes[pos].is_ascii_digit();
        while pos < input.len() && bytes[pos].is_ascii_digit() == digits {
            pos += 1;
        }
        let run = &input[run_start..pos];
        if digits {
            let value = run.parse::<u128>().unwrap_or(0);
            tokens.push(Token::Number(run, value));
        } else {
            tokens.push(Token::Text(run));
        }
    }

    tokens
}
