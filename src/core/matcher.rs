//! Quote extraction and matching against verified sources

use regex_lite::Regex;

use super::source::SourceDocument;

/// One extracted quote paired with a source document that contains it
#[derive(Debug, Clone)]
pub struct QuoteMatch {
    pub quote: String,
    pub source: SourceDocument,
}

/// All matches attributed to one source title
#[derive(Debug, Clone)]
pub struct SourceMatches {
    pub source: SourceDocument,
    pub quotes: Vec<String>,
}

/// Result of checking one post's text against the loaded sources
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    /// The text contains no single-quoted substrings
    NoQuotes,
    /// Quotes were found, but none appear in any verified source
    NoMatches,
    /// Every (quote, source) pair found, in discovery order
    Matches(Vec<QuoteMatch>),
}

/// Extract all maximal single-quoted substrings, left to right.
///
/// Standard regex semantics: each match consumes its delimiters, so quotes
/// never overlap and an apostrophe without a closing partner yields nothing.
/// Quotes are collected independently; duplicates are kept.
pub fn extract_quotes(text: &str) -> Vec<String> {
    let re = Regex::new(r"'([^']+)'").unwrap();

    re.captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Check a post's text against the loaded sources.
///
/// Outer loop over extracted quotes in extraction order, inner loop over
/// sources in load order; a quote matches a source when the source is
/// verified and its content contains the quote as an exact case-sensitive
/// substring. Both sets are tiny and bounded, so everything is a linear scan.
pub fn check_quotes(text: &str, sources: &[SourceDocument]) -> MatchOutcome {
    let quotes = extract_quotes(text);
    if quotes.is_empty() {
        return MatchOutcome::NoQuotes;
    }

    let mut matches = Vec::new();
    let mut unverified_hits = 0usize;

    for quote in &quotes {
        for source in sources {
            if !source.content.contains(quote.as_str()) {
                continue;
            }
            if source.verified {
                matches.push(QuoteMatch {
                    quote: quote.clone(),
                    source: source.clone(),
                });
            } else {
                unverified_hits += 1;
            }
        }
    }

    if unverified_hits > 0 {
        tracing::debug!(
            "Suppressed {} quote hit(s) in unverified sources",
            unverified_hits
        );
    }

    if matches.is_empty() {
        MatchOutcome::NoMatches
    } else {
        MatchOutcome::Matches(matches)
    }
}

/// Group a flat match list by source title, in first-seen order.
///
/// Title equality is the only grouping identity; a title never produces two
/// groups, and every quote attributed to it lands under the one group.
pub fn group_by_source(matches: &[QuoteMatch]) -> Vec<SourceMatches> {
    let mut groups: Vec<SourceMatches> = Vec::new();

    for m in matches {
        match groups
            .iter_mut()
            .find(|group| group.source.title == m.source.title)
        {
            Some(group) => group.quotes.push(m.quote.clone()),
            None => groups.push(SourceMatches {
                source: m.source.clone(),
                quotes: vec![m.quote.clone()],
            }),
        }
    }

    groups
}
