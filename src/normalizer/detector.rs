// WHY: runs the rule table over a text and resolves competing matches into one
// non-overlapping, position-ordered set of readings

use super::reading::{interpret, Groups, Reading};
use super::rules::{compile, CompiledRule, RULES};
use super::{PatternCategory, SourceSpan};
use crate::config::NormalizerConfig;
use anyhow::Result;
use std::cmp::Ordering;
use std::ops::Range;
use tracing::{debug, trace};

/// One interpreted match that may still lose to a competing candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub category: PatternCategory,
    pub priority: u8,
    /// position of the producing rule in the table; breaks remaining ties
    pub rule_index: usize,
    /// byte range into the original text, whitespace trimmed
    pub span: Range<usize>,
    pub reading: Reading,
}

impl Candidate {
    fn len(&self) -> usize {
        self.span.end - self.span.start
    }
}

/// Compiled rule table
#[derive(Debug)]
pub struct PatternDetector {
    rules: Vec<(usize, CompiledRule)>,
}

impl PatternDetector {
    pub fn new() -> Result<Self> {
        Self::from_config(&NormalizerConfig::default())
    }

    /// Compile every rule whose category is enabled in `config`
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let mut rules = Vec::new();
        for (index, rule) in RULES.iter().enumerate() {
            if !config.is_enabled(rule.category) {
                debug!("Skipping disabled rule category: {}", rule.category.as_str());
                continue;
            }
            rules.push((index, compile(rule)?));
        }
        debug!("Compiled {} pattern rules", rules.len());
        Ok(Self { rules })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Every interpretable match of every rule, before overlap resolution
    pub fn candidates(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for (rule_index, compiled) in &self.rules {
            for caps in compiled.regex.captures_iter(text) {
                let Some(m) = caps.get_match() else { continue };
                let Some(span) = trim_span(text, m.start()..m.end()) else { continue };
                if !compiled.rule.guard.allows(text, span.start, span.end) {
                    trace!("Guard rejected {} match at {}", compiled.rule.category.as_str(), span.start);
                    continue;
                }

                let groups = Groups::new(text, &caps);
                match interpret(compiled.rule.shape, text, &span, &groups) {
                    Some(reading) => candidates.push(Candidate {
                        category: compiled.rule.category,
                        priority: compiled.rule.priority,
                        rule_index: *rule_index,
                        span,
                        reading,
                    }),
                    None => trace!(
                        "Discarded invalid {} match: {:?}",
                        compiled.rule.category.as_str(),
                        &text[span]
                    ),
                }
            }
        }
        candidates
    }

    /// Accepted, non-overlapping candidates sorted by position
    pub fn detect(&self, text: &str) -> Vec<Candidate> {
        if text.is_empty() {
            return Vec::new();
        }
        resolve(self.candidates(text))
    }
}

/// Pick a non-overlapping subset of `candidates`, sorted by position.
///
/// Overlapping candidates are settled one cluster at a time. A candidate lying
/// strictly inside another live candidate cannot win while that container is
/// still in play; among the rest the higher priority wins, then the longer span,
/// then the earlier start, then table order. Whatever overlaps the winner drops
/// out and the cluster is searched again.
pub fn resolve(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });

    let mut accepted: Vec<Candidate> = Vec::new();
    let mut cluster: Vec<Candidate> = Vec::new();
    let mut cluster_end = 0usize;
    for candidate in candidates {
        if !cluster.is_empty() && candidate.span.start >= cluster_end {
            resolve_cluster(std::mem::take(&mut cluster), &mut accepted);
        }
        cluster_end = if cluster.is_empty() {
            candidate.span.end
        } else {
            cluster_end.max(candidate.span.end)
        };
        cluster.push(candidate);
    }
    resolve_cluster(cluster, &mut accepted);

    accepted.sort_by_key(|c| c.span.start);
    accepted
}

fn resolve_cluster(mut live: Vec<Candidate>, accepted: &mut Vec<Candidate>) {
    while !live.is_empty() {
        let winner = live
            .iter()
            .enumerate()
            .filter(|(_, c)| !live.iter().any(|other| strictly_contains(&other.span, &c.span)))
            .min_by(|(_, a), (_, b)| rank(a, b))
            .map(|(index, _)| index);
        // the longest live span is never contained, so a winner always exists
        let Some(winner) = winner else { break };

        let winner = live.swap_remove(winner);
        live.retain(|c| !overlaps(&c.span, &winner.span));
        accepted.push(winner);
    }
}

fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then(b.len().cmp(&a.len()))
        .then(a.span.start.cmp(&b.span.start))
        .then(a.rule_index.cmp(&b.rule_index))
}

fn strictly_contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer != inner && outer.start <= inner.start && inner.end <= outer.end
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn trim_span(text: &str, span: Range<usize>) -> Option<Range<usize>> {
    let slice = text.get(span.clone())?;
    let leading = slice.len() - slice.trim_start().len();
    let trailing = slice.len() - slice.trim_end().len();
    if leading + trailing >= slice.len() {
        return None;
    }
    Some(span.start + leading..span.end - trailing)
}

/// Converts ordered byte offsets into character offsets in a single pass
pub struct CharCounter<'t> {
    bytes: &'t [u8],
    byte_pos: usize,
    char_pos: usize,
}

impl<'t> CharCounter<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            bytes: text.as_bytes(),
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Character offset of `target`; targets must be non-decreasing
    pub fn advance_to(&mut self, target: usize) -> usize {
        while self.byte_pos < target && self.byte_pos < self.bytes.len() {
            let byte = self.bytes[self.byte_pos];
            // count lead bytes only
            if (byte & 0x80) == 0 || (byte & 0xC0) == 0xC0 {
                self.char_pos += 1;
            }
            self.byte_pos += 1;
        }
        self.char_pos
    }

    pub fn span(&mut self, range: &Range<usize>) -> SourceSpan {
        let char_start = self.advance_to(range.start);
        let char_end = self.advance_to(range.end);
        SourceSpan {
            start: range.start,
            end: range.end,
            char_start,
            char_end,
        }
    }
}
