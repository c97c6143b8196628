//! Glossary auto-linker
//!
//! Rewrites rendered article HTML so that mentions of glossary terms
//! become links to their definition pages. The pass is bounded to the
//! `<article>` element, respects each term's per-page link cap, and
//! never touches text that already sits inside markup or an existing
//! anchor. Any failure leaves the page exactly as it was.

use std::collections::HashMap;

use regex::RegexBuilder;
use tracing::{debug, warn};

use crate::error::{Result, YatraError};

use super::registry::TermRegistry;
use super::LinkTerm;

/// Opening marker of the rewritable region
const ARTICLE_OPEN: &str = "<article";

/// Closing marker of the rewritable region
const ARTICLE_CLOSE: &str = "</article>";

/// CSS class applied to injected links
pub const GLOSSARY_LINK_CLASS: &str = "glossary-term";

/// Rewrite article HTML, linking glossary term mentions
///
/// Terms are processed in the order given; the registry supplies them
/// highest priority first. The pass is a no-op when the page has no
/// `<article>` region, and on any internal error the original HTML is
/// returned unchanged.
pub fn rewrite(html: &str, terms: &[LinkTerm]) -> String {
    match try_rewrite(html, terms) {
        Ok(rewritten) => rewritten,
        Err(e) => {
            warn!(error = %e, "auto-link rewrite failed, serving original HTML");
            html.to_string()
        }
    }
}

fn try_rewrite(html: &str, terms: &[LinkTerm]) -> Result<String> {
    if terms.is_empty() {
        return Ok(html.to_string());
    }

    // Bound the pass to the article element so navigation, sidebars and
    // footer stay untouched
    let Some(start) = html.find(ARTICLE_OPEN) else {
        return Ok(html.to_string());
    };
    let Some(close) = html[start..].find(ARTICLE_CLOSE).map(|i| start + i) else {
        return Ok(html.to_string());
    };
    let end = close + ARTICLE_CLOSE.len();

    let mut article = html[start..end].to_string();
    let mut ledger = LinkLedger::default();

    for term in terms {
        // A non-positive cap disables the term
        let cap = term.max_links_per_page.max(0) as usize;
        if cap == 0 {
            continue;
        }
        if ledger.count(&term.slug) >= cap {
            continue;
        }

        // Full name first, then the abbreviation
        for pattern in [term.name.as_str(), term.abbreviation.as_str()] {
            if pattern.trim().is_empty() {
                continue;
            }
            if ledger.count(&term.slug) >= cap {
                break;
            }
            article = link_pattern(&article, pattern, term, cap, &mut ledger)?;
        }
    }

    let mut rewritten = String::with_capacity(html.len() + article.len() - (end - start));
    rewritten.push_str(&html[..start]);
    rewritten.push_str(&article);
    rewritten.push_str(&html[end..]);
    Ok(rewritten)
}

/// Link occurrences of one pattern, up to the term's remaining budget
fn link_pattern(
    article: &str,
    pattern: &str,
    term: &LinkTerm,
    cap: usize,
    ledger: &mut LinkLedger,
) -> Result<String> {
    let regex = RegexBuilder::new(&regex::escape(pattern))
        .case_insensitive(true)
        .build()
        .map_err(|e| YatraError::InternalError {
            reason: format!("term pattern failed to compile: {}", e),
        })?;

    let protected = protected_spans(article);

    let mut out = String::with_capacity(article.len() + 128);
    let mut last_end = 0;
    let mut changed = false;

    for m in regex.find_iter(article) {
        if ledger.count(&term.slug) >= cap {
            break;
        }
        if overlaps_protected(&protected, m.start(), m.end()) {
            continue;
        }
        if !boundary_before(article, m.start()) || !boundary_after(article, m.end()) {
            continue;
        }

        out.push_str(&article[last_end..m.start()]);
        out.push_str(&build_anchor(&term.slug, m.as_str()));
        last_end = m.end();
        ledger.record(&term.slug);
        changed = true;
    }

    if !changed {
        return Ok(article.to_string());
    }
    out.push_str(&article[last_end..]);
    Ok(out)
}

/// Build the replacement anchor, preserving the matched text's case
fn build_anchor(slug: &str, matched: &str) -> String {
    format!(
        r#"<a href="/glossary/{}/" class="{}" title="View definition">{}</a>"#,
        slug, GLOSSARY_LINK_CLASS, matched
    )
}

/// Whether the character before `start` permits a whole-word match
///
/// Word characters reject the match; so does `<`, which would put the
/// match inside tag syntax.
fn boundary_before(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        Some(c) => !(c.is_alphanumeric() || c == '_' || c == '<'),
        None => true,
    }
}

/// Whether the character after `end` permits a whole-word match
fn boundary_after(text: &str, end: usize) -> bool {
    match text[end..].chars().next() {
        Some(c) => !(c.is_alphanumeric() || c == '_' || c == '>'),
        None => true,
    }
}

/// Byte ranges a match may not touch: markup between `<` and `>`, and
/// whole anchor elements including their link text
///
/// Scanning happens on an ASCII-lowercased shadow of the text, which
/// keeps byte offsets identical to the original.
fn protected_spans(text: &str) -> Vec<(usize, usize)> {
    let lower = text.to_ascii_lowercase();
    let mut spans = vec![];

    // Whole anchor elements, so existing link text is never relinked
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find("<a") {
        let open = pos + rel;
        let is_anchor = matches!(
            lower.as_bytes().get(open + 2),
            Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'>') | Some(b'/')
        );
        if !is_anchor {
            pos = open + 2;
            continue;
        }
        match lower[open..].find("</a>") {
            Some(close_rel) => {
                let close = open + close_rel + 4;
                spans.push((open, close));
                pos = close;
            }
            None => {
                // Unterminated anchor: protect through to the end
                spans.push((open, text.len()));
                break;
            }
        }
    }

    // Individual tags, so attribute values are never linked
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find('<') {
        let lt = pos + rel;
        match lower[lt..].find('>') {
            Some(gt_rel) => {
                let gt = lt + gt_rel + 1;
                spans.push((lt, gt));
                pos = gt;
            }
            None => {
                spans.push((lt, text.len()));
                break;
            }
        }
    }

    spans
}

fn overlaps_protected(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| start < e && end > s)
}

/// Per-page record of how many links each term has received
#[derive(Debug, Default)]
struct LinkLedger {
    counts: HashMap<String, usize>,
}

impl LinkLedger {
    fn count(&self, slug: &str) -> usize {
        self.counts.get(slug).copied().unwrap_or(0)
    }

    fn record(&mut self, slug: &str) {
        *self.counts.entry(slug.to_string()).or_insert(0) += 1;
    }
}

/// The full auto-link pipeline: registry-fed rewriting with graceful
/// degradation
///
/// Wraps a [`TermRegistry`] and applies [`rewrite`] with whatever terms
/// it can get. When the registry fails or has nothing to link, pages
/// pass through untouched.
pub struct GlossaryAutoLinker {
    registry: TermRegistry,
}

impl GlossaryAutoLinker {
    /// Create an auto-linker over the given registry
    pub fn new(registry: TermRegistry) -> Self {
        Self { registry }
    }

    /// Auto-link a rendered page, returning it unchanged when terms
    /// cannot be loaded
    pub fn auto_link(&self, html: &str) -> String {
        match self.registry.terms() {
            Ok(terms) if terms.is_empty() => html.to_string(),
            Ok(terms) => rewrite(html, &terms),
            Err(_) => {
                debug!("auto-link pass skipped for this render");
                html.to_string()
            }
        }
    }
}
