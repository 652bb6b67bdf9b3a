//! Web page scanner.

use std::sync::OnceLock;
use std::time::Duration;

use log::warn;
use regex::Regex;
use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::error::{Error, Result};
use crate::model::{ExtractionResult, Failure};

/// Fixed browser User-Agent sent with every fetch.
///
/// Some servers reject requests with default or empty agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Options for web scanning.
#[derive(Debug, Clone)]
pub struct WebScanOptions {
    /// User-Agent header sent with the request.
    pub user_agent: String,

    /// Request deadline. `None` (the default) means no internally enforced
    /// timeout; a caller requiring bounded latency sets this.
    pub timeout: Option<Duration>,
}

impl WebScanOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for WebScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches an HTTP resource and linearizes its visible text.
///
/// One unauthenticated GET per call; no cookies, sessions, or crawling.
/// `<script>` and `<style>` subtrees are dropped entirely, the remaining
/// text nodes are joined with line breaks, and column-like gaps (runs of
/// two-or-more spaces) are split into separate output lines.
pub struct WebPageScanner {
    options: WebScanOptions,
}

impl WebPageScanner {
    /// Create a scanner with default options.
    pub fn new() -> Self {
        Self::with_options(WebScanOptions::default())
    }

    /// Create a scanner with the given options.
    pub fn with_options(options: WebScanOptions) -> Self {
        Self { options }
    }

    /// Fetch `url` and extract its visible text.
    ///
    /// Never panics and never returns an error: network failures,
    /// non-success statuses, and timeouts degrade to an empty string with
    /// the failure recorded.
    pub fn extract(&self, url: &str) -> ExtractionResult {
        match self.try_extract(url) {
            Ok(text) => ExtractionResult::ok(text),
            Err(e) => {
                warn!("web extraction failed for {}: {}", url, e);
                ExtractionResult::degraded(String::new(), Failure::from(&e))
            }
        }
    }

    fn try_extract(&self, url: &str) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&self.options.user_agent)
            .timeout(self.options.timeout)
            .build()?;

        let response = client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        // Force UTF-8 regardless of the server-declared charset; lossy
        // decoding defends against misconfigured servers.
        let body = response.bytes()?;
        let html = String::from_utf8_lossy(&body);

        Ok(crate::scan::nfc(&linearize_html(&html)))
    }
}

impl Default for WebPageScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Linearize an HTML document into cleaned text, one phrase per line.
///
/// Text nested inside `<script>` or `<style>` elements is excluded at any
/// nesting depth.
pub fn linearize_html(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    static COLUMN_GAP: OnceLock<Regex> = OnceLock::new();
    let gap = COLUMN_GAP.get_or_init(|| Regex::new(r" {2,}").expect("valid regex"));

    let mut phrases = Vec::new();
    for line in raw.lines() {
        for phrase in gap.split(line.trim()) {
            let phrase = phrase.trim();
            if !phrase.is_empty() {
                phrases.push(phrase);
            }
        }
    }
    phrases.join("\n")
}

/// Append the text content of a node's subtree, skipping script/style.
fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Element(el) => {
                let name = el.name();
                if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                    continue;
                }
                collect_text(child, out);
            }
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push('\n');
            }
            _ => {}
        }
    }
}
