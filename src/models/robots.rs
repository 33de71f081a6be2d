// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Executive Partners

//! Crawler-directives record and its robots.txt wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access rule for one crawler user agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// User agent the rule applies to; "*" matches all crawlers
    pub user_agent: String,
    /// Path prefixes the agent may fetch
    pub allow: Vec<String>,
    /// Path prefixes the agent must not fetch
    pub disallow: Vec<String>,
}

/// Crawler-directives document for the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerDirectives {
    pub rules: Vec<Rule>,
    /// Absolute URL of the sitemap document
    pub sitemap: String,
}

// robots.txt wire format: one User-agent line per rule followed by its Allow
// and Disallow lines, a blank line after each rule block, then the Sitemap
// line. Crawlers treat the blank line as the end of a rule block, so it is
// part of the format, not cosmetic.
impl fmt::Display for CrawlerDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "User-agent: {}", rule.user_agent)?;
            for path in &rule.allow {
                writeln!(f, "Allow: {}", path)?;
            }
            for path in &rule.disallow {
                writeln!(f, "Disallow: {}", path)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Sitemap: {}", self.sitemap)
    }
}
