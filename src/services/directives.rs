// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Executive Partners

//! Crawler-directives provider.

use crate::models::robots::{CrawlerDirectives, Rule};

/// Canonical origin of the public site. Every absolute URL this crate emits
/// is derived from this one constant, so the access rules and the sitemap
/// location cannot drift apart.
pub const BASE_URL: &str = "https://www.execpartners.ch";

/// Build the crawler-directives record for the site.
///
/// Pure: no inputs, no I/O, identical output on every call. The API and
/// admin sections stay out of search indexes; everything else is open to
/// any crawler.
pub fn crawler_directives() -> CrawlerDirectives {
    CrawlerDirectives {
        rules: vec![Rule {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: vec!["/api/".to_string(), "/admin/".to_string()],
        }],
        sitemap: format!("{}/sitemap.xml", BASE_URL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identical_output_on_every_call() {
        assert_eq!(crawler_directives(), crawler_directives());
    }

    #[test]
    fn test_sitemap_url_derived_from_base_url() {
        let directives = crawler_directives();
        assert_eq!(directives.sitemap, format!("{}/sitemap.xml", BASE_URL));
        assert_eq!(
            directives.sitemap,
            "https://www.execpartners.ch/sitemap.xml"
        );
    }

    #[test]
    fn test_single_wildcard_rule() {
        let directives = crawler_directives();
        assert_eq!(directives.rules.len(), 1);

        let rule = &directives.rules[0];
        assert_eq!(rule.user_agent, "*");
        assert_eq!(rule.allow, vec!["/"]);

        // Order-independent: only the set of disallowed prefixes matters
        let disallowed: HashSet<&str> = rule.disallow.iter().map(String::as_str).collect();
        assert_eq!(disallowed, HashSet::from(["/api/", "/admin/"]));
    }
}
