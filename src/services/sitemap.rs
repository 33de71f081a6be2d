// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Executive Partners

//! Sitemap provider.

use crate::models::sitemap::{ChangeFrequency, Sitemap, SitemapEntry};
use crate::services::directives::BASE_URL;

/// Public site sections, root first. Paths only; `sitemap()` joins them onto
/// [`BASE_URL`].
const SITE_PATHS: &[(&str, ChangeFrequency, f32)] = &[
    ("/", ChangeFrequency::Weekly, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/services", ChangeFrequency::Monthly, 0.8),
    ("/candidates", ChangeFrequency::Weekly, 0.7),
    ("/employers", ChangeFrequency::Monthly, 0.7),
    ("/insights", ChangeFrequency::Weekly, 0.6),
    ("/contact", ChangeFrequency::Yearly, 0.5),
];

/// Build the sitemap record for the site.
///
/// Pure, like [`crate::services::directives::crawler_directives`]: no inputs,
/// no I/O, identical output on every call.
pub fn sitemap() -> Sitemap {
    Sitemap {
        entries: SITE_PATHS
            .iter()
            .map(|&(path, changefreq, priority)| SitemapEntry {
                loc: format!("{}{}", BASE_URL, path),
                changefreq,
                priority,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directives::crawler_directives;

    #[test]
    fn test_identical_output_on_every_call() {
        assert_eq!(sitemap(), sitemap());
    }

    #[test]
    fn test_root_page_first_with_top_priority() {
        let sitemap = sitemap();
        let root = &sitemap.entries[0];
        assert_eq!(root.loc, "https://www.execpartners.ch/");
        assert_eq!(root.priority, 1.0);
    }

    #[test]
    fn test_all_locs_absolute_under_base_url() {
        for entry in sitemap().entries {
            assert!(
                entry.loc.starts_with(BASE_URL),
                "{} is not under {}",
                entry.loc,
                BASE_URL
            );
        }
    }

    #[test]
    fn test_priorities_within_protocol_range() {
        for entry in sitemap().entries {
            assert!((0.0..=1.0).contains(&entry.priority), "{}", entry.loc);
        }
    }

    #[test]
    fn test_no_entry_under_disallowed_prefix() {
        let disallowed = &crawler_directives().rules[0].disallow;
        for entry in sitemap().entries {
            let path = &entry.loc[BASE_URL.len()..];
            for prefix in disallowed {
                assert!(
                    !path.starts_with(prefix.as_str()),
                    "{} is listed but disallowed by {}",
                    entry.loc,
                    prefix
                );
            }
        }
    }
}
