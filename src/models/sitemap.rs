// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Executive Partners

//! Sitemap record and its sitemaps.org 0.9 XML format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected change cadence of a page, per the sitemaps.org protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

// The protocol wants the lowercase token, not the Debug form "Weekly".
impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        };
        write!(f, "{}", token)
    }
}

/// One indexable page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Absolute URL of the page
    pub loc: String,
    pub changefreq: ChangeFrequency,
    /// Relative crawl priority in [0.0, 1.0]
    pub priority: f32,
}

/// Sitemap document listing the site's indexable URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl fmt::Display for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#
        )?;
        for entry in &self.entries {
            writeln!(f, "  <url>")?;
            writeln!(f, "    <loc>{}</loc>", entry.loc)?;
            writeln!(f, "    <changefreq>{}</changefreq>", entry.changefreq)?;
            writeln!(f, "    <priority>{:.1}</priority>", entry.priority)?;
            writeln!(f, "  </url>")?;
        }
        writeln!(f, "</urlset>")
    }
}
