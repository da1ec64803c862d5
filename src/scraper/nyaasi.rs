//! nyaa.si search page access
//!
//! The results page is turned into plain rows of cells first, and candidates
//! are read from those rows by column position:
//! - td[1]: title anchor (plus an optional `.comments` anchor to ignore)
//! - td[2]: `.torrent` download link, then the magnet link
//! - td[4]: publish date text
//! - td[5]: seeders

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use super::search::{FetchedPage, PageFetcher, SearchError};
use crate::models::RawCandidate;

pub const DEFAULT_BASE_URL: &str = "https://nyaa.si";

/// No remake/trusted filtering
const FILTER: &str = "0";
/// Anime - English-translated
const ANIME_CATEGORY: &str = "1_2";
const SORT_FIELD: &str = "seeders";
const SORT_ORDER: &str = "desc";

const NAME_COLUMN: usize = 1;
const LINKS_COLUMN: usize = 2;
const DATE_COLUMN: usize = 4;
const SEEDERS_COLUMN: usize = 5;

/// Builds the search URL, most seeded releases first
pub fn search_url(base_url: &str, term: &str) -> String {
    format!(
        "{}/?f={}&c={}&q={}&s={}&o={}",
        base_url.trim_end_matches('/'),
        FILTER,
        ANIME_CATEGORY,
        urlencoding::encode(term),
        SORT_FIELD,
        SORT_ORDER
    )
}

/// An `<a>` inside a cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingAnchor {
    pub href: Option<String>,
    pub title: Option<String>,
    pub classes: Vec<String>,
}

impl ListingAnchor {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A `<td>`: its trimmed text and the anchors it contains
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingCell {
    pub text: String,
    pub anchors: Vec<ListingAnchor>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingRow {
    pub cells: Vec<ListingCell>,
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Selector(format!("{}: {:?}", css, e)))
}

/// Reads every result row of a search page into cells, in document order
pub fn parse_listing_rows(html: &str) -> Result<Vec<ListingRow>, SearchError> {
    let document = Html::parse_document(html);

    let selector_row = selector(".torrent-list tbody tr")?;
    let selector_cell = selector("td")?;
    let selector_anchor = selector("a")?;

    let rows = document
        .select(&selector_row)
        .map(|tr| ListingRow {
            cells: tr
                .select(&selector_cell)
                .map(|td| read_cell(td, &selector_anchor))
                .collect(),
        })
        .collect();

    Ok(rows)
}

fn read_cell(td: ElementRef<'_>, selector_anchor: &Selector) -> ListingCell {
    let anchors = td
        .select(selector_anchor)
        .map(|a| {
            let element = a.value();
            ListingAnchor {
                href: element.attr("href").map(str::to_string),
                title: element.attr("title").map(str::to_string),
                classes: element.classes().map(str::to_string).collect(),
            }
        })
        .collect();

    ListingCell {
        text: td.text().collect::<String>().trim().to_string(),
        anchors,
    }
}

/// Turns one row into a candidate; missing cells or attributes become empty values
pub fn extract_candidate(row: &ListingRow) -> RawCandidate {
    let cell = |index: usize| row.cells.get(index);

    let title_anchor = cell(NAME_COLUMN)
        .and_then(|c| c.anchors.iter().find(|a| !a.has_class("comments")));

    let magnet_link = cell(LINKS_COLUMN)
        .and_then(|c| c.anchors.get(1))
        .and_then(|a| a.href.clone());

    RawCandidate {
        title: title_anchor
            .and_then(|a| a.title.clone())
            .unwrap_or_default(),
        detail_link: title_anchor.and_then(|a| a.href.clone()),
        magnet_link,
        published_text: cell(DATE_COLUMN).map(|c| c.text.clone()).unwrap_or_default(),
        seeders_text: cell(SEEDERS_COLUMN).map(|c| c.text.clone()).unwrap_or_default(),
    }
}

pub fn extract_candidates(rows: &[ListingRow]) -> Vec<RawCandidate> {
    rows.iter().map(extract_candidate).collect()
}

/// Fetches pages over the shared HTTP client
#[derive(Debug, Clone, Copy, Default)]
pub struct NyaaFetcher;

#[async_trait]
impl PageFetcher for NyaaFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, SearchError> {
        let response = super::http_client()
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Body(e.to_string()))?;

        Ok(FetchedPage { status, body })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Three result rows: a complete one, one without a comments anchor,
    /// and one with its link and date cells missing
    pub const SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="table-responsive">
<table class="table table-bordered table-hover table-striped torrent-list">
  <thead>
    <tr>
      <th>Category</th><th colspan="2">Name</th><th>Link</th><th>Size</th>
      <th>Date</th><th>Seeders</th><th>Leechers</th><th>Completed</th>
    </tr>
  </thead>
  <tbody>
    <tr class="success">
      <td><a href="/?c=1_2" title="Anime - English-translated"><img src="/static/img/icons/nyaa/1_2.png" class="category-icon"></a></td>
      <td colspan="2">
        <a href="/view/1900001#comments" class="comments" title="3 comments"><i class="fa fa-comments-o"></i>3</a>
        <a href="/view/1900001" title="[SubsPlease] Frieren - 12 (1080p) [ABCDEF].mkv">[SubsPlease] Frieren - 12 (1080p) [ABCDEF].mkv</a>
      </td>
      <td class="text-center">
        <a href="/download/1900001.torrent"><i class="fa fa-fw fa-download"></i></a>
        <a href="magnet:?xt=urn:btih:aaaa&amp;dn=Frieren"><i class="fa fa-fw fa-magnet"></i></a>
      </td>
      <td class="text-center">1.4 GiB</td>
      <td class="text-center" data-timestamp="1760000000"> 2026-10-10 14:49 </td>
      <td class="text-center">1520</td>
      <td class="text-center">31</td>
      <td class="text-center">9000</td>
    </tr>
    <tr class="default">
      <td><a href="/?c=1_2" title="Anime - English-translated"></a></td>
      <td colspan="2">
        <a href="/view/1900002" title="[Erai-raws] Frieren - 11 [720p][Multiple Subtitle]">[Erai-raws] Frieren - 11 [720p][Multiple Subtitle]</a>
      </td>
      <td class="text-center">
        <a href="/download/1900002.torrent"><i class="fa fa-fw fa-download"></i></a>
        <a href="magnet:?xt=urn:btih:bbbb"><i class="fa fa-fw fa-magnet"></i></a>
      </td>
      <td class="text-center">700 MiB</td>
      <td class="text-center">2026-10-03 14:30</td>
      <td class="text-center">800</td>
      <td class="text-center">12</td>
      <td class="text-center">4000</td>
    </tr>
    <tr class="default">
      <td><a href="/?c=1_2" title="Anime - English-translated"></a></td>
      <td colspan="2">
        <a href="/view/1900003" title="[Broken] Frieren - 12 [480p]">[Broken] Frieren - 12 [480p]</a>
      </td>
    </tr>
  </tbody>
</table>
</div>
</body>
</html>"#;
}
