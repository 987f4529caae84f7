//! Query/Filter Pipeline for article listings.
//!
//! Pure functions over a borrowed slice: the input is never reordered or
//! mutated, and every call returns a fresh `Vec`, so the same collection can
//! be queried repeatedly with different specs.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

use crate::models::{Article, ArticleCategory};

/// SortOrder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortOrder {
    /// Newest publish date first.
    #[default]
    Latest,
    /// Highest view count first.
    Popular,
    /// Oldest publish date first.
    Oldest,
}

/// FilterSpec
///
/// The query parameters of a news listing request (`GET /articles`). Built per
/// request and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, TS, ToSchema)]
#[into_params(parameter_in = Query)]
#[ts(export)]
pub struct FilterSpec {
    /// Case-insensitive text matched against title, content and tags.
    #[serde(default)]
    pub query: Option<String>,
    /// Category slug, e.g. `clubs-culture`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl FilterSpec {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// The category the slug resolves to. An unknown slug resolves to nothing
    /// and the listing is not narrowed by category.
    pub fn resolved_category(&self) -> Option<ArticleCategory> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .and_then(ArticleCategory::from_slug)
    }
}

fn matches_query(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || article.content.to_lowercase().contains(needle)
        || article.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// filter
///
/// 1. Keep articles whose title, content or any tag contains the trimmed query
///    (case-insensitive); an empty query keeps everything.
/// 2. Keep articles in the category resolved from the slug, if any.
/// 3. Sort by the requested order. The sort is stable: ties keep their input
///    order.
pub fn filter(records: &[Article], spec: &FilterSpec) -> Vec<Article> {
    let needle = spec
        .query
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());
    let category = spec.resolved_category();

    let mut out: Vec<Article> = records
        .iter()
        .filter(|a| needle.as_deref().is_none_or(|n| matches_query(a, n)))
        .filter(|a| category.is_none_or(|c| a.category == c))
        .cloned()
        .collect();

    match spec.sort {
        SortOrder::Latest => out.sort_by_key(|a| Reverse(a.publish_date)),
        SortOrder::Oldest => out.sort_by_key(|a| a.publish_date),
        SortOrder::Popular => out.sort_by_key(|a| Reverse(a.views)),
    }

    out
}

/// The `limit` most viewed articles.
pub fn popular(records: &[Article], limit: usize) -> Vec<Article> {
    let mut out = filter(records, &FilterSpec::with_sort(SortOrder::Popular));
    out.truncate(limit);
    out
}

/// Editors' picks: the first `limit` featured articles in input order.
pub fn featured(records: &[Article], limit: usize) -> Vec<Article> {
    records
        .iter()
        .filter(|a| a.featured)
        .take(limit)
        .cloned()
        .collect()
}

/// Up to `limit` other articles from the same category as `article`, in input
/// order.
pub fn related(records: &[Article], article: &Article, limit: usize) -> Vec<Article> {
    records
        .iter()
        .filter(|a| a.id != article.id && a.category == article.category)
        .take(limit)
        .cloned()
        .collect()
}
