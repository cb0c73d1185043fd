// src/domain/article/listing.rs
use crate::domain::article::entity::Article;

/// Catalog query: free-text term, optional exact category and a 1-based page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub term: String,
    pub category: String,
    pub page: u32,
    pub page_size: u32,
}

impl CatalogQuery {
    pub fn new(term: impl Into<String>, category: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
            page,
            page_size,
        }
    }

    /// Both predicates ANDed. Empty term and empty category match everything.
    pub fn matches(&self, article: &Article) -> bool {
        self.matches_term(article) && self.matches_category(article)
    }

    fn matches_term(&self, article: &Article) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let needle = self.term.to_lowercase();
        article.title.as_str().to_lowercase().contains(&needle)
            || article.summary.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, article: &Article) -> bool {
        self.category.is_empty() || article.category == self.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> CatalogPage<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CatalogPage<U> {
        CatalogPage {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

/// Filter and paginate an already published, newest-first article list.
///
/// The input order is kept as is. An empty match set yields zero pages, and
/// any page outside `1..=total_pages` (page 0 included) yields an empty slice
/// rather than being clamped. A zero page size is treated as an empty result.
pub fn paginate(articles: &[Article], query: &CatalogQuery) -> CatalogPage<Article> {
    let matches: Vec<&Article> = articles.iter().filter(|a| query.matches(a)).collect();
    let total = matches.len() as u64;
    let page_size = u64::from(query.page_size);

    let total_pages = if page_size == 0 {
        0
    } else {
        u32::try_from(total.div_ceil(page_size)).unwrap_or(u32::MAX)
    };

    let items = if query.page == 0 || query.page > total_pages {
        Vec::new()
    } else {
        let start = (u64::from(query.page) - 1) * page_size;
        matches
            .into_iter()
            .skip(usize::try_from(start).unwrap_or(usize::MAX))
            .take(query.page_size as usize)
            .cloned()
            .collect()
    };

    CatalogPage {
        items,
        total_pages,
        page: query.page,
        page_size: query.page_size,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleBody, ArticleId, ArticleSlug, ArticleTitle, AuthorName, CoverImage,
    };
    use chrono::Utc;

    fn article(id: i64, title: &str, summary: &str, category: &str) -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            slug: ArticleSlug::new(format!("a-{id}")).unwrap(),
            body: ArticleBody::new("<p>x</p>").unwrap(),
            summary: summary.into(),
            image: CoverImage::None,
            category: category.into(),
            author: AuthorName::default(),
            published: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn ids(page: &CatalogPage<Article>) -> Vec<i64> {
        page.items.iter().map(|a| a.id.0).collect()
    }

    fn fixture() -> Vec<Article> {
        vec![
            article(1, "Belajar Rust", "bahasa sistem", "Teknologi"),
            article(2, "Pasar Modal", "investasi TEKNOLOGI hijau", "Bisnis"),
            article(3, "Desain Minimalis", "tren visual", "Desain"),
            article(4, "Startup Teknologi", "cerita pendiri", "Bisnis"),
        ]
    }

    #[test]
    fn term_matches_title_or_summary_case_insensitively() {
        let page = paginate(&fixture(), &CatalogQuery::new("teknologi", "", 1, 10));
        assert_eq!(ids(&page), vec![2, 4]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_term() {
        let all = fixture();
        let page = paginate(&all, &CatalogQuery::new("teknologi ", "", 1, 10));
        assert_eq!(ids(&page), vec![2]);

        let page = paginate(&all, &CatalogQuery::new(" teknologi ", "", 1, 10));
        assert_eq!(ids(&page), vec![2]);

        let page = paginate(&all, &CatalogQuery::new(" ", "", 1, 10));
        assert_eq!(ids(&page), vec![1, 2, 3, 4]);
    }

    #[test]
    fn category_is_exact_and_anded_with_term() {
        let all = fixture();
        let page = paginate(&all, &CatalogQuery::new("", "Bisnis", 1, 10));
        assert_eq!(ids(&page), vec![2, 4]);

        let page = paginate(&all, &CatalogQuery::new("startup", "Bisnis", 1, 10));
        assert_eq!(ids(&page), vec![4]);

        let page = paginate(&all, &CatalogQuery::new("", "bisnis", 1, 10));
        assert!(page.items.is_empty());
    }

    #[test]
    fn empty_query_returns_everything_in_input_order() {
        let page = paginate(&fixture(), &CatalogQuery::new("", "", 1, 10));
        assert_eq!(ids(&page), vec![1, 2, 3, 4]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn total_pages_is_ceiling_of_matches() {
        let all: Vec<Article> = (1..=13)
            .map(|i| article(i, &format!("judul {i}"), "", "Opini"))
            .collect();
        let page = paginate(&all, &CatalogQuery::new("", "", 3, 6));
        assert_eq!(page.total_pages, 3);
        assert_eq!(ids(&page), vec![13]);

        let page = paginate(&all, &CatalogQuery::new("", "", 2, 6));
        assert_eq!(ids(&page), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn empty_match_set_has_zero_pages() {
        let page = paginate(&fixture(), &CatalogQuery::new("tidak ada", "", 1, 6));
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn out_of_range_pages_are_empty_not_clamped() {
        let all = fixture();
        assert!(paginate(&all, &CatalogQuery::new("", "", 2, 6)).items.is_empty());
        assert!(paginate(&all, &CatalogQuery::new("", "", 0, 6)).items.is_empty());
    }

    #[test]
    fn is_deterministic() {
        let all = fixture();
        let query = CatalogQuery::new("e", "", 1, 2);
        assert_eq!(ids(&paginate(&all, &query)), ids(&paginate(&all, &query)));
    }
}
