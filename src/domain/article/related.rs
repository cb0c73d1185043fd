// src/domain/article/related.rs
use crate::domain::article::entity::Article;

/// Default number of related articles shown under an article.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Same-category siblings of `current`, in the order of `all`, capped at `limit`.
pub fn related<'a>(all: &'a [Article], current: &Article, limit: usize) -> Vec<&'a Article> {
    all.iter()
        .filter(|candidate| candidate.category == current.category && candidate.id != current.id)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleBody, ArticleId, ArticleSlug, ArticleTitle, AuthorName, CoverImage,
    };
    use chrono::Utc;

    fn article(id: i64, category: &str) -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(format!("artikel {id}")).unwrap(),
            slug: ArticleSlug::new(format!("artikel-{id}")).unwrap(),
            body: ArticleBody::new("<p>x</p>").unwrap(),
            summary: String::new(),
            image: CoverImage::None,
            category: category.into(),
            author: AuthorName::default(),
            published: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn never_includes_current_and_caps_at_limit() {
        let all: Vec<Article> = (1..=11).map(|i| article(i, "Bisnis")).collect();
        let current = &all[4];
        let picked = related(&all, current, DEFAULT_RELATED_LIMIT);
        let ids: Vec<i64> = picked.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filters_by_category_preserving_order() {
        let all = vec![
            article(1, "Desain"),
            article(2, "Bisnis"),
            article(3, "Desain"),
            article(4, "Desain"),
        ];
        let picked = related(&all, &all[3], 3);
        let ids: Vec<i64> = picked.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_when_no_siblings() {
        let all = vec![article(1, "Opini"), article(2, "Sosial")];
        assert!(related(&all, &all[0], 3).is_empty());
    }
}
