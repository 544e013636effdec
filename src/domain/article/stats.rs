// src/domain/article/stats.rs
use crate::domain::article::entity::Article;

/// Engagement counters summed over a set of articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementTotals {
    pub articles: u64,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
}

impl EngagementTotals {
    pub fn from_articles<'a, I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        articles
            .into_iter()
            .fold(Self::default(), |mut acc, article| {
                acc.articles += 1;
                acc.views += article.views;
                acc.likes += article.likes;
                acc.comments += article.comments;
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{
        ArticleContent, ArticleId, ArticleStatus, ArticleTags, ArticleTitle, ReadTime,
    };
    use crate::domain::user::UserId;
    use chrono::Utc;

    fn with_counters(id: i64, views: i64, likes: i64, comments: i64) -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new("t").unwrap(),
            content: ArticleContent::new("c").unwrap(),
            excerpt: None,
            status: ArticleStatus::Published,
            published_at: Some(now),
            read_time: ReadTime::from_text("c"),
            tags: ArticleTags::default(),
            author_id: UserId::new(1).unwrap(),
            views,
            likes,
            comments,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn sums_counters() {
        let articles = [
            with_counters(1, 10, 1, 4),
            with_counters(2, 0, 2, 0),
            with_counters(3, 5, 0, 1),
        ];
        let totals = EngagementTotals::from_articles(&articles);
        assert_eq!(totals.articles, 3);
        assert_eq!(totals.views, 15);
        assert_eq!(totals.likes, 3);
        assert_eq!(totals.comments, 5);
    }

    #[test]
    fn empty_set_is_zero() {
        assert_eq!(EngagementTotals::from_articles(&[]), EngagementTotals::default());
    }
}
