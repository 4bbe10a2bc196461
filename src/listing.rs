//! Post listing assembly for index views.

use chrono::NaiveDate;

use crate::post::Post;

/// Post fields shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: Option<String>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug().to_string(),
            title: post.title().to_string(),
            date: post.date(),
            excerpt: post.excerpt().map(String::from),
        }
    }
}

/// Published posts, most recent first.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    posts: Vec<PostSummary>,
}

impl Listing {
    /// Builds the listing from loaded posts.
    ///
    /// Drafts are dropped. Remaining posts are sorted by date descending
    /// with a stable sort, so posts sharing a date keep their load order.
    pub fn assemble(posts: &[Post]) -> Self {
        let mut posts: Vec<PostSummary> = posts
            .iter()
            .filter(|post| !post.is_draft())
            .map(PostSummary::from)
            .collect();

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Self { posts }
    }

    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Splits posts into the two columns of the home page.
    pub fn columns(&self) -> (&[PostSummary], &[PostSummary]) {
        split_columns(&self.posts)
    }
}

/// Splits items into two columns, the first holding `ceil(len / 2)`.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}
