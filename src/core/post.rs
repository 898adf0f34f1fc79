//! Post model and the built-in sample feed

/// A single feed post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Stable post id
    pub id: u64,
    /// Label of whoever published the post
    pub source: String,
    /// Post body; may contain text in single quotes
    pub content: String,
}

impl Post {
    /// Create a post from borrowed parts
    pub fn new(id: u64, source: &str, content: &str) -> Self {
        Self {
            id,
            source: source.to_string(),
            content: content.to_string(),
        }
    }
}

/// The hard-coded demo feed. A real deployment would page posts in from a
/// verification backend instead.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "User 1",
            "Studies have shown that AI 'offers the promise of greater efficiency' \
             and I am so excited about it!",
        ),
        Post::new(
            2,
            "User 2",
            "WOW! OpenAI just said 'we expect all human jobs to be replaced by AI \
             in 5 years'. I am so scared.",
        ),
        Post::new(
            3,
            "User 3",
            "I just keep on talking and talking but I actually don't have a quote \
             in my post so nothing will happened.",
        ),
    ]
}

/// Filter posts by a query string, case-insensitively, over the source label
/// and the content. An empty or whitespace-only query keeps everything.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return posts.to_vec();
    }

    posts
        .iter()
        .filter(|post| {
            post.source.to_lowercase().contains(&query)
                || post.content.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
