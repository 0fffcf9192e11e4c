use crate::types::{Comment, Votable};

/// The comments shown under one deal, kept ordered by descending score.
///
/// Ties keep their previous relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new(mut comments: Vec<Comment>) -> Self {
        sort_by_score(&mut comments);
        Self { comments }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn ids(&self) -> Vec<i64> {
        self.comments.iter().map(|c| c.id).collect()
    }

    pub fn get(&self, comment_id: i64) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Stores a new score for `comment_id` and restores the ordering.
    ///
    /// Returns `false` when the comment is not part of the thread.
    pub fn apply_score(&mut self, comment_id: i64, score: i64) -> bool {
        match self.comments.iter_mut().find(|c| c.id == comment_id) {
            Some(comment) => {
                comment.set_score(score);
                sort_by_score(&mut self.comments);
                true
            }
            None => false,
        }
    }
}

fn sort_by_score(comments: &mut [Comment]) {
    comments.sort_by(|a, b| b.vote_score.cmp(&a.vote_score));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, vote_score: i64) -> Comment {
        Comment {
            id,
            deal_id: Some(1),
            text: format!("comment {id}"),
            vote_score,
        }
    }

    #[test]
    fn test_new_thread_is_sorted() {
        let thread = CommentThread::new(vec![comment(1, 0), comment(2, 5), comment(3, 2)]);
        assert_eq!(thread.ids(), vec![2, 3, 1]);
    }

    #[test]
    fn test_apply_score_resorts() {
        let mut thread = CommentThread::new(vec![comment(1, 3), comment(2, 2)]);
        assert!(thread.apply_score(2, 4));
        assert_eq!(thread.ids(), vec![2, 1]);
        assert_eq!(thread.get(2).map(|c| c.vote_score), Some(4));
    }

    #[test]
    fn test_ties_keep_order() {
        let mut thread = CommentThread::new(vec![comment(1, 2), comment(2, 2), comment(3, 1)]);
        assert!(thread.apply_score(3, 2));
        assert_eq!(thread.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_apply_score_unknown_comment() {
        let mut thread = CommentThread::new(vec![comment(1, 0)]);
        assert!(!thread.apply_score(99, 10));
        assert_eq!(thread.ids(), vec![1]);
    }
}
