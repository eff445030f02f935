/// Line comments.
pub struct CommentSyntax;

impl CommentSyntax {
    pub const OPEN: char = '%';
    /// The line break is part of the comment.
    pub const CLOSE: char = '\n';
}
