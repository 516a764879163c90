use serde::{Deserialize, Serialize};

use crate::{trimmed, FeedError};

/// A new feed post as read from the post form.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSubmission<A> {
    pub user_id: String,
    pub display_name: String,
    pub title: String,
    pub body: String,
    pub file: Option<A>,
}

impl<A> PostSubmission<A> {
    // field names are the ones the API reads from the multipart body
    pub fn into_multipart(self) -> Multipart<A> {
        Multipart {
            fields: vec![
                ("user_id", self.user_id),
                ("nome", self.display_name),
                ("titulo", self.title),
                ("post", self.body),
            ],
            file: self.file.map(|f| ("file", f)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Multipart<A> {
    pub fields: Vec<(&'static str, String)>,
    pub file: Option<(&'static str, A)>,
}

impl<A> Multipart<A> {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn part_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .map(|(n, _)| *n)
            .chain(self.file.as_ref().map(|(n, _)| *n))
            .collect()
    }
}

/// Raw values of a comment form, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFields {
    pub post_id: String,
    pub user_id: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSubmission {
    pub post_id: String,
    pub user_id: String,
    pub comment: String,
}

impl CommentSubmission {
    pub fn new(fields: &CommentFields) -> Result<Self, FeedError> {
        let comment = trimmed(&fields.comment);
        if comment.is_empty() {
            return Err(FeedError::EmptyComment);
        }
        Ok(Self {
            post_id: trimmed(&fields.post_id),
            user_id: trimmed(&fields.user_id),
            comment,
        })
    }

    pub fn body(&self) -> CommentBody<'_> {
        CommentBody {
            comment: &self.comment,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct CommentBody<'a> {
    pub comment: &'a str,
}

/// Body of a successful create-post response. Nothing downstream needs it, so
/// every field is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CreatedPost {
    pub status_code: Option<u16>,
    pub detail: Option<String>,
    pub post: Option<PostRef>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PostRef {
    pub id: Option<i64>,
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(file: Option<&'static str>) -> PostSubmission<&'static str> {
        PostSubmission {
            user_id: "7".to_owned(),
            display_name: "Ana".to_owned(),
            title: "Hello".to_owned(),
            body: "First post".to_owned(),
            file,
        }
    }

    #[test]
    fn multipart_carries_form_fields_in_order() {
        let form = submission(Some("cat.png")).into_multipart();
        assert_eq!(form.part_names(), vec!["user_id", "nome", "titulo", "post", "file"]);
        assert_eq!(form.field("nome"), Some("Ana"));
        assert_eq!(form.file, Some(("file", "cat.png")));
    }

    #[test]
    fn multipart_without_file_has_no_file_part() {
        let form = submission(None).into_multipart();
        assert_eq!(form.part_names(), vec!["user_id", "nome", "titulo", "post"]);
        assert!(form.file.is_none());
    }

    #[test]
    fn comment_is_trimmed_and_blank_rejected() {
        let ok = CommentSubmission::new(&CommentFields {
            post_id: " 3 ".to_owned(),
            user_id: "9\n".to_owned(),
            comment: "  nice  ".to_owned(),
        })
        .unwrap();
        assert_eq!(ok.post_id, "3");
        assert_eq!(ok.user_id, "9");
        assert_eq!(ok.comment, "nice");
        assert_eq!(
            serde_json::to_string(&ok.body()).unwrap(),
            r#"{"comment":"nice"}"#
        );

        let blank = CommentSubmission::new(&CommentFields {
            comment: " \t ".to_owned(),
            ..Default::default()
        });
        assert_eq!(blank, Err(FeedError::EmptyComment));
    }

    #[test]
    fn created_post_tolerates_partial_bodies() {
        let full: CreatedPost = serde_json::from_str(
            r#"{"status_code":201,"detail":"Post criado com sucesso.","post":{"id":4,"title":"Hi"}}"#,
        )
        .unwrap();
        assert_eq!(full.post.and_then(|p| p.id), Some(4));

        let empty: CreatedPost = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CreatedPost::default());
    }
}
