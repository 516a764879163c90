//! In-memory stand-ins for the browser, shared by the unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use async_trait::async_trait;

use crate::{
    comment::{Alerts, CommentForm},
    modal::{OverlayHost, OverlayView},
    post::{ButtonState, PostPage},
    structs::{CommentFields, Multipart},
    transport::{ApiResponse, Transport},
    FeedError,
};

pub enum Reply {
    Status(u16, &'static str),
    Offline,
}

pub struct FakeTransport {
    replies: RefCell<VecDeque<Reply>>,
    multiparts: RefCell<Vec<(String, Multipart<&'static str>)>>,
    jsons: RefCell<Vec<(String, serde_json::Value)>>,
}

impl FakeTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            multiparts: RefCell::default(),
            jsons: RefCell::default(),
        }
    }

    pub fn multiparts(&self) -> Vec<(String, Multipart<&'static str>)> {
        self.multiparts.borrow().clone()
    }

    pub fn jsons(&self) -> Vec<(String, serde_json::Value)> {
        self.jsons.borrow().clone()
    }

    fn next(&self) -> Result<ApiResponse, FeedError> {
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Status(status, body)) => Ok(ApiResponse {
                status,
                body: body.to_owned(),
            }),
            Some(Reply::Offline) => Err(FeedError::Network("Failed to fetch".to_owned())),
            None => panic!("unexpected request"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    type Attachment = &'static str;

    async fn post_multipart(
        &self,
        url: &str,
        form: Multipart<&'static str>,
    ) -> Result<ApiResponse, FeedError> {
        self.multiparts.borrow_mut().push((url.to_owned(), form));
        self.next()
    }

    async fn post_json_value(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, FeedError> {
        self.jsons.borrow_mut().push((url.to_owned(), body));
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Button(ButtonState),
    Redirect(String),
    Reset,
}

#[derive(Default)]
pub struct FakePage {
    pub events: RefCell<Vec<PageEvent>>,
    pub redirect_fails: bool,
}

impl FakePage {
    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }
}

impl PostPage for FakePage {
    fn set_button(&self, state: ButtonState) {
        self.events.borrow_mut().push(PageEvent::Button(state));
    }

    fn redirect(&self, url: &str) -> Result<(), FeedError> {
        if self.redirect_fails {
            return Err(FeedError::Dom("location blocked".to_owned()));
        }
        self.events.borrow_mut().push(PageEvent::Redirect(url.to_owned()));
        Ok(())
    }

    fn reset_form(&self) {
        self.events.borrow_mut().push(PageEvent::Reset);
    }
}

pub struct FakeCommentForm {
    fields: RefCell<CommentFields>,
    appended: RefCell<Vec<(String, String)>>,
    pub section_missing: bool,
    pub unreadable: bool,
}

impl FakeCommentForm {
    pub fn new(fields: CommentFields) -> Self {
        Self {
            fields: RefCell::new(fields),
            appended: RefCell::default(),
            section_missing: false,
            unreadable: false,
        }
    }

    pub fn comment(&self) -> String {
        self.fields.borrow().comment.clone()
    }

    pub fn appended(&self) -> Vec<(String, String)> {
        self.appended.borrow().clone()
    }
}

impl CommentForm for FakeCommentForm {
    fn fields(&self) -> Result<CommentFields, FeedError> {
        if self.unreadable {
            return Err(FeedError::MissingElement("textarea[name=\"comment\"]".to_owned()));
        }
        Ok(self.fields.borrow().clone())
    }

    fn clear_comment(&self) {
        self.fields.borrow_mut().comment.clear();
    }

    fn append_to_comment_section(&self, post_id: &str, text: &str) -> Result<(), FeedError> {
        if self.section_missing {
            return Err(FeedError::MissingElement(crate::comment::comment_section_id(post_id)));
        }
        self.appended
            .borrow_mut()
            .push((post_id.to_owned(), text.to_owned()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeAlerts(RefCell<Vec<String>>);

impl FakeAlerts {
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Alerts for FakeAlerts {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}

/// Tracks mounted overlays by id, like nodes under `<body>`.
#[derive(Clone, Default)]
pub struct FakeHost {
    nodes: Rc<RefCell<Vec<(usize, String)>>>,
    next_id: Rc<Cell<usize>>,
    unmounts: Rc<Cell<usize>>,
    pub fail_mount: bool,
}

impl FakeHost {
    /// A host whose `mount` always fails.
    pub fn failing() -> Self {
        Self {
            fail_mount: true,
            ..Default::default()
        }
    }

    pub fn mounted_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn mounted_urls(&self) -> Vec<String> {
        self.nodes.borrow().iter().map(|(_, u)| u.clone()).collect()
    }

    pub fn unmount_calls(&self) -> usize {
        self.unmounts.get()
    }
}

impl OverlayHost for FakeHost {
    type Mounted = usize;

    fn mount(&self, view: &OverlayView) -> Result<usize, FeedError> {
        if self.fail_mount {
            return Err(FeedError::Dom("no body".to_owned()));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.nodes.borrow_mut().push((id, view.image_url.clone()));
        Ok(id)
    }

    fn unmount(&self, mounted: usize) {
        self.unmounts.set(self.unmounts.get() + 1);
        let mut nodes = self.nodes.borrow_mut();
        let before = nodes.len();
        nodes.retain(|(id, _)| *id != mounted);
        assert_eq!(before - 1, nodes.len(), "unmount removed the wrong number of nodes");
    }
}
