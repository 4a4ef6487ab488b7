//! # Replies
//!
//! HTTP-style outcomes produced by a [`ResourceController`](crate::ResourceController).
//! Routing and transport live elsewhere; a reply is just a status plus a body that
//! serializes the way API clients expect:
//!
//! ```json
//! {"message": "Owner 3 deleted.", "status_code": 201}
//! ```

use crate::pagination::Page;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u16")]
pub enum Status {
    Ok,
    Created,
    NotFound,
    Conflict,
    Unprocessable,
    Unavailable,
}

impl Status {
    pub const fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::NotFound => 404,
            Status::Conflict => 409,
            Status::Unprocessable => 422,
            Status::Unavailable => 503,
        }
    }

    pub const fn is_success(self) -> bool {
        self.code() < 300
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body<T> {
    Page(Page<T>),
    Item(T),
    Message { message: String, status_code: u16 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply<T> {
    pub status: Status,
    pub body: Body<T>,
}

impl<T> Reply<T> {
    pub fn page(page: Page<T>) -> Self {
        Self {
            status: Status::Ok,
            body: Body::Page(page),
        }
    }

    pub fn item(item: T) -> Self {
        Self {
            status: Status::Ok,
            body: Body::Item(item),
        }
    }

    /// A message body; `status_code` always mirrors `status`.
    pub fn message(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Body::Message {
                message: message.into(),
                status_code: status.code(),
            },
        }
    }

    pub fn code(&self) -> u16 {
        self.status.code()
    }

    pub fn message_text(&self) -> Option<&str> {
        match &self.body {
            Body::Message { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn into_page(self) -> Option<Page<T>> {
        match self.body {
            Body::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self.body {
            Body::Item(item) => Some(item),
            _ => None,
        }
    }
}
