// frontend_movie_stream/src/fetch_state.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::api::{error::ApiError, movies::Movie};

/// User-facing texts for one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchMessages {
    pub operation: &'static str,
    pub empty: &'static str,
    pub failure: &'static str,
}

pub const HOME_MESSAGES: FetchMessages = FetchMessages {
    operation: "Fetching movies",
    empty: "There are currently no movies available",
    failure: "Error fetching movies",
};

pub const RECOMMENDED_MESSAGES: FetchMessages = FetchMessages {
    operation: "Fetching recommended movies",
    empty: "There are currently no recommended movies available",
    failure: "Error fetching recommended movies",
};

pub enum FetchAction {
    Started,
    Settled(Result<Vec<Movie>, ApiError>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState {
    pub items: Vec<Movie>,
    pub loading: bool,
    pub message: Option<String>,
    messages: FetchMessages,
}

/// What a list view should draw for a given state.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Message(&'a str),
    Cards(&'a [Movie]),
}

impl FetchState {
    pub fn new(messages: FetchMessages) -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            message: None,
            messages,
        }
    }

    pub fn view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if let Some(message) = self.message.as_deref() {
            ListView::Message(message)
        } else {
            ListView::Cards(&self.items)
        }
    }

    fn apply(&self, action: FetchAction) -> Self {
        match action {
            FetchAction::Started => Self::new(self.messages),
            FetchAction::Settled(Ok(items)) if items.is_empty() => Self {
                items,
                loading: false,
                message: Some(self.messages.empty.to_owned()),
                messages: self.messages,
            },
            FetchAction::Settled(Ok(items)) => Self {
                items,
                loading: false,
                message: None,
                messages: self.messages,
            },
            FetchAction::Settled(Err(_)) => Self {
                items: Vec::new(),
                loading: false,
                message: Some(self.messages.failure.to_owned()),
                messages: self.messages,
            },
        }
    }
}

impl Reducible for FetchState {
    type Action = FetchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
