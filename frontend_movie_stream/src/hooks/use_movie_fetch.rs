// frontend_movie_stream/src/hooks/use_movie_fetch.rs
use std::future::Future;

use gloo::console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{error::ApiError, movies::Movie};
use crate::fetch_state::{FetchAction, FetchMessages, FetchState};

/// Runs `fetch` once per mount and tracks it through loading, success, empty and error.
#[hook]
pub fn use_movie_fetch<F, Fut>(messages: FetchMessages, fetch: F) -> UseReducerHandle<FetchState>
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<Movie>, ApiError>> + 'static,
{
    let state = use_reducer(move || FetchState::new(messages));

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(FetchAction::Started);
            spawn_local(async move {
                let outcome = fetch().await;
                if let Err(e) = &outcome {
                    error!(format!("{}: {e}", messages.operation));
                }
                // dropped by yew if the view is gone by now
                dispatcher.dispatch(FetchAction::Settled(outcome));
            });
            || ()
        });
    }

    state
}
