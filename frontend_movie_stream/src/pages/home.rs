// frontend_movie_stream/src/pages/home.rs
use yew::prelude::*;

use crate::{
    api::movies::{fetch_movies, Movie},
    components::movies::Movies,
    context::use_public_client,
    fetch_state::{ListView, HOME_MESSAGES},
    hooks::use_movie_fetch::use_movie_fetch,
};

#[function_component(Home)]
pub fn home() -> Html {
    let client = use_public_client();
    let state = use_movie_fetch(HOME_MESSAGES, move || async move { fetch_movies(&client).await });

    render_list(state.view())
}

pub fn render_list(view: ListView<'_>) -> Html {
    match view {
        ListView::Loading => html! { <h2>{ "Loading..." }</h2> },
        ListView::Message(message) => html! {
            <Movies movies={Vec::<Movie>::new()} message={message.to_owned()} />
        },
        ListView::Cards(movies) => html! { <Movies movies={movies.to_vec()} /> },
    }
}
