// frontend_movie_stream/src/pages/recommended.rs
use yew::prelude::*;

use crate::{
    api::movies::fetch_recommended_movies,
    context::use_private_client,
    fetch_state::RECOMMENDED_MESSAGES,
    hooks::use_movie_fetch::use_movie_fetch,
    pages::home::render_list,
};

#[function_component(Recommended)]
pub fn recommended() -> Html {
    let client = use_private_client();
    let state = use_movie_fetch(RECOMMENDED_MESSAGES, move || async move {
        fetch_recommended_movies(&client).await
    });

    html! {
        <section>
            <h1 class="text-center mt-3">{ "Recommended for you" }</h1>
            { render_list(state.view()) }
        </section>
    }
}
