// frontend_movie_stream/src/components/movies.rs
use yew::prelude::*;

use crate::api::movies::Movie as MovieData;
use crate::components::movie::Movie;

#[derive(Properties, PartialEq)]
pub struct MoviesProps {
    pub movies: Vec<MovieData>,
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Movies)]
pub fn movies(props: &MoviesProps) -> Html {
    if let Some(message) = props.message.as_ref() {
        return html! {
            <div class="container mt-4">
                <h2 class="text-center">{ message }</h2>
            </div>
        };
    }

    html! {
        <div class="container mt-4">
            <div class="row">
                { for props.movies.iter().map(|movie| html! {
                    <Movie key={movie.imdb_id.clone()} movie={movie.clone()} />
                }) }
            </div>
        </div>
    }
}
