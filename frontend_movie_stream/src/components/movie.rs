// frontend_movie_stream/src/components/movie.rs
use yew::prelude::*;

use crate::api::movies::Movie as MovieData;

#[derive(Properties, PartialEq)]
pub struct MovieProps {
    pub movie: MovieData,
}

#[function_component(Movie)]
pub fn movie(props: &MovieProps) -> Html {
    let movie = &props.movie;

    html! {
        <div class="col-md-4 mb-4">
            <div class="card h-100 shadow-sm">
                <div class="card-poster">
                    <img src={movie.poster_path.clone()} alt={movie.title.clone()} class="card-img-top" />
                </div>
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">{ &movie.title }</h5>
                    <p class="card-text mb-2">{ &movie.imdb_id }</p>
                </div>
                if let Some(badge) = movie.ranking_badge() {
                    <span class="badge bg-dark m-3 p-2">{ badge }</span>
                }
            </div>
        </div>
    }
}
