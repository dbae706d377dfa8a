pub mod use_movie_fetch;
