// frontend_movie_stream/src/api/movies.rs
use serde::{Deserialize, Serialize};

use crate::api::client::{PrivateClient, PublicClient};
use crate::api::error::ApiError;

pub const MOVIES_PATH: &str = "/movies";
pub const RECOMMENDED_MOVIES_PATH: &str = "/recommendedmovies";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    #[serde(default)]
    pub ranking_name: String,
    #[serde(default)]
    pub ranking_value: Option<i32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Genre {
    #[serde(default)]
    pub genre_id: i32,
    #[serde(default)]
    pub genre_name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub poster_path: String,
    pub imdb_id: String,
    #[serde(default)]
    pub ranking: Option<Ranking>,
    #[serde(default)]
    pub genre: Vec<Genre>,
    #[serde(default)]
    pub admin_review: Option<String>,
}

impl Movie {
    /// Badge text, only when the backend actually ranked the movie.
    pub fn ranking_badge(&self) -> Option<&str> {
        self.ranking
            .as_ref()
            .map(|r| r.ranking_name.as_str())
            .filter(|name| !name.is_empty())
    }
}

pub async fn fetch_movies(client: &PublicClient) -> Result<Vec<Movie>, ApiError> {
    client.get_json(MOVIES_PATH).await
}

pub async fn fetch_recommended_movies(client: &PrivateClient) -> Result<Vec<Movie>, ApiError> {
    client.get_json(RECOMMENDED_MOVIES_PATH).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_movie_list_in_order() {
        let json = r#"[
            {
                "_id": "665f",
                "imdb_id": "tt0111161",
                "title": "The Shawshank Redemption",
                "poster_path": "https://img.test/shawshank.jpg",
                "youtube_id": "6hB3S9bIaco",
                "genre": [{ "genre_id": 1, "genre_name": "Drama" }],
                "admin_review": "A classic.",
                "ranking": { "ranking_value": 1, "ranking_name": "Excellent" }
            },
            { "imdb_id": "tt0068646", "title": "The Godfather", "poster_path": "" }
        ]"#;

        let movies: Vec<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].imdb_id, "tt0111161");
        assert_eq!(movies[0].genre[0].genre_name, "Drama");
        assert_eq!(movies[1].title, "The Godfather");
        assert_eq!(movies[1].ranking, None);
    }

    #[test]
    fn badge_requires_non_empty_ranking_name() {
        let mut movie = Movie {
            title: "Heat".into(),
            imdb_id: "tt0113277".into(),
            ..Movie::default()
        };
        assert_eq!(movie.ranking_badge(), None);

        movie.ranking = Some(Ranking::default());
        assert_eq!(movie.ranking_badge(), None);

        movie.ranking = Some(Ranking {
            ranking_name: "Good".into(),
            ranking_value: Some(2),
        });
        assert_eq!(movie.ranking_badge(), Some("Good"));
    }

    #[test]
    fn null_ranking_decodes_as_absent() {
        let movie: Movie =
            serde_json::from_str(r#"{ "imdb_id": "tt1", "title": "X", "ranking": null }"#).unwrap();
        assert_eq!(movie.ranking_badge(), None);
    }
}
