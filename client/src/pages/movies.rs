//! Guest browsing: the public movie catalogue, no sign-in required.

#[cfg(test)]
#[path = "movies_test.rs"]
mod movies_test;

use leptos::prelude::*;

use crate::net::types::Movie;
use crate::routes;

/// Fetch lifecycle of the catalogue.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Failed,
    Loaded(Vec<Movie>),
}

pub fn rating_label(rating: Option<f64>) -> String {
    rating.map_or_else(|| "Not rated".to_owned(), |r| format!("★ {r:.1}"))
}

pub fn genre_label(genres: &[String]) -> String {
    genres.join(" · ")
}

/// Publication year taken from an ISO `YYYY-MM-DD` date, if it has one.
pub fn release_year(date: Option<&str>) -> Option<&str> {
    let year = date?.get(..4)?;
    year.chars().all(|c| c.is_ascii_digit()).then_some(year)
}

#[component]
pub fn MoviesPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_movies().await {
            Ok(movies) => catalog.set(CatalogState::Loaded(movies)),
            Err(e) => {
                log::warn!("movie catalogue fetch failed: {e}");
                catalog.set(CatalogState::Failed);
            }
        }
    });

    let body = move || match catalog.get() {
        CatalogState::Loading => view! { <p>"Loading movies..."</p> }.into_any(),
        CatalogState::Failed => view! { <p class="error">"Could not load movies."</p> }.into_any(),
        CatalogState::Loaded(movies) if movies.is_empty() => {
            view! { <p>"No movies in the catalogue yet."</p> }.into_any()
        }
        CatalogState::Loaded(movies) => view! {
            <ul class="movie-list">
                {movies.into_iter().map(|movie| view! { <MovieCard movie/> }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div class="movies-container">
            <h2>"Popular Movies"</h2>
            <p class="redirect">
                "Browsing as a guest. " <a href=routes::LOGIN>"Log In"</a> " or "
                <a href=routes::REGISTER>"Register"</a> " to write reviews."
            </p>
            {body}
        </div>
    }
}

#[component]
fn MovieCard(movie: Movie) -> impl IntoView {
    let meta = movie.metadata;
    let year = release_year(meta.date_published.as_deref()).map(|y| format!(" ({y})"));
    view! {
        <li class="movie-card" data-movie-id=movie.id>
            <h3>{meta.title} {year}</h3>
            <p class="movie-card__rating">{rating_label(meta.imdb_rating)}</p>
            <p class="movie-card__genres">{genre_label(&meta.movie_genres)}</p>
        </li>
    }
}
