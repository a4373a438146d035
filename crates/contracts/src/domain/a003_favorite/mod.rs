pub mod aggregate;

pub use aggregate::{Favorite, FavoriteList, LoadedFavorites};
