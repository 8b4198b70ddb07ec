use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{find_shoe, load_catalog};
use crate::domain::models::Shoe;

#[derive(Debug, Deserialize)]
pub struct ShoesQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize)]
pub struct ShoeResponse {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: u32,
    pub sale_price: Option<u32>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl From<Shoe> for ShoeResponse {
    fn from(shoe: Shoe) -> Self {
        Self {
            slug: shoe.slug,
            name: shoe.name,
            image_src: shoe.image_src,
            price: shoe.price,
            sale_price: shoe.sale_price,
            release_date: shoe.release_date,
            num_of_colors: shoe.num_of_colors,
        }
    }
}

/// GET /api/shoes
/// List the catalog, newest release first
pub async fn list_shoes_handler(
    Query(params): Query<ShoesQuery>,
) -> Result<Json<Vec<ShoeResponse>>, StatusCode> {
    let mut shoes = load_catalog().map_err(|e| {
        tracing::error!("Failed to load catalog: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    // Filter by search query if provided
    if !params.search.is_empty() {
        let search_lower = params.search.to_lowercase();
        shoes.retain(|s| s.name.to_lowercase().contains(&search_lower));
    }

    let response: Vec<ShoeResponse> = shoes.into_iter().map(ShoeResponse::from).collect();

    Ok(Json(response))
}

/// GET /api/shoes/{slug}
/// Single shoe lookup, 404 for an unknown slug
pub async fn get_shoe_handler(
    Path(slug): Path<String>,
) -> Result<Json<ShoeResponse>, StatusCode> {
    let shoe = find_shoe(&slug).map_err(|e| {
        tracing::error!("Failed to load catalog: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match shoe {
        Some(shoe) => Ok(Json(shoe.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
