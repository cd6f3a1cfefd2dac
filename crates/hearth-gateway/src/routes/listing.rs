//! Listing prompt decoding for the chat widget.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use hearth::listing::{decode_listing, ListingDetails};
use hearth::GatewayError;

#[derive(Debug, Deserialize)]
pub struct PromptQuery {
    /// Base64url-encoded listing JSON from the embed URL.
    pub data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub listing: ListingDetails,
}

/// GET /api/listing/prompt?data=... - decode listing metadata into a prompt
pub async fn widget_prompt(
    Query(query): Query<PromptQuery>,
) -> Result<Json<PromptResponse>, GatewayError> {
    let data = query
        .data
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| GatewayError::InvalidRequest("missing data parameter".to_string()))?;

    let listing = decode_listing(data)?;
    let prompt = listing.widget_prompt();

    Ok(Json(PromptResponse { prompt, listing }))
}
