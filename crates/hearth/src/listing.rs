//! URL-embedded listing metadata and widget prompt rendering.
//!
//! The widget embed page carries its listing in a base64url `data` query
//! parameter. The gateway decodes it into [`ListingDetails`] and renders the
//! text prompt the chat widget is primed with. Nothing is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property metadata decoded from the embed URL.
///
/// Only the address is required; everything else is rendered when present and
/// unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDetails {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Asking price in whole dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    /// Half baths are expressed as fractions, e.g. 2.5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_phone: Option<String>,
}

/// Why a `data` payload could not be decoded.
#[derive(Debug, Error)]
pub enum ListingDecodeError {
    #[error("listing payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("listing payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a base64url-encoded JSON listing payload.
///
/// Accepts unpadded and padded base64url as well as the standard alphabet, to
/// tolerate whichever encoder the embedding page used.
pub fn decode_listing(data: &str) -> Result<ListingDetails, ListingDecodeError> {
    use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
    use base64::Engine as _;

    let data = data.trim();
    let bytes = URL_SAFE_NO_PAD
        .decode(data)
        .or_else(|_| URL_SAFE.decode(data))
        .or_else(|_| STANDARD.decode(data))?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl ListingDetails {
    /// Render the text prompt the chat widget is primed with.
    ///
    /// One line per present field; deterministic output.
    pub fn widget_prompt(&self) -> String {
        let mut lines = Vec::new();

        let mut location = self.address.clone();
        if let Some(city) = &self.city {
            location.push_str(", ");
            location.push_str(city);
        }
        if let Some(state) = &self.state {
            location.push_str(", ");
            location.push_str(state);
        }
        lines.push(format!(
            "You are the listing assistant for the property at {location}."
        ));

        if let Some(price) = self.price {
            lines.push(format!("Asking price: ${}.", group_thousands(price)));
        }

        let mut layout = Vec::new();
        if let Some(bedrooms) = self.bedrooms {
            layout.push(format!("{bedrooms} bed"));
        }
        if let Some(bathrooms) = self.bathrooms {
            layout.push(format!("{} bath", trim_fraction(bathrooms)));
        }
        if let Some(square_feet) = self.square_feet {
            layout.push(format!("{} sqft", group_thousands(square_feet)));
        }
        if !layout.is_empty() {
            lines.push(format!("Layout: {}.", layout.join(" / ")));
        }

        if let Some(year) = self.year_built {
            lines.push(format!("Built in {year}."));
        }

        if !self.features.is_empty() {
            lines.push(format!("Highlights: {}.", self.features.join(", ")));
        }

        if let Some(description) = &self.description {
            lines.push(description.clone());
        }

        match (&self.agent_name, &self.agent_phone) {
            (Some(name), Some(phone)) => {
                lines.push(format!("Interested buyers can reach {name} at {phone}."));
            }
            (Some(name), None) => {
                lines.push(format!("The listing agent is {name}."));
            }
            _ => {}
        }

        lines.push(
            "Answer questions about this listing concisely and invite the visitor to \
             book a viewing."
                .to_string(),
        );

        lines.join("\n")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn trim_fraction(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value}")
    }
}
