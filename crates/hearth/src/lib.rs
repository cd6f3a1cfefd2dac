//! Core library for the Hearth listing chat gateway.
//!
//! The gateway fronts a property-listing chat widget: it mints anonymous
//! browser sessions against a hosted session broker, proxies chat and
//! realtime voice requests to the provider, and decodes URL-embedded listing
//! metadata into a widget prompt. This crate holds the parts that do not
//! depend on the HTTP server: the session identity resolver, the listing
//! decoder, the upstream client, and the shared error type.

pub mod error;
pub mod identity;
pub mod listing;
pub mod upstream;

pub use error::{GatewayError, GatewayResult};
pub use identity::{resolve_session, CookiePolicy, ResolvedSession, SessionOrigin};
pub use listing::ListingDetails;
pub use upstream::UpstreamClient;
