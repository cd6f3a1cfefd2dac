//! Anonymous session identity and cookie bootstrap.
//!
//! The widget has no user accounts. Each browser is identified by an opaque
//! token stored in a cookie: the resolver reuses the token found on the
//! inbound request, or mints a fresh one and hands the caller a serialized
//! `Set-Cookie` directive to persist it. Nothing is stored server-side.

use uuid::Uuid;

/// Cookie that carries the per-browser session id.
pub const SESSION_COOKIE_NAME: &str = "chatkit_session_id";

/// Session cookie lifetime: 30 days.
pub const SESSION_COOKIE_MAX_AGE_SECS: u64 = 2_592_000;

/// Cookie attributes stamped on freshly minted identities.
///
/// Passed in explicitly (rather than read from the environment ad hoc) so the
/// resolver stays a deterministic, unit-testable function.
#[derive(Debug, Clone)]
pub struct CookiePolicy {
    /// Cookie name, matched exactly (case-sensitive, after trim).
    pub name: &'static str,
    /// `Max-Age` attribute in seconds.
    pub max_age_secs: u64,
    /// Append `Secure` for deployments served over HTTPS.
    pub secure: bool,
}

impl CookiePolicy {
    pub fn new(secure: bool) -> Self {
        Self {
            name: SESSION_COOKIE_NAME,
            max_age_secs: SESSION_COOKIE_MAX_AGE_SECS,
            secure,
        }
    }
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Provenance of a resolved session id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Reused from the inbound cookie, unmodified.
    Cookie,
    /// Freshly minted; the caller must emit `set_cookie`.
    Generated,
}

/// Output of [`resolve_session`].
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    /// Stable per-browser user identifier.
    pub user_id: String,
    pub origin: SessionOrigin,
    /// Serialized `Set-Cookie` directive, present only for generated ids.
    pub set_cookie: Option<String>,
}

/// Extract a cookie value from a raw `Cookie` header.
///
/// Informal RFC 6265 syntax: `name1=value1; name2=value2`. Segments without an
/// `=` are skipped. The value is returned as-is, without URL-decoding.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Derive a per-browser user id from the inbound `Cookie` header.
///
/// Reuses the id carried by `policy.name` when present. Otherwise mints a
/// UUID v4 from OS randomness (there is deliberately no weaker fallback
/// source) and returns the cookie directive the caller must append as a
/// `Set-Cookie` header. Never fails: a missing, empty, or malformed header
/// just means a fresh identity.
pub fn resolve_session(cookie_header: Option<&str>, policy: &CookiePolicy) -> ResolvedSession {
    if let Some(id) = cookie_header.and_then(|header| cookie_value(header, policy.name)) {
        // An empty value is as good as no cookie at all.
        if !id.is_empty() {
            return ResolvedSession {
                user_id: id.to_string(),
                origin: SessionOrigin::Cookie,
                set_cookie: None,
            };
        }
    }

    let user_id = Uuid::new_v4().to_string();
    let set_cookie = serialize_session_cookie(&user_id, policy);
    ResolvedSession {
        user_id,
        origin: SessionOrigin::Generated,
        set_cookie: Some(set_cookie),
    }
}

fn serialize_session_cookie(id: &str, policy: &CookiePolicy) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        policy.name,
        urlencoding::encode(id),
        policy.max_age_secs
    );
    if policy.secure {
        cookie.push_str("; Secure");
    }
    cookie
}
