//! Path based request routing
//!
//! `/<mode>/<key>` for the single-key modes, `/stats-batch?keys=a,b` for the
//! batch mode. The key is taken verbatim from the path (still
//! percent-encoded); batch keys are form-decoded and trimmed.

use std::str::FromStr;

use strum::{AsRefStr, EnumString};

use crate::render::BadgeFormat;

pub const MISSING_KEY_MESSAGE: &str = "Missing key in path";
pub const MISSING_KEYS_MESSAGE: &str = "Missing keys query parameter. Use ?keys=key1,key2,key3";
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// First path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    Badge,
    Badgen,
    Shields,
    Stats,
    StatsBatch,
}

impl Mode {
    /// Modes that increment before rendering.
    pub fn badge_format(self) -> Option<BadgeFormat> {
        match self {
            Mode::Badge => Some(BadgeFormat::Svg),
            Mode::Badgen => Some(BadgeFormat::Badgen),
            Mode::Shields => Some(BadgeFormat::Shields),
            Mode::Stats | Mode::StatsBatch => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest {
    Badge { format: BadgeFormat, key: String },
    Stats { key: String },
    StatsBatch { keys: Vec<String> },
}

impl RenderRequest {
    pub fn mode(&self) -> Mode {
        match self {
            RenderRequest::Badge { format, .. } => match format {
                BadgeFormat::Svg => Mode::Badge,
                BadgeFormat::Badgen => Mode::Badgen,
                BadgeFormat::Shields => Mode::Shields,
            },
            RenderRequest::Stats { .. } => Mode::Stats,
            RenderRequest::StatsBatch { .. } => Mode::StatsBatch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// 未知的模式
    NotFound,
    MissingKey,
    MissingKeys,
}

impl RouteError {
    pub fn status_code(&self) -> u16 {
        match self {
            RouteError::NotFound => 404,
            RouteError::MissingKey | RouteError::MissingKeys => 400,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RouteError::NotFound => NOT_FOUND_MESSAGE,
            RouteError::MissingKey => MISSING_KEY_MESSAGE,
            RouteError::MissingKeys => MISSING_KEYS_MESSAGE,
        }
    }
}

/// Resolve a request path and raw query string into a [`RenderRequest`].
pub fn parse_request(path: &str, query: Option<&str>) -> Result<RenderRequest, RouteError> {
    let mut segments = path.split('/').skip(1);
    let mode = segments
        .next()
        .and_then(|segment| Mode::from_str(segment).ok())
        .ok_or(RouteError::NotFound)?;

    if mode == Mode::StatsBatch {
        let keys = parse_keys_param(query.unwrap_or("")).ok_or(RouteError::MissingKeys)?;
        return Ok(RenderRequest::StatsBatch { keys });
    }

    let key = match segments.next() {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => return Err(RouteError::MissingKey),
    };

    Ok(match mode.badge_format() {
        Some(format) => RenderRequest::Badge { format, key },
        None => RenderRequest::Stats { key },
    })
}

/// First `keys` parameter, split on `,` and trimmed. `None` if absent or empty.
fn parse_keys_param(query: &str) -> Option<Vec<String>> {
    let (_, raw) = url::form_urlencoded::parse(query.as_bytes()).find(|(name, _)| name == "keys")?;
    if raw.is_empty() {
        return None;
    }
    Some(raw.split(',').map(|key| key.trim().to_string()).collect())
}
