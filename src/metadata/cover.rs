use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Cover art pulled from a tag: MIME type plus the raw image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl CoverImage {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// `data:<mime>;base64,<payload>`, ready to hand to an image element.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }
}

/// Placeholder artwork for tracks without an embedded picture: a single
/// glyph on a hue derived from the track name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub glyph: char,
    /// Degrees, `0..360`.
    pub hue: u16,
}

impl Fallback {
    pub fn for_name(name: &str) -> Self {
        let glyph = name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?');
        let sum: u64 = name.encode_utf16().map(u64::from).sum();
        Self {
            glyph,
            hue: (sum % 360) as u16,
        }
    }
}
