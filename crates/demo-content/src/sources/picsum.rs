use crate::config::DEFAULT_IMAGE_BASE_URL;

/// Image URL builder for Lorem Picsum. No request is made.
#[derive(Debug, Clone)]
pub struct PicsumImages {
    base_url: String,
}

impl PicsumImages {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of a `width` x `height` image. Distinct discriminators give distinct images
    /// within one page, even when the dimensions are equal.
    pub fn build_image_url(&self, width: u32, height: u32, discriminator: u64) -> String {
        format!(
            "{}/{width}/{height}?random={discriminator}",
            self.base_url
        )
    }
}

impl Default for PicsumImages {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}
