//! Social meta tag detection.
//!
//! Open Graph tags are specified with `property=`, but `name=` is common in the
//! wild, so both are accepted. The same goes for Twitter Cards in reverse.

use crate::dom::Snapshot;

const OG_TITLE_SELECTOR: &str = "meta[property='og:title'], meta[name='og:title']";
const OG_IMAGE_SELECTOR: &str = "meta[property='og:image'], meta[name='og:image']";
const TWITTER_CARD_SELECTOR: &str = "meta[name='twitter:card'], meta[property='twitter:card']";

/// Presence of the social sharing tags search tools check for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SocialSignals {
    /// `og:title` present
    pub og_title: bool,
    /// `og:image` present
    pub og_image: bool,
    /// `twitter:card` present
    pub twitter_card: bool,
}

/// Detects `og:title`, `og:image`, and `twitter:card` meta tags.
pub fn extract_social_signals(snapshot: &Snapshot) -> SocialSignals {
    SocialSignals {
        og_title: snapshot.exists(OG_TITLE_SELECTOR),
        og_image: snapshot.exists(OG_IMAGE_SELECTOR),
        twitter_card: snapshot.exists(TWITTER_CARD_SELECTOR),
    }
}
