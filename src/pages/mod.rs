//! Page orchestration: everything that runs before the renderer sees a page.
//!
//! Each handler resolves the brand and locale, applies its redirect policy and,
//! when no redirect applies, answers with the render props as JSON.

mod cart;
mod home;

pub use cart::cart_page;
pub use home::home_page;

use crate::banner::BannerList;
use crate::brand::Brand;
use crate::i18n::Dictionary;
use crate::server::AppState;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::debug;

/// Brand as the renderer receives it: the brand object, or `""` when none
/// could be resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandProp(pub Option<Brand>);

impl Serialize for BrandProp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(brand) => brand.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }
}

/// Props shared by every page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProps {
    /// Resolved locale code, never empty
    pub lng: String,
    /// Always present; empty when the locale has no dictionary
    pub lng_dict: Arc<Dictionary>,
    pub brand: BrandProp,
}

/// Home page props: the shared props plus the banner prefetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    #[serde(flatten)]
    pub page: RenderProps,
    pub data_banners: Option<BannerList>,
    /// Whether the brand has an Instagram account for the feed section
    pub show_instagram_feed: bool,
}

impl AppState {
    /// Load the dictionary for `lng` and assemble the shared props.
    pub(crate) fn render_props(&self, lng: String, brand: Option<Brand>) -> RenderProps {
        let lng_dict = match self.dictionaries.get(&lng) {
            Some(dictionary) => dictionary,
            None => {
                self.metrics.record_dictionary_fallback();
                self.dictionaries.load(&lng)
            }
        };
        debug!("Rendering in '{}' with {} translations", lng, lng_dict.len());

        RenderProps {
            lng,
            lng_dict,
            brand: BrandProp(brand),
        }
    }
}
