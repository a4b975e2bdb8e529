use crate::i18n::resolve_locale;
use crate::pages::HomeProps;
use crate::redirect::{locale_redirect, redirect_response};
use crate::request::RequestContext;
use crate::server::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

/// `GET /:lng`
///
/// A first segment outside the allow-list is a page path that landed in the
/// locale slot; it is re-homed under the resolved locale.
pub async fn home_page(State(state): State<AppState>, request: RequestContext) -> Response {
    let brand = state.brands.resolve(&request).await;
    let cookie_lng = request.cookies.active_lng();

    let segment = request.lng().unwrap_or_default();
    let target = resolve_locale(brand.as_ref(), None, cookie_lng);
    if let Some(location) = locale_redirect(segment, &target) {
        info!("Unrecognized locale segment '{}', redirecting to {}", segment, location);
        state.metrics.record_locale_redirect();
        return redirect_response(&location);
    }

    let lng = resolve_locale(brand.as_ref(), request.locale_segment(), cookie_lng);
    let show_instagram_feed = brand.as_ref().is_some_and(|b| b.has_instagram_feed());
    let page = state.render_props(lng, brand);
    let data_banners = state.banners.fetch(&request).await;

    debug!(
        "Home page ready (lng={}, banners={}, instagram={})",
        page.lng,
        data_banners.as_ref().map_or(0, |list| list.data.len()),
        show_instagram_feed
    );
    state.metrics.record_render();
    Json(HomeProps {
        page,
        data_banners,
        show_instagram_feed,
    })
    .into_response()
}
