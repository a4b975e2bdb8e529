use crate::i18n::resolve_locale;
use crate::redirect::{redirect_response, root_redirect};
use crate::request::RequestContext;
use crate::server::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

/// `GET /:lng/cart`
///
/// In production the cart is never served from here: the visitor is sent to
/// their localized home before any backend call is made.
pub async fn cart_page(State(state): State<AppState>, request: RequestContext) -> Response {
    if let Some(location) = root_redirect(state.config.is_production, &request.cookies) {
        info!("Cart requested in production mode, redirecting to {}", location);
        state.metrics.record_root_redirect();
        return redirect_response(&location);
    }

    let brand = state.brands.resolve(&request).await;
    let lng = resolve_locale(
        brand.as_ref(),
        request.locale_segment(),
        request.cookies.active_lng(),
    );

    let props = state.render_props(lng, brand);
    state.metrics.record_render();
    Json(props).into_response()
}
