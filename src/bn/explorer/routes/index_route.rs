use rocket::response::content::RawHtml as Html;

use crate::bn::explorer::render::{render_app_body, render_form};

pub const DEFAULT_SAMPLES: usize = 500;

pub fn internal_index() -> Html<String> {
    Html(render_app_body(&render_form(DEFAULT_SAMPLES)))
}
