use once_cell::sync::Lazy;
use tera::{Context as TeraContext, Tera};

use crate::app::ViewState;

static TEMPLATES: Lazy<Tera> =
    Lazy::new(|| Tera::new("views/**/*").expect("Failed to initialize Tera templates"));

/// Renders the whole page from the current view state. The page owns no
/// state of its own; calling this again after any mutation redraws
/// everything.
pub fn render_page(state: &ViewState) -> String {
    let mut ctx = TeraContext::new();
    ctx.insert("email_input", &state.email_input);
    ctx.insert("is_loading", &state.is_loading());
    ctx.insert("message", state.message().unwrap_or(""));
    ctx.insert("error", state.error().unwrap_or(""));
    ctx.insert("subscribers", &state.subscribers);

    TEMPLATES
        .render("page.txt", &ctx)
        .expect("Failed rendering the signup page")
}
