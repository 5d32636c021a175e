//! JSON output for the publications API.

use serde_json::{Value, json};

use crate::models::Category;
use crate::publications::PanelView;

/// Panel view plus the category menu, for script-driven clients.
#[must_use]
pub fn panel_json(view: &PanelView) -> Value {
    let mut obj = json!(view);

    obj["categories"] = Category::ALL
        .iter()
        .map(|c| {
            json!({
                "id": c.id(),
                "label": c.label(),
                "selected": *c == view.category,
                "link": c.deep_link(),
            })
        })
        .collect();

    obj
}
