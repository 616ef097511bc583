//! Dropdown for overlaying one category's series on the timeline.

use crate::state::{AppState, NO_CATEGORY};
use dioxus::prelude::*;
use dt_data::CategoryPoint;

/// Category dropdown.
/// Picking a category replaces the category lines with that category's line;
/// picking "none" removes them.
#[component]
pub fn CategorySelector() -> Element {
    let mut state = use_context::<AppState>();
    let categories = state.categories();
    let selected = (state.selected_category)();

    let on_change = move |evt: Event<FormData>| {
        let category = evt.value();
        let points: Vec<CategoryPoint> = state
            .category_points
            .read()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        state.with_view(|v| v.plot_category_series(&points));
        state.selected_category.set(category);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "category-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Category: "
            }
            select {
                id: "category-select",
                onchange: on_change,
                option {
                    value: "{NO_CATEGORY}",
                    selected: selected == NO_CATEGORY,
                    "none"
                }
                for category in categories.iter() {
                    option {
                        value: "{category}",
                        selected: *category == selected,
                        "{category}"
                    }
                }
            }
        }
    }
}
