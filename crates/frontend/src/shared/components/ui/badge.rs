use contracts::enums::Category;
use leptos::prelude::*;

/// Pill showing a destination category in its tone
#[component]
pub fn CategoryBadge(
    category: Category,
    /// Smaller, square variant used inside list rows
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let class = format!(
        "category-badge {}{}",
        category.tone().badge_class(),
        if compact { " category-badge--compact" } else { "" }
    );

    view! {
        <span class=class>{category.label().to_string()}</span>
    }
}

/// Colored dot in a category's marker color
#[component]
pub fn CategoryDot(category: Category) -> impl IntoView {
    let style = format!("background: {};", category.tone().marker_color());

    view! {
        <span class="category-dot" style=style></span>
    }
}
