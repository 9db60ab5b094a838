use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scroll the element with `id` into view.
///
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("Scroll target #{} not found", id),
    }
}
