//! Animated grid of selectable catalog entries.

use crate::services;
use leptos::prelude::*;
use mason_commerce::{CatalogEntry, EntryId};

/// Delay between consecutive card entrance animations.
const STAGGER_MS: usize = 60;

fn entrance_style(index: usize) -> String {
    format!("animation-delay: {}ms", index * STAGGER_MS)
}

/// Grid of entries. Clicking a card hands that entry to `on_select`.
///
/// Cards highlight on hover only when the device has a hovering pointer.
#[component]
pub fn SelectionGrid(
    entries: Vec<CatalogEntry>,
    #[prop(into)] on_select: Callback<CatalogEntry>,
) -> impl IntoView {
    let hover_enabled = services::can_hover();
    let focused = RwSignal::new(None::<EntryId>);

    let cards = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let id = entry.id.clone();
            let enter_id = entry.id.clone();
            let image = entry.image.clone().map(|src| {
                let alt = entry.name.clone();
                view! { <img src=src alt=alt loading="lazy"/> }
            });
            let name = entry.name.clone();
            let description = entry.description.clone();

            view! {
                <li
                    class="selection-card"
                    class:is-focused=move || focused.with(|f| f.as_ref() == Some(&id))
                    style=entrance_style(index)
                    on:mouseenter=move |_| {
                        if hover_enabled {
                            focused.set(Some(enter_id.clone()));
                        }
                    }
                    on:mouseleave=move |_| {
                        if hover_enabled {
                            focused.set(None);
                        }
                    }
                    on:click=move |_| on_select.run(entry.clone())
                >
                    {image}
                    <div class="body">
                        <h3>{name}</h3>
                        <p>{description}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="selection-grid">{cards}</ul> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_is_staggered_by_index() {
        assert_eq!(entrance_style(0), "animation-delay: 0ms");
        assert_eq!(entrance_style(3), "animation-delay: 180ms");
    }
}
