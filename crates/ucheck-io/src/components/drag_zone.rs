//! Drop zone with flicker-free drag highlighting.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use ucheck_core::DragCounter;

/// Props for the [`DragZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DragZoneProps {
    /// Called with the dropped files when a drop carries at least one.
    on_drop: EventHandler<Vec<FileData>>,
    /// Called when the zone is clicked (the page opens its file picker).
    on_click: Option<EventHandler<MouseEvent>>,
    children: Element,
}

/// A container that accepts dropped files.
///
/// Listens for `dragenter`, `dragleave`, `dragover` and `drop` for as
/// long as it is mounted, suppressing the browser's default handling
/// (navigating to the dropped file). Nested enter/leave pairs are
/// combined by a [`DragCounter`] so the highlight does not flicker while
/// the pointer crosses child elements.
#[component]
pub fn DragZone(props: DragZoneProps) -> Element {
    let mut counter = use_signal(DragCounter::new);

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        let files = evt.files();
        if counter.with_mut(|c| c.drop(files.len())) {
            props.on_drop.call(files);
        }
    };

    let zone_class = if counter().is_dragging() {
        "drop-zone drop-zone--dragging"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                let items = has_items(&evt);
                counter.with_mut(|c| c.enter(items));
            },
            ondragleave: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                counter.with_mut(DragCounter::leave);
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
            },
            ondrop: handle_drop,
            onclick: move |evt| {
                if let Some(on_click) = props.on_click {
                    on_click.call(evt);
                }
            },

            {props.children}
        }
    }
}

/// Whether a drag payload carries any items.
///
/// Browsers hide the file list until the drop, so the raw
/// `DataTransfer.items` count is used where available.
fn has_items(evt: &DragEvent) -> bool {
    evt.data()
        .downcast::<web_sys::DragEvent>()
        .and_then(web_sys::DragEvent::data_transfer)
        .map_or_else(|| !evt.files().is_empty(), |dt| dt.items().length() > 0)
}
