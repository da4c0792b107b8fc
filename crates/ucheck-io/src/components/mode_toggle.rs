//! File / URL input mode radio pair.

use dioxus::prelude::*;
use ucheck_core::InputMode;

/// Two radio buttons choosing between file upload and URL submission.
#[component]
pub fn ModeToggle(mode: InputMode, on_change: EventHandler<InputMode>) -> Element {
    rsx! {
        div { class: "mode-toggle", role: "radiogroup",
            for option in InputMode::ALL {
                label { class: "mode-toggle__option",
                    input {
                        r#type: "radio",
                        name: "input-mode",
                        value: option.value(),
                        checked: mode == option,
                        onchange: move |_| on_change.call(option),
                    }
                    "{option}"
                }
            }
        }
    }
}
