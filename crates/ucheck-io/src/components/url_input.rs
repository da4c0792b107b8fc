//! Free-text field for URL mode.

use dioxus::prelude::*;

const PLACEHOLDER: &str = "https://www.example.com/my/file/text.txt";

/// Free-text URL field. The value is passed through unvalidated.
#[component]
pub fn UrlInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "url-input",
            r#type: "text",
            aria_label: "Input file URL",
            placeholder: PLACEHOLDER,
            value: "{value}",
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
        }
    }
}
