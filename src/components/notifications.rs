//! Recent activity list for the notifications card.

use dioxus::prelude::*;

/// One activity line with its relative age ("2m ago")
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub text: String,
    pub age: String,
}

impl Notification {
    pub fn new(text: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            age: age.into(),
        }
    }
}

#[component]
pub fn NotificationList(items: Vec<Notification>) -> Element {
    rsx! {
        div { class: "bento-notifications space-y-2 text-sm",
            for (i, item) in items.iter().enumerate() {
                div { key: "{i}", class: "p-2 bg-white/5 rounded-lg",
                    div { class: "flex justify-between items-start",
                        p { class: "text-white", "{item.text}" }
                        span { class: "text-xs text-gray-400", "{item.age}" }
                    }
                }
            }
        }
    }
}
