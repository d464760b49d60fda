//! Quick Action Components
//!
//! Soft, translucent buttons for the shortcuts a dashboard card offers:
//! - ActionButton: a single labelled control
//! - ActionGrid: two-column layout for a set of buttons

use dioxus::prelude::*;

const ACTION_BASE: &str =
    "bento-action p-3 bg-white/5 rounded-xl text-sm text-white hover:bg-white/10 transition-colors";

/// Properties for the ActionButton component
#[derive(Clone, PartialEq, Props)]
pub struct ActionButtonProps {
    /// Button content (usually a label)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

impl ActionButtonProps {
    pub fn full_class(&self) -> String {
        match self.class.as_deref() {
            Some(extra) if !extra.is_empty() => format!("{} {}", ACTION_BASE, extra),
            _ => ACTION_BASE.to_string(),
        }
    }
}

/// Quick action button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ActionButton {
///         onclick: move |_| open_schedule(),
///         class: "w-full sm:w-auto",
///         "View Schedule"
///     }
/// }
/// ```
#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let full_class = props.full_class();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            // Clicks keep bubbling to the enclosing card
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Two-column grid of action buttons
#[component]
pub fn ActionGrid(children: Element) -> Element {
    rsx! {
        div { class: "bento-actions grid grid-cols-2 gap-2",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_class_without_extra() {
        let props = ActionButtonProps {
            children: VNode::empty(),
            onclick: None,
            class: None,
        };
        assert_eq!(props.full_class(), ACTION_BASE);
    }

    #[test]
    fn action_class_with_extra() {
        let props = ActionButtonProps {
            children: VNode::empty(),
            onclick: None,
            class: Some("w-full sm:w-auto".to_string()),
        };
        assert!(props.full_class().ends_with("transition-colors w-full sm:w-auto"));
    }
}
