//! Avatar Group Component
//!
//! Overlapping row of round avatars, truncated with a `+N` badge.

use dioxus::prelude::*;

use crate::tokens::AvatarSize;

/// Avatars shown before the rest collapse into the badge
pub const MAX_VISIBLE_AVATARS: usize = 4;

/// What an avatar list renders as
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AvatarStack<'a> {
    /// Shown avatars, in list order
    pub visible: &'a [String],
    /// Number of avatars hidden behind the badge
    pub hidden: usize,
}

impl<'a> AvatarStack<'a> {
    pub fn new(avatars: &'a [String]) -> Self {
        let shown = avatars.len().min(MAX_VISIBLE_AVATARS);
        Self {
            visible: &avatars[..shown],
            hidden: avatars.len() - shown,
        }
    }

    /// Badge text such as `"+2"`, `None` when nothing is hidden
    pub fn badge(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

/// Properties for the AvatarGroup component
#[derive(Clone, PartialEq, Props)]
pub struct AvatarGroupProps {
    /// Image URLs, in display order
    pub avatars: Vec<String>,
    #[props(default)]
    pub size: AvatarSize,
}

/// Avatar row with overflow badge
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AvatarGroup { avatars: team_photos.clone(), size: AvatarSize::Small }
/// }
/// ```
#[component]
pub fn AvatarGroup(props: AvatarGroupProps) -> Element {
    let stack = AvatarStack::new(&props.avatars);
    let size = props.size.class();
    let badge = stack.badge();

    rsx! {
        div { class: "bento-avatars flex -space-x-2 md:-space-x-3",
            for (n, src) in (1..).zip(stack.visible.iter()) {
                img {
                    key: "{n}",
                    class: "bento-avatars__img {size} rounded-full border-2 border-white/20 object-cover",
                    src: "{src}",
                    alt: "Avatar {n}",
                }
            }
            if let Some(text) = badge {
                div { class: "bento-avatars__more {size} rounded-full border-2 border-white/20 bg-gray-600/50 flex items-center justify-center text-xs text-white font-medium",
                    "{text}"
                }
            }
        }
    }
}
