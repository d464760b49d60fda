//! Style tokens
//!
//! Enumerated visual treatments mapped to utility classes, so that callers
//! never hand-write class strings for gradients, fills or sizes.

use serde::{Deserialize, Serialize};

/// Background gradient of a card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gradient {
    /// Faint blue to purple wash, used when nothing else is chosen
    #[default]
    BluePurple,
    IndigoPurple,
    GreenEmerald,
    BlueCyan,
    PurplePink,
    OrangeRed,
    TealGreen,
    PinkRose,
    VioletPurple,
}

impl Gradient {
    /// Returns the gradient stop classes (used with `bg-gradient-to-br`)
    pub fn class(&self) -> &'static str {
        match self {
            Gradient::BluePurple => "from-blue-500/10 to-purple-500/10",
            Gradient::IndigoPurple => "from-indigo-500/20 to-purple-600/20",
            Gradient::GreenEmerald => "from-green-500/20 to-emerald-600/20",
            Gradient::BlueCyan => "from-blue-500/20 to-cyan-600/20",
            Gradient::PurplePink => "from-purple-500/20 to-pink-600/20",
            Gradient::OrangeRed => "from-orange-500/20 to-red-600/20",
            Gradient::TealGreen => "from-teal-500/20 to-green-600/20",
            Gradient::PinkRose => "from-pink-500/20 to-rose-600/20",
            Gradient::VioletPurple => "from-violet-500/20 to-purple-600/20",
        }
    }
}

/// Fill colour of a progress bar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressColor {
    Green,
    #[default]
    Blue,
    Purple,
    Orange,
    Pink,
}

impl ProgressColor {
    pub fn class(&self) -> &'static str {
        match self {
            ProgressColor::Green => "bg-green-400",
            ProgressColor::Blue => "bg-blue-400",
            ProgressColor::Purple => "bg-purple-400",
            ProgressColor::Orange => "bg-orange-400",
            ProgressColor::Pink => "bg-pink-400",
        }
    }
}

/// Avatar diameter
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
}

impl AvatarSize {
    /// Width and height classes for one avatar (or the overflow badge)
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "w-8 h-8",
            AvatarSize::Medium => "w-10 h-10",
        }
    }
}
