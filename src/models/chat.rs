use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Palette used for chat avatar fallbacks. The duplicate green entry is
/// part of the palette definition, so two indices map to the same color.
pub const AVATAR_PALETTE: [AvatarColor; 15] = [
    AvatarColor::Red,
    AvatarColor::Orange,
    AvatarColor::Amber,
    AvatarColor::Green,
    AvatarColor::Emerald,
    AvatarColor::Teal,
    AvatarColor::Green,
    AvatarColor::Sky,
    AvatarColor::Blue,
    AvatarColor::Indigo,
    AvatarColor::Violet,
    AvatarColor::Purple,
    AvatarColor::Fuchsia,
    AvatarColor::Pink,
    AvatarColor::Rose,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarColor {
    Red,
    Orange,
    Amber,
    Green,
    Emerald,
    Teal,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl AvatarColor {
    /// Deterministic color for a display name: the palette entry at
    /// `name.len() % palette length`. Different names of the same length
    /// collide, which is fine for avatar fallbacks.
    pub fn for_name(name: &str) -> Self {
        AVATAR_PALETTE[name.len() % AVATAR_PALETTE.len()]
    }

    /// CSS utility class consumed by the UI layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            AvatarColor::Red => "bg-red-500",
            AvatarColor::Orange => "bg-orange-500",
            AvatarColor::Amber => "bg-amber-500",
            AvatarColor::Green => "bg-green-500",
            AvatarColor::Emerald => "bg-emerald-500",
            AvatarColor::Teal => "bg-teal-500",
            AvatarColor::Sky => "bg-sky-500",
            AvatarColor::Blue => "bg-blue-500",
            AvatarColor::Indigo => "bg-indigo-500",
            AvatarColor::Violet => "bg-violet-500",
            AvatarColor::Purple => "bg-purple-500",
            AvatarColor::Fuchsia => "bg-fuchsia-500",
            AvatarColor::Pink => "bg-pink-500",
            AvatarColor::Rose => "bg-rose-500",
        }
    }
}

/// One chat utterance tied to a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub user: String,
    pub user_address: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub avatar_color: AvatarColor,
}

impl ChatMessage {
    /// Builds a message with the avatar color derived from the user name.
    pub fn new(
        id: impl Into<String>,
        user: impl Into<String>,
        user_address: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let user = user.into();
        let avatar_color = AvatarColor::for_name(&user);
        Self {
            id: id.into(),
            user,
            user_address: user_address.into(),
            message: message.into(),
            timestamp,
            avatar_color,
        }
    }
}
