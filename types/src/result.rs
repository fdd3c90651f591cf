//! FLAMES result codes and their static display table.

use std::fmt;

use serde::Serialize;

/// One of the six FLAMES outcomes.
///
/// Declaration order is the order of the letters in the word "FLAMES",
/// which is also the starting order of the elimination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ResultCode {
    #[serde(rename = "F")]
    Friends,
    #[serde(rename = "L")]
    Love,
    #[serde(rename = "A")]
    Affection,
    #[serde(rename = "M")]
    Marriage,
    #[serde(rename = "E")]
    Enemy,
    #[serde(rename = "S")]
    Sister,
}

impl ResultCode {
    /// All codes in FLAMES order.
    pub const ALL: [ResultCode; 6] = [
        ResultCode::Friends,
        ResultCode::Love,
        ResultCode::Affection,
        ResultCode::Marriage,
        ResultCode::Enemy,
        ResultCode::Sister,
    ];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            ResultCode::Friends => 'F',
            ResultCode::Love => 'L',
            ResultCode::Affection => 'A',
            ResultCode::Marriage => 'M',
            ResultCode::Enemy => 'E',
            ResultCode::Sister => 'S',
        }
    }

    #[must_use]
    pub fn details(self) -> &'static ResultDetails {
        &RESULT_TABLE[self as usize]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.details().label
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 24-bit color stop, kept free of any rendering crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Two-stop gradient used to tint a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accent {
    pub from: Rgb,
    pub to: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultIcon {
    Users,
    Heart,
    Sparkles,
    Home,
    UserX,
    UsersRound,
}

/// Display metadata for a [`ResultCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultDetails {
    pub code: ResultCode,
    pub label: &'static str,
    pub message: &'static str,
    pub icon: ResultIcon,
    pub accent: Accent,
}

// Indexed by `ResultCode as usize`.
static RESULT_TABLE: [ResultDetails; 6] = [
    ResultDetails {
        code: ResultCode::Friends,
        label: "Friends",
        message: "You're destined to be besties forever!",
        icon: ResultIcon::Users,
        accent: Accent {
            from: Rgb(251, 191, 36),
            to: Rgb(251, 146, 60),
        },
    },
    ResultDetails {
        code: ResultCode::Love,
        label: "Love",
        message: "It's a match made in heaven!",
        icon: ResultIcon::Heart,
        accent: Accent {
            from: Rgb(244, 114, 182),
            to: Rgb(244, 63, 94),
        },
    },
    ResultDetails {
        code: ResultCode::Affection,
        label: "Affection",
        message: "There's definitely a spark here!",
        icon: ResultIcon::Sparkles,
        accent: Accent {
            from: Rgb(192, 132, 252),
            to: Rgb(244, 114, 182),
        },
    },
    ResultDetails {
        code: ResultCode::Marriage,
        label: "Marriage",
        message: "Get the rings ready!",
        icon: ResultIcon::Home,
        accent: Accent {
            from: Rgb(251, 113, 133),
            to: Rgb(236, 72, 153),
        },
    },
    ResultDetails {
        code: ResultCode::Enemy,
        label: "Enemy",
        message: "Yikes... maybe keep your distance!",
        icon: ResultIcon::UserX,
        accent: Accent {
            from: Rgb(248, 113, 113),
            to: Rgb(249, 115, 22),
        },
    },
    ResultDetails {
        code: ResultCode::Sister,
        label: "Sister",
        message: "Like siblings from another crib!",
        icon: ResultIcon::UsersRound,
        accent: Accent {
            from: Rgb(96, 165, 250),
            to: Rgb(34, 211, 238),
        },
    },
];
