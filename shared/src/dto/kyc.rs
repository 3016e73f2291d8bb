use serde::{Deserialize, Serialize};

/// Identity verification status of a user.
///
/// Only a display label; no verification flow is modelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Verified,
    Pending,
    #[default]
    Unverified,
}

/// Badge size; the small badge renders the icon only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
}

impl KycStatus {
    pub fn label(&self) -> &'static str {
        match self {
            KycStatus::Verified => "Verificado",
            KycStatus::Pending => "Pendiente",
            KycStatus::Unverified => "Sin Verificar",
        }
    }

    /// Icon glyph shown in front of the label.
    pub fn icon(&self) -> &'static str {
        match self {
            KycStatus::Verified => "✔",
            KycStatus::Pending => "⏱",
            KycStatus::Unverified => "⚠",
        }
    }

    /// CSS modifier for the badge colour.
    pub fn tone(&self) -> &'static str {
        match self {
            KycStatus::Verified => "primary",
            KycStatus::Pending => "accent",
            KycStatus::Unverified => "muted",
        }
    }

    /// Text rendered next to the icon for the given size.
    pub fn badge_text(&self, size: BadgeSize) -> Option<&'static str> {
        match size {
            BadgeSize::Md => Some(self.label()),
            BadgeSize::Sm => None,
        }
    }
}
