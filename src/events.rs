use strum::{Display as StrumDisplay, EnumString};

/// A step of the ship along the rim.
///
/// Parsed from key names, so both GDK names (`Left`) and DOM names
/// (`ArrowLeft`) are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
pub enum Navigation {
    #[strum(serialize = "ArrowLeft", serialize = "Left", serialize = "KP_Left")]
    Previous,
    #[strum(serialize = "ArrowRight", serialize = "Right", serialize = "KP_Right")]
    Next,
}

impl Navigation {
    pub fn from_key_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}
