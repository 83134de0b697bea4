use log::Level;

use crate::popup::SizePolicy;

pub const CONTACT_FORM_URL: &str = "https://form.typeform.com/to/I3UTiANj";
pub const CONTACT_OVERLAY_TITLE: &str = "Kontaktanfrage";

pub const UPLOAD_PORTAL_URL: &str = "https://webportal.teamdrive.net/";
pub const UPLOAD_WINDOW_NAME: &str = "TeamDriveUpload";
pub const DETAILS_WINDOW_NAME: &str = "ServiceDetails";

/// Upload portal opens at a fixed size, centered on the whole screen.
pub const UPLOAD_POPUP: SizePolicy = SizePolicy::FixedPixels {
    width: 1024.0,
    height: 768.0,
};

/// Service details open at a quarter of the available screen area.
pub const DETAILS_POPUP: SizePolicy = SizePolicy::ScreenFraction(0.25);

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
