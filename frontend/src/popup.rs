use log::debug;
use web_sys::Window;

/// How big a popup window should be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizePolicy {
    FixedPixels { width: f64, height: f64 },
    ScreenFraction(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupPlacement {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub left: f64,
}

impl PopupPlacement {
    /// Feature string for `window.open`.
    pub fn features(&self) -> String {
        format!(
            "width={},height={},top={},left={},scrollbars=yes,resizable=yes",
            self.width, self.height, self.top, self.left
        )
    }
}

/// Centers a fixed-size window on the full screen. Oversized windows get
/// negative offsets; nothing is clamped.
pub fn compute_fixed_placement(
    width: f64,
    height: f64,
    screen_width: f64,
    screen_height: f64,
) -> PopupPlacement {
    PopupPlacement {
        width,
        height,
        left: centered(screen_width, width),
        top: centered(screen_height, height),
    }
}

/// Sizes a window to `fraction` of the available area and centers it there.
pub fn compute_fractional_placement(
    fraction: f64,
    available_width: f64,
    available_height: f64,
) -> PopupPlacement {
    let width = available_width * fraction;
    let height = available_height * fraction;
    PopupPlacement {
        width,
        height,
        left: centered(available_width, width),
        top: centered(available_height, height),
    }
}

fn centered(outer: f64, inner: f64) -> f64 {
    (outer / 2.0) - (inner / 2.0)
}

/// Screen dimensions as reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    pub width: f64,
    pub height: f64,
    pub avail_width: f64,
    pub avail_height: f64,
}

impl ScreenMetrics {
    pub fn read(window: &Window) -> Option<Self> {
        let screen = window.screen().ok()?;
        Some(Self {
            width: f64::from(screen.width().ok()?),
            height: f64::from(screen.height().ok()?),
            avail_width: f64::from(screen.avail_width().ok()?),
            avail_height: f64::from(screen.avail_height().ok()?),
        })
    }
}

/// An external page to open in its own named window.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupRequest {
    pub target_url: String,
    pub window_name: &'static str,
    pub size_policy: SizePolicy,
}

impl PopupRequest {
    pub fn new(target_url: impl Into<String>, window_name: &'static str, size_policy: SizePolicy) -> Self {
        Self {
            target_url: target_url.into(),
            window_name,
            size_policy,
        }
    }

    // Fixed windows center on the total screen, fractional ones on the
    // available area.
    pub fn placement(&self, screen: &ScreenMetrics) -> PopupPlacement {
        match self.size_policy {
            SizePolicy::FixedPixels { width, height } => {
                compute_fixed_placement(width, height, screen.width, screen.height)
            }
            SizePolicy::ScreenFraction(fraction) => {
                compute_fractional_placement(fraction, screen.avail_width, screen.avail_height)
            }
        }
    }
}

/// Opens the request in a new window and focuses it. A blocked popup is
/// ignored.
pub fn open_popup(request: &PopupRequest) {
    if let Some(window) = web_sys::window() {
        let Some(screen) = ScreenMetrics::read(&window) else {
            return;
        };
        let features = request.placement(&screen).features();
        match window.open_with_url_and_target_and_features(
            &request.target_url,
            request.window_name,
            &features,
        ) {
            Ok(Some(popup)) => {
                let _ = popup.focus();
            }
            _ => debug!("popup for {} was not opened", request.target_url),
        }
    }
}
