use log::trace;

/// Mobile platform recognized from a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobilePlatform {
    Android,
    BlackBerry,
    Ios,
    OperaMini,
    WindowsPhone,
}

/// Classify a user-agent string into a mobile platform.
///
/// Matching is case-insensitive substring search, in a fixed order; the
/// first platform whose markers appear wins. Desktop agents yield `None`.
pub fn detect(user_agent: &str) -> Option<MobilePlatform> {
    let agent = user_agent.to_ascii_lowercase();

    let platform = if agent.contains("android") {
        Some(MobilePlatform::Android)
    } else if agent.contains("blackberry") {
        Some(MobilePlatform::BlackBerry)
    } else if ["iphone", "ipod", "ipad"]
        .iter()
        .any(|marker| agent.contains(marker))
    {
        Some(MobilePlatform::Ios)
    } else if agent.contains("opera mini") {
        Some(MobilePlatform::OperaMini)
    } else if agent.contains("iemobile") || agent.contains("wpdesktop") {
        Some(MobilePlatform::WindowsPhone)
    } else {
        None
    };
    trace!("user agent classified as {platform:?}");
    platform
}

/// Whether the user-agent string belongs to any recognized mobile platform.
pub fn is_mobile(user_agent: &str) -> bool {
    detect(user_agent).is_some()
}
