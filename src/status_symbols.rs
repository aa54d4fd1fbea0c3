//! Common status symbols used throughout the application

/// Success indicator (✓)
pub const SUCCESS: &str = "✓";

/// Pinned topic marker
pub const PINNED: &str = "⚑";

/// Online member marker
pub const ONLINE: &str = "●";

/// Offline member marker
pub const OFFLINE: &str = "○";

/// Helper function to format success messages
pub fn success(msg: &str) -> String {
    format!("{} {}", SUCCESS, msg)
}

/// Presence marker for a member
pub fn presence(online: bool) -> &'static str {
    if online {
        ONLINE
    } else {
        OFFLINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_prefix() {
        assert_eq!(success("done"), "✓ done");
    }

    #[test]
    fn test_presence() {
        assert_eq!(presence(true), ONLINE);
        assert_eq!(presence(false), OFFLINE);
    }
}
