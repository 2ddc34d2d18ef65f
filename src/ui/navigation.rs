//! Static navigation descriptors
//!
//! Immutable route records for the quick-action grid and the bottom tab
//! bar. Icons are symbolic keys; the render layer resolves them to glyphs.

use crate::router::routes;
use ratatui::prelude::Color;

/// Symbolic icon keys for navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Home,
    QrCode,
    Calendar,
    User,
    Star,
}

/// One navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub icon: IconKind,
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub path: &'static str,
    pub accent: Color,
}

/// Quick-action grid entries, in display order.
pub const QUICK_ACTIONS: [RouteDescriptor; 4] = [
    RouteDescriptor {
        icon: IconKind::QrCode,
        label: "QR Code",
        description: Some("Generate your attendance QR"),
        path: routes::QR_CODE,
        accent: Color::Cyan,
    },
    RouteDescriptor {
        icon: IconKind::Calendar,
        label: "Attendance",
        description: Some("View your records"),
        path: routes::ATTENDANCE,
        accent: Color::Green,
    },
    RouteDescriptor {
        icon: IconKind::User,
        label: "Profile",
        description: Some("Manage your info"),
        path: routes::PROFILE,
        accent: Color::LightBlue,
    },
    RouteDescriptor {
        icon: IconKind::Star,
        label: "Rate App",
        description: Some("Share feedback"),
        path: routes::RATINGS,
        accent: Color::Yellow,
    },
];

/// Bottom tab bar entries, in display order. Paths overlapping with the
/// quick actions are intentional shortcut duplication.
pub const BOTTOM_TABS: [RouteDescriptor; 4] = [
    RouteDescriptor {
        icon: IconKind::Home,
        label: "Home",
        description: None,
        path: routes::DASHBOARD,
        accent: Color::Cyan,
    },
    RouteDescriptor {
        icon: IconKind::QrCode,
        label: "QR Code",
        description: None,
        path: routes::QR_CODE,
        accent: Color::Cyan,
    },
    RouteDescriptor {
        icon: IconKind::Calendar,
        label: "Attendance",
        description: None,
        path: routes::ATTENDANCE,
        accent: Color::Green,
    },
    RouteDescriptor {
        icon: IconKind::User,
        label: "Profile",
        description: None,
        path: routes::PROFILE,
        accent: Color::LightBlue,
    },
];

/// Whether `descriptor` points at the current location. Exact match only,
/// no prefix matching.
pub fn is_active(descriptor: &RouteDescriptor, current_path: &str) -> bool {
    descriptor.path == current_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_exact_match_only() {
        let home = &BOTTOM_TABS[0];
        assert!(is_active(home, routes::DASHBOARD));
        assert!(!is_active(home, routes::PROFILE));
        assert!(!is_active(home, "/dashboard/"));
        assert!(!is_active(home, "/dash"));
        assert!(!is_active(home, ""));
    }

    #[test]
    fn test_empty_paths_compare_like_any_string() {
        let blank = RouteDescriptor {
            icon: IconKind::Home,
            label: "",
            description: None,
            path: "",
            accent: Color::Reset,
        };
        assert!(is_active(&blank, ""));
        assert!(!is_active(&blank, "/"));
    }

    #[test]
    // QR Code and Attendance appear in both menus on purpose.
    fn test_menus_share_shortcut_paths() {
        let tab_paths: Vec<&str> = BOTTOM_TABS.iter().map(|d| d.path).collect();
        assert!(tab_paths.contains(&routes::QR_CODE));
        assert!(tab_paths.contains(&routes::ATTENDANCE));
        let action_paths: Vec<&str> = QUICK_ACTIONS.iter().map(|d| d.path).collect();
        assert!(action_paths.contains(&routes::QR_CODE));
        assert!(action_paths.contains(&routes::ATTENDANCE));
    }

    #[test]
    // Every bottom tab must point at a known application route.
    fn test_tab_paths_are_known_routes() {
        let known = [
            routes::DASHBOARD,
            routes::QR_CODE,
            routes::ATTENDANCE,
            routes::PROFILE,
            routes::RATINGS,
            routes::AUTH,
        ];
        for tab in &BOTTOM_TABS {
            assert!(known.contains(&tab.path), "unknown route: {}", tab.path);
        }
    }
}
