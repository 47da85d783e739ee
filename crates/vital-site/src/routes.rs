//! Static path to page resolution.
//!
//! Every path resolves to exactly one [`Page`]; anything not in the table is
//! [`Page::NotFound`]. Matching ignores trailing slashes and anything after a
//! `?` or `#`.

use serde::Serialize;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    HowItWorks,
    Features,
    Contact,
    JoinTeam,
    NotFound,
}

const ROUTES: [(&str, Page); 5] = [
    ("/", Page::Home),
    ("/how-it-works", Page::HowItWorks),
    ("/features", Page::Features),
    ("/contact", Page::Contact),
    ("/join-team", Page::JoinTeam),
];

impl Page {
    /// Returns the canonical path, or `None` for [`Page::NotFound`].
    pub fn path(self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, page)| *page == self)
            .map(|(path, _)| *path)
    }

    /// Returns `true` if the page hosts an inline contact form.
    pub const fn has_contact_form(self) -> bool {
        matches!(self, Self::Contact)
    }

    /// Returns `true` if the page hosts the careers board.
    pub const fn has_careers_board(self) -> bool {
        matches!(self, Self::JoinTeam)
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Resolves a request path to its page.
pub fn resolve(path: &str) -> Page {
    let path = normalize(path);
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map_or(Page::NotFound, |(_, page)| *page)
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

impl NavLink {
    /// Returns `true` if this link points at the page showing `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        normalize(current_path) == self.path
    }
}

/// The navigation bar, in display order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "How It Works", path: "/how-it-works" },
    NavLink { name: "Features", path: "/features" },
    NavLink { name: "Contact", path: "/contact" },
    NavLink { name: "Join Team", path: "/join-team" },
];
