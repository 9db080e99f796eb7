//! Route table and view lookup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Tools,
    ToolCreate,
    Agents,
    AgentCreate,
    Chats,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Tools => "Tools",
            View::ToolCreate => "New tool",
            View::Agents => "Agents",
            View::AgentCreate => "New agent",
            View::Chats => "Chats",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Tools => "/tools",
            View::ToolCreate => "/tools/new",
            View::Agents => "/agents",
            View::AgentCreate => "/agents/new",
            View::Chats => "/chats",
        }
    }

    pub fn all() -> &'static [View] {
        &[
            View::Tools,
            View::ToolCreate,
            View::Agents,
            View::AgentCreate,
            View::Chats,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub target: RouteTarget,
}

/// Static route table. No path parameters, no guards.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        target: RouteTarget::Redirect("/tools"),
    },
    Route {
        path: "/tools",
        target: RouteTarget::View(View::Tools),
    },
    Route {
        path: "/tools/new",
        target: RouteTarget::View(View::ToolCreate),
    },
    Route {
        path: "/agents",
        target: RouteTarget::View(View::Agents),
    },
    Route {
        path: "/agents/new",
        target: RouteTarget::View(View::AgentCreate),
    },
    Route {
        path: "/chats",
        target: RouteTarget::View(View::Chats),
    },
];

/// Exact-match lookup; a trailing slash is ignored.
pub fn route(path: &str) -> Option<&'static Route> {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTES.iter().find(|route| route.path == path)
}

/// View rendered for `path`, following redirects.
pub fn resolve(path: &str) -> Option<View> {
    let mut current = path;
    for _ in 0..ROUTES.len() {
        match route(current)?.target {
            RouteTarget::View(view) => return Some(view),
            RouteTarget::Redirect(to) => current = to,
        }
    }
    None
}
