//! Static page content
//!
//! Everything the sections display lives here so the UI code stays free of
//! string litter. Swap this module out to rebrand the page.

pub const OWNER_NAME: &str = "Deniz Aydin";
pub const OWNER_TITLE: &str = "Full-Stack Developer";
pub const OWNER_TAGLINE: &str =
    "I build fast, reliable software, from embedded firmware to web frontends.";

/// Recipient for the contact form's mailto link.
pub const CONTACT_EMAIL: &str = "deniz@aydin.dev";

pub const ABOUT_TEXT: &str = "I'm a software developer with a taste for systems \
that stay simple under the hood. Over the last few years I've shipped web \
platforms, internal tooling and a handful of open-source libraries, and I care \
as much about the developer experience of a codebase as about what it renders \
on screen.";

/// Animated stat counters in the about section: (label, target).
pub const STATS: &[(&str, u32)] = &[
    ("Years Experience", 6),
    ("Projects Completed", 40),
    ("Open-Source Contributions", 120),
];

/// Skill bars: (label, percent filled).
pub const SKILLS: &[(&str, f32)] = &[
    ("Rust", 90.0),
    ("TypeScript", 85.0),
    ("Python", 80.0),
    ("SQL & Data Modeling", 75.0),
    ("Cloud & Containers", 70.0),
];

/// Project cards: (title, description, tech line).
pub const PROJECTS: &[(&str, &str, &str)] = &[
    (
        "Telemetry Dashboard",
        "Real-time visualization of fleet metrics with sub-second latency, \
         rendering thousands of series in the browser.",
        "Rust · WebAssembly · WebSockets",
    ),
    (
        "Inventory Platform",
        "Multi-warehouse stock tracking with double-entry audit history and \
         offline-first mobile clients.",
        "TypeScript · PostgreSQL · GraphQL",
    ),
    (
        "CI Cache Proxy",
        "Content-addressed build artifact cache that cut average pipeline \
         times by 40% across the org.",
        "Rust · S3 · gRPC",
    ),
];

/// Navigation sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}
