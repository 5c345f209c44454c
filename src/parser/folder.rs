/// Name prefix → components folder. First match wins, so a prefix must come
/// before any shorter prefix it starts with (`SBSR` before `SBS`).
const CATEGORY_FOLDERS: &[(&str, &str)] = &[
    ("Hero", "Hero"),
    ("SBSR", "SideBySideReverse"),
    ("SBS", "SideBySide"),
    ("Stats", "Stats"),
    ("Services", "Services"),
    ("FAQ", "FAQ"),
    ("Reviews", "Reviews"),
    ("Pricing", "Pricing"),
    ("Gallery", "Gallery"),
    ("MeetUs", "MeetOurTeam"),
    ("Contact", "Contact"),
    ("Footer", "Footer"),
    ("WhyChooseUs", "WhyChooseUs"),
    ("CTA", "CTA"),
    ("Steps", "Steps"),
    ("Events", "Events"),
    ("Blog", "Blog"),
    ("Content", "Content"),
    ("Locations", "Locations"),
    ("Component", "Components"),
];

pub const FALLBACK_FOLDER: &str = "Hero";

pub fn folder_for(name: &str) -> &'static str {
    CATEGORY_FOLDERS
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .map(|(_, folder)| *folder)
        .unwrap_or(FALLBACK_FOLDER)
}

// ── Tests ──
