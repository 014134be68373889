//! Static catalog data tables
//!
//! Raw entries are the editorial source of truth; [`super::Catalog::load`]
//! assembles them into `Tool` records (image URL resolution, name sort,
//! uniqueness validation) once at startup.

/// A raw catalog row before assembly.
pub(super) struct RawTool {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Vendor domain; used for the default logo URL
    pub domain: &'static str,
    pub duration: &'static str,
    pub tags: &'static [&'static str],
    pub original_price: f64,
    pub offer_price: f64,
    /// Explicit logo URL when the domain-derived one is unusable
    pub image_override: Option<&'static str>,
}

macro_rules! tool {
    ($name:expr, $category:expr, $description:expr, $domain:expr, $duration:expr,
     $tags:expr, $original:expr, $offer:expr) => {
        RawTool {
            name: $name,
            category: $category,
            description: $description,
            domain: $domain,
            duration: $duration,
            tags: $tags,
            original_price: $original,
            offer_price: $offer,
            image_override: None,
        }
    };
    ($name:expr, $category:expr, $description:expr, $domain:expr, $duration:expr,
     $tags:expr, $original:expr, $offer:expr, $image:expr) => {
        RawTool {
            name: $name,
            category: $category,
            description: $description,
            domain: $domain,
            duration: $duration,
            tags: $tags,
            original_price: $original,
            offer_price: $offer,
            image_override: Some($image),
        }
    };
}

const AI: &str = "🧠 AI & Automation Tools";
const DESIGN: &str = "🎨 Design, Video & Creative Tools";
const PRODUCTIVITY: &str = "💼 Productivity, Project Management & Collaboration";
const DEVELOPER: &str = "👨‍💻 Developer & Engineering Tools";
const MARKETING: &str = "📈 Marketing, Growth & SEO Tools";
const EDUCATION: &str = "📚 Education & Learning Platforms";
const CLOUD: &str = "☁️ Cloud, Storage & Security";
const CAD: &str = "🧱 3D, CAD & Engineering Suites";
const STREAMING: &str = "🎮 Streaming & Entertainment";
const LIFETIME: &str = "♾️ Lifetime Access Tools";

pub(super) const RAW_TOOLS: &[RawTool] = &[
    // AI & Automation Tools
    tool!("PromptDrive.ai", AI, "AI prompt management for teams", "promptdrive.ai", "1 Year", &["New"], 120.0, 49.0),
    tool!("Devin AI", AI, "Autonomous AI software engineer", "cognition.ai", "1 Year", &["Fast Moving", "New"], 240.0, 120.0),
    tool!("Jasper AI (Pro)", AI, "AI content and marketing copy generator", "jasper.ai", "1 Month", &["Fast Moving"], 99.0, 49.0),
    tool!("Perplexity (Pro)", AI, "AI-powered answer engine", "perplexity.ai", "1 Year", &["Featured"], 240.0, 9.99),
    tool!("Otter.ai (Pro)", AI, "AI meeting recorder & transcriber", "otter.ai", "1 Year", &[], 200.0, 100.0),
    tool!("ElevenLabs (Creator)", AI, "AI voice generator and text-to-speech", "elevenlabs.io", "3 Months", &[], 66.0, 29.0),
    // Design, Video & Creative Tools
    tool!("Adobe Creative Cloud (Pro Plus)", DESIGN, "Full suite for design, photo & video", "adobe.com", "1 Year", &["Universal", "Featured"], 600.0, 49.0,
        "https://upload.wikimedia.org/wikipedia/commons/a/a2/Adobe_Creative_Cloud_Logo.svg"),
    tool!("Canva (Pro)", DESIGN, "Drag-and-drop design for social, print & web", "canva.com", "1 Year", &["Universal"], 120.0, 40.0),
    tool!("Figma (Professional)", DESIGN, "Collaborative interface design platform", "figma.com", "1 Year", &["Featured"], 144.0, 72.0),
    tool!("Descript (Creator)", DESIGN, "Text-based audio/video editing", "descript.com", "1 Year", &[], 144.0, 72.0),
    // Productivity, Project Management & Collaboration
    tool!("Notion (Plus)", PRODUCTIVITY, "All-in-one workspace for notes, docs & wikis", "notion.so", "1 Year", &["Universal"], 96.0, 48.0),
    tool!("Zoom (Pro)", PRODUCTIVITY, "Cloud platform for video conferencing, chat, and webinars", "zoom.us", "1 Year", &["Universal", "Fast Moving"], 150.0, 75.0,
        "https://upload.wikimedia.org/wikipedia/commons/a/a2/Zoom_logo.svg"),
    tool!("Linear (Basic)", PRODUCTIVITY, "Streamlined issue tracking for modern software teams", "linear.app", "1 Year", &[], 120.0, 60.0),
    tool!("Airtable (Teams)", PRODUCTIVITY, "Hybrid database and spreadsheet for projects and workflows", "airtable.com", "1 Month", &[], 24.0, 12.0),
    tool!("Granola (Business)", PRODUCTIVITY, "Smart meeting notes", "granola.so", "1 Year", &[], 180.0, 89.0),
    // Developer & Engineering Tools
    tool!("GitHub Copilot (Pro)", DEVELOPER, "AI pair programmer in your editor", "github.com", "1 Year", &["Universal"], 100.0, 50.0),
    tool!("JetBrains (All Products)", DEVELOPER, "Every JetBrains IDE in one subscription", "jetbrains.com", "1 Year", &["Featured"], 289.0, 149.0),
    tool!("Postman (Basic)", DEVELOPER, "API design, testing & collaboration", "postman.com", "1 Year", &[], 168.0, 84.0),
    tool!("Windsurf (Pro)", DEVELOPER, "AI-assisted coding environment", "windsurf.dev", "1 Month", &[], 20.0, 10.0),
    // Marketing, Growth & SEO Tools
    tool!("Semrush (Pro)", MARKETING, "SEO, content & competitor research suite", "semrush.com", "1 Year", &["Featured"], 1399.0, 299.0),
    tool!("Ahrefs (Lite)", MARKETING, "Backlink analysis and keyword research", "ahrefs.com", "1 Year", &[], 1188.0, 399.0),
    tool!("Mailchimp (Standard)", MARKETING, "Email marketing & automation platform", "mailchimp.com", "1 Year", &[], 240.0, 120.0),
    tool!("Buffer (Essentials)", MARKETING, "Social media scheduling & analytics", "buffer.com", "1 Year", &[], 72.0, 36.0),
    // Education & Learning Platforms
    tool!("Coursera (Plus)", EDUCATION, "Unlimited access to courses & certificates", "coursera.org", "1 Year", &["Universal"], 399.0, 199.0),
    tool!("Skillshare (Premium)", EDUCATION, "Creative classes from working professionals", "skillshare.com", "1 Year", &[], 168.0, 84.0),
    tool!("Datacamp (Premium)", EDUCATION, "Interactive data science & AI courses", "datacamp.com", "1 Year", &[], 300.0, 150.0),
    tool!("LinkedIn Learning", EDUCATION, "Business, tech & creative video courses", "linkedin.com", "1 Year", &[], 240.0, 120.0),
    // Cloud, Storage & Security
    tool!("NordVPN (Plus)", CLOUD, "VPN with malware protection & password manager", "nordvpn.com", "1 Year", &["Universal"], 126.0, 59.0),
    tool!("Backblaze (Unlimited)", CLOUD, "Cloud data backup", "backblaze.com", "1 Year", &["Universal"], 70.0, 35.0,
        "https://www.backblaze.com/images/logo/backblaze_logo_2023.svg"),
    tool!("1Password (Families)", CLOUD, "Password manager for the whole household", "1password.com", "1 Year", &[], 60.0, 30.0),
    tool!("Dropbox (Plus)", CLOUD, "Cloud storage & file sync", "dropbox.com", "1 Year", &[], 120.0, 60.0),
    // 3D, CAD & Engineering Suites
    tool!("Autodesk Fusion", CAD, "Cloud CAD/CAM for product design", "autodesk.com", "1 Year", &[], 545.0, 272.0),
    tool!("SolidWorks (Standard)", CAD, "3D mechanical design & simulation", "solidworks.com", "1 Year", &["Featured"], 1295.0, 649.0),
    tool!("SketchUp (Pro)", CAD, "Intuitive 3D modeling for architecture", "sketchup.com", "1 Year", &[], 299.0, 149.0),
    // Streaming & Entertainment
    tool!("Netflix (Premium)", STREAMING, "4K streaming on four screens", "netflix.com", "1 Year", &["Fast Moving"], 275.0, 137.0),
    tool!("Spotify (Premium)", STREAMING, "Ad-free music & podcasts", "spotify.com", "1 Year", &["Universal"], 132.0, 66.0),
    tool!("YouTube (Premium)", STREAMING, "Ad-free videos, background play & music", "youtube.com", "1 Year", &[], 164.0, 82.0),
    tool!("Crunchyroll (Mega Fan)", STREAMING, "Anime streaming with simulcasts", "crunchyroll.com", "1 Year", &[], 96.0, 48.0),
    // Lifetime Access Tools
    tool!("Microsoft Office (Pro Plus)", LIFETIME, "Word, Excel, PowerPoint & more, one-time license", "microsoft.com", "Lifetime", &["Universal", "Featured"], 439.0, 59.0),
    tool!("AnyDesk (Solo)", LIFETIME, "Fast remote desktop access", "anydesk.com", "Lifetime", &[], 239.0, 119.0),
    tool!("Internet Download Manager", LIFETIME, "Accelerated downloads with scheduling", "internetdownloadmanager.com", "Lifetime", &[], 25.0, 12.0),
];

/// One-line descriptions for each category, in display order.
pub(super) const CATEGORY_DESCRIPTIONS: &[(&str, &str)] = &[
    (AI, "Tools that leverage artificial intelligence for automation, content generation, or workflow optimization."),
    (DESIGN, "For design, presentation, video editing, and visual creation."),
    (PRODUCTIVITY, "Platforms that help teams organize tasks, meetings, and work processes."),
    (DEVELOPER, "Tools for coding, software development, API management, and automation."),
    (MARKETING, "Tools to grow, optimize, and analyze brand and marketing performance."),
    (EDUCATION, "Learning and certification tools for upskilling in tech, business, and design."),
    (CLOUD, "Tools that ensure data safety, security, and hosting scalability."),
    (CAD, "High-end design and simulation platforms for engineers, manufacturers, and product designers."),
    (STREAMING, "Premium entertainment services for gaming, movies, and media."),
    (LIFETIME, "Perpetual access licenses to professional-grade platforms."),
];
