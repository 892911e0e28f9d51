// =============================================================================
// Folio Web - Page Content
// =============================================================================
// Table of Contents:
// 1. Sections
// 2. Profile
// 3. Stats
// 4. Expertise & Skills
// 5. Experience
// 6. Projects
// 7. Contact
// =============================================================================

use folio_motion::SectionList;

// -----------------------------------------------------------------------------
// 1. Sections
// -----------------------------------------------------------------------------

/// Page sections in document order: (element id, nav label).
pub const PAGE_SECTIONS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("stats", "Stats"),
    ("expertise", "Expertise"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Sections linked from the header bar.
pub const HEADER_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("expertise", "Expertise"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

pub fn page_sections() -> folio_motion::Result<SectionList> {
    SectionList::from_pairs(PAGE_SECTIONS)
}

pub fn header_sections() -> folio_motion::Result<SectionList> {
    SectionList::from_pairs(HEADER_SECTIONS)
}

// -----------------------------------------------------------------------------
// 2. Profile
// -----------------------------------------------------------------------------

pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub summary: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    short_name: "Alex",
    role: "Senior Backend Engineer & System Architect",
    tagline: "I design and build reliable backend systems that scale with the business behind them.",
    summary: &[
        "Six years of shipping production services across education, fintech and automotive platforms.",
        "I care about clean boundaries, measurable performance and infrastructure that teams can operate without heroics.",
    ],
};

pub struct Highlight {
    pub label: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { label: "Clean Code", description: "Writing maintainable, scalable solutions" },
    Highlight { label: "System Design", description: "Architecting high-availability systems" },
    Highlight { label: "Cloud Native", description: "AWS, Docker, Kubernetes expertise" },
    Highlight { label: "Performance", description: "40% query optimization achieved" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com/" },
    SocialLink { label: "Email", href: "mailto:hello@example.com" },
];

// -----------------------------------------------------------------------------
// 3. Stats
// -----------------------------------------------------------------------------

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 6, suffix: "+", label: "Years Experience" },
    Stat { value: 7, suffix: "+", label: "Major Projects" },
    Stat { value: 5, suffix: "+", label: "Companies" },
    Stat { value: 15, suffix: "+", label: "Technologies" },
];

// -----------------------------------------------------------------------------
// 4. Expertise & Skills
// -----------------------------------------------------------------------------

pub struct Expertise {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

pub const EXPERTISE: &[Expertise] = &[
    Expertise {
        title: "Backend Engineering",
        description: "APIs and services built for long-term ownership.",
        points: &["REST & queue-driven APIs", "Multi-tenant data models", "Payment and billing flows"],
    },
    Expertise {
        title: "System Architecture",
        description: "Designs that hold up under real traffic.",
        points: &["Caching strategy", "Service boundaries", "Observability from day one"],
    },
    Expertise {
        title: "DevOps & Cloud",
        description: "Pipelines and infrastructure as code.",
        points: &["Containerised deploys", "CI/CD automation", "Cost-aware cloud setups"],
    },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "PHP", level: 95 },
            Skill { name: "Laravel", level: 95 },
            Skill { name: "Node.js", level: 75 },
            Skill { name: "Rust", level: 70 },
        ],
    },
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "React.js", level: 80 },
            Skill { name: "Vue.js", level: 75 },
            Skill { name: "Tailwind CSS", level: 90 },
        ],
    },
    SkillCategory {
        title: "Databases",
        skills: &[
            Skill { name: "MySQL", level: 90 },
            Skill { name: "PostgreSQL", level: 70 },
            Skill { name: "Redis", level: 85 },
        ],
    },
    SkillCategory {
        title: "DevOps & Cloud",
        skills: &[
            Skill { name: "Docker", level: 85 },
            Skill { name: "Kubernetes", level: 70 },
            Skill { name: "AWS", level: 85 },
            Skill { name: "CI/CD", level: 90 },
        ],
    },
];

// -----------------------------------------------------------------------------
// 5. Experience
// -----------------------------------------------------------------------------

pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        company: "Northwind Internet",
        title: "Software Development Engineer",
        period: "Jan 2025 - Present",
        achievements: &["Led the move to event-driven order processing", "Cut p95 API latency by a third"],
    },
    Role {
        company: "Brightpath Education",
        title: "Senior Backend Developer",
        period: "Apr 2024 - Jan 2025",
        achievements: &["Architected the multi-tenant learning platform", "Introduced automated release pipelines"],
    },
    Role {
        company: "Ledgerline Software",
        title: "Backend Developer",
        period: "Mar 2023 - Apr 2024",
        achievements: &["Built LMS integrations for enterprise customers"],
    },
    Role {
        company: "Covercraft Solutions",
        title: "PHP Developer",
        period: "Jan 2021 - Feb 2023",
        achievements: &["Shipped insurance quote engines for four carriers", "Optimised reporting queries by 40%"],
    },
];

// -----------------------------------------------------------------------------
// 6. Projects
// -----------------------------------------------------------------------------

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Lumen Tutor",
        category: "EdTech / AI",
        description: "Adaptive tutoring platform with generated practice sets.",
        tags: &["Laravel", "OpenAI", "Redis"],
    },
    Project {
        title: "Policy Desk",
        category: "FinTech / Insurance",
        description: "Quote comparison and policy issuance across carriers.",
        tags: &["PHP", "MySQL", "AWS"],
    },
    Project {
        title: "Roadside",
        category: "Automotive",
        description: "Vehicle service booking with live mechanic dispatch.",
        tags: &["Node.js", "MongoDB", "Docker"],
    },
    Project {
        title: "Campus ERP",
        category: "EdTech / ERP",
        description: "Admissions, fees and timetables for school groups.",
        tags: &["Laravel", "Vue.js", "PostgreSQL"],
    },
];

// -----------------------------------------------------------------------------
// 7. Contact
// -----------------------------------------------------------------------------

pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactItem] = &[
    ContactItem { label: "Email", value: "hello@example.com", href: Some("mailto:hello@example.com") },
    ContactItem { label: "Location", value: "Remote", href: None },
];
