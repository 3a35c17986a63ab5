//! Static copy and imagery for the landing page.

pub struct Metric {
    pub text: &'static str,
}

pub const METRICS: &[Metric] = &[
    Metric { text: "IMPROVE YOUR WEBSITE CONVERSION RATE BY 10%" },
    Metric { text: "GROW YOUR ONBOARDING BY 80%" },
    Metric { text: "LOWER YOUR COST OF ACQUISITION BY 40%" },
    Metric { text: "INCREASE MARKET SHARE BY REBRANDING" },
    Metric { text: "DOUBLE THE NUMBER OF APP USERS IN ONE YEAR" },
];

pub struct NavLink {
    pub name: &'static str,
    pub num: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "HOME", num: "01" },
    NavLink { name: "SERVICES", num: "02" },
    NavLink { name: "CASE STUDIES", num: "03" },
    NavLink { name: "FINTECH EXPERTISE", num: "04" },
    NavLink { name: "LET'S CONNECT", num: "05" },
];

impl NavLink {
    /// In-page anchor, e.g. `"CASE STUDIES"` -> `"#case-studies"`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.name.to_lowercase().replace(' ', "-"))
    }
}

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Align on your key product goal",
        description: "Start with what matters—your core product objective. We build solutions around real user needs to set a strong foundation for growth.",
    },
    ProcessStep {
        title: "Collaborate like a true partner",
        description: "We're hands-on through implementation to ensure every design decision stays aligned with your vision, your market, and your mission.",
    },
    ProcessStep {
        title: "Launch at speed, improve and scale",
        description: "Launch is just the beginning. We stay close to refine, optimize and scale with intention as your product evolves and grows.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

impl Testimonial {
    pub fn name(&self) -> &'static str {
        self.author.split(',').next().unwrap_or(self.author)
    }

    /// Everything after the first comma, as written.
    pub fn role(&self) -> &'static str {
        self.author
            .split_once(',')
            .map(|(_, role)| role)
            .unwrap_or("")
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Basis Studio worked like an agency that feels in-house. In just 12 weeks, they built our product and website from scratch — and it looks like something straight out of a Series B company.",
        author: "Michal, Co-founder, Finance",
    },
    Testimonial {
        quote: "Basis Studio helped us level up our brand, social presence, and website. It's not just a redesign — it's shaping our next phase of growth.",
        author: "Jessie Jett, Senior Manager, Visa",
    },
    Testimonial {
        quote: "We are thrilled! The process of working together to get to a design style that feels fresh, authentic, and creative was smooth and the design itself is top-notch quality.",
        author: "Kristina Kosa, Co-founder, Yoginess",
    },
    Testimonial {
        quote: "As an engineering leader, working with Michal and Basis Studio been a game changer. He truly understands how to support engineers in building design systems, making collaboration seamless.",
        author: "Frederik Vanhevel, Engineering Lead",
    },
];

/// Floating hero card. `x`/`y` are percentages of the hero box.
pub struct HeroImage {
    pub text: &'static str,
    pub depth: f64,
    pub x: u32,
    pub y: u32,
    pub rotate: i32,
}

impl HeroImage {
    pub fn src(&self) -> String {
        let side = (self.depth * 50.0 + 100.0) as u32;
        placeholder_url(self.text, side, side, "111", "fff")
    }
}

pub const HERO_IMAGES: &[HeroImage] = &[
    HeroImage { text: "Product", depth: 1.0, x: 5, y: 20, rotate: -10 },
    HeroImage { text: "Blue", depth: 2.0, x: 75, y: 15, rotate: 15 },
    HeroImage { text: "Card", depth: 3.0, x: 10, y: 70, rotate: 5 },
    HeroImage { text: "Yellow", depth: 2.0, x: 70, y: 75, rotate: -20 },
    HeroImage { text: "Green", depth: 1.0, x: 80, y: 5, rotate: 0 },
];

/// The first four repeat so the marquee loops without a gap.
pub const LOGOS: &[&str] = &[
    "Mastercard", "Prosody", "Google", "Seen", "Disney", "Airbnb", "Red Bull", "Sable",
    "Mastercard", "Prosody", "Google", "Seen",
];

pub const FOOTER_NAVIGATION: &[&str] = &["Home", "Services", "Case Studies", "Fintech Expertise"];
pub const FOOTER_SOCIAL: &[&str] = &["Instagram", "Linkedin", "Threads", "X"];
pub const CONTACT_EMAILS: &[&str] = &["hello@basis.work", "careers@basis.work"];

pub fn placeholder_url(text: &str, width: u32, height: u32, bg: &str, color: &str) -> String {
    format!(
        "https://placehold.co/{}x{}/{}/{}?text={}&font=inter",
        width,
        height,
        bg,
        color,
        text.replace(' ', "+")
    )
}
