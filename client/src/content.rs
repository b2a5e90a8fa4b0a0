//! Static copy and asset lists for the landing page.

#[derive(Clone, Copy, Debug)]
pub struct HeroImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const HERO_IMAGES: &[HeroImage] = &[
    HeroImage { src: "/images/hero_1.jpg", alt: "DevHire Dashboard 1" },
    HeroImage { src: "/images/hero_2.png", alt: "DevHire Dashboard 2" },
    HeroImage { src: "/images/hero_4.png", alt: "DevHire Dashboard 3" },
];

#[derive(Clone, Copy, Debug)]
pub struct TrustBadge {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
    pub flourish: Option<&'static str>,
}

pub const TRUST_BADGES: &[TrustBadge] = &[
    TrustBadge { value: "1000+", label: "Companies Trust Us", accent: "bg-blue-500", flourish: None },
    TrustBadge { value: "95%", label: "Satisfaction Rate", accent: "bg-green-500", flourish: Some("✓") },
    TrustBadge { value: "2x", label: "Faster Hiring", accent: "bg-orange-500", flourish: Some("⚡") },
];

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🤖",
        title: "AI-Powered Matching",
        body: "Our matching engine ranks candidates on skills, experience and team fit so you review the right people first.",
    },
    Feature {
        icon: "💻",
        title: "Integrated Coding Tests",
        body: "Send real-world coding challenges and review results side by side without leaving DevHire.",
    },
    Feature {
        icon: "⚡",
        title: "Faster Time to Hire",
        body: "Shortlists, scheduling and feedback in one place cut the average hiring cycle in half.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "10,000+", label: "Developers Hired", icon: "👨‍💻" },
    Stat { number: "500+", label: "Companies", icon: "🏢" },
    Stat { number: "85%", label: "Time Saved", icon: "⏱️" },
    Stat { number: "4.9/5", label: "Rating", icon: "⭐" },
];

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HOW_IT_WORKS: &[Step] = &[
    Step { title: "Post a role", body: "Describe the position and the skills that matter." },
    Step { title: "Review matches", body: "Get a ranked shortlist of pre-screened developers." },
    Step { title: "Assess and hire", body: "Run coding tests, interview and send an offer." },
];

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "DevHire cut our time to hire from eight weeks to three. The coding tests alone saved our engineers hours every week.",
        author: "Sarah Chen",
        role: "VP of Engineering",
        company: "Cloudscale",
        avatar: "/images/testimonial_1.jpg",
        rating: 5,
    },
    Testimonial {
        quote: "The AI matches are scarily good. Most of our last six hires came from the first page of recommendations.",
        author: "Marcus Johnson",
        role: "Head of Talent",
        company: "Finlytics",
        avatar: "/images/testimonial_2.jpg",
        rating: 5,
    },
    Testimonial {
        quote: "We replaced three separate tools with DevHire. Our recruiters and engineers finally work from the same pipeline.",
        author: "Priya Patel",
        role: "CTO",
        company: "Brightpath",
        avatar: "/images/testimonial_3.jpg",
        rating: 4,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Faq {
    pub question: &'static str,
    /// Markdown.
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does DevHire's AI matching work?",
        answer: "We compare each candidate's skills, projects and assessment results against your role description and rank them by fit. You always see **why** a candidate was matched.",
    },
    Faq {
        question: "Is there a free trial?",
        answer: "Yes. Every plan starts with a **14-day free trial**, no credit card required. See [pricing](/pricing) for details.",
    },
    Faq {
        question: "Which languages do the coding tests support?",
        answer: "Tests run in more than 30 languages, including Rust, Go, Python, TypeScript and Java.",
    },
    Faq {
        question: "Can I integrate DevHire with my ATS?",
        answer: "DevHire syncs candidates and stages with the most common applicant tracking systems. Use the **Contact Sales** button if yours is missing.",
    },
    Faq {
        question: "Can I cancel anytime?",
        answer: "Absolutely. Plans are month-to-month and you can cancel from your account settings.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/jobs", label: "Jobs" },
    NavLink { href: "/candidates", label: "Candidates" },
    NavLink { href: "/pricing", label: "Pricing" },
];

pub const FOOTER_PLATFORM: &[NavLink] = &[
    NavLink { href: "/jobs", label: "Browse Jobs" },
    NavLink { href: "/candidates", label: "Browse Talent" },
    NavLink { href: "/pricing", label: "Pricing" },
    NavLink { href: "/enterprise", label: "Enterprise" },
];

pub const FOOTER_RESOURCES: &[NavLink] = &[
    NavLink { href: "/blog", label: "Blog" },
    NavLink { href: "/guide", label: "Hiring Guide" },
    NavLink { href: "/help", label: "Help Center" },
    NavLink { href: "/contact", label: "Contact Support" },
];

pub const FOOTER_LEGAL: &[NavLink] = &[
    NavLink { href: "/privacy", label: "Privacy Policy" },
    NavLink { href: "/terms", label: "Terms of Service" },
    NavLink { href: "/cookies", label: "Cookie Settings" },
];

pub const SOCIAL_LINKS: &[NavLink] = &[
    NavLink { href: "#", label: "Twitter" },
    NavLink { href: "#", label: "Facebook" },
    NavLink { href: "#", label: "LinkedIn" },
    NavLink { href: "#", label: "Instagram" },
];

pub const CONTACT_ADDRESS: [&str; 2] = ["123 Innovation Dr,", "Tech Valley, CA 94043"];
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_EMAIL: &str = "hello@devhire.com";
