#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectResult {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub services: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub year: u16,
    pub thumbnail: &'static str,
    pub hero_image: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [ProjectResult],
    pub gallery: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
}

const fn result(label: &'static str, value: &'static str) -> ProjectResult {
    ProjectResult { label, value }
}

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "techflow-redesign",
        title: "TechFlow Platform Redesign",
        summary: "A complete UX overhaul for a B2B SaaS platform, increasing user engagement by 200%.",
        services: &["Web Design", "Development"],
        tags: &["Next.js", "React", "UX Design", "B2B"],
        year: 2024,
        thumbnail: "/images/dashboard.png",
        hero_image: "/images/dashboard.png",
        challenge: "TechFlow's legacy platform had a 40% bounce rate and poor user retention. Users found the interface confusing and slow.",
        solution: "We conducted user research, redesigned the entire platform with a focus on clarity and speed, and rebuilt it for 10x faster load times.",
        results: &[
            result("User Engagement", "+200%"),
            result("Load Time", "0.8s"),
            result("Bounce Rate", "-60%"),
        ],
        gallery: &["/images/dashboard.png", "/images/laptop.png", "/images/webdesign.jpg"],
        tech_stack: &["Next.js", "TypeScript", "Tailwind CSS", "Framer Motion", "PostgreSQL"],
    },
    Project {
        slug: "bloom-ecommerce",
        title: "Bloom Studio E-Commerce",
        summary: "High-converting e-commerce site with custom Shopify integration, boosting sales by 180%.",
        services: &["E-Commerce", "Web Development"],
        tags: &["Shopify", "Next.js", "E-Commerce"],
        year: 2024,
        thumbnail: "/images/webdesign.jpg",
        hero_image: "/images/webdesign.jpg",
        challenge: "Bloom needed a modern e-commerce platform that could handle high traffic and convert visitors into customers.",
        solution: "Built a headless Shopify storefront implementing advanced filtering, fast checkout, and mobile-first design.",
        results: &[
            result("Sales Increase", "+180%"),
            result("Conversion Rate", "+45%"),
            result("Page Speed", "1.2s"),
        ],
        gallery: &["/images/webdesign.jpg", "/images/branding.jpg"],
        tech_stack: &["Next.js", "Shopify", "TypeScript", "Tailwind CSS"],
    },
    Project {
        slug: "elevate-fitness",
        title: "Elevate Fitness Brand & Website",
        summary: "Complete brand identity and website redesign for a fitness startup, increasing membership signups by 250%.",
        services: &["Branding", "Web Design", "Development"],
        tags: &["Branding", "Next.js", "Fitness"],
        year: 2024,
        thumbnail: "/images/branding.jpg",
        hero_image: "/images/branding.jpg",
        challenge: "Elevate needed a strong brand identity and website to compete in the crowded fitness market.",
        solution: "Created a bold, energetic brand system and built a conversion-focused website with integrated booking and payment.",
        results: &[
            result("Signups", "+250%"),
            result("Brand Recognition", "+300%"),
            result("Mobile Traffic", "+180%"),
        ],
        gallery: &["/images/branding.jpg", "/images/digitalmarketing.jpg"],
        tech_stack: &["Next.js", "Framer Motion", "Stripe"],
    },
    Project {
        slug: "summit-saas",
        title: "Summit SaaS Dashboard",
        summary: "Enterprise SaaS platform with advanced analytics and real-time collaboration features.",
        services: &["Web Development", "UX Design"],
        tags: &["SaaS", "Next.js", "Enterprise"],
        year: 2023,
        thumbnail: "/images/laptop.png",
        hero_image: "/images/laptop.png",
        challenge: "Summit needed a scalable dashboard that could handle complex data visualization and real-time updates.",
        solution: "Built a performant dashboard with server components, optimized data fetching, and intuitive UX patterns.",
        results: &[
            result("User Satisfaction", "+95%"),
            result("Load Time", "0.9s"),
            result("Task Completion", "+65%"),
        ],
        gallery: &["/images/laptop.png", "/images/dashboard.png"],
        tech_stack: &["Next.js", "React", "TypeScript", "PostgreSQL"],
    },
    Project {
        slug: "horizon-landing",
        title: "Horizon Landing Page",
        summary: "High-converting landing page that generated 500+ qualified leads in the first month.",
        services: &["Landing Pages", "Web Design"],
        tags: &["Landing Page", "Conversion", "Next.js"],
        year: 2024,
        thumbnail: "/images/webdesign.jpg",
        hero_image: "/images/webdesign.jpg",
        challenge: "Horizon needed a landing page that could convert visitors at scale for their product launch.",
        solution: "Designed and built a conversion-optimized landing page with A/B testing, fast load times, and clear value proposition.",
        results: &[
            result("Leads Generated", "500+"),
            result("Conversion Rate", "12%"),
            result("Load Time", "0.7s"),
        ],
        gallery: &["/images/webdesign.jpg"],
        tech_stack: &["Next.js", "Tailwind CSS", "Vercel Analytics"],
    },
    Project {
        slug: "acme-corp",
        title: "Acme Corp Website Redesign",
        summary: "Modern corporate website redesign that improved brand perception and increased inquiries by 140%.",
        services: &["Web Design", "Development", "SEO"],
        tags: &["Corporate", "Next.js", "SEO"],
        year: 2023,
        thumbnail: "/images/digitalmarketing.jpg",
        hero_image: "/images/digitalmarketing.jpg",
        challenge: "Acme's outdated website didn't reflect their industry leadership and was losing potential clients.",
        solution: "Redesigned the entire site with modern UX, improved SEO, and faster performance to better represent the brand.",
        results: &[
            result("Inquiries", "+140%"),
            result("SEO Rankings", "+85%"),
            result("Time on Site", "+200%"),
        ],
        gallery: &["/images/digitalmarketing.jpg", "/images/branding.jpg"],
        tech_stack: &["Next.js", "TypeScript", "Tailwind CSS"],
    },
];

pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

/// Other projects to suggest under a case study, most recent first.
pub fn related_projects(slug: &str, limit: usize) -> Vec<&'static Project> {
    let mut others: Vec<&'static Project> = PROJECTS.iter().filter(|p| p.slug != slug).collect();
    others.sort_by(|a, b| b.year.cmp(&a.year));
    others.truncate(limit);
    others
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = PROJECTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), PROJECTS.len());
    }

    #[test]
    fn test_project_by_slug() {
        assert_eq!(project_by_slug("summit-saas").map(|p| p.year), Some(2023));
        assert!(project_by_slug("missing").is_none());
    }

    #[test]
    fn test_every_project_has_results_and_gallery() {
        for project in PROJECTS {
            assert!(!project.results.is_empty(), "{} has no results", project.slug);
            assert!(!project.gallery.is_empty(), "{} has no gallery", project.slug);
        }
    }

    #[test]
    fn test_related_excludes_self_and_limits() {
        let related = related_projects("techflow-redesign", 3);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|p| p.slug != "techflow-redesign"));
        assert!(related.iter().all(|p| p.year == 2024));
    }
}
