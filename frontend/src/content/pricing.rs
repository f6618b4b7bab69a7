#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub expanded_features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

impl Plan {
    /// Features to list on the card, including the long list once expanded.
    pub fn visible_features(&self, expanded: bool) -> Vec<&'static str> {
        let mut features = self.features.to_vec();
        if expanded {
            features.extend_from_slice(self.expanded_features);
        }
        features
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingTab {
    pub id: &'static str,
    pub label: &'static str,
    pub plans: &'static [Plan],
}

const UPON_REQUEST: &str = "Upon Request";

pub static PRICING_TABS: &[PricingTab] = &[
    PricingTab {
        id: "web",
        label: "Web Design & Development",
        plans: &[
            Plan {
                name: "Starter Site",
                price: UPON_REQUEST,
                tagline: "Perfect for new brands",
                features: &["3–5 page marketing site", "Conversion-focused layouts", "Basic analytics setup"],
                expanded_features: &[
                    "Responsive design for all devices",
                    "SEO optimization basics",
                    "Contact form integration",
                    "Social media integration",
                    "1 round of revisions",
                    "2 weeks delivery time",
                ],
                cta: "Request Quote",
                popular: false,
            },
            Plan {
                name: "Growth Site",
                price: UPON_REQUEST,
                tagline: "Built to scale with your brand",
                features: &["Up to 10 pages", "Reusable components & sections", "Blog or resources hub"],
                expanded_features: &[
                    "Everything in Starter, plus:",
                    "Advanced SEO optimization",
                    "Content management system",
                    "Custom animations & interactions",
                    "E-commerce integration ready",
                    "3 rounds of revisions",
                    "3-4 weeks delivery time",
                    "Performance optimization",
                ],
                cta: "Request Quote",
                popular: true,
            },
            Plan {
                name: "Product Site",
                price: UPON_REQUEST,
                tagline: "Complex or product-led experiences",
                features: &["Custom integrations", "Complex information architecture", "Motion & interaction design"],
                expanded_features: &[
                    "Everything in Growth, plus:",
                    "Custom API integrations",
                    "User authentication systems",
                    "Advanced analytics & tracking",
                    "Multi-language support",
                    "Enterprise-grade security",
                    "Unlimited revisions",
                    "6-8 weeks delivery time",
                    "Dedicated project manager",
                ],
                cta: "Talk to Sales",
                popular: false,
            },
        ],
    },
    PricingTab {
        id: "video",
        label: "Video Production",
        plans: &[
            Plan {
                name: "Essential",
                price: UPON_REQUEST,
                tagline: "Perfect for social media content",
                features: &["Concept development", "Basic filming & production", "Standard editing", "1 revision round"],
                expanded_features: &[
                    "Up to 2 minutes final video",
                    "Basic color correction",
                    "Simple motion graphics",
                    "Social media formats",
                    "2-3 weeks delivery",
                    "Stock music & sound effects",
                ],
                cta: "Request Quote",
                popular: false,
            },
            Plan {
                name: "Professional",
                price: UPON_REQUEST,
                tagline: "For brand videos and commercials",
                features: &[
                    "Everything in Essential, plus:",
                    "Advanced filming & production",
                    "Professional editing & post-production",
                    "Custom motion graphics",
                ],
                expanded_features: &[
                    "Up to 5 minutes final video",
                    "Professional color grading",
                    "Custom animations",
                    "Multiple format delivery",
                    "3-4 weeks delivery",
                    "Custom music composition",
                    "Voice-over recording",
                    "3 revision rounds",
                ],
                cta: "Request Quote",
                popular: true,
            },
            Plan {
                name: "Enterprise",
                price: UPON_REQUEST,
                tagline: "Full-scale production projects",
                features: &[
                    "Everything in Professional, plus:",
                    "Multi-day production",
                    "Cinematic quality",
                    "Full creative team",
                ],
                expanded_features: &[
                    "Unlimited video length",
                    "Multiple video deliverables",
                    "Aerial & specialty shots",
                    "Professional actors & talent",
                    "6-8 weeks delivery",
                    "Original music composition",
                    "Full brand integration",
                    "Unlimited revisions",
                    "Dedicated project manager",
                ],
                cta: "Talk to Sales",
                popular: false,
            },
        ],
    },
    PricingTab {
        id: "branding",
        label: "Branding",
        plans: &[
            Plan {
                name: "Starter Brand",
                price: UPON_REQUEST,
                tagline: "Essential brand identity",
                features: &[
                    "Logo design (3 concepts)",
                    "Basic color palette",
                    "Typography selection",
                    "Brand guidelines (basic)",
                ],
                expanded_features: &[
                    "1 primary logo concept",
                    "2 alternative logo variations",
                    "Color palette (3-5 colors)",
                    "Font selection (2-3 fonts)",
                    "Basic brand guidelines PDF",
                    "2 revision rounds",
                    "3-4 weeks delivery",
                ],
                cta: "Request Quote",
                popular: false,
            },
            Plan {
                name: "Complete Brand",
                price: UPON_REQUEST,
                tagline: "Comprehensive brand identity",
                features: &[
                    "Everything in Starter, plus:",
                    "Full brand system",
                    "Extended color palette",
                    "Comprehensive brand guidelines",
                ],
                expanded_features: &[
                    "Multiple logo variations",
                    "Logo usage guidelines",
                    "Extended color palette (8-10 colors)",
                    "Complete typography system",
                    "Brand voice & messaging guide",
                    "Business card design",
                    "Letterhead & envelope design",
                    "Social media templates",
                    "4-6 weeks delivery",
                    "3 revision rounds",
                ],
                cta: "Request Quote",
                popular: true,
            },
            Plan {
                name: "Enterprise Brand",
                price: UPON_REQUEST,
                tagline: "Full brand transformation",
                features: &[
                    "Everything in Complete, plus:",
                    "Brand strategy & positioning",
                    "Full brand application system",
                    "Multi-brand guidelines",
                ],
                expanded_features: &[
                    "Brand research & strategy",
                    "Competitive analysis",
                    "Complete visual identity system",
                    "Brand architecture",
                    "Full application examples",
                    "Packaging design (if applicable)",
                    "Environmental design guidelines",
                    "Brand training & workshops",
                    "6-8 weeks delivery",
                    "Unlimited revisions",
                    "Dedicated brand strategist",
                ],
                cta: "Talk to Sales",
                popular: false,
            },
        ],
    },
    PricingTab {
        id: "hosting",
        label: "Maintenance & Hosting",
        plans: &[
            Plan {
                name: "Care",
                price: "$99/mo",
                tagline: "Essentials for smaller sites",
                features: &["Managed hosting", "Uptime monitoring", "Monthly security patches"],
                expanded_features: &[
                    "99.9% uptime guarantee",
                    "Daily backups",
                    "SSL certificate included",
                    "Basic performance optimization",
                    "Email support (48h response)",
                    "CDN included",
                ],
                cta: "Select Care",
                popular: false,
            },
            Plan {
                name: "Care+",
                price: "$249/mo",
                tagline: "For growing sites and teams",
                features: &["Everything in Care", "Priority support", "Quarterly optimization review"],
                expanded_features: &[
                    "Everything in Care, plus:",
                    "99.99% uptime guarantee",
                    "Real-time backups",
                    "Advanced security monitoring",
                    "Performance optimization",
                    "Priority support (24h response)",
                    "Quarterly performance reports",
                    "Staging environment",
                ],
                cta: "Select Care+",
                popular: true,
            },
            Plan {
                name: "Enterprise Care",
                price: "Custom",
                tagline: "For mission‑critical workloads",
                features: &["SLAs & SLOs", "Dedicated engineer", "Compliance support"],
                expanded_features: &[
                    "Everything in Care+, plus:",
                    "Custom SLA agreements",
                    "Dedicated support engineer",
                    "HIPAA/GDPR compliance",
                    "24/7 phone support",
                    "Custom infrastructure setup",
                    "Monthly strategy sessions",
                    "White-glove onboarding",
                ],
                cta: "Talk to Sales",
                popular: false,
            },
        ],
    },
];

/// Falls back to the first tab for unknown ids.
pub fn tab_by_id(id: &str) -> &'static PricingTab {
    PRICING_TABS
        .iter()
        .find(|tab| tab.id == id)
        .unwrap_or(&PRICING_TABS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_popular_plan_per_tab() {
        for tab in PRICING_TABS {
            assert_eq!(tab.plans.iter().filter(|p| p.popular).count(), 1, "{}", tab.id);
        }
    }

    #[test]
    fn test_unknown_tab_falls_back() {
        assert_eq!(tab_by_id("branding").label, "Branding");
        assert_eq!(tab_by_id("nope").id, "web");
    }

    #[test]
    fn test_visible_features() {
        let plan = &tab_by_id("hosting").plans[0];
        assert_eq!(plan.visible_features(false).len(), 3);
        assert_eq!(plan.visible_features(true).len(), 9);
        assert_eq!(plan.visible_features(true)[3], "99.9% uptime guarantee");
    }
}
