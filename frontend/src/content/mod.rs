//! Static site content. Everything here is compiled in; pages only read it.

pub mod pricing;
pub mod projects;
pub mod services;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: &[Faq] = &[
    Faq {
        question: "How long does a typical project take?",
        answer: "Most websites take 4-8 weeks from kickoff to launch, depending on scope. Rush projects available for an additional fee.",
    },
    Faq {
        question: "Do you offer design and development, or just one?",
        answer: "We're a full-service agency. We handle design, development, SEO, and ongoing support.",
    },
    Faq {
        question: "What does pricing look like?",
        answer: "Projects range from $3,000 to $25,000+ depending on complexity. We'll provide a detailed quote after our discovery call.",
    },
    Faq {
        question: "Will I be able to update my website myself?",
        answer: "Yes. We build with user-friendly CMS options or provide training for code-based updates.",
    },
    Faq {
        question: "Do you provide hosting and maintenance?",
        answer: "We can recommend hosting (Vercel, Netlify) or manage it for you. Maintenance packages available.",
    },
    Faq {
        question: "How do you handle SEO?",
        answer: "Technical SEO is built-in: fast load times, clean code, proper meta tags. Content SEO is an add-on service.",
    },
    Faq {
        question: "What do you need from me to get started?",
        answer: "Your goals, target audience, brand assets (logo, colors), content, and example sites you like.",
    },
    Faq {
        question: "Do you work with startups or just established brands?",
        answer: "Both. We've worked with pre-launch startups and Fortune 500 companies.",
    },
    Faq {
        question: "Can you work with our existing brand?",
        answer: "Absolutely. We can adapt to your brand guidelines or help refresh your visual identity.",
    },
    Faq {
        question: "What if I need changes after launch?",
        answer: "We offer revision rounds during the project, plus post-launch support packages.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: Option<&'static str>,
    pub verified: bool,
}

impl Testimonial {
    pub fn byline(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }

    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Working with Aelio was seamless. They delivered a stunning site ahead of schedule, and our conversion rate increased by 40%.",
        author: "Michael Chen",
        role: "CEO",
        company: "TechFlow",
        avatar: None,
        verified: true,
    },
    Testimonial {
        quote: "The attention to detail is unmatched. Our new website loads instantly and looks incredible on every device.",
        author: "Emily Rodriguez",
        role: "Founder",
        company: "Bloom Studio",
        avatar: None,
        verified: true,
    },
    Testimonial {
        quote: "Best investment we made this year. Aelio didn't just build a website, they built a growth engine.",
        author: "David Park",
        role: "CMO",
        company: "Elevate Fitness",
        avatar: None,
        verified: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(FAQS.len(), 10);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.verified));
    }

    #[test]
    fn test_testimonial_byline_and_initials() {
        let first = &TESTIMONIALS[0];
        assert_eq!(first.byline(), "CEO, TechFlow");
        assert_eq!(first.initials(), "MC");
    }
}
