use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::use_contact_opener;
use crate::content::projects::PROJECTS;
use crate::content::services::SERVICES;
use crate::content::{FAQS, TESTIMONIALS};
use crate::motion::SceneFrame;
use crate::scroll::use_scroll_progress;
use crate::Route;

struct Stat {
    number: &'static str,
    label: &'static str,
    footnote: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { number: "150+", label: "Websites Launched", footnote: "Since 2020" },
    Stat { number: "95+", label: "Avg Lighthouse Score", footnote: "Across all metrics" },
    Stat { number: "< 2s", label: "Load Time Target", footnote: "On optimized hosting" },
];

const FEATURED_COUNT: usize = 3;

#[function_component(SceneTransition)]
fn scene_transition() -> Html {
    let container = use_node_ref();
    let progress = use_scroll_progress(container.clone());
    let frame = SceneFrame::at(progress);

    html! {
        <section class="scene" ref={container}>
            <div class="scene-sticky">
                <div class="scene-video" style={frame.video_style()}>
                    <video src="/videos/showreel.mp4" autoplay={true} muted={true} loop={true} playsinline={true}></video>
                </div>
                <div class="scene-tag" style={frame.tag_style()}>
                    {"Design. Build. Launch."}
                </div>
                <div class="scene-overlay" style={frame.overlay_style()}></div>
                <div class="scene-frame" style={frame.frame_style()}>
                    <img src="/images/dashboard.png" alt="Client dashboard" />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            if *is_open {
                <div class="faq-answer"><p>{ props.answer }</p></div>
            }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let open_contact = use_contact_opener();
    let on_proposal = {
        let open_contact = open_contact.clone();
        Callback::from(move |_: MouseEvent| open_contact.emit(()))
    };
    let on_start = Callback::from(move |_: MouseEvent| open_contact.emit(()));

    html! {
        <main class="home">
            <section class="hero">
                <h1>{"Design-led websites that feel expensive."}</h1>
                <p class="hero-lead">
                    {"Aelio is a boutique digital studio crafting modern, conversion-ready web experiences for ambitious brands."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Work} classes="button primary">{"View Work"}</Link<Route>>
                    <button class="button outline" onclick={on_proposal}>{"Get a Proposal"}</button>
                </div>
            </section>

            <section class="stats">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-number">{ stat.number }</div>
                        <div class="stat-label">{ stat.label }</div>
                        <div class="stat-footnote">{ stat.footnote }</div>
                    </div>
                }) }
            </section>

            <SceneTransition />

            <section class="services-list">
                <h2>{"What we do"}</h2>
                { for SERVICES.iter().map(|service| html! {
                    <article class="service-row" id={service.id}>
                        <span class="service-number">{ service.number }</span>
                        <div>
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                            <ul class="tag-list">
                                { for service.tags.iter().map(|tag| html! { <li>{ *tag }</li> }) }
                            </ul>
                            <div class="service-details">
                                <div>
                                    <h4>{"Deliverables"}</h4>
                                    <ul>
                                        { for service.deliverables.iter().map(|item| html! { <li>{ *item }</li> }) }
                                    </ul>
                                </div>
                                <div>
                                    <h4>{"Tools"}</h4>
                                    <p>{ service.tech_stack.join(" · ") }</p>
                                </div>
                            </div>
                            <p class="service-timeline">{ format!("Timeline: {}", service.timeline) }</p>
                        </div>
                    </article>
                }) }
            </section>

            <section class="featured-work">
                <h2>{"Featured work"}</h2>
                <div class="project-grid">
                    { for PROJECTS.iter().take(FEATURED_COUNT).map(|project| html! {
                        <Link<Route> to={Route::Project { slug: project.slug.to_string() }} classes="project-card">
                            <img src={project.thumbnail} alt={project.title} />
                            <h3>{ project.title }</h3>
                            <p>{ project.summary }</p>
                        </Link<Route>>
                    }) }
                </div>
                <Link<Route> to={Route::Work} classes="button outline">{"See all projects"}</Link<Route>>
            </section>

            <section class="testimonials">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <figure class="testimonial">
                        <blockquote>{ t.quote }</blockquote>
                        <figcaption>
                            <span class="avatar">
                                if let Some(src) = t.avatar {
                                    <img src={src} alt={t.author} />
                                } else {
                                    { t.initials() }
                                }
                            </span>
                            <strong>{ t.author }</strong>
                            <span>{ t.byline() }</span>
                            if t.verified {
                                <span class="verified">{"Verified client"}</span>
                            }
                        </figcaption>
                    </figure>
                }) }
            </section>

            <section class="cta">
                <h2>{"Ready to Build Something Exceptional?"}</h2>
                <p>{"Let's discuss your project and see how we can help you grow."}</p>
                <div class="cta-actions">
                    <button class="button light" onclick={on_start}>{"Start a Project"}</button>
                    <Link<Route> to={Route::Pricing} classes="button outline-light">{"View Pricing"}</Link<Route>>
                </div>
            </section>

            <section class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                { for FAQS.iter().map(|faq| html! {
                    <FaqItem question={faq.question} answer={faq.answer} />
                }) }
            </section>
        </main>
    }
}
