use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::use_contact_opener;
use crate::content::projects::{project_by_slug, related_projects, Project, PROJECTS};
use crate::Route;

const RELATED_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <Link<Route> to={Route::Project { slug: project.slug.to_string() }} classes="project-card">
            <img src={project.thumbnail} alt={project.title} />
            <div class="project-card-body">
                <span class="project-year">{ project.year }</span>
                <h3>{ project.title }</h3>
                <p>{ project.summary }</p>
                <ul class="tag-list">
                    { for project.tags.iter().map(|tag| html! { <li>{ *tag }</li> }) }
                </ul>
            </div>
        </Link<Route>>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    html! {
        <main class="work">
            <section class="work-hero">
                <h1>{"Selected work"}</h1>
                <p>{"Websites, products and brands we've shipped with our clients."}</p>
            </section>
            <section class="project-grid">
                { for PROJECTS.iter().map(|project| html! { <ProjectCard {project} /> }) }
            </section>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub slug: String,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let open_contact = use_contact_opener();

    let Some(project) = project_by_slug(&props.slug) else {
        log::warn!("No project with slug {}", props.slug);
        return html! { <ProjectNotFound /> };
    };

    let on_start = Callback::from(move |_: MouseEvent| open_contact.emit(()));

    html! {
        <main class="project-detail">
            <section class="project-hero">
                <Link<Route> to={Route::Work} classes="back-link">{"← All work"}</Link<Route>>
                <h1>{ project.title }</h1>
                <p class="project-summary">{ project.summary }</p>
                <p class="project-meta">
                    { format!("{} · {}", project.services.join(", "), project.year) }
                </p>
                <img src={project.hero_image} alt={project.title} class="project-hero-image" />
            </section>

            <section class="project-story">
                <div>
                    <h2>{"The challenge"}</h2>
                    <p>{ project.challenge }</p>
                </div>
                <div>
                    <h2>{"Our solution"}</h2>
                    <p>{ project.solution }</p>
                </div>
            </section>

            <section class="project-results">
                { for project.results.iter().map(|result| html! {
                    <div class="result">
                        <span class="result-value">{ result.value }</span>
                        <span class="result-label">{ result.label }</span>
                    </div>
                }) }
            </section>

            <section class="project-gallery">
                { for project.gallery.iter().map(|src| html! { <img src={*src} alt={project.title} /> }) }
            </section>

            <section class="project-stack">
                <h2>{"Tech stack"}</h2>
                <ul class="tag-list">
                    { for project.tech_stack.iter().map(|tech| html! { <li>{ *tech }</li> }) }
                </ul>
            </section>

            <section class="cta">
                <h2>{"Want results like these?"}</h2>
                <button class="button light" onclick={on_start}>{"Start a Project"}</button>
            </section>

            <section class="related">
                <h2>{"More projects"}</h2>
                <div class="project-grid">
                    { for related_projects(project.slug, RELATED_LIMIT).into_iter().map(|project| html! {
                        <ProjectCard {project} />
                    }) }
                </div>
            </section>
        </main>
    }
}

#[function_component(ProjectNotFound)]
fn project_not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Project not found"}</h1>
            <p>{"We couldn't find the project you were looking for."}</p>
            <Link<Route> to={Route::Work} classes="button primary">{"Back to work"}</Link<Route>>
        </main>
    }
}
