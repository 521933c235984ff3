//! Bodies for the portfolio windows. Anything not listed here renders its title only.

use desktop_runtime::WindowContentRegistry;
use leptos::*;

#[component]
fn Section(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="window-section">
            <h2>{heading}</h2>
            {children()}
        </section>
    }
}

fn about() -> View {
    view! {
        <Section heading="About">
            <p>"Software engineer building web and systems projects."</p>
        </Section>
    }
    .into_view()
}

fn skills() -> View {
    let skills = ["Rust", "TypeScript", "React", "Leptos", "SQL"];
    view! {
        <Section heading="Skills">
            <ul class="skill-list">
                {skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
            </ul>
        </Section>
    }
    .into_view()
}

fn projects() -> View {
    let projects = [
        "E-Commerce Platform",
        "Task Management App",
        "AI Chat Assistant",
        "Portfolio Website",
        "Weather Dashboard",
        "Social Media Analytics",
    ];
    view! {
        <Section heading="Projects">
            <ul class="project-list">
                {projects.into_iter().map(|title| view! { <li>{title}</li> }).collect_view()}
            </ul>
        </Section>
    }
    .into_view()
}

fn contact() -> View {
    view! {
        <Section heading="Contact">
            <p>"Reach out through the GitHub or LinkedIn links in the dock."</p>
        </Section>
    }
    .into_view()
}

pub(crate) fn portfolio_windows() -> WindowContentRegistry {
    WindowContentRegistry::new()
        .with("about", about)
        .with("skills", skills)
        .with("projects", projects)
        .with("contact", contact)
}
