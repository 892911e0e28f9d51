// =============================================================================
// Folio Web - Home Page
// =============================================================================
// Table of Contents:
// 1. HomePage (preloader, chrome, sections)
// 2. Hero
// 3. About
// 4. Expertise
// 5. Skills
// 6. Experience
// 7. Projects
// 8. Contact
// =============================================================================

use folio_motion::RevealDirection;
use leptos::prelude::*;

use crate::components::{
    Button, ButtonVariant, ContactForm, CustomCursor, Footer, Header, NoticeToast, ParticleBackground,
    Preloader, ScrollReveal, SectionHeading, SectionNav, StatsCounter,
};
use crate::content::{self, CONTACT_INFO, EXPERIENCE, EXPERTISE, HIGHLIGHTS, PROFILE, PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::state::AppState;
use crate::utils::class_if;

// -----------------------------------------------------------------------------
// 1. HomePage
// -----------------------------------------------------------------------------

/// The single-page portfolio.
#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let (page_sections, header_sections) = match (content::page_sections(), content::header_sections()) {
        (Ok(page), Ok(header)) => (page, header),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("Cannot build page sections: {err}");
            return view! { <p class="fatal-error">"This page failed to load."</p> }.into_any();
        }
    };

    view! {
        <CustomCursor />

        <Show when=move || app_state.loading.get()>
            <Preloader />
        </Show>

        <Show when=move || !app_state.loading.get()>
            <div class=move || class_if("page page-home", "revealed", app_state.content_visible.get())>
                <Header sections=header_sections.clone() />
                <main>
                    <HeroSection />
                    <AboutSection />
                    <ScrollReveal delay_ms=150>
                        <StatsCounter />
                    </ScrollReveal>
                    <ExpertiseSection />
                    <SkillsSection />
                    <ExperienceSection />
                    <ProjectsSection />
                    <ContactSection />
                </main>
                <SectionNav sections=page_sections.clone() />
                <Footer />
                <NoticeToast />
            </div>
        </Show>
    }
    .into_any()
}

// -----------------------------------------------------------------------------
// 2. Hero
// -----------------------------------------------------------------------------

#[component]
fn HeroSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section id="hero" class="section hero-section">
            <ParticleBackground />
            <div class="container hero-content">
                <span class="hero-eyebrow">"Hello, I'm"</span>
                <h1 class="hero-title">{PROFILE.name}</h1>
                <p class="hero-role">{PROFILE.role}</p>
                <p class="hero-tagline">{PROFILE.tagline}</p>
                <div class="hero-actions">
                    <Button
                        label="View Projects"
                        on_click=Callback::new(move |_| {
                            app_state.navigate_to("projects");
                        })
                    />
                    <Button
                        label="Get In Touch"
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| {
                            app_state.navigate_to("contact");
                        })
                    />
                </div>
                <div class="hero-social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href target="_blank" rel="noopener noreferrer" class="social-link">
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. About
// -----------------------------------------------------------------------------

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about-section">
            <ScrollReveal delay_ms=100>
                <div class="container">
                    <SectionHeading tag="About Me" title="Building systems that last" />
                    <div class="about-grid">
                        <div class="about-copy">
                            {PROFILE.summary.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                        <div class="about-highlights">
                            {HIGHLIGHTS
                                .iter()
                                .map(|h| view! {
                                    <div class="highlight-card">
                                        <h3>{h.label}</h3>
                                        <p>{h.description}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </ScrollReveal>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 4. Expertise
// -----------------------------------------------------------------------------

#[component]
fn ExpertiseSection() -> impl IntoView {
    view! {
        <section id="expertise" class="section expertise-section">
            <ScrollReveal direction=RevealDirection::Left delay_ms=100 scale=true>
                <div class="container">
                    <SectionHeading tag="Core Expertise" title="What I do best" />
                    <div class="expertise-grid">
                        {EXPERTISE
                            .iter()
                            .map(|area| view! {
                                <article class="expertise-card">
                                    <h3>{area.title}</h3>
                                    <p>{area.description}</p>
                                    <ul>
                                        {area.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                                    </ul>
                                </article>
                            })
                            .collect_view()}
                    </div>
                </div>
            </ScrollReveal>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. Skills
// -----------------------------------------------------------------------------

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section skills-section">
            <ScrollReveal direction=RevealDirection::Right delay_ms=100 scale=true>
                <div class="container">
                    <SectionHeading tag="Skills" title="Technical toolbox" />
                    <div class="skills-grid">
                        {SKILLS
                            .iter()
                            .map(|category| view! {
                                <div class="skill-category">
                                    <h3>{category.title}</h3>
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| view! {
                                            <div class="skill-row">
                                                <div class="skill-meta">
                                                    <span>{skill.name}</span>
                                                    <span>{format!("{}%", skill.level)}</span>
                                                </div>
                                                <div class="skill-bar">
                                                    <div class="skill-fill" style:width=format!("{}%", skill.level)></div>
                                                </div>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </ScrollReveal>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 6. Experience
// -----------------------------------------------------------------------------

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="section experience-section">
            <ScrollReveal delay_ms=150>
                <div class="container">
                    <SectionHeading tag="Experience" title="Where I've worked" />
                    <ol class="timeline">
                        {EXPERIENCE
                            .iter()
                            .map(|role| view! {
                                <li class="timeline-item">
                                    <span class="timeline-period">{role.period}</span>
                                    <h3 class="timeline-role">{role.title}</h3>
                                    <p class="timeline-company">{role.company}</p>
                                    <ul class="timeline-points">
                                        {role.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                                    </ul>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>
            </ScrollReveal>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 7. Projects
// -----------------------------------------------------------------------------

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section projects-section">
            <ScrollReveal delay_ms=100 scale=true>
                <div class="container">
                    <SectionHeading tag="Projects" title="Selected work" />
                    <div class="projects-grid">
                        {PROJECTS
                            .iter()
                            .map(|project| view! {
                                <article class="project-card">
                                    <span class="project-category">{project.category}</span>
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <div class="project-tags">
                                        {project.tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
                                    </div>
                                </article>
                            })
                            .collect_view()}
                    </div>
                </div>
            </ScrollReveal>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 8. Contact
// -----------------------------------------------------------------------------

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section contact-section">
            <ScrollReveal delay_ms=150>
                <div class="container">
                    <SectionHeading
                        tag="Get In Touch"
                        title="Let's connect"
                        lead="Have a project in mind or need a backend engineer? I'd love to hear from you."
                    />
                    <div class="contact-grid">
                        <div class="contact-info">
                            {CONTACT_INFO
                                .iter()
                                .map(|item| view! {
                                    <div class="contact-item">
                                        <span class="contact-label">{item.label}</span>
                                        {match item.href {
                                            Some(href) => view! { <a href=href class="contact-value">{item.value}</a> }.into_any(),
                                            None => view! { <span class="contact-value">{item.value}</span> }.into_any(),
                                        }}
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <ContactForm />
                    </div>
                </div>
            </ScrollReveal>
        </section>
    }
}
