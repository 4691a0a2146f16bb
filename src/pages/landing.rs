use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::demo_preview::DemoPreview;
use crate::components::faq::Faq;
use crate::components::header::Header;
use crate::hooks::use_scroll_reveal;

const STEPS: &[(&str, &str, &str)] = &[
    ("1", "Find the post", "Paste a link or pick content from your tagged mentions."),
    ("2", "Send the request", "A friendly, pre-approved message goes out from your brand account."),
    ("3", "Reuse with confidence", "The creator's approval is stored as a license you can point to."),
];

const FEATURES: &[(&str, &str)] = &[
    ("License vault", "Every approval is archived with the exact terms and a timestamp."),
    ("Tone scoring", "Requests are scored for clarity and friendliness before they go out."),
    ("Follow-ups", "Quiet creators get a polite reminder so nothing stalls."),
    ("Usage tracking", "See where each licensed post runs and when its rights expire."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_reveal();

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <Header />

            <section id="hero" class="hero">
                <div class="hero-content reveal">
                    <h1 class="hero-title">{"Reuse creator content, "}<span>{"with permission."}</span></h1>
                    <p class="hero-subtitle">
                        {"UGC Rights asks creators for usage rights on your behalf and keeps every approval on record."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta">{"Book a demo"}</a>
                        <a href="#demo" class="hero-secondary">{"See how it works"}</a>
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="steps-section">
                <div class="section-heading reveal">
                    <h2>{"Three steps to cleared content"}</h2>
                </div>
                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(i, (number, title, body))| html! {
                        <div class={classes!("step", if i % 2 == 0 { "reveal-left" } else { "reveal-right" })}>
                            <span class="step-number">{*number}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <DemoPreview />

            <section id="features" class="features-section">
                <div class="section-heading reveal">
                    <h2>{"Built for brand teams"}</h2>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(title, body)| html! {
                        <div class="feature-card reveal-scale">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <Faq />

            <ContactForm />

            <footer class="site-footer reveal-fade">
                <p>{format!("© {} UGC Rights. All rights reserved, and now yours too.", year)}</p>
            </footer>

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #0f172a;
                    background: #fff;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-heading h2 {
                    font-size: 2.4rem;
                    margin-bottom: 0.75rem;
                }

                .section-heading p {
                    color: #64748b;
                    font-size: 1.1rem;
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    background: radial-gradient(circle at top right, #ede9fe, #fff 60%);
                }

                .hero-content {
                    max-width: 760px;
                    text-align: center;
                }

                .hero-title {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }

                .hero-title span {
                    color: #6d28d9;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #475569;
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .hero-cta,
                .hero-secondary {
                    padding: 0.9rem 1.8rem;
                    border-radius: 10px;
                    font-weight: 600;
                    text-decoration: none;
                }

                .hero-cta {
                    background: #6d28d9;
                    color: #fff;
                }

                .hero-secondary {
                    border: 1px solid #cbd5e1;
                    color: #0f172a;
                }

                .steps-section,
                .features-section {
                    padding: 6rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .steps {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }

                .step-number {
                    display: inline-flex;
                    width: 2.5rem;
                    height: 2.5rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #ede9fe;
                    color: #6d28d9;
                    font-weight: 700;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .feature-card {
                    padding: 2rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 14px;
                }

                .feature-card p,
                .step p {
                    color: #64748b;
                    line-height: 1.6;
                }

                .reveal,
                .reveal-fade,
                .reveal-left,
                .reveal-right,
                .reveal-scale {
                    opacity: 0;
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .reveal { transform: translateY(30px); }
                .reveal-left { transform: translateX(-40px); }
                .reveal-right { transform: translateX(40px); }
                .reveal-scale { transform: scale(0.94); }

                .reveal.revealed,
                .reveal-fade.revealed,
                .reveal-left.revealed,
                .reveal-right.revealed,
                .reveal-scale.revealed {
                    opacity: 1;
                    transform: none;
                }

                .site-footer {
                    padding: 2.5rem 2rem;
                    text-align: center;
                    color: #94a3b8;
                    border-top: 1px solid #e2e8f0;
                }
                "#}
            </style>
        </div>
    }
}
