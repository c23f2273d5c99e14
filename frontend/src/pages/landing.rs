
use yew::prelude::*;
use chrono::Datelike;
use crate::components::planner_form::PlannerForm;
use crate::pages::content::{
    footer_text, timeline_side, ABOUT_CARDS, HOW_IT_WORKS, ITINERARIES,
};


#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <img src="/travel-bg.jpg" alt="Travel background" class="hero-background" />
                <div class="hero-content">
                    <div class="hero-globe">{"🌍"}</div>
                    <h1 class="hero-title">{"GoGlobe"}</h1>
                    <p class="hero-tagline">{"Smarter Paths to Every Destination ✨"}</p>
                    <a href="#preferences" class="hero-cta">{"Start Planning"}</a>
                </div>
            </section>

            <section id="preferences" class="preferences-section">
                <h2 class="section-title">{"Add Your Preferences"}</h2>
                <PlannerForm />
            </section>

            <section id="how-it-works" class="how-it-works-section">
                <h2 class="section-title">{"How GoGlobe Works 🚀"}</h2>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    {
                        HOW_IT_WORKS.iter().enumerate().map(|(i, item)| {
                            html! {
                                <div class={classes!("timeline-item", timeline_side(i))}>
                                    <div class="timeline-card">
                                        <div class="timeline-step">{item.step}</div>
                                        <h3>{item.title}</h3>
                                        <p>{item.text}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="itinerary" class="itinerary-section">
                <h2 class="section-title">{"Preferred Itineraries 🌍"}</h2>
                <div class="itinerary-grid">
                    {
                        ITINERARIES.iter().map(|category| {
                            html! {
                                <div class="itinerary-category">
                                    <h3>{category.kind}</h3>
                                    <div class="itinerary-places">
                                        {
                                            category.places.iter().map(|place| {
                                                html! {
                                                    <div class="place-card">
                                                        <img src={place.img} alt={place.name} class="place-image" />
                                                        <div class="place-name">{place.name}</div>
                                                        <div class="place-details">
                                                            <h4>{place.name}</h4>
                                                            <p>{place.activities}</p>
                                                            <p>{place.must_visit}</p>
                                                            <p class="place-budget">{place.budget}</p>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="about" class="about-section">
                <h2 class="section-title">{"About Us"}</h2>
                <div class="about-grid">
                    {
                        ABOUT_CARDS.iter().map(|card| {
                            html! {
                                <div class="about-card">
                                    <img src={card.img} alt={card.title} class="about-image" />
                                    <div class="about-body">
                                        <h3>{card.title}</h3>
                                        <p>{card.text}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <footer class="landing-footer">
                {footer_text(year)}
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    color: #1f2937;
                    font-family: sans-serif;
                    scroll-behavior: smooth;
                }
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.75);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .hero-globe {
                    font-size: 4.5rem;
                    margin-bottom: 1.5rem;
                }
                .hero-title {
                    font-size: 4rem;
                    font-weight: 800;
                    color: white;
                }
                .hero-tagline {
                    margin-top: 1rem;
                    font-size: 1.5rem;
                    color: #f3f4f6;
                }
                .hero-cta, .generate-button {
                    display: inline-block;
                    margin-top: 2.5rem;
                    padding: 0.75rem 1.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: white;
                    background: #4f46e5;
                    border: none;
                    border-radius: 9999px;
                    text-decoration: none;
                    cursor: pointer;
                }
                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                    color: #4f46e5;
                }
                .preferences-section, .how-it-works-section, .itinerary-section, .about-section {
                    padding: 5rem 1.5rem;
                }
                .preference-grid, .about-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                }
                .preference-card {
                    position: relative;
                }
                .preference-body, .timeline-card, .place-card, .about-card, .plan-viewer {
                    position: relative;
                    background: white;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                }
                .preference-body input {
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    box-sizing: border-box;
                }
                .accent-blue { color: #2563eb; }
                .accent-pink { color: #db2777; }
                .accent-yellow { color: #ca8a04; }
                .generate-row {
                    text-align: center;
                }
                .plan-viewer {
                    max-width: 48rem;
                    margin: 3rem auto 0;
                    text-align: left;
                }
                .plan-text {
                    white-space: pre-line;
                    color: #374151;
                }
                .timeline {
                    position: relative;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .timeline-line {
                    position: absolute;
                    left: 50%;
                    height: 100%;
                    border-left: 4px solid #a5b4fc;
                }
                .timeline-item {
                    display: flex;
                    margin-bottom: 3rem;
                }
                .timeline-left { justify-content: flex-start; }
                .timeline-right { justify-content: flex-end; }
                .timeline-card { width: 41%; }
                .itinerary-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 3rem;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                }
                .itinerary-places {
                    display: grid;
                    gap: 1.5rem;
                }
                .place-card {
                    overflow: hidden;
                    padding: 0;
                }
                .place-image, .about-image {
                    width: 100%;
                    height: 14rem;
                    object-fit: cover;
                }
                .place-name {
                    padding: 1rem;
                    text-align: center;
                    font-weight: 600;
                }
                .place-details {
                    position: absolute;
                    inset: 0;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.95);
                    transform: translateY(100%);
                    transition: transform 0.5s ease-in-out;
                }
                .place-card:hover .place-details {
                    transform: translateY(0);
                }
                .place-budget {
                    font-weight: 600;
                    color: #16a34a;
                }
                .about-section {
                    text-align: center;
                }
                .about-card {
                    overflow: hidden;
                    padding: 0;
                }
                .about-body {
                    padding: 1.5rem;
                }
                .landing-footer {
                    padding: 1.5rem;
                    background: #1f2937;
                    color: #e5e7eb;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
