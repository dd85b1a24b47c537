use yew::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::nav::Nav;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::scroll_to_top::ScrollToTop;
use crate::config::SiteConfig;
use crate::hooks::{
    use_click_tracking, use_load_diagnostics, use_reveal_on_scroll, use_scroll_snapshot,
    use_smooth_anchors,
};

const SERVICES: [(&str, &str, &str); 5] = [
    ("🏠", "Residential Cleaning", "Weekly, bi-weekly or one-off cleans for every room of your home."),
    ("🏢", "Commercial Cleaning", "Offices and storefronts cleaned after hours, on your schedule."),
    ("✨", "Deep Cleaning", "Top-to-bottom detail work: baseboards, grout, appliances and more."),
    ("📦", "Move In/Out Cleaning", "Get your deposit back or start fresh in a spotless new place."),
    ("🪟", "Carpet & Window Cleaning", "Steam-cleaned carpets and streak-free windows inside and out."),
];

const FEATURES: [(&str, &str); 4] = [
    ("Eco-friendly products", "Safe for kids, pets and the planet."),
    ("Background-checked staff", "Every cleaner is vetted, insured and trained."),
    ("Flexible scheduling", "Mornings, evenings and weekends available."),
    ("100% satisfaction", "Not happy? We come back and re-clean for free."),
];

const TRUST: [&str; 3] = ["Licensed & Insured", "5-Star Rated", "10+ Years Experience"];

const REVIEWS: [(&str, &str); 3] = [
    ("Maria G.", "They left my kitchen cleaner than the day we moved in."),
    ("David R.", "Reliable, friendly and fast. Our office has never looked better."),
    ("Priya S.", "The deep clean before our move-out got us our full deposit back."),
];

const GALLERY: [&str; 4] = ["Kitchen refresh", "Living room", "Bathroom detail", "Office lobby"];

const AREAS: [&str; 6] = ["Downtown", "Riverside", "Oak Hills", "Westfield", "Lakeside", "North End"];

#[function_component(Home)]
pub fn home() -> Html {
    let config = SiteConfig::DEFAULT;
    let snapshot = use_scroll_snapshot(config);
    use_smooth_anchors(config);
    use_reveal_on_scroll(config);
    use_click_tracking();
    use_load_diagnostics();

    html! {
        <>
            <ScrollProgress progress={snapshot.progress} />
            <Nav scrolled={snapshot.navbar.is_scrolled()} active_section={snapshot.active_section.clone()} {config} />

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Professional Cleaning You Can Trust"}</h1>
                    <p>{"Homes and offices, spotless every time."}</p>
                    <div class="hero-buttons">
                        <a href="#booking" class="btn btn-primary">{"Book a Cleaning"}</a>
                        <a href="tel:+15551234567" class="btn btn-secondary">{"📞 (555) 123-4567"}</a>
                    </div>
                    <div class="trust-badges">
                        { for TRUST.iter().map(|badge| html! {
                            <div class="trust-item">{*badge}</div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"Our Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(icon, name, blurb)| html! {
                        <div class="service-card">
                            <div class="service-icon">{*icon}</div>
                            <h3>{*name}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="features">
                <h2>{"Why Choose SparkleClean"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <div class="feature-item">
                            <h4>{*title}</h4>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
                <div class="gallery-grid">
                    { for GALLERY.iter().map(|caption| html! {
                        <div class="gallery-item">{*caption}</div>
                    }) }
                </div>
            </section>

            <section id="reviews" class="reviews">
                <h2>{"What Our Clients Say"}</h2>
                <div class="reviews-grid">
                    { for REVIEWS.iter().map(|(author, quote)| html! {
                        <div class="review-card">
                            <p class="review-text">{format!("“{}”", quote)}</p>
                            <p class="review-author">{*author}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="areas" class="service-areas">
                <h2>{"Areas We Serve"}</h2>
                <div class="areas-grid">
                    { for AREAS.iter().map(|area| html! {
                        <div class="area-item">{*area}</div>
                    }) }
                </div>
            </section>

            <section id="booking" class="booking">
                <h2>{"Book Your Cleaning"}</h2>
                <BookingForm {config} />
            </section>

            <section id="contact" class="contact">
                <h2>{"Get In Touch"}</h2>
                <a href="tel:+15551234567" class="contact-link">{"📞 Call (555) 123-4567"}</a>
                <a href="https://wa.me/15551234567" target="_blank" rel="noopener noreferrer" class="contact-link">
                    {"💬 Message us on WhatsApp"}
                </a>
            </section>

            <footer class="footer">
                <p>{"© SparkleClean Professional Cleaning Services"}</p>
            </footer>

            <ScrollToTop visible={snapshot.show_scroll_to_top} />
        </>
    }
}
