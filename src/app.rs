mod about;
mod background;
mod contact;
mod footer;
mod header;
mod hero;
mod loading;
mod projects;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE;
use about::About;
use background::AnimatedBackground;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use loading::LoadingGate;
use projects::Projects;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", SITE.identity.name) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The single page of the site. Everything stays behind the loading gate
/// until the gate opens, then mounts in one pass.
#[component]
fn HomePage() -> impl IntoView {
    provide_theme();

    view! {
        <Title text="Portfolio" />
        <LoadingGate>
            <div class="min-h-screen flex flex-col text-gray-800 dark:text-white">
                <AnimatedBackground />
                <Header />
                <main class="flex-grow">
                    <Hero />
                    <About />
                    <Projects />
                    <Contact />
                </main>
                <Footer />
            </div>
        </LoadingGate>
    }
}
