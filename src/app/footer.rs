use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!(
        "© {} {}. All rights reserved.",
        env!("BUILD_YEAR"),
        SITE.identity.name
    );

    view! {
        <footer class="bg-gray-800 text-white py-8">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class="mb-4 md:mb-0">{copyright}</p>
                    <div class="flex space-x-4">
                        {SITE
                            .social
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url.clone()
                                        class="hover:text-indigo-400 text-xl"
                                        aria-label=link.name.clone()
                                    >
                                        <i class=link.icon.clone()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
