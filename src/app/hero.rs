use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="text-center z-10">
                <h1 class="text-5xl md:text-7xl font-bold mb-4">
                    "Hi, I'm "
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-purple-600 to-indigo-600">
                        {SITE.identity.name.clone()}
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 mb-8">
                    {SITE.identity.tagline.clone()}
                </p>
                <a
                    href="#projects"
                    class="inline-flex items-center bg-indigo-600 text-white px-8 py-3 rounded-full text-lg font-semibold hover:bg-indigo-700 transition-colors"
                >
                    "Explore My Work"
                    <span class="ml-2">"→"</span>
                </a>
            </div>
            <div class="absolute inset-0 flex items-center justify-center opacity-10 dark:opacity-5">
                <div class="w-[800px] h-[800px] bg-indigo-600 rounded-full blur-3xl"></div>
            </div>
        </section>
    }
}
