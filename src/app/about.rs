use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"About Me"</h2>
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="md:w-1/2 mb-8 md:mb-0">
                        <img
                            src=SITE.identity.portrait.clone()
                            alt=SITE.identity.name.clone()
                            class="w-64 h-64 rounded-full object-cover mx-auto md:mx-0"
                        />
                    </div>
                    <div class="md:w-1/2">
                        {SITE
                            .identity
                            .bio
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="text-lg text-gray-600 dark:text-gray-300 mb-6">
                                        {paragraph.clone()}
                                    </p>
                                }
                            })
                            .collect_view()}
                        <div class="mt-8">
                            <h3 class="text-xl font-semibold mb-4">"My Skills"</h3>
                            {SITE
                                .skills
                                .iter()
                                .map(|skill| {
                                    view! { <Skill name=skill.name.clone() level=skill.level /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skill(name: String, level: u8) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex justify-between mb-1">
                <span class="text-gray-700 dark:text-gray-300">{name}</span>
                <span class="text-gray-600 dark:text-gray-400">{format!("{level}%")}</span>
            </div>
            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5">
                <div
                    class="bg-indigo-600 h-2.5 rounded-full skill-bar"
                    style=format!("width: {level}%")
                ></div>
            </div>
        </div>
    }
}
