use leptos::prelude::*;

use crate::content::{Project, SITE};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"Featured Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SITE
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg overflow-hidden transform transition-all duration-300 hover:scale-105 hover:-translate-y-1">
            <img src=project.image alt=project.title.clone() class="w-full h-48 object-cover" />
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 bg-indigo-100 dark:bg-indigo-900 text-indigo-800 dark:text-indigo-200 text-sm rounded-full">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center text-indigo-600 dark:text-indigo-400 hover:underline"
                >
                    "View Project"
                    <span class="ml-1">"→"</span>
                </a>
            </div>
        </div>
    }
}
