use leptos::{either::Either, prelude::*};

use crate::content::SITE;

use super::theme::use_theme;

/// Mobile menu visibility. The desktop nav ignores this entirely; the
/// secondary list renders iff open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct MenuState {
    open: bool,
}

impl MenuState {
    fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Selecting a nav entry always lands here, open or not.
    fn close(self) -> Self {
        Self { open: false }
    }

    fn is_open(self) -> bool {
        self.open
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_theme();
    let theme = ctx.theme;
    let set_theme = ctx.set_theme;
    let (menu, set_menu) = signal(MenuState::default());

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <a href="#home" class="text-2xl font-bold text-indigo-600 dark:text-indigo-400">
                    {SITE.identity.name.clone()}
                </a>
                <nav class="hidden md:flex space-x-8">
                    {SITE
                        .nav
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.anchor.clone()
                                    class="text-gray-600 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                >
                                    {item.label.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center space-x-4">
                    <button
                        class="text-gray-600 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400"
                        aria-label="Toggle dark mode"
                        on:click=move |_| set_theme.update(|theme| *theme = theme.toggled())
                    >
                        {move || {
                            if theme.get().is_dark() {
                                Either::Left(view! { <SunIcon /> })
                            } else {
                                Either::Right(view! { <MoonIcon /> })
                            }
                        }}
                    </button>
                    <button
                        class="md:hidden text-gray-600 dark:text-gray-300"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu.update(|menu| *menu = menu.toggle())
                    >
                        {move || if menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                menu.get()
                    .is_open()
                    .then(|| {
                        view! {
                            <nav class="md:hidden bg-white dark:bg-gray-900">
                                {SITE
                                    .nav
                                    .iter()
                                    .map(|item| {
                                        let label = item.label.clone();
                                        view! {
                                            <a
                                                href=item.anchor.clone()
                                                class="block py-2 px-4 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                                                on:click=move |_| {
                                                    set_menu.update(|menu| *menu = menu.close())
                                                }
                                            >
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        }
                    })
            }}
        </header>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg
            class="w-5 h-5"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
        </svg>
    }
}

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg
            class="w-5 h-5"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <circle cx="12" cy="12" r="4"></circle>
            <path d="M12 2v2"></path>
            <path d="M12 20v2"></path>
            <path d="m4.93 4.93 1.41 1.41"></path>
            <path d="m17.66 17.66 1.41 1.41"></path>
            <path d="M2 12h2"></path>
            <path d="M20 12h2"></path>
            <path d="m6.34 17.66-1.41 1.41"></path>
            <path d="m19.07 4.93-1.41 1.41"></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let menu = MenuState::default().toggle();
        assert!(menu.is_open());
        assert!(!menu.toggle().is_open());
    }

    #[test]
    fn test_navigating_closes_open_menu() {
        let menu = MenuState::default().toggle();
        assert!(!menu.close().is_open());
    }

    #[test]
    fn test_close_on_closed_menu_is_noop() {
        assert_eq!(MenuState::default().close(), MenuState::default());
    }
}
