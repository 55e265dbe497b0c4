use leptos::{html, prelude::*};

/// Fixed acknowledgement shown after a submission. Nothing is sent
/// anywhere; a real form backend would slot in where the submit handler
/// acknowledges.
pub const CONFIRMATION_MESSAGE: &str = "Thank you! Your message has been sent.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormStatus(Option<&'static str>);

impl FormStatus {
    /// Repeat submissions land on the same message; the status never goes
    /// back to empty while the page is up.
    pub fn acknowledge(&mut self) {
        self.0 = Some(CONFIRMATION_MESSAGE);
    }

    pub fn message(&self) -> Option<&'static str> {
        self.0
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"Get in Touch"</h2>
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(FormStatus::default());

    let field_class = "w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500 dark:bg-gray-800 dark:text-white";
    let label_class = "block text-gray-700 dark:text-gray-300 font-semibold mb-2";

    view! {
        <form
            class="max-w-md mx-auto"
            on:submit=move |ev| {
                // Required-field checks are the browser's; by the time this
                // runs all three fields are present.
                ev.prevent_default();
                let name = name_ref.get_untracked().map(|el| el.value()).unwrap_or_default();
                let email = email_ref.get_untracked().map(|el| el.value()).unwrap_or_default();
                let message = message_ref.get_untracked().map(|el| el.value()).unwrap_or_default();
                log::info!(
                    "contact form submitted by {name} <{email}> ({} chars)",
                    message.len()
                );
                set_status.update(|status| status.acknowledge());
            }
        >
            <div class="mb-4">
                <label for="name" class=label_class>
                    "Name"
                </label>
                <input node_ref=name_ref type="text" id="name" name="name" required class=field_class />
            </div>
            <div class="mb-4">
                <label for="email" class=label_class>
                    "Email"
                </label>
                <input
                    node_ref=email_ref
                    type="email"
                    id="email"
                    name="email"
                    required
                    class=field_class
                />
            </div>
            <div class="mb-4">
                <label for="message" class=label_class>
                    "Message"
                </label>
                <textarea
                    node_ref=message_ref
                    id="message"
                    name="message"
                    required
                    class=field_class
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full bg-indigo-600 text-white py-2 px-4 rounded-md font-semibold hover:bg-indigo-700 transition-colors"
            >
                "Send Message"
            </button>
            {move || {
                status
                    .get()
                    .message()
                    .map(|message| {
                        view! { <p class="mt-4 text-green-600 dark:text-green-400">{message}</p> }
                    })
            }}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(FormStatus::default().message(), None);
    }

    #[test]
    fn test_acknowledge_sets_confirmation() {
        let mut status = FormStatus::default();
        status.acknowledge();
        assert_eq!(status.message(), Some(CONFIRMATION_MESSAGE));
        assert!(!CONFIRMATION_MESSAGE.is_empty());
    }

    #[test]
    fn test_resubmission_is_idempotent() {
        let mut status = FormStatus::default();
        status.acknowledge();
        let first = status;
        status.acknowledge();
        assert_eq!(status, first);
        // never reverts to empty
        assert!(status.message().is_some());
    }
}
