use std::time::Duration;

use leptos::{either::Either, prelude::*};

/// How long the splash screen stays up before the page mounts.
pub const LOADING_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadingPhase {
    /// One-way transition; finishing an already-ready gate is a no-op.
    pub fn finish(self) -> Self {
        Self::Ready
    }

    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Holds its children back behind a spinner until [`LOADING_DELAY`] has
/// elapsed, then mounts them in one pass. The scheduled flip is cancelled
/// if the gate is dropped first, so nothing mutates after teardown.
#[component]
pub fn LoadingGate(children: ChildrenFn) -> impl IntoView {
    let (phase, set_phase) = signal(LoadingPhase::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        if pending.with_value(Option::is_some) {
            return;
        }
        let scheduled = set_timeout_with_handle(
            move || set_phase.update(|phase| *phase = phase.finish()),
            LOADING_DELAY,
        );
        match scheduled {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => log::error!("failed to schedule loading timer: {err:?}"),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        {move || {
            if phase.get().is_loading() {
                Either::Left(view! { <Spinner /> })
            } else {
                Either::Right(children())
            }
        }}
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-white dark:bg-gray-900">
            <div
                class="w-16 h-16 border-4 border-indigo-600 border-t-transparent rounded-full animate-spin"
                aria-label="Loading"
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        assert!(LoadingPhase::default().is_loading());
    }

    #[test]
    fn test_finish_is_one_way() {
        let phase = LoadingPhase::default().finish();
        assert!(!phase.is_loading());
        // finishing again never reverts
        assert_eq!(phase.finish(), LoadingPhase::Ready);
    }

    #[test]
    fn test_delay_is_two_seconds() {
        assert_eq!(LOADING_DELAY, Duration::from_millis(2000));
    }
}
