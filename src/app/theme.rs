use leptos::prelude::*;

/// Class marker applied to the document root while dark mode is active.
/// All dark-variant styling keys off this.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Theme value threaded through the component tree instead of each
/// component reaching for the document on its own. One writer (the header
/// toggle), any number of readers.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

pub fn provide_theme() {
    let (theme, set_theme) = signal(Theme::default());

    // Mirror the active theme onto the document root. Effects never run
    // during server rendering, so this only touches the DOM in the browser.
    Effect::new(move |_| {
        let is_dark = theme.get().is_dark();
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = if is_dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(err) = res {
            log::error!("failed to update root theme class: {err:?}");
        }
    });

    provide_context(ThemeContext { theme, set_theme });
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("Theme context should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_alternates() {
        let theme = Theme::default();
        assert!(theme.toggled().is_dark());
        assert!(!theme.toggled().toggled().is_dark());
    }

    #[test]
    fn test_marker_tracks_flag() {
        // The dark marker is present iff the flag is dark, for any toggle count.
        let mut theme = Theme::default();
        for i in 0..7 {
            theme = theme.toggled();
            assert_eq!(theme.is_dark(), i % 2 == 0);
        }
    }
}
