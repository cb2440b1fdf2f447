use leptos::prelude::document;

/// Class marker on `<html>` that Tailwind `dark:` variants key off of.
const DARK_CLASS: &str = "dark";

/// Visual theme for the whole page. Exactly one variant is active at a time;
/// the value lives in a signal owned by the root component and is never
/// persisted, so a reload starts over at [`Theme::Light`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn dom_class(self) -> &'static str {
        DARK_CLASS
    }
}

/// Mirror the theme onto the document root so `dark:` selectors apply.
///
/// Called from a client-side effect; a page without a document root (or a
/// class list the browser refuses to touch) only costs us the styling, so
/// failures are logged and swallowed.
pub fn apply_to_document(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = if theme.is_dark() {
        classes.add_1(theme.dom_class())
    } else {
        classes.remove_1(theme.dom_class())
    };
    if let Err(err) = res {
        log::warn!("failed to update theme class: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_between_variants() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_even_number_of_toggles_is_identity() {
        let mut theme = Theme::Light;
        for _ in 0..6 {
            theme = theme.toggled();
        }
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_odd_number_of_toggles_flips_once() {
        let mut theme = Theme::Light;
        for _ in 0..7 {
            theme = theme.toggled();
        }
        assert_eq!(theme, Theme::Dark);

        let mut theme = Theme::Dark;
        for _ in 0..3 {
            theme = theme.toggled();
        }
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_dark_flag_matches_variant() {
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
