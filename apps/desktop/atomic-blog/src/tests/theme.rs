use crate::theme::FakeDarkMode;

/// **VALUE**: Verifies the toggle flips state and the button shows the other mode.
///
/// **WHY THIS MATTERS**: The icon tells the user what pressing the button will do.
///
/// **BUG THIS CATCHES**: Would catch swapped icons or a toggle returning the old state.
#[test]
fn given_light_mode_when_toggled_then_dark_with_sun_icon() {
    // GIVEN: Dark mode off
    let mut mode = FakeDarkMode::default();
    assert_eq!(mode.icon(), "🌙");
    assert_eq!(mode.css_class(), None);

    // WHEN: Toggling
    let enabled = mode.toggle();

    // THEN: Enabled, sun icon, class applied
    assert!(enabled);
    assert!(mode.is_enabled());
    assert_eq!(mode.icon(), "☀️");
    assert_eq!(mode.css_class(), Some("fake-dark-mode"));

    // AND: Toggling again restores light mode
    assert!(!mode.toggle());
    assert_eq!(mode.icon(), "🌙");
}
