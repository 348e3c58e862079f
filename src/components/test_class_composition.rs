use proptest::prelude::*;
use tracing_test::traced_test;

use super::*;
use crate::contracts::ClassRecipe;

#[test]
fn primary_button_paints_with_the_primary_tokens() {
    let list = Button::new().class_list();
    assert!(list.contains("bg-primary"));
    assert!(list.contains("text-primary-foreground"));
    assert!(list.contains("hover:bg-primary/90"));
}

#[test]
fn destructive_button_darkens_on_hover() {
    let list = Button::new().variant(ButtonVariant::Destructive).class_list();
    assert!(list.contains("bg-destructive"));
    assert!(list.contains("text-destructive-foreground"));
    assert!(list.contains("hover:bg-destructive/90"));
}

#[test]
fn secondary_button_uses_the_neutral_pairing() {
    let list = Button::new().variant(ButtonVariant::Secondary).class_list();
    assert!(list.contains("bg-secondary"));
    assert!(list.contains("text-secondary-foreground"));
}

#[test]
fn default_badge_paints_with_the_primary_tokens() {
    let list = Badge::new().class_list();
    assert!(list.contains("bg-primary"));
    assert!(list.contains("text-primary-foreground"));
}

#[test]
fn composition_starts_from_the_shared_base() {
    let classes = Button::new().classes();
    assert!(classes.starts_with("inline-flex items-center justify-center"));

    let badge_classes = Badge::new().classes();
    assert!(badge_classes.starts_with("inline-flex items-center rounded-md border"));
}

#[test]
fn state_fragments_precede_the_variant_fragment() {
    let classes = Button::new().classes();
    let disabled_at = classes
        .find("disabled:opacity-50")
        .expect("state fragment present");
    let variant_at = classes.find("bg-primary").expect("variant fragment present");
    assert!(disabled_at < variant_at);
}

#[test]
fn caller_overrides_land_last_so_they_win() {
    let classes = Button::new().class("bg-muted w-full").classes();
    assert!(classes.ends_with("bg-muted w-full"));

    let badge_classes = Badge::new().class("uppercase").classes();
    assert!(badge_classes.ends_with("uppercase"));
}

#[test]
fn size_fragments_follow_the_variant_fragment() {
    let classes = Button::new().size(ButtonSize::Lg).classes();
    let variant_at = classes.find("bg-primary").expect("variant fragment present");
    let size_at = classes.find("h-10").expect("size fragment present");
    assert!(variant_at < size_at);
}

#[test]
fn icon_size_yields_a_square_hit_target() {
    let list = Button::new().size(ButtonSize::Icon).class_list();
    assert!(list.contains("h-9"));
    assert!(list.contains("w-9"));
}

#[test]
fn disabled_and_loading_flags_append_their_fragments() {
    let list = Button::new().disabled(true).loading(true).class_list();
    assert!(list.contains("pointer-events-none"));
    assert!(list.contains("opacity-50"));
    assert!(list.contains("cursor-wait"));

    let plain = Button::new().class_list();
    assert!(!plain.contains("cursor-wait"));
}

#[test]
fn badge_sizes_swap_padding_and_text_scale() {
    assert!(Badge::new().size(BadgeSize::Sm).class_list().contains("px-2"));
    assert!(Badge::new().class_list().contains("px-2.5"));
    assert!(Badge::new().size(BadgeSize::Lg).class_list().contains("text-sm"));
}

#[test]
#[traced_test]
fn unknown_variant_name_keeps_the_default_recipe() {
    let fallback = Button::new().variant_name("sparkle").classes();
    assert_eq!(fallback, Button::new().classes());
    assert!(logs_contain("unknown button variant"));
}

#[test]
#[traced_test]
fn unknown_size_name_keeps_the_default_recipe() {
    let fallback = Badge::new().size_name("xxl").classes();
    assert_eq!(fallback, Badge::new().classes());
    assert!(logs_contain("unknown badge size"));
}

#[test]
fn known_names_select_the_matching_recipe() {
    assert_eq!(
        Button::new().variant_name("destructive").classes(),
        Button::new().variant(ButtonVariant::Destructive).classes()
    );
    assert_eq!(
        Badge::new().variant_name("outline").size_name("lg").classes(),
        Badge::new()
            .variant(BadgeVariant::Outline)
            .size(BadgeSize::Lg)
            .classes()
    );
}

proptest! {
    #[test]
    fn resolving_twice_yields_identical_strings(
        variant in (0..BUTTON_VARIANTS.len()).prop_map(|index| BUTTON_VARIANTS[index]),
        size in (0..BUTTON_SIZES.len()).prop_map(|index| BUTTON_SIZES[index]),
        disabled in any::<bool>(),
        loading in any::<bool>(),
        class in proptest::option::of("[a-z][a-z0-9-]{0,14}"),
    ) {
        let build = || {
            let mut button = Button::new()
                .variant(variant)
                .size(size)
                .disabled(disabled)
                .loading(loading);
            if let Some(class) = &class {
                button = button.class(class.clone());
            }
            button
        };
        prop_assert_eq!(build().classes(), build().classes());
        prop_assert_eq!(build(), build());
    }

    #[test]
    fn badge_resolution_is_referentially_transparent(
        variant in (0..BADGE_VARIANTS.len()).prop_map(|index| BADGE_VARIANTS[index]),
        size in (0..BADGE_SIZES.len()).prop_map(|index| BADGE_SIZES[index]),
    ) {
        let first = Badge::new().variant(variant).size(size).classes();
        let second = Badge::new().variant(variant).size(size).classes();
        prop_assert_eq!(first, second);
    }
}
