use super::*;
use crate::contracts::ClassRecipe;

const SEMANTIC_NAMES: [&str; 9] = [
    "primary",
    "secondary",
    "destructive",
    "accent",
    "background",
    "foreground",
    "muted",
    "input",
    "ring",
];

fn references_semantic_name(fragment: &str) -> bool {
    SEMANTIC_NAMES.iter().any(|name| fragment.contains(name))
}

#[test]
fn button_variants_stay_semantic_and_hex_free() {
    for variant in BUTTON_VARIANTS {
        let list = Button::new().variant(variant).class_list();
        assert!(
            !list.references_raw_hex(),
            "button/{} leaks a raw color",
            variant.as_str()
        );
        assert!(
            references_semantic_name(variant.classes()),
            "button/{} names no semantic token",
            variant.as_str()
        );
        for class in variant.classes().split_whitespace() {
            assert!(list.contains(class), "button/{} lost {class}", variant.as_str());
        }
    }
}

#[test]
fn badge_variants_stay_semantic_and_hex_free() {
    for variant in BADGE_VARIANTS {
        let list = Badge::new().variant(variant).class_list();
        assert!(
            !list.references_raw_hex(),
            "badge/{} leaks a raw color",
            variant.as_str()
        );
        assert!(
            references_semantic_name(variant.classes()),
            "badge/{} names no semantic token",
            variant.as_str()
        );
        for class in variant.classes().split_whitespace() {
            assert!(list.contains(class), "badge/{} lost {class}", variant.as_str());
        }
    }
}

#[test]
fn size_fragments_carry_no_color_utilities() {
    for size in BUTTON_SIZES {
        for class in size.classes().split_whitespace() {
            assert!(
                !class.starts_with("bg-") && !class.starts_with("text-primary"),
                "button size {} styles color: {class}",
                size.as_str()
            );
        }
    }
    for size in BADGE_SIZES {
        for class in size.classes().split_whitespace() {
            assert!(!class.starts_with("bg-"), "badge size {} styles color: {class}", size.as_str());
        }
    }
}

#[test]
fn variant_names_round_trip_through_the_parser() {
    for variant in BUTTON_VARIANTS {
        assert_eq!(ButtonVariant::from_name(variant.as_str()), Some(variant));
    }
    for size in BUTTON_SIZES {
        assert_eq!(ButtonSize::from_name(size.as_str()), Some(size));
    }
    for variant in BADGE_VARIANTS {
        assert_eq!(BadgeVariant::from_name(variant.as_str()), Some(variant));
    }
    for size in BADGE_SIZES {
        assert_eq!(BadgeSize::from_name(size.as_str()), Some(size));
    }
}

#[test]
fn parser_rejects_names_outside_the_closed_set() {
    assert_eq!(ButtonVariant::from_name("filled"), None);
    assert_eq!(ButtonVariant::from_name("Default"), None);
    assert_eq!(ButtonSize::from_name("md"), None);
    assert_eq!(BadgeVariant::from_name("ghost"), None);
    assert_eq!(BadgeSize::from_name("icon"), None);
}

#[test]
fn catalog_arrays_enumerate_unique_names() {
    let mut button_names = BUTTON_VARIANTS.map(ButtonVariant::as_str).to_vec();
    button_names.sort_unstable();
    button_names.dedup();
    assert_eq!(button_names.len(), BUTTON_VARIANTS.len());

    let mut badge_names = BADGE_VARIANTS.map(BadgeVariant::as_str).to_vec();
    badge_names.sort_unstable();
    badge_names.dedup();
    assert_eq!(badge_names.len(), BADGE_VARIANTS.len());
}

#[test]
fn builders_default_to_the_documented_recipes() {
    assert_eq!(
        Button::new().classes(),
        Button::new()
            .variant(ButtonVariant::Default)
            .size(ButtonSize::Default)
            .classes()
    );
    assert_eq!(
        Badge::new().classes(),
        Badge::new()
            .variant(BadgeVariant::Default)
            .size(BadgeSize::Default)
            .classes()
    );
}
