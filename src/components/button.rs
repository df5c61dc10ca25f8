use web_sys::Element;
use yew::prelude::*;

use crate::utils::cn;

/// Classes every button carries regardless of variant or size
pub const BASE_CLASSES: &str = "button inline-flex items-center justify-center rounded-md";

/// Attributes owned by the button itself or managed by its props. Pass-through
/// attributes with these names are dropped.
pub const RESERVED_ATTRS: [&str; 7] = [
    "type",
    "aria-label",
    "class",
    "onclick",
    "id",
    "title",
    "disabled",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "button-default",
            ButtonVariant::Destructive => "button-destructive",
            ButtonVariant::Outline => "button-outline",
            ButtonVariant::Secondary => "button-secondary",
            ButtonVariant::Ghost => "button-ghost",
            ButtonVariant::Link => "button-link",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub const fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4",
            ButtonSize::Sm => "h-9 px-3",
            ButtonSize::Lg => "h-11 px-8",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

/// Final class string: base, variant, size, then caller classes
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    cn([BASE_CLASSES, variant.classes(), size.classes(), class])
}

/// Caller attributes that may be applied to the element, in order
pub fn filter_passthrough_attrs(
    attrs: &[(AttrValue, AttrValue)],
) -> impl Iterator<Item = (&str, &str)> {
    attrs
        .iter()
        .filter(|(name, _)| {
            !RESERVED_ATTRS
                .iter()
                .any(|reserved| reserved.eq_ignore_ascii_case(name.trim()))
        })
        .map(|(name, value)| (name.as_str(), value.as_str()))
}

/// Sets the allowed pass-through attributes and returns the names applied
fn apply_passthrough_attrs(element: &Element, attrs: &[(AttrValue, AttrValue)]) -> Vec<String> {
    filter_passthrough_attrs(attrs)
        .filter_map(|(name, value)| match element.set_attribute(name, value) {
            Ok(()) => Some(name.to_string()),
            Err(_) => {
                web_sys::console::warn_1(
                    &format!("Failed to set button attribute '{name}'").into(),
                );
                None
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,

    #[prop_or_default]
    pub size: ButtonSize,

    /// Extra classes merged after the variant and size classes
    #[prop_or_default]
    pub class: AttrValue,

    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,

    #[prop_or_default]
    pub aria_label: Option<AttrValue>,

    #[prop_or_default]
    pub id: Option<AttrValue>,

    #[prop_or_default]
    pub title: Option<AttrValue>,

    #[prop_or_default]
    pub disabled: bool,

    /// Forwarded to the underlying `<button>`
    #[prop_or_default]
    pub node_ref: NodeRef,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    /// Arbitrary attributes set on the element after mount
    #[prop_or_default]
    pub attrs: Vec<(AttrValue, AttrValue)>,

    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_classes(props.variant, props.size, &props.class);

    {
        let node_ref = props.node_ref.clone();
        use_effect_with(props.attrs.clone(), move |attrs| {
            let element = node_ref.cast::<Element>();
            let applied: Vec<String> = element
                .as_ref()
                .map(|element| apply_passthrough_attrs(element, attrs))
                .unwrap_or_default();

            // Attributes dropped from a later render must not linger
            move || {
                if let Some(element) = element {
                    for name in &applied {
                        if element.remove_attribute(name).is_err() {
                            web_sys::console::warn_1(
                                &format!("Failed to remove button attribute '{name}'").into(),
                            );
                        }
                    }
                }
            }
        });
    }

    html! {
        <button
            ref={props.node_ref.clone()}
            type={props.button_type.clone()}
            {class}
            id={props.id.clone()}
            title={props.title.clone()}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </button>
    }
}
