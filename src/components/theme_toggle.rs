use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{MoonIcon, SunIcon};
use crate::config::Config;
use crate::hooks::use_theme::use_theme;
use crate::models::error::ThemeError;
use crate::models::theme::{GlyphVisibility, Theme};
use crate::utils::cn;

/// Classes the toggle always adds ahead of caller classes
pub const TOGGLE_CLASSES: &str = "theme-toggle px-2";

/// Display classes for the (sun, moon) glyphs. Both glyphs are always
/// rendered; the inactive one carries `hidden`.
pub fn glyph_classes(visibility: GlyphVisibility) -> (String, String) {
    let class_for = |name: &str, visible: bool| {
        cn(["theme-glyph", name, if visible { "" } else { "hidden" }])
    };
    (
        class_for("theme-glyph-sun", visibility.sun),
        class_for("theme-glyph-moon", visibility.moon),
    )
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleButtonProps {
    #[prop_or_default]
    pub class: AttrValue,

    #[prop_or(ButtonVariant::Ghost)]
    pub variant: ButtonVariant,

    #[prop_or(ButtonSize::Icon)]
    pub size: ButtonSize,

    #[prop_or_default]
    pub id: Option<AttrValue>,

    #[prop_or_default]
    pub title: Option<AttrValue>,

    #[prop_or_default]
    pub disabled: bool,

    #[prop_or_default]
    pub node_ref: NodeRef,

    /// Runs after the theme has been flipped
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub attrs: Vec<(AttrValue, AttrValue)>,
}

/// Button that flips between light and dark, showing a sun or a moon
#[function_component(ThemeToggleButton)]
pub fn theme_toggle_button(props: &ThemeToggleButtonProps) -> Html {
    let theme_handle = use_theme();

    let (theme, effective_theme) = theme_handle
        .as_ref()
        .map_or((Config::DEFAULT_THEME, Theme::Light), |h| {
            (h.theme, h.effective_theme)
        });

    let (sun_class, moon_class) = glyph_classes(GlyphVisibility::for_theme(effective_theme));

    let onclick = {
        let set_theme = theme_handle.map(|h| h.set_theme);
        let caller_onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            match &set_theme {
                Some(set_theme) => set_theme.emit(theme.toggled()),
                None => web_sys::console::warn_1(&ThemeError::MissingProvider.to_string().into()),
            }
            caller_onclick.emit(event);
        })
    };

    let class = cn([TOGGLE_CLASSES, props.class.as_str()]);

    html! {
        <Button
            node_ref={props.node_ref.clone()}
            variant={props.variant}
            size={props.size}
            class={class}
            aria_label={AttrValue::Static(Config::TOGGLE_LABEL)}
            id={props.id.clone()}
            title={props.title.clone()}
            disabled={props.disabled}
            attrs={props.attrs.clone()}
            {onclick}
        >
            <SunIcon class={sun_class} />
            <MoonIcon class={moon_class} />
        </Button>
    }
}
