/// Button that asks for confirmation before running its click handler

use yew::prelude::*;
use patternfly_yew::prelude::*;
use crate::dom::WindowPrompt;
use crate::guard::ConfirmGuard;

#[derive(Properties, PartialEq)]
pub struct ConfirmButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or_default]
    pub message: Option<String>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or(ButtonVariant::Danger)]
    pub variant: ButtonVariant,
    #[prop_or(false)]
    pub block: bool,
}

#[function_component(ConfirmButton)]
pub fn confirm_button(props: &ConfirmButtonProps) -> Html {
    // Captured once per message so every click shows the same text
    let guard = use_memo(props.message.clone(), |message| ConfirmGuard::new(message.clone()));

    let onclick = {
        let guard = guard.clone();
        let onclick = props.onclick.clone();

        Callback::from(move |e: MouseEvent| {
            let event: &web_sys::Event = e.as_ref();
            if guard.intercept(&WindowPrompt, event).is_accepted() {
                onclick.emit(e);
            }
        })
    };

    html! {
        <Button
            onclick={onclick}
            disabled={props.disabled}
            variant={props.variant.clone()}
            block={props.block}
        >
            {props.children.clone()}
        </Button>
    }
}
