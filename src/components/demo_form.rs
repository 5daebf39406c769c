use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::config;
use crate::form::submit::{submit_form, SheetsGateway};
use crate::form::validation::{FormFields, SubmitButton};

/// Where a demo request form sits on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormPlacement {
    Inline,
    Modal,
}

impl FormPlacement {
    pub fn form_id(self) -> &'static str {
        match self {
            FormPlacement::Inline => "demoForm",
            FormPlacement::Modal => "modalDemoForm",
        }
    }
}

fn read_fields(form: &HtmlFormElement) -> FormFields {
    let Ok(data) = FormData::new_with_form(form) else {
        return FormFields::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    FormFields {
        name: field("name"),
        email: field("email"),
        organization: field("organization"),
        role: field("role"),
        message: field("message"),
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoFormProps {
    pub placement: FormPlacement,
    pub submit_label: AttrValue,
    pub on_submitted: Callback<FormPlacement>,
}

#[function_component(DemoForm)]
pub fn demo_form(props: &DemoFormProps) -> Html {
    let button = use_state(|| SubmitButton::new(props.submit_label.to_string()));

    let onsubmit = {
        let button = button.clone();
        let placement = props.placement;
        let label = props.submit_label.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
                return;
            };
            let fields = read_fields(&form);
            let button = button.clone();
            let idle = SubmitButton::new(label.to_string());
            let on_submitted = on_submitted.clone();

            spawn_local(async move {
                let gateway = SheetsGateway::new(config::get_form_endpoint());
                match submit_form(&gateway, &fields, &idle, |state| button.set(state)).await {
                    Ok(_) => {
                        info!("Demo request sent from {}", placement.form_id());
                        form.reset();
                        on_submitted.emit(placement);
                    }
                    Err(e) => alert(&e.to_string()),
                }
            });
        })
    };

    let form_id = props.placement.form_id();
    let field_id = |field: &str| format!("{}-{}", form_id, field);

    html! {
        <form id={form_id} class="demo-form" novalidate={true} {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for={field_id("name")}>{"Full name *"}</label>
                    <input id={field_id("name")} type="text" name="name" required={true} />
                </div>
                <div class="form-group">
                    <label for={field_id("email")}>{"Work email *"}</label>
                    <input id={field_id("email")} type="email" name="email" required={true} />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for={field_id("organization")}>{"Organization *"}</label>
                    <input id={field_id("organization")} type="text" name="organization" required={true} />
                </div>
                <div class="form-group">
                    <label for={field_id("role")}>{"Role"}</label>
                    <input id={field_id("role")} type="text" name="role" />
                </div>
            </div>
            <div class="form-group">
                <label for={field_id("message")}>{"What would you like to see?"}</label>
                <textarea id={field_id("message")} name="message" rows="4"></textarea>
            </div>
            <button type="submit" class="btn btn-primary" disabled={button.disabled}>
                {button.label.clone()}
            </button>
        </form>
    }
}
