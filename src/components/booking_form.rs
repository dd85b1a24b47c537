use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use log::{debug, error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom;
use crate::effects::booking::{
    min_booking_date, run_submission, BookingPhase, BookingRequest, BookingSurface, ServiceKind,
    SimulatedSubmitter, FIELD_NAMES,
};
use crate::effects::phone::format_phone;
use crate::effects::validation::{FieldEvent, FieldValidity, FormValidity};

impl Reducible for FormValidity {
    type Action = FieldEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn border_style(validity: FieldValidity) -> Option<String> {
    validity
        .border_color()
        .map(|color| format!("border-color: {};", color))
}

fn read_form_fields(form: &HtmlFormElement) -> HashMap<String, String> {
    let Ok(data) = FormData::new_with_form(form) else {
        return HashMap::new();
    };
    FIELD_NAMES
        .iter()
        .filter_map(|name| data.get(name).as_string().map(|value| (name.to_string(), value)))
        .collect()
}

/// The mounted form and its phase state, as the submission flow sees them.
struct PageSurface {
    form: HtmlFormElement,
    phase: UseStateHandle<BookingPhase>,
}

impl BookingSurface for PageSurface {
    fn set_phase(&self, phase: BookingPhase) {
        self.phase.set(phase);
    }

    fn show_message(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            dom::scroll_smoothly_to(&window, 0.0);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let form_ref = use_node_ref();
    let phase = use_state(BookingPhase::default);
    let validity = use_reducer(FormValidity::default);
    let min_date = use_state(|| min_booking_date(Utc::now().date_naive()));

    let onblur = {
        let dispatcher = validity.dispatcher();
        Callback::from(move |e: FocusEvent| {
            if let Some(control) = e.target().and_then(dom::form_control) {
                dispatcher.dispatch(FieldEvent::Blur {
                    name: control.name,
                    required: control.required,
                    value: control.value,
                });
            }
        })
    };

    let oninput = {
        let dispatcher = validity.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(control) = e.target().and_then(dom::form_control) {
                dispatcher.dispatch(FieldEvent::Input {
                    name: control.name,
                    value: control.value,
                });
            }
        })
    };

    let on_phone_input = {
        let oninput = oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.set_value(&format_phone(&input.value()));
            oninput.emit(e);
        })
    };

    let onsubmit = {
        let form_ref = form_ref.clone();
        let phase = phase.clone();
        let latency_ms = props.config.submit_latency_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !phase.can_submit() {
                debug!("Booking already in flight, ignoring submit");
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                warn!("Booking form is not mounted");
                return;
            };
            let request = match BookingRequest::from_fields(&read_form_fields(&form)) {
                Ok(request) => request,
                Err(err) => {
                    error!("Cannot read booking form: {}", err);
                    return;
                }
            };
            if let Ok(payload) = serde_json::to_string(&request) {
                debug!("Submitting booking {}", payload);
            }

            phase.set(phase.on_submit());
            let surface = PageSurface {
                form,
                phase: phase.clone(),
            };
            spawn_local(async move {
                let submitter = SimulatedSubmitter::new(latency_ms);
                run_submission(&submitter, &request, &surface).await;
            });
        })
    };

    let style_for = |name: &str| border_style(validity.get(name));

    html! {
        <form id="bookingForm" class="booking-form" ref={form_ref} {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    <input type="text" id="name" name="name" required=true
                           style={style_for("name")} onblur={onblur.clone()} oninput={oninput.clone()} />
                </div>
                <div class="form-group">
                    <label for="service">{"Service"}</label>
                    <select id="service" name="service" required=true
                            style={style_for("service")} onblur={onblur.clone()} oninput={oninput.clone()}>
                        <option value="">{"Select a service"}</option>
                        { for ServiceKind::ALL.iter().map(|kind| html! {
                            <option value={kind.code()}>{kind.label()}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="date">{"Preferred Date"}</label>
                    <input type="date" id="date" name="date" required=true min={(*min_date).clone()}
                           style={style_for("date")} onblur={onblur.clone()} oninput={oninput.clone()} />
                </div>
                <div class="form-group">
                    <label for="time">{"Preferred Time"}</label>
                    <input type="time" id="time" name="time" required=true
                           style={style_for("time")} onblur={onblur.clone()} oninput={oninput.clone()} />
                </div>
            </div>
            <div class="form-group">
                <label for="address">{"Address"}</label>
                <input type="text" id="address" name="address" required=true
                       style={style_for("address")} onblur={onblur.clone()} oninput={oninput.clone()} />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input type="tel" id="phone" name="phone" required=true placeholder="(555) 123-4567"
                           style={style_for("phone")} onblur={onblur.clone()} oninput={on_phone_input} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" name="email" required=true
                           style={style_for("email")} onblur={onblur.clone()} oninput={oninput.clone()} />
                </div>
            </div>
            <div class="form-group">
                <label for="notes">{"Anything we should know?"}</label>
                <textarea id="notes" name="notes" rows="3"
                          style={style_for("notes")} onblur={onblur} {oninput} />
            </div>
            <button type="submit" class="submit-btn" disabled={phase.button_disabled()}>
                <span>{phase.button_label()}</span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_follows_validity() {
        assert_eq!(border_style(FieldValidity::Untouched), None);
        assert_eq!(
            border_style(FieldValidity::Invalid).as_deref(),
            Some("border-color: #ef4444;")
        );
    }

    #[test]
    fn test_validity_reducer_applies_events() {
        let state = Rc::new(FormValidity::default());
        let state = state.reduce(FieldEvent::Blur {
            name: "phone".into(),
            required: true,
            value: String::new(),
        });
        assert_eq!(state.get("phone"), FieldValidity::Invalid);
    }
}
