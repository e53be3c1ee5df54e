use gloo_timers::callback::Timeout;
use log::info;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animations::{Preset, Transition};
use crate::appointment::model::{
    Complaint, Field, FieldUpdate, Gender, Referral, ServiceType, SinceWhen,
};
use crate::appointment::session::{DomChrome, ModalSession};
use crate::appointment::submission::{
    Completion, HttpSubmitter, SubmissionController, SubmissionError, SubmissionReceipt,
    SubmissionTicket,
};
use crate::appointment::wizard::{AppointmentWizard, SubmitBlocked, WizardStep};
use crate::components::confetti::celebrate;
use crate::Route;

pub enum AppointmentMsg {
    Update(FieldUpdate),
    Next,
    Back,
    Submit,
    Submitted(SubmissionTicket, Result<SubmissionReceipt, SubmissionError>),
    DismissError,
    Close,
}

#[derive(Properties, PartialEq)]
pub struct AppointmentModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub struct AppointmentModal {
    wizard: AppointmentWizard,
    controller: SubmissionController,
    session: Option<ModalSession<DomChrome>>,
    escape: Option<EscapeListener>,
    backdrop_ref: NodeRef,
    dialog_ref: NodeRef,
    needs_focus: bool,
    auto_close: Option<Timeout>,
}

/// Document-level Escape handler, removed on drop. Fires even when focus has
/// fallen back to `<body>`.
struct EscapeListener {
    document: Document,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl EscapeListener {
    fn new(on_escape: Callback<()>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if is_escape(&e.key()) {
                on_escape.emit(());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, callback })
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

impl AppointmentModal {
    fn open(&mut self, ctx: &Context<Self>) {
        info!("Opening booking form");
        self.wizard.reset();
        self.controller.new_session();
        self.auto_close = None;
        self.session = Some(ModalSession::acquire(DomChrome::new(self.dialog_ref.clone())));
        self.escape = EscapeListener::new(ctx.link().callback(|_| AppointmentMsg::Close));
        self.needs_focus = true;
    }

    fn close(&mut self) {
        info!("Closing booking form");
        self.escape = None;
        self.session = None;
        self.auto_close = None;
        self.controller.new_session();
        self.wizard.reset();
    }
}

impl Component for AppointmentModal {
    type Message = AppointmentMsg;
    type Properties = AppointmentModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut modal = Self {
            wizard: AppointmentWizard::new(),
            controller: SubmissionController::new(Rc::new(HttpSubmitter::from_config())),
            session: None,
            escape: None,
            backdrop_ref: NodeRef::default(),
            dialog_ref: NodeRef::default(),
            needs_focus: false,
            auto_close: None,
        };
        if ctx.props().is_open {
            modal.open(ctx);
        }
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        match (old_props.is_open, ctx.props().is_open) {
            (false, true) => self.open(ctx),
            (true, false) => self.close(),
            _ => {}
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.needs_focus {
            if let Some(session) = &self.session {
                session.focus();
            }
            self.needs_focus = false;
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppointmentMsg::Update(update) => self.wizard.update(update),
            AppointmentMsg::Next => {
                self.wizard.next();
                true
            }
            AppointmentMsg::Back => self.wizard.back(),
            AppointmentMsg::Submit => match self.controller.begin(&mut self.wizard) {
                Ok(pending) => {
                    ctx.link().send_future(async move {
                        let (ticket, outcome) = pending.run().await;
                        AppointmentMsg::Submitted(ticket, outcome)
                    });
                    true
                }
                Err(SubmitBlocked::InFlight) => false,
                Err(blocked) => {
                    info!("Booking form not submitted: {}", blocked);
                    true
                }
            },
            AppointmentMsg::Submitted(ticket, outcome) => {
                match self.controller.complete(&mut self.wizard, ticket, outcome) {
                    Completion::Stale => false,
                    completion => {
                        if let Some(delay) = completion.auto_close_after() {
                            celebrate();
                            let link = ctx.link().clone();
                            self.auto_close = Some(Timeout::new(delay, move || {
                                link.send_message(AppointmentMsg::Close);
                            }));
                        }
                        true
                    }
                }
            }
            AppointmentMsg::DismissError => {
                self.wizard.dismiss_failure();
                true
            }
            AppointmentMsg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let backdrop_ref = self.backdrop_ref.clone();
        let on_backdrop_click = ctx.link().batch_callback(move |e: MouseEvent| {
            let on_backdrop = e.target().map(JsValue::from) == backdrop_ref.get().map(JsValue::from);
            on_backdrop.then_some(AppointmentMsg::Close)
        });
        let page = self.wizard.step().page();

        html! {
            <div class="appointment-backdrop" ref={self.backdrop_ref.clone()} onclick={on_backdrop_click}>
                <style>{MODAL_STYLES}</style>
                <div
                    class="appointment-dialog"
                    ref={self.dialog_ref.clone()}
                    tabindex="-1"
                    role="dialog"
                    aria-modal="true"
                    style={Transition::new(Preset::ModalEnter).duration(350).style()}
                >
                    <button class="appointment-close" aria-label="Close modal" onclick={ctx.link().callback(|_| AppointmentMsg::Close)}>
                        {"✕"}
                    </button>
                    <div class="appointment-header">
                        <h2>{"Health Seva Onboarding Form"}</h2>
                    </div>
                    <div class="appointment-layout">
                        <div class="step-indicator">
                            { step_badge(1, "Patient Info", page) }
                            <div class="step-connector"></div>
                            { step_badge(2, "Guardian Info", page) }
                        </div>
                        <div class="appointment-body">
                            {
                                match self.wizard.step() {
                                    WizardStep::Success => self.view_success(),
                                    WizardStep::Step1 => self.view_patient_step(ctx),
                                    WizardStep::Step2 | WizardStep::Submitting => self.view_guardian_step(ctx),
                                }
                            }
                        </div>
                    </div>
                    { self.view_footer(ctx) }
                </div>
            </div>
        }
    }
}

fn step_badge(number: u8, label: &'static str, active_page: u8) -> Html {
    let active = number == active_page;
    html! {
        <div class={classes!("step-badge", active.then_some("active"))}>
            <div class="step-number">{number}</div>
            <span class="step-label">{label}</span>
        </div>
    }
}

fn error_line(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

fn required_label(text: &'static str) -> Html {
    html! {
        <label class="field-label">{text}{" "}<span class="required-mark">{"*"}</span></label>
    }
}

impl AppointmentModal {
    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        placeholder: &'static str,
        input_type: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AppointmentMsg::Update(FieldUpdate::Text(field, input.value()))
        });
        let invalid = self.wizard.errors().contains(field);
        html! {
            <input
                type={input_type}
                class={classes!("form-input", invalid.then_some("invalid"))}
                placeholder={placeholder}
                value={self.wizard.request().text(field).to_string()}
                disabled={!self.wizard.is_editable()}
                {oninput}
            />
        }
    }

    fn choice<T: Copy + 'static>(
        &self,
        ctx: &Context<Self>,
        input_type: &'static str,
        name: &'static str,
        option: T,
        label: &'static str,
        checked: bool,
        to_update: fn(T) -> FieldUpdate,
    ) -> Html {
        let onchange = ctx
            .link()
            .callback(move |_: Event| AppointmentMsg::Update(to_update(option)));
        html! {
            <label class="choice">
                <input type={input_type} name={name} {checked} disabled={!self.wizard.is_editable()} {onchange} />
                <span>{label}</span>
            </label>
        }
    }

    fn view_patient_step(&self, ctx: &Context<Self>) -> Html {
        let request = self.wizard.request();
        let errors = self.wizard.errors();

        html! {
            <div class="form-step" style={Transition::new(Preset::StepEnter).duration(300).style()}>
                <div class="form-column">
                    <div class="form-group">
                        { required_label("Service Requirement") }
                        <div class="choice-list">
                            { for ServiceType::ALL.iter().map(|service| self.choice(
                                ctx, "checkbox", "serviceRequirement", *service, service.label(),
                                request.service_requirement.contains(service), FieldUpdate::ToggleService,
                            )) }
                        </div>
                        { error_line(errors.get(Field::ServiceRequirement)) }
                    </div>
                    <div class="form-group">
                        { required_label("Patient's Name") }
                        <div class="name-row">
                            { self.text_input(ctx, Field::PatientFirstName, "First Name", "text") }
                            { self.text_input(ctx, Field::PatientLastName, "Last Name", "text") }
                        </div>
                        { error_line(errors.first_of(&[Field::PatientFirstName, Field::PatientLastName])) }
                    </div>
                    <div class="form-group">
                        { required_label("Gender") }
                        <div class="choice-row">
                            { for Gender::ALL.iter().map(|gender| self.choice(
                                ctx, "radio", "gender", *gender, gender.label(),
                                request.gender == Some(*gender), FieldUpdate::Gender,
                            )) }
                        </div>
                        { error_line(errors.get(Field::Gender)) }
                    </div>
                    <div class="form-group">
                        { required_label("Age") }
                        { self.text_input(ctx, Field::Age, "Age in years", "number") }
                        { error_line(errors.get(Field::Age)) }
                    </div>
                </div>
                <div class="form-column">
                    <div class="form-group">
                        { required_label("Complaints") }
                        <div class="choice-grid">
                            { for Complaint::ALL.iter().map(|complaint| self.choice(
                                ctx, "checkbox", "complaints", *complaint, complaint.label(),
                                request.complaints.contains(complaint), FieldUpdate::ToggleComplaint,
                            )) }
                        </div>
                        { error_line(errors.get(Field::Complaints)) }
                        if request.mentions_other_complaint() {
                            { self.text_input(ctx, Field::OtherComplaint, "Describe the complaint", "text") }
                            { error_line(errors.get(Field::OtherComplaint)) }
                        }
                    </div>
                    <div class="form-group">
                        { required_label("Since When") }
                        <div class="choice-list">
                            { for SinceWhen::ALL.iter().map(|since| self.choice(
                                ctx, "radio", "sinceWhen", *since, since.label(),
                                request.since_when == Some(*since), FieldUpdate::SinceWhen,
                            )) }
                        </div>
                        { error_line(errors.get(Field::SinceWhen)) }
                    </div>
                    <div class="form-group">
                        <label class="field-label">{"Past Medical History"}</label>
                        <textarea
                            class="form-input"
                            rows="3"
                            placeholder="Diabetes, blood pressure, previous surgeries..."
                            value={request.medical_history.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                AppointmentMsg::Update(FieldUpdate::Text(Field::MedicalHistory, input.value()))
                            })}
                        />
                    </div>
                </div>
            </div>
        }
    }

    fn view_guardian_step(&self, ctx: &Context<Self>) -> Html {
        let request = self.wizard.request();
        let errors = self.wizard.errors();

        html! {
            <div class="form-step" style={Transition::new(Preset::StepEnter).duration(300).style()}>
                if self.wizard.submit_failed() {
                    <div class="submit-error" role="alert">
                        <span>{"We couldn't submit your request. Please try again."}</span>
                        <button onclick={ctx.link().callback(|_| AppointmentMsg::DismissError)}>{"✕"}</button>
                    </div>
                }
                <div class="form-column">
                    <div class="form-group">
                        { required_label("Guardian's Name") }
                        <div class="name-row">
                            { self.text_input(ctx, Field::GuardianFirstName, "First Name", "text") }
                            { self.text_input(ctx, Field::GuardianLastName, "Last Name", "text") }
                        </div>
                        { error_line(errors.first_of(&[Field::GuardianFirstName, Field::GuardianLastName])) }
                    </div>
                    <div class="form-group">
                        { required_label("Guardian's Phone") }
                        { self.text_input(ctx, Field::GuardianPhone, "10-digit mobile number", "tel") }
                        { error_line(errors.get(Field::GuardianPhone)) }
                    </div>
                    <div class="form-group">
                        <label class="field-label">{"Guardian's Email"}</label>
                        { self.text_input(ctx, Field::GuardianEmail, "Email (optional)", "email") }
                        { error_line(errors.get(Field::GuardianEmail)) }
                    </div>
                    <div class="form-group">
                        { required_label("How did you hear about us?") }
                        <div class="choice-list">
                            { for Referral::ALL.iter().map(|referral| self.choice(
                                ctx, "radio", "referral", *referral, referral.label(),
                                request.referral == Some(*referral), FieldUpdate::Referral,
                            )) }
                        </div>
                        { error_line(errors.get(Field::Referral)) }
                    </div>
                </div>
                <div class="form-column">
                    <div class="form-group">
                        { required_label("Patient's Address") }
                        { self.text_input(ctx, Field::AddressStreet, "Street Address", "text") }
                        <div class="name-row">
                            { self.text_input(ctx, Field::AddressLandmark, "Landmark", "text") }
                            { self.text_input(ctx, Field::AddressPin, "Pin Code", "text") }
                        </div>
                        { error_line(errors.first_of(&[Field::AddressStreet, Field::AddressLandmark, Field::AddressPin])) }
                    </div>
                    <div class="form-group consent-box">
                        { required_label("Terms and Conditions") }
                        <div class="consent-text">
                            <p><strong>{"Consent for Medical Consultation and Treatment"}</strong></p>
                            <p>{"I willingly agree to receive medical consultation or treatment from healthcare professionals, including but not limited to doctors, physiotherapists, and nursing staff."}</p>
                            <p>{"By providing my consent, I acknowledge that Health Seva At Your Home, Health Sevak, and their associated personnel have explained the nature of the treatment, potential risks, benefits, and alternative treatment options available to me."}</p>
                            <p>{"I furthermore assume full responsibility for all reasonable charges incurred during the diagnosis and treatment of my dependent."}</p>
                        </div>
                        <label class="choice">
                            <input
                                type="checkbox"
                                checked={request.consent}
                                disabled={!self.wizard.is_editable()}
                                onchange={ctx.link().callback(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    AppointmentMsg::Update(FieldUpdate::Consent(input.checked()))
                                })}
                            />
                            <span>
                                {"I confirm that I fully understand and accept the risks and benefits of the treatment provided, and I consent to my dependent receiving treatment at home. See the "}
                                <Link<Route> to={Route::Terms}>{"terms and conditions"}</Link<Route>>
                                {"."}
                            </span>
                        </label>
                        { error_line(errors.get(Field::Consent)) }
                    </div>
                </div>
            </div>
        }
    }

    fn view_success(&self) -> Html {
        html! {
            <div class="appointment-success" style={Transition::new(Preset::ScaleIn).duration(400).style()}>
                <div class="success-icon">{"✓"}</div>
                <h3>{"Appointment Booked!"}</h3>
                <p>{"Thank you! We'll contact you shortly to confirm your appointment details."}</p>
                <div class="success-note">{"This window will close automatically..."}</div>
            </div>
        }
    }

    fn view_footer(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();
        if step == WizardStep::Success {
            return html! {};
        }
        let submitting = step == WizardStep::Submitting;

        html! {
            <div class="appointment-footer">
                if step == WizardStep::Step1 {
                    <div></div>
                    <button class="primary-button" onclick={ctx.link().callback(|_| AppointmentMsg::Next)}>
                        {"Next →"}
                    </button>
                } else {
                    <button class="secondary-button" disabled={submitting} onclick={ctx.link().callback(|_| AppointmentMsg::Back)}>
                        {"← Back"}
                    </button>
                    <button class="primary-button" disabled={submitting} onclick={ctx.link().callback(|_| AppointmentMsg::Submit)}>
                        if submitting {
                            <span class="loading-spinner"></span>{" Submitting..."}
                        } else {
                            {"Book Appointment"}
                        }
                    </button>
                }
            </div>
        }
    }
}

const MODAL_STYLES: &str = r#"
.appointment-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(8px);
    z-index: 9999;
    display: flex;
    align-items: flex-start;
    justify-content: center;
    padding: 9rem 1rem 1rem;
    overflow-y: auto;
}
.appointment-dialog {
    position: relative;
    background: #fff;
    border-radius: 16px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    max-width: 56rem;
    width: 100%;
    max-height: calc(100vh - 6rem);
    overflow: hidden;
    border: 1px solid #f3f4f6;
    outline: none;
}
.appointment-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    border: none;
    background: transparent;
    border-radius: 50%;
    padding: 0.5rem;
    cursor: pointer;
    color: #6b7280;
}
.appointment-close:hover { background: #f3f4f6; }
.appointment-header {
    padding: 1rem 1.5rem;
    border-bottom: 1px solid #e5e7eb;
    text-align: center;
}
.appointment-header h2 { font-size: 1.25rem; color: #1f2937; margin: 0; }
.appointment-layout { display: flex; width: 100%; }
.step-indicator {
    display: flex;
    flex-direction: column;
    gap: 2rem;
    width: 14rem;
    padding: 2rem 1rem;
    border-right: 1px solid #f3f4f6;
}
.step-badge { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; }
.step-number {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #ccfbf1;
    color: #0f766e;
    font-weight: 600;
}
.step-badge.active .step-number { background: #0d9488; color: #fff; }
.step-label { font-size: 0.875rem; color: #9ca3af; }
.step-badge.active .step-label { color: #0f766e; }
.step-connector { width: 4px; height: 2rem; background: #e5e7eb; margin: 0 auto; border-radius: 2px; }
.appointment-body {
    flex: 1;
    padding: 1rem 2rem;
    max-height: calc(100vh - 16rem);
    overflow-y: auto;
}
.form-step { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.form-column { display: flex; flex-direction: column; gap: 1rem; }
.form-group { display: flex; flex-direction: column; gap: 0.5rem; }
.field-label { font-size: 0.875rem; font-weight: 500; color: #374151; }
.required-mark { color: #ef4444; }
.form-input {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    color: #111827;
}
.form-input:focus { outline: none; border-color: transparent; box-shadow: 0 0 0 2px #3b82f6; }
.form-input.invalid { border-color: #f87171; }
.name-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
.choice-list { display: grid; grid-template-columns: 1fr; gap: 0.5rem; }
.choice-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
.choice-row { display: flex; gap: 1.5rem; }
.choice { display: flex; align-items: flex-start; gap: 0.5rem; font-size: 0.875rem; color: #374151; cursor: pointer; }
.field-error { margin: 0; font-size: 0.875rem; color: #dc2626; }
.consent-text {
    max-height: 10rem;
    overflow-y: auto;
    font-size: 0.8rem;
    color: #4b5563;
    background: #f9fafb;
    border-radius: 8px;
    padding: 0.75rem;
}
.submit-error {
    grid-column: 1 / -1;
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: #fef2f2;
    color: #b91c1c;
    border: 1px solid #fecaca;
    border-radius: 8px;
    padding: 0.75rem 1rem;
}
.submit-error button { border: none; background: transparent; color: inherit; cursor: pointer; }
.appointment-success { text-align: center; padding: 2rem 0; }
.success-icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1rem;
    border-radius: 50%;
    background: #dcfce7;
    color: #16a34a;
    font-size: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.appointment-success h3 { font-size: 1.5rem; color: #1f2937; }
.appointment-success p { color: #4b5563; }
.success-note { font-size: 0.875rem; color: #6b7280; }
.appointment-footer {
    display: flex;
    justify-content: space-between;
    padding: 1rem 1.5rem;
    border-top: 1px solid #e5e7eb;
    background: #f9fafb;
}
.primary-button, .secondary-button {
    padding: 0.6rem 1.5rem;
    border-radius: 8px;
    font-weight: 500;
    cursor: pointer;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.primary-button { background: #0d9488; color: #fff; border: none; }
.primary-button:disabled { opacity: 0.6; cursor: not-allowed; }
.secondary-button { background: #fff; color: #374151; border: 1px solid #d1d5db; }
.loading-spinner {
    display: inline-block;
    width: 16px;
    height: 16px;
    border: 3px solid rgba(255,255,255,.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
@media (max-width: 768px) {
    .appointment-layout { flex-direction: column; }
    .step-indicator {
        flex-direction: row;
        width: 100%;
        justify-content: center;
        padding: 0.5rem;
        border-right: none;
        border-bottom: 1px solid #f3f4f6;
    }
    .step-connector { display: none; }
    .form-step { grid-template-columns: 1fr; }
    .appointment-body { padding: 1rem 0.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_keys_close() {
        assert!(is_escape("Escape"));
        assert!(is_escape("Esc"));
        assert!(!is_escape("Enter"));
        assert!(!is_escape("e"));
    }
}
