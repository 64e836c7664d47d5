use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

/// Contact page. The form never had a real endpoint upstream; submission
/// is a local delay followed by the success state.
#[function_component(Contato)]
pub fn contato() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let is_success = use_state(|| false);

    let set_field = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            apply(&mut updated, input.value());
            form.set(updated);
            error.set(None);
        })
    };

    let on_name_change = set_field(|form, value| form.name = value);
    let on_email_change = set_field(|form, value| form.email = value);
    let on_message_change = set_field(|form, value| form.message = value);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let is_success = is_success.clone();

        Callback::from(move |_: MouseEvent| {
            if *is_loading {
                return;
            }
            let current = (*form).clone();
            if current.name.trim().is_empty()
                || current.email.trim().is_empty()
                || current.message.trim().is_empty()
            {
                error.set(Some("Por favor, preencha todos os campos".to_string()));
                return;
            }
            error.set(None);
            is_loading.set(true);

            let is_loading = is_loading.clone();
            let is_success = is_success.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1_500).await;
                is_loading.set(false);
                is_success.set(true);
            });
        })
    };

    html! {
        <div class="contato-page">
            <div class="contato-content">
                <header class="contato-header">
                    <span class="eyebrow">{"Fale Conosco"}</span>
                    <h1>{"Entre em Contato"}</h1>
                    <p>{"Tem alguma dúvida ou precisa de ajuda? Nossa equipe está pronta para atender você."}</p>
                </header>

                <div class="contato-grid">
                    <div class="contact-card">
                        if *is_success {
                            <div class="contact-success">
                                <div class="success-icon">{"✓"}</div>
                                <h3>{"Mensagem enviada com sucesso!"}</h3>
                                <p>{"Retornaremos em breve."}</p>
                            </div>
                        } else {
                            <div class="contact-form">
                                <div>
                                    <label class="field-label">{"Nome"}</label>
                                    <input
                                        type="text"
                                        class="form-input"
                                        placeholder="Seu nome completo"
                                        value={form.name.clone()}
                                        disabled={*is_loading}
                                        onchange={on_name_change}
                                    />
                                </div>
                                <div>
                                    <label class="field-label">{"E-mail"}</label>
                                    <input
                                        type="email"
                                        class="form-input"
                                        placeholder="seu@email.com"
                                        value={form.email.clone()}
                                        disabled={*is_loading}
                                        onchange={on_email_change}
                                    />
                                </div>
                                <div>
                                    <label class="field-label">{"Mensagem"}</label>
                                    <textarea
                                        class="form-input form-textarea"
                                        placeholder="Como podemos ajudar?"
                                        rows="5"
                                        value={form.message.clone()}
                                        disabled={*is_loading}
                                        onchange={on_message_change}
                                    />
                                </div>

                                if let Some(message) = (*error).clone() {
                                    <p class="field-error">{message}</p>
                                }

                                <button class="submit-button" disabled={*is_loading} onclick={on_submit}>
                                    if *is_loading {
                                        {"Enviando..."}
                                    } else {
                                        {"Enviar Mensagem"}
                                    }
                                </button>
                            </div>
                        }
                    </div>

                    <div class="contact-channels">
                        <h3>{"Outros canais"}</h3>
                        <div class="channel-item">
                            <span class="channel-icon">{"✉"}</span>
                            <div>
                                <p class="channel-title">{"E-mail"}</p>
                                <p class="channel-value">{"contato@adquiraseguidor.com"}</p>
                            </div>
                        </div>
                        <div class="channel-item">
                            <span class="channel-icon">{"💬"}</span>
                            <div>
                                <p class="channel-title">{"WhatsApp"}</p>
                                <p class="channel-value">{"Atendimento 24 horas"}</p>
                            </div>
                        </div>
                        <div class="channel-item">
                            <span class="channel-icon">{"📷"}</span>
                            <div>
                                <p class="channel-title">{"Instagram"}</p>
                                <p class="channel-value">{"@adquiraseguidor"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .contato-page {
                        min-height: 100vh;
                        background: #0f0f0f;
                        padding: 7rem 1.5rem 4rem;
                    }

                    .contato-content {
                        max-width: 1000px;
                        margin: 0 auto;
                    }

                    .contato-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .eyebrow {
                        display: inline-block;
                        color: #f2b705;
                        font-size: 0.8rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.75rem;
                    }

                    .contato-header h1 {
                        color: #fff;
                        font-size: 2.5rem;
                        margin: 0 0 1rem 0;
                    }

                    .contato-header p {
                        color: #999;
                        max-width: 36rem;
                        margin: 0 auto;
                    }

                    .contato-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    @media (min-width: 1024px) {
                        .contato-grid {
                            grid-template-columns: 3fr 2fr;
                        }
                    }

                    .contact-card {
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 20px;
                        padding: 2rem;
                    }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }

                    .field-label {
                        display: block;
                        color: #fff;
                        font-size: 0.9rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }

                    .form-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.8rem 1rem;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        border-radius: 12px;
                    }

                    .form-textarea {
                        resize: none;
                        font-family: inherit;
                    }

                    .field-error {
                        color: #FF4B4B;
                        font-size: 0.85rem;
                        margin: 0;
                    }

                    .submit-button {
                        padding: 1rem;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(45deg, #f2b705, #e0a800);
                        color: #1a1a1a;
                        font-size: 1rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .submit-button:hover:not(:disabled) {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 20px rgba(242, 183, 5, 0.3);
                    }

                    .submit-button:disabled {
                        opacity: 0.7;
                        cursor: default;
                    }

                    .contact-success {
                        text-align: center;
                        padding: 2rem 0;
                    }

                    .success-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem auto;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: rgba(76, 175, 80, 0.15);
                        color: #4CAF50;
                        font-size: 2rem;
                    }

                    .contact-success h3 {
                        color: #fff;
                        margin: 0 0 0.5rem 0;
                    }

                    .contact-success p {
                        color: #999;
                        margin: 0;
                    }

                    .contact-channels {
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 20px;
                        padding: 2rem;
                        align-self: start;
                    }

                    .contact-channels h3 {
                        color: #fff;
                        margin: 0 0 1.5rem 0;
                    }

                    .channel-item {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.25rem;
                    }

                    .channel-icon {
                        width: 2.75rem;
                        height: 2.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.15rem;
                        border-radius: 12px;
                        background: rgba(242, 183, 5, 0.1);
                    }

                    .channel-title {
                        color: #fff;
                        font-weight: 600;
                        font-size: 0.95rem;
                        margin: 0;
                    }

                    .channel-value {
                        color: #999;
                        font-size: 0.85rem;
                        margin: 0;
                    }
                "#}
            </style>
        </div>
    }
}
