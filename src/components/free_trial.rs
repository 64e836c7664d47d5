use yew::prelude::*;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::checkout::{self, FreeOrderRequest};
use crate::config;
use crate::services::Platform;

const TRIAL_QUANTITY: u32 = 100;

/// Free-trial block: 100 likes for an Instagram post, one order per
/// submit, delivered out of band. There is no confirmation loop here,
/// unlike the paid flow.
#[function_component(FreeTrial)]
pub fn free_trial() -> Html {
    let link = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let is_success = use_state(|| false);

    let on_link_input = {
        let link = link.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            link.set(input.value());
            error.set(None);
        })
    };

    let on_submit = {
        let link = link.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let is_success = is_success.clone();

        Callback::from(move |_: MouseEvent| {
            if *is_loading {
                return;
            }
            let url = match checkout::validate_instagram_link(&link) {
                Ok(url) => url,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            is_loading.set(true);

            let body = FreeOrderRequest {
                url,
                tipo: "curtidas",
                quantidade: TRIAL_QUANTITY,
                plataforma: Platform::Instagram,
            };

            let error = error.clone();
            let is_loading = is_loading.clone();
            let is_success = is_success.clone();
            spawn_local(async move {
                let request = match Request::post(config::free_order_webhook_url()).json(&body) {
                    Ok(request) => request,
                    Err(_) => {
                        error.set(Some("Não foi possível enviar seu pedido. Tente novamente.".to_string()));
                        is_loading.set(false);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => is_success.set(true),
                    _ => error.set(Some("Não foi possível enviar seu pedido. Tente novamente.".to_string())),
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <section class="free-trial-section">
            <div class="free-trial-card">
                <div class="free-trial-badge">{"✨ 100% Grátis"}</div>

                if *is_success {
                    <div class="trial-success">
                        <div class="trial-success-icon">{"✓"}</div>
                        <h3>{"Pedido enviado!"}</h3>
                        <p>{format!("{} curtidas a caminho. Aguarde alguns minutos.", TRIAL_QUANTITY)}</p>
                    </div>
                } else {
                    <>
                        <h2>{"Teste Grátis: 100 Curtidas no Instagram"}</h2>
                        <p class="free-trial-subtitle">
                            {"Cole o link da sua postagem e receba 100 curtidas de graça. \
                              Sem cadastro, sem cartão."}
                        </p>

                        <div class="trial-form">
                            <input
                                type="url"
                                class={classes!("trial-input", error.is_some().then(|| "invalid"))}
                                placeholder="https://instagram.com/p/sua-postagem"
                                value={(*link).clone()}
                                disabled={*is_loading}
                                oninput={on_link_input}
                            />
                            <button class="trial-button" disabled={*is_loading} onclick={on_submit}>
                                if *is_loading {
                                    {"Enviando..."}
                                } else {
                                    {"🎁 Quero Meu Teste Grátis"}
                                }
                            </button>
                        </div>

                        if let Some(message) = (*error).clone() {
                            <p class="field-error">{message}</p>
                        }
                    </>
                }
            </div>

            <style>
                {r#"
                    .free-trial-section {
                        padding: 5rem 1rem;
                        display: flex;
                        justify-content: center;
                    }

                    .free-trial-card {
                        position: relative;
                        width: 100%;
                        max-width: 680px;
                        background: #161616;
                        border: 1px solid rgba(242, 183, 5, 0.2);
                        border-radius: 24px;
                        padding: 3rem 2rem;
                        text-align: center;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
                    }

                    .free-trial-badge {
                        display: inline-block;
                        background: rgba(242, 183, 5, 0.1);
                        color: #f2b705;
                        font-size: 0.85rem;
                        font-weight: 600;
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        margin-bottom: 1rem;
                    }

                    .free-trial-card h2 {
                        color: #fff;
                        font-size: 1.75rem;
                        margin: 0 0 0.75rem 0;
                    }

                    .free-trial-subtitle {
                        color: #999;
                        margin: 0 0 2rem 0;
                    }

                    .trial-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    @media (min-width: 640px) {
                        .trial-form {
                            flex-direction: row;
                        }
                    }

                    .trial-input {
                        flex: 1;
                        padding: 0.9rem 1rem;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        border-radius: 12px;
                    }

                    .trial-input.invalid {
                        border-color: #FF4B4B;
                    }

                    .trial-button {
                        padding: 0.9rem 1.5rem;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(45deg, #f2b705, #e0a800);
                        color: #1a1a1a;
                        font-weight: 700;
                        cursor: pointer;
                        white-space: nowrap;
                        transition: all 0.3s ease;
                    }

                    .trial-button:hover:not(:disabled) {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 20px rgba(242, 183, 5, 0.3);
                    }

                    .trial-button:disabled {
                        opacity: 0.7;
                        cursor: default;
                    }

                    .field-error {
                        color: #FF4B4B;
                        font-size: 0.8rem;
                        margin: 0.75rem 0 0 0;
                    }

                    .trial-success {
                        padding: 1rem 0;
                    }

                    .trial-success-icon {
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

                    .trial-success h3 {
                        color: #fff;
                        margin: 0 0 0.5rem 0;
                    }

                    .trial-success p {
                        color: #999;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}
