use yew::prelude::*;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::checkout::{self, PixOrderRequest, PixPayment};
use crate::components::payment_modal::PaymentModal;
use crate::config;
use crate::services::{format_brl, format_quantity, Pricing, Service};

#[derive(Properties, PartialEq)]
pub struct PurchaseModalProps {
    pub service: &'static Service,
    pub on_close: Callback<()>,
    pub on_expired: Callback<()>,
}

#[function_component(PurchaseModal)]
pub fn purchase_modal(props: &PurchaseModalProps) -> Html {
    let service = props.service;
    let quantity = use_state(|| service.default_quantity());
    let link = use_state(String::new);
    let link_error = use_state(|| None::<String>);
    let request_error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let pix_data = use_state(|| None::<PixPayment>);

    // Once the PIX charge exists the payment dialog takes over entirely.
    if let Some(payment) = (*pix_data).clone() {
        let on_back = {
            let pix_data = pix_data.clone();
            Callback::from(move |_| pix_data.set(None))
        };
        return html! {
            <PaymentModal
                service={service}
                quantity={*quantity}
                link={(*link).clone()}
                total_price={service.total_price(*quantity)}
                payment={payment}
                on_close={props.on_close.clone()}
                on_back={on_back}
                on_expired={props.on_expired.clone()}
            />
        };
    }

    let total_price = service.total_price(*quantity);

    let on_link_input = {
        let link = link.clone();
        let link_error = link_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            link.set(input.value());
            link_error.set(None);
        })
    };

    let on_quantity_change = {
        let quantity = quantity.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let requested = input.value().parse::<u32>().unwrap_or(0);
            quantity.set(service.adjust_quantity(requested, *quantity));
        })
    };

    let on_continue = {
        let quantity = quantity.clone();
        let link = link.clone();
        let link_error = link_error.clone();
        let request_error = request_error.clone();
        let is_loading = is_loading.clone();
        let pix_data = pix_data.clone();

        Callback::from(move |_: MouseEvent| {
            if *is_loading {
                return;
            }
            let url = match checkout::validate_link(&link) {
                Ok(url) => url,
                Err(err) => {
                    link_error.set(Some(err.to_string()));
                    return;
                }
            };
            link_error.set(None);
            request_error.set(None);
            is_loading.set(true);

            let body = PixOrderRequest {
                url,
                package_id: service.package(*quantity).map(|pkg| pkg.package_id),
                servico: service.name,
                valor: service.total_price(*quantity),
                service_id: service.id,
                quantidade: *quantity,
            };

            let request_error = request_error.clone();
            let is_loading = is_loading.clone();
            let pix_data = pix_data.clone();
            spawn_local(async move {
                let failed = || Some("Erro ao gerar PIX. Tente novamente.".to_string());
                let request = match Request::post(config::pix_webhook_url()).json(&body) {
                    Ok(request) => request,
                    Err(_) => {
                        request_error.set(failed());
                        is_loading.set(false);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<serde_json::Value>().await {
                            Ok(body) => match checkout::parse_pix_response(body) {
                                Some(payment) => pix_data.set(Some(payment)),
                                // a 2xx without the QR image is still a failure
                                None => request_error.set(failed()),
                            },
                            Err(_) => request_error.set(failed()),
                        }
                    }
                    _ => request_error.set(failed()),
                }
                is_loading.set(false);
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let quantity_controls = match service.pricing {
        Pricing::Packages(options) => {
            let base_unit_price = options
                .first()
                .map(|pkg| pkg.price / pkg.quantity as f64)
                .unwrap_or(0.0);
            html! {
                <div class="package-grid">
                    { options.iter().enumerate().map(|(index, pkg)| {
                        let is_active = *quantity == pkg.quantity;
                        let unit_price = pkg.price / pkg.quantity as f64;
                        let discount = if base_unit_price > 0.0 {
                            ((1.0 - unit_price / base_unit_price) * 100.0).round().max(0.0) as u32
                        } else {
                            0
                        };
                        let select = {
                            let quantity = quantity.clone();
                            let tier = pkg.quantity;
                            Callback::from(move |_: MouseEvent| {
                                quantity.set(service.adjust_quantity(tier, *quantity));
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("package-tile", is_active.then(|| "active"))}
                                disabled={*is_loading}
                                onclick={select}
                            >
                                if discount > 0 && index > 0 {
                                    <span class="discount-tag">{format!("-{}% OFF", discount)}</span>
                                }
                                <span class="package-quantity">{format_quantity(pkg.quantity)}</span>
                                <span class="package-price">{format!("R$ {}", format_brl(pkg.price))}</span>
                            </button>
                        }
                    }).collect::<Html>() }
                </div>
            }
        }
        Pricing::PerUnit {
            min_quantity,
            max_quantity,
            ..
        } => html! {
            <>
                <input
                    type="number"
                    class="quantity-input"
                    value={quantity.to_string()}
                    min={min_quantity.to_string()}
                    max={max_quantity.to_string()}
                    disabled={*is_loading}
                    onchange={on_quantity_change}
                />
                <p class="quantity-bounds">
                    {format!("Mínimo: {} | Máximo: {}", format_quantity(min_quantity), format_quantity(max_quantity))}
                </p>
            </>
        },
    };

    html! {
        <div class="purchase-overlay">
            <div class="purchase-backdrop" onclick={close.clone()}></div>
            <div class="purchase-modal">
                <div class="purchase-header">
                    <h2>{"Configurar Pedido"}</h2>
                    <button class="close-button" onclick={close}>{"✕"}</button>
                </div>

                <div class="purchase-body">
                    <div class="selected-service">
                        <p class="field-hint">{"Serviço selecionado"}</p>
                        <p class="selected-service-name">{service.name}</p>
                    </div>

                    <div>
                        <label class="field-label">{"Quantidade"}</label>
                        {quantity_controls}
                    </div>

                    <div>
                        <label class="field-label">{"Link da Rede Social"}</label>
                        <input
                            type="url"
                            class={classes!("link-input", link_error.is_some().then(|| "invalid"))}
                            placeholder="Cole o link do seu perfil ou postagem"
                            value={(*link).clone()}
                            disabled={*is_loading}
                            oninput={on_link_input}
                        />
                        if let Some(message) = (*link_error).clone() {
                            <p class="field-error">{message}</p>
                        }
                    </div>

                    <div class="price-summary">
                        <div class="summary-row">
                            <span>{"Quantidade"}</span>
                            <span>{format_quantity(*quantity)}</span>
                        </div>
                        {
                            match service.pricing {
                                Pricing::Packages(_) => html! {
                                    <div class="summary-row">
                                        <span>{"Valor selecionado"}</span>
                                        <span>{format!("R$ {}", format_brl(total_price))}</span>
                                    </div>
                                },
                                Pricing::PerUnit { price_per_unit, .. } => html! {
                                    <div class="summary-row">
                                        <span>{"Preço unitário"}</span>
                                        <span>{format!("R$ {}", format_brl(price_per_unit))}</span>
                                    </div>
                                },
                            }
                        }
                        <div class="summary-total">
                            <span>{"Total"}</span>
                            <span class="total-value">{format!("R$ {}", format_brl(total_price))}</span>
                        </div>
                    </div>

                    if let Some(message) = (*request_error).clone() {
                        <div class="error-message">{message}</div>
                    }

                    <button class="continue-button" disabled={*is_loading} onclick={on_continue}>
                        if *is_loading {
                            <span class="button-spinner"></span>
                            {"Gerando PIX..."}
                        } else {
                            {"Continuar para Pagamento →"}
                        }
                    </button>
                </div>
            </div>

            <style>
                {r#"
                    .purchase-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }

                    .purchase-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(4px);
                    }

                    .purchase-modal {
                        position: relative;
                        width: 100%;
                        max-width: 520px;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #161616;
                        border: 1px solid rgba(242, 183, 5, 0.2);
                        border-radius: 24px;
                        box-shadow: 0 24px 60px rgba(0, 0, 0, 0.5);
                    }

                    .purchase-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }

                    .purchase-header h2 {
                        color: #fff;
                        font-size: 1.25rem;
                        margin: 0;
                    }

                    .close-button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.08);
                        color: #999;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    .close-button:hover {
                        color: #fff;
                        background: rgba(255, 255, 255, 0.15);
                    }

                    .purchase-body {
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .selected-service {
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 12px;
                        padding: 1rem;
                    }

                    .field-hint {
                        color: #999;
                        font-size: 0.85rem;
                        margin: 0 0 0.25rem 0;
                    }

                    .selected-service-name {
                        color: #fff;
                        font-weight: 600;
                        margin: 0;
                    }

                    .field-label {
                        display: block;
                        color: #fff;
                        font-size: 0.9rem;
                        font-weight: 500;
                        margin-bottom: 0.75rem;
                    }

                    .package-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.75rem;
                    }

                    .package-tile {
                        position: relative;
                        text-align: left;
                        padding: 0.75rem;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.04);
                        cursor: pointer;
                        transition: all 0.2s ease;
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                    }

                    .package-tile:hover {
                        border-color: rgba(242, 183, 5, 0.4);
                    }

                    .package-tile.active {
                        border-color: #f2b705;
                        background: rgba(242, 183, 5, 0.1);
                        box-shadow: 0 0 24px rgba(242, 183, 5, 0.15);
                    }

                    .package-tile:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }

                    .discount-tag {
                        position: absolute;
                        top: -0.5rem;
                        right: 0.5rem;
                        background: rgba(76, 175, 80, 0.2);
                        color: #4CAF50;
                        font-size: 0.65rem;
                        font-weight: 600;
                        padding: 0.1rem 0.5rem;
                        border-radius: 999px;
                    }

                    .package-quantity {
                        color: #fff;
                        font-weight: 600;
                    }

                    .package-price {
                        color: #f2b705;
                        font-size: 0.9rem;
                        font-weight: 700;
                    }

                    .quantity-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.8rem;
                        text-align: center;
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        border-radius: 12px;
                    }

                    .quantity-bounds {
                        color: #999;
                        font-size: 0.75rem;
                        margin: 0.5rem 0 0 0;
                    }

                    .link-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.8rem 1rem;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        border-radius: 12px;
                    }

                    .link-input.invalid {
                        border-color: #FF4B4B;
                    }

                    .field-error {
                        color: #FF4B4B;
                        font-size: 0.75rem;
                        margin: 0.5rem 0 0 0;
                    }

                    .price-summary {
                        background: rgba(242, 183, 5, 0.08);
                        border: 1px solid rgba(242, 183, 5, 0.2);
                        border-radius: 12px;
                        padding: 1rem;
                    }

                    .summary-row {
                        display: flex;
                        justify-content: space-between;
                        color: #ccc;
                        font-size: 0.9rem;
                        margin-bottom: 0.5rem;
                    }

                    .summary-total {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 0.5rem;
                        margin-top: 0.5rem;
                        color: #fff;
                        font-weight: 600;
                    }

                    .total-value {
                        color: #f2b705;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }

                    .error-message {
                        color: #FF4B4B;
                        background: rgba(255, 75, 75, 0.1);
                        border: 1px solid rgba(255, 75, 75, 0.2);
                        border-radius: 8px;
                        padding: 1rem;
                    }

                    .continue-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        width: 100%;
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

                    .continue-button:hover:not(:disabled) {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 20px rgba(242, 183, 5, 0.3);
                    }

                    .continue-button:disabled {
                        opacity: 0.7;
                        cursor: default;
                    }

                    .button-spinner {
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid rgba(26, 26, 26, 0.2);
                        border-top-color: #1a1a1a;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }

                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
        </div>
    }
}
