use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::purchase_modal::PurchaseModal;
use crate::services::{self, format_brl, format_quantity, Platform, Pricing, Service};

const NOTICE_DISMISS_MS: u32 = 5_000;

#[function_component(Servicos)]
pub fn servicos() -> Html {
    let selected_platform = use_state(|| Platform::Instagram);
    let selected_service = use_state(|| None::<&'static Service>);
    let notice = use_state(|| None::<String>);

    let close_flow = {
        let selected_service = selected_service.clone();
        Callback::from(move |_| selected_service.set(None))
    };

    // Expiry ends the whole flow: both dialogs unmount and the user is
    // back on the catalog with a dismissable notice.
    let on_expired = {
        let selected_service = selected_service.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            selected_service.set(None);
            notice.set(Some("Tempo expirado! Gere um novo PIX.".to_string()));
            let notice = notice.clone();
            Timeout::new(NOTICE_DISMISS_MS, move || notice.set(None)).forget();
        })
    };

    let platform_meta = *selected_platform;

    html! {
        <div class="servicos-page">
            <div class="servicos-content">
                <header class="servicos-header">
                    <span class="eyebrow">{"Catálogo Completo"}</span>
                    <h1>{"Nossos Serviços"}</h1>
                    <p>{"Escolha a plataforma e veja todos os serviços disponíveis."}</p>
                </header>

                <nav class="platform-selector" aria-label="Selecionar plataforma">
                    { Platform::ALL.iter().map(|platform| {
                        let is_active = *selected_platform == *platform;
                        let select = {
                            let selected_platform = selected_platform.clone();
                            let platform = *platform;
                            Callback::from(move |_: MouseEvent| selected_platform.set(platform))
                        };
                        html! {
                            <button
                                class={classes!("platform-tab", is_active.then(|| "active"))}
                                onclick={select}
                            >
                                <span class={classes!("platform-badge", platform.css_class())}></span>
                                <span class="platform-name">{platform.name()}</span>
                            </button>
                        }
                    }).collect::<Html>() }
                </nav>

                <section class="service-grid">
                    { services::services_for(platform_meta).map(|service| {
                        let open = {
                            let selected_service = selected_service.clone();
                            Callback::from(move |_: MouseEvent| selected_service.set(Some(service)))
                        };
                        let bounds = match service.pricing {
                            Pricing::PerUnit { min_quantity, max_quantity, .. } => html! {
                                <div class="service-bounds">
                                    <span>{format!("Mín: {}", format_quantity(min_quantity))}</span>
                                    <span>{format!("Máx: {}", format_quantity(max_quantity))}</span>
                                </div>
                            },
                            Pricing::Packages(options) => html! {
                                <div class="service-bounds">
                                    <span>{format!("{} pacotes", options.len())}</span>
                                    <span>{format!("a partir de {}", format_quantity(service.default_quantity()))}</span>
                                </div>
                            },
                        };
                        let price_unit = match service.pricing {
                            Pricing::PerUnit { .. } => "por unidade",
                            Pricing::Packages(_) => "pelo menor pacote",
                        };
                        html! {
                            <article class="service-card">
                                <div class="service-card-top">
                                    <div class="service-icons">
                                        <span class={classes!("platform-badge", service.platform.css_class())}></span>
                                        <span class="service-emoji">{service.emoji()}</span>
                                    </div>
                                    <div class="service-price">
                                        <p class="price-hint">{"a partir de"}</p>
                                        <p class="price-value">{format!("R$ {}", format_brl(service.starting_price()))}</p>
                                        <p class="price-hint">{price_unit}</p>
                                    </div>
                                </div>
                                <h3>{service.name}</h3>
                                <p class="service-description">{service.description}</p>
                                {bounds}
                                <button class="buy-button" onclick={open}>
                                    {"🛒 Comprar"}
                                </button>
                            </article>
                        }
                    }).collect::<Html>() }
                </section>
            </div>

            if let Some(message) = (*notice).clone() {
                <div class="flow-notice">{message}</div>
            }

            if let Some(service) = *selected_service {
                <PurchaseModal
                    service={service}
                    on_close={close_flow}
                    on_expired={on_expired}
                />
            }

            <style>
                {r#"
                    .servicos-page {
                        min-height: 100vh;
                        padding: 7rem 1.5rem 4rem;
                        background: #0f0f0f;
                    }

                    .servicos-content {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .servicos-header {
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

                    .servicos-header h1 {
                        color: #fff;
                        font-size: 2.5rem;
                        margin: 0 0 1rem 0;
                    }

                    .servicos-header p {
                        color: #999;
                        max-width: 36rem;
                        margin: 0 auto;
                    }

                    .platform-selector {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }

                    .platform-tab {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 1.5rem;
                        border-radius: 16px;
                        border: 2px solid rgba(255, 255, 255, 0.12);
                        background: #161616;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .platform-tab:hover {
                        border-color: rgba(242, 183, 5, 0.5);
                    }

                    .platform-tab.active {
                        border-color: #f2b705;
                        background: rgba(242, 183, 5, 0.1);
                        box-shadow: 0 0 30px rgba(242, 183, 5, 0.2);
                    }

                    .platform-name {
                        color: #fff;
                        font-weight: 600;
                        font-size: 1.05rem;
                    }

                    .platform-tab.active .platform-name {
                        color: #f2b705;
                    }

                    .platform-badge {
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 10px;
                        display: inline-block;
                    }

                    .platform-badge.instagram {
                        background: linear-gradient(135deg, #ec4899, #9333ea);
                    }

                    .platform-badge.tiktok {
                        background: linear-gradient(135deg, #22d3ee, #ec4899);
                    }

                    .platform-badge.youtube {
                        background: linear-gradient(135deg, #ef4444, #dc2626);
                    }

                    .service-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .service-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .service-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .service-card {
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                        transition: all 0.3s ease;
                        display: flex;
                        flex-direction: column;
                    }

                    .service-card:hover {
                        border-color: rgba(242, 183, 5, 0.5);
                        box-shadow: 0 0 40px rgba(242, 183, 5, 0.1);
                        transform: translateY(-2px);
                    }

                    .service-card-top {
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }

                    .service-icons {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .service-emoji {
                        width: 2.25rem;
                        height: 2.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        border-radius: 10px;
                        background: rgba(242, 183, 5, 0.1);
                        border: 1px solid rgba(242, 183, 5, 0.2);
                    }

                    .service-price {
                        text-align: right;
                    }

                    .price-hint {
                        color: #999;
                        font-size: 0.7rem;
                        margin: 0;
                    }

                    .price-value {
                        color: #f2b705;
                        font-size: 1.15rem;
                        font-weight: 700;
                        margin: 0;
                    }

                    .service-card h3 {
                        color: #fff;
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem 0;
                    }

                    .service-description {
                        color: #999;
                        font-size: 0.9rem;
                        line-height: 1.5;
                        margin: 0;
                        flex: 1;
                    }

                    .service-bounds {
                        display: flex;
                        justify-content: space-between;
                        color: #777;
                        font-size: 0.75rem;
                        margin: 1.25rem 0 0 0;
                    }

                    .buy-button {
                        width: 100%;
                        margin-top: 1.5rem;
                        padding: 0.9rem;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(45deg, #f2b705, #e0a800);
                        color: #1a1a1a;
                        font-weight: 700;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .buy-button:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 20px rgba(242, 183, 5, 0.3);
                    }

                    .flow-notice {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 1100;
                        background: rgba(255, 75, 75, 0.95);
                        color: #fff;
                        padding: 0.9rem 1.5rem;
                        border-radius: 12px;
                        font-weight: 500;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                    }
                "#}
            </style>
        </div>
    }
}
