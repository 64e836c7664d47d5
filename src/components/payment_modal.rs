use gloo_net::http::Request;
use gloo_timers::callback::{Interval, Timeout};
use serde_json::Value;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::checkout::{
    self, PixPayment, StatusCheckRequest, PIX_TTL_SECONDS, STATUS_POLL_INTERVAL_MS,
};
use crate::config;
use crate::services::{format_brl, format_quantity, Service};

const COPY_INDICATOR_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct PaymentModalProps {
    pub service: &'static Service,
    pub quantity: u32,
    pub link: String,
    pub total_price: f64,
    pub payment: PixPayment,
    pub on_close: Callback<()>,
    pub on_back: Callback<()>,
    pub on_expired: Callback<()>,
}

pub enum PaymentModalMsg {
    Tick,
    Poll,
    Status(bool),
    Copy,
    Copied,
    CopyFailed,
    ResetCopied,
}

/// Payment dialog state machine: `pending -> approved` (terminal) or
/// `pending -> expired` (terminal). Both timers live as struct fields so
/// that dropping the component, or the approval latch, cancels them.
pub struct PaymentModal {
    seconds_left: u32,
    approved: bool,
    expired: bool,
    copied: bool,
    copy_error: Option<String>,
    countdown: Option<Interval>,
    poller: Option<Interval>,
    copy_reset: Option<Timeout>,
}

impl PaymentModal {
    fn stop_timers(&mut self) {
        // Interval cancels the underlying JS timer on drop.
        self.countdown = None;
        self.poller = None;
    }

    fn status_request(ctx: &Context<Self>) -> StatusCheckRequest {
        let props = ctx.props();
        StatusCheckRequest {
            payment_id: props.payment.payment_id.clone(),
            qr_code_copy_paste: props.payment.copy_paste_code.clone(),
            service_id: props.service.id,
            servico: props.service.name,
            url: props.link.clone(),
        }
    }
}

/// One polling round. Every failure mode maps to "still pending": an
/// unreachable webhook must not interrupt the awaiting-payment state.
async fn check_status(body: StatusCheckRequest) -> bool {
    let request = match Request::post(config::status_webhook_url()).json(&body) {
        Ok(request) => request,
        Err(_) => return false,
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(_) => return false,
    };
    if !response.ok() {
        return false;
    }
    match response.json::<Value>().await {
        Ok(body) => checkout::payment_approved(&checkout::first_payload(body)),
        Err(_) => false,
    }
}

impl Component for PaymentModal {
    type Message = PaymentModalMsg;
    type Properties = PaymentModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let countdown = {
            let link = ctx.link().clone();
            Interval::new(1_000, move || link.send_message(PaymentModalMsg::Tick))
        };
        let poller = {
            let link = ctx.link().clone();
            Interval::new(STATUS_POLL_INTERVAL_MS, move || {
                link.send_message(PaymentModalMsg::Poll)
            })
        };

        Self {
            seconds_left: PIX_TTL_SECONDS,
            approved: false,
            expired: false,
            copied: false,
            copy_error: None,
            countdown: Some(countdown),
            poller: Some(poller),
            copy_reset: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PaymentModalMsg::Tick => {
                // Approval latches: a tick racing the approval response
                // must never reopen the expiry path.
                if self.approved || self.expired {
                    return false;
                }
                self.seconds_left = self.seconds_left.saturating_sub(1);
                if self.seconds_left == 0 {
                    self.expired = true;
                    self.stop_timers();
                    ctx.props().on_expired.emit(());
                }
                true
            }
            PaymentModalMsg::Poll => {
                if self.approved || self.expired {
                    return false;
                }
                let body = Self::status_request(ctx);
                ctx.link()
                    .send_future(async move { PaymentModalMsg::Status(check_status(body).await) });
                false
            }
            PaymentModalMsg::Status(approved) => {
                if !approved || self.approved || self.expired {
                    return false;
                }
                self.approved = true;
                self.stop_timers();
                true
            }
            PaymentModalMsg::Copy => {
                let code = ctx.props().payment.copy_paste_code.clone();
                ctx.link().send_future(async move {
                    let Some(window) = web_sys::window() else {
                        return PaymentModalMsg::CopyFailed;
                    };
                    let clipboard = window.navigator().clipboard();
                    match JsFuture::from(clipboard.write_text(&code)).await {
                        Ok(_) => PaymentModalMsg::Copied,
                        Err(_) => PaymentModalMsg::CopyFailed,
                    }
                });
                false
            }
            PaymentModalMsg::Copied => {
                self.copied = true;
                self.copy_error = None;
                let link = ctx.link().clone();
                self.copy_reset = Some(Timeout::new(COPY_INDICATOR_MS, move || {
                    link.send_message(PaymentModalMsg::ResetCopied)
                }));
                true
            }
            PaymentModalMsg::CopyFailed => {
                self.copy_error = Some("Erro ao copiar código".to_string());
                true
            }
            PaymentModalMsg::ResetCopied => {
                self.copied = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let back = {
            let on_back = props.on_back.clone();
            Callback::from(move |_: MouseEvent| on_back.emit(()))
        };
        let copy = ctx.link().callback(|_: MouseEvent| PaymentModalMsg::Copy);

        let timer_class = if self.seconds_left < 60 {
            "timer-value expiring"
        } else {
            "timer-value"
        };

        html! {
            <div class="payment-overlay">
                <div class="payment-backdrop" onclick={close.clone()}></div>
                <div class="payment-modal">
                    <div class="payment-header">
                        <div class="payment-header-left">
                            <button class="back-button" onclick={back}>{"←"}</button>
                            <h2>{"Pagamento via PIX"}</h2>
                        </div>
                        <button class="close-button" onclick={close}>{"✕"}</button>
                    </div>

                    <div class="payment-body">
                        <div class="timer-row">
                            <span>{"Expira em"}</span>
                            <span class={timer_class}>{checkout::format_seconds(self.seconds_left)}</span>
                        </div>

                        <div class="qr-section">
                            <div class="qr-frame">
                                <img
                                    src={checkout::qr_image_src(&props.payment.qr_code_base64)}
                                    alt="QR Code PIX"
                                />
                            </div>
                            <p class="qr-hint">{"Escaneie o QR Code com o app do seu banco"}</p>
                        </div>

                        <div class="divider">
                            <span>{"ou"}</span>
                        </div>

                        <div>
                            <label class="field-label">{"PIX Copia e Cola"}</label>
                            <div class="copy-paste-box">
                                <div class="copy-paste-code">{&props.payment.copy_paste_code}</div>
                                <button
                                    class={classes!("copy-button", self.copied.then(|| "copied"))}
                                    onclick={copy}
                                >
                                    { if self.copied { "✓" } else { "⧉" } }
                                </button>
                            </div>
                            if let Some(message) = self.copy_error.clone() {
                                <p class="field-error">{message}</p>
                            }
                        </div>

                        <div class="order-summary">
                            <div class="summary-row">
                                <span>{"Serviço"}</span>
                                <span>{props.service.name}</span>
                            </div>
                            <div class="summary-row">
                                <span>{"Quantidade"}</span>
                                <span>{format_quantity(props.quantity)}</span>
                            </div>
                            <div class="summary-total">
                                <span>{"Total"}</span>
                                <span class="total-value">{format!("R$ {}", format_brl(props.total_price))}</span>
                            </div>
                        </div>

                        <div class={classes!("status-banner", self.approved.then(|| "approved"))}>
                            <div class="status-dot"></div>
                            <span>
                                { if self.approved { "Pagamento aprovado!" } else { "Aguardando pagamento..." } }
                            </span>
                        </div>

                        <p class="payment-note">
                            {"Após o pagamento, seu pedido será processado automaticamente. \
                              Fechar esta janela cancela a cobrança atual."}
                        </p>
                    </div>
                </div>

                <style>
                    {r#"
                        .payment-overlay {
                            position: fixed;
                            inset: 0;
                            z-index: 999;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            padding: 1rem;
                        }

                        .payment-backdrop {
                            position: absolute;
                            inset: 0;
                            background: rgba(0, 0, 0, 0.8);
                            backdrop-filter: blur(6px);
                        }

                        .payment-modal {
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

                        .payment-header {
                            position: sticky;
                            top: 0;
                            display: flex;
                            align-items: center;
                            justify-content: space-between;
                            padding: 1.5rem;
                            background: #161616;
                            border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                            z-index: 10;
                        }

                        .payment-header-left {
                            display: flex;
                            align-items: center;
                            gap: 0.75rem;
                        }

                        .payment-header h2 {
                            color: #fff;
                            font-size: 1.25rem;
                            margin: 0;
                        }

                        .back-button,
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

                        .back-button:hover,
                        .close-button:hover {
                            color: #fff;
                            background: rgba(255, 255, 255, 0.15);
                        }

                        .payment-body {
                            padding: 1.5rem;
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                        }

                        .timer-row {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 0.5rem;
                            color: #999;
                            font-size: 0.9rem;
                        }

                        .timer-value {
                            font-family: monospace;
                            font-weight: 700;
                            color: #f2b705;
                        }

                        .timer-value.expiring {
                            color: #FF4B4B;
                        }

                        .qr-section {
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                        }

                        .qr-frame {
                            width: 14rem;
                            height: 14rem;
                            background: #fff;
                            border-radius: 16px;
                            padding: 0.75rem;
                            margin-bottom: 1rem;
                            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                        }

                        .qr-frame img {
                            width: 100%;
                            height: 100%;
                            object-fit: contain;
                        }

                        .qr-hint {
                            color: #999;
                            font-size: 0.85rem;
                            text-align: center;
                            margin: 0;
                        }

                        .divider {
                            display: flex;
                            align-items: center;
                            gap: 1rem;
                            color: #999;
                            font-size: 0.85rem;
                        }

                        .divider::before,
                        .divider::after {
                            content: "";
                            flex: 1;
                            height: 1px;
                            background: rgba(255, 255, 255, 0.1);
                        }

                        .field-label {
                            display: block;
                            color: #fff;
                            font-size: 0.9rem;
                            font-weight: 500;
                            margin-bottom: 0.5rem;
                        }

                        .copy-paste-box {
                            position: relative;
                        }

                        .copy-paste-code {
                            background: rgba(255, 255, 255, 0.05);
                            border-radius: 12px;
                            padding: 1rem 3.5rem 1rem 1rem;
                            font-family: monospace;
                            font-size: 0.75rem;
                            color: #999;
                            word-break: break-all;
                            max-height: 6rem;
                            overflow-y: auto;
                        }

                        .copy-button {
                            position: absolute;
                            right: 0.5rem;
                            top: 50%;
                            transform: translateY(-50%);
                            width: 2.5rem;
                            height: 2.5rem;
                            border: none;
                            border-radius: 8px;
                            background: rgba(242, 183, 5, 0.2);
                            color: #f2b705;
                            font-size: 1.1rem;
                            cursor: pointer;
                            transition: all 0.2s ease;
                        }

                        .copy-button:hover {
                            background: rgba(242, 183, 5, 0.3);
                        }

                        .copy-button.copied {
                            background: rgba(76, 175, 80, 0.2);
                            color: #4CAF50;
                        }

                        .field-error {
                            color: #FF4B4B;
                            font-size: 0.75rem;
                            margin: 0.5rem 0 0 0;
                        }

                        .order-summary {
                            background: rgba(255, 255, 255, 0.05);
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
                            font-size: 1.25rem;
                            font-weight: 700;
                        }

                        .status-banner {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 0.75rem;
                            padding: 1rem;
                            border-radius: 12px;
                            background: rgba(242, 183, 5, 0.1);
                            border: 1px solid rgba(242, 183, 5, 0.2);
                            color: #f2b705;
                            font-size: 0.9rem;
                            font-weight: 500;
                        }

                        .status-banner .status-dot {
                            width: 0.75rem;
                            height: 0.75rem;
                            border-radius: 50%;
                            background: #f2b705;
                            animation: pulse 1.5s ease-in-out infinite;
                        }

                        .status-banner.approved {
                            background: rgba(76, 175, 80, 0.1);
                            border-color: rgba(76, 175, 80, 0.3);
                            color: #4CAF50;
                        }

                        .status-banner.approved .status-dot {
                            background: #4CAF50;
                            animation: none;
                        }

                        @keyframes pulse {
                            0%, 100% { opacity: 1; }
                            50% { opacity: 0.4; }
                        }

                        .payment-note {
                            color: #777;
                            font-size: 0.75rem;
                            text-align: center;
                            margin: 0;
                        }
                    "#}
                </style>
            </div>
        }
    }
}
