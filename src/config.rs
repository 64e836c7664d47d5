// All durable state (orders, payment status, QR generation) lives behind
// these n8n webhook endpoints. The site itself has no backend.

pub fn pix_webhook_url() -> &'static str {
    "https://kdm-internet-n8n.tvlueg.easypanel.host/webhook/venda-ebook-pix"
}

pub fn status_webhook_url() -> &'static str {
    "https://kdm-internet-n8n.tvlueg.easypanel.host/webhook/notificacao-mp-ebook-status"
}

pub fn free_order_webhook_url() -> &'static str {
    "https://kdm-internet-n8n.tvlueg.easypanel.host/webhook/pedido-gratis"
}
